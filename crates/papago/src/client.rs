use std::sync::Arc;

use papago_config::PapagoConfig;

use crate::codec::{self, TranslateOptions};
use crate::error::PapagoError;
use crate::language::Language;
use crate::response::{self, TranslateResult};
use crate::transport::{HttpTransport, Transport};
use crate::voice::Voice;

/// Client for the detect, translate and TTS endpoints.
///
/// Holds no per-call state; clones share the same transport.
#[derive(Clone)]
pub struct Papago {
    config: Arc<PapagoConfig>,
    transport: Arc<dyn Transport>,
}

impl Papago {
    pub fn new(config: PapagoConfig) -> Result<Self, PapagoError> {
        let transport = HttpTransport::new(&config.network)?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: PapagoConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &PapagoConfig {
        &self.config
    }

    /// Guess the language of `text`
    pub async fn detect(&self, text: &str) -> Result<Language, PapagoError> {
        let request = codec::detect_request(&self.config, text);
        let body = self.transport.post(request).await?;
        let language = response::decode_detect(&body)?;

        tracing::debug!(%language, "language detected");
        Ok(language)
    }

    /// Translate `text` and return only the translated string
    pub async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
        options: &TranslateOptions,
    ) -> Result<String, PapagoError> {
        let result = self.translate_full(text, source, target, options).await?;
        Ok(result.text()?.to_string())
    }

    /// Translate `text` and keep the whole decoded response, dictionary included
    pub async fn translate_full(
        &self,
        text: &str,
        source: Language,
        target: Language,
        options: &TranslateOptions,
    ) -> Result<TranslateResult, PapagoError> {
        let request = codec::translate_request(&self.config, text, source, target, options);
        let body = self.transport.post(request).await?;

        tracing::debug!(%source, %target, "translation received");
        response::decode_translate(&body)
    }

    /// Ask the backend to synthesize `text` and return the audio URL.
    ///
    /// The audio itself is not downloaded.
    pub async fn tts(&self, text: &str, voice: &Voice) -> Result<String, PapagoError> {
        let request = codec::tts_request(&self.config, text, voice)?;
        let body = self.transport.post(request).await?;
        response::decode_tts(&body, &self.config.tts_url())
    }
}
