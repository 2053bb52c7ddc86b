use crate::language::Language;
use crate::voice::Gender;

#[derive(Debug, thiserror::Error)]
pub enum PapagoError {
    /// The code matches no catalog entry
    #[error("unknown language code: {0:?}")]
    UnknownLanguageCode(String),

    /// The language has no TTS speaker for this gender
    #[error("{gender} voice not supported for {language}")]
    UnsupportedVoice { language: Language, gender: Gender },

    /// Connection, timeout or other HTTP client failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body is not JSON or lacks the expected field
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for PapagoError {
    fn from(e: serde_json::Error) -> Self {
        PapagoError::MalformedResponse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PapagoError>;
