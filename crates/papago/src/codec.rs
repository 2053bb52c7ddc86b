//! Wire payloads for the detect, translate and TTS endpoints.
//!
//! Every request is a form-encoded POST whose keys appear in the exact order the
//! backend's web client sends them. Text is escaped the same way for all three:
//! raw newlines become the two characters `\n`, then the result is
//! percent-encoded with the backslash left intact.

use papago_config::PapagoConfig;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::PapagoError;
use crate::language::Language;
use crate::voice::Voice;

pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

const TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\\');

/// A fully encoded request, ready for a [`Transport`](crate::transport::Transport)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Translation switches sent alongside every translate request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Ask for dictionary entries in the response
    pub dict: bool,
    /// Maximum number of dictionary entries
    pub dict_display: u32,
    pub instant: bool,
    pub paging: bool,
    /// Polite register; only honored for English to Korean
    pub honorific: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            dict: true,
            dict_display: 30,
            instant: false,
            paging: false,
            honorific: false,
        }
    }
}

/// Replace raw newlines with a literal `\n` and percent-encode the rest
pub fn escape_text(text: &str) -> String {
    let escaped = text.replace('\n', "\\n");
    utf8_percent_encode(&escaped, TEXT).to_string()
}

/// Headers every endpoint requires, in send order
pub fn headers(config: &PapagoConfig) -> Vec<(String, String)> {
    let mut headers = vec![
        ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
        ("User-Agent".to_string(), config.network.user_agent.clone()),
    ];

    if !config.authorization.is_empty() {
        headers.push(("Authorization".to_string(), config.authorization.clone()));
    }
    if !config.timestamp.is_empty() {
        headers.push(("Timestamp".to_string(), config.timestamp.clone()));
    }

    headers.extend(config.extra_headers.iter().cloned());
    headers
}

pub fn detect_request(config: &PapagoConfig, text: &str) -> WireRequest {
    WireRequest {
        url: config.detect_url(),
        headers: headers(config),
        body: format!("query={}", escape_text(text)),
    }
}

pub fn translate_request(
    config: &PapagoConfig,
    text: &str,
    source: Language,
    target: Language,
    options: &TranslateOptions,
) -> WireRequest {
    let honorific =
        options.honorific && source == Language::English && target == Language::Korean;

    let body = format!(
        "dict={}&dictDisplay={}&instant={}&paging={}&source={}&target={}&honorific={}&text={}",
        options.dict,
        options.dict_display,
        options.instant,
        options.paging,
        source.code(),
        target.code(),
        honorific,
        escape_text(text),
    );

    WireRequest {
        url: config.translate_url(),
        headers: headers(config),
        body,
    }
}

/// Fails with `UnsupportedVoice` before anything is encoded
pub fn tts_request(
    config: &PapagoConfig,
    text: &str,
    voice: &Voice,
) -> Result<WireRequest, PapagoError> {
    let speaker = voice.speaker()?;

    let body = format!(
        "alpha=0&pitch={}&speaker={}&speed={}&text={}",
        voice.pitch.value(),
        speaker,
        voice.speed.value(),
        escape_text(text),
    );

    Ok(WireRequest {
        url: config.tts_url(),
        headers: headers(config),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::{Gender, Pitch, Speed};

    fn header<'a>(request: &'a WireRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn newlines_become_literal_backslash_n() {
        assert_eq!(escape_text("a\nb"), "a\\nb");
        assert_eq!(escape_text("\n\n"), "\\n\\n");
    }

    #[test]
    fn reserved_form_characters_are_encoded() {
        assert_eq!(escape_text("a&b=c d+e%"), "a%26b%3Dc%20d%2Be%25");
        assert_eq!(escape_text("안"), "%EC%95%88");
    }

    #[test]
    fn detect_body_is_escaped_query() {
        let request = detect_request(&PapagoConfig::default(), "hello\nworld");
        assert_eq!(request.url, "https://papago.naver.com/apis/langs/dect");
        assert_eq!(request.body, "query=hello\\nworld");
        assert!(!request.body.contains('\n'));
    }

    #[test]
    fn translate_body_keeps_key_order() {
        let request = translate_request(
            &PapagoConfig::default(),
            "good morning",
            Language::English,
            Language::Japanese,
            &TranslateOptions::default(),
        );
        assert_eq!(
            request.body,
            "dict=true&dictDisplay=30&instant=false&paging=false&source=en&target=ja&honorific=false&text=good%20morning"
        );
        assert_eq!(request.url, "https://papago.naver.com/apis/n2mt/translate");
    }

    #[test]
    fn translate_body_escapes_newlines() {
        let request = translate_request(
            &PapagoConfig::default(),
            "line one\nline two",
            Language::English,
            Language::Korean,
            &TranslateOptions::default(),
        );
        assert!(request.body.ends_with("&text=line%20one\\nline%20two"));
    }

    #[test]
    fn honorific_only_sent_for_english_to_korean() {
        let options = TranslateOptions {
            honorific: true,
            ..TranslateOptions::default()
        };
        let config = PapagoConfig::default();

        let en_ko = translate_request(&config, "hi", Language::English, Language::Korean, &options);
        assert!(en_ko.body.contains("&honorific=true&"));

        let ja_ko = translate_request(&config, "hi", Language::Japanese, Language::Korean, &options);
        assert!(ja_ko.body.contains("&honorific=false&"));
    }

    #[test]
    fn custom_options_are_serialized() {
        let options = TranslateOptions {
            dict: false,
            dict_display: 5,
            instant: true,
            paging: true,
            honorific: false,
        };
        let request = translate_request(
            &PapagoConfig::default(),
            "x",
            Language::Chinese,
            Language::TraditionalChinese,
            &options,
        );
        assert!(request.body.starts_with(
            "dict=false&dictDisplay=5&instant=true&paging=true&source=zh-CN&target=zh-TW&"
        ));
    }

    #[test]
    fn tts_body_carries_voice_parameters() {
        let voice = Voice::new(Language::Korean, Gender::Male)
            .with_speed(Speed::Slow)
            .with_pitch(Pitch::High);
        let request =
            tts_request(&PapagoConfig::default(), "안녕", &voice).expect("korean has voices");
        assert_eq!(
            request.body,
            "alpha=0&pitch=-2&speaker=jinho&speed=3&text=%EC%95%88%EB%85%95"
        );
        assert_eq!(request.url, "https://papago.naver.com/apis/tts/makeID");
    }

    #[test]
    fn tts_rejects_unsupported_voice() {
        let voice = Voice::new(Language::Hindi, Gender::Female);
        assert!(matches!(
            tts_request(&PapagoConfig::default(), "text", &voice),
            Err(PapagoError::UnsupportedVoice { .. })
        ));
    }

    #[test]
    fn credentials_are_sent_only_when_configured() {
        let bare = headers(&PapagoConfig::default());
        assert_eq!(bare.len(), 2);
        assert_eq!(bare[0].1, CONTENT_TYPE);

        let config = PapagoConfig {
            authorization: "PPG id:sig".to_string(),
            timestamp: "1700000000000".to_string(),
            extra_headers: vec![("x-apigw-partnerid".to_string(), "papago".to_string())],
            ..PapagoConfig::default()
        };
        let request = detect_request(&config, "text");
        assert_eq!(header(&request, "Authorization"), Some("PPG id:sig"));
        assert_eq!(header(&request, "Timestamp"), Some("1700000000000"));
        assert_eq!(request.headers.last().map(|(k, _)| k.as_str()), Some("x-apigw-partnerid"));
    }
}
