//! Decoding of backend JSON bodies.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::PapagoError;
use crate::language::{Language, parse_language_code};

/// Decoded translate response; unknown fields are ignored
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub translated_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub src_lang_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tar_lang_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub dict: Option<Dictionary>,
    #[serde(default, deserialize_with = "lenient")]
    pub delay: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub delay_smt: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    #[serde(default, deserialize_with = "lenient")]
    pub items: Vec<DictionaryEntry>,
    #[serde(default, deserialize_with = "lenient")]
    pub has_more: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub entry: String,
    #[serde(default, deserialize_with = "lenient")]
    pub sub_entry: String,
    #[serde(default, deserialize_with = "lenient")]
    pub match_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub hanja_entry: String,
    #[serde(default, deserialize_with = "lenient")]
    pub phonetic_signs: Vec<PhoneticSign>,
    #[serde(default, deserialize_with = "lenient")]
    pub pos: Vec<PartOfSpeech>,
    #[serde(default, deserialize_with = "lenient")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub m_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneticSign {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient")]
    pub sign: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartOfSpeech {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient")]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default, deserialize_with = "lenient")]
    pub meaning: String,
    #[serde(default, deserialize_with = "lenient")]
    pub example: String,
    #[serde(default, deserialize_with = "lenient")]
    pub origin_meaning: String,
}

/// Pass-through fields fall back to their default on `null` or an unexpected type
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl TranslateResult {
    /// The translated text, or `MalformedResponse` when the backend left it out
    pub fn text(&self) -> Result<&str, PapagoError> {
        self.translated_text.as_deref().ok_or_else(|| {
            PapagoError::MalformedResponse("missing string field \"translatedText\"".to_string())
        })
    }
}

fn object(body: &[u8]) -> Result<Map<String, Value>, PapagoError> {
    Ok(serde_json::from_slice(body)?)
}

fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a str, PapagoError> {
    map.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| PapagoError::MalformedResponse(format!("missing string field {key:?}")))
}

pub fn decode_detect(body: &[u8]) -> Result<Language, PapagoError> {
    let map = object(body)?;
    parse_language_code(string_field(&map, "langCode")?)
}

pub fn decode_translate(body: &[u8]) -> Result<TranslateResult, PapagoError> {
    let result: TranslateResult = serde_json::from_slice(body)?;
    result.text()?;
    Ok(result)
}

/// Swap the `makeID` segment of the TTS endpoint for the returned audio id
pub fn decode_tts(body: &[u8], tts_url: &str) -> Result<String, PapagoError> {
    let map = object(body)?;
    let id = string_field(&map, "id")?;
    Ok(tts_url.replacen("makeID", id, 1))
}
