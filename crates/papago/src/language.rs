use std::fmt;
use std::str::FromStr;

use crate::error::PapagoError;
use crate::voice::Gender;

/// Languages supported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Korean,
    English,
    Japanese,
    Chinese,
    TraditionalChinese,
    Spanish,
    French,
    German,
    Russian,
    Portuguese,
    Italian,
    Vietnamese,
    Thai,
    Indonesian,
    Hindi,
}

struct Entry {
    name: &'static str,
    code: &'static str,
    male_voice: Option<&'static str>,
    female_voice: Option<&'static str>,
}

const fn entry(
    name: &'static str,
    code: &'static str,
    male_voice: Option<&'static str>,
    female_voice: Option<&'static str>,
) -> Entry {
    Entry {
        name,
        code,
        male_voice,
        female_voice,
    }
}

// Indexed by `Language as usize`; keep in the same order as `LANGUAGES`.
const CATALOG: [Entry; 15] = [
    entry("Korean", "ko", Some("jinho"), Some("kyuri")),
    entry("English", "en", Some("matt"), Some("clara")),
    entry("Japanese", "ja", Some("shinji"), Some("yuri")),
    entry("Simplified Chinese", "zh-CN", Some("liangliang"), Some("meimei")),
    entry("Traditional Chinese", "zh-TW", None, None),
    entry("Spanish", "es", Some("jose"), Some("carmen")),
    entry("French", "fr", Some("louis"), Some("roxane")),
    entry("German", "ge", None, None),
    entry("Russian", "ru", None, None),
    entry("Portuguese", "pt", None, None),
    entry("Italian", "it", None, None),
    entry("Vietnamese", "vi", None, None),
    entry("Thai", "th", None, None),
    entry("Indonesian", "id", None, None),
    entry("Hindi", "hi", None, None),
];

const LANGUAGES: [Language; 15] = [
    Language::Korean,
    Language::English,
    Language::Japanese,
    Language::Chinese,
    Language::TraditionalChinese,
    Language::Spanish,
    Language::French,
    Language::German,
    Language::Russian,
    Language::Portuguese,
    Language::Italian,
    Language::Vietnamese,
    Language::Thai,
    Language::Indonesian,
    Language::Hindi,
];

/// Every supported language, in catalog order
pub fn supported_languages() -> &'static [Language] {
    &LANGUAGES
}

/// Exact, case-sensitive lookup of a wire code
pub fn parse_language_code(code: &str) -> Result<Language, PapagoError> {
    LANGUAGES
        .iter()
        .copied()
        .find(|lang| lang.code() == code)
        .ok_or_else(|| PapagoError::UnknownLanguageCode(code.to_string()))
}

impl Language {
    fn entry(self) -> &'static Entry {
        &CATALOG[self as usize]
    }

    /// Canonical display name
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Backend wire code ("en", "zh-CN", ...)
    pub fn code(self) -> &'static str {
        self.entry().code
    }

    pub fn male_voice(self) -> Option<&'static str> {
        self.entry().male_voice
    }

    pub fn female_voice(self) -> Option<&'static str> {
        self.entry().female_voice
    }

    /// TTS speaker name for this language and gender, if the backend has one
    pub fn voice(self, gender: Gender) -> Option<&'static str> {
        match gender {
            Gender::Male => self.male_voice(),
            Gender::Female => self.female_voice(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = PapagoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_language_code(s)
    }
}
