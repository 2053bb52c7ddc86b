use std::fmt;
use std::str::FromStr;

use crate::error::PapagoError;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// TTS speed; larger values are slower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Speed {
    VerySlow,
    Slow,
    #[default]
    Normal,
    Fast,
}

/// TTS pitch; larger values are lower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pitch {
    Low,
    #[default]
    Medium,
    High,
}

impl Speed {
    pub fn value(self) -> i32 {
        match self {
            Speed::VerySlow => 5,
            Speed::Slow => 3,
            Speed::Normal => 0,
            Speed::Fast => -1,
        }
    }
}

impl Pitch {
    pub fn value(self) -> i32 {
        match self {
            Pitch::Low => 2,
            Pitch::Medium => 0,
            Pitch::High => -2,
        }
    }
}

/// Everything the TTS endpoint needs besides the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub language: Language,
    pub gender: Gender,
    pub speed: Speed,
    pub pitch: Pitch,
}

impl Voice {
    pub fn new(language: Language, gender: Gender) -> Self {
        Self {
            language,
            gender,
            speed: Speed::default(),
            pitch: Pitch::default(),
        }
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_pitch(mut self, pitch: Pitch) -> Self {
        self.pitch = pitch;
        self
    }

    /// Backend speaker name, or `UnsupportedVoice` when the pair has none
    pub fn speaker(&self) -> Result<&'static str, PapagoError> {
        self.language
            .voice(self.gender)
            .ok_or(PapagoError::UnsupportedVoice {
                language: self.language,
                gender: self.gender,
            })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid {kind} {value:?}, expected one of: {expected}")]
pub struct ParseVoiceError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ParseVoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ParseVoiceError {
                kind: "gender",
                value: s.to_string(),
                expected: "male, female",
            }),
        }
    }
}

impl FromStr for Speed {
    type Err = ParseVoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "veryslow" => Ok(Speed::VerySlow),
            "slow" => Ok(Speed::Slow),
            "normal" => Ok(Speed::Normal),
            "fast" => Ok(Speed::Fast),
            _ => Err(ParseVoiceError {
                kind: "speed",
                value: s.to_string(),
                expected: "very-slow, slow, normal, fast",
            }),
        }
    }
}

impl FromStr for Pitch {
    type Err = ParseVoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Pitch::Low),
            "medium" => Ok(Pitch::Medium),
            "high" => Ok(Pitch::High),
            _ => Err(ParseVoiceError {
                kind: "pitch",
                value: s.to_string(),
                expected: "low, medium, high",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_levels_map_to_wire_values() {
        assert_eq!(Speed::VerySlow.value(), 5);
        assert_eq!(Speed::Slow.value(), 3);
        assert_eq!(Speed::Normal.value(), 0);
        assert_eq!(Speed::Fast.value(), -1);
    }

    #[test]
    fn new_voice_uses_neutral_speed_and_pitch() {
        let voice = Voice::new(Language::English, Gender::Female);
        assert_eq!(voice.speed, Speed::Normal);
        assert_eq!(voice.pitch, Pitch::Medium);
        assert_eq!(voice.speaker().ok(), Some("clara"));
    }

    #[test]
    fn speaker_fails_for_languages_without_voices() {
        let voice = Voice::new(Language::German, Gender::Male);
        match voice.speaker() {
            Err(PapagoError::UnsupportedVoice { language, gender }) => {
                assert_eq!(language, Language::German);
                assert_eq!(gender, Gender::Male);
            }
            other => panic!("expected UnsupportedVoice, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_voice_message_names_the_pair() {
        let err = Voice::new(Language::Thai, Gender::Female)
            .speaker()
            .unwrap_err();
        assert_eq!(err.to_string(), "Female voice not supported for Thai");
    }

    #[test]
    fn levels_parse_from_cli_names() {
        assert_eq!("Female".parse::<Gender>().ok(), Some(Gender::Female));
        assert_eq!("m".parse::<Gender>().ok(), Some(Gender::Male));
        assert_eq!("very-slow".parse::<Speed>().ok(), Some(Speed::VerySlow));
        assert_eq!("Fast".parse::<Speed>().ok(), Some(Speed::Fast));
        assert_eq!("high".parse::<Pitch>().ok(), Some(Pitch::High));
        assert!("loud".parse::<Pitch>().is_err());
        assert!("other".parse::<Gender>().is_err());
    }
}
