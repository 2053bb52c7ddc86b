use std::path::PathBuf;

use clap::Parser;
use papago::{Gender, Pitch, Speed};

/// Translate text with Papago and get a spoken version of the result
#[derive(Debug, Parser)]
#[command(name = "papago", version)]
pub struct Args {
    /// Code for the source language; detected when omitted
    #[arg(short, long)]
    pub source: Option<String>,

    /// Code for the target language
    #[arg(short, long)]
    pub target: Option<String>,

    /// List all supported language codes
    #[arg(short, long)]
    pub list: bool,

    /// Download the generated audio to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "female")]
    pub gender: Gender,

    #[arg(long, default_value = "normal")]
    pub speed: Speed,

    #[arg(long, default_value = "medium")]
    pub pitch: Pitch,

    /// Polite register (English to Korean only)
    #[arg(long)]
    pub honorific: bool,

    /// Text to translate
    pub text: Vec<String>,
}

impl Args {
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_words_form_the_text() {
        let args = Args::parse_from(["papago", "-t", "ko", "good", "morning"]);
        assert_eq!(args.target.as_deref(), Some("ko"));
        assert_eq!(args.source, None);
        assert_eq!(args.joined_text(), "good morning");
        assert_eq!(args.gender, Gender::Female);
        assert_eq!(args.speed, Speed::Normal);
    }

    #[test]
    fn voice_flags_parse_level_names() {
        let args = Args::parse_from([
            "papago", "-t", "en", "--gender", "male", "--speed", "very-slow", "--pitch", "high",
            "x",
        ]);
        assert_eq!(args.gender, Gender::Male);
        assert_eq!(args.speed, Speed::VerySlow);
        assert_eq!(args.pitch, Pitch::High);
    }

    #[test]
    fn bad_gender_is_rejected() {
        assert!(Args::try_parse_from(["papago", "--gender", "robot", "x"]).is_err());
    }
}
