use anyhow::{Context, Result};
use clap::Parser;
use papago::{Language, Papago, TranslateOptions, Voice, parse_language_code};
use papago_config::PapagoConfig;
use tracing_subscriber::EnvFilter;

mod args;
mod download;

use self::args::Args;

#[tokio::main]
async fn main() {
    // A missing .env is fine; credentials may come from the environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    if args.list {
        println!("Supported language codes:");
        for (i, lang) in papago::supported_languages().iter().enumerate() {
            println!("{:2}: {} => {}", i + 1, lang, lang.code());
        }
        return Ok(());
    }

    let Some(target) = args.target.as_deref() else {
        println!("Specify at least a target language");
        return Ok(());
    };

    let text = args.joined_text();
    if text.is_empty() {
        println!("Specify some text to translate");
        return Ok(());
    }

    let papago = Papago::new(PapagoConfig::from_env()).context("Failed to build HTTP client")?;

    let source: Language = match args.source.as_deref() {
        Some(code) => parse_language_code(code)?,
        None => papago.detect(&text).await.context("Language detection failed")?,
    };
    let target = parse_language_code(target)?;

    println!("Translating \"{text}\" from {source} to {target}");
    let options = TranslateOptions {
        honorific: args.honorific,
        ..TranslateOptions::default()
    };
    let translation = papago
        .translate(&text, source, target, &options)
        .await
        .context("Translation failed")?;
    println!("Translation: {translation}");

    let voice = Voice::new(target, args.gender)
        .with_speed(args.speed)
        .with_pitch(args.pitch);
    let url = papago.tts(&translation, &voice).await?;

    let Some(output) = args.output.as_deref() else {
        println!("Audio file available here:\n\t{url}");
        return Ok(());
    };

    println!("Downloading file from:\n\t{url}");
    download::download_file(output, &url).await?;
    println!("Audio file downloaded to {}", output.display());

    Ok(())
}
