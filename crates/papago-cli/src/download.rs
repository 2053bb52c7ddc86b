use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Stream `url` into a new file at `path`
pub async fn download_file(path: &Path, url: &str) -> Result<u64> {
    let mut response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to fetch {url}"))?
        .error_for_status()
        .context("Audio server returned an error")?;

    let mut file = File::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await.context("Failed to read audio data")? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    tracing::debug!(bytes = written, path = %path.display(), "audio saved");
    Ok(written)
}
