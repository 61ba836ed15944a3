//! `kulti code`: stream a file from disk.

use anyhow::{Context as _, Result};
use kulti_sdk::{CodeAction, Kulti};
use std::path::Path;

pub async fn cmd_code(stream: &Kulti, file: &Path, action: &str) -> Result<()> {
    let action: CodeAction = action.parse()?;
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let filename = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown");

    stream.code(filename, &content, action).await;
    println!("Streamed code: {filename}");
    Ok(())
}
