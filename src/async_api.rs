//! Async API for non-blocking conversion.
//!
//! Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! mdtohtml = { version = "0.3", features = ["async"] }
//! ```

use crate::error::{Error, IoAction, Result};
use crate::options::ConversionOptions;
use crate::pipeline::Pipeline;
use crate::validate::{MarkdownValidator, Validator};
use std::path::Path;
use tokio::fs;

fn join_error(e: tokio::task::JoinError) -> Error {
    Error::Conversion(format!("conversion task failed: {}", e))
}

/// Asynchronously converts Markdown bytes into a complete HTML document.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> mdtohtml::Result<()> {
/// use mdtohtml::ConversionOptions;
///
/// let html = mdtohtml::async_api::convert_bytes(b"# Hello".to_vec(), ConversionOptions::default()).await?;
/// assert!(html.contains("<title>Hello</title>"));
/// # Ok(())
/// # }
/// ```
pub async fn convert_bytes(data: Vec<u8>, options: ConversionOptions) -> Result<String> {
    // Conversion is CPU-bound, so it runs on the blocking pool
    tokio::task::spawn_blocking(move || Pipeline::new(options).convert(&data))
        .await
        .map_err(join_error)?
}

/// Asynchronously converts `input` and writes the document to `output`.
pub async fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: ConversionOptions,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !fs::try_exists(input).await.unwrap_or(false) {
        return Err(Error::InputNotExist(input.to_path_buf()));
    }

    let data = fs::read(input)
        .await
        .map_err(|e| Error::io(input, IoAction::Reading, e))?;
    let html = convert_bytes(data, options).await?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, IoAction::CreatingDirectory, e))?;
    }

    fs::write(output, html)
        .await
        .map_err(|e| Error::io(output, IoAction::Writing, e))?;
    log::info!("converted {} -> {}", input.display(), output.display());
    Ok(())
}

/// Asynchronously validates a Markdown file.
pub async fn validate_file(path: impl AsRef<Path>, options: ConversionOptions) -> Result<()> {
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || MarkdownValidator::new(options).validate_file(&path))
        .await
        .map_err(join_error)?
}
