//! # mdtohtml
//!
//! Converts Markdown documents into standalone HTML pages styled with a
//! bundled GitHub-flavored stylesheet.
//!
//! Rendering is delegated to `pulldown-cmark` (tables, footnotes, task lists,
//! definition lists, smart punctuation). This crate adds title inference, the
//! HTML document shell, CSS injection and directory batch processing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdtohtml::{convert_file, ConversionOptions};
//!
//! fn main() -> mdtohtml::Result<()> {
//!     convert_file("README.md", "README.html", &ConversionOptions::default())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Batch conversion
//!
//! ```no_run
//! use mdtohtml::{BatchProcessor, ProcessOptions};
//!
//! let options = ProcessOptions::new().with_output_dir("public").recursive();
//! let report = BatchProcessor::default().process_directory("docs", &options)?;
//! println!("converted {} files", report.count());
//! # Ok::<(), mdtohtml::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: Async I/O support with Tokio

pub mod batch;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod render;
pub mod template;
pub mod title;
pub mod validate;

#[cfg(feature = "async")]
pub mod async_api;

// Re-exports
pub use batch::{output_path, BatchEvent, BatchProcessor, BatchReport, FileTask};
pub use error::{Error, IoAction, Result};
pub use options::{ConversionOptions, ProcessOptions};
pub use pipeline::Pipeline;
pub use render::{Converter, MarkdownConverter};
pub use template::{GitHubTemplate, HtmlTemplate, GITHUB_CSS};
pub use title::{extract_title, MarkdownTitleExtractor, TitleExtractor};
pub use validate::{MarkdownValidator, Validator};

use std::path::Path;

/// Converts Markdown bytes into a complete HTML document.
///
/// # Example
///
/// ```
/// use mdtohtml::{to_html, ConversionOptions};
///
/// let html = to_html(b"# Hello\n\nSome *text*.", &ConversionOptions::default())?;
/// assert!(html.contains("<title>Hello</title>"));
/// assert!(html.contains("<em>text</em>"));
/// # Ok::<(), mdtohtml::Error>(())
/// ```
pub fn to_html(input: &[u8], options: &ConversionOptions) -> Result<String> {
    Pipeline::new(*options).convert(input)
}

/// Converts a Markdown file and writes the HTML document.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConversionOptions,
) -> Result<()> {
    Pipeline::new(*options).convert_file(input, output)
}

/// Converts every matching file of a directory.
pub fn process_directory(
    dir: impl AsRef<Path>,
    process_options: &ProcessOptions,
    options: &ConversionOptions,
) -> Result<BatchReport> {
    BatchProcessor::new(*options).process_directory(dir, process_options)
}

/// Validates Markdown content without producing output.
pub fn validate(input: &[u8], options: &ConversionOptions) -> Result<()> {
    MarkdownValidator::new(*options).validate(input)
}

/// Builder for converting documents.
///
/// # Example
///
/// ```no_run
/// use mdtohtml::MdToHtml;
///
/// MdToHtml::new()
///     .smart_punctuation(false)
///     .with_css("body { max-width: 40em; }")
///     .convert_file("notes.md", "notes.html")?;
/// # Ok::<(), mdtohtml::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MdToHtml {
    options: ConversionOptions,
    css: Option<String>,
}

impl MdToHtml {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all typography options.
    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets smart punctuation.
    pub fn smart_punctuation(mut self, enabled: bool) -> Self {
        self.options = self.options.with_smart_punctuation(enabled);
        self
    }

    /// Sets LaTeX-style dashes.
    pub fn latex_dashes(mut self, enabled: bool) -> Self {
        self.options = self.options.with_latex_dashes(enabled);
        self
    }

    /// Sets fraction substitution.
    pub fn fractions(mut self, enabled: bool) -> Self {
        self.options = self.options.with_fractions(enabled);
        self
    }

    /// Overrides the bundled stylesheet.
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Returns the configured typography options.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Builds the conversion pipeline.
    pub fn pipeline(&self) -> Pipeline {
        let pipeline = Pipeline::new(self.options);
        match &self.css {
            Some(css) => pipeline.with_css(css.clone()),
            None => pipeline,
        }
    }

    /// Converts Markdown bytes into a complete HTML document.
    pub fn convert(&self, input: &[u8]) -> Result<String> {
        self.pipeline().convert(input)
    }

    /// Converts a Markdown file and writes the HTML document.
    pub fn convert_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        self.pipeline().convert_file(input, output)
    }

    /// Converts every matching file of a directory.
    pub fn process_directory(
        &self,
        dir: impl AsRef<Path>,
        options: &ProcessOptions,
    ) -> Result<BatchReport> {
        BatchProcessor::with_pipeline(self.pipeline()).process_directory(dir, options)
    }
}
