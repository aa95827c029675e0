//! Single-file conversion: Markdown in, styled HTML document out.

use crate::error::{Error, IoAction, Result};
use crate::options::ConversionOptions;
use crate::render::{Converter, MarkdownConverter};
use crate::template::{GitHubTemplate, HtmlTemplate};
use crate::title::{MarkdownTitleExtractor, TitleExtractor};
use std::fs;
use std::path::Path;

/// Converter, title extractor and template composed into one pipeline.
pub struct Pipeline {
    converter: Box<dyn Converter>,
    title_extractor: Box<dyn TitleExtractor>,
    template: Box<dyn HtmlTemplate>,
    css: String,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ConversionOptions::default())
    }
}

impl Pipeline {
    /// Creates the production pipeline with the given typography options.
    pub fn new(options: ConversionOptions) -> Self {
        Self::with_components(
            MarkdownConverter::new(options),
            MarkdownTitleExtractor::new(),
            GitHubTemplate::new(),
        )
    }

    /// Creates a pipeline from custom components.
    pub fn with_components(
        converter: impl Converter + 'static,
        title_extractor: impl TitleExtractor + 'static,
        template: impl HtmlTemplate + 'static,
    ) -> Self {
        Self {
            converter: Box::new(converter),
            title_extractor: Box::new(title_extractor),
            template: Box::new(template),
            css: String::new(),
        }
    }

    /// Overrides the stylesheet injected into every document.
    ///
    /// An empty string keeps the template's default stylesheet.
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }

    /// Converts Markdown bytes into a complete HTML document.
    pub fn convert(&self, input: &[u8]) -> Result<String> {
        let fragment = self.converter.convert(input)?;
        let title = self.title_extractor.extract_title(input);
        log::debug!("inferred title: {:?}", title);

        let html = self.template.wrap(&fragment, &title);
        Ok(self.template.inject_css(&html, &self.css))
    }

    /// Reads `input`, converts it and writes the document to `output`.
    ///
    /// Missing parent directories of `output` are created. The output file
    /// is truncated if it exists.
    pub fn convert_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let input = input.as_ref();
        let output = output.as_ref();

        if !input.exists() {
            return Err(Error::InputNotExist(input.to_path_buf()));
        }

        let data = fs::read(input).map_err(|e| Error::io(input, IoAction::Reading, e))?;
        let html = self.convert(&data)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io(parent, IoAction::CreatingDirectory, e))?;
        }

        fs::write(output, html).map_err(|e| Error::io(output, IoAction::Writing, e))?;
        log::info!("converted {} -> {}", input.display(), output.display());
        Ok(())
    }
}
