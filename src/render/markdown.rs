//! pulldown-cmark backed Markdown converter.

use super::anchor::HeadingAnchors;
use super::autolink::Autolinks;
use super::typography;
use super::Converter;
use crate::error::{Error, Result};
use crate::options::ConversionOptions;

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Extensions enabled in every rendering mode.
fn base_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_DEFINITION_LIST
}

/// Markdown to HTML converter.
///
/// Raw HTML in the input is passed through unchanged. Bare URLs and e-mail
/// addresses become links and every heading receives a generated `id`.
/// Heading attribute syntax such as `{#id}` is not recognised and stays part
/// of the heading text, matching the inferred document title.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConversionOptions,
}

impl MarkdownConverter {
    /// Creates a new converter with the given options.
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Returns the options this converter was built with.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Returns the pulldown-cmark options for the configured mode.
    fn parser_options(&self) -> Options {
        let mut options = base_options();
        if self.options.is_typographic() {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        options
    }

    /// Renders `input` into `writer`.
    pub fn convert_to_writer<W: std::io::Write>(&self, input: &[u8], writer: W) -> Result<()> {
        let text = String::from_utf8_lossy(input);
        let parser = Parser::new_ext(&text, self.parser_options()).into_offset_iter();

        let fractions = self.options.is_typographic() && self.options.fractions;
        log::debug!(
            "converting {} bytes (typographic: {}, fractions: {})",
            input.len(),
            self.options.is_typographic(),
            fractions
        );

        let mut in_code_block = false;
        let mut link_depth = 0usize;
        let links = Autolinks::new(&text, parser);
        let events = HeadingAnchors::new(links).map(|event| match event {
            Event::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
                event
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                event
            }
            Event::Start(Tag::Link { .. } | Tag::Image { .. }) => {
                link_depth += 1;
                event
            }
            Event::End(TagEnd::Link | TagEnd::Image) => {
                link_depth = link_depth.saturating_sub(1);
                event
            }
            Event::Text(text) if fractions && !in_code_block && link_depth == 0 => {
                Event::Text(typography::replace_fractions(text))
            }
            other => other,
        });

        html::write_html_io(writer, events).map_err(|e| Error::Conversion(e.to_string()))
    }
}

impl Converter for MarkdownConverter {
    fn convert(&self, input: &[u8]) -> Result<String> {
        let mut buf = Vec::with_capacity(input.len() * 3 / 2);
        self.convert_to_writer(input, &mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::Conversion(e.to_string()))
    }
}
