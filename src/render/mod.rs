//! Markdown to HTML fragment rendering.

mod anchor;
mod autolink;
mod markdown;
mod typography;

pub use anchor::{slugify, HeadingAnchors};
pub use autolink::Autolinks;
pub use markdown::MarkdownConverter;
pub use typography::replace_fractions;

use crate::error::Result;

/// Converts raw Markdown bytes into an HTML fragment.
pub trait Converter {
    /// Returns the HTML fragment for `input`.
    fn convert(&self, input: &[u8]) -> Result<String>;
}

impl<C: Converter + ?Sized> Converter for Box<C> {
    fn convert(&self, input: &[u8]) -> Result<String> {
        (**self).convert(input)
    }
}
