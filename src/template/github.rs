//! Template with the bundled GitHub-flavored stylesheet.

use super::{HtmlTemplate, HEAD_CLOSE};

/// Default stylesheet embedded at compile time.
pub const GITHUB_CSS: &str = include_str!("../../assets/github-markdown.css");

/// HTML5 document template styled like GitHub's Markdown rendering.
///
/// The title is inserted verbatim, without HTML escaping.
#[derive(Debug, Clone)]
pub struct GitHubTemplate {
    css: String,
}

impl Default for GitHubTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubTemplate {
    /// Creates a template using the bundled stylesheet.
    pub fn new() -> Self {
        Self {
            css: GITHUB_CSS.to_string(),
        }
    }

    /// Creates a template whose default stylesheet is `css`.
    pub fn with_css(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// Returns the default stylesheet.
    pub fn css(&self) -> &str {
        &self.css
    }
}

impl HtmlTemplate for GitHubTemplate {
    fn wrap(&self, content: &str, title: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <title>{title}</title>\n\
             </head>\n\
             <body>\n\
             {content}\n\
             </body>\n\
             </html>"
        )
    }

    fn inject_css(&self, html: &str, css: &str) -> String {
        let css = if css.is_empty() { self.css.as_str() } else { css };
        let style = format!("<style>\n{css}\n</style>\n{HEAD_CLOSE}");
        html.replacen(HEAD_CLOSE, &style, 1)
    }
}
