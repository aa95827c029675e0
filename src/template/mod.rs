//! HTML document templating.

mod github;

pub use github::{GitHubTemplate, GITHUB_CSS};

/// Marker before which stylesheets are injected.
pub const HEAD_CLOSE: &str = "</head>";

/// Wraps HTML fragments into complete documents.
pub trait HtmlTemplate {
    /// Wraps `content` into a full HTML document titled `title`.
    fn wrap(&self, content: &str, title: &str) -> String;

    /// Injects `css` before the first closing head tag of `html`.
    ///
    /// An empty `css` selects the template's default stylesheet.
    fn inject_css(&self, html: &str, css: &str) -> String;
}

impl<T: HtmlTemplate + ?Sized> HtmlTemplate for Box<T> {
    fn wrap(&self, content: &str, title: &str) -> String {
        (**self).wrap(content, title)
    }

    fn inject_css(&self, html: &str, css: &str) -> String {
        (**self).inject_css(html, css)
    }
}
