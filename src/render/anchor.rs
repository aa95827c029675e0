//! Generated `id` attributes for headings.

use pulldown_cmark::{CowStr, Event, Tag, TagEnd};
use std::collections::{HashSet, VecDeque};

/// Slug used when a heading has no usable characters.
const FALLBACK_SLUG: &str = "heading";

/// Event adapter that assigns an `id` to every heading lacking one.
///
/// Heading events are buffered until the closing tag so the slug can be
/// built from the full heading text. Generated ids never collide with each
/// other or with explicit `{#id}` attributes seen earlier in the document.
pub struct HeadingAnchors<'a, I> {
    inner: I,
    pending: VecDeque<Event<'a>>,
    used: HashSet<String>,
}

impl<'a, I> HeadingAnchors<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    /// Wraps a pulldown-cmark event stream.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            used: HashSet::new(),
        }
    }

    fn unique(&mut self, base: String) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl<'a, I> Iterator for HeadingAnchors<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        match self.inner.next()? {
            Event::Start(Tag::Heading {
                level,
                id: None,
                classes,
                attrs,
            }) => {
                let mut text = String::new();
                for event in self.inner.by_ref() {
                    match &event {
                        Event::Text(t) | Event::Code(t) => text.push_str(t),
                        _ => {}
                    }
                    let done = matches!(event, Event::End(TagEnd::Heading(_)));
                    self.pending.push_back(event);
                    if done {
                        break;
                    }
                }

                let id = self.unique(slugify(&text));
                Some(Event::Start(Tag::Heading {
                    level,
                    id: Some(CowStr::from(id)),
                    classes,
                    attrs,
                }))
            }
            Event::Start(Tag::Heading {
                level,
                id: Some(id),
                classes,
                attrs,
            }) => {
                self.used.insert(id.to_string());
                Some(Event::Start(Tag::Heading {
                    level,
                    id: Some(id),
                    classes,
                    attrs,
                }))
            }
            other => Some(other),
        }
    }
}

/// Builds a URL fragment from heading text.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
