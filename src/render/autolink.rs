//! Links for bare `http://`, `https://` and `www.` URLs and e-mail addresses
//! in prose.

use pulldown_cmark::{CowStr, Event, LinkType, Tag, TagEnd};
use regex::Regex;
use std::collections::VecDeque;
use std::ops::Range;
use std::sync::LazyLock;

static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:https?://|www\.)[^\s<>]+|\b[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+",
    )
    .unwrap()
});

/// Characters dropped from the end of a candidate URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '\'', '"', '*', '_', '~'];

/// Glyphs produced by smart punctuation.
const SMART_GLYPHS: &[char] = &['‘', '’', '“', '”', '–', '—', '…'];

/// Source characters smart punctuation replaces.
const SMART_SOURCE: &[char] = &['\'', '"', '-', '.'];

/// One text event of a merged run.
struct Piece<'a> {
    text: CowStr<'a>,
    /// Span in the run's source-level text.
    span: Range<usize>,
    /// Rendered text differs from the source (smart punctuation).
    substituted: bool,
}

/// Event adapter that turns bare URLs in text into links.
///
/// Works on pulldown-cmark's offset iterator. Adjacent text events are
/// merged and URLs are matched against the source characters, so smart
/// punctuation never leaks into a link. Text inside links, code blocks and
/// images is left alone.
pub struct Autolinks<'a, I> {
    source: &'a str,
    inner: I,
    pending: VecDeque<Event<'a>>,
    link_depth: usize,
    in_code_block: bool,
}

impl<'a, I> Autolinks<'a, I>
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    /// Wraps the offset iterator of a parser over `source`.
    pub fn new(source: &'a str, inner: I) -> Self {
        Self {
            source,
            inner,
            pending: VecDeque::new(),
            link_depth: 0,
            in_code_block: false,
        }
    }

    fn track(&mut self, event: &Event<'a>) {
        match event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. }) => self.link_depth += 1,
            Event::End(TagEnd::Link | TagEnd::Image) => {
                self.link_depth = self.link_depth.saturating_sub(1)
            }
            Event::Start(Tag::CodeBlock(_)) => self.in_code_block = true,
            Event::End(TagEnd::CodeBlock) => self.in_code_block = false,
            _ => {}
        }
    }

    /// Collects `first` and any directly following text events.
    fn text_run(&mut self, first: CowStr<'a>, range: Range<usize>) -> TextRun<'a> {
        let mut run = TextRun::default();
        run.push(first, self.source.get(range));
        loop {
            match self.inner.next() {
                Some((Event::Text(text), range)) => run.push(text, self.source.get(range)),
                Some((other, _)) => {
                    self.pending.push_back(other);
                    break;
                }
                None => break,
            }
        }
        run
    }
}

impl<'a, I> Iterator for Autolinks<'a, I>
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            self.track(&event);
            return Some(event);
        }

        let (event, range) = self.inner.next()?;
        match event {
            Event::Text(text) if self.link_depth == 0 && !self.in_code_block => {
                let mut events = self.text_run(text, range).linkify();
                // Split events go out before anything the run buffered.
                while let Some(event) = events.pop_back() {
                    self.pending.push_front(event);
                }
                self.next()
            }
            other => {
                self.track(&other);
                Some(other)
            }
        }
    }
}

/// Consecutive text events with their source-level text.
#[derive(Default)]
struct TextRun<'a> {
    pieces: Vec<Piece<'a>>,
    /// Concatenated source-level text that URLs are matched against.
    plain: String,
}

impl<'a> TextRun<'a> {
    fn push(&mut self, text: CowStr<'a>, source: Option<&str>) {
        let start = self.plain.len();
        let substituted = match source {
            Some(src) if is_smart_substitution(&text, src) => {
                self.plain.push_str(src);
                true
            }
            _ => {
                self.plain.push_str(&text);
                false
            }
        };
        self.pieces.push(Piece {
            text,
            span: start..self.plain.len(),
            substituted,
        });
    }

    /// Rendered text for the source-level span `range`.
    fn rendered(&self, range: Range<usize>) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            if piece.substituted {
                if range.contains(&piece.span.start) {
                    out.push_str(&piece.text);
                }
                continue;
            }
            let start = range.start.max(piece.span.start);
            let end = range.end.min(piece.span.end);
            if start < end {
                out.push_str(&piece.text[start - piece.span.start..end - piece.span.start]);
            }
        }
        out
    }

    /// Moves `end` out of any substituted piece it falls inside.
    fn snap_end(&self, end: usize) -> usize {
        self.pieces
            .iter()
            .find(|p| p.substituted && p.span.start < end && end < p.span.end)
            .map_or(end, |p| p.span.start)
    }

    /// Splits the run into text and link events.
    fn linkify(mut self) -> VecDeque<Event<'a>> {
        let mut events = VecDeque::new();
        let links: Vec<Range<usize>> = BARE_URL
            .find_iter(&self.plain)
            .map(|m| m.start()..self.snap_end(m.start() + trim_url(m.as_str()).len()))
            .filter(|r| !r.is_empty())
            .collect();

        if links.is_empty() {
            if self.pieces.len() == 1 {
                events.push_back(Event::Text(self.pieces.remove(0).text));
            } else {
                let text = self.rendered(0..self.plain.len());
                events.push_back(Event::Text(CowStr::from(text)));
            }
            return events;
        }

        let mut last = 0;
        for link in links {
            if link.start > last {
                events.push_back(Event::Text(CowStr::from(self.rendered(last..link.start))));
            }
            let url = &self.plain[link.clone()];
            events.push_back(Event::Start(Tag::Link {
                link_type: LinkType::Autolink,
                dest_url: CowStr::from(destination(url)),
                title: CowStr::Borrowed(""),
                id: CowStr::Borrowed(""),
            }));
            events.push_back(Event::Text(CowStr::from(url.to_string())));
            events.push_back(Event::End(TagEnd::Link));
            last = link.end;
        }

        if last < self.plain.len() {
            events.push_back(Event::Text(CowStr::from(
                self.rendered(last..self.plain.len()),
            )));
        }
        events
    }
}

fn is_smart_substitution(text: &str, source: &str) -> bool {
    text != source
        && !text.is_empty()
        && !source.is_empty()
        && text.chars().all(|c| SMART_GLYPHS.contains(&c))
        && source.chars().all(|c| SMART_SOURCE.contains(&c))
}

/// Link target for a matched URL or e-mail address.
fn destination(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.starts_with("www.") {
        format!("http://{url}")
    } else {
        format!("mailto:{url}")
    }
}

/// Removes trailing punctuation and unbalanced closing parentheses.
fn trim_url(url: &str) -> &str {
    let mut url = url;
    loop {
        let trimmed = url.trim_end_matches(TRAILING_PUNCTUATION);
        let trimmed = match trimmed.strip_suffix(')') {
            Some(rest) if trimmed.matches('(').count() < trimmed.matches(')').count() => rest,
            _ => trimmed,
        };
        if trimmed.len() == url.len() {
            return url;
        }
        url = trimmed;
    }
}
