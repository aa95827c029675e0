//! Typographic substitutions applied on top of the engine's smart punctuation.

use pulldown_cmark::CowStr;
use regex::Regex;
use std::sync::LazyLock;

/// Fractions with a dedicated Unicode glyph.
static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:1/2|1/4|3/4)\b").unwrap());

fn glyph(fraction: &str) -> Option<char> {
    match fraction {
        "1/2" => Some('½'),
        "1/4" => Some('¼'),
        "3/4" => Some('¾'),
        _ => None,
    }
}

/// Replaces standalone `1/2`, `1/4` and `3/4` with fraction glyphs.
///
/// Tokens that are part of a longer path or date (`1/2/3`, `a/1/2`) are left
/// alone.
pub fn replace_fractions(text: CowStr<'_>) -> CowStr<'_> {
    if !FRACTION.is_match(&text) {
        return text;
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in FRACTION.find_iter(&text) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        if before == Some('/') || after == Some('/') {
            continue;
        }
        if let Some(c) = glyph(m.as_str()) {
            out.push_str(&text[last..m.start()]);
            out.push(c);
            last = m.end();
        }
    }

    if last == 0 {
        return text;
    }
    out.push_str(&text[last..]);
    CowStr::from(out)
}
