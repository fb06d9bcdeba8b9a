//! Generic scanner for repeated header-delimited blocks.
//!
//! AlliedWare Plus output frequently repeats a structural unit with no
//! delimiter other than the recurring header line itself ("Stack member N",
//! "Resource ID: N Name: ..."). This scanner splits such text into ordered
//! segments, each spanning from the end of one header match to the start of
//! the next (or end of text).

use regex::{Captures, Regex};

/// One header-delimited block of text.
#[derive(Debug)]
pub struct Segment<'a> {
    captures: Captures<'a>,
    body: &'a str,
}

impl<'a> Segment<'a> {
    /// The full text matched by the header pattern.
    pub fn header(&self) -> &'a str {
        self.captures
            .get(0)
            .map(|m| m.as_str())
            .unwrap_or_default()
    }

    /// A capture group from the header match.
    pub fn capture(&self, index: usize) -> Option<&'a str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    /// Text between this header and the next (or end of text). Excludes
    /// both header lines.
    pub fn body(&self) -> &'a str {
        self.body
    }
}

/// Split `text` into segments bounded by matches of `header`.
///
/// Returns an empty vec when the header never matches; callers treat that as
/// "feature not present on this device", not as an error.
pub fn segments<'a>(text: &'a str, header: &Regex) -> Vec<Segment<'a>> {
    let caps: Vec<Captures<'a>> = header.captures_iter(text).collect();
    let starts: Vec<usize> = caps
        .iter()
        .filter_map(|c| c.get(0).map(|m| m.start()))
        .collect();

    let mut out = Vec::with_capacity(caps.len());
    for (i, captures) in caps.into_iter().enumerate() {
        let Some(m) = captures.get(0) else { continue };
        let body_end = starts.get(i + 1).copied().unwrap_or(text.len());
        let body = &text[m.end()..body_end];
        out.push(Segment { captures, body });
    }
    out
}
