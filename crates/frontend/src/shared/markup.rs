//! Minimal inline markup used by the analysis service.
//!
//! RAG warnings mark emphasis with `**bold**`. The text is split into
//! segments and rendered as `<strong>` nodes, never injected as HTML.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bold: false,
        }
    }

    fn bold(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bold: true,
        }
    }
}

/// Splits on non-greedy `**...**` pairs; an unmatched `**` stays literal
pub fn parse_bold_segments(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = input;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            segments.push(Segment::plain(&rest[..open]));
        }
        segments.push(Segment::bold(&after_open[..close]));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        segments.push(Segment::plain(rest));
    }
    segments
}
