//! Inline color markup for skill descriptions
//!
//! Descriptions embed a small mini-language that changes the text color and
//! breaks lines. Parsing turns raw text into an ordered list of styled
//! segments that a renderer can emit without interpreting the text again.
//!
//! # Markup
//!
//! - `&<hex digit>` - Switch the current color to a [`PaletteColor`]
//!   (e.g., `&c` for red). The digit is case-insensitive.
//! - `\n` (a literal backslash followed by `n`) - Line break
//! - An actual newline character - Line break
//!
//! A `&` that is not followed by a palette code is ordinary text. The
//! character after it is scanned again on its own, so `&&a` is a literal `&`
//! followed by a switch to green.
//!
//! The current color starts at white and survives line breaks.
//!
//! # Example
//!
//! ```
//! use alice_domain::{parse_color_markup, PaletteColor, StyledSegment};
//!
//! let text = parse_color_markup("&cHot\\n&bCold");
//! let segments = text.segments();
//!
//! assert_eq!(segments.len(), 8);
//! assert_eq!(segments[0], StyledSegment::text(PaletteColor::Red, "H"));
//! assert_eq!(segments[3], StyledSegment::Break);
//! assert_eq!(text.plain_text(), "Hot\nCold");
//! ```

use std::borrow::Cow;

use serde::Serialize;

use super::palette::PaletteColor;
use crate::common::escape_html;

/// Character introducing a two-character color directive.
pub const DIRECTIVE_MARKER: char = '&';

/// One unit of parsed markup, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyledSegment {
    /// Raw (unescaped) text drawn in a single color
    Text {
        color: PaletteColor,
        content: String,
    },
    /// Line break
    Break,
}

impl StyledSegment {
    /// Create a text segment
    pub fn text(color: PaletteColor, content: impl Into<String>) -> Self {
        Self::Text {
            color,
            content: content.into(),
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }

    /// Color of a text segment; `None` for a break
    pub fn color(&self) -> Option<PaletteColor> {
        match self {
            Self::Text { color, .. } => Some(*color),
            Self::Break => None,
        }
    }

    /// Raw content of a text segment; `None` for a break
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            Self::Break => None,
        }
    }

    /// Content with HTML-special characters replaced by entities
    pub fn escaped_content(&self) -> Option<Cow<'_, str>> {
        self.content().map(escape_html)
    }
}

/// Parsed markup: the segment sequence produced by [`parse_color_markup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MarkupText {
    segments: Vec<StyledSegment>,
}

impl MarkupText {
    pub fn segments(&self) -> &[StyledSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of break segments
    pub fn break_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_break()).count()
    }

    /// Text content with every break written as `\n` and all styling dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                StyledSegment::Text { content, .. } => out.push_str(content),
                StyledSegment::Break => out.push('\n'),
            }
        }
        out
    }

    /// Merges adjacent text segments that share a color.
    ///
    /// Breaks are never merged and keep their position, so the result draws
    /// exactly the same characters in the same colors.
    pub fn coalesced(&self) -> Self {
        let mut merged: Vec<StyledSegment> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match (merged.last_mut(), segment) {
                (
                    Some(StyledSegment::Text {
                        color: last_color,
                        content: last_content,
                    }),
                    StyledSegment::Text { color, content },
                ) if last_color == color => last_content.push_str(content),
                _ => merged.push(segment.clone()),
            }
        }
        Self { segments: merged }
    }

    /// Splits every text segment into single-character segments.
    ///
    /// This is the granularity [`parse_color_markup`] emits, and the form two
    /// markup texts should be compared in when their runs may differ.
    pub fn split_chars(&self) -> Self {
        let mut split = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                StyledSegment::Text { color, content } => {
                    split.extend(content.chars().map(|ch| StyledSegment::text(*color, ch)));
                }
                StyledSegment::Break => split.push(StyledSegment::Break),
            }
        }
        Self { segments: split }
    }
}

/// Parse color markup into styled segments.
///
/// Total: malformed markup degrades to literal text, so there is no error
/// path. Each visible character becomes its own segment; use
/// [`MarkupText::coalesced`] to merge same-color runs.
pub fn parse_color_markup(raw: &str) -> MarkupText {
    let chars: Vec<char> = raw.chars().collect();
    let mut segments = Vec::with_capacity(chars.len());
    let mut current = PaletteColor::default();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];

        // `&x` switches color only when x is a palette code; otherwise the
        // marker falls through as text and x is scanned on the next pass.
        if ch == DIRECTIVE_MARKER {
            if let Some(color) = chars.get(pos + 1).and_then(|c| PaletteColor::from_code(*c)) {
                current = color;
                pos += 2;
                continue;
            }
        }

        if ch == '\\' && chars.get(pos + 1) == Some(&'n') {
            segments.push(StyledSegment::Break);
            pos += 2;
            continue;
        }

        if ch == '\n' {
            segments.push(StyledSegment::Break);
            pos += 1;
            continue;
        }

        segments.push(StyledSegment::text(current, ch));
        pos += 1;
    }

    MarkupText { segments }
}
