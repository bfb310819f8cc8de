//! Text measurement and line fitting shared by the span model and renderers.

use console::Style;
use unicode_width::UnicodeWidthChar;

/// Column width of one character.
///
/// Control characters, including the line terminator, count as one column so
/// that a span's length matches the number of characters it carries.
pub(crate) fn char_width(c: char) -> usize {
    c.width().unwrap_or(1)
}

/// Returns the column width of `s`.
///
/// # Example
///
/// ```rust
/// use spanview::text_width;
///
/// assert_eq!(text_width("Name"), 4);
/// assert_eq!(text_width("日本"), 4);
/// assert_eq!(text_width(""), 0);
/// ```
pub fn text_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// A run of text sharing one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Run {
    pub text: String,
    pub style: Option<Style>,
}

/// One painted line: styled runs and their total column width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Line {
    pub runs: Vec<Run>,
    pub width: usize,
}

impl Line {
    fn push(&mut self, c: char, w: usize, style: Option<&Style>) {
        match self.runs.last_mut() {
            Some(run) if run.style.as_ref() == style => run.text.push(c),
            _ => self.runs.push(Run {
                text: c.to_string(),
                style: style.cloned(),
            }),
        }
        self.width += w;
    }

    fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Fits styled runs into at most `height` lines of at most `width` columns.
///
/// A line terminator ends the current line; text that would overflow the
/// width continues on the next line. Output stops once `height` lines are
/// produced. Zero-width and control characters are not painted.
pub(crate) fn fit_lines<'a, I>(runs: I, width: usize, height: usize) -> Vec<Line>
where
    I: IntoIterator<Item = (&'a str, Option<&'a Style>)>,
{
    let mut lines = Vec::new();
    if width == 0 || height == 0 {
        return lines;
    }

    let mut current = Line::default();
    'runs: for (text, style) in runs {
        for c in text.chars() {
            if c == '\n' {
                lines.push(std::mem::take(&mut current));
                if lines.len() >= height {
                    break 'runs;
                }
                continue;
            }
            if c.is_control() {
                continue;
            }

            let w = match c.width() {
                Some(w) if w > 0 => w,
                _ => continue,
            };
            if w > width {
                // Can never fit on any line of this region.
                continue;
            }
            if current.width + w > width {
                lines.push(std::mem::take(&mut current));
                if lines.len() >= height {
                    break 'runs;
                }
            }
            current.push(c, w, style);
        }
    }

    if !current.is_empty() && lines.len() < height {
        lines.push(current);
    }
    lines
}
