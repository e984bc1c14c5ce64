//! Greedy word wrapping with a fixed continuation indent.

/// Wraps text to a column budget.
///
/// Wrapping is greedy: at each space the wrapper looks ahead to the next
/// space (or the end of the text) and breaks the line before the space if
/// the next word would cross `width`. The space at a break is dropped and
/// the continuation is indented to the caller's indent. A word that does not
/// fit on a line of its own is hard-broken at `width`. Embedded newlines
/// start a fresh indented line. When the indent already reaches `width`
/// there is no room to wrap into, so the text stays on one line.
///
/// Widths count characters, not bytes.
///
/// # Examples
///
/// ```
/// use clarg_help::TextWrapper;
///
/// let wrapper = TextWrapper::new(20);
/// assert_eq!(
///     wrapper.wrap(0, "aaaa bbbb cccc dddd eeee"),
///     "aaaa bbbb cccc dddd\neeee"
/// );
/// assert_eq!(
///     wrapper.wrap(4, "aaaa bbbb cccc dddd"),
///     "aaaa bbbb cccc\n    dddd"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextWrapper {
    width: usize,
}

impl TextWrapper {
    /// Creates a wrapper for the given width.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// The configured width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Wraps `text` assuming the cursor already sits at column `indent`.
    pub fn wrap(&self, indent: usize, text: &str) -> String {
        let mut out = String::new();
        self.wrap_into(&mut out, indent, text);
        out
    }

    /// Appends wrapped `text` to `out`; the cursor is at column `indent`
    /// and continuation lines are indented to `indent`.
    pub fn wrap_into(&self, out: &mut String, indent: usize, text: &str) {
        self.fill(out, indent, indent, text);
    }

    /// Appends wrapped `text` to `out` starting at column `column`, with
    /// continuation lines indented to `indent`. Returns the final column.
    pub fn fill(&self, out: &mut String, column: usize, indent: usize, text: &str) -> usize {
        let chars: Vec<char> = text.trim_end().chars().collect();
        let mut col = column;
        let mut pending_indent = false;
        let wraps = indent < self.width;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if ch == '\n' {
                out.push('\n');
                pending_indent = true;
                col = indent;
                i += 1;
                continue;
            }

            if wraps && ch == ' ' && col > indent {
                let next = chars[i + 1..]
                    .iter()
                    .position(|&c| c == ' ' || c == '\n')
                    .map_or(chars.len(), |p| i + 1 + p);
                if col + (next - i) > self.width {
                    out.push('\n');
                    pending_indent = true;
                    col = indent;
                    i += 1;
                    continue;
                }
            }

            if wraps && col >= self.width && col > indent {
                out.push('\n');
                pending_indent = true;
                col = indent;
            }

            if pending_indent {
                push_spaces(out, indent);
                pending_indent = false;
            }
            out.push(ch);
            col += 1;
            i += 1;
        }

        col
    }
}

/// Appends `n` spaces.
pub(crate) fn push_spaces(out: &mut String, n: usize) {
    out.extend(std::iter::repeat_n(' ', n));
}
