/// One rendered row of the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Banner(String),
    PromptEcho { cwd: String, input: String },
    Plain(String),
    /// Text with inline `[accent]..[/]` / `[muted]..[/]` tags.
    Rich(String),
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Line::Plain(text.into())
    }

    pub fn rich(markup: impl Into<String>) -> Self {
        Line::Rich(markup.into())
    }

    /// Text of the line with any markup removed.
    pub fn plain_text(&self) -> String {
        match self {
            Line::Banner(text) | Line::Plain(text) => text.clone(),
            Line::PromptEcho { cwd, input } => format!("{cwd} $ {input}"),
            Line::Rich(markup) => strip_markup(markup),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Accent,
    Muted,
}

/// A run of text sharing one style; `None` means the default foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Option<Markup>,
}

/// The scrollback: an append-only log that can only be reset to its banner.
pub struct TerminalBuffer {
    lines: Vec<Line>,
    banner: String,
    max_scrollback: usize,
}

impl TerminalBuffer {
    pub const DEFAULT_SCROLLBACK: usize = 2000;

    pub fn new(banner: impl Into<String>, max_scrollback: usize) -> Self {
        let banner = banner.into();
        Self {
            lines: vec![Line::Banner(banner.clone())],
            banner,
            max_scrollback: max_scrollback.max(1),
        }
    }

    pub fn push_line(&mut self, line: Line) {
        if self.lines.len() >= self.max_scrollback {
            self.lines.remove(0);
        }
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line>) {
        for line in lines {
            self.push_line(line);
        }
    }

    /// Drops everything and reseeds the banner.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.lines.push(Line::Banner(self.banner.clone()));
    }

    pub fn get_lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Splits rich markup into styled spans. Unknown or unbalanced tags are kept
/// as literal text.
pub fn parse_markup(input: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut style = None;
    let mut rest = input;

    while let Some(start) = rest.find('[') {
        current.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find(']') else {
            current.push_str(tail);
            rest = "";
            break;
        };
        let tag = &tail[1..end];
        let next_style = match tag {
            "accent" if style.is_none() => Some(Some(Markup::Accent)),
            "muted" if style.is_none() => Some(Some(Markup::Muted)),
            "/" if style.is_some() => Some(None),
            _ => None,
        };
        match next_style {
            Some(next) => {
                if !current.is_empty() {
                    spans.push(Span {
                        text: std::mem::take(&mut current),
                        style,
                    });
                }
                style = next;
            }
            None => current.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    current.push_str(rest);
    if !current.is_empty() {
        spans.push(Span {
            text: current,
            style,
        });
    }
    spans
}

fn strip_markup(input: &str) -> String {
    parse_markup(input)
        .into_iter()
        .map(|span| span.text)
        .collect()
}
