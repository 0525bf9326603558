//! Line-oriented source builder
//!
//! Indentation is two spaces per level. Blank lines carry no indentation and
//! the finished text has no trailing newline.

const INDENT: &str = "  ";

#[derive(Debug, Default)]
pub struct SourceBuilder {
    lines: Vec<String>,
    depth: usize,
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current depth
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.depth), text));
        }
        self
    }

    pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in lines {
            self.line(text);
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Write `header`, an opening brace, and indent
    pub fn open(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(header);
        self.line("{");
        self.depth += 1;
        self
    }

    /// Dedent and write a closing brace
    pub fn close(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
        self
    }

    /// `open(header)`, run `body`, `close()`
    pub fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.open(header);
        body(self);
        self.close()
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Comma-separated list, as used in parameter and argument lists
pub fn comma_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
