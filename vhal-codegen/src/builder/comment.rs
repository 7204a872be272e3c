/// Line comment syntax of a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// text`, with `/* ... */` blocks (Java, C).
    Slash,
    /// `# text` (Python).
    Hash,
}

impl CommentStyle {
    pub fn line_prefix(&self) -> &'static str {
        match self {
            Self::Slash => "//",
            Self::Hash => "#",
        }
    }

    /// Format one comment line. Empty text yields the bare prefix, with no
    /// trailing whitespace.
    pub fn line(&self, text: &str) -> String {
        if text.is_empty() {
            self.line_prefix().to_string()
        } else {
            format!("{} {}", self.line_prefix(), text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_lines() {
        assert_eq!(CommentStyle::Slash.line("note"), "// note");
        assert_eq!(CommentStyle::Hash.line("note"), "# note");
        assert_eq!(CommentStyle::Hash.line(""), "#");
    }
}
