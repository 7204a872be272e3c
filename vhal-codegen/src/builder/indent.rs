//! Indentation unit of a target language.

/// Number of spaces per indentation level.
///
/// Both targets indent with spaces only; tabs never appear in the
/// generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// AOSP Java style.
    pub const JAVA: Self = Self(4);

    /// PEP 8.
    pub const PYTHON: Self = Self(4);

    pub const fn spaces(width: u8) -> Self {
        Self(width)
    }

    pub fn width(&self) -> usize {
        usize::from(self.0)
    }

    /// Leading whitespace for `level` nested levels.
    pub fn at(&self, level: usize) -> String {
        " ".repeat(self.width() * level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
