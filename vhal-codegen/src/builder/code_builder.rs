//! Code builder utility for generating properly indented code.

use super::{CodeFragment, CommentStyle, Indent, Renderable};

/// Mutable API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use vhalgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("public class Consts {")
///     .push_indent()
///     .push_line("public static final int A = 1;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "public class Consts {\n    public static final int A = 1;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    comment: CommentStyle,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent, comment: CommentStyle) -> Self {
        Self {
            indent_level: 0,
            indent,
            comment,
            buffer: String::new(),
        }
    }

    /// 4-space indentation with `//` comments.
    pub fn java() -> Self {
        Self::new(Indent::JAVA, CommentStyle::Slash)
    }

    /// 4-space indentation with `#` comments.
    pub fn python() -> Self {
        Self::new(Indent::PYTHON, CommentStyle::Hash)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line. Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a line comment in this builder's comment style.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        let line = self.comment.line(text);
        self.push_line(&line)
    }

    /// Emit a Renderable node.
    pub fn emit<R: Renderable + ?Sized>(&mut self, node: &R) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let prefix = self.indent.at(self.indent_level);
        self.buffer.push_str(&prefix);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::java();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::java();
        builder
            .push_indent()
            .push_line("a();")
            .push_blank()
            .push_line("b();");
        assert_eq!(builder.build(), "    a();\n\n    b();\n");
    }

    #[test]
    fn test_comment_styles() {
        let mut java = CodeBuilder::java();
        java.push_comment("note");
        assert_eq!(java.build(), "// note\n");

        let mut python = CodeBuilder::python();
        python.push_comment("note");
        assert_eq!(python.build(), "# note\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::python();
        builder.push_dedent().push_line("x = 1");
        assert_eq!(builder.build(), "x = 1\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct SwitchNode;
        impl Renderable for SwitchNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "switch (property) {",
                    vec![
                        CodeFragment::line("case A: return 1;"),
                        CodeFragment::comment("fallthrough"),
                    ],
                    Some("}".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::java();
        builder.emit(&SwitchNode);
        assert_eq!(
            builder.build(),
            "switch (property) {\n    case A: return 1;\n    // fallthrough\n}\n"
        );
    }

    #[test]
    fn test_emit_open_block_and_blank() {
        struct ClassNode;
        impl Renderable for ClassNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::block("class A:", vec![CodeFragment::line("pass")], None),
                    CodeFragment::blank(),
                ]
            }
        }

        let mut builder = CodeBuilder::python();
        builder.emit(&ClassNode);
        assert_eq!(builder.build(), "class A:\n    pass\n\n");
    }
}
