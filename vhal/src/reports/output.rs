//! Output trait for rendering reports to different formats.

use std::io::Write;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render a success line.
    fn success(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Messages go to stdout unless built with [`TerminalOutput::stderr`], which
/// keeps stdout free for a generated document. Warnings always go to stderr.
pub struct TerminalOutput {
    stderr: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { stderr: false }
    }

    pub fn stderr() -> Self {
        Self { stderr: true }
    }

    fn print(&self, text: &str) {
        // Best effort: a closed pipe is not an error here.
        let _ = if self.stderr {
            writeln!(std::io::stderr(), "{}", text)
        } else {
            writeln!(std::io::stdout(), "{}", text)
        };
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.print(&format!("  {}: {}", key, value));
    }

    fn success(&mut self, msg: &str) {
        self.print(&format!("✓ {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        self.print(&format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.print(text);
    }

    fn newline(&mut self) {
        self.print("");
    }
}
