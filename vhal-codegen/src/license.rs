//! Apache 2.0 license header in each target's comment syntax.

use crate::builder::{CodeFragment, CommentStyle, Renderable};

const APACHE_BODY: &[&str] = &[
    "",
    "Licensed under the Apache License, Version 2.0 (the \"License\");",
    "you may not use this file except in compliance with the License.",
    "You may obtain a copy of the License at",
    "",
    "     http://www.apache.org/licenses/LICENSE-2.0",
    "",
    "Unless required by applicable law or agreed to in writing, software",
    "distributed under the License is distributed on an \"AS IS\" BASIS,",
    "WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.",
    "See the License for the specific language governing permissions and",
    "limitations under the License.",
];

/// License header placed at the top of every generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHeader {
    year: i32,
    holder: String,
    style: CommentStyle,
}

impl LicenseHeader {
    pub const DEFAULT_HOLDER: &'static str = "The Android Open Source Project";

    pub fn apache(year: i32, style: CommentStyle) -> Self {
        Self {
            year,
            holder: Self::DEFAULT_HOLDER.to_string(),
            style,
        }
    }

    pub fn with_holder(mut self, holder: impl Into<String>) -> Self {
        self.holder = holder.into();
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The license text, one entry per line, without comment markers.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Copyright (C) {} {}", self.year, self.holder)];
        lines.extend(APACHE_BODY.iter().map(|l| l.to_string()));
        lines
    }
}

impl Renderable for LicenseHeader {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let lines = self.text_lines();
        match self.style {
            CommentStyle::Slash => {
                let mut fragments = vec![CodeFragment::line("/*")];
                fragments.extend(lines.iter().map(|l| {
                    if l.is_empty() {
                        CodeFragment::line(" *")
                    } else {
                        CodeFragment::line(format!(" * {}", l))
                    }
                }));
                fragments.push(CodeFragment::line(" */"));
                fragments
            }
            CommentStyle::Hash => lines.iter().map(CodeFragment::comment).collect(),
        }
    }
}
