//! `public static final int` declarations.

use vhalgen_codegen::builder::{CodeFragment, Renderable};

/// A `public static final int NAME = VALUE;` field. The value is emitted
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntConst {
    name: String,
    value: String,
}

impl IntConst {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Renderable for IntConst {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "public static final int {} = {};",
            self.name, self.value
        ))]
    }
}
