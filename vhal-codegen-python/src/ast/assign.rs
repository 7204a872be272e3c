use vhalgen_codegen::builder::{CodeFragment, Renderable};

/// A module-level `NAME = value` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    name: String,
    value: String,
}

impl Assignment {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Renderable for Assignment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("{} = {}", self.name, self.value))]
    }
}

#[cfg(test)]
mod tests {
    use vhalgen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_assignment() {
        let mut builder = CodeBuilder::python();
        builder.emit(&Assignment::new("VEHICLEGEAR_GEAR_PARK", "0x4"));
        assert_eq!(builder.build(), "VEHICLEGEAR_GEAR_PARK = 0x4\n");
    }
}
