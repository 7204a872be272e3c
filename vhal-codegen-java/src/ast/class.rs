//! Java class declarations.

use vhalgen_codegen::builder::{CodeFragment, Renderable};

/// A class whose members are separated by blank lines.
///
/// A member is any run of fragments, e.g. a block of constants or a method.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaClass {
    name: String,
    nested: bool,
    members: Vec<Vec<CodeFragment>>,
}

impl JavaClass {
    /// A top-level `public class`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nested: false,
            members: Vec::new(),
        }
    }

    /// A nested `public static class`.
    pub fn nested(name: impl Into<String>) -> Self {
        Self {
            nested: true,
            ..Self::new(name)
        }
    }

    /// Add a member. Members rendering to nothing are dropped, so an empty
    /// constant block leaves no stray blank line.
    pub fn member<R: Renderable + ?Sized>(mut self, member: &R) -> Self {
        let fragments = member.to_fragments();
        if !fragments.is_empty() {
            self.members.push(fragments);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for JavaClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let modifiers = if self.nested {
            "public static class"
        } else {
            "public class"
        };

        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(member.iter().cloned());
        }

        vec![CodeFragment::block(
            format!("{} {} {{", modifiers, self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
