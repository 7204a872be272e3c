//! Python classes holding list attributes.

use vhalgen_codegen::builder::{CodeFragment, Renderable};

/// A class body of `NAME = [item, ...]` attributes.
///
/// Names are padded to a common width so the `=` signs line up, and
/// multi-item lists continue on new lines aligned with the first item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyClass {
    name: String,
    attributes: Vec<(String, Vec<String>)>,
}

impl PyClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn list_attr<I, S>(mut self, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes
            .push((name.into(), items.into_iter().map(Into::into).collect()));
        self
    }

    fn attribute_lines(&self, width: usize, name: &str, items: &[String]) -> Vec<CodeFragment> {
        let head = format!("{:<width$} = [", name);
        if items.is_empty() {
            return vec![CodeFragment::line(format!("{}]", head))];
        }

        let continuation = " ".repeat(head.len());
        let last = items.len() - 1;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let lead = if i == 0 { head.as_str() } else { continuation.as_str() };
                let tail = if i == last { "]" } else { "," };
                CodeFragment::line(format!("{}{}{}", lead, item, tail))
            })
            .collect()
    }
}

impl Renderable for PyClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let width = self
            .attributes
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);

        let mut body: Vec<CodeFragment> = self
            .attributes
            .iter()
            .flat_map(|(name, items)| self.attribute_lines(width, name, items))
            .collect();
        if body.is_empty() {
            body.push(CodeFragment::line("pass"));
        }

        vec![CodeFragment::block(format!("class {}:", self.name), body, None)]
    }
}
