//! Static methods built around a single `switch`.

use vhalgen_codegen::builder::{CodeFragment, Renderable};

/// A `public static` method whose body is one `switch` returning per case.
///
/// ```text
/// public static int getVehicleAccess(int property) {
///     switch (property) {
///         case VEHICLE_PROPERTY_INFO_VIN: return VehiclePropAccess.VEHICLE_PROP_ACCESS_READ;
///         default: return 0;
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchMethod {
    return_type: String,
    name: String,
    param: String,
    cases: Vec<(String, String)>,
    default: String,
}

impl SwitchMethod {
    /// A method `name(int param)` returning `return_type`, falling back to
    /// `default`.
    pub fn new(
        return_type: impl Into<String>,
        name: impl Into<String>,
        param: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
            param: param.into(),
            cases: Vec::new(),
            default: default.into(),
        }
    }

    /// Add `case label: return expr;`.
    pub fn case(mut self, label: impl Into<String>, expr: impl Into<String>) -> Self {
        self.cases.push((label.into(), expr.into()));
        self
    }

    /// Add one case per `(label, expr)` pair, in order.
    pub fn cases<L, E>(mut self, cases: impl IntoIterator<Item = (L, E)>) -> Self
    where
        L: Into<String>,
        E: Into<String>,
    {
        self.cases
            .extend(cases.into_iter().map(|(l, e)| (l.into(), e.into())));
        self
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }
}

impl Renderable for SwitchMethod {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut arms: Vec<CodeFragment> = self
            .cases
            .iter()
            .map(|(label, expr)| CodeFragment::line(format!("case {}: return {};", label, expr)))
            .collect();
        arms.push(CodeFragment::line(format!("default: return {};", self.default)));

        vec![CodeFragment::block(
            format!(
                "public static {} {}(int {}) {{",
                self.return_type, self.name, self.param
            ),
            vec![CodeFragment::block(
                format!("switch ({}) {{", self.param),
                arms,
                Some("}".to_string()),
            )],
            Some("}".to_string()),
        )]
    }
}
