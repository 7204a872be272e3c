//! Shared utility functions for code generation.

/// Convert a C enum name to a Java type-style name.
///
/// Names that already start with an upper-case letter are kept as they are.
/// Otherwise the name is split on `_` and every piece is capitalized
/// (e.g. "vehicle_value_type" -> "VehicleValueType").
pub fn to_java_style_name(name: &str) -> String {
    if name.chars().next().is_some_and(char::is_uppercase) {
        return name.to_string();
    }

    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Prefix used for constants of an enum group (e.g. "VehicleGear" -> "VEHICLEGEAR_").
pub fn constant_prefix(group: &str) -> String {
    format!("{}_", group.to_uppercase())
}

/// Format an integer the way Python's `hex()` does (`0x100`, `-0x1`).
pub fn python_hex(value: i64) -> String {
    if value < 0 {
        format!("-{:#x}", value.unsigned_abs())
    } else {
        format!("{:#x}", value)
    }
}

/// Strip a single layer of surrounding parentheses.
///
/// Only one layer is removed and parentheses are not checked for balance:
/// `"(A)"` becomes `"A"`, `"((A))"` becomes `"(A)"`, `"(A) | (B)"` becomes `"A) | (B"`.
pub fn strip_outer_parens(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('(') && value.ends_with(')') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_java_style_name() {
        assert_eq!(to_java_style_name("already_lower"), "AlreadyLower");
        assert_eq!(to_java_style_name("vehicle_value_type"), "VehicleValueType");
        assert_eq!(to_java_style_name("AlreadyGood"), "AlreadyGood");
        assert_eq!(to_java_style_name("Mixed_case_name"), "Mixed_case_name");
        assert_eq!(to_java_style_name("gear"), "Gear");
        assert_eq!(to_java_style_name(""), "");
    }

    #[test]
    fn test_to_java_style_name_keeps_inner_case() {
        assert_eq!(to_java_style_name("hvac_fanDirection"), "HvacFanDirection");
        assert_eq!(to_java_style_name("trailing_"), "Trailing");
    }

    #[test]
    fn test_constant_prefix() {
        assert_eq!(constant_prefix("VehicleGear"), "VEHICLEGEAR_");
        assert_eq!(constant_prefix("StatusCode"), "STATUSCODE_");
    }

    #[test]
    fn test_python_hex() {
        assert_eq!(python_hex(0), "0x0");
        assert_eq!(python_hex(256), "0x100");
        assert_eq!(python_hex(0x11100101), "0x11100101");
        assert_eq!(python_hex(-1), "-0x1");
        assert_eq!(python_hex(i64::MIN), "-0x8000000000000000");
    }

    #[test]
    fn test_strip_outer_parens() {
        assert_eq!(strip_outer_parens("(A_VALUE)"), "A_VALUE");
        assert_eq!(strip_outer_parens("A_VALUE"), "A_VALUE");
        assert_eq!(strip_outer_parens("((A))"), "(A)");
        assert_eq!(strip_outer_parens("(A"), "(A");
        assert_eq!(strip_outer_parens("()"), "");
        assert_eq!(strip_outer_parens("("), "(");
    }
}
