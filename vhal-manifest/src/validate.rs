//! Validation of names that end up in generated code

use crate::{Manifest, Result, error::SourceContext};

/// Java reserved words, including the literals
/// Source: https://docs.oracle.com/javase/specs/jls/se17/html/jls-3.html#jls-3.9
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
];

pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let java = &manifest.java;

    if let Some(package) = &java.package {
        if let Some(reason) = java_package_error(package) {
            return Err(ctx.invalid_identifier_error(package, "java package", reason));
        }
    }

    if let Some(class) = &java.class {
        if let Some(reason) = java_identifier_error(class) {
            return Err(ctx.invalid_identifier_error(class, "java class name", reason));
        }
    }

    if let Some(prefix) = &java.prefix {
        if !is_macro_prefix(prefix) {
            return Err(ctx.validation_error(MACRO_PREFIX_RULE, prefix));
        }
    }

    if let Some(version) = &manifest.python.hal_version {
        if !is_hal_version(version) {
            return Err(ctx.validation_error(
                format!("hal_version '{}' is not of the form <major>.<minor>", version),
                version,
            ));
        }
    }

    Ok(())
}

/// Returns None if `name` is a valid Java identifier, Some(reason) otherwise.
pub fn java_identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };

    if JAVA_KEYWORDS.contains(&name) {
        return Some("name is a Java reserved word");
    }

    if first.is_ascii_digit() {
        return Some("name cannot start with a digit");
    }

    let valid = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    if !valid(first) || !chars.all(valid) {
        return Some("name contains invalid characters");
    }

    None
}

/// Same as [`java_identifier_error`], applied to each dotted segment.
pub fn java_package_error(package: &str) -> Option<&'static str> {
    package.split('.').find_map(java_identifier_error)
}

pub const MACRO_PREFIX_RULE: &str = "prefix must be a non-empty run of letters, digits and '_'";

pub fn is_macro_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Accepts `<major>.<minor>` with decimal components.
pub(crate) fn is_hal_version(version: &str) -> bool {
    match version.split_once('.') {
        Some((major, minor)) => {
            let numeric = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
            numeric(major) && numeric(minor)
        }
        None => false,
    }
}
