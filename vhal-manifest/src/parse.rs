//! Manifest parsing from strings.

use std::str::FromStr;

use crate::{Manifest, Result, error::SourceContext, validate::validate_manifest};

impl FromStr for Manifest {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "vhalgen.toml")
    }
}

impl Manifest {
    /// Parse a manifest with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse and validate a manifest.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(ctx.src()).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}
