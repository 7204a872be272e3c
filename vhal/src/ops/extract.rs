//! Extract operations - turn inputs into a model.

use std::path::{Path, PathBuf};

use tracing::info;
use vhalgen_ir::Model;
use vhalgen_source::{Error, HeaderExtractor, Result, SourceSet, open_enum_source};

/// Read the headers in order and extract properties and enums.
pub fn extract_headers(inputs: &[PathBuf], prefix: Option<&str>) -> Result<Model> {
    let extractor = match prefix {
        Some(prefix) => HeaderExtractor::with_prefix(prefix)?,
        None => HeaderExtractor::new(),
    };

    let sources = SourceSet::load(inputs)?;
    let model = extractor.extract(&sources)?;
    info!(
        inputs = inputs.len(),
        properties = model.properties.len(),
        enums = model.enums.len(),
        "extracted headers"
    );
    Ok(model)
}

/// Load the enum groups of an IDL document.
pub fn load_enum_groups(document: Option<&Path>) -> Result<Model> {
    let document = document.ok_or_else(|| Box::new(Error::NoInput))?;
    let groups = open_enum_source(document)?.load_groups()?;
    info!(document = %document.display(), groups = groups.len(), "loaded enum groups");
    Ok(Model::from_groups(groups))
}

/// Input file names joined for the "Autogenerated from" notice.
pub fn source_label(inputs: &[PathBuf]) -> String {
    inputs
        .iter()
        .map(|path| match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
