//! Annotated `#define` properties.

use std::sync::LazyLock;

use miette::{NamedSource, SourceSpan};
use regex::{Match, Regex};
use vhalgen_core::strip_outer_parens;
use vhalgen_ir::{AnnotationKey, PropertyDescriptor};

use crate::{Error, Result, SourceSet};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("token pattern is valid"));

/// A doc comment directly followed by `#define <prefix><suffix> <value>`.
///
/// The comment body is lazy so a match starts at the nearest `/**` and ends
/// at the first `*/` that is immediately followed by a matching define.
pub(super) fn pattern(prefix: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?s)/\*\*(.*?)\*/\n#define\s+{}(\S+)\s+(\S+)",
        regex::escape(prefix)
    ))
}

pub(super) fn extract(
    pattern: &Regex,
    prefix: &str,
    sources: &SourceSet,
) -> Result<Vec<PropertyDescriptor>> {
    let mut properties = Vec::new();

    for caps in pattern.captures_iter(sources.text()) {
        let (Some(body), Some(suffix), Some(raw_value)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };

        let name = format!("{}{}", prefix, suffix.as_str());
        let mut property = PropertyDescriptor::new(name, strip_outer_parens(raw_value.as_str()));
        apply_annotations(&mut property, body, sources)?;
        properties.push(property);
    }

    Ok(properties)
}

/// Single left-to-right walk over the whitespace-separated comment tokens.
fn apply_annotations(
    property: &mut PropertyDescriptor,
    body: Match<'_>,
    sources: &SourceSet,
) -> Result<()> {
    let mut tokens = TOKEN.find_iter(body.as_str());

    while let Some(token) = tokens.next() {
        let Some(key) = AnnotationKey::from_token(token.as_str()) else {
            continue;
        };

        if !key.takes_value() {
            property.apply(key, None);
            continue;
        }

        match tokens.next() {
            Some(value) => property.apply(key, Some(value.as_str())),
            None => {
                let offset = body.start() + token.start();
                return Err(malformed_annotation(
                    sources,
                    offset,
                    token.len(),
                    key,
                    &property.name,
                ));
            }
        }
    }

    Ok(())
}

fn malformed_annotation(
    sources: &SourceSet,
    offset: usize,
    len: usize,
    key: AnnotationKey,
    property: &str,
) -> Box<Error> {
    let (src, local) = match sources.locate(offset) {
        Some((file, local)) => (file.named_source(), local),
        None => (
            NamedSource::new("<input>", sources.text().to_string()),
            offset,
        ),
    };

    Box::new(Error::MalformedAnnotation {
        src,
        span: SourceSpan::from((local, len)),
        key: key.to_string(),
        property: property.to_string(),
    })
}
