//! `enum name { ... }` blocks.

use std::sync::LazyLock;

use regex::Regex;
use vhalgen_ir::EnumDescriptor;

static ENUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)enum\s+(\S+)\s+\{\S*(.*?)\}").expect("enum pattern is valid")
});

static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+)\s*=\s*(\S+)").expect("enum entry pattern is valid"));

pub(super) fn extract(text: &str) -> Vec<EnumDescriptor> {
    ENUM.captures_iter(text)
        .filter_map(|caps| {
            let name = caps.get(1)?;
            let body = caps.get(2)?;
            Some(parse_enum(name.as_str(), body.as_str()))
        })
        .collect()
}

fn parse_enum(name: &str, body: &str) -> EnumDescriptor {
    let mut descriptor = EnumDescriptor::new(name);

    for caps in ENTRY.captures_iter(body) {
        let (Some(entry), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let value = value.as_str();
        let value = value.strip_suffix(',').unwrap_or(value);
        descriptor.push(entry.as_str(), value);
    }

    descriptor
}
