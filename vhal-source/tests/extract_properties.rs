//! Property-based tests for header extraction.
//!
//! The extractor is pattern based, so these tests feed it arbitrary and
//! half-formed text to pin down ordering and the absence of panics.

use proptest::prelude::*;
use vhalgen_source::{Error, HeaderExtractor, SourceSet};

const KEYS: [&str; 6] = [
    "@value_type",
    "@change_mode",
    "@access",
    "@unit",
    "@range_start",
    "@range_end",
];

fn comment_token() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Z_]{1,12}",
        1 => proptest::sample::select(KEYS.to_vec()).prop_map(str::to_string),
        1 => Just("*".to_string()),
    ]
}

fn noisy_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("/**".to_string()),
            Just("*/".to_string()),
            Just("\n".to_string()),
            Just("#define VEHICLE_PROPERTY_".to_string()),
            Just("enum ".to_string()),
            Just("{".to_string()),
            Just("}".to_string()),
            Just(" = ".to_string()),
            Just(",".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            comment_token(),
            "[ \t]{1,3}",
            "\\PC{0,4}",
        ],
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

fn property_block() -> impl Strategy<Value = (Vec<String>, String, bool)> {
    (
        proptest::collection::vec(comment_token(), 0..8),
        "[0-9A-F]{1,8}",
        any::<bool>(),
    )
}

proptest! {
    /// Arbitrary text either extracts or reports a malformed annotation.
    #[test]
    fn extraction_never_panics(text in noisy_text()) {
        let result = HeaderExtractor::new().extract(&SourceSet::from_text("fuzz.h", text));
        if let Err(err) = result {
            let malformed = matches!(*err, Error::MalformedAnnotation { .. });
            prop_assert!(malformed);
        }
    }

    /// Well-formed blocks come back one per block, in source order.
    #[test]
    fn properties_keep_source_order(blocks in proptest::collection::vec(property_block(), 0..6)) {
        let mut text = String::new();
        for (index, (tokens, value, parenthesized)) in blocks.iter().enumerate() {
            // A trailing placeholder keeps value-bearing keys well formed.
            let body = format!("{} END", tokens.join(" "));
            let value = if *parenthesized {
                format!("(0x{})", value)
            } else {
                format!("0x{}", value)
            };
            text.push_str(&format!(
                "/** {} */\n#define VEHICLE_PROPERTY_P{} {}\n\n",
                body, index, value
            ));
        }

        let props = HeaderExtractor::new()
            .extract_properties(&SourceSet::from_text("gen.h", text))
            .unwrap();

        prop_assert_eq!(props.len(), blocks.len());
        for (index, (prop, (_, value, _))) in props.iter().zip(&blocks).enumerate() {
            prop_assert_eq!(&prop.name, &format!("VEHICLE_PROPERTY_P{}", index));
            prop_assert_eq!(&prop.value, &format!("0x{}", value));
        }
    }

    /// Enum entries are kept in order, duplicates included.
    #[test]
    fn enum_entries_keep_order(values in proptest::collection::vec(0u8..4, 0..10)) {
        let body: String = values
            .iter()
            .enumerate()
            .map(|(index, value)| format!("    E_{} = {},\n", index, value))
            .collect();
        let text = format!("enum generated {{\n{}}};\n", body);

        let enums = HeaderExtractor::new().extract_enums(&text);

        prop_assert_eq!(enums.len(), 1);
        prop_assert_eq!(enums[0].entries.len(), values.len());
        for (index, (entry, value)) in enums[0].entries.iter().zip(&values).enumerate() {
            prop_assert_eq!(&entry.name, &format!("E_{}", index));
            prop_assert_eq!(&entry.value, &value.to_string());
        }
    }
}

#[test]
fn test_range_marker_block() {
    let text = concat!(
        "/**\n * Start of the vendor range\n * @range_start\n */\n",
        "#define VEHICLE_PROPERTY_CUSTOM_START (0xf0000000)\n",
    );
    let props = HeaderExtractor::new()
        .extract_properties(&SourceSet::from_text("vehicle.h", text))
        .unwrap();

    assert_eq!(props.len(), 1);
    assert!(props[0].is_range_marker);
    assert_eq!(props[0].value, "0xf0000000");
}
