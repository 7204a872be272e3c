//! The emulator constants module generated from enum groups.

use tracing::info;
use vhalgen_codegen::{
    builder::{CodeBuilder, CommentStyle},
    license::LicenseHeader,
};
use vhalgen_core::{GeneratedFile, constant_prefix, python_hex};
use vhalgen_ir::{EnumGroup, Model};

use crate::{
    PythonOptions,
    ast::{Assignment, PyClass},
};

/// Group whose constants back the emulator's value-type table.
const VALUE_TYPE_GROUP: &str = "VehiclePropertyType";

/// Emulator value types and the property-type cases each one accepts.
pub const VALUE_TYPES: &[(&str, &[&str])] = &[
    ("TYPE_STRING", &["STRING"]),
    ("TYPE_BYTES", &["BYTES"]),
    ("TYPE_INT32", &["BOOLEAN", "INT32"]),
    ("TYPE_INT64", &["INT64"]),
    ("TYPE_FLOAT", &["FLOAT"]),
    ("TYPE_INT32S", &["INT32_VEC"]),
    ("TYPE_FLOATS", &["FLOAT_VEC"]),
    ("TYPE_COMPLEX", &["COMPLEX"]),
];

/// `vhal_consts_<major>_<minor>.py`: one assignment per enum case, then the
/// value-type container class.
pub struct VhalConstsPy<'a> {
    groups: &'a [EnumGroup],
    options: &'a PythonOptions,
}

impl<'a> VhalConstsPy<'a> {
    pub fn new(model: &'a Model, options: &'a PythonOptions) -> Self {
        Self {
            groups: &model.groups,
            options,
        }
    }

    fn group_assignments(group: &EnumGroup) -> Vec<Assignment> {
        let prefix = constant_prefix(&group.name);
        group
            .cases
            .iter()
            .map(|case| Assignment::new(format!("{}{}", prefix, case.name), python_hex(case.value)))
            .collect()
    }

    fn value_types_class(&self) -> PyClass {
        let prefix = constant_prefix(VALUE_TYPE_GROUP);
        let name = format!("vhal_types_{}", self.options.hal_version.suffix());
        VALUE_TYPES.iter().fold(PyClass::new(name), |class, (attr, cases)| {
            class.list_attr(*attr, cases.iter().map(|c| format!("{}{}", prefix, c)))
        })
    }
}

impl GeneratedFile for VhalConstsPy<'_> {
    fn file_name(&self) -> String {
        format!("vhal_consts_{}.py", self.options.hal_version.suffix())
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::python();
        builder
            .emit(&LicenseHeader::apache(self.options.year, CommentStyle::Hash))
            .push_comment("")
            .push_comment("DO NOT EDIT MANUALLY")
            .push_comment(&format!(
                "This file was autogenerated by {}",
                self.options.generator_label
            ));

        for group in self.groups {
            info!(group = %group.name, cases = group.cases.len(), "emitting enum group");
            builder
                .push_blank()
                .push_comment(&group.name)
                .emit(&Self::group_assignments(group)[..]);
        }

        builder
            .push_blank()
            .push_comment("Create a container of value_type constants to be used by vhal_emulator")
            .emit(&self.value_types_class());
        builder.build()
    }
}
