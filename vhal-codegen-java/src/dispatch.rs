//! Derived dispatch methods and per-enum classes.

use vhalgen_core::to_java_style_name;
use vhalgen_ir::{EnumDescriptor, PropertyDescriptor};

use crate::{
    JavaOptions,
    ast::{IntConst, JavaClass, SwitchMethod},
};

fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

/// `getVehicleValueType`: one case per property carrying `@value_type`.
pub(crate) fn value_type_method(
    properties: &[PropertyDescriptor],
    options: &JavaOptions,
) -> SwitchMethod {
    let class = &options.value_type_class;
    SwitchMethod::new(
        "int",
        "getVehicleValueType",
        "property",
        format!("{}.{}", class, options.unknown_value_type),
    )
    .cases(properties.iter().filter_map(|p| {
        p.value_type
            .as_ref()
            .map(|t| (p.name.clone(), format!("{}.{}", class, t)))
    }))
}

/// `getVehiclePropertyName`: one case per property that is not a range marker.
pub(crate) fn property_name_method(properties: &[PropertyDescriptor]) -> SwitchMethod {
    SwitchMethod::new(
        "String",
        "getVehiclePropertyName",
        "property",
        quoted("UNKNOWN_PROPERTY"),
    )
    .cases(
        properties
            .iter()
            .filter(|p| !p.is_range_marker)
            .map(|p| (p.name.clone(), quoted(&p.name))),
    )
}

/// `getVehicleChangeMode`: the `|`-separated modes as an `int[]`, in order.
pub(crate) fn change_mode_method(
    properties: &[PropertyDescriptor],
    options: &JavaOptions,
) -> SwitchMethod {
    let class = &options.change_mode_class;
    SwitchMethod::new("int[]", "getVehicleChangeMode", "property", "null").cases(
        properties
            .iter()
            .filter(|p| p.change_mode.is_some())
            .map(|p| {
                let modes: Vec<String> = p
                    .change_modes()
                    .iter()
                    .map(|m| format!("{}.{}", class, m))
                    .collect();
                (p.name.clone(), format!("new int[] {{ {} }}", modes.join(" , ")))
            }),
    )
}

/// `getVehicleAccess`: one case per property carrying `@access`.
pub(crate) fn access_method(
    properties: &[PropertyDescriptor],
    options: &JavaOptions,
) -> SwitchMethod {
    let class = &options.access_class;
    SwitchMethod::new("int", "getVehicleAccess", "property", "0").cases(
        properties.iter().filter_map(|p| {
            p.access
                .as_ref()
                .map(|a| (p.name.clone(), format!("{}.{}", class, a)))
        }),
    )
}

/// Nested class for one enum: every entry as a constant, plus `enumToString`
/// over the first entry of each value.
pub(crate) fn enum_class(descriptor: &EnumDescriptor) -> JavaClass {
    let consts: Vec<IntConst> = descriptor
        .entries
        .iter()
        .map(|e| IntConst::new(&e.name, &e.value))
        .collect();

    let to_string = SwitchMethod::new("String", "enumToString", "v", quoted("UNKNOWN")).cases(
        descriptor
            .first_by_value()
            .map(|e| (e.name.clone(), quoted(&e.name))),
    );

    JavaClass::nested(to_java_style_name(&descriptor.name))
        .member(&consts[..])
        .member(&to_string)
}

#[cfg(test)]
mod tests {
    use vhalgen_codegen::builder::CodeBuilder;

    use super::*;

    fn render(node: &impl vhalgen_codegen::builder::Renderable) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(node);
        builder.build()
    }

    fn properties() -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::new("VEHICLE_PROPERTY_INFO_VIN", "0x00000100")
                .with_value_type("VEHICLE_VALUE_TYPE_STRING")
                .with_change_mode("VEHICLE_PROP_CHANGE_MODE_STATIC")
                .with_access("VEHICLE_PROP_ACCESS_READ"),
            PropertyDescriptor::new("VEHICLE_PROPERTY_HVAC_FAN_SPEED", "0x00000500")
                .with_change_mode(
                    "VEHICLE_PROP_CHANGE_MODE_ON_CHANGE|VEHICLE_PROP_CHANGE_MODE_CONTINUOUS",
                ),
            PropertyDescriptor::new("VEHICLE_PROPERTY_INTERNAL_START", "0x70000000")
                .range_marker(),
        ]
    }

    #[test]
    fn test_value_type_skips_untyped() {
        let method = value_type_method(&properties(), &JavaOptions::new(2015));
        assert_eq!(method.case_count(), 1);
        let out = render(&method);
        assert!(out.contains(
            "case VEHICLE_PROPERTY_INFO_VIN: return VehicleValueType.VEHICLE_VALUE_TYPE_STRING;"
        ));
        assert!(out.contains("default: return VehicleValueType.VEHICLE_VALUE_TYPE_SHOUD_NOT_USE;"));
    }

    #[test]
    fn test_property_name_skips_range_markers() {
        let out = render(&property_name_method(&properties()));
        let case =
            "case VEHICLE_PROPERTY_HVAC_FAN_SPEED: return \"VEHICLE_PROPERTY_HVAC_FAN_SPEED\";";
        assert!(out.contains(case));
        assert!(!out.contains("VEHICLE_PROPERTY_INTERNAL_START"));
        assert!(out.contains("default: return \"UNKNOWN_PROPERTY\";"));
    }

    #[test]
    fn test_change_mode_array_in_split_order() {
        let out = render(&change_mode_method(&properties(), &JavaOptions::new(2015)));
        assert!(out.contains(concat!(
            "case VEHICLE_PROPERTY_HVAC_FAN_SPEED: return new int[] { ",
            "VehiclePropChangeMode.VEHICLE_PROP_CHANGE_MODE_ON_CHANGE , ",
            "VehiclePropChangeMode.VEHICLE_PROP_CHANGE_MODE_CONTINUOUS };",
        )));
        assert!(out.contains("default: return null;"));
    }

    #[test]
    fn test_access_default_zero() {
        let method = access_method(&properties(), &JavaOptions::new(2015));
        assert_eq!(method.case_count(), 1);
        assert!(render(&method).contains("default: return 0;"));
    }

    #[test]
    fn test_enum_class_first_value_wins() {
        let descriptor = EnumDescriptor::new("vehicle_zone")
            .entry("VEHICLE_ZONE_ROW_1_LEFT", "0x00000001")
            .entry("VEHICLE_ZONE_ROW_1_DRIVER", "0x00000001")
            .entry("VEHICLE_ZONE_ROW_1_RIGHT", "0x00000004");
        let out = render(&enum_class(&descriptor));

        assert!(out.starts_with("public static class VehicleZone {\n"));
        assert!(out.contains("public static final int VEHICLE_ZONE_ROW_1_DRIVER = 0x00000001;"));
        assert!(out.contains("case VEHICLE_ZONE_ROW_1_LEFT: return \"VEHICLE_ZONE_ROW_1_LEFT\";"));
        assert!(!out.contains("case VEHICLE_ZONE_ROW_1_DRIVER"));
        assert!(out.contains("case VEHICLE_ZONE_ROW_1_RIGHT:"));
    }

    #[test]
    fn test_empty_enum_class_has_only_default() {
        let out = render(&enum_class(&EnumDescriptor::new("vehicle_empty")));
        assert_eq!(
            out,
            concat!(
                "public static class VehicleEmpty {\n",
                "    public static String enumToString(int v) {\n",
                "        switch (v) {\n",
                "            default: return \"UNKNOWN\";\n",
                "        }\n",
                "    }\n",
                "}\n",
            )
        );
    }
}
