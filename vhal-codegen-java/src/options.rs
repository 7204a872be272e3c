/// Naming and boilerplate settings for the generated Java class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaOptions {
    pub package: String,
    pub class_name: String,
    /// Input named in the do-not-edit notice
    pub source_label: String,
    /// Copyright year in the license header
    pub year: i32,
    pub value_type_class: String,
    pub change_mode_class: String,
    pub access_class: String,
    /// Value type returned for properties without `@value_type`
    pub unknown_value_type: String,
}

impl JavaOptions {
    pub const DEFAULT_PACKAGE: &'static str = "com.android.car.vehiclenetwork";
    pub const DEFAULT_CLASS_NAME: &'static str = "VehicleNetworkConsts";
    pub const DEFAULT_SOURCE_LABEL: &'static str = "vehicle.h";

    pub fn new(year: i32) -> Self {
        Self {
            package: Self::DEFAULT_PACKAGE.to_string(),
            class_name: Self::DEFAULT_CLASS_NAME.to_string(),
            source_label: Self::DEFAULT_SOURCE_LABEL.to_string(),
            year,
            value_type_class: "VehicleValueType".to_string(),
            change_mode_class: "VehiclePropChangeMode".to_string(),
            access_class: "VehiclePropAccess".to_string(),
            // Spelling matches the constant declared in VehicleValueType
            unknown_value_type: "VEHICLE_VALUE_TYPE_SHOUD_NOT_USE".to_string(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = label.into();
        self
    }
}
