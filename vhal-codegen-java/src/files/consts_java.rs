//! The constants class generated from vehicle headers.

use vhalgen_codegen::{
    builder::{CodeBuilder, CommentStyle},
    license::LicenseHeader,
};
use vhalgen_core::GeneratedFile;
use vhalgen_ir::Model;

use crate::{
    JavaOptions,
    ast::{IntConst, JavaClass},
    dispatch,
};

/// `<ClassName>.java`: property constants, dispatch methods and one nested
/// class per enum.
pub struct ConstsJava<'a> {
    model: &'a Model,
    options: &'a JavaOptions,
}

impl<'a> ConstsJava<'a> {
    pub fn new(model: &'a Model, options: &'a JavaOptions) -> Self {
        Self { model, options }
    }

    fn class(&self) -> JavaClass {
        let properties = &self.model.properties;
        let consts: Vec<IntConst> = properties
            .iter()
            .map(|p| IntConst::new(&p.name, &p.value))
            .collect();

        let class = JavaClass::new(&self.options.class_name)
            .member(&consts[..])
            .member(&dispatch::value_type_method(properties, self.options))
            .member(&dispatch::property_name_method(properties))
            .member(&dispatch::change_mode_method(properties, self.options))
            .member(&dispatch::access_method(properties, self.options));

        self.model
            .enums
            .iter()
            .fold(class, |class, e| class.member(&dispatch::enum_class(e)))
    }
}

impl GeneratedFile for ConstsJava<'_> {
    fn file_name(&self) -> String {
        format!("{}.java", self.options.class_name)
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder
            .emit(&LicenseHeader::apache(self.options.year, CommentStyle::Slash))
            .push_blank()
            .push_comment(&format!(
                "Autogenerated from {}. Do not modify manually.",
                self.options.source_label
            ))
            .push_blank()
            .push_line(&format!("package {};", self.options.package))
            .push_blank()
            .emit(&self.class());
        builder.build()
    }
}
