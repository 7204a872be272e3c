//! Java AST nodes rendered through [`CodeBuilder`](vhalgen_codegen::builder::CodeBuilder).

mod class;
mod consts;
mod switch;

pub use class::JavaClass;
pub use consts::IntConst;
pub use switch::SwitchMethod;
