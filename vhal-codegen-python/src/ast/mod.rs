//! Python AST nodes rendered through [`CodeBuilder`](vhalgen_codegen::builder::CodeBuilder).

mod assign;
mod class;

pub use assign::Assignment;
pub use class::PyClass;
