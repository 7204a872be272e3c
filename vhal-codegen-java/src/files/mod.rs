//! Generated Java files.

mod consts_java;

pub use consts_java::ConstsJava;
