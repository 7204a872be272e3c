//! Shared code generation utilities for vhalgen.
//!
//! This crate provides language-agnostic abstractions used by the language
//! renderers (`vhalgen-codegen-java`, `vhalgen-codegen-python`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`license`] - License boilerplate in each target's comment syntax
//! - [`language`] - The LanguageCodegen trait and preview types
//! - [`pipeline`] - Validation of the extracted model before rendering

pub mod builder;
pub mod language;
pub mod license;
pub mod pipeline;
