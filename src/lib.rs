//! Schemaform - declarative DTO metadata to JSON form descriptions
//!
//! Schemaform compiles metadata attached to DTO type definitions into nested,
//! JSON-serializable form-description documents consumed by a dynamic
//! form-rendering UI. Properties carry declarative annotations (help texts,
//! titles, control definitions, sub-form expansions); an ordered pipeline of
//! modules turns each annotated property into output nodes.
//!
//! ## Module Structure
//!
//! - `builder`: The form-builder pipeline (traversal engine, per-property
//!   context, module chain, condition rewriting, output tree)
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `language`: Localized text resolution (culture chain, message catalogs)
//! - `metadata`: Statically registered DTO type metadata and annotations

pub mod builder;
pub mod cli;
pub mod config;
pub mod language;
pub mod metadata;
