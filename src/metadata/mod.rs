//! Statically registered DTO type metadata.
//!
//! Instead of discovering annotations through ambient runtime reflection, the
//! types being compiled are described up front: a [`DtoType`] lists its
//! properties in declaration order, each property carries the declarative
//! [`FormAnnotation`]s that drive the pipeline modules, and a [`TypeRegistry`]
//! holds all registered types for the duration of a compilation.

pub mod annotation;
pub mod dto;
pub mod registry;

pub use annotation::{ControlKind, FormAnnotation, HelpSeverity};
pub use dto::{DtoType, PropertyMetadata};
pub use registry::TypeRegistry;
