//! The form-builder pipeline engine.
//!
//! [`FormBuilder`] drives a depth-first traversal over a registered DTO
//! type's properties in declaration order. For every property it creates a
//! fresh [`BuilderContext`] and runs the fixed module chain over it; when a
//! module chose to expand a DTO-typed property, the builder recurses into
//! the nested type with the array that module designated. An explicit stack of the
//! types being expanded guards against self-referential type graphs.

pub mod condition;
pub mod context;
pub mod modules;
pub mod tree;

pub use context::BuilderContext;
pub use tree::{ArrayId, FormTree, NodeId};

use anyhow::{Context as _, Result, bail};
use serde_json::Value;

use crate::{
    builder::modules::{FormModule, Module, Outcome, default_pipeline},
    language::{Culture, LanguageProvider},
    metadata::{DtoType, TypeRegistry},
};

/// Compiles registered DTO types into form-description documents.
///
/// One `build` call is one compilation request: synchronous, single-threaded,
/// depth-first over the (cycle-guarded) type graph, producing either the
/// whole document or an error; nothing is partially emitted. Independent
/// requests may run concurrently; each owns an isolated output tree, and the
/// only shared state is the language provider, which must be safe for
/// concurrent reads.
pub struct FormBuilder<'a> {
    registry: &'a TypeRegistry,
    language: &'a dyn LanguageProvider,
    modules: Vec<Module>,
}

impl<'a> FormBuilder<'a> {
    pub fn new(registry: &'a TypeRegistry, language: &'a dyn LanguageProvider) -> Self {
        Self {
            registry,
            language,
            modules: default_pipeline(),
        }
    }

    /// Compile the form description for `type_name` in `culture`.
    pub fn build(&self, type_name: &str, culture: &Culture) -> Result<Vec<Value>> {
        let root = self
            .registry
            .get(type_name)
            .with_context(|| format!("unknown root type '{}'", type_name))?;

        let mut tree = FormTree::new();
        let root_array = tree.root();
        let mut ancestors = Vec::new();
        self.build_type(
            root,
            &root.name,
            "",
            root_array,
            &mut tree,
            &mut ancestors,
            culture,
        )?;
        Ok(tree.into_json())
    }

    #[allow(clippy::too_many_arguments)]
    fn build_type(
        &self,
        dto: &DtoType,
        origin: &str,
        path_prefix: &str,
        parent: ArrayId,
        tree: &mut FormTree,
        ancestors: &mut Vec<String>,
        culture: &Culture,
    ) -> Result<()> {
        ancestors.push(dto.name.clone());
        let result =
            self.build_properties(dto, origin, path_prefix, parent, tree, ancestors, culture);
        ancestors.pop();
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn build_properties(
        &self,
        dto: &DtoType,
        origin: &str,
        path_prefix: &str,
        parent: ArrayId,
        tree: &mut FormTree,
        ancestors: &mut Vec<String>,
        culture: &Culture,
    ) -> Result<()> {
        for property in &dto.properties {
            let full_path = if path_prefix.is_empty() {
                property.name.clone()
            } else {
                format!("{}.{}", path_prefix, property.name)
            };

            let mut descend = None;
            {
                let mut ctx = BuilderContext::new(
                    dto,
                    origin,
                    Some(property),
                    full_path.clone(),
                    culture,
                    ancestors,
                    tree,
                    parent,
                    self.language,
                );
                for module in &self.modules {
                    let outcome = module.process(&mut ctx).with_context(|| {
                        format!("while processing {}.{}", dto.name, property.name)
                    })?;
                    match outcome {
                        Outcome::Continue => {}
                        Outcome::Finish => break,
                        Outcome::Descend(array) => {
                            descend = Some(array);
                            break;
                        }
                    }
                }
            }

            if let Some(array) = descend {
                let Some(nested_name) = property.dto_type.as_deref() else {
                    bail!(
                        "{}.{} expanded into a sub-form but declares no dto type",
                        dto.name,
                        property.name
                    );
                };
                let nested = self.registry.get(nested_name).with_context(|| {
                    format!(
                        "{}.{} references unknown type '{}'",
                        dto.name, property.name, nested_name
                    )
                })?;
                self.build_type(nested, origin, &full_path, array, tree, ancestors, culture)?;
            }
        }
        Ok(())
    }
}
