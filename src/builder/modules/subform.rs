//! Nested sub-forms for DTO-typed properties.

use anyhow::{Result, bail};
use serde_json::json;

use crate::{
    builder::{
        context::BuilderContext,
        modules::{FormModule, Outcome},
    },
    metadata::FormAnnotation,
};

/// Expands a DTO-typed property into a nested sub-form.
///
/// The property either gets its own `fieldset` element with an embedded
/// `items` array, or its nested properties are flattened into the current
/// parent array. Either way the chain ends here for this property: the
/// orchestrator descends into the nested type with the array this module
/// designates.
///
/// A nested type already being expanded on the branch is a legitimate
/// self-reference; expansion stops at that point without an error.
#[derive(Debug)]
pub struct SubFormModule;

impl FormModule for SubFormModule {
    fn process(&self, ctx: &mut BuilderContext<'_>) -> Result<Outcome> {
        let Some(property) = ctx.property else {
            return Ok(Outcome::Continue);
        };

        for annotation in &property.annotations {
            let FormAnnotation::SubForm { title, flatten } = annotation else {
                continue;
            };

            let Some(nested_type) = property.dto_type.as_deref() else {
                bail!(
                    "sub-form annotation on {}.{} requires the property to declare a dto type",
                    ctx.dto_type.name,
                    property.name
                );
            };

            // Cycle guard
            if ctx.is_ancestor(nested_type) {
                return Ok(Outcome::Finish);
            }

            if *flatten {
                return Ok(Outcome::Descend(ctx.parent));
            }

            let title = title.as_deref().map(|key| ctx.text(key));
            let node = ctx.get_or_create_element();
            let items = ctx.tree.new_array();
            ctx.tree.embed_array(node, "items", items);

            let fields = ctx.tree.fields_mut(node);
            fields.insert("type".into(), json!("fieldset"));
            if let Some(title) = title {
                fields.insert("title".into(), json!(title));
            }

            return Ok(Outcome::Descend(items));
        }

        Ok(Outcome::Continue)
    }
}
