//! Localized titles merged into the control element.

use anyhow::Result;
use serde_json::json;

use crate::{
    builder::{
        context::BuilderContext,
        modules::{FormModule, Outcome},
    },
    metadata::FormAnnotation,
};

/// Merges a localized `title` field into the current element.
#[derive(Debug)]
pub struct TitleModule;

impl FormModule for TitleModule {
    fn process(&self, ctx: &mut BuilderContext<'_>) -> Result<Outcome> {
        let Some(property) = ctx.property else {
            return Ok(Outcome::Continue);
        };

        for annotation in &property.annotations {
            let FormAnnotation::Title { text } = annotation else {
                continue;
            };

            let title = ctx.text(text);
            ctx.element_fields_mut().insert("title".into(), json!(title));
        }

        Ok(Outcome::Continue)
    }
}
