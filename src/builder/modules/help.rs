//! Help decorations: `help` nodes placed as siblings of the control element.

use anyhow::{Context, Result};
use serde_json::{Map, json};

use crate::{
    builder::{
        condition::rewrite_condition,
        context::BuilderContext,
        modules::{FormModule, Outcome},
    },
    metadata::{FormAnnotation, HelpSeverity},
};

/// Adds help information to the form for every help annotation on the
/// current property.
///
/// Help nodes are appended into the parent array, never merged into the
/// control element, so help blocks surround a control and each one carries
/// its own condition.
#[derive(Debug)]
pub struct HelpModule;

impl FormModule for HelpModule {
    fn process(&self, ctx: &mut BuilderContext<'_>) -> Result<Outcome> {
        let Some(property) = ctx.property else {
            return Ok(Outcome::Continue);
        };

        for annotation in &property.annotations {
            let FormAnnotation::Help {
                text,
                severity,
                condition,
            } = annotation
            else {
                continue;
            };

            let bucket = help_css_classes(*severity);
            let help_text = ctx.text(text);

            let mut fields = Map::new();
            fields.insert("type".into(), json!("help"));
            fields.insert(
                "helpvalue".into(),
                json!(format!("<div class=\"{}\">{}</div>", bucket, help_text)),
            );

            if let Some(condition) = condition.as_deref().filter(|c| !c.is_empty()) {
                let rewritten =
                    rewrite_condition(&ctx.dto_type.name, &ctx.full_property_path, condition)
                        .with_context(|| {
                            format!(
                                "invalid condition on help annotation of {}.{}",
                                ctx.dto_type.name, property.name
                            )
                        })?;
                fields.insert("condition".into(), json!(rewritten));
            }

            let node = ctx.tree.append_node(ctx.parent);
            *ctx.tree.fields_mut(node) = fields;
        }

        Ok(Outcome::Continue)
    }
}

/// CSS classes for a help block. Unknown severities get the bare `alert`
/// bucket instead of failing.
fn help_css_classes(severity: HelpSeverity) -> &'static str {
    match severity {
        HelpSeverity::Info => "alert alert-info",
        HelpSeverity::Warning => "alert alert-warning",
        HelpSeverity::Error => "alert alert-error",
        HelpSeverity::Plain => "alert",
    }
}
