//! Control definitions merged into the current element.

use anyhow::Result;
use serde_json::json;

use crate::{
    builder::{
        context::BuilderContext,
        modules::{FormModule, Outcome},
    },
    metadata::FormAnnotation,
};

/// Writes the control definition for a property: the `type` discriminator,
/// the model `key` (the full property path), and the optional localized
/// placeholder.
#[derive(Debug)]
pub struct ControlModule;

impl FormModule for ControlModule {
    fn process(&self, ctx: &mut BuilderContext<'_>) -> Result<Outcome> {
        let Some(property) = ctx.property else {
            return Ok(Outcome::Continue);
        };

        for annotation in &property.annotations {
            let FormAnnotation::Input {
                control,
                placeholder,
                read_only,
            } = annotation
            else {
                continue;
            };

            let placeholder = placeholder.as_deref().map(|key| ctx.text(key));
            let key = ctx.full_property_path.clone();

            let fields = ctx.element_fields_mut();
            fields.insert("type".into(), json!(control.form_type()));
            fields.insert("key".into(), json!(key));
            if let Some(placeholder) = placeholder {
                fields.insert("placeholder".into(), json!(placeholder));
            }
            if *read_only {
                fields.insert("readonly".into(), json!(true));
            }
        }

        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::builder::modules::control::*;
    use crate::builder::modules::test_support::run_module;
    use crate::language::PassthroughProvider;
    use crate::metadata::{ControlKind, DtoType, PropertyMetadata};

    #[test]
    fn test_control_definition_shape() {
        let dto = DtoType::new("Customer").property(
            PropertyMetadata::new("City").annotation(FormAnnotation::Input {
                control: ControlKind::Text,
                placeholder: Some("Customer.CityPlaceholder".to_string()),
                read_only: false,
            }),
        );

        let (outcome, document) =
            run_module(&ControlModule, &dto, "Address.City", &PassthroughProvider).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(
            document,
            vec![json!({
                "type": "text",
                "key": "Address.City",
                "placeholder": "Customer.CityPlaceholder",
            })]
        );
    }

    #[test]
    fn test_read_only_flag() {
        let dto = DtoType::new("Customer").property(
            PropertyMetadata::new("Id").annotation(FormAnnotation::Input {
                control: ControlKind::Number,
                placeholder: None,
                read_only: true,
            }),
        );

        let (_, document) = run_module(&ControlModule, &dto, "Id", &PassthroughProvider).unwrap();
        assert_eq!(
            document,
            vec![json!({"type": "number", "key": "Id", "readonly": true})]
        );
    }

    #[test]
    fn test_no_input_annotation_is_a_no_op() {
        let dto = DtoType::new("Customer").property(PropertyMetadata::new("Name"));

        let (_, document) = run_module(&ControlModule, &dto, "Name", &PassthroughProvider).unwrap();
        assert!(document.is_empty());
    }
}
