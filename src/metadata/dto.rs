//! DTO type descriptions: a simple name plus properties in declaration order.

use serde::{Deserialize, Serialize};

use crate::metadata::FormAnnotation;

/// Metadata for one declared property of a DTO type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetadata {
    pub name: String,

    /// Name of the nested DTO type when the property is object-valued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dto_type: Option<String>,

    /// Annotations in declaration order. A property without recognized
    /// annotations produces no output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<FormAnnotation>,
}

impl PropertyMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dto_type: None,
            annotations: Vec::new(),
        }
    }

    /// Declare the property as object-valued with the given nested type.
    pub fn dto_type(mut self, type_name: impl Into<String>) -> Self {
        self.dto_type = Some(type_name.into());
        self
    }

    pub fn annotation(mut self, annotation: FormAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A DTO type registered for compilation.
///
/// Property order is declaration order and is preserved through the whole
/// pipeline into the output document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DtoType {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyMetadata>,
}

impl DtoType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::metadata::dto::*;
    use crate::metadata::{ControlKind, FormAnnotation};

    #[test]
    fn test_builder_preserves_declaration_order() {
        let dto = DtoType::new("Customer")
            .property(PropertyMetadata::new("Name"))
            .property(PropertyMetadata::new("Age"))
            .property(PropertyMetadata::new("Address").dto_type("Address"));

        let names: Vec<&str> = dto.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Name", "Age", "Address"]);
        assert_eq!(dto.properties[2].dto_type.as_deref(), Some("Address"));
    }

    #[test]
    fn test_parse_dto_type() {
        let json = r#"{
            "name": "Customer",
            "properties": [
                {
                    "name": "Name",
                    "annotations": [
                        { "kind": "input", "control": "text" },
                        { "kind": "title", "text": "Customer.Name" }
                    ]
                },
                { "name": "Internal" }
            ]
        }"#;
        let dto: DtoType = serde_json::from_str(json).unwrap();

        assert_eq!(dto.name, "Customer");
        assert_eq!(dto.properties.len(), 2);
        assert_eq!(
            dto.properties[0].annotations[0],
            FormAnnotation::Input {
                control: ControlKind::Text,
                placeholder: None,
                read_only: false,
            }
        );
        assert!(dto.properties[1].annotations.is_empty());
    }
}
