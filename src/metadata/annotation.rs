//! The fixed set of declarative form annotations.
//!
//! An annotation is compile-time metadata on a DTO property selecting
//! optional form behavior. The set is closed: every recognized kind is
//! handled by exactly one pipeline module, and multiple annotations may
//! attach to one property, each yielding independent output.
//!
//! Text-valued fields (`text`, `placeholder`, `title`) hold localization
//! keys, not display text; modules resolve them through the language
//! collaborator at compile time.

use serde::{Deserialize, Serialize};

/// Severity of a help annotation, mapped to a CSS bucket by the help module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpSeverity {
    #[default]
    Info,
    Warning,
    Error,
    /// Severities the renderer has no dedicated bucket for. Unknown values
    /// in schema files land here instead of failing deserialization.
    #[serde(other)]
    Plain,
}

/// The kind of input control a property renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    #[default]
    Text,
    Textarea,
    Number,
    Checkbox,
    Date,
}

impl ControlKind {
    /// The `type` discriminator the form renderer expects for this control.
    pub fn form_type(self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Textarea => "textarea",
            ControlKind::Number => "number",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Date => "date",
        }
    }
}

/// A declarative annotation on a DTO property.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FormAnnotation {
    /// A help block rendered as a sibling of the control element.
    #[serde(rename_all = "camelCase")]
    Help {
        /// Localization key of the help text.
        text: String,
        #[serde(default)]
        severity: HelpSeverity,
        /// Visibility condition, written against the declaring type's
        /// simple name (e.g. `Customer.Premium == true`).
        #[serde(default)]
        condition: Option<String>,
    },
    /// A localized title merged into the control element.
    Title {
        /// Localization key of the title.
        text: String,
    },
    /// The control definition for the property.
    #[serde(rename_all = "camelCase")]
    Input {
        #[serde(default)]
        control: ControlKind,
        /// Localization key of the placeholder text.
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        read_only: bool,
    },
    /// Expands a DTO-typed property into a nested sub-form.
    #[serde(rename_all = "camelCase")]
    SubForm {
        /// Localization key of the fieldset title.
        #[serde(default)]
        title: Option<String>,
        /// Append the nested properties into the current parent array
        /// instead of an own `fieldset` items array.
        #[serde(default)]
        flatten: bool,
    },
}
