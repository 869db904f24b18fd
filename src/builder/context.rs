//! Per-property pipeline state.

use serde_json::{Map, Value};

use crate::{
    builder::tree::{ArrayId, FormTree, NodeId},
    language::{Culture, LanguageContext, LanguageProvider},
    metadata::{DtoType, PropertyMetadata},
};

/// State threaded through the module chain for one property node.
///
/// A context is created immediately before a property's module chain runs and
/// dropped after the chain (and any nested traversal it triggered) completes.
/// It is never shared across siblings or compilation requests; the output
/// tree is reached exclusively through it.
pub struct BuilderContext<'a> {
    /// Declared type of the node currently being processed.
    pub dto_type: &'a DtoType,
    /// Root (branch-entry) type whose compilation led to this node.
    pub origin_dto_type: &'a str,
    /// The property producing output; absent only at the traversal root.
    pub property: Option<&'a PropertyMetadata>,
    /// Dot-delimited path from the model root to the property. Extended on
    /// every descent, never shortened.
    pub full_property_path: String,
    /// Locale used for text resolution.
    pub target_culture: &'a Culture,
    /// Types currently being expanded on this branch, outermost first.
    pub ancestors: &'a [String],
    /// The document under construction.
    pub tree: &'a mut FormTree,
    /// Array the current element belongs to.
    pub parent: ArrayId,
    language: &'a dyn LanguageProvider,
    current_element: Option<NodeId>,
}

impl<'a> BuilderContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dto_type: &'a DtoType,
        origin_dto_type: &'a str,
        property: Option<&'a PropertyMetadata>,
        full_property_path: String,
        target_culture: &'a Culture,
        ancestors: &'a [String],
        tree: &'a mut FormTree,
        parent: ArrayId,
        language: &'a dyn LanguageProvider,
    ) -> Self {
        Self {
            dto_type,
            origin_dto_type,
            property,
            full_property_path,
            target_culture,
            ancestors,
            tree,
            parent,
            language,
            current_element: None,
        }
    }

    /// The current element, created and appended to the parent array on
    /// first call.
    ///
    /// Exactly one append happens no matter how many modules call this;
    /// repeat calls return the cached node.
    pub fn get_or_create_element(&mut self) -> NodeId {
        if let Some(id) = self.current_element {
            return id;
        }
        let id = self.tree.append_node(self.parent);
        self.current_element = Some(id);
        id
    }

    /// Mutable fields of the current element, creating it if needed.
    pub fn element_fields_mut(&mut self) -> &mut Map<String, Value> {
        let id = self.get_or_create_element();
        self.tree.fields_mut(id)
    }

    pub fn current_element(&self) -> Option<NodeId> {
        self.current_element
    }

    /// Culture + type context for the language collaborator. Built fresh on
    /// every call; nothing is cached.
    pub fn language_context(&self) -> LanguageContext<'_> {
        LanguageContext {
            culture: self.target_culture,
            dto_type: &self.dto_type.name,
            origin_dto_type: self.origin_dto_type,
        }
    }

    /// Resolve display text for a key via the language collaborator.
    pub fn text(&self, key: &str) -> String {
        self.language.text(key, &self.language_context())
    }

    /// Whether `type_name` is already being expanded on this branch.
    pub fn is_ancestor(&self, type_name: &str) -> bool {
        self.ancestors.iter().any(|ancestor| ancestor == type_name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::builder::context::*;
    use crate::language::PassthroughProvider;

    fn test_dto() -> DtoType {
        DtoType::new("Customer").property(PropertyMetadata::new("Name"))
    }

    #[test]
    fn test_get_or_create_element_is_idempotent() {
        let dto = test_dto();
        let culture = Culture::new("en");
        let provider = PassthroughProvider;
        let ancestors = vec!["Customer".to_string()];
        let mut tree = FormTree::new();
        let root = tree.root();

        let mut ctx = BuilderContext::new(
            &dto,
            "Customer",
            Some(&dto.properties[0]),
            "Name".to_string(),
            &culture,
            &ancestors,
            &mut tree,
            root,
            &provider,
        );

        assert!(ctx.current_element().is_none());
        let first = ctx.get_or_create_element();
        let second = ctx.get_or_create_element();
        assert_eq!(first, second);

        ctx.element_fields_mut().insert("type".into(), json!("text"));
        drop(ctx);

        // Exactly one append to the parent array
        assert_eq!(tree.array_len(root), 1);
        assert_eq!(tree.into_json(), vec![json!({"type": "text"})]);
    }

    #[test]
    fn test_language_context_carries_types_and_culture() {
        let dto = test_dto();
        let culture = Culture::new("de-DE");
        let provider = PassthroughProvider;
        let ancestors = vec!["Order".to_string(), "Customer".to_string()];
        let mut tree = FormTree::new();
        let root = tree.root();

        let ctx = BuilderContext::new(
            &dto,
            "Order",
            Some(&dto.properties[0]),
            "Customer.Name".to_string(),
            &culture,
            &ancestors,
            &mut tree,
            root,
            &provider,
        );

        let lang = ctx.language_context();
        assert_eq!(lang.culture, &Culture::new("de-DE"));
        assert_eq!(lang.dto_type, "Customer");
        assert_eq!(lang.origin_dto_type, "Order");

        assert!(ctx.is_ancestor("Order"));
        assert!(ctx.is_ancestor("Customer"));
        assert!(!ctx.is_ancestor("Address"));
    }
}
