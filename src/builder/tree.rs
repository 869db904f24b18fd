//! The output document as an explicit tree of nodes.
//!
//! Elements and the append-only arrays they belong to live in one arena owned
//! by the traversal. Modules append through [`FormTree`] operations instead of
//! aliasing into a shared JSON value; nested sub-forms embed a child array
//! into an element under a field name. `into_json` materializes the finished
//! document as the root array.

use serde_json::{Map, Value};

/// Identifier of an element node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// Identifier of an append-only array of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayId(usize);

#[derive(Debug, Default)]
struct Node {
    fields: Map<String, Value>,
    /// Arrays embedded under a field name when the tree is rendered.
    embedded: Vec<(String, ArrayId)>,
}

/// Arena holding one form description while it is being built.
#[derive(Debug)]
pub struct FormTree {
    arrays: Vec<Vec<NodeId>>,
    nodes: Vec<Node>,
}

impl FormTree {
    /// A new tree with an empty root array.
    pub fn new() -> Self {
        Self {
            arrays: vec![Vec::new()],
            nodes: Vec::new(),
        }
    }

    /// The root output array of the document.
    pub fn root(&self) -> ArrayId {
        ArrayId(0)
    }

    pub fn new_array(&mut self) -> ArrayId {
        self.arrays.push(Vec::new());
        ArrayId(self.arrays.len() - 1)
    }

    /// Create an empty element and append it to `parent`.
    pub fn append_node(&mut self, parent: ArrayId) -> NodeId {
        self.nodes.push(Node::default());
        let id = NodeId(self.nodes.len() - 1);
        self.arrays[parent.0].push(id);
        id
    }

    pub fn fields_mut(&mut self, node: NodeId) -> &mut Map<String, Value> {
        &mut self.nodes[node.0].fields
    }

    /// Embed `array` into `node` under `field` when the tree is rendered.
    pub fn embed_array(&mut self, node: NodeId, field: impl Into<String>, array: ArrayId) {
        self.nodes[node.0].embedded.push((field.into(), array));
    }

    pub fn array_len(&self, array: ArrayId) -> usize {
        self.arrays[array.0].len()
    }

    /// Materialize the finished document as the root JSON array.
    pub fn into_json(self) -> Vec<Value> {
        self.render_array(self.root())
    }

    fn render_array(&self, array: ArrayId) -> Vec<Value> {
        self.arrays[array.0]
            .iter()
            .map(|node| self.render_node(*node))
            .collect()
    }

    fn render_node(&self, node: NodeId) -> Value {
        let node = &self.nodes[node.0];
        let mut fields = node.fields.clone();
        for (name, array) in &node.embedded {
            fields.insert(name.clone(), Value::Array(self.render_array(*array)));
        }
        Value::Object(fields)
    }
}

impl Default for FormTree {
    fn default() -> Self {
        Self::new()
    }
}
