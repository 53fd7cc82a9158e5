//! Declarations and statement containers.
//!
//! Containers (`Program`, `Block`, `DeclType`, `Function` parameters) own
//! their children in order. Appending moves the child in.

use super::Node;

/// Top-level sequence of declarations.
#[derive(Debug, Default)]
pub struct Program {
    pub nodes: Vec<Node>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level node, taking ownership of it.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Statement list, rendered between braces.
#[derive(Debug, Default)]
pub struct Block {
    pub nodes: Vec<Node>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement, taking ownership of it.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<Node> for Block {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Block {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<Node> for Program {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Program {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// Variable declaration: a type expression followed by a name.
#[derive(Debug)]
pub struct DeclLocal {
    pub name: String,
    pub ty: Box<Node>,
}

impl DeclLocal {
    pub fn new(name: impl Into<String>, ty: impl Into<Node>) -> Self {
        DeclLocal {
            name: name.into(),
            ty: Box::new(ty.into()),
        }
    }
}

/// Aggregate type definition (`struct <name>{...};`).
#[derive(Debug)]
pub struct DeclType {
    pub name: String,
    pub fields: Vec<Node>,
}

impl DeclType {
    pub fn new(name: impl Into<String>) -> Self {
        DeclType {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a member declaration, taking ownership of it.
    pub fn push_field(&mut self, field: impl Into<Node>) {
        self.fields.push(field.into());
    }
}

/// Function definition.
///
/// The return type and body are required at construction; parameters are
/// appended afterwards or supplied through [`crate::build::function`].
#[derive(Debug)]
pub struct Function {
    pub name: String,
    pub params: Vec<Node>,
    pub return_type: Box<Node>,
    pub body: Block,
}

impl Function {
    pub fn new(name: impl Into<String>, return_type: impl Into<Node>, body: Block) -> Self {
        Function {
            name: name.into(),
            params: Vec::new(),
            return_type: Box::new(return_type.into()),
            body,
        }
    }

    /// Append a parameter declaration, taking ownership of it.
    pub fn push_param(&mut self, param: impl Into<Node>) {
        self.params.push(param.into());
    }
}
