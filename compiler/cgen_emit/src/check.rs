//! Structural validation.
//!
//! The type system already rules out missing children. What it cannot rule
//! out are names that would make the renderer emit malformed text: empty
//! names, names that are not C identifiers, and duplicate member or
//! parameter names. [`Checker`] is a second [`Visitor`] that walks the whole
//! tree and collects every such problem instead of stopping at the first.
//!
//! Semantic checks (undeclared identifiers, type mismatches) are out of
//! scope. Literal payloads are not inspected.

use cgen_ir::{
    ArrayOf, Assign, Block, Call, DeclLocal, DeclType, Deref, Field, Function, GetRef, Literal,
    Local, Node, PointerOf, Primitive, Program, Return, Static, Type, Visitor,
};
use cgen_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

/// A structural problem found by [`check`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("{kind} has an empty name")]
    EmptyName { kind: &'static str },

    #[error("{kind} name `{name}` is not a valid identifier")]
    InvalidIdentifier { kind: &'static str, name: String },

    #[error("struct `{ty}` declares field `{field}` more than once")]
    DuplicateField { ty: String, field: String },

    #[error("function `{function}` declares parameter `{param}` more than once")]
    DuplicateParameter { function: String, param: String },
}

/// Validate `root`, returning every problem found.
#[tracing::instrument(level = "debug", skip_all, fields(root = root.kind_name()))]
pub fn check(root: &Node) -> Result<(), Vec<CheckError>> {
    let mut checker = Checker::new();
    root.accept(&mut checker);
    let errors = checker.finish();
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "validation failed");
        Err(errors)
    }
}

/// Whether `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The name a parameter or field declares: a `DeclLocal`, possibly
/// wrapped in `ArrayOf` (`char* argv[]` is built that way).
fn declared_name(node: &Node) -> Option<&str> {
    if let Some(decl) = node.downcast_ref::<DeclLocal>() {
        return Some(&decl.name);
    }
    node.downcast_ref::<ArrayOf>()
        .and_then(|array| declared_name(&array.element))
}

/// Collecting validator.
#[derive(Debug, Default)]
pub struct Checker {
    errors: Vec<CheckError>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors collected so far.
    pub fn errors(&self) -> &[CheckError] {
        &self.errors
    }

    /// Consume the checker, returning everything it found.
    pub fn finish(self) -> Vec<CheckError> {
        self.errors
    }

    fn walk(&mut self, node: &Node) {
        ensure_sufficient_stack(|| node.accept(self));
    }

    fn walk_all(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.walk(node);
        }
    }

    fn name(&mut self, kind: &'static str, name: &str) {
        if name.is_empty() {
            self.errors.push(CheckError::EmptyName { kind });
        } else if !is_identifier(name) {
            self.errors.push(CheckError::InvalidIdentifier {
                kind,
                name: name.to_string(),
            });
        }
    }

    /// Report each declared name that repeats within `nodes`.
    fn duplicates(nodes: &[Node]) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        let mut repeated = Vec::new();
        for name in nodes.iter().filter_map(declared_name) {
            if !name.is_empty() && !seen.insert(name) {
                repeated.push(name);
            }
        }
        repeated
    }
}

impl Visitor for Checker {
    type Output = ();

    fn visit_program(&mut self, node: &Program) {
        self.walk_all(&node.nodes);
    }

    fn visit_primitive(&mut self, _node: &Primitive) {}

    fn visit_type(&mut self, node: &Type) {
        self.name("Type", &node.name);
    }

    fn visit_pointer_of(&mut self, node: &PointerOf) {
        self.walk(&node.pointee);
    }

    fn visit_array_of(&mut self, node: &ArrayOf) {
        self.walk(&node.element);
    }

    fn visit_static(&mut self, node: &Static) {
        self.walk(&node.decl);
    }

    fn visit_literal(&mut self, _node: &Literal) {}

    fn visit_decl_local(&mut self, node: &DeclLocal) {
        self.name("DeclLocal", &node.name);
        self.walk(&node.ty);
    }

    fn visit_block(&mut self, node: &Block) {
        self.walk_all(&node.nodes);
    }

    fn visit_function(&mut self, node: &Function) {
        self.name("Function", &node.name);
        self.walk(&node.return_type);
        self.walk_all(&node.params);
        for param in Self::duplicates(&node.params) {
            self.errors.push(CheckError::DuplicateParameter {
                function: node.name.clone(),
                param: param.to_string(),
            });
        }
        ensure_sufficient_stack(|| self.visit_block(&node.body));
    }

    fn visit_return(&mut self, node: &Return) {
        self.walk(&node.value);
    }

    fn visit_assign(&mut self, node: &Assign) {
        self.walk(&node.lhs);
        self.walk(&node.rhs);
    }

    fn visit_field(&mut self, node: &Field) {
        self.walk(&node.base);
        self.name("Field", &node.name);
    }

    fn visit_deref(&mut self, node: &Deref) {
        self.walk(&node.pointer);
    }

    fn visit_get_ref(&mut self, node: &GetRef) {
        self.walk(&node.target);
    }

    fn visit_decl_type(&mut self, node: &DeclType) {
        self.name("DeclType", &node.name);
        self.walk_all(&node.fields);
        for field in Self::duplicates(&node.fields) {
            self.errors.push(CheckError::DuplicateField {
                ty: node.name.clone(),
                field: field.to_string(),
            });
        }
    }

    fn visit_local(&mut self, node: &Local) {
        self.name("Local", &node.name);
    }

    fn visit_call(&mut self, node: &Call) {
        self.walk(&node.callee);
        self.walk_all(&node.args);
    }
}
