//! Double-dispatch traversal.
//!
//! [`Node::accept`] resolves the variant and calls the matching `visit_*`
//! handler with the concretely typed node. Every handler is required, so
//! adding a variant to [`Node`] breaks every visitor until it handles it.
//!
//! The protocol does not walk children on its own. A handler decides when,
//! and whether, to call `accept` on its children.
//!
//! # Example
//!
//! ```text
//! struct Depth;
//!
//! impl Visitor for Depth {
//!     type Output = usize;
//!
//!     fn visit_pointer_of(&mut self, node: &PointerOf) -> usize {
//!         1 + node.pointee.accept(self)
//!     }
//!     // ... one method per variant
//! }
//! ```

use crate::ast::{
    ArrayOf, Assign, Block, Call, DeclLocal, DeclType, Deref, Field, Function, GetRef, Literal,
    Local, Node, PointerOf, Primitive, Program, Return, Static, Type,
};

/// A processor with one handler per node variant.
pub trait Visitor {
    /// Value produced by every handler.
    type Output;

    fn visit_program(&mut self, node: &Program) -> Self::Output;
    fn visit_primitive(&mut self, node: &Primitive) -> Self::Output;
    fn visit_type(&mut self, node: &Type) -> Self::Output;
    fn visit_pointer_of(&mut self, node: &PointerOf) -> Self::Output;
    fn visit_array_of(&mut self, node: &ArrayOf) -> Self::Output;
    fn visit_static(&mut self, node: &Static) -> Self::Output;
    fn visit_literal(&mut self, node: &Literal) -> Self::Output;
    fn visit_decl_local(&mut self, node: &DeclLocal) -> Self::Output;
    fn visit_block(&mut self, node: &Block) -> Self::Output;
    fn visit_function(&mut self, node: &Function) -> Self::Output;
    fn visit_return(&mut self, node: &Return) -> Self::Output;
    fn visit_assign(&mut self, node: &Assign) -> Self::Output;
    fn visit_field(&mut self, node: &Field) -> Self::Output;
    fn visit_deref(&mut self, node: &Deref) -> Self::Output;
    fn visit_get_ref(&mut self, node: &GetRef) -> Self::Output;
    fn visit_decl_type(&mut self, node: &DeclType) -> Self::Output;
    fn visit_local(&mut self, node: &Local) -> Self::Output;
    fn visit_call(&mut self, node: &Call) -> Self::Output;
}

impl Node {
    /// Dispatch to the handler for this node's variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Program(node) => visitor.visit_program(node),
            Node::Primitive(node) => visitor.visit_primitive(node),
            Node::Type(node) => visitor.visit_type(node),
            Node::PointerOf(node) => visitor.visit_pointer_of(node),
            Node::ArrayOf(node) => visitor.visit_array_of(node),
            Node::Static(node) => visitor.visit_static(node),
            Node::Literal(node) => visitor.visit_literal(node),
            Node::DeclLocal(node) => visitor.visit_decl_local(node),
            Node::Assign(node) => visitor.visit_assign(node),
            Node::Block(node) => visitor.visit_block(node),
            Node::Function(node) => visitor.visit_function(node),
            Node::Return(node) => visitor.visit_return(node),
            Node::Field(node) => visitor.visit_field(node),
            Node::DeclType(node) => visitor.visit_decl_type(node),
            Node::Deref(node) => visitor.visit_deref(node),
            Node::GetRef(node) => visitor.visit_get_ref(node),
            Node::Local(node) => visitor.visit_local(node),
            Node::Call(node) => visitor.visit_call(node),
        }
    }
}
