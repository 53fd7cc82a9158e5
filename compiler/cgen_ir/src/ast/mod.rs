//! Syntax tree for the C-like output language.
//!
//! `Node` is a closed sum over every variant. Each variant is its own struct
//! so visitors receive concretely typed nodes.
//!
//! # Ownership
//!
//! Children are held in `Box<Node>` or `Vec<Node>` and are always moved in.
//! Nodes implement neither `Clone` nor `PartialEq`: a subtree has exactly one
//! owner, and dropping the root drops the whole tree once. Teardown uses an
//! explicit worklist, so dropping a very deep tree does not recurse.
//!
//! ```compile_fail
//! use cgen_ir::{build, Block};
//!
//! let decl = build::decl_local("x", build::i32());
//! let mut a = Block::new();
//! let mut b = Block::new();
//! a.push(decl);
//! b.push(decl); // `decl` was moved into `a`
//! ```
//!
//! ```compile_fail
//! fn assert_clone<T: Clone>() {}
//! assert_clone::<cgen_ir::Node>();
//! ```
//!
//! # Module Structure
//!
//! - `types`: type expressions (`Primitive`, `Type`, `PointerOf`, `ArrayOf`, `Static`)
//! - `decls`: declarations and containers (`Program`, `Block`, `DeclLocal`, `DeclType`, `Function`)
//! - `exprs`: expressions and simple statements
//! - `teardown`: iterative `Drop` for every child-owning variant

mod decls;
mod exprs;
mod teardown;
mod types;

pub use decls::{Block, DeclLocal, DeclType, Function, Program};
pub use exprs::{Assign, Call, Deref, Field, GetRef, Literal, LiteralValue, Local, Return};
pub use types::{ArrayOf, PointerOf, Primitive, PrimitiveKind, Static, Type};

/// A syntax tree node.
#[derive(Debug)]
pub enum Node {
    Program(Program),
    Primitive(Primitive),
    Type(Type),
    PointerOf(PointerOf),
    ArrayOf(ArrayOf),
    Static(Static),
    Literal(Literal),
    DeclLocal(DeclLocal),
    Assign(Assign),
    Block(Block),
    Function(Function),
    Return(Return),
    Field(Field),
    DeclType(DeclType),
    Deref(Deref),
    GetRef(GetRef),
    Local(Local),
    Call(Call),
}

impl Node {
    /// Variant name, for diagnostics and trace output.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::Primitive(_) => "Primitive",
            Node::Type(_) => "Type",
            Node::PointerOf(_) => "PointerOf",
            Node::ArrayOf(_) => "ArrayOf",
            Node::Static(_) => "Static",
            Node::Literal(_) => "Literal",
            Node::DeclLocal(_) => "DeclLocal",
            Node::Assign(_) => "Assign",
            Node::Block(_) => "Block",
            Node::Function(_) => "Function",
            Node::Return(_) => "Return",
            Node::Field(_) => "Field",
            Node::DeclType(_) => "DeclType",
            Node::Deref(_) => "Deref",
            Node::GetRef(_) => "GetRef",
            Node::Local(_) => "Local",
            Node::Call(_) => "Call",
        }
    }

    /// View this node as variant `V`, or `None` if it is another variant.
    pub fn downcast_ref<V: Variant>(&self) -> Option<&V> {
        V::from_node(self)
    }

    /// Mutable form of [`Node::downcast_ref`].
    pub fn downcast_mut<V: Variant>(&mut self) -> Option<&mut V> {
        V::from_node_mut(self)
    }

    /// Unwrap into variant `V`, handing the node back unchanged on mismatch.
    pub fn into_variant<V: Variant>(self) -> Result<V, Node> {
        V::from_owned(self)
    }

    /// Whether this node is variant `V`.
    pub fn is<V: Variant>(&self) -> bool {
        V::from_node(self).is_some()
    }
}

/// A concrete node variant that can be recovered from a [`Node`].
pub trait Variant: Sized + Into<Node> {
    fn from_node(node: &Node) -> Option<&Self>;
    fn from_node_mut(node: &mut Node) -> Option<&mut Self>;
    fn from_owned(node: Node) -> Result<Self, Node>;
}

macro_rules! node_variants {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }

            impl Variant for $variant {
                fn from_node(node: &Node) -> Option<&Self> {
                    match node {
                        Node::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
                    match node {
                        Node::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_owned(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

node_variants!(
    Program, Primitive, Type, PointerOf, ArrayOf, Static, Literal, DeclLocal, Assign, Block,
    Function, Return, Field, DeclType, Deref, GetRef, Local, Call,
);
