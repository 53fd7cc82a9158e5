//! cgen IR - Syntax Tree for the C-like Output Language
//!
//! This crate holds the tree that code generators build before asking
//! `cgen_emit` to turn it into source text:
//! - [`ast`]: the closed set of node variants and safe downcasting
//! - [`visitor`]: the double-dispatch protocol every traversal implements
//! - [`build`]: free-function combinators for bottom-up construction
//!
//! # Design Philosophy
//!
//! - **Closed variants, open traversals**: `Node` is an enum and every
//!   `Visitor` handles every variant, so a new variant is a compile error
//!   in each visitor until it is handled.
//! - **Move-only ownership**: children are moved into their parent. No node
//!   is `Clone`, so a subtree cannot be attached twice.
//! - **Required children at construction**: child slots are non-optional,
//!   so a tree with a missing child cannot be built.

pub mod ast;
pub mod build;
pub mod visitor;

pub use ast::{
    ArrayOf, Assign, Block, Call, DeclLocal, DeclType, Deref, Field, Function, GetRef, Literal,
    LiteralValue, Local, Node, PointerOf, Primitive, PrimitiveKind, Program, Return, Static, Type,
    Variant,
};
pub use visitor::Visitor;
