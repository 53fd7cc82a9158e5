//! Type expressions.
//!
//! Primitives and named aggregates are leaves; `PointerOf`, `ArrayOf`, and
//! `Static` wrap exactly one owned child.

use super::Node;

/// Fixed-width numeric type tags.
///
/// No other widths are representable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl PrimitiveKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::F32,
        Self::F64,
    ];

    /// Short tag name (`i8`, `u64`, `f32`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

/// A fixed-width numeric type.
#[derive(Debug)]
pub struct Primitive {
    pub kind: PrimitiveKind,
}

impl Primitive {
    pub fn new(kind: PrimitiveKind) -> Self {
        Primitive { kind }
    }
}

/// Reference to a named aggregate type (`struct <name>`).
#[derive(Debug)]
pub struct Type {
    pub name: String,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Type { name: name.into() }
    }
}

/// Pointer to the wrapped type expression.
#[derive(Debug)]
pub struct PointerOf {
    pub pointee: Box<Node>,
}

impl PointerOf {
    pub fn new(pointee: impl Into<Node>) -> Self {
        PointerOf {
            pointee: Box::new(pointee.into()),
        }
    }
}

/// Array of the wrapped element.
///
/// `size == 0` means the length is left unspecified (`T[]`).
#[derive(Debug)]
pub struct ArrayOf {
    pub element: Box<Node>,
    pub size: usize,
}

impl ArrayOf {
    pub fn new(element: impl Into<Node>, size: usize) -> Self {
        ArrayOf {
            element: Box::new(element.into()),
            size,
        }
    }

    /// Array with no declared length.
    pub fn unbounded(element: impl Into<Node>) -> Self {
        Self::new(element, 0)
    }

    /// Whether the length is left unspecified (`size == 0`).
    pub fn is_unbounded(&self) -> bool {
        self.size == 0
    }
}

/// `static` storage-class wrapper around a declaration.
#[derive(Debug)]
pub struct Static {
    pub decl: Box<Node>,
}

impl Static {
    pub fn new(decl: impl Into<Node>) -> Self {
        Static {
            decl: Box::new(decl.into()),
        }
    }
}
