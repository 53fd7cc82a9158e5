//! Expressions and simple statements.

use super::Node;

/// Literal payload.
///
/// Only three renderings exist (numeric, text, single character), so the
/// numeric case is split by representation but the set stays closed.
#[derive(Debug)]
pub enum LiteralValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Emitted verbatim between double quotes. No escaping.
    Text(String),
    Char(char),
}

/// A literal value.
#[derive(Debug)]
pub struct Literal {
    pub value: LiteralValue,
}

impl Literal {
    pub fn new(value: impl Into<LiteralValue>) -> Self {
        Literal {
            value: value.into(),
        }
    }
}

macro_rules! literal_from {
    ($variant:ident as $repr:ty: $($src:ty),+) => {
        $(
            impl From<$src> for LiteralValue {
                fn from(value: $src) -> Self {
                    LiteralValue::$variant(<$repr>::from(value))
                }
            }

            impl From<$src> for Literal {
                fn from(value: $src) -> Self {
                    Literal::new(value)
                }
            }
        )+
    };
}

literal_from!(Int as i64: i8, i16, i32, i64);
literal_from!(UInt as u64: u8, u16, u32, u64);
literal_from!(Float as f64: f32, f64);
literal_from!(Text as String: String, &str);
literal_from!(Char as char: char);

/// Assignment expression.
#[derive(Debug)]
pub struct Assign {
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
}

impl Assign {
    pub fn new(lhs: impl Into<Node>, rhs: impl Into<Node>) -> Self {
        Assign {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }
}

/// Return statement.
#[derive(Debug)]
pub struct Return {
    pub value: Box<Node>,
}

impl Return {
    pub fn new(value: impl Into<Node>) -> Self {
        Return {
            value: Box::new(value.into()),
        }
    }
}

/// Member access (`base.name`).
#[derive(Debug)]
pub struct Field {
    pub base: Box<Node>,
    pub name: String,
}

impl Field {
    pub fn new(base: impl Into<Node>, name: impl Into<String>) -> Self {
        Field {
            base: Box::new(base.into()),
            name: name.into(),
        }
    }
}

/// Pointer dereference.
#[derive(Debug)]
pub struct Deref {
    pub pointer: Box<Node>,
}

impl Deref {
    pub fn new(pointer: impl Into<Node>) -> Self {
        Deref {
            pointer: Box::new(pointer.into()),
        }
    }
}

/// Address-of.
#[derive(Debug)]
pub struct GetRef {
    pub target: Box<Node>,
}

impl GetRef {
    pub fn new(target: impl Into<Node>) -> Self {
        GetRef {
            target: Box::new(target.into()),
        }
    }
}

/// Identifier reference.
#[derive(Debug)]
pub struct Local {
    pub name: String,
}

impl Local {
    pub fn new(name: impl Into<String>) -> Self {
        Local { name: name.into() }
    }
}

/// Call expression.
#[derive(Debug)]
pub struct Call {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
}

impl Call {
    pub fn new(callee: impl Into<Node>) -> Self {
        Call {
            callee: Box::new(callee.into()),
            args: Vec::new(),
        }
    }

    /// Append an argument, taking ownership of it.
    pub fn push_arg(&mut self, arg: impl Into<Node>) {
        self.args.push(arg.into());
    }
}
