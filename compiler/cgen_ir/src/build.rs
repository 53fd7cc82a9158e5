//! Combinators for building trees bottom-up.
//!
//! Every function takes its children by value and returns a fresh [`Node`]
//! ready to be attached to a parent or rendered directly.
//!
//! ```
//! use cgen_ir::build::{call, literal, local};
//!
//! let node = call(local("foo"), [literal(1), literal(2)]);
//! assert!(node.is::<cgen_ir::Call>());
//! ```

use crate::ast::{
    ArrayOf, Assign, Block, Call, DeclLocal, DeclType, Deref, Field, Function, GetRef, Literal,
    LiteralValue, Local, Node, PointerOf, Primitive, PrimitiveKind, Program, Return, Static, Type,
};

macro_rules! primitive_builders {
    ($($name:ident => $kind:ident),+ $(,)?) => {
        $(
            #[doc = concat!("The `", stringify!($name), "` primitive type.")]
            pub fn $name() -> Node {
                primitive(PrimitiveKind::$kind)
            }
        )+
    };
}

primitive_builders!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

/// Primitive type of the given `kind`.
pub fn primitive(kind: PrimitiveKind) -> Node {
    Primitive::new(kind).into()
}

/// Reference to a named aggregate (`struct <name>`).
pub fn named(name: impl Into<String>) -> Node {
    Type::new(name).into()
}

/// Pointer to `node` (`<node>*`).
pub fn pointer_of(node: Node) -> Node {
    PointerOf::new(node).into()
}

/// Array of `node`; `size == 0` leaves the length unspecified.
pub fn array_of(node: Node, size: usize) -> Node {
    ArrayOf::new(node, size).into()
}

/// `static` storage class applied to a declaration.
pub fn static_(decl: Node) -> Node {
    Static::new(decl).into()
}

/// Variable declaration `<ty> <name>`.
pub fn decl_local(name: impl Into<String>, ty: Node) -> Node {
    DeclLocal::new(name, ty).into()
}

/// Numeric, text, or character literal.
pub fn literal(value: impl Into<LiteralValue>) -> Node {
    Literal::new(value).into()
}

/// Use of a variable by name.
pub fn local(name: impl Into<String>) -> Node {
    Local::new(name).into()
}

/// Member access `<base>.<name>`.
pub fn field(base: Node, name: impl Into<String>) -> Node {
    Field::new(base, name).into()
}

/// Struct definition with `fields` in declaration order.
pub fn decl_type(name: impl Into<String>, fields: impl IntoIterator<Item = Node>) -> Node {
    let mut decl = DeclType::new(name);
    decl.fields.extend(fields);
    decl.into()
}

/// Call of `callee` with `args` in order.
pub fn call(callee: Node, args: impl IntoIterator<Item = Node>) -> Node {
    let mut call = Call::new(callee);
    call.args.extend(args);
    call.into()
}

/// Address of `node` (`&`).
pub fn get_ref(node: Node) -> Node {
    GetRef::new(node).into()
}

/// Dereference of `node` (`*`).
pub fn deref(node: Node) -> Node {
    Deref::new(node).into()
}

/// Assignment `lhs = rhs`.
pub fn assign(lhs: Node, rhs: Node) -> Node {
    Assign::new(lhs, rhs).into()
}

/// `return` statement.
pub fn ret(value: Node) -> Node {
    Return::new(value).into()
}

/// A statement block. Returns the concrete [`Block`] so it can be used
/// directly as a function body.
pub fn block(statements: impl IntoIterator<Item = Node>) -> Block {
    statements.into_iter().collect()
}

/// Function definition; `params` are attached in order.
pub fn function(
    name: impl Into<String>,
    return_type: Node,
    params: impl IntoIterator<Item = Node>,
    body: Block,
) -> Node {
    let mut function = Function::new(name, return_type, body);
    function.params.extend(params);
    function.into()
}

/// Top-level program holding `nodes` in order.
pub fn program(nodes: impl IntoIterator<Item = Node>) -> Node {
    nodes.into_iter().collect::<Program>().into()
}
