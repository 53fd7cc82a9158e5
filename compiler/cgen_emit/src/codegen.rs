//! C-like Source Generation
//!
//! [`CodeGen`] is the renderer: a [`Visitor`] whose handlers return the text
//! of their node. Output is compact and fixed. There is no indentation, no
//! precedence analysis, and no parentheses beyond those of `Deref` and
//! `GetRef`; the tree shape already encodes grouping.
//!
//! Separator rules worth remembering:
//! - `Program` and `Block` terminate every element with `;`, the last included.
//! - Function parameters are joined with `", "`, call arguments with `","`.

use cgen_ir::{
    ArrayOf, Assign, Block, Call, DeclLocal, DeclType, Deref, Field, Function, GetRef, Literal,
    LiteralValue, Local, Node, PointerOf, Primitive, PrimitiveKind, Program, Return, Static, Type,
    Visitor,
};
use cgen_stack::ensure_sufficient_stack;
use tracing::trace;

/// The renderer.
///
/// Holds no state between nodes, so reusing an instance or creating a fresh
/// one produces the same text for the same tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodeGen;

impl CodeGen {
    pub fn new() -> Self {
        CodeGen
    }

    /// Render `root` and everything beneath it.
    #[tracing::instrument(level = "debug", skip_all, fields(root = root.kind_name()))]
    pub fn render(&mut self, root: &Node) -> String {
        let text = self.emit(root);
        tracing::debug!(len = text.len(), "render complete");
        text
    }

    fn emit(&mut self, node: &Node) -> String {
        trace!(kind = node.kind_name(), "emit");
        ensure_sufficient_stack(|| node.accept(self))
    }

    /// Every node followed by `;`.
    fn terminated(&mut self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            out.push_str(&self.emit(node));
            out.push(';');
        }
        out
    }

    fn joined(&mut self, nodes: &[Node], separator: &str) -> String {
        nodes
            .iter()
            .map(|node| self.emit(node))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// C keyword for a primitive kind.
pub const fn c_keyword(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::I8 => "char",
        PrimitiveKind::I16 => "short",
        PrimitiveKind::I32 => "int",
        PrimitiveKind::I64 => "long",
        PrimitiveKind::U8 => "unsigned char",
        PrimitiveKind::U16 => "unsigned short",
        PrimitiveKind::U32 => "unsigned int",
        PrimitiveKind::U64 => "unsigned long",
        PrimitiveKind::F32 => "float",
        PrimitiveKind::F64 => "double",
    }
}

/// Text of a literal payload.
///
/// Floats use fixed notation with six fractional digits, the form C's `%f`
/// produces. Text and characters are quoted verbatim; embedded quotes are
/// not escaped.
pub fn literal_text(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Int(n) => n.to_string(),
        LiteralValue::UInt(n) => n.to_string(),
        LiteralValue::Float(f) => float_text(*f),
        LiteralValue::Text(s) => format!("\"{s}\""),
        LiteralValue::Char(c) => format!("'{c}'"),
    }
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        if f.is_sign_positive() { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{f:.6}")
    }
}

impl Visitor for CodeGen {
    type Output = String;

    fn visit_program(&mut self, node: &Program) -> String {
        self.terminated(&node.nodes)
    }

    fn visit_primitive(&mut self, node: &Primitive) -> String {
        c_keyword(node.kind).to_string()
    }

    fn visit_type(&mut self, node: &Type) -> String {
        format!("struct {}", node.name)
    }

    fn visit_pointer_of(&mut self, node: &PointerOf) -> String {
        let mut out = self.emit(&node.pointee);
        out.push('*');
        out
    }

    fn visit_array_of(&mut self, node: &ArrayOf) -> String {
        let element = self.emit(&node.element);
        if node.is_unbounded() {
            format!("{element}[]")
        } else {
            format!("{element}[{}]", node.size)
        }
    }

    fn visit_static(&mut self, node: &Static) -> String {
        format!("static {}", self.emit(&node.decl))
    }

    fn visit_literal(&mut self, node: &Literal) -> String {
        literal_text(&node.value)
    }

    fn visit_decl_local(&mut self, node: &DeclLocal) -> String {
        format!("{} {}", self.emit(&node.ty), node.name)
    }

    fn visit_block(&mut self, node: &Block) -> String {
        format!("{{{}}}", self.terminated(&node.nodes))
    }

    fn visit_function(&mut self, node: &Function) -> String {
        let return_type = self.emit(&node.return_type);
        let params = self.joined(&node.params, ", ");
        let body = ensure_sufficient_stack(|| self.visit_block(&node.body));
        format!("{return_type} {}({params}){body}", node.name)
    }

    fn visit_return(&mut self, node: &Return) -> String {
        format!("return {}", self.emit(&node.value))
    }

    fn visit_assign(&mut self, node: &Assign) -> String {
        let lhs = self.emit(&node.lhs);
        let rhs = self.emit(&node.rhs);
        format!("{lhs} = {rhs}")
    }

    fn visit_field(&mut self, node: &Field) -> String {
        format!("{}.{}", self.emit(&node.base), node.name)
    }

    fn visit_deref(&mut self, node: &Deref) -> String {
        format!("(*{})", self.emit(&node.pointer))
    }

    fn visit_get_ref(&mut self, node: &GetRef) -> String {
        format!("(&{})", self.emit(&node.target))
    }

    fn visit_decl_type(&mut self, node: &DeclType) -> String {
        format!("struct {}{{{}}};", node.name, self.terminated(&node.fields))
    }

    fn visit_local(&mut self, node: &Local) -> String {
        node.name.clone()
    }

    fn visit_call(&mut self, node: &Call) -> String {
        let callee = self.emit(&node.callee);
        let args = self.joined(&node.args, ",");
        format!("{callee}({args})")
    }
}

#[cfg(test)]
mod tests;
