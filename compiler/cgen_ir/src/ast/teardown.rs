//! Iterative destruction.
//!
//! Compiler-generated drop glue recurses once per nesting level, so a tree
//! tens of thousands of levels deep would overflow the stack when dropped.
//! Every child-owning struct instead moves its non-leaf children onto a
//! worklist and the worklist is drained in a loop. `Node` itself has no
//! `Drop` impl, so [`Node::into_variant`] can still move out of it.

use super::{
    ArrayOf, Assign, Block, Call, DeclLocal, DeclType, Deref, Field, Function, GetRef, Local,
    Node, PointerOf, Program, Return, Static,
};

impl Node {
    /// Whether this variant owns no child nodes.
    pub const fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Primitive(_) | Node::Type(_) | Node::Literal(_) | Node::Local(_)
        )
    }

    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        match self {
            Node::Program(node) => node.detach_children(stack),
            Node::PointerOf(node) => node.detach_children(stack),
            Node::ArrayOf(node) => node.detach_children(stack),
            Node::Static(node) => node.detach_children(stack),
            Node::DeclLocal(node) => node.detach_children(stack),
            Node::Assign(node) => node.detach_children(stack),
            Node::Block(node) => node.detach_children(stack),
            Node::Function(node) => node.detach_children(stack),
            Node::Return(node) => node.detach_children(stack),
            Node::Field(node) => node.detach_children(stack),
            Node::DeclType(node) => node.detach_children(stack),
            Node::Deref(node) => node.detach_children(stack),
            Node::GetRef(node) => node.detach_children(stack),
            Node::Call(node) => node.detach_children(stack),
            Node::Primitive(_) | Node::Type(_) | Node::Literal(_) | Node::Local(_) => {}
        }
    }
}

/// Move a boxed child onto `stack`, leaving an allocation-free leaf behind.
fn take(slot: &mut Node, stack: &mut Vec<Node>) {
    if !slot.is_leaf() {
        let hollow = Node::Local(Local {
            name: String::new(),
        });
        stack.push(std::mem::replace(slot, hollow));
    }
}

/// Drop every node on `stack` without recursing into its children.
fn drain(mut stack: Vec<Node>) {
    while let Some(mut node) = stack.pop() {
        node.detach_children(&mut stack);
    }
}

trait Detach {
    fn detach_children(&mut self, stack: &mut Vec<Node>);
}

impl Detach for Program {
    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        stack.append(&mut self.nodes);
    }
}

impl Detach for Block {
    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        stack.append(&mut self.nodes);
    }
}

impl Detach for DeclType {
    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        stack.append(&mut self.fields);
    }
}

impl Detach for Function {
    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        stack.append(&mut self.params);
        take(&mut self.return_type, stack);
        // The body is dropped by glue; emptying it here keeps that shallow.
        stack.append(&mut self.body.nodes);
    }
}

impl Detach for Call {
    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        take(&mut self.callee, stack);
        stack.append(&mut self.args);
    }
}

impl Detach for Assign {
    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        take(&mut self.lhs, stack);
        take(&mut self.rhs, stack);
    }
}

macro_rules! detach_single {
    ($($ty:ident . $slot:ident),+ $(,)?) => {
        $(
            impl Detach for $ty {
                fn detach_children(&mut self, stack: &mut Vec<Node>) {
                    take(&mut self.$slot, stack);
                }
            }
        )+
    };
}

detach_single!(
    PointerOf.pointee,
    ArrayOf.element,
    Static.decl,
    DeclLocal.ty,
    Return.value,
    Field.base,
    Deref.pointer,
    GetRef.target,
);

macro_rules! drop_iteratively {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl Drop for $ty {
                fn drop(&mut self) {
                    let mut stack = Vec::new();
                    self.detach_children(&mut stack);
                    drain(stack);
                }
            }
        )+
    };
}

drop_iteratively!(
    Program, PointerOf, ArrayOf, Static, DeclLocal, Assign, Block, Function, Return, Field,
    DeclType, Deref, GetRef, Call,
);

#[cfg(test)]
mod tests;
