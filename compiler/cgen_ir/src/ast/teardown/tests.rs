use crate::ast::{DeclLocal, Function, Node, PointerOf};
use crate::build;

/// Deep enough that recursive drop glue would exhaust a default test
/// thread's stack.
const DEPTH: usize = 200_000;

#[test]
fn deep_pointer_chain_drops_on_default_stack() {
    let mut ty = build::i32();
    for _ in 0..DEPTH {
        ty = build::pointer_of(ty);
    }
    assert!(ty.is::<PointerOf>());
    drop(ty);
}

#[test]
fn deep_block_nesting_drops_on_default_stack() {
    let mut node: Node = build::block([build::ret(build::literal(0))]).into();
    for _ in 0..DEPTH {
        node = build::block([node]).into();
    }
    drop(node);
}

#[test]
fn mixed_deep_chain_drops_on_default_stack() {
    let mut node = build::local("x");
    for depth in 0..DEPTH {
        node = match depth % 10 {
            0 => build::deref(node),
            1 => build::field(node, "next"),
            2 => build::get_ref(node),
            3 => build::call(build::local("f"), [node, build::literal(1)]),
            4 => build::assign(build::local("y"), node),
            5 => build::ret(node),
            6 => build::array_of(node, 4),
            7 => build::decl_local("v", node),
            8 => build::static_(node),
            _ => build::function("g", build::i32(), Vec::new(), build::block([node])),
        };
    }
    drop(node);
}

#[test]
fn deep_function_nesting_drops_on_default_stack() {
    let mut node = build::program(Vec::new());
    for _ in 0..DEPTH / 2 {
        node = build::function(
            "inner",
            build::pointer_of(build::i8()),
            [build::decl_local("p", build::i8())],
            build::block([build::decl_type("S", [node])]),
        );
    }
    assert!(node.is::<Function>());
    drop(node);
}

#[test]
fn leaves_own_no_children() {
    assert!(build::i8().is_leaf());
    assert!(build::named("Point").is_leaf());
    assert!(build::literal("text").is_leaf());
    assert!(build::local("x").is_leaf());
    assert!(!build::pointer_of(build::i8()).is_leaf());
    assert!(!build::program(Vec::new()).is_leaf());
}

#[test]
fn into_variant_still_moves_out_of_node() {
    let node = build::decl_local("x", build::pointer_of(build::u8()));
    let decl = node.into_variant::<DeclLocal>();
    assert!(decl.is_ok_and(|d| d.name == "x" && d.ty.is::<PointerOf>()));
}
