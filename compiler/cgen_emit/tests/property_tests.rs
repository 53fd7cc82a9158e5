//! Property-based tests for the renderer.
//!
//! Generates random type expressions and call/function shapes and checks
//! the compositional rules of the output:
//! 1. Wrappers append exactly their suffix to the wrapped rendering.
//! 2. List separators appear exactly between elements.
//! 3. Rendering is deterministic.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use cgen_emit::{check, render};
use cgen_ir::build::*;
use cgen_ir::{Node, PrimitiveKind};
use proptest::prelude::*;

// -- Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,12}").expect("valid regex")
}

fn kind_strategy() -> impl Strategy<Value = PrimitiveKind> {
    prop::sample::select(PrimitiveKind::ALL.to_vec())
}

/// A base type: primitive or named struct.
#[derive(Clone, Debug)]
enum Base {
    Primitive(PrimitiveKind),
    Named(String),
}

impl Base {
    fn build(&self) -> Node {
        match self {
            Base::Primitive(kind) => primitive(*kind),
            Base::Named(name) => named(name.clone()),
        }
    }
}

fn base_strategy() -> impl Strategy<Value = Base> {
    prop_oneof![
        kind_strategy().prop_map(Base::Primitive),
        identifier_strategy().prop_map(Base::Named),
    ]
}

/// One layer of wrapping around a type expression.
#[derive(Clone, Copy, Debug)]
enum Layer {
    Pointer,
    Array(usize),
}

fn layer_strategy() -> impl Strategy<Value = Layer> {
    prop_oneof![Just(Layer::Pointer), (0usize..64).prop_map(Layer::Array)]
}

fn wrap(node: Node, layer: Layer) -> Node {
    match layer {
        Layer::Pointer => pointer_of(node),
        Layer::Array(size) => array_of(node, size),
    }
}

fn suffix(layer: Layer) -> String {
    match layer {
        Layer::Pointer => "*".to_string(),
        Layer::Array(0) => "[]".to_string(),
        Layer::Array(size) => format!("[{size}]"),
    }
}

proptest! {
    #[test]
    fn wrappers_append_suffixes(
        base in base_strategy(),
        layers in prop::collection::vec(layer_strategy(), 0..16),
    ) {
        let mut expected = render(&base.build());
        let mut node = base.build();
        for layer in &layers {
            node = wrap(node, *layer);
            expected.push_str(&suffix(*layer));
        }
        prop_assert_eq!(render(&node), expected);
    }

    #[test]
    fn pointer_depth_counts_stars(kind in kind_strategy(), depth in 0usize..32) {
        let mut node = primitive(kind);
        for _ in 0..depth {
            node = pointer_of(node);
        }
        let text = render(&node);
        let base = render(&primitive(kind));
        prop_assert!(text.starts_with(&base));
        prop_assert_eq!(&text[base.len()..], "*".repeat(depth));
    }

    #[test]
    fn call_arguments_joined_without_space(
        callee in identifier_strategy(),
        args in prop::collection::vec(any::<i64>(), 0..8),
    ) {
        let node = call(local(callee.clone()), args.iter().copied().map(literal));
        let joined = args.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        prop_assert_eq!(render(&node), format!("{callee}({joined})"));
    }

    #[test]
    fn function_parameters_joined_with_space(
        name in identifier_strategy(),
        params in prop::collection::vec((identifier_strategy(), kind_strategy()), 0..6),
    ) {
        let decls = params.iter().map(|(n, k)| decl_local(n.clone(), primitive(*k)));
        let node = function(name.clone(), i32(), decls, block(Vec::new()));
        let expected_params = params
            .iter()
            .map(|(n, k)| format!("{} {n}", render(&primitive(*k))))
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(render(&node), format!("int {name}({expected_params}){{}}"));
    }

    #[test]
    fn block_terminates_each_statement(names in prop::collection::vec(identifier_strategy(), 0..10)) {
        let node: Node = block(names.iter().map(|n| local(n.clone()))).into();
        let text = render(&node);
        prop_assert_eq!(text.matches(';').count(), names.len());
        prop_assert!(
            text.starts_with('{') && text.ends_with('}'),
            "block not brace-delimited: {}",
            text
        );
        if !names.is_empty() {
            prop_assert!(text.ends_with(";}"), "last statement not terminated: {}", text);
        }
    }

    #[test]
    fn render_is_deterministic(
        base in base_strategy(),
        layers in prop::collection::vec(layer_strategy(), 0..8),
        field_name in identifier_strategy(),
    ) {
        let build = || {
            let ty = layers.iter().fold(base.build(), |node, layer| wrap(node, *layer));
            decl_type("T", [decl_local(field_name.clone(), ty)])
        };
        prop_assert_eq!(render(&build()), render(&build()));
    }

    #[test]
    fn generated_identifiers_pass_validation(name in identifier_strategy(), kind in kind_strategy()) {
        let node = decl_type(name.clone(), [decl_local(name, primitive(kind))]);
        prop_assert!(check(&node).is_ok());
    }
}
