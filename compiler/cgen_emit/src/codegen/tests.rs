use super::*;
use cgen_ir::build::*;
use pretty_assertions::assert_eq;

fn r(node: &Node) -> String {
    CodeGen::new().render(node)
}

#[test]
fn primitive_keywords() {
    assert_eq!(r(&u8()), "unsigned char");
    assert_eq!(r(&u16()), "unsigned short");
    assert_eq!(r(&u32()), "unsigned int");
    assert_eq!(r(&u64()), "unsigned long");
    assert_eq!(r(&i8()), "char");
    assert_eq!(r(&i16()), "short");
    assert_eq!(r(&i32()), "int");
    assert_eq!(r(&i64()), "long");
    assert_eq!(r(&f32()), "float");
    assert_eq!(r(&f64()), "double");
}

#[test]
fn named_type() {
    assert_eq!(r(&named("Point")), "struct Point");
    assert_eq!(r(&pointer_of(named("Point"))), "struct Point*");
}

#[test]
fn array_sizes() {
    assert_eq!(r(&array_of(i32(), 0)), "int[]");
    assert_eq!(r(&array_of(i32(), 16)), "int[16]");
    assert_eq!(r(&array_of(array_of(u8(), 4), 2)), "unsigned char[4][2]");
}

#[test]
fn static_decl() {
    let mut stat = Static::new(DeclLocal::new("placeholder", i32()));
    if let Some(decl) = stat.decl.downcast_mut::<DeclLocal>() {
        decl.name = "x".to_string();
        decl.ty = Box::new(u8());
    }
    assert_eq!(r(&stat.into()), "static unsigned char x");
}

#[test]
fn block_terminates_every_statement() {
    let mut block = Block::new();
    block.push(decl_local("x", pointer_of(u8())));
    assert_eq!(r(&block.into()), "{unsigned char* x;}");

    assert_eq!(r(&Block::new().into()), "{}");
}

#[test]
fn integer_literals() {
    assert_eq!(r(&literal(0)), "0");
    assert_eq!(r(&literal(-42_i64)), "-42");
    assert_eq!(r(&literal(u64::MAX)), "18446744073709551615");
    assert_eq!(r(&literal(i8::MIN)), "-128");
}

#[test]
fn float_literals_use_fixed_notation() {
    assert_eq!(r(&literal(1.5)), "1.500000");
    assert_eq!(r(&literal(0.1_f32)), "0.100000");
    assert_eq!(r(&literal(-2.0)), "-2.000000");
    assert_eq!(r(&literal(f64::NAN)), "nan");
    assert_eq!(r(&literal(f64::INFINITY)), "inf");
    assert_eq!(r(&literal(f64::NEG_INFINITY)), "-inf");
}

#[test]
fn text_and_char_literals_are_not_escaped() {
    assert_eq!(r(&literal("hello")), "\"hello\"");
    assert_eq!(r(&literal('a')), "'a'");
    assert_eq!(r(&literal("say \"hi\"")), "\"say \"hi\"\"");
    assert_eq!(r(&literal(String::new())), "\"\"");
}

#[test]
fn expressions() {
    assert_eq!(r(&assign(local("a"), literal(1))), "a = 1");
    assert_eq!(r(&field(local("a"), "p0")), "a.p0");
    assert_eq!(r(&deref(local("p"))), "(*p)");
    assert_eq!(r(&get_ref(local("v"))), "(&v)");
    assert_eq!(r(&ret(local("v"))), "return v");
    assert_eq!(r(&field(deref(local("p")), "x")), "(*p).x");
}

#[test]
fn call_arguments_have_no_space() {
    assert_eq!(r(&call(local("foo"), [literal(1), literal(2)])), "foo(1,2)");
    assert_eq!(r(&call(local("bar"), Vec::new())), "bar()");
    assert_eq!(
        r(&call(local("printf"), [literal("%d"), get_ref(local("x"))])),
        "printf(\"%d\",(&x))"
    );
}

#[test]
fn function_parameters_have_space() {
    let node = function(
        "add",
        i64(),
        [decl_local("a", i64()), decl_local("b", i64())],
        block([ret(local("a"))]),
    );
    assert_eq!(r(&node), "long add(long a, long b){return a;}");

    let node = function("nop", i32(), Vec::new(), block(Vec::new()));
    assert_eq!(r(&node), "int nop(){}");
}

#[test]
fn struct_definition() {
    let node = decl_type("Point", [decl_local("p0", i32()), decl_local("p1", i8())]);
    assert_eq!(r(&node), "struct Point{int p0;char p1;};");
    assert_eq!(r(&decl_type("Empty", Vec::new())), "struct Empty{};");
}

#[test]
fn renderer_does_not_mutate_or_leak_state() {
    let tree = program([
        decl_type("S", [decl_local("a", i32())]),
        function("f", i32(), Vec::new(), block([ret(literal(1))])),
    ]);
    let mut codegen = CodeGen::new();
    let first = codegen.render(&tree);
    let second = codegen.render(&tree);
    assert_eq!(first, second);
    assert_eq!(first, r(&tree));
}

#[test]
fn c_keyword_table_is_total() {
    for kind in PrimitiveKind::ALL {
        assert!(!c_keyword(kind).is_empty());
    }
}
