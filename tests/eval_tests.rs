// tests/eval_tests.rs

use choccy::engine::Engine;
use choccy::reader::read;
use choccy::runtime::{evaluate, EvalContext, EvalOptions};
use choccy::syntax::parse;
use choccy::Value;
use pretty_assertions::assert_eq;

// ---
// Test Setup
// ---

fn sym(s: &str) -> Value {
    Value::symbol(s)
}

fn num(n: i64) -> Value {
    Value::number(n)
}

fn call(items: Vec<Value>) -> Value {
    Value::sexpr_of(items)
}

fn q(items: Vec<Value>) -> Value {
    Value::qexpr_of(items)
}

fn run_line(src: &str) -> String {
    Engine::default()
        .eval_line("<test>", src)
        .unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"))
        .to_string()
}

// ---
// Self-evaluation
// ---

#[test]
fn test_inert_values_evaluate_to_themselves() {
    assert_eq!(evaluate(num(5)), num(5));
    assert_eq!(evaluate(sym("+")), sym("+"));
    let quoted = q(vec![sym("+"), num(1), num(2)]);
    assert_eq!(evaluate(quoted.clone()), quoted);
}

#[test]
fn test_empty_sexpr_stays_empty() {
    assert_eq!(evaluate(Value::sexpr()), Value::sexpr());
}

#[test]
fn test_singleton_collapses() {
    assert_eq!(evaluate(call(vec![num(9)])), num(9));
    assert_eq!(evaluate(call(vec![q(vec![num(1)])])), q(vec![num(1)]));
    assert_eq!(evaluate(call(vec![sym("head")])), sym("head"));
}

#[test]
fn test_idempotent_on_reduced_values() {
    for src in ["(+ 1 2)", "{1 2 3}", "(list 1 (+ 1 1))", "(/ 1 0)", "()"] {
        let once = Engine::default().eval_line("<test>", src).unwrap();
        let twice = evaluate(once.clone());
        assert_eq!(once, twice, "{src}");
    }
}

// ---
// Arithmetic
// ---

#[test]
fn test_integer_division() {
    for (a, b) in [(7, 2), (-7, 2), (7, -2), (100, 10), (1, 3)] {
        assert_eq!(evaluate(call(vec![sym("/"), num(a), num(b)])), num(a / b));
    }
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        evaluate(call(vec![sym("/"), num(5), num(0)])),
        Value::error("Division by zero")
    );
}

#[test]
fn test_unary_minus() {
    assert_eq!(evaluate(call(vec![sym("-"), num(5)])), num(-5));
}

#[test]
fn test_arithmetic_from_source() {
    assert_eq!(run_line("+ 1 2 3"), "6");
    assert_eq!(run_line("(- (* 10 10) (/ 50 5) 1)"), "89");
    assert_eq!(run_line("% 10 3"), "1");
    assert_eq!(run_line("^ 2 10"), "1024");
    assert_eq!(run_line("+ 1 {2}"), "Error: Non-number passed as operation argument");
}

// ---
// List builtins
// ---

#[test]
fn test_head() {
    let expr = call(vec![sym("head"), q(vec![num(1), num(2), num(3)])]);
    assert_eq!(evaluate(expr), q(vec![num(1)]));
}

#[test]
fn test_tail() {
    let expr = call(vec![sym("tail"), q(vec![num(1), num(2), num(3)])]);
    assert_eq!(evaluate(expr), q(vec![num(2), num(3)]));
}

#[test]
fn test_join() {
    let expr = call(vec![sym("join"), q(vec![num(1)]), q(vec![num(2)])]);
    assert_eq!(evaluate(expr), q(vec![num(1), num(2)]));
}

#[test]
fn test_eval() {
    let expr = call(vec![sym("eval"), q(vec![sym("+"), num(1), num(2)])]);
    assert_eq!(evaluate(expr), num(3));
}

#[test]
fn test_head_of_empty_is_error() {
    let result = evaluate(call(vec![sym("head"), Value::qexpr()]));
    assert!(result.is_error(), "{result}");
}

#[test]
fn test_head_of_number_is_error() {
    let result = evaluate(call(vec![sym("head"), num(1)]));
    assert_eq!(
        result,
        Value::error("Function 'head' passed Number, expected Q-Expression")
    );
}

#[test]
fn test_list_builtins_compose() {
    assert_eq!(run_line("list 1 2 (+ 1 2)"), "{1 2 3}");
    assert_eq!(run_line("eval (tail {tail tail {5 6 7}})"), "{6 7}");
    assert_eq!(run_line("join {a} (list b c) {}"), "{a b c}");
    assert_eq!(run_line("eval {}"), "()");
    assert_eq!(run_line("tail {x}"), "{}");
}

#[test]
fn test_list_builtin_argument_errors() {
    assert_eq!(
        run_line("tail 5"),
        "Error: Function 'tail' passed Number, expected Q-Expression"
    );
    assert_eq!(
        run_line("eval {+ 1 2} {3}"),
        "Error: Function 'eval' passed 2 arguments, expected 1"
    );
    assert_eq!(
        run_line("join a {b}"),
        "Error: Function 'join' passed Symbol, expected Q-Expression"
    );
}

// ---
// Errors
// ---

#[test]
fn test_non_symbol_head() {
    assert_eq!(
        evaluate(call(vec![num(1), num(2)])),
        Value::error("S-expression doesn't start with symbol")
    );
}

#[test]
fn test_unknown_function() {
    assert_eq!(run_line("frobnicate 1 2"), "Error: Unknown function");
}

#[test]
fn test_first_error_wins() {
    assert_eq!(
        run_line("+ (/ 1 0) (head 5) (nope)"),
        "Error: Division by zero"
    );
    assert_eq!(
        run_line("list (head 5) (/ 1 0)"),
        "Error: Function 'head' passed Number, expected Q-Expression"
    );
}

#[test]
fn test_errors_infect_enclosing_expressions() {
    assert_eq!(run_line("* 2 (+ 1 (- 3 (/ 4 0)))"), "Error: Division by zero");
}

#[test]
fn test_invalid_number_literal() {
    assert_eq!(
        run_line("+ 1 99999999999999999999"),
        "Error: Invalid number"
    );
}

#[test]
fn test_recursion_guard() {
    let depth = 64;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let engine = Engine::new(EvalOptions { max_depth: 16 });
    let value = engine.eval_line("<deep>", &src).unwrap();
    assert_eq!(value, Value::error("Recursion depth limit of 16 exceeded"));

    let relaxed = Engine::new(EvalOptions { max_depth: 128 });
    assert_eq!(relaxed.eval_line("<deep>", &src).unwrap(), num(1));
}

#[test]
fn test_deeply_nested_source_is_a_syntax_error() {
    let engine = Engine::default();
    let quoted = "{".repeat(50_000);
    let err = engine.eval_line("<deep>", &quoted).unwrap_err();
    assert!(err.message.contains("nesting too deep"), "{}", err.message);

    let depth = 20_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(engine.eval_line("<deep>", &src).is_err());
    assert!(engine.eval_program("<deep>", &src).is_err());
}

// ---
// Reader round trip
// ---

#[test]
fn test_read_render_round_trip() {
    let tree = parse("<test>", "(+ 1 2)").unwrap();
    let node = tree.expressions().next().unwrap();
    let value = read(node);
    assert_eq!(value.to_string(), "(+ 1 2)");
    assert_eq!(evaluate(value).to_string(), "3");
}

#[test]
fn test_context_is_reusable() {
    let mut context = EvalContext::default();
    assert_eq!(context.evaluate(call(vec![sym("+"), num(1), num(1)])), num(2));
    assert_eq!(context.evaluate(call(vec![sym("*"), num(3), num(3)])), num(9));
    assert_eq!(context.depth(), 0);
}
