mod common;

use lispy::prelude::*;


#[test]
fn basic_arithmetic() {
    let results = common::results("(+ 1 2) (+ 2 2)");
    assert_eq!(results, vec![3.into(), 4.into()]);

    let results = common::results(
        "(* (+ 1 1) 3)
         (- 10 1 2)",
    );
    assert_eq!(results, vec![6.into(), 7.into()]);

    let results = common::results("(+ 1.5 2.25)");
    assert_eq!(results, vec![3.75.into()]);
}

#[test]
fn integer_atoms_round_trip() {
    for i in &[0i64, 1, -1, 42, i64::MAX, i64::MIN] {
        assert_eq!(common::results(&i.to_string()), vec![(*i).into()]);
    }
}

#[test]
fn standalone_symbol_reduces_to_itself() {
    assert_eq!(common::printed("+"), vec!["+"]);
}

#[test]
fn scenarios_print_as_expected() {
    assert_eq!(common::printed("(+ 2 3)"), vec!["5"]);
    assert_eq!(common::printed("(- 5)"), vec!["-5"]);
    assert_eq!(common::printed("(/ 4 0)"), vec!["error: division by zero"]);
    assert_eq!(common::printed("(* 2 (+ 1 1))"), vec!["4"]);
    assert_eq!(
        common::printed("(% 1.0 2.0)"),
        vec!["error: incompatible type for operator"]
    );
    assert_eq!(common::printed("()"), vec!["()"]);
}

#[test]
fn errors_do_not_stop_later_inputs() {
    let results = common::results("(/ 1 0) (+ 1 1)");
    assert_eq!(results, vec![EvalErr::DivisionByZero.into(), 2.into()]);
}

#[test]
fn first_error_propagates_through_nesting() {
    assert_eq!(
        common::printed("(+ (* 2 (/ 3 0)) (% 1.0 2.0))"),
        vec!["error: division by zero"]
    );
}

#[test]
fn arithmetic_overflow_reduces_to_error() {
    let min = i64::MIN.to_string();
    assert_eq!(
        common::printed(&format!("(/ {} -1)", min)),
        vec!["error: invalid number"]
    );
    assert_eq!(
        common::printed(&format!("(- {})", min)),
        vec!["error: invalid number"]
    );
    assert_eq!(
        common::printed(&format!("(+ {} 1)", i64::MAX)),
        vec!["error: invalid number"]
    );
}

#[test]
fn out_of_range_literal_reduces_to_error() {
    assert_eq!(
        common::printed("(+ 1 99999999999999999999)"),
        vec!["error: invalid number"]
    );
}

#[test]
fn mismatched_kinds() {
    assert_eq!(common::printed("(+ 1 2.0)"), vec!["error: mismatched types"]);
}

#[test]
fn malformed_expression() {
    assert_eq!(
        common::printed("(1 2)"),
        vec!["error: s-expression does not start with symbol"]
    );
}

#[test]
fn multiline_expression() {
    let results = common::results(
        "(* (+ 1 1)
            (+ 2 2))",
    );
    assert_eq!(results, vec![8.into()]);
}
