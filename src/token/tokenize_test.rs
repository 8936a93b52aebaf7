use super::*;

use crate::ast::Tag;


fn tokens(input: &str) -> Vec<Token> {
    let mut store = TokenStore::default();
    tokenize_line(input, 0, &mut store).unwrap();
    store.into_iter().map(|info| info.token).collect()
}

fn atom(tag: Tag, text: &str) -> Token {
    Token::Atom(Atom {
        tag,
        text: text.to_string(),
    })
}

fn nest(mut v: Vec<Token>) -> Vec<Token> {
    v.insert(0, Token::LeftParen);
    v.push(Token::RightParen);
    v
}


#[test]
fn nested() {
    let expected = nest(vec![
        atom(Tag::Symbol, "*"),
        atom(Tag::Integer, "2"),
        Token::LeftParen,
        atom(Tag::Symbol, "+"),
        atom(Tag::Integer, "1"),
        atom(Tag::Integer, "1"),
        Token::RightParen,
    ]);
    assert_eq!(tokens("(* 2 (+ 1 1))"), expected);
}

#[test]
fn ints() {
    let expected = nest(vec![
        atom(Tag::Integer, "1"),
        atom(Tag::Integer, "2"),
        atom(Tag::Integer, "-4"),
        atom(Tag::Integer, "33"),
        atom(Tag::Integer, "128"),
    ]);
    assert_eq!(tokens("(1 2 -4 33 128)"), expected);
}

#[test]
fn decimals() {
    let expected = nest(vec![
        atom(Tag::Decimal, "1.0"),
        atom(Tag::Decimal, "2.2"),
        atom(Tag::Decimal, "-4.5"),
        atom(Tag::Decimal, "128.128"),
    ]);
    assert_eq!(tokens("(1.0 2.2 -4.5 128.128)"), expected);
}

#[test]
fn operators_are_symbols() {
    let expected = vec![
        atom(Tag::Symbol, "+"),
        atom(Tag::Symbol, "-"),
        atom(Tag::Symbol, "*"),
        atom(Tag::Symbol, "/"),
        atom(Tag::Symbol, "%"),
    ];
    assert_eq!(tokens("+ - * / %"), expected);
}

#[test]
fn out_of_range_literal_keeps_text() {
    // Range checking belongs to the reader; the tokenizer only classifies.
    let huge = "99999999999999999999";
    assert_eq!(tokens(huge), vec![atom(Tag::Integer, huge)]);
}

#[test]
fn comment_to_end_of_line() {
    let expected = vec![
        atom(Tag::Integer, "1"),
        Token::Comment(" trailing".to_string()),
    ];
    assert_eq!(tokens("1 ; trailing"), expected);
}

#[test]
fn invalid_symbol_rejected() {
    let mut store = TokenStore::default();
    assert!(tokenize_line("(@#$)", 0, &mut store).is_err());
}
