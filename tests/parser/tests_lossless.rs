#![allow(clippy::unwrap_used)]

//! Whatever the input, the tree must give it back unchanged.

use proptest::prelude::*;
use rstest::rstest;
use salvage::parser::{TokenKind, TriviaKind, parse, tokenize};

use crate::helpers::source_fixtures::{MALFORMED, WELL_FORMED};
use crate::helpers::tree_assertions::assert_lossless;

#[test]
fn test_well_formed_fixtures_round_trip_cleanly() {
    for source in WELL_FORMED {
        let result = assert_lossless(source);
        assert!(result.ok(), "{source:?}: {:?}", result.diagnostics.codes());
    }
}

#[test]
fn test_malformed_fixtures_round_trip_with_diagnostics() {
    for source in MALFORMED {
        let result = assert_lossless(source);
        assert!(!result.ok(), "expected diagnostics for {source:?}");
    }
}

#[rstest]
#[case("   ")]
#[case("// only a comment")]
#[case("(a) /* dangling")]
#[case("(((((")]
#[case(")))))")]
#[case("(a,, ,b)")]
#[case("\t(\n a\r\n,\n)\n")]
fn test_edge_inputs_round_trip(#[case] source: &str) {
    assert_lossless(source);
}

#[test]
fn test_skipped_tokens_keep_their_own_trivia() {
    let result = assert_lossless("(a /* c */ ? , b)");
    let comma = result
        .root
        .tokens()
        .into_iter()
        .find(|token| token.kind() == TokenKind::COMMA)
        .cloned()
        .unwrap();

    let skipped = comma
        .trivia()
        .iter()
        .find(|trivia| trivia.kind() == TriviaKind::SkippedTokens)
        .unwrap();
    let question = &skipped.skipped_tokens()[0];
    assert_eq!(question.kind(), TokenKind::QUESTION);
    assert_eq!(question.full_text(), " /* c */ ?");
}

#[test]
fn test_lexer_alone_is_lossless() {
    let source = "(a, /* x */ 12 \"s\\\"t\" ~ é)";
    let text: String = tokenize(source).iter().map(|token| token.full_text()).collect();
    assert_eq!(text, source);
}

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "(", ")", ",", "a", "bc", "42", "\"s\"", " ", "\n", "// c\n", "/* b */", "?", "!",
        ";", "{", "]", "~", "é", "\"",
    ])
}

proptest! {
    #[test]
    fn prop_parse_is_lossless(parts in prop::collection::vec(fragment(), 0..40)) {
        let source: String = parts.concat();
        let result = parse(&source);
        prop_assert_eq!(result.text(), source);
    }

    #[test]
    fn prop_arbitrary_text_is_lossless(source in "\\PC{0,64}") {
        let result = parse(&source);
        prop_assert_eq!(result.text(), source);
    }

    #[test]
    fn prop_diagnostics_point_inside_input(parts in prop::collection::vec(fragment(), 0..40)) {
        let source: String = parts.concat();
        let result = parse(&source);
        for diagnostic in &result.diagnostics {
            prop_assert!(u32::from(diagnostic.location) as usize <= source.len());
        }
    }
}
