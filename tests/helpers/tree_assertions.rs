//! Assertions over parsed trees.

#![allow(dead_code)]

use salvage::parser::{DiagCode, Parse, SyntaxKind, SyntaxNode, parse};

/// Parse `source` and assert the tree reproduces it byte for byte.
pub fn assert_lossless(source: &str) -> Parse {
    let result = parse(source);
    assert_eq!(
        result.text(),
        source,
        "tree text differs from input; diagnostics: {:?}",
        result.diagnostics.codes()
    );
    result
}

/// The first top-level list in a parse.
pub fn first_list(result: &Parse) -> &SyntaxNode {
    result
        .items()
        .find(|node| node.kind() == SyntaxKind::LIST)
        .unwrap_or_else(|| panic!("no list in {:?}", result.text()))
}

/// Token text (without trivia) of each item in `list`.
pub fn item_texts(list: &SyntaxNode) -> Vec<String> {
    list.child_nodes()
        .map(|item| item.tokens().iter().map(|token| token.text()).collect())
        .collect()
}

/// Number of separator tokens directly under `list`, excluding bookends.
pub fn separator_count(list: &SyntaxNode) -> usize {
    let tokens: Vec<_> = list.child_tokens().collect();
    tokens.len().saturating_sub(2)
}

pub fn codes(result: &Parse) -> Vec<DiagCode> {
    result.diagnostics.codes()
}
