//! Grammar for nested, comma separated lists
//!
//! A deliberately tiny language used to drive the recovery machinery end to
//! end:
//!
//! ```text
//! SourceFile = Item* EOF
//! Item       = Name | Literal | List
//! List       = '(' (Item (',' Item)*)? ')'
//! ```
//!
//! Every rule is a free function over [`ParserBase`]; lists recurse through
//! the generic separated-list routine. Recursion is capped by
//! [`ParserOptions::max_depth`]: a list nested deeper than that is kept as a
//! flat `ERROR` node of raw tokens and reported once.

use tracing::debug;

use super::base::ParserBase;
use super::errors::{DiagCode, Diagnostics};
use super::lexer::Lexer;
use super::list::SeparatedList;
use super::options::ParserOptions;
use super::source::TokenSource;
use super::syntax::{SyntaxNode, TokenOrSyntax};
use super::syntax_kind::{SyntaxKind, TokenKind};

/// Parse result containing the tree and any diagnostics
#[derive(Debug, Clone)]
pub struct Parse {
    pub root: SyntaxNode,
    pub diagnostics: Diagnostics,
}

impl Parse {
    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Reconstruct the source text from the tree
    pub fn text(&self) -> String {
        self.root.full_text()
    }

    /// Top-level items, in order
    pub fn items(&self) -> impl Iterator<Item = &SyntaxNode> + '_ {
        self.root.child_nodes()
    }
}

/// Parse source text into a tree.
///
/// Never fails and never panics on malformed input. Sources must be smaller
/// than 4 GiB; offsets beyond that saturate.
pub fn parse(input: &str) -> Parse {
    parse_with(input, &ParserOptions::default())
}

pub fn parse_with(input: &str, options: &ParserOptions) -> Parse {
    let mut lexer = Lexer::new(input);
    parse_tokens(&mut lexer, options)
}

/// Parse from any token source
pub fn parse_tokens<S: TokenSource + ?Sized>(source: &mut S, options: &ParserOptions) -> Parse {
    let mut diagnostics = Diagnostics::new();
    let root = {
        let mut p = ParserBase::with_options(source, &mut diagnostics, options);
        source_file(&mut p, options.max_depth)
    };
    Parse { root, diagnostics }
}

fn is_item_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::IDENT | TokenKind::INTEGER | TokenKind::STRING | TokenKind::L_PAREN
    )
}

// A comma may start an item: the item callback reports the missing item and
// the separator is picked up on the next round
fn is_item_or_comma(kind: TokenKind) -> bool {
    is_item_start(kind) || kind == TokenKind::COMMA
}

fn is_list_end(kind: TokenKind) -> bool {
    kind == TokenKind::R_PAREN
}

fn never(_: TokenKind) -> bool {
    false
}

fn paren_list() -> SeparatedList {
    SeparatedList::new(
        TokenKind::L_PAREN,
        TokenKind::R_PAREN,
        TokenKind::COMMA,
        is_item_or_comma,
        is_list_end,
    )
}

/// SourceFile = Item* EOF
fn source_file<S: TokenSource + ?Sized>(
    p: &mut ParserBase<'_, S>,
    max_depth: usize,
) -> SyntaxNode {
    let mut items = p.node_pool().get();
    let mut skipped = p.trivia_pool().get();

    loop {
        let kind = p.peek().kind();
        if kind == TokenKind::EOF {
            break;
        }
        if is_item_start(kind) {
            let node = item(p, max_depth);
            items.push(p.prepend_trivia_buffer(node, &mut skipped));
            continue;
        }
        let (_, trivia) = p.skip_bad_tokens(is_item_start, never, DiagCode::E0901);
        if !trivia.is_unknown() {
            skipped.push(trivia);
        }
    }

    let eof = p.consume();
    let eof = p.prepend_trivia_buffer(eof, &mut skipped);

    let mut children: Vec<TokenOrSyntax> = items.take().into_iter().map(Into::into).collect();
    children.push(eof.into());
    SyntaxNode::new(SyntaxKind::SOURCE_FILE, children)
}

/// Item = Name | Literal | List
///
/// `depth` is how many more lists may be entered below this point.
fn item<S: TokenSource + ?Sized>(p: &mut ParserBase<'_, S>, depth: usize) -> SyntaxNode {
    match p.peek().kind() {
        TokenKind::IDENT => SyntaxNode::new(SyntaxKind::NAME, vec![p.consume().into()]),
        kind if kind.is_literal() => {
            SyntaxNode::new(SyntaxKind::LITERAL, vec![p.consume().into()])
        }
        TokenKind::L_PAREN if depth == 0 => too_deep(p),
        TokenKind::L_PAREN => list(p, depth),
        _ => {
            let actual = p.peek().clone();
            let missing = p.create_expected_token(&actual, TokenKind::IDENT);
            SyntaxNode::new(SyntaxKind::ERROR, vec![missing.into()])
        }
    }
}

/// List = '(' (Item (',' Item)*)? ')'
fn list<S: TokenSource + ?Sized>(p: &mut ParserBase<'_, S>, depth: usize) -> SyntaxNode {
    p.parse_separated_list(&paren_list(), |p, _first| item(p, depth - 1))
        .into_node(SyntaxKind::LIST)
}

/// Swallow a list nested past the depth limit, up to its matching close or
/// end of input, without recursing
fn too_deep<S: TokenSource + ?Sized>(p: &mut ParserBase<'_, S>) -> SyntaxNode {
    let location = p.current_location();
    p.add_error(DiagCode::E0202, location);
    debug!(?location, "list nesting limit reached");

    let mut tokens = p.token_pool().get();
    let mut open = 0usize;
    loop {
        match p.peek().kind() {
            TokenKind::EOF => break,
            TokenKind::L_PAREN => open += 1,
            TokenKind::R_PAREN => open -= 1,
            _ => {}
        }
        tokens.push(p.consume());
        if open == 0 {
            break;
        }
    }
    let children = tokens.take().into_iter().map(Into::into).collect();
    SyntaxNode::new(SyntaxKind::ERROR, children)
}
