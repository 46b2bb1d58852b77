//! Owned syntax tree
//!
//! A [`SyntaxNode`] owns its children outright; there are no parent pointers.
//! The only thing the recovery machinery needs from a node is access to its
//! first token, so trivia can be pushed onto the leading edge. That contract
//! is the [`LeadingTrivia`] trait, implemented for tokens, nodes and
//! [`TokenOrSyntax`].

use text_size::TextSize;

use super::syntax_kind::{SyntaxKind, TokenKind};
use super::token::{Token, Trivia};

/// Either a token or a node; lists are flat runs of these
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOrSyntax {
    Token(Token),
    Node(SyntaxNode),
}

impl TokenOrSyntax {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) => None,
        }
    }

    pub fn write_full_text(&self, out: &mut String) {
        match self {
            Self::Token(token) => token.write_full_text(out),
            Self::Node(node) => node.write_full_text(out),
        }
    }
}

impl From<Token> for TokenOrSyntax {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<SyntaxNode> for TokenOrSyntax {
    fn from(node: SyntaxNode) -> Self {
        Self::Node(node)
    }
}

/// A composite node in the syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    children: Vec<TokenOrSyntax>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, children: Vec<TokenOrSyntax>) -> Self {
        Self { kind, children }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn children(&self) -> &[TokenOrSyntax] {
        &self.children
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &SyntaxNode> + '_ {
        self.children.iter().filter_map(TokenOrSyntax::as_node)
    }

    pub fn child_tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.children.iter().filter_map(TokenOrSyntax::as_token)
    }

    /// First token in tree order, if the node holds any
    pub fn first_token(&self) -> Option<&Token> {
        self.children.iter().find_map(|child| match child {
            TokenOrSyntax::Token(token) => Some(token),
            TokenOrSyntax::Node(node) => node.first_token(),
        })
    }

    pub fn first_token_mut(&mut self) -> Option<&mut Token> {
        self.children.iter_mut().find_map(|child| match child {
            TokenOrSyntax::Token(token) => Some(token),
            TokenOrSyntax::Node(node) => node.first_token_mut(),
        })
    }

    /// All descendant tokens in tree order
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'t>(&'t self, out: &mut Vec<&'t Token>) {
        for child in &self.children {
            match child {
                TokenOrSyntax::Token(token) => out.push(token),
                TokenOrSyntax::Node(node) => node.collect_tokens(out),
            }
        }
    }

    pub fn write_full_text(&self, out: &mut String) {
        for child in &self.children {
            child.write_full_text(out);
        }
    }

    /// Source text of the whole subtree, trivia included
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        self.write_full_text(&mut out);
        out
    }
}

/// Anything whose leading edge can receive trivia
pub trait LeadingTrivia {
    /// Insert `trivia` in front of the leading trivia of the first token.
    ///
    /// `anchor` positions the zero-width placeholder created when the target
    /// has no token to carry the trivia.
    fn prepend_trivia(&mut self, trivia: &[Trivia], anchor: TextSize);
}

impl LeadingTrivia for Token {
    fn prepend_trivia(&mut self, trivia: &[Trivia], _anchor: TextSize) {
        *self = self.with_prepended_trivia(trivia);
    }
}

impl LeadingTrivia for SyntaxNode {
    fn prepend_trivia(&mut self, trivia: &[Trivia], anchor: TextSize) {
        if trivia.iter().all(Trivia::is_unknown) {
            return;
        }
        match self.first_token_mut() {
            Some(token) => token.prepend_trivia(trivia, anchor),
            None => {
                let placeholder =
                    Token::missing(TokenKind::UNKNOWN, anchor).with_prepended_trivia(trivia);
                self.children.insert(0, placeholder.into());
            }
        }
    }
}

impl LeadingTrivia for TokenOrSyntax {
    fn prepend_trivia(&mut self, trivia: &[Trivia], anchor: TextSize) {
        match self {
            Self::Token(token) => token.prepend_trivia(trivia, anchor),
            Self::Node(node) => node.prepend_trivia(trivia, anchor),
        }
    }
}
