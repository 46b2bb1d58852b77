//! Language-agnostic parsing helpers
//!
//! [`ParserBase`] owns the lookahead window and the buffer pools and borrows
//! the diagnostics sink. Grammar code drives it through `peek`/`consume`/
//! `expect`, and hands recovered text back through the `prepend_*` family so
//! that nothing read from the source is ever dropped.
//!
//! Recovered text always moves *forward* in the token stream onto the next
//! token or node that survives into the tree, which keeps it in source order.

use text_size::TextSize;
use tracing::trace;

use super::errors::{DiagCode, Diagnostic, Diagnostics};
use super::options::ParserOptions;
use super::pool::BufferPool;
use super::source::TokenSource;
use super::syntax::{LeadingTrivia, SyntaxNode, TokenOrSyntax};
use super::syntax_kind::TokenKind;
use super::token::{Token, Trivia};
use super::window::{Window, WindowError};

/// Outcome of skipping bad tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipAction {
    /// Stopped on an expected token; the caller may keep going
    Continue,
    /// Hit end of input or an abort token; the caller must wind down
    Abort,
}

/// Shared state and helpers for a single parse
pub struct ParserBase<'a, S: TokenSource + ?Sized> {
    window: Window<'a, S>,
    diagnostics: &'a mut Diagnostics,
    trivia_pool: BufferPool<Trivia>,
    token_pool: BufferPool<Token>,
    node_pool: BufferPool<SyntaxNode>,
    tos_pool: BufferPool<TokenOrSyntax>,
}

impl<'a, S: TokenSource + ?Sized> ParserBase<'a, S> {
    pub fn new(source: &'a mut S, diagnostics: &'a mut Diagnostics) -> Self {
        Self::with_options(source, diagnostics, &ParserOptions::default())
    }

    pub fn with_options(
        source: &'a mut S,
        diagnostics: &'a mut Diagnostics,
        options: &ParserOptions,
    ) -> Self {
        Self {
            window: Window::with_capacity(source, options.lookahead_capacity),
            diagnostics,
            trivia_pool: BufferPool::new(),
            token_pool: BufferPool::new(),
            node_pool: BufferPool::new(),
            tos_pool: BufferPool::new(),
        }
    }

    // =========================================================================
    // Token inspection and consumption
    // =========================================================================

    pub fn peek(&mut self) -> &Token {
        self.window.peek()
    }

    /// # Panics
    /// Panics if `offset` exceeds the configured lookahead capacity.
    pub fn peek_at(&mut self, offset: usize) -> &Token {
        self.window.peek_at(offset)
    }

    pub fn try_peek_at(&mut self, offset: usize) -> Result<&Token, WindowError> {
        self.window.try_peek_at(offset)
    }

    /// Whether the current token has the given kind
    pub fn at(&mut self, kind: TokenKind) -> bool {
        self.window.at(kind)
    }

    pub fn consume(&mut self) -> Token {
        self.window.consume()
    }

    pub fn consume_if(&mut self, kind: TokenKind) -> Option<Token> {
        self.window.consume_if(kind)
    }

    /// Consume a token of `kind`, or synthesize a missing one and report it.
    ///
    /// The current token is left in place when it does not match.
    pub fn expect(&mut self, kind: TokenKind) -> Token {
        if let Some(token) = self.consume_if(kind) {
            return token;
        }
        let actual = self.peek().clone();
        self.create_expected_token(&actual, kind)
    }

    pub fn last_consumed(&self) -> Option<&Token> {
        self.window.last_consumed()
    }

    /// Start of the current token
    pub fn current_location(&mut self) -> TextSize {
        self.peek().location()
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub fn diagnostics(&self) -> &Diagnostics {
        &*self.diagnostics
    }

    pub fn add_error(&mut self, code: DiagCode, location: TextSize) -> &mut Diagnostic {
        self.diagnostics.add_error(code, location)
    }

    /// Report that `expected` was required where `actual` sits and return a
    /// zero-width placeholder of the expected kind
    pub fn create_expected_token(&mut self, actual: &Token, expected: TokenKind) -> Token {
        let location = actual.location();
        trace!(%expected, found = %actual.kind(), ?location, "synthesizing missing token");
        self.add_error(DiagCode::E0201, location)
            .with_message(format!("expected {expected}, found {}", actual.kind()));
        Token::missing(expected, location)
    }

    // =========================================================================
    // Pools
    // =========================================================================

    pub fn trivia_pool(&self) -> &BufferPool<Trivia> {
        &self.trivia_pool
    }

    pub fn token_pool(&self) -> &BufferPool<Token> {
        &self.token_pool
    }

    pub fn node_pool(&self) -> &BufferPool<SyntaxNode> {
        &self.node_pool
    }

    pub fn tos_pool(&self) -> &BufferPool<TokenOrSyntax> {
        &self.tos_pool
    }

    // =========================================================================
    // Trivia reattachment
    // =========================================================================

    /// Put `trivia` in front of the target's leading trivia. `Unknown` is a no-op.
    pub fn prepend_trivia<T: LeadingTrivia>(&mut self, mut target: T, trivia: &Trivia) -> T {
        if !trivia.is_unknown() {
            let anchor = self.current_location();
            target.prepend_trivia(std::slice::from_ref(trivia), anchor);
        }
        target
    }

    /// Put every entry of `trivia`, in order, in front of the target's leading
    /// trivia. The buffer is left empty.
    pub fn prepend_trivia_buffer<T: LeadingTrivia>(
        &mut self,
        mut target: T,
        trivia: &mut Vec<Trivia>,
    ) -> T {
        if !trivia.is_empty() {
            let anchor = self.current_location();
            target.prepend_trivia(trivia.as_slice(), anchor);
            trivia.clear();
        }
        target
    }

    /// Wrap `tokens` into one skipped-token trivia and prepend it. The buffer
    /// is left empty.
    pub fn prepend_skipped_tokens<T: LeadingTrivia>(
        &mut self,
        target: T,
        tokens: &mut Vec<Token>,
    ) -> T {
        let mut trivia = self.trivia_pool.get();
        Self::reduce_skipped_tokens(tokens, &mut trivia);
        self.prepend_trivia_buffer(target, &mut trivia)
    }

    /// Fold a run of skipped tokens into a single trivia value pushed onto
    /// `trivia_out`. Nothing is pushed for an empty run.
    pub fn reduce_skipped_tokens(skipped: &mut Vec<Token>, trivia_out: &mut Vec<Trivia>) {
        if skipped.is_empty() {
            return;
        }
        trivia_out.push(Trivia::skipped(skipped.as_slice()));
        skipped.clear();
    }

    /// Prepend onto the first element of `list`, if there is one
    pub fn prepend_trivia_list<T: LeadingTrivia>(&mut self, list: &mut [T], trivia: &Trivia) {
        if trivia.is_unknown() {
            return;
        }
        let anchor = self.current_location();
        if let Some(first) = list.first_mut() {
            first.prepend_trivia(std::slice::from_ref(trivia), anchor);
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Consume tokens until one satisfies `is_expected` (`Continue`) or end of
    /// input / an `is_abort` token is reached (`Abort`).
    ///
    /// One diagnostic with `code` is emitted at the first bad token of the run,
    /// including an abort token the run stops on. A run that starts at end of
    /// input is silent, leaving the truncation report to whatever the caller
    /// expects next. The consumed tokens come back as a single skipped-token
    /// trivia (`Unknown` when nothing was consumed) for the caller to attach.
    pub fn skip_bad_tokens(
        &mut self,
        is_expected: impl Fn(TokenKind) -> bool,
        is_abort: impl Fn(TokenKind) -> bool,
        code: DiagCode,
    ) -> (SkipAction, Trivia) {
        let mut tokens = self.token_pool.get();
        let mut action = SkipAction::Continue;
        let mut reported = false;

        loop {
            let current = self.peek();
            let (kind, location) = (current.kind(), current.location());
            if is_expected(kind) {
                break;
            }
            if !reported && kind != TokenKind::EOF {
                self.add_error(code, location)
                    .with_message(format!("unexpected {kind}"));
                reported = true;
            }
            if kind == TokenKind::EOF || is_abort(kind) {
                action = SkipAction::Abort;
                break;
            }
            tokens.push(self.consume());
        }

        trace!(%code, skipped = tokens.len(), ?action, "skipped bad tokens");
        (action, Trivia::skipped(&tokens))
    }
}
