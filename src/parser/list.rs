//! Error-recovering separated lists
//!
//! A generalized routine for parsing a delimiter separated list of things
//! between bookend tokens, e.g. `(a, b, c)`, that keeps going in the face of
//! bad tokens:
//!
//! ```text
//! open  item  sep item  sep item  close
//!  (     a     ,   b     ,   c      )
//! ```
//!
//! Grammar code supplies two predicates (can this token start an item? does
//! it end the list?) and a callback that parses one item. Tokens matching
//! neither predicate are skipped in contiguous runs, reported once per run,
//! and re-attached as skipped-token trivia to whatever survives next: the
//! following item, separator, or the close bookend.

use tracing::debug;

use super::base::{ParserBase, SkipAction};
use super::errors::DiagCode;
use super::source::TokenSource;
use super::syntax::{SyntaxNode, TokenOrSyntax};
use super::syntax_kind::{SyntaxKind, TokenKind};
use super::token::{Token, Trivia};

/// Token predicate used to steer list parsing
pub type TokenPredicate = fn(TokenKind) -> bool;

fn never(_: TokenKind) -> bool {
    false
}

/// Shape of a separated list
#[derive(Debug, Clone, Copy)]
pub struct SeparatedList {
    pub open: TokenKind,
    pub close: TokenKind,
    pub separator: TokenKind,
    /// Code reported for each run of unexpected tokens
    pub code: DiagCode,
    /// Can this token start an item?
    pub is_expected: TokenPredicate,
    /// Does this token end the list?
    pub is_end: TokenPredicate,
    /// Extra tokens that make recovery give up; end of input always does
    pub is_abort: TokenPredicate,
}

impl SeparatedList {
    pub fn new(
        open: TokenKind,
        close: TokenKind,
        separator: TokenKind,
        is_expected: TokenPredicate,
        is_end: TokenPredicate,
    ) -> Self {
        Self {
            open,
            close,
            separator,
            code: DiagCode::E0902,
            is_expected,
            is_end,
            is_abort: never,
        }
    }

    pub fn with_code(mut self, code: DiagCode) -> Self {
        self.code = code;
        self
    }

    pub fn abort_on(mut self, is_abort: TokenPredicate) -> Self {
        self.is_abort = is_abort;
        self
    }

    fn should_abort(&self, kind: TokenKind) -> bool {
        (self.is_end)(kind) || (self.is_abort)(kind)
    }
}

/// The pieces of a parsed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParts {
    pub open: Token,
    /// Items interleaved with separators: item, sep, item, sep, item
    pub elements: Vec<TokenOrSyntax>,
    pub close: Token,
}

impl ListParts {
    pub fn items(&self) -> impl Iterator<Item = &SyntaxNode> + '_ {
        self.elements.iter().filter_map(TokenOrSyntax::as_node)
    }

    pub fn separators(&self) -> impl Iterator<Item = &Token> + '_ {
        self.elements.iter().filter_map(TokenOrSyntax::as_token)
    }

    /// Fold into a node: open bookend, elements, close bookend
    pub fn into_node(self, kind: SyntaxKind) -> SyntaxNode {
        let mut children = Vec::with_capacity(self.elements.len() + 2);
        children.push(self.open.into());
        children.extend(self.elements);
        children.push(self.close.into());
        SyntaxNode::new(kind, children)
    }
}

impl<S: TokenSource + ?Sized> ParserBase<'_, S> {
    /// Parse `open (item (separator item)*)? close`.
    ///
    /// `parse_item` receives whether it is parsing the first item and must
    /// consume exactly the tokens of one item.
    pub fn parse_separated_list<F>(&mut self, list: &SeparatedList, parse_item: F) -> ListParts
    where
        F: FnMut(&mut Self, bool) -> SyntaxNode,
    {
        let open = self.expect(list.open);

        let mut buffer = self.tos_pool().get();
        let close = self.parse_separated_list_into(list, &mut buffer, parse_item);
        ListParts {
            open,
            elements: buffer.take(),
            close,
        }
    }

    /// Parse the body of a list whose open bookend was already consumed,
    /// appending items and separators to `buffer`, and return the close
    /// bookend.
    pub fn parse_separated_list_into<F>(
        &mut self,
        list: &SeparatedList,
        buffer: &mut Vec<TokenOrSyntax>,
        mut parse_item: F,
    ) -> Token
    where
        F: FnMut(&mut Self, bool) -> SyntaxNode,
    {
        let mut skipped = self.trivia_pool().get();
        let mut current = self.peek().kind();

        if !(list.is_end)(current) {
            loop {
                if (list.is_expected)(current) {
                    let item = parse_item(self, true);
                    buffer.push(self.prepend_trivia_buffer(item, &mut skipped).into());
                    loop {
                        current = self.peek().kind();
                        if (list.is_end)(current) {
                            break;
                        }

                        if (list.is_expected)(current) {
                            let separator = self.expect(list.separator);
                            buffer.push(self.prepend_trivia_buffer(separator, &mut skipped).into());
                            let item = parse_item(self, false);
                            buffer.push(self.prepend_trivia_buffer(item, &mut skipped).into());
                            continue;
                        }

                        if self.skip_list_tokens(list, &mut skipped) == SkipAction::Abort {
                            break;
                        }
                    }
                    // found the end
                    break;
                }

                if self.skip_list_tokens(list, &mut skipped) == SkipAction::Abort {
                    break;
                }
                current = self.peek().kind();
            }
        }

        let close = self.expect(list.close);
        self.prepend_trivia_buffer(close, &mut skipped)
    }

    fn skip_list_tokens(&mut self, list: &SeparatedList, skipped: &mut Vec<Trivia>) -> SkipAction {
        let (action, trivia) =
            self.skip_bad_tokens(list.is_expected, |kind| list.should_abort(kind), list.code);
        if !trivia.is_unknown() {
            skipped.push(trivia);
        }
        if action == SkipAction::Abort {
            debug!(close = %list.close, "list recovery aborted");
        }
        action
    }
}
