//! The grammar matcher: one classified token in, one [`Step`] out.

use crate::{
    automaton::{Automaton, NodeId, Phrase, ROOT},
    token::Token,
};

/// The matcher's verdict on one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The token extended a partial phrase.
    Partial,
    /// The token completed a phrase; the matcher is back at the root.
    Complete(Phrase),
    /// The token fit nowhere; the matcher is back at the root.
    Rejected,
}

impl Step {
    /// Whether the token was accepted, completing a phrase or not.
    #[must_use]
    #[inline]
    pub fn is_accepted(self) -> bool {
        self != Self::Rejected
    }
}

/// Walks the instruction grammar one token at a time.
///
/// The cursor is an index into the automaton's arena plus a count of how
/// many consecutive tokens the current node has absorbed. After every call
/// to [`Matcher::accept`] the cursor is either at the root with a zero
/// count or at a non-root node with a count between 1 and that node's
/// repeat bound.
#[derive(Debug)]
pub struct Matcher {
    automaton: Automaton,
    node: NodeId,
    count: u32,
}

impl Matcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            automaton: Automaton::new(),
            node: ROOT,
            count: 0,
        }
    }

    /// Feeds one token to the matcher.
    ///
    /// Rejection is an answer, not an error: the cursor returns to the
    /// root and scanning continues with the next token. The rejected token
    /// is not retried against the root, so a phrase start swallowed by a
    /// failing phrase is lost with it.
    pub fn accept(&mut self, token: Token) -> Step {
        if token != Token::Invalid {
            // A repeatable node absorbs further tokens of its own category.
            if self.node != ROOT {
                let current = self.automaton.node(self.node);
                if token == current.token && self.count < current.max_repeat {
                    self.count += 1;
                    return Step::Partial;
                }
            }

            // Otherwise the token must leave along one of the node's edges.
            if let Some(next) = self.automaton.child_matching(self.node, token) {
                if let Some(phrase) = self.automaton.node(next).phrase {
                    self.reset();
                    return Step::Complete(phrase);
                }
                self.node = next;
                self.count = 1;
                return Step::Partial;
            }
        }

        self.reset();
        Step::Rejected
    }

    /// Returns the cursor to the root, abandoning any partial phrase.
    pub fn reset(&mut self) {
        self.node = ROOT;
        self.count = 0;
    }

    /// Whether the matcher holds no partial phrase.
    #[must_use]
    #[inline]
    pub fn at_root(&self) -> bool {
        self.node == ROOT
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}
