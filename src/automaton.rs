//! The fixed instruction grammar, compiled once into an arena of nodes.

use crate::token::Token;

/// The index of a node in the automaton's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// The root position; the arena always stores it first.
pub(crate) const ROOT: NodeId = NodeId(0);

/// A recognised instruction shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    /// `mul(a,b)` with two fields of one to three digits.
    Mul,
    /// `do()`
    Do,
    /// `don't()`
    Dont,
}

/// One position in the grammar.
#[derive(Debug)]
pub(crate) struct Node {
    /// The category a token must have to occupy this node.
    pub(crate) token: Token,
    /// How many consecutive tokens of that category the node absorbs.
    pub(crate) max_repeat: u32,
    /// Outgoing edges, in match order.
    pub(crate) children: Vec<NodeId>,
    /// Set exactly on leaves: stepping into the node completes this phrase.
    pub(crate) phrase: Option<Phrase>,
}

/// The grammar `mul(d{1,3},d{1,3})` | `do()` | `don't()`, stored as an
/// arena so positions are plain indices rather than references into an
/// owning tree.
#[derive(Debug)]
pub(crate) struct Automaton {
    nodes: Vec<Node>,
}

impl Automaton {
    /// Builds the instruction grammar.
    ///
    /// `do()` and `don't()` share their `d o` prefix; the branch lives at
    /// the `o` node. The root carries [`Token::Invalid`] because its own
    /// category is never consulted: matching always starts at its children.
    /// A digit field is entered only by an actual digit, so empty fields
    /// such as `mul(,4)` fail at the separator.
    #[must_use]
    pub(crate) fn new() -> Self {
        let mut automaton = Self {
            nodes: vec![Node {
                token: Token::Invalid,
                max_repeat: 0,
                children: Vec::new(),
                phrase: None,
            }],
        };

        let second_field = automaton.chain(
            ROOT,
            &[
                (Token::M, 1),
                (Token::U, 1),
                (Token::L, 1),
                (Token::OpenParen, 1),
                (Token::Digit, 3),
                (Token::Comma, 1),
                (Token::Digit, 3),
            ],
        );
        automaton.leaf(second_field, Token::CloseParen, Phrase::Mul);

        let shared_o = automaton.chain(ROOT, &[(Token::D, 1), (Token::O, 1)]);

        let do_open = automaton.push(shared_o, Token::OpenParen, 1);
        automaton.leaf(do_open, Token::CloseParen, Phrase::Do);

        let dont_open = automaton.chain(
            shared_o,
            &[
                (Token::N, 1),
                (Token::Quote, 1),
                (Token::T, 1),
                (Token::OpenParen, 1),
            ],
        );
        automaton.leaf(dont_open, Token::CloseParen, Phrase::Dont);

        automaton
    }

    /// Adds a node below `parent` and returns its id.
    fn push(&mut self, parent: NodeId, token: Token, max_repeat: u32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            token,
            max_repeat,
            children: Vec::new(),
            phrase: None,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Adds a chain of nodes below `from` and returns the last one.
    fn chain(&mut self, from: NodeId, steps: &[(Token, u32)]) -> NodeId {
        steps.iter().fold(from, |parent, &(token, max_repeat)| {
            self.push(parent, token, max_repeat)
        })
    }

    /// Adds an accepting leaf below `from`.
    fn leaf(&mut self, from: NodeId, token: Token, phrase: Phrase) {
        let id = self.push(from, token, 1);
        self.nodes[id.0].phrase = Some(phrase);
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The first child of `id` requiring `token`, in edge order.
    #[inline]
    pub(crate) fn child_matching(&self, id: NodeId, token: Token) -> Option<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].token == token)
    }
}
