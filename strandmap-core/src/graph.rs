//! State graph model for the strand-split alignment search.
//!
//! The graph is implicit: states are produced on demand by
//! [`AlignmentGraph::for_each_edge`] rather than materialized. Edge weights
//! are restricted to {0, 1}; the search engine's deque frontier is only
//! correct under that restriction.

use crate::types::{Reference, SeqPos, Sequence, Strand};

/// Cost of one edge; always 0 or 1.
pub type Weight = u32;

/// A node of the alignment graph. Identity is (kind, i, j).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Checkpoint at query position `j` with no committed segment; any
    /// reference offset may be restarted from here at unit cost.
    Anchor { j: SeqPos },
    /// Reference position `i` aligned to query position `j`, reading the
    /// reference left-to-right.
    Forward { i: SeqPos, j: SeqPos },
    /// Reference position `i` aligned to query position `j`, reading the
    /// complemented reference right-to-left.
    Reverse { i: SeqPos, j: SeqPos },
}

impl State {
    /// Query position of the state.
    pub fn query_pos(&self) -> SeqPos {
        match *self {
            State::Anchor { j } | State::Forward { j, .. } | State::Reverse { j, .. } => j,
        }
    }

    /// Reference position of the state; anchors sit at 0.
    pub fn ref_pos(&self) -> SeqPos {
        match *self {
            State::Anchor { .. } => 0,
            State::Forward { i, .. } | State::Reverse { i, .. } => i,
        }
    }

    /// Orientation of the state, if it is inside a segment.
    pub fn strand(&self) -> Option<Strand> {
        match *self {
            State::Anchor { .. } => None,
            State::Forward { .. } => Some(Strand::Forward),
            State::Reverse { .. } => Some(Strand::Reverse),
        }
    }
}

/// Successor/cost rules over a reference (both orientations) and a query.
pub struct AlignmentGraph<'a> {
    reference: &'a Reference,
    query: &'a Sequence,
}

impl<'a> AlignmentGraph<'a> {
    pub fn new(reference: &'a Reference, query: &'a Sequence) -> Self {
        Self { reference, query }
    }

    /// Start state of every search.
    pub fn origin(&self) -> State {
        State::Anchor { j: 0 }
    }

    /// Query position a goal state must carry, in any kind.
    pub fn goal_query_pos(&self) -> SeqPos {
        self.query.last_index()
    }

    pub fn reference(&self) -> &Reference {
        self.reference
    }

    pub fn query(&self) -> &Sequence {
        self.query
    }

    /// Emit every outgoing edge of `state` as `(successor, weight)`.
    ///
    /// The emission order is fixed; search tie-breaking follows it, so it
    /// must stay stable. Out-of-range moves are suppressed by the bounds
    /// guards rather than reported as errors.
    pub fn for_each_edge<F>(&self, state: State, mut emit: F)
    where
        F: FnMut(State, Weight),
    {
        let ref_len = self.reference.len();
        let query_len = self.query.len();

        match state {
            State::Anchor { j } => {
                for i in 0..ref_len {
                    emit(State::Forward { i, j }, 1);
                    emit(State::Reverse { i, j }, 1);
                }
            }
            State::Forward { i, j } => {
                if i + 1 < ref_len && j + 1 < query_len {
                    let matched = self.reference.forward().base(i + 1) == self.query.base(j + 1);
                    let weight = if matched { 0 } else { 1 };
                    emit(State::Forward { i: i + 1, j: j + 1 }, weight);
                }
                if i + 1 < ref_len {
                    emit(State::Forward { i: i + 1, j }, 1);
                }
                if j + 1 < query_len {
                    emit(State::Forward { i, j: j + 1 }, 1);
                }
                emit(State::Anchor { j }, 1);
            }
            State::Reverse { i, j } => {
                // The diagonal consumes complement[i-1], one left of the
                // current position; reverse walks therefore read the
                // complement right-to-left.
                if i >= 1 && j + 1 < query_len {
                    let matched = self.reference.complement().base(i - 1) == self.query.base(j + 1);
                    let weight = if matched { 0 } else { 1 };
                    emit(State::Reverse { i: i - 1, j: j + 1 }, weight);
                }
                if i >= 1 {
                    emit(State::Reverse { i: i - 1, j }, 1);
                }
                if j + 1 < query_len {
                    emit(State::Reverse { i, j: j + 1 }, 1);
                }
                emit(State::Anchor { j }, 1);
            }
        }
    }
}
