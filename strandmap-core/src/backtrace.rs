//! Segment reconstruction from a finished search.
//!
//! Walks predecessor links from the goal back to the origin anchor and
//! emits one record per forward/reverse run at each kind transition.
//! Records come out in goal-to-origin order, which is the order the output
//! file expects.

use std::mem::discriminant;

use crate::graph::State;
use crate::search::SearchOutcome;
use crate::types::{Segment, Strand};

/// Extract the aligned segments of `outcome`, in goal-to-origin order.
///
/// Reverse records keep the `-1` offsets of the right-to-left complement
/// walk; translating them away would shift every reverse boundary by one.
pub fn segments(outcome: &SearchOutcome) -> Vec<Segment> {
    let origin = State::Anchor { j: 0 };
    let mut records = Vec::new();

    let mut current = outcome.goal;
    let mut end_i = current.ref_pos() as i64;
    let mut end_j = current.query_pos() as i64;

    while current != origin {
        // Predecessor chains are acyclic and end at the origin, so every
        // lookup hits
        let predecessor = outcome.labels[&current].predecessor;
        if discriminant(&current) != discriminant(&predecessor) {
            match current {
                State::Forward { i, j } => records.push(Segment {
                    query_start: j as i64,
                    query_end: end_j,
                    ref_start: i as i64,
                    ref_end: end_i,
                    strand: Strand::Forward,
                }),
                State::Reverse { i, j } => records.push(Segment {
                    query_start: j as i64,
                    query_end: end_j,
                    ref_start: end_i - 1,
                    ref_end: i as i64 - 1,
                    strand: Strand::Reverse,
                }),
                State::Anchor { .. } => {
                    end_i = predecessor.ref_pos() as i64;
                    end_j = predecessor.query_pos() as i64;
                }
            }
        }
        current = predecessor;
    }

    records
}
