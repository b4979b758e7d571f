//! Deque-based shortest-path search over the alignment graph.
//!
//! Weight-0 edges go to the front of the frontier, weight-1 edges to the
//! back, so states leave the deque in nondecreasing distance order without
//! a priority queue. The substitution is only valid while edge weights stay
//! in {0, 1}; widening the weight model silently breaks it.

use std::collections::VecDeque;

use fnv::{FnvHashMap, FnvHashSet};
use thiserror::Error;

use crate::graph::{AlignmentGraph, State, Weight};
use crate::types::SeqPos;

/// Errors that can occur during the search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The frontier emptied before any state reached the last query column.
    #[error("no alignment found")]
    Exhausted,
}

/// Best known path to a state: distance plus the state it was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLabel {
    pub distance: u32,
    pub predecessor: State,
}

/// Finalized output of a successful search.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Distance/predecessor table; final for every visited state, and for
    /// the goal column at the moment its first state was popped.
    pub labels: FnvHashMap<State, PathLabel>,
    /// First state popped in the goal column.
    pub goal: State,
    /// Minimum cost from the origin anchor to the goal column.
    pub distance: u32,
}

/// Run the search from the origin anchor until the first state carrying the
/// last query position is popped.
///
/// `on_anchor` fires once per expanded anchor with its query position and
/// finalized distance; callers that report progress own the formatting.
pub fn search<F>(graph: &AlignmentGraph<'_>, mut on_anchor: F) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(SeqPos, u32),
{
    let origin = graph.origin();
    let goal_j = graph.goal_query_pos();

    let mut labels: FnvHashMap<State, PathLabel> = FnvHashMap::default();
    let mut visited: FnvHashSet<State> = FnvHashSet::default();
    let mut frontier: VecDeque<State> = VecDeque::new();

    labels.insert(
        origin,
        PathLabel {
            distance: 0,
            predecessor: origin,
        },
    );
    frontier.push_back(origin);

    let mut expanded = 0usize;
    while let Some(state) = frontier.pop_front() {
        // Every queued state was labeled when it was relaxed
        let distance = labels[&state].distance;

        // Goal test precedes the visited test: the first pop in the goal
        // column carries the column's minimum distance
        if state.query_pos() == goal_j {
            log::debug!(
                "goal reached at {:?} after {} expansions, distance {}",
                state,
                expanded,
                distance
            );
            return Ok(SearchOutcome {
                labels,
                goal: state,
                distance,
            });
        }

        // Stale duplicate entries are dropped here instead of being removed
        // at relax time
        if !visited.insert(state) {
            continue;
        }
        expanded += 1;

        graph.for_each_edge(state, |next, weight| {
            relax(&mut labels, &mut frontier, state, distance, next, weight);
        });

        if let State::Anchor { j } = state {
            on_anchor(j, distance);
        }
    }

    log::debug!("frontier exhausted after {} expansions", expanded);
    Err(SearchError::Exhausted)
}

/// Record `next` if this path improves on its label, then queue it: front
/// for weight-0 edges, back otherwise. Stale queue entries are left alone.
fn relax(
    labels: &mut FnvHashMap<State, PathLabel>,
    frontier: &mut VecDeque<State>,
    from: State,
    from_distance: u32,
    next: State,
    weight: Weight,
) {
    let candidate = from_distance + weight;
    let improved = match labels.get(&next) {
        Some(label) => candidate < label.distance,
        None => true,
    };
    if improved {
        labels.insert(
            next,
            PathLabel {
                distance: candidate,
                predecessor: from,
            },
        );
        if weight == 0 {
            frontier.push_front(next);
        } else {
            frontier.push_back(next);
        }
    }
}
