//! Cross-checks the deque search against an independent Dijkstra over the
//! same graph, and validates backtrace output shape, on randomized inputs.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use proptest::prelude::*;
use strandmap_core::{search, segments, AlignmentGraph, Reference, Sequence};

/// Reference shortest-path computation with a full priority queue. Returns
/// the minimum cost of reaching any state in the last query column.
fn dijkstra_goal_distance(graph: &AlignmentGraph<'_>) -> Option<u32> {
    let goal_j = graph.goal_query_pos();
    let mut dist = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(graph.origin(), 0u32);
    heap.push(Reverse((0u32, graph.origin())));

    while let Some(Reverse((d, state))) = heap.pop() {
        if state.query_pos() == goal_j {
            return Some(d);
        }
        if d > dist[&state] {
            continue;
        }
        graph.for_each_edge(state, |next, weight| {
            let candidate = d + weight;
            if dist.get(&next).map_or(true, |&best| candidate < best) {
                dist.insert(next, candidate);
                heap.push(Reverse((candidate, next)));
            }
        });
    }

    None
}

fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
        0..max_len,
    )
}

proptest! {
    #[test]
    fn deque_search_matches_dijkstra(ref_bases in dna(12), qry_bases in dna(8)) {
        let reference = Reference::from_bases(&ref_bases);
        let query = Sequence::from_bases(&qry_bases);
        let graph = AlignmentGraph::new(&reference, &query);

        let outcome = search(&graph, |_, _| {}).expect("goal column is reachable");
        let expected = dijkstra_goal_distance(&graph).expect("goal column is reachable");
        prop_assert_eq!(outcome.distance, expected);
    }

    #[test]
    fn backtrace_terminates_and_tiles_the_query(ref_bases in dna(12), qry_bases in dna(8)) {
        let reference = Reference::from_bases(&ref_bases);
        let query = Sequence::from_bases(&qry_bases);
        let graph = AlignmentGraph::new(&reference, &query);

        let outcome = search(&graph, |_, _| {}).expect("goal column is reachable");
        let segs = segments(&outcome);

        let goal_j = graph.goal_query_pos() as i64;
        let ref_last = (reference.len() - 1) as i64;

        if goal_j == 0 {
            prop_assert!(segs.is_empty());
            return Ok(());
        }

        // Records run goal-to-origin and their query intervals tile [0, goal]
        prop_assert_eq!(segs.first().unwrap().query_end, goal_j);
        prop_assert_eq!(segs.last().unwrap().query_start, 0);
        for pair in segs.windows(2) {
            prop_assert_eq!(pair[0].query_start, pair[1].query_end);
        }

        for seg in &segs {
            prop_assert!(seg.query_start <= seg.query_end);
            // Reverse records offset their bounds by -1 and may touch -1 at
            // the left edge of the reference
            prop_assert!(seg.ref_start <= seg.ref_end);
            prop_assert!(seg.ref_start >= -1);
            prop_assert!(seg.ref_end <= ref_last);
        }
    }
}
