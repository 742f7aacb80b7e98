//! Generic graph walks over implicit graphs.
//!
//! The graph is described only by a start node and a neighbour function, so
//! the same walks serve faces, edges and vertices alike. A node is marked as
//! seen when it is pushed, which means every reachable node is returned
//! exactly once.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Breadth-first walk from `start`; returns nodes in FIFO discovery order.
pub fn breadth_first<N, F, I>(start: N, mut neighbors_of: F) -> Vec<N>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut component = Vec::new();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        component.push(node);
        for w in neighbors_of(node) {
            if seen.insert(w) {
                queue.push_back(w);
            }
        }
    }
    component
}

/// Depth-first walk from `start`; returns nodes in LIFO (stack) order.
///
/// On a simple cycle the result is the cycle itself in cyclic order, which
/// the boundary tracer relies on.
pub fn depth_first<N, F, I>(start: N, mut neighbors_of: F) -> Vec<N>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut component = Vec::new();
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        component.push(node);
        for w in neighbors_of(node) {
            if seen.insert(w) {
                stack.push(w);
            }
        }
    }
    component
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: u32) -> impl Fn(u32) -> Vec<u32> {
        move |v| {
            let mut out = Vec::new();
            if v > 0 {
                out.push(v - 1);
            }
            if v + 1 < n {
                out.push(v + 1);
            }
            out
        }
    }

    fn cycle(n: u32) -> impl Fn(u32) -> Vec<u32> {
        move |v| vec![(v + n - 1) % n, (v + 1) % n]
    }

    #[test]
    fn bfs_visits_in_fifo_order() {
        let tree = |v: u32| match v {
            0 => vec![1, 2],
            1 => vec![3],
            2 => vec![4],
            _ => vec![],
        };
        assert_eq!(breadth_first(0, tree), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn dfs_visits_in_lifo_order() {
        let tree = |v: u32| match v {
            0 => vec![1, 2],
            1 => vec![3],
            2 => vec![4],
            _ => vec![],
        };
        assert_eq!(depth_first(0, tree), vec![0, 2, 4, 1, 3]);
    }

    #[test]
    fn isolated_start_is_returned() {
        assert_eq!(breadth_first(7, |_| Vec::new()), vec![7]);
        assert_eq!(depth_first(7, |_| Vec::new()), vec![7]);
    }

    #[test]
    fn each_node_once() {
        let walked = breadth_first(3, path_graph(10));
        assert_eq!(walked.len(), 10);
        let unique: HashSet<_> = walked.iter().copied().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn dfs_on_cycle_is_cyclic() {
        let n = 12;
        let walked = depth_first(5, cycle(n));
        assert_eq!(walked.len(), n as usize);
        for i in 0..walked.len() {
            let a = walked[i];
            let b = walked[(i + 1) % walked.len()];
            assert!(cycle(n)(a).contains(&b), "{a} and {b} are not adjacent");
        }
    }
}
