use fxhash::FxBuildHasher;
/// This module implements a breadth-first counterpart of
/// [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
/// Queue entries are indices into an [IndexMap] that doubles as visited
/// set and predecessor map, so no per-entry path copies are kept; the
/// path is rebuilt once by walking predecessor links back from the goal.
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::collections::VecDeque;
use std::hash::Hash;

const NO_PARENT: usize = usize::MAX;

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, goal: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(goal, |i| {
        parents.get_index(*i).map(|(node, parent)| {
            *i = *parent;
            node.clone()
        })
    })
    .collect();
    // The unfold ends on the source node, which the path leaves out.
    path.pop();
    path.reverse();
    path
}

/// Unweighted shortest-path search from `start` to the first node
/// satisfying `success`, expanding nodes in first-in first-out order.
///
/// The returned path excludes `start` and ends on the matched node; if
/// `start` itself matches, the path is empty. Successors are considered
/// in the order `successors` yields them, and among several equal-length
/// paths the first-discovered one is returned, so that order is part of
/// the observable behavior.
pub(crate) fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), NO_PARENT);
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(0);
    while let Some(index) = queue.pop_front() {
        let successors = {
            let (node, _) = parents.get_index(index).unwrap();
            if success(node) {
                return Some(reverse_path(&parents, index));
            }
            successors(node)
        };
        for successor in successors {
            // A node already in the map was discovered at the same or a
            // smaller depth; only first discoveries are enqueued.
            if let Vacant(e) = parents.entry(successor) {
                queue.push_back(e.index());
                e.insert(index);
            }
        }
    }
    None
}
