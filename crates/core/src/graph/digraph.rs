//! A minimal directed graph with transitive-closure and cycle-detection
//! support, used for the pt-conflict-graph's reflexive transitive closure
//! (spec §4.3, §9).

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    pub adj_map: HashMap<T, HashSet<T>>,
}

impl<T> DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    pub fn add_edge(&mut self, source: T, target: T) {
        self.adj_map.entry(source).or_default().insert(target.clone());
        self.adj_map.entry(target).or_default();
    }

    pub fn add_vertex(&mut self, source: T) {
        self.adj_map.entry(source).or_default();
    }

    #[must_use]
    pub fn has_edge(&self, source: &T, target: &T) -> bool {
        self.adj_map
            .get(source)
            .is_some_and(|neighbors| neighbors.contains(target))
    }

    /// Mutates `reachable` to contain all vertices reachable from `source`.
    fn find_all_reachable_helper(&self, source: &T, mut reachable: HashSet<T>) -> HashSet<T> {
        if let Some(neighbors) = self.adj_map.get(source) {
            for neighbor in neighbors {
                if reachable.insert(neighbor.clone()) {
                    reachable = self.find_all_reachable_helper(neighbor, reachable);
                }
            }
        }
        reachable
    }

    /// The transitive closure, *not* reflexive: `a` is only adjacent to `a`
    /// in the result if `a` lies on a cycle.
    #[must_use]
    pub fn closure(&self) -> Self {
        Self {
            adj_map: self
                .adj_map
                .keys()
                .map(|source| (source.clone(), self.find_all_reachable_helper(source, [].into())))
                .collect(),
        }
    }

    /// The reflexive transitive closure: every vertex is adjacent to itself
    /// in addition to whatever [`Self::closure`] computes.
    #[must_use]
    pub fn reflexive_closure(&self) -> Self {
        let mut closed = self.closure();
        for vertex in self.adj_map.keys() {
            closed.adj_map.entry(vertex.clone()).or_default().insert(vertex.clone());
        }
        closed
    }

    #[must_use]
    pub fn to_edge_list(&self) -> Vec<(T, T)> {
        let mut edges = Vec::new();
        for (src, dsts) in &self.adj_map {
            for dst in dsts {
                edges.push((src.clone(), dst.clone()));
            }
        }
        edges
    }
}
