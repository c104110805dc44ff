use std::collections::HashMap;
use std::hash::Hash;

/// Undirected weighted edges keyed by an unordered node pair.
#[derive(Debug)]
pub struct EdgeWeights<N: Hash + Ord + Clone, W> {
    edges: HashMap<(N, N), W>,
}

impl<N: Hash + Ord + Clone, W> Default for EdgeWeights<N, W> {
    fn default() -> Self { Self { edges: HashMap::new() } }
}

impl<N: Hash + Ord + Clone, W> EdgeWeights<N, W> {
    pub fn new() -> Self { Self::default() }

    fn key(a: &N, b: &N) -> (N, N) {
        if a <= b { (a.clone(), b.clone()) } else { (b.clone(), a.clone()) }
    }

    /// Sets the weight of `{a, b}`, replacing any previous one.
    pub fn add_edge(&mut self, a: N, b: N, weight: W) {
        self.edges.insert(Self::key(&a, &b), weight);
    }

    pub fn weight(&self, a: &N, b: &N) -> Option<&W> { self.edges.get(&Self::key(a, b)) }
    pub fn has_edge(&self, a: &N, b: &N) -> bool     { self.edges.contains_key(&Self::key(a, b)) }
    pub fn len(&self) -> usize                        { self.edges.len() }
    pub fn is_empty(&self) -> bool                    { self.edges.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_does_not_matter() {
        let mut g = EdgeWeights::new();
        g.add_edge("A", "B", 5);
        g.add_edge("C", "B", 2);
        assert_eq!(g.weight(&"B", &"A"), Some(&5));
        assert!(g.has_edge(&"B", &"C"));
        assert!(!g.has_edge(&"A", &"C"));
        g.add_edge("B", "A", 7);
        assert_eq!(g.len(), 2);
        assert_eq!(g.weight(&"A", &"B"), Some(&7));
    }
}
