/// Disjoint-set forest over dense indices, used to label connected pixels.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Create a new forest where every index starts as its own set.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Number of indices tracked by the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the forest tracks no indices at all.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the representative of the set containing `id`, halving the path
    /// along the way.
    pub fn find(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            self.parent[id] = self.parent[self.parent[id]];
            id = self.parent[id];
        }
        id
    }

    /// Merge the sets containing `a` and `b` and return the representative of
    /// the merged set. The larger set absorbs the smaller one.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return root_a;
        }
        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        root_a
    }
}

#[cfg(test)]
mod tests {
    use super::UnionFind;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        assert!(!uf.is_empty());
        for id in 0..4 {
            assert_eq!(uf.find(id), id);
        }
    }

    #[test]
    fn union_is_transitive() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(4, 5);

        assert_eq!(uf.find(0), uf.find(2));
        assert_eq!(uf.find(4), uf.find(5));
        assert_ne!(uf.find(2), uf.find(3));
        assert_ne!(uf.find(2), uf.find(5));
    }

    #[test]
    fn union_keeps_larger_set_root() {
        let mut uf = UnionFind::new(5);
        let root = uf.union(0, 1);
        assert_eq!(uf.union(2, root), uf.find(0));
    }
}
