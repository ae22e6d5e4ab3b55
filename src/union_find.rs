/// Union-Find (Disjoint Sets) over a fixed universe of elements `[0, len)`
///
/// Union by rank with path compression. The universe never grows or shrinks
/// after construction; out-of-range indices panic like slice indexing.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton sets
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let rank = vec![0; n];
        UnionFind {
            parent,
            rank,
            count: n,
        }
    }

    /// Find the root of element x, pointing every node on the path at it
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Union the sets containing x and y. Returns false if they were already one set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] = self.rank[root_x].saturating_add(1);
            }
        }
        self.count -= 1;
        true
    }

    /// Root of element x without modifying the forest
    pub fn find_root(&self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Shared-borrow variant of [`connected`](Self::connected); skips path compression
    pub fn same_set(&self, x: usize, y: usize) -> bool {
        self.find_root(x) == self.find_root(y)
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn count(&self) -> usize {
        self.count
    }
}
