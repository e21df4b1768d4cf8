// MIT License
//
// Copyright (c) 2024 Erik Holum
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Arena-backed tree of search vertices with arbitrary state types.
//! Types must implement a distance trait to enable determination of nearest
//! neighbors.
//!
//! Vertices live in insertion order in a single vector owned by the [`Tree`];
//! parent links are plain indices into that vector wrapped in [`VertexId`]
//! handles. A parent always refers to an earlier insertion and vertices are
//! never re-parented, so every parent chain terminates at the root.

/// Define a distance trait for tree vertex states.
pub trait Distance {
    fn distance(&self, other: &Self) -> f64;
}

/// Stable handle to a vertex in a [`Tree`].
///
/// Handles are only produced by the tree that owns the vertex and stay valid
/// for that tree's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexId(usize);

/// Single vertex in the arena.
#[derive(Debug)]
struct Vertex<T> {
    // The state reached at this vertex.
    state: T,

    // Location of the vertex's parent, None only for the root.
    parent: Option<VertexId>,
}

/// Growable tree for sampling-based search algorithms.
///
/// Supports appending vertices with a parent link, nearest-neighbor queries
/// by linear scan, and walking parent chains to recover paths. The tree is
/// created with its root and is therefore never empty.
#[derive(Debug)]
pub struct Tree<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T: Distance> Tree<T> {
    /// Construct a new tree with the specified state as the root vertex.
    pub fn new(root: T) -> Self {
        Tree {
            vertices: vec![Vertex {
                state: root,
                parent: None,
            }],
        }
    }

    /// Appends a new vertex with the given parent and returns its handle.
    pub fn insert(&mut self, state: T, parent: VertexId) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            state,
            parent: Some(parent),
        });
        id
    }

    /// Returns the handle of the vertex closest to the specified state.
    ///
    /// Ties are broken in favor of the earliest-inserted vertex so that a
    /// fixed sample sequence always reproduces the same tree.
    pub fn nearest(&self, state: &T) -> VertexId {
        self.vertices
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = state.distance(&a.state);
                let db = state.distance(&b.state);
                debug_assert!(da >= 0.0 && db >= 0.0, "distance must be non-negative");
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| VertexId(i))
            .unwrap()
    }

    /// Returns the state stored at the specified vertex.
    pub fn state(&self, id: VertexId) -> &T {
        &self.vertices[id.0].state
    }

    /// Returns the parent handle of the specified vertex, None for the root.
    pub fn parent(&self, id: VertexId) -> Option<VertexId> {
        self.vertices[id.0].parent
    }

    /// Returns the handle of the root vertex.
    pub fn root(&self) -> VertexId {
        VertexId(0)
    }

    // Return the size of the tree
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate over all stored states in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.vertices.iter().map(|v| &v.state)
    }

    /// Iterate over all accepted `(child, parent)` edges in insertion order.
    ///
    /// The root has no parent and contributes no edge. Callers can serialize
    /// this sequence however they choose.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> {
        self.vertices.iter().filter_map(|v| {
            v.parent
                .map(|parent| (&v.state, &self.vertices[parent.0].state))
        })
    }

    /// Returns the states from the root to the specified end vertex.
    pub fn path(&self, end: VertexId) -> Vec<T>
    where
        T: Clone,
    {
        // Build the path from end to beginning
        let mut path = Vec::new();

        // Loop until you get to the root
        let mut cur = Some(end);
        while let Some(id) = cur {
            path.push(self.vertices[id.0].state.clone());
            cur = self.vertices[id.0].parent;
        }

        // Reverse it to get the path in order
        path.reverse();
        path
    }
}

//
// Unit tests
//

// Needed for distancing points on a line
impl Distance for i32 {
    fn distance(&self, other: &Self) -> f64 {
        (self - other).abs().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_insert() {
        // Construct tree with a single vertex
        let mut tree: Tree<i32> = Tree::new(1);
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.state(tree.root()), &1);
        assert_eq!(tree.parent(tree.root()), None);

        // Add a child and make sure everything is ok
        let root = tree.root();
        let two = tree.insert(2, root);
        assert_eq!(tree.size(), 2);
        assert_eq!(tree.state(two), &2);
        assert_eq!(tree.parent(two), Some(root));

        // Make the tree bigger, duplicated states are fine
        let three = tree.insert(3, root);
        let dup = tree.insert(2, three);
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.parent(dup), Some(three));
    }

    #[test]
    fn test_tree_get_nearest() {
        // Construct tree with many vertices
        let mut tree: Tree<i32> = Tree::new(1);

        let root = tree.root();
        let two = tree.insert(2, root);
        tree.insert(3, root);
        tree.insert(4, two);
        tree.insert(5, two);
        let six = tree.insert(6, two);

        // Make assertions
        assert_eq!(tree.nearest(&7), six);
        assert_eq!(tree.nearest(&-1), root);
        assert_eq!(tree.state(tree.nearest(&3)), &3);
    }

    #[test]
    fn test_tree_nearest_tie_prefers_first_inserted() {
        let mut tree: Tree<i32> = Tree::new(0);
        let root = tree.root();
        let four = tree.insert(4, root);
        tree.insert(6, four);

        // 5 is equidistant from 4 and 6, the earlier insertion wins
        assert_eq!(tree.nearest(&5), four);
    }

    #[test]
    fn test_tree_edges_in_insertion_order() {
        let mut tree: Tree<i32> = Tree::new(1);
        let root = tree.root();
        let two = tree.insert(2, root);
        tree.insert(3, root);
        tree.insert(4, two);

        let edges: Vec<(i32, i32)> = tree.edges().map(|(c, p)| (*c, *p)).collect();
        assert_eq!(edges, vec![(2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_tree_compute_back_path() {
        // Construct tree with many vertices
        let mut tree: Tree<i32> = Tree::new(1);

        let root = tree.root();
        let two = tree.insert(2, root);
        let three = tree.insert(3, root);
        tree.insert(4, two);
        let five = tree.insert(5, two);
        let seven = tree.insert(7, three);
        let six = tree.insert(6, five);

        // Verify expected paths to different vertices
        assert_eq!(tree.path(six), vec![1, 2, 5, 6]);
        assert_eq!(tree.path(seven), vec![1, 3, 7]);

        // The root path is just the root itself
        assert_eq!(tree.path(root), vec![1]);
    }
}
