//! Disjoint-set (union-find) with path compression and union by size.
//!
//! Elements are relabeled once into a dense `0..n` range; every operation after construction works
//! on that range.

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;
use std::fmt;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Clone)]
pub struct UnionFind<T> {
    elements: Vec<T>,
    index: HashMap<T, usize>,
    ids: Vec<usize>,
    sizes: Vec<usize>,
    count: usize,
}

impl<T> UnionFind<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// Builds singleton sets for every distinct element. Repeated elements are tracked once.
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        let mut uf = Self {
            elements: Vec::new(),
            index: HashMap::default(),
            ids: Vec::new(),
            sizes: Vec::new(),
            count: 0,
        };
        for el in elements {
            uf.insert(el);
        }
        uf
    }

    /// Adds `element` as a new singleton set. Returns `false` if it was already tracked.
    pub fn insert(&mut self, element: T) -> bool {
        if self.index.contains_key(&element) {
            return false;
        }
        let ix = self.elements.len();
        self.index.insert(element.clone(), ix);
        self.elements.push(element);
        self.ids.push(ix);
        self.sizes.push(1);
        self.count += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// Running number of disjoint sets.
    pub fn number_of_components(&self) -> usize {
        self.count
    }

    /// Representative of the set containing `p`. Flattens the visited path onto the root.
    pub fn find(&mut self, p: &T) -> Result<&T> {
        let ix = self.position(p)?;
        let root = self.root(ix);
        Ok(&self.elements[root])
    }

    /// Merges the sets containing `p` and `q`. Returns `true` when two distinct sets were merged.
    pub fn unify(&mut self, p: &T, q: &T) -> Result<bool> {
        let p = self.position(p)?;
        let q = self.position(q)?;
        let root_p = self.root(p);
        let root_q = self.root(q);
        if root_p == root_q {
            return Ok(false);
        }

        if self.sizes[root_p] < self.sizes[root_q] {
            self.ids[root_p] = root_q;
            self.sizes[root_q] += self.sizes[root_p];
        } else {
            self.ids[root_q] = root_p;
            self.sizes[root_p] += self.sizes[root_q];
        }
        self.count -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, p: &T, q: &T) -> Result<bool> {
        let p = self.position(p)?;
        let q = self.position(q)?;
        Ok(self.root(p) == self.root(q))
    }

    /// Number of elements in the set containing `p`.
    pub fn component_size(&mut self, p: &T) -> Result<usize> {
        let p = self.position(p)?;
        let root = self.root(p);
        Ok(self.sizes[root])
    }

    fn position(&self, element: &T) -> Result<usize> {
        self.index
            .get(element)
            .copied()
            .ok_or_else(|| Error::UnknownElement {
                element: format!("{element:?}"),
            })
    }

    fn root(&mut self, mut p: usize) -> usize {
        let mut root = p;
        while self.ids[root] != root {
            root = self.ids[root];
        }
        while self.ids[p] != root {
            let next = self.ids[p];
            self.ids[p] = root;
            p = next;
        }
        root
    }
}

impl<T: fmt::Debug> fmt::Debug for UnionFind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionFind")
            .field("components", &self.count)
            .field("elements", &self.elements)
            .field("ids", &self.ids)
            .finish()
    }
}
