//! Edge key types.
//!
//! An edge is keyed by its `(v, w)` endpoint pair. Undirected keys are canonicalized so that
//! `v <= w`, which makes `{a, b}` and `{b, a}` the same entry.

#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct EdgeKeyView<'a, V> {
    pub(in crate::graph) v: &'a V,
    pub(in crate::graph) w: &'a V,
}

impl<'a, V: Ord> EdgeKeyView<'a, V> {
    pub(in crate::graph) fn new(v: &'a V, w: &'a V, directed: bool) -> Self {
        if directed || v <= w {
            Self { v, w }
        } else {
            Self { v: w, w: v }
        }
    }
}

impl<V: Eq> hashbrown::Equivalent<EdgeKey<V>> for EdgeKeyView<'_, V> {
    fn equivalent(&self, key: &EdgeKey<V>) -> bool {
        key.v == *self.v && key.w == *self.w
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(in crate::graph) struct EdgeKey<V> {
    pub(in crate::graph) v: V,
    pub(in crate::graph) w: V,
}

impl<V: Ord + Clone> EdgeKey<V> {
    pub(in crate::graph) fn new(v: &V, w: &V, directed: bool) -> Self {
        let view = EdgeKeyView::new(v, w, directed);
        Self {
            v: view.v.clone(),
            w: view.w.clone(),
        }
    }
}
