use std::fmt;

/// A stored edge. `weight` is `None` for edges added without one; such edges weigh `0.0`
/// wherever a number is needed.
#[derive(Debug, Clone)]
pub struct Edge<V> {
    source: V,
    destination: V,
    weight: Option<f64>,
    directed: bool,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V, weight: Option<f64>, directed: bool) -> Self {
        Self {
            source,
            destination,
            weight,
            directed,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    pub fn explicit_weight(&self) -> Option<f64> {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: Option<f64>) {
        self.weight = weight;
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn endpoints(&self) -> (&V, &V) {
        (&self.source, &self.destination)
    }
}

impl<V: PartialEq> Edge<V> {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    /// The endpoint opposite to `v`, or `None` if `v` is not on this edge.
    pub fn other(&self, v: &V) -> Option<&V> {
        if &self.source == v {
            Some(&self.destination)
        } else if &self.destination == v {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl<V: PartialEq + Clone> Edge<V> {
    /// Returns a copy of this edge whose source is `v`. Directed edges are never flipped.
    pub fn oriented_from(&self, v: &V) -> Self {
        if self.directed || &self.source == v {
            return self.clone();
        }
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            weight: self.weight,
            directed: false,
        }
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed {
            return false;
        }
        let same = self.source == other.source && self.destination == other.destination;
        if self.directed {
            same
        } else {
            same || (self.source == other.destination && self.destination == other.source)
        }
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = if self.directed { ("(", ")") } else { ("{", "}") };
        write!(f, "{open}{}, {}", self.source, self.destination)?;
        if let Some(weight) = self.weight {
            write!(f, ", {weight}")?;
        }
        f.write_str(close)
    }
}
