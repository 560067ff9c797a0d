//! Vertex key contract.
//!
//! `Eq + Hash` already guarantees at compile time that a type *can* key a
//! map.  [`VertexKey::is_stable_key`] covers the values that type-check but
//! must still be refused at runtime, such as an id holding its `INVALID`
//! sentinel: two unrelated "missing" vertices would otherwise collapse into
//! one.

use std::fmt::Debug;
use std::hash::Hash;

use sr_core::{Coord, NodeId, StreetCode};

use crate::{GraphError, GraphResult};

/// A value usable as a graph vertex.
pub trait VertexKey: Clone + Eq + Hash + Debug {
    /// `false` if this particular value must not be stored as a vertex.
    fn is_stable_key(&self) -> bool {
        true
    }
}

/// Fail with [`GraphError::InvalidKey`] unless `v` is a stable key.
#[inline]
pub(crate) fn check_key<V: VertexKey>(v: &V) -> GraphResult<()> {
    if v.is_stable_key() {
        Ok(())
    } else {
        Err(GraphError::InvalidKey(format!("{v:?}")))
    }
}

macro_rules! always_stable {
    ($($t:ty),* $(,)?) => {
        $(impl VertexKey for $t {})*
    };
}

always_stable!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char, bool, String, Coord);

impl VertexKey for &str {}

impl VertexKey for NodeId {
    fn is_stable_key(&self) -> bool {
        self.is_valid()
    }
}

impl VertexKey for StreetCode {
    fn is_stable_key(&self) -> bool {
        self.is_valid()
    }
}

impl<A: VertexKey, B: VertexKey> VertexKey for (A, B) {
    fn is_stable_key(&self) -> bool {
        self.0.is_stable_key() && self.1.is_stable_key()
    }
}
