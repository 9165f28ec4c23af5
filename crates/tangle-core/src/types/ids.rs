//! Generational handles for nodes, edges and graphs.
//!
//! Every handle is a slot index into one of the store's arenas paired with
//! the generation the slot had when the object was inserted. A handle only
//! resolves while the slot still carries that generation, so a handle kept
//! past a removal can never alias whatever object reuses the slot later.
//!
//! Memory Layout:
//! - `index: u32` - slot position in the owning arena
//! - `generation: u32` - slot generation at insertion time
//!
//! Handle equality is object identity: two edges with identical attributes
//! are still different edges unless their handles are equal.

use std::fmt;
use serde::{Deserialize, Serialize};

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name {
            index: u32,
            generation: u32,
        }

        impl $name {
            /// Build a handle from its raw parts
            pub const fn from_parts(index: u32, generation: u32) -> Self {
                Self { index, generation }
            }

            /// Slot position inside the owning arena
            #[inline]
            pub const fn index(&self) -> u32 {
                self.index
            }

            /// Slot generation this handle was issued for
            #[inline]
            pub const fn generation(&self) -> u32 {
                self.generation
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}v{}"), self.index, self.generation)
            }
        }
    };
}

define_handle!(
    /// Handle of a node (graph vertex)
    NodeId, "n"
);

define_handle!(
    /// Handle of an edge between two nodes
    EdgeId, "e"
);

define_handle!(
    /// Handle of a graph container
    GraphId, "g"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_index_and_generation() {
        assert_eq!(NodeId::from_parts(3, 1).to_string(), "n3v1");
        assert_eq!(EdgeId::from_parts(7, 2).to_string(), "e7v2");
        assert_eq!(GraphId::from_parts(0, 1).to_string(), "g0v1");
    }

    #[test]
    fn generation_is_part_of_identity() {
        let a = NodeId::from_parts(4, 1);
        let b = NodeId::from_parts(4, 2);
        assert_ne!(a, b);
        assert_eq!(a.index(), b.index());
    }
}
