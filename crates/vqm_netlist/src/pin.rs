//! Pin definitions: the wires and buses of a module.
//!
//! A [`Pin`] is either a plain wire or an indexed bus with inclusive
//! `left`/`right` bounds. Bounds may run in either direction (`[7:0]` or
//! `[0:7]`).

use serde::{Deserialize, Serialize};

/// Bit-index sentinel meaning "the whole pin" in assignments and port
/// associations.
pub const WHOLE_PIN: i32 = -1;

/// A wire or an indexed bus within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// The pin name as written in the netlist.
    pub name: String,
    /// Whether the pin was declared with a bus range.
    #[serde(default)]
    pub indexed: bool,
    /// The left bound of the bus range.
    #[serde(default)]
    pub left: i32,
    /// The right bound of the bus range.
    #[serde(default)]
    pub right: i32,
}

impl Pin {
    /// Creates a plain, non-indexed wire.
    pub fn wire(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indexed: false,
            left: 0,
            right: 0,
        }
    }

    /// Creates an indexed bus `name[left:right]`.
    pub fn bus(name: impl Into<String>, left: i32, right: i32) -> Self {
        Self {
            name: name.into(),
            indexed: true,
            left,
            right,
        }
    }

    /// Returns `true` if the declared range covers exactly one bit.
    ///
    /// This looks only at the bounds; a non-indexed wire is always created
    /// with `left == right`.
    pub fn is_single_bit(&self) -> bool {
        self.left == self.right
    }

    /// Returns the number of bits covered by the declared range.
    pub fn width(&self) -> u32 {
        self.left.abs_diff(self.right) + 1
    }

    /// Returns the inclusive `(low, high)` range regardless of declaration direction.
    pub fn range(&self) -> (i32, i32) {
        (self.left.min(self.right), self.left.max(self.right))
    }

    /// Returns `true` if `index` lies inside the declared range.
    pub fn contains(&self, index: i32) -> bool {
        let (low, high) = self.range();
        (low..=high).contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_is_single_bit() {
        let p = Pin::wire("clk");
        assert!(!p.indexed);
        assert!(p.is_single_bit());
        assert_eq!(p.width(), 1);
    }

    #[test]
    fn descending_bus() {
        let p = Pin::bus("data", 7, 0);
        assert!(!p.is_single_bit());
        assert_eq!(p.width(), 8);
        assert_eq!(p.range(), (0, 7));
        assert!(p.contains(0));
        assert!(p.contains(7));
        assert!(!p.contains(8));
        assert!(!p.contains(-1));
    }

    #[test]
    fn ascending_bus() {
        let p = Pin::bus("addr", 2, 5);
        assert_eq!(p.width(), 4);
        assert_eq!(p.range(), (2, 5));
        assert!(!p.contains(1));
        assert!(p.contains(3));
    }

    #[test]
    fn one_bit_bus() {
        let p = Pin::bus("a", 15, 15);
        assert!(p.indexed);
        assert!(p.is_single_bit());
        assert!(p.contains(15));
    }

    #[test]
    fn deserialize_defaults_to_wire() {
        let p: Pin = serde_json::from_str(r#"{"name":"rst"}"#).unwrap();
        assert_eq!(p, Pin::wire("rst"));
    }
}
