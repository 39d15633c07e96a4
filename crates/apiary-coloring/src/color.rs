//! Color identifiers.
//!
//! An uncolored vertex is `None` in an `Option<Color>`; there is no
//! in-band sentinel.

/// A color id. Colors are drawn from `0..num_vertices`, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub usize);

impl Color {
    /// Get the raw color value.
    #[inline]
    pub const fn value(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}
