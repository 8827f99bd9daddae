//! Canonical model of an API description.
//!
//! Built once by [`crate::loader`] and read, never mutated, by every emitter.

mod definition;

pub use definition::*;

/// A closed set of string-tagged values.
pub trait Vocabulary: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    /// Human-readable list of accepted values, for diagnostics.
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
