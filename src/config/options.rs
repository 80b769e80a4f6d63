//! Options for the diagnostic rendering of a matrix.
//!
//! `InspectOptions` selects which parts of the dense view and its annotation
//! are rendered by [`crate::utils::inspect`], and how many decimals the
//! density percentage carries.

use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct InspectFlags: u8 {
        const INCLUDE_ZEROS = 0b001; // keep unset cells in each row
        const EFFICIENCY    = 0b010; // "efficient" / "not efficient" note
        const DENSITY       = 0b100; // density percentage note
    }
}

/// Rendering options for `inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectOptions {
    /// Which parts to render.
    pub flags: InspectFlags,

    /// Decimals of the density percentage.
    pub precision: usize,
}

impl InspectOptions {
    /// Default annotation, optionally keeping zeros in the rows.
    pub fn with_zeros(include_zeros: bool) -> Self {
        let mut opts = Self::default();
        opts.flags.set(InspectFlags::INCLUDE_ZEROS, include_zeros);
        opts
    }
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            flags: InspectFlags::EFFICIENCY | InspectFlags::DENSITY,
            precision: 2,
        }
    }
}
