//! The planar/packed repacking engine: offset planning and the traversal that applies it.

pub mod offsets;
pub mod repack;

#[cfg(feature = "rayon")]
pub mod parallel;

pub use offsets::Plan;
pub use repack::{pack, unpack, Unpacked};
