#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused_extern_crates,
    unused,

    missing_copy_implementations,
    missing_debug_implementations,

    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]

#![deny(
    unused_variables,
    unused_assignments,
    dead_code,
    unused_must_use,
    missing_copy_implementations,
    trivial_numeric_casts,
    redundant_semicolon
)]

#![forbid(unsafe_code)]

// TODO #![warn(missing_docs)]

pub mod math;
pub mod error;
pub mod channel;
pub mod sample_table;
pub mod block;

#[macro_use]
extern crate smallvec;

/// Re-exports of the types needed to plan a layout and repack a buffer.
pub mod prelude {
    pub use crate::channel::{Channel, ChannelList};
    pub use crate::sample_table::SampleTable;
    pub use crate::block::{pack, unpack, Plan, Unpacked};
    pub use crate::error::{Error, Result, UnitResult};

    #[cfg(feature = "rayon")]
    pub use crate::block::parallel::{pack_batch, unpack_batch, Region};
}
