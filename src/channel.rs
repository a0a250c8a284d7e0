//! Channel declarations: name, sample byte width and sub-sampling.

use crate::error::{Error, UnitResult};
use smallvec::SmallVec;

/// Either 2 (half-precision) or 4 (single-precision) bytes per sample.
pub const HALF_WIDTH: usize = 2;
pub const SINGLE_WIDTH: usize = 4;

/// An immutable channel declaration.
///
/// `xs`/`ys` are strides: the channel carries a sample only at pixel indices where
/// `pixel_index % xs == 0` and line indices where `line_index % ys == 0`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Channel {
    /// Opaque to the engine; carried through unchanged.
    pub name: String,

    /// Number of bytes per sample: 2 for half-precision, 4 for single-precision.
    pub byte_width: usize,

    /// Horizontal sub-sampling stride.
    pub xs: usize,

    /// Vertical sub-sampling stride.
    pub ys: usize,
}

impl Channel {
    /// Create a new channel with a sampling rate of (1, 1).
    pub fn new(name: impl Into<String>, byte_width: usize) -> Self {
        Self { name: name.into(), byte_width, xs: 1, ys: 1 }
    }

    /// Create a new channel with the given sub-sampling rate.
    pub fn with_sampling(name: impl Into<String>, byte_width: usize, xs: usize, ys: usize) -> Self {
        Self { name: name.into(), byte_width, xs, ys }
    }

    /// Whether this is a half-precision (2-byte) channel.
    #[inline]
    pub fn is_half(&self) -> bool {
        self.byte_width == HALF_WIDTH
    }

    /// Validate this instance. Fails with `UnsupportedWidth` or `ShapeMismatch`.
    pub fn validate(&self) -> UnitResult {
        if self.byte_width != HALF_WIDTH && self.byte_width != SINGLE_WIDTH {
            return Err(Error::unsupported_width(self.name.clone(), self.byte_width));
        }

        if self.xs == 0 || self.ys == 0 {
            return Err(Error::shape_mismatch(format!(
                "channel '{}' has a zero sub-sampling stride", self.name
            )));
        }

        Ok(())
    }
}

/// An ordered list of channels. The order is the canonical iteration order used by both
/// the packer and the unpacker, and is preserved within each width class by the planner.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChannelList {
    pub list: SmallVec<[Channel; 8]>,
}

impl ChannelList {
    pub fn new(list: impl Into<SmallVec<[Channel; 8]>>) -> Self {
        Self { list: list.into() }
    }

    /// Validate every channel in this list.
    pub fn validate(&self) -> UnitResult {
        for channel in self.list.iter() {
            channel.validate()?;
        }

        Ok(())
    }

    /// Iterate the channels whose `byte_width` is `HALF_WIDTH`, in list order.
    pub fn half_channels(&self) -> impl Iterator<Item = (usize, &Channel)> {
        self.list.iter().enumerate().filter(|(_, c)| c.byte_width == HALF_WIDTH)
    }

    /// Iterate the channels whose `byte_width` is `SINGLE_WIDTH`, in list order.
    pub fn single_channels(&self) -> impl Iterator<Item = (usize, &Channel)> {
        self.list.iter().enumerate().filter(|(_, c)| c.byte_width == SINGLE_WIDTH)
    }
}

impl<const N: usize> From<[Channel; N]> for ChannelList {
    fn from(channels: [Channel; N]) -> Self {
        Self::new(SmallVec::from_iter(channels))
    }
}
