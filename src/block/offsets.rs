//! Computes per-channel base offsets in the planar layout and the half/single split position.
//!
//! Ported from the reference implementation's `channel_offsets`, generalized to respect
//! per-channel sub-sampling (the reference only handles uniformly-sampled channel sets; see
//! the redesign note on [`Plan::new`]).

use crate::channel::{Channel, ChannelList, HALF_WIDTH, SINGLE_WIDTH};
use crate::error::{Error, Result};
use crate::math::mod_p;
use crate::sample_table::SampleTable;
use smallvec::SmallVec;

/// The output of the offset planner: where each channel's region starts in the planar
/// buffer, where the half/single split falls, and the total buffer size.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Plan {
    /// `offsets[i]` is the planar base offset of `channels.list[i]`.
    pub offsets: SmallVec<[usize; 8]>,

    /// `region_bytes[i]` is the size in bytes of `channels.list[i]`'s region, i.e.
    /// `channels.list[i].byte_width * channel_sample_count(channels.list[i], ...)`.
    /// `offsets[i] + region_bytes[i]` is therefore the exclusive end of that channel's region.
    pub region_bytes: SmallVec<[usize; 8]>,

    /// Byte offset where the single-width region begins (and the half-width region ends).
    pub split_pos: usize,

    /// Total size of the planar (and packed) buffer, in bytes.
    pub total_bytes: usize,
}

/// Count of samples actually stored for `channel`, after sub-sampling and deep expansion:
/// `sum over lines l with l % ys == 0 of (sum over pixels p with p % xs == 0 of S[l][p])`.
pub fn channel_sample_count(channel: &Channel, samples: &SampleTable, x_res: usize, y_res: usize) -> u64 {
    let mut total = 0_u64;

    for line in 0..y_res {
        if mod_p(line, channel.ys) != 0 {
            continue;
        }

        if channel.xs == 1 {
            total += samples.line_samples(line);
            continue;
        }

        let mut pixel = 0;
        while pixel < x_res {
            total += samples.pixel_samples(line, pixel) as u64;
            pixel += channel.xs;
        }
    }

    total
}

impl Plan {
    /// Compute the planar layout for `channels` over a `x_res x y_res` region with the
    /// given deep sample counts.
    ///
    /// Channels are grouped half-first, then single-first; within each group, channel
    /// order is exactly the input order. A channel whose sub-sampling excludes every line
    /// or pixel contributes a zero-width region whose offset equals the next channel's
    /// offset; this is permitted, not an error.
    pub fn new(channels: &ChannelList, x_res: usize, y_res: usize, samples: &SampleTable) -> Result<Self> {
        channels.validate()?;

        if samples.x_res() != x_res || samples.y_res() != y_res {
            return Err(Error::shape_mismatch(format!(
                "sample table is {}x{}, expected {}x{}",
                samples.x_res(), samples.y_res(), x_res, y_res
            )));
        }

        let mut offsets = smallvec::smallvec![0_usize; channels.list.len()];
        let mut region_bytes = smallvec::smallvec![0_usize; channels.list.len()];
        let mut cursor = 0_usize;

        for (index, channel) in channels.half_channels() {
            offsets[index] = cursor;
            let n = channel_sample_count(channel, samples, x_res, y_res);
            let bytes = channel.byte_width * n as usize;
            region_bytes[index] = bytes;
            cursor += bytes;
        }

        let split_pos = cursor;

        for (index, channel) in channels.single_channels() {
            offsets[index] = cursor;
            let n = channel_sample_count(channel, samples, x_res, y_res);
            let bytes = channel.byte_width * n as usize;
            region_bytes[index] = bytes;
            cursor += bytes;
        }

        debug_assert!(
            channels.list.iter().all(|c| c.byte_width == HALF_WIDTH || c.byte_width == SINGLE_WIDTH),
            "validate() above must reject any other width"
        );

        Ok(Self { offsets, region_bytes, split_pos, total_bytes: cursor })
    }
}
