//! The traversal that actually moves bytes between the packed and planar layouts.
//!
//! Ported from the reference implementation's `to_planar_3`/`from_planar_3`, generalized to
//! skip lines and pixels excluded by a channel's sub-sampling (see [`Plan`] and
//! [`crate::math::mod_p`]) instead of assuming every channel covers the full region.

use crate::block::offsets::Plan;
use crate::channel::ChannelList;
use crate::error::{Error, Result};
use crate::math::mod_p;
use crate::sample_table::SampleTable;

/// The result of [`unpack`]: the planar buffer plus the half/single split position,
/// so callers can apply precision-specific handling to each region without re-planning.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Unpacked {
    pub bytes: Vec<u8>,
    pub split_pos: usize,
}

/// Rearrange `packed` (channels interleaved pixel-by-pixel) into planar layout: every
/// channel's samples contiguous, half-width channels first.
///
/// `packed` must be exactly `plan.total_bytes` long, where `plan = Plan::new(channels, ...)`.
/// Fails with `LengthDisagreement` if it is not, `BufferOverrun` if a channel's region would
/// be written past its end, and `ShortInput` if the traversal does not exactly consume
/// `packed` (both cannot happen for a plan built from the same `channels`/`samples`, but
/// callers may pass a `packed` buffer that was not produced by this engine).
pub fn unpack(
    packed: &[u8],
    channels: &ChannelList,
    x_res: usize,
    y_res: usize,
    samples: &SampleTable,
) -> Result<Unpacked> {
    let plan = Plan::new(channels, x_res, y_res, samples)?;

    if packed.len() != plan.total_bytes {
        return Err(Error::length_disagreement(plan.total_bytes, packed.len()));
    }

    let mut planar = vec![0_u8; plan.total_bytes];
    let mut write_cursor = plan.offsets.clone();
    let mut src = 0_usize;

    for line in 0..y_res {
        for (index, channel) in channels.list.iter().enumerate() {
            if mod_p(line, channel.ys) != 0 {
                continue;
            }

            let mut pixel = 0_usize;
            while pixel < x_res {
                let n = samples.pixel_samples(line, pixel) as usize;
                let width = n * channel.byte_width;

                if src + width > packed.len() {
                    return Err(Error::buffer_overrun(
                        channel.name.clone(), line, "read cursor exceeded input length",
                    ));
                }

                let region_end = plan.offsets[index] + plan.region_bytes[index];
                if write_cursor[index] + width > region_end {
                    return Err(Error::buffer_overrun(
                        channel.name.clone(), line, "write cursor exceeded channel region",
                    ));
                }

                let dst = write_cursor[index];
                planar[dst..dst + width].copy_from_slice(&packed[src..src + width]);

                src += width;
                write_cursor[index] += width;
                pixel += channel.xs;
            }
        }
    }

    if src != packed.len() {
        return Err(Error::short_input(src, packed.len()));
    }

    Ok(Unpacked { bytes: planar, split_pos: plan.split_pos })
}

/// The inverse of [`unpack`]: rearrange `planar` (each channel's samples contiguous) back
/// into packed layout (channels interleaved pixel-by-pixel).
///
/// Same length and overrun contract as `unpack`, applied to `planar` as the source and the
/// returned buffer as the destination.
pub fn pack(
    planar: &[u8],
    channels: &ChannelList,
    x_res: usize,
    y_res: usize,
    samples: &SampleTable,
) -> Result<Vec<u8>> {
    let plan = Plan::new(channels, x_res, y_res, samples)?;

    if planar.len() != plan.total_bytes {
        return Err(Error::length_disagreement(plan.total_bytes, planar.len()));
    }

    let mut packed = vec![0_u8; plan.total_bytes];
    let mut read_cursor = plan.offsets.clone();
    let mut dst = 0_usize;

    for line in 0..y_res {
        for (index, channel) in channels.list.iter().enumerate() {
            if mod_p(line, channel.ys) != 0 {
                continue;
            }

            let mut pixel = 0_usize;
            while pixel < x_res {
                let n = samples.pixel_samples(line, pixel) as usize;
                let width = n * channel.byte_width;

                let region_end = plan.offsets[index] + plan.region_bytes[index];
                if read_cursor[index] + width > region_end {
                    return Err(Error::buffer_overrun(
                        channel.name.clone(), line, "read cursor exceeded channel region",
                    ));
                }

                if dst + width > packed.len() {
                    return Err(Error::buffer_overrun(
                        channel.name.clone(), line, "write cursor exceeded output length",
                    ));
                }

                let src = read_cursor[index];
                packed[dst..dst + width].copy_from_slice(&planar[src..src + width]);

                dst += width;
                read_cursor[index] += width;
                pixel += channel.xs;
            }
        }
    }

    if dst != packed.len() {
        return Err(Error::short_input(dst, packed.len()));
    }

    Ok(packed)
}
