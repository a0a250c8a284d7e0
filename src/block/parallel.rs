//! Optional multi-region batch helper, gated behind the `rayon` feature.
//!
//! The engine itself is pure and stateless; this module only fans independent calls to
//! [`crate::block::unpack`]/[`crate::block::pack`] out across a bounded thread pool. Grounded
//! in the sibling fork's `ParallelBlockDecompressor`: a `rayon_core::ThreadPool` runs one job
//! per region and results are collected back into call order through an `mpsc::channel`,
//! rather than relying on `rayon`'s `ParallelIterator` (which this crate does not depend on).

use crate::block::repack::{pack, unpack};
use crate::channel::ChannelList;
use crate::error::Result;
use crate::sample_table::SampleTable;
use rayon_core::ThreadPool;
use std::sync::mpsc;

/// One independently packable/unpackable region. Regions share no state with one another,
/// so a batch of them can be processed on any number of worker threads in any order.
pub struct Region<'a> {
    pub channels: &'a ChannelList,
    pub x_res: usize,
    pub y_res: usize,
    pub samples: &'a SampleTable,
}

fn build_pool() -> ThreadPool {
    rayon_core::ThreadPoolBuilder::new()
        .thread_name(|index| format!("repack-worker-{index}"))
        .panic_handler(|panic| eprintln!("repack worker thread panicked: {:?}", panic))
        .build()
        .expect("failed to start repack worker thread pool")
}

/// Run [`unpack`] over every region in `batch`, each against its matching buffer in `packed`,
/// across a pool of worker threads. Results are returned in the same order as `batch`.
///
/// Panics if `packed.len() != batch.len()`; this is a caller bug, not a data error.
pub fn unpack_batch(batch: &[Region], packed: Vec<Vec<u8>>) -> Vec<Result<Vec<u8>>> {
    assert_eq!(batch.len(), packed.len(), "one packed buffer is required per region");

    let pool = build_pool();
    let (tx, rx) = mpsc::channel();

    pool.scope(|scope| {
        for (index, (region, bytes)) in batch.iter().zip(packed.into_iter()).enumerate() {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let result = unpack(&bytes, region.channels, region.x_res, region.y_res, region.samples)
                    .map(|unpacked| unpacked.bytes);
                tx.send((index, result)).expect("result receiver dropped before all regions finished");
            });
        }
    });

    drop(tx);
    collect_in_order(batch.len(), rx)
}

/// Run [`pack`] over every region in `batch`, each against its matching buffer in `planar`,
/// across a pool of worker threads. Results are returned in the same order as `batch`.
///
/// Panics if `planar.len() != batch.len()`; this is a caller bug, not a data error.
pub fn pack_batch(batch: &[Region], planar: Vec<Vec<u8>>) -> Vec<Result<Vec<u8>>> {
    assert_eq!(batch.len(), planar.len(), "one planar buffer is required per region");

    let pool = build_pool();
    let (tx, rx) = mpsc::channel();

    pool.scope(|scope| {
        for (index, (region, bytes)) in batch.iter().zip(planar.into_iter()).enumerate() {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let result = pack(&bytes, region.channels, region.x_res, region.y_res, region.samples);
                tx.send((index, result)).expect("result receiver dropped before all regions finished");
            });
        }
    });

    drop(tx);
    collect_in_order(batch.len(), rx)
}

fn collect_in_order(count: usize, rx: mpsc::Receiver<(usize, Result<Vec<u8>>)>) -> Vec<Result<Vec<u8>>> {
    let mut slots: Vec<Option<Result<Vec<u8>>>> = (0..count).map(|_| None).collect();

    for (index, result) in rx {
        slots[index] = Some(result);
    }

    slots.into_iter()
        .map(|slot| slot.expect("every spawned region reports exactly once"))
        .collect()
}
