//! Randomized round-trip and no-panic checks over random channel layouts and sample tables.
//! Seeded for reproducibility rather than run against a corpus of files.

use exr_planar::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_channels(rng: &mut StdRng, count: usize) -> ChannelList {
    let widths = [2_usize, 4];
    let list: smallvec::SmallVec<[Channel; 8]> = (0..count)
        .map(|i| {
            let byte_width = widths[rng.random_range(0..widths.len())];
            let xs = rng.random_range(1..=3);
            let ys = rng.random_range(1..=3);
            Channel::with_sampling(format!("c{i}"), byte_width, xs, ys)
        })
        .collect();

    ChannelList::new(list)
}

fn random_samples(rng: &mut StdRng, x_res: usize, y_res: usize, deep: bool) -> SampleTable {
    let grid = (0..y_res)
        .map(|_| {
            (0..x_res)
                .map(|_| if deep { rng.random_range(1..=4) } else { 1 })
                .collect()
        })
        .collect();

    SampleTable::new(grid, x_res, y_res).unwrap()
}

#[test]
fn random_layouts_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0xA11CE);

    for trial in 0..200 {
        let x_res = rng.random_range(1..=6);
        let y_res = rng.random_range(1..=6);
        let channel_count = rng.random_range(1..=5);
        let deep = trial % 2 == 0;

        let channels = random_channels(&mut rng, channel_count);
        let samples = random_samples(&mut rng, x_res, y_res, deep);

        let plan = match Plan::new(&channels, x_res, y_res, &samples) {
            Ok(plan) => plan,
            Err(Error::UnsupportedWidth { .. }) => continue,
            Err(other) => panic!("unexpected planning failure: {other:?}"),
        };

        let packed: Vec<u8> = (0..plan.total_bytes).map(|i| (i * 31 + trial) as u8).collect();
        let planar = unpack(&packed, &channels, x_res, y_res, &samples)
            .unwrap_or_else(|e| panic!("unpack failed on trial {trial}: {e:?}"));
        let repacked = pack(&planar.bytes, &channels, x_res, y_res, &samples)
            .unwrap_or_else(|e| panic!("pack failed on trial {trial}: {e:?}"));

        assert_eq!(repacked, packed, "roundtrip mismatch on trial {trial}");
    }
}

#[test]
fn random_wrong_lengths_never_panic() {
    let mut rng = StdRng::seed_from_u64(0xFEED);

    for _ in 0..100 {
        let x_res = rng.random_range(1..=4);
        let y_res = rng.random_range(1..=4);
        let channels = random_channels(&mut rng, rng.random_range(1..=3));
        let samples = random_samples(&mut rng, x_res, y_res, true);

        let plan = match Plan::new(&channels, x_res, y_res, &samples) {
            Ok(plan) => plan,
            Err(_) => continue,
        };

        let wrong_len = plan.total_bytes + rng.random_range(1..=8);
        let garbage: Vec<u8> = (0..wrong_len).map(|i| i as u8).collect();

        assert!(unpack(&garbage, &channels, x_res, y_res, &samples).is_err());
    }
}
