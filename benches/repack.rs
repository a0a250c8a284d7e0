#[macro_use]
extern crate bencher;

use bencher::Bencher;
use exr_planar::prelude::*;

fn setup(x_res: usize, y_res: usize, deep: bool) -> (ChannelList, SampleTable, Vec<u8>) {
    let channels = ChannelList::from([
        Channel::new("r", 2),
        Channel::new("g", 2),
        Channel::new("b", 4),
        Channel::new("a", 2),
    ]);

    let grid = (0..y_res)
        .map(|line| (0..x_res).map(|pixel| if deep { 1 + (pixel + line) as u32 % 3 } else { 1 }).collect())
        .collect();

    let samples = SampleTable::new(grid, x_res, y_res).unwrap();
    let plan = Plan::new(&channels, x_res, y_res, &samples).unwrap();
    let packed: Vec<u8> = (0..plan.total_bytes).map(|i| (i % 256) as u8).collect();

    (channels, samples, packed)
}

fn unpack_flat_1080p_tile(bench: &mut Bencher) {
    let (channels, samples, packed) = setup(256, 256, false);
    bench.iter(|| {
        let planar = unpack(&packed, &channels, 256, 256, &samples).unwrap();
        bencher::black_box(planar);
    });
}

fn pack_flat_1080p_tile(bench: &mut Bencher) {
    let (channels, samples, packed) = setup(256, 256, false);
    let planar = unpack(&packed, &channels, 256, 256, &samples).unwrap();
    bench.iter(|| {
        let repacked = pack(&planar.bytes, &channels, 256, 256, &samples).unwrap();
        bencher::black_box(repacked);
    });
}

fn unpack_deep_tile(bench: &mut Bencher) {
    let (channels, samples, packed) = setup(256, 256, true);
    bench.iter(|| {
        let planar = unpack(&packed, &channels, 256, 256, &samples).unwrap();
        bencher::black_box(planar);
    });
}

fn plan_only_flat_tile(bench: &mut Bencher) {
    let (channels, samples, _) = setup(256, 256, false);
    bench.iter(|| {
        let plan = Plan::new(&channels, 256, 256, &samples).unwrap();
        bencher::black_box(plan);
    });
}

benchmark_group!(
    repack,
    unpack_flat_1080p_tile,
    pack_flat_1080p_tile,
    unpack_deep_tile,
    plan_only_flat_tile,
);

benchmark_main!(repack);
