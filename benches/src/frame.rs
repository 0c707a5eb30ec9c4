use std::hint::black_box;

use ttspi::prelude::*;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const TEST_SIZES: &[u32] = &[100, 1_000, 5_000];

fn write(c: &mut Criterion) {
    let mut group = c.benchmark_group("ttspi/bench/write");

    TEST_SIZES.iter().for_each(|&size| {
        group.bench_with_input(
            BenchmarkId::new("Write", size),
            &(10 * MHz / (2 * size)),
            |b, &sclk_freq| {
                let mut bench = Bench::new(
                    EmulatorOption::default(),
                    ControllerOption {
                        sclk_freq,
                        ..Default::default()
                    },
                )
                .unwrap();
                b.iter(|| {
                    black_box(bench.write(
                        black_box(RegisterAddress::PwmDutyCycle),
                        black_box(0x80),
                    ));
                })
            },
        );
    });
    group.finish();
}

fn waveform(c: &mut Criterion) {
    let mut group = c.benchmark_group("ttspi/controller/waveform");

    TEST_SIZES.iter().for_each(|&size| {
        group.bench_with_input(
            BenchmarkId::new("Frame", size),
            &(10 * MHz / (2 * size)),
            |b, &sclk_freq| {
                let controller = SpiController::new(
                    10 * MHz,
                    ControllerOption {
                        sclk_freq,
                        ..Default::default()
                    },
                )
                .unwrap();
                b.iter(|| {
                    black_box(controller.frame(black_box(Frame::write_to(
                        RegisterAddress::OutLow,
                        0xF0,
                    ))));
                })
            },
        );
    });
    group.finish();
}

criterion_group!(benches, write, waveform);
criterion_main!(benches);
