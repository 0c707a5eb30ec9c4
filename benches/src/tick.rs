use std::hint::black_box;

use ttspi_core::pins::Pins;
use ttspi_emulator::{EmulatorOption, PeripheralEmulator};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const TEST_SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn idle(c: &mut Criterion) {
    let mut group = c.benchmark_group("ttspi-emulator/tick/idle");

    TEST_SIZES.iter().for_each(|&size| {
        group.bench_with_input(BenchmarkId::new("Idle", size), &size, |b, &size| {
            let mut emu = PeripheralEmulator::new(EmulatorOption::default()).unwrap();
            b.iter(|| {
                (0..size).for_each(|_| {
                    black_box(emu.tick(black_box(Pins::IDLE)));
                });
            })
        });
    });
    group.finish();
}

fn toggling(c: &mut Criterion) {
    let mut group = c.benchmark_group("ttspi-emulator/tick/toggling");

    TEST_SIZES.iter().for_each(|&size| {
        group.bench_with_input(BenchmarkId::new("Toggling", size), &size, |b, &size| {
            let mut emu = PeripheralEmulator::new(EmulatorOption::default()).unwrap();
            b.iter(|| {
                (0..size).for_each(|i| {
                    black_box(emu.tick(black_box(Pins {
                        sclk: i % 2 == 0,
                        ncs: i % 64 == 63,
                        copi: i % 6 < 3,
                    })));
                });
            })
        });
    });
    group.finish();
}

criterion_group!(benches, idle, toggling);
criterion_main!(benches);
