use ttspi::prelude::*;

use crate::bench_after_reset;

#[test]
fn reference_sequence() -> anyhow::Result<()> {
    let mut bench = bench_after_reset()?;

    bench.transaction(true, 0x00, 0xF0)?;
    assert_eq!(0xF0, bench.outputs().uo_out);
    bench.idle(1000);

    bench.transaction(true, 0x01, 0xCC)?;
    assert_eq!(0xCC, bench.outputs().uio_out);
    bench.idle(100);

    bench.transaction(true, 0x30, 0xAA)?;
    bench.idle(100);

    bench.transaction(false, 0x30, 0xBE)?;
    assert_eq!(0xF0, bench.outputs().uo_out);
    bench.idle(100);

    bench.transaction(false, 0x41, 0xEF)?;
    bench.idle(100);
    assert_eq!(&[0xF0, 0xCC, 0x00, 0x00, 0x00], bench.registers().values());

    bench.transaction(true, 0x02, 0xFF)?;
    bench.idle(100);
    assert_eq!(0x00, bench.outputs().uo_out);
    assert_eq!(0xCC, bench.outputs().uio_out);

    bench.transaction(true, 0x04, 0xCF)?;
    bench.start_recording()?;
    bench.idle(30000);
    let record = bench.finish_recording()?;
    (4..8).for_each(|line| {
        assert!(
            record
                .duty_cycle(line)
                .is_some_and(|d| (0.80..=0.82).contains(&d))
        );
    });
    (0..4).for_each(|line| assert_eq!(Some(0.0), record.duty_cycle(line)));
    (8..16).for_each(|line| {
        assert_eq!(
            Some(if (0xCC >> (line - 8)) & 1 == 1 { 1.0 } else { 0.0 }),
            record.duty_cycle(line)
        )
    });

    bench.transaction(true, 0x04, 0xFF)?;
    bench.idle(30000);
    assert_eq!(0xF0, bench.outputs().uo_out);

    bench.transaction(true, 0x04, 0x00)?;
    bench.idle(30000);
    assert_eq!(0x00, bench.outputs().uo_out);

    bench.transaction(true, 0x04, 0x01)?;
    bench.idle(30000);

    assert_eq!(&[0xF0, 0xCC, 0xFF, 0x00, 0x01], bench.registers().values());

    Ok(())
}
