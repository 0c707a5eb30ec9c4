use rand::Rng;
use ttspi::prelude::*;

use crate::bench_after_reset;

#[rstest::rstest]
#[case(RegisterAddress::OutLow)]
#[case(RegisterAddress::OutHigh)]
#[case(RegisterAddress::PwmEnableLow)]
#[case(RegisterAddress::PwmEnableHigh)]
#[case(RegisterAddress::PwmDutyCycle)]
fn write_touches_only_target(#[case] address: RegisterAddress) -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let mut bench = bench_after_reset()?;

    let initial: [u8; 5] = rng.random();
    RegisterAddress::ALL
        .iter()
        .zip(initial)
        .for_each(|(&addr, value)| {
            bench.write(addr, value);
        });
    assert_eq!(&initial, bench.registers().values());

    let data: u8 = rng.random();
    assert_eq!(
        vec![Evaluation::Commit { address, data }],
        bench.write(address, data)
    );

    let mut expected = initial;
    expected[address.index()] = data;
    assert_eq!(&expected, bench.registers().values());

    Ok(())
}

#[test]
fn write_every_data_byte() -> anyhow::Result<()> {
    let mut bench = bench_after_reset()?;
    (0x00..=0xFF).try_for_each(|data| -> anyhow::Result<()> {
        bench.write(RegisterAddress::PwmDutyCycle, data);
        anyhow::ensure!(data == bench.registers().pwm_duty_cycle());
        anyhow::ensure!(0 == bench.registers().out_low());
        Ok(())
    })
}

#[test]
fn read_frame_is_ignored() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let mut bench = bench_after_reset()?;
    bench.write(RegisterAddress::OutLow, 0x5A);
    let before = *bench.registers();

    (0..32).try_for_each(|_| -> anyhow::Result<()> {
        let address = rng.random_range(0x00..=0x7F);
        let data = rng.random();
        let evaluations = bench.transaction(false, address, data)?;
        assert_eq!(
            vec![Evaluation::Reject {
                frame: Frame::from_fields(false, address, data)?,
                reason: FrameError::WriteFlagCleared
            }],
            evaluations
        );
        assert_eq!(&before, bench.registers());
        Ok(())
    })
}

#[test]
fn unmapped_address_is_ignored() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let mut bench = bench_after_reset()?;
    bench.write(RegisterAddress::OutHigh, 0xA5);
    let before = *bench.registers();

    (0x05..=0x7F).try_for_each(|address| -> anyhow::Result<()> {
        let data = rng.random();
        let evaluations = bench.transaction(true, address, data)?;
        assert_eq!(
            vec![Evaluation::Reject {
                frame: Frame::from_fields(true, address, data)?,
                reason: FrameError::AddressOutOfRange(address)
            }],
            evaluations
        );
        assert_eq!(&before, bench.registers());
        Ok(())
    })
}

#[test]
fn address_beyond_field_is_refused() -> anyhow::Result<()> {
    let mut bench = bench_after_reset()?;
    let ticks = bench.ticks();
    assert_eq!(
        Err(TtspiError::Controller(ControllerError::AddressOutOfRange(
            0x80
        ))),
        bench.transaction(true, 0x80, 0x00)
    );
    assert_eq!(ticks, bench.ticks());
    Ok(())
}

#[test]
fn write_then_unmapped_address() -> anyhow::Result<()> {
    let mut bench = bench_after_reset()?;

    bench.transaction(true, 0x02, 0xA5)?;
    assert_eq!(0xA5, bench.registers().pwm_enable_low());
    assert_eq!(&[0x00, 0x00, 0xA5, 0x00, 0x00], bench.registers().values());

    bench.transaction(true, 0x06, 0xFF)?;
    assert_eq!(&[0x00, 0x00, 0xA5, 0x00, 0x00], bench.registers().values());

    Ok(())
}
