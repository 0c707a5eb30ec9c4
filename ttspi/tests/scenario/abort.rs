use ttspi::prelude::*;

use crate::bench_after_reset;

#[rstest::rstest]
#[case(1)]
#[case(2)]
#[case(7)]
#[case(8)]
#[case(9)]
#[case(15)]
fn early_deassert_discards(#[case] bits: u8) -> anyhow::Result<()> {
    let mut bench = bench_after_reset()?;

    assert_eq!(
        vec![Evaluation::Abort { bits }],
        bench.send_truncated(Frame::write_to(RegisterAddress::OutLow, 0xFF), bits)?
    );
    assert_eq!(&RegisterFile::new(), bench.registers());
    assert_eq!(CaptureState::Idle, bench.capture_state());

    assert_eq!(
        vec![Evaluation::Commit {
            address: RegisterAddress::OutHigh,
            data: 0x3C
        }],
        bench.write(RegisterAddress::OutHigh, 0x3C)
    );
    assert_eq!(&[0x00, 0x3C, 0x00, 0x00, 0x00], bench.registers().values());

    Ok(())
}

#[test]
fn select_without_clock_is_silent() -> anyhow::Result<()> {
    let mut bench = bench_after_reset()?;
    assert!(
        bench
            .send_truncated(Frame::write_to(RegisterAddress::OutLow, 0xFF), 0)?
            .is_empty()
    );
    assert_eq!(&RegisterFile::new(), bench.registers());
    Ok(())
}

#[test]
fn truncation_must_be_shorter_than_frame() -> anyhow::Result<()> {
    let mut bench = bench_after_reset()?;
    assert_eq!(
        Err(TtspiError::Controller(ControllerError::InvalidTruncation(16))),
        bench.send_truncated(Frame::write_to(RegisterAddress::OutLow, 0xFF), 16)
    );
    Ok(())
}

#[test]
fn frames_under_one_select() -> anyhow::Result<()> {
    let mut bench = bench_after_reset()?;

    let evaluations = bench.send_burst(&[
        Frame::write_to(RegisterAddress::OutLow, 0x11),
        Frame::from_bits(0x86FF),
        Frame::write_to(RegisterAddress::PwmDutyCycle, 0x33),
    ]);
    assert_eq!(
        vec![
            Evaluation::Commit {
                address: RegisterAddress::OutLow,
                data: 0x11
            },
            Evaluation::Reject {
                frame: Frame::from_bits(0x86FF),
                reason: FrameError::AddressOutOfRange(6)
            },
            Evaluation::Commit {
                address: RegisterAddress::PwmDutyCycle,
                data: 0x33
            },
        ],
        evaluations
    );
    assert_eq!(&[0x11, 0x00, 0x00, 0x00, 0x33], bench.registers().values());

    Ok(())
}

#[test]
fn abort_after_full_frame_in_burst() -> anyhow::Result<()> {
    let mut bench = bench_after_reset()?;
    let frame = Frame::write_to(RegisterAddress::OutHigh, 0x81);
    let controller = *bench.controller();

    let full = controller.burst(&[frame, frame]);
    let cut = 1 + (16 + 4) * 2 * controller.half_period();
    let waveform: Waveform = full[..cut]
        .iter()
        .copied()
        .chain(std::iter::repeat_n(Pins::IDLE, 100))
        .collect();

    assert_eq!(
        vec![
            Evaluation::Commit {
                address: RegisterAddress::OutHigh,
                data: 0x81
            },
            Evaluation::Abort { bits: 4 }
        ],
        bench.run(&waveform)
    );
    assert_eq!(0x81, bench.registers().out_high());

    Ok(())
}
