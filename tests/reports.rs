use std::error::Error;

use packed_struct::PackedStruct;

use dualsense::hid_report::{PackedInputDataReport, PackedOutputDataReport};
use dualsense::{
    trigger_effect_params, Config, Direction, InputState, OutputState, TriggerEffectType,
};

#[tokio::test]
async fn test_default_config() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = Config::default();
    assert_eq!(config.vendor_id, 0x054C);
    assert_eq!(config.product_id, 0x0CE6);
    assert_eq!(config.polling_interval_ms, 50);
    assert_eq!(config.read_timeout_ms, 100);

    Ok(())
}

#[tokio::test]
async fn test_decode_input_report() -> Result<(), Box<dyn Error>> {
    let mut buf = [0u8; 64];
    buf[0] = 0x01;
    buf[1] = 0x80; // left stick X
    buf[8] = 0x42; // D-Pad east, circle pressed

    let report = PackedInputDataReport::unpack(&buf)?;
    let state = InputState::from(report);
    assert_eq!(state.left_stick_x, 0x80);
    assert_eq!(state.dpad, Direction::East);
    assert!(state.button_circle);
    assert!(!state.button_cross);

    Ok(())
}

#[tokio::test]
async fn test_encode_output_report() -> Result<(), Box<dyn Error>> {
    let state = OutputState {
        rumble_emulation_left: 0x80,
        rumble_emulation_right: 0x40,
        left_trigger_ffb: trigger_effect_params(TriggerEffectType::Feedback, 0x20, 0x80, 0xFF),
        led_red: 0x00,
        led_green: 0x00,
        led_blue: 0xFF,
        ..OutputState::default()
    };

    let buf = PackedOutputDataReport::from(&state).pack()?;
    assert_eq!(buf.len(), 48);
    assert_eq!(buf[0], 0x02);
    assert_eq!(buf[3], 0x40, "right rumble");
    assert_eq!(buf[4], 0x80, "left rumble");
    assert_eq!(buf[22], 0x21, "left trigger effect id");
    assert_eq!(&buf[45..48], &[0x00, 0x00, 0xFF]);

    Ok(())
}
