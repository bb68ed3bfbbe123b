use std::error::Error;

use packed_struct::{PackedStruct, PackedStructSlice};

use crate::driver::{INPUT_REPORT_USB, INPUT_REPORT_USB_SIZE, OUTPUT_REPORT_USB_SIZE};
use crate::hid_report::{
    trigger_effect_params, Direction, LightBrightness, LightFadeAnimation, MicSelect,
    MuteLightMode, PackedInputDataReport, PackedOutputDataReport, PowerState, TouchFingerData,
    TriggerEffectType,
};
use crate::state::{InputState, OutputState};

/// A zeroed input report with only the report ID set.
fn empty_report() -> [u8; INPUT_REPORT_USB_SIZE] {
    let mut buf = [0u8; INPUT_REPORT_USB_SIZE];
    buf[0] = INPUT_REPORT_USB;
    buf
}

#[tokio::test]
async fn test_unpack_zeroed_report() -> Result<(), Box<dyn Error>> {
    let report = PackedInputDataReport::unpack(&empty_report())?;
    let state = InputState::from(report);

    assert_eq!(state.left_stick_x, 0);
    assert_eq!(state.left_stick_y, 0);
    assert_eq!(state.right_stick_x, 0);
    assert_eq!(state.right_stick_y, 0);
    assert_eq!(state.trigger_left, 0);
    assert_eq!(state.trigger_right, 0);
    assert_eq!(state.dpad, Direction::North);
    assert!(!state.button_square);
    assert!(!state.button_cross);
    assert!(!state.button_circle);
    assert!(!state.button_triangle);
    assert!(!state.button_l1);
    assert!(!state.button_home);
    assert_eq!(state.power_state, PowerState::Discharging);
    assert_eq!(state.power_percent, 0);
    assert_eq!(state.touch_finger_1.index, 0);
    assert!(!state.touch_finger_1.not_touching);
    assert_eq!(state.touch_finger_1.x, 0);
    assert_eq!(state.touch_finger_1.y, 0);
    assert_eq!(state.touch_finger_2, state.touch_finger_1);
    assert_eq!(state.aes_cmac, 0);

    Ok(())
}

#[tokio::test]
async fn test_unpack_dpad_none() -> Result<(), Box<dyn Error>> {
    let mut buf = empty_report();
    buf[8] = 0x08;
    let state = InputState::from(PackedInputDataReport::unpack(&buf)?);

    assert_eq!(state.dpad, Direction::None);
    assert!(!state.button_square);
    assert!(!state.button_cross);
    assert!(!state.button_circle);
    assert!(!state.button_triangle);

    Ok(())
}

#[tokio::test]
async fn test_unpack_cross_pressed() -> Result<(), Box<dyn Error>> {
    let mut buf = empty_report();
    buf[8] = 0x28;
    let state = InputState::from(PackedInputDataReport::unpack(&buf)?);

    assert_eq!(state.dpad, Direction::None);
    assert!(state.button_cross);
    assert!(!state.button_square);
    assert!(!state.button_circle);
    assert!(!state.button_triangle);

    Ok(())
}

/// Flipping one bit of a button byte must change exactly one decoded field.
#[tokio::test]
async fn test_button_bit_isolation() -> Result<(), Box<dyn Error>> {
    let baseline = InputState::from(PackedInputDataReport::unpack(&empty_report())?);

    let action_bits = [
        (8usize, 0x10u8, "square"),
        (8, 0x20, "cross"),
        (8, 0x40, "circle"),
        (8, 0x80, "triangle"),
        (9, 0x01, "l1"),
        (9, 0x02, "r1"),
        (9, 0x04, "l2"),
        (9, 0x08, "r2"),
        (9, 0x10, "create"),
        (9, 0x20, "options"),
        (9, 0x40, "l3"),
        (9, 0x80, "r3"),
        (10, 0x01, "home"),
        (10, 0x02, "pad"),
        (10, 0x04, "mute"),
        (10, 0x10, "left function"),
        (10, 0x20, "right function"),
        (10, 0x40, "left paddle"),
        (10, 0x80, "right paddle"),
    ];

    for (byte, mask, name) in action_bits {
        let mut buf = empty_report();
        buf[byte] = mask;
        let state = InputState::from(PackedInputDataReport::unpack(&buf)?);
        assert_eq!(state.dpad, baseline.dpad, "dpad changed by {name} bit");

        let buttons = |s: &InputState| {
            [
                s.button_square,
                s.button_cross,
                s.button_circle,
                s.button_triangle,
                s.button_l1,
                s.button_r1,
                s.button_l2,
                s.button_r2,
                s.button_create,
                s.button_options,
                s.button_l3,
                s.button_r3,
                s.button_home,
                s.button_pad,
                s.button_mute,
                s.button_left_function,
                s.button_right_function,
                s.button_left_paddle,
                s.button_right_paddle,
            ]
        };
        let pressed = buttons(&state).iter().filter(|b| **b).count();
        assert_eq!(pressed, 1, "{name} bit should press exactly one button");
    }

    Ok(())
}

/// Angular velocity arrives in X, Z, Y wire order.
#[tokio::test]
async fn test_gyro_wire_order() -> Result<(), Box<dyn Error>> {
    let mut buf = empty_report();
    buf[16] = 0x01; // X
    buf[18] = 0x02; // Z
    buf[20] = 0x03; // Y
    buf[22] = 0x04; // accel X
    buf[24] = 0x05; // accel Y
    buf[26] = 0x06; // accel Z
    let state = InputState::from(PackedInputDataReport::unpack(&buf)?);

    assert_eq!(state.angular_velocity_x, 1);
    assert_eq!(state.angular_velocity_z, 2);
    assert_eq!(state.angular_velocity_y, 3);
    assert_eq!(state.accelerometer_x, 4);
    assert_eq!(state.accelerometer_y, 5);
    assert_eq!(state.accelerometer_z, 6);

    Ok(())
}

#[tokio::test]
async fn test_unpack_nibble_fields() -> Result<(), Box<dyn Error>> {
    let mut buf = empty_report();
    buf[42] = 0xAB; // right trigger: status 0xA, stop location 0xB
    buf[43] = 0x21; // left trigger: status 0x2, stop location 0x1
    buf[48] = 0xCD; // effects: left 0xC, right 0xD
    buf[53] = 0x1A; // power: charging, 100%
    let state = InputState::from(PackedInputDataReport::unpack(&buf)?);

    assert_eq!(state.trigger_right_status, 0xA);
    assert_eq!(state.trigger_right_stop_location, 0xB);
    assert_eq!(state.trigger_left_status, 0x2);
    assert_eq!(state.trigger_left_stop_location, 0x1);
    assert_eq!(state.trigger_left_effect, 0xC);
    assert_eq!(state.trigger_right_effect, 0xD);
    assert_eq!(state.power_state, PowerState::Charging);
    assert_eq!(state.power_percent, 10);

    Ok(())
}

#[tokio::test]
async fn test_unpack_plug_info() -> Result<(), Box<dyn Error>> {
    let mut buf = empty_report();
    buf[54] = 0b0001_1001; // headphones, usb data, usb power
    buf[55] = 0b0000_0010; // haptic low-pass filter
    let state = InputState::from(PackedInputDataReport::unpack(&buf)?);

    assert!(state.plugged_headphones);
    assert!(!state.plugged_mic);
    assert!(!state.mic_muted);
    assert!(state.plugged_usb_data);
    assert!(state.plugged_usb_power);
    assert!(!state.plugged_external_mic);
    assert!(state.haptic_low_pass_filter);

    Ok(())
}

#[tokio::test]
async fn test_touch_finger_pack() -> Result<(), Box<dyn Error>> {
    let mut finger = TouchFingerData::default();
    finger.set_x(1919);
    finger.set_y(1068);
    assert_eq!(finger.get_x(), 1919);
    assert_eq!(finger.get_y(), 1068);

    assert_eq!(finger.pack_to_vec()?, vec![0x80, 0x7F, 0xC7, 0x42]);

    Ok(())
}

#[tokio::test]
async fn test_touch_finger_unpack() -> Result<(), Box<dyn Error>> {
    let mut buf = empty_report();
    // First finger touching at (1919, 1068), slot 3
    buf[33] = 0x03;
    buf[34] = 0x7F;
    buf[35] = 0xC7;
    buf[36] = 0x42;
    buf[41] = 99; // touchpad timestamp
    let state = InputState::from(PackedInputDataReport::unpack(&buf)?);

    assert_eq!(state.touch_finger_1.index, 3);
    assert!(!state.touch_finger_1.not_touching);
    assert_eq!(state.touch_finger_1.x, 1919);
    assert_eq!(state.touch_finger_1.y, 1068);
    assert_eq!(state.touch_finger_2.x, 0);
    assert_eq!(state.touch_timestamp, 99);

    Ok(())
}

#[tokio::test]
async fn test_unpack_rejects_wrong_length() -> Result<(), Box<dyn Error>> {
    assert!(PackedInputDataReport::unpack_from_slice(&[0u8; 63]).is_err());
    assert!(PackedInputDataReport::unpack_from_slice(&[0u8; 65]).is_err());
    assert!(PackedInputDataReport::unpack_from_slice(&empty_report()).is_ok());

    Ok(())
}

/// D-Pad nibble values above 8 are undefined and must fail to decode.
#[tokio::test]
async fn test_unpack_rejects_undefined_dpad() -> Result<(), Box<dyn Error>> {
    let mut buf = empty_report();
    buf[8] = 0x09;
    assert!(PackedInputDataReport::unpack(&buf).is_err());

    Ok(())
}

/// Reserved power-state nibbles decode losslessly instead of failing.
#[tokio::test]
async fn test_unpack_preserves_reserved_power_state() -> Result<(), Box<dyn Error>> {
    let mut buf = empty_report();
    buf[53] = 0x70;
    let report = PackedInputDataReport::unpack(&buf)?;
    assert_eq!(report.power_state, PowerState::Reserved7);
    assert_eq!(report.pack()?[53], 0x70);

    Ok(())
}

#[tokio::test]
async fn test_default_output_report_bytes() -> Result<(), Box<dyn Error>> {
    let report = PackedOutputDataReport::from(&OutputState::default());
    let buf = report.pack()?;

    assert_eq!(buf.len(), OUTPUT_REPORT_USB_SIZE);
    assert_eq!(buf[0], 0x02, "report id");
    assert_eq!(buf[1], 0xFF, "all eight gates in the first flag byte");
    assert_eq!(buf[2], 0xF7, "all gates except reset_lights (bit 3)");
    assert_eq!(&buf[3..8], &[0, 0, 0, 0, 0], "rumble and volumes");
    assert_eq!(buf[8], 0x00, "audio control");
    assert_eq!(buf[9], 0x00, "mute light off");
    assert_eq!(buf[10], 0x00, "mute control");
    assert_eq!(buf[11], TriggerEffectType::Off as u8);
    assert_eq!(&buf[12..22], &[0u8; 10]);
    assert_eq!(buf[22], TriggerEffectType::Off as u8);
    assert_eq!(&buf[23..33], &[0u8; 10]);
    assert_eq!(&buf[33..37], &[0, 0, 0, 0], "host timestamp");
    assert_eq!(buf[37], 0x00, "motor power level");
    assert_eq!(buf[38], 0x00, "audio control 2");
    assert_eq!(buf[39], 0x00, "brightness/fade/improved-rumble flags");
    assert_eq!(buf[40], 0x01, "haptic low-pass filter");
    assert_eq!(buf[41], 0x00, "reserved");
    assert_eq!(buf[42], LightFadeAnimation::FadeOut as u8);
    assert_eq!(buf[43], LightBrightness::Bright as u8);
    assert_eq!(buf[44], 0x00, "player indicators");
    assert_eq!(&buf[45..48], &[0xFF, 0xFF, 0xFF], "lightbar white");

    Ok(())
}

#[tokio::test]
async fn test_output_flag_bit_positions() -> Result<(), Box<dyn Error>> {
    let mut state = OutputState::default();
    state.reset_lights = true;
    let buf = PackedOutputDataReport::from(&state).pack()?;
    assert_eq!(buf[2], 0xFF);

    let mut state = OutputState::default();
    state.enable_rumble_emulation = false;
    let buf = PackedOutputDataReport::from(&state).pack()?;
    assert_eq!(buf[1], 0xFE, "first-listed flag occupies the LSB");

    let mut state = OutputState::default();
    state.mic_select = MicSelect::ExternalOnly;
    state.echo_cancel_enable = true;
    state.output_path_select = 2;
    state.input_path_select = 1;
    let buf = PackedOutputDataReport::from(&state).pack()?;
    // mic(2) | echo<<2 | noise<<3 | out<<4 | in<<6
    assert_eq!(buf[8], 0b0110_0110);

    let mut state = OutputState::default();
    state.trigger_motor_power_reduction = 0x3;
    state.rumble_motor_power_reduction = 0x5;
    let buf = PackedOutputDataReport::from(&state).pack()?;
    assert_eq!(buf[37], 0x53);

    let mut state = OutputState::default();
    state.speaker_comp_pre_gain = 0x5;
    state.beamforming_enable = true;
    let buf = PackedOutputDataReport::from(&state).pack()?;
    assert_eq!(buf[38], 0b0000_1101, "pre-gain low bits, beamforming bit 3");

    let mut state = OutputState::default();
    state.player_light_1 = true;
    state.player_light_5 = true;
    state.player_light_fade = true;
    let buf = PackedOutputDataReport::from(&state).pack()?;
    assert_eq!(buf[44], 0b0011_0001);

    Ok(())
}

/// Out-of-range values for sub-byte fields are masked to their bit width and
/// never leak into neighboring fields.
#[tokio::test]
async fn test_output_sub_byte_masking() -> Result<(), Box<dyn Error>> {
    let mut state = OutputState::default();
    state.output_path_select = 0xFF;
    state.input_path_select = 0xFF;
    state.speaker_comp_pre_gain = 0xFF;
    state.trigger_motor_power_reduction = 0xFF;
    state.rumble_motor_power_reduction = 0xFF;
    let buf = PackedOutputDataReport::from(&state).pack()?;

    assert_eq!(buf[8], 0b1111_0000);
    assert_eq!(buf[37], 0xFF);
    assert_eq!(buf[38], 0b0000_0111);

    Ok(())
}

#[tokio::test]
async fn test_output_state_round_trip() -> Result<(), Box<dyn Error>> {
    let state = OutputState {
        enable_rumble_emulation: false,
        use_rumble_not_haptics: false,
        allow_headphone_volume: false,
        reset_lights: true,
        rumble_emulation_right: 0x12,
        rumble_emulation_left: 0x34,
        volume_headphones: 0x56,
        volume_speaker: 0x67,
        volume_mic: 0x78,
        mic_select: MicSelect::InternalOnly,
        echo_cancel_enable: true,
        noise_cancel_enable: true,
        output_path_select: 3,
        input_path_select: 2,
        mute_light: MuteLightMode::Breathing,
        touch_power_save: true,
        haptic_power_save: true,
        mic_mute: true,
        headphone_mute: true,
        right_trigger_ffb: trigger_effect_params(TriggerEffectType::Weapon, 0x20, 0x60, 0xFF),
        left_trigger_ffb: trigger_effect_params(TriggerEffectType::Vibration, 0x10, 0x00, 0x80),
        host_timestamp: 0xDEADBEEF,
        trigger_motor_power_reduction: 0x4,
        rumble_motor_power_reduction: 0x9,
        speaker_comp_pre_gain: 0x6,
        beamforming_enable: true,
        allow_light_brightness_change: true,
        allow_color_light_fade_animation: true,
        enable_improved_rumble_emulation: true,
        haptic_low_pass_filter: false,
        light_fade_animation: LightFadeAnimation::FadeIn,
        light_brightness: LightBrightness::Dim,
        player_light_2: true,
        player_light_4: true,
        player_light_fade: true,
        led_red: 0x10,
        led_green: 0x20,
        led_blue: 0x30,
        ..OutputState::default()
    };

    let report = PackedOutputDataReport::from(&state);
    let buf = report.pack()?;
    assert_eq!(buf.len(), OUTPUT_REPORT_USB_SIZE);

    let unpacked = PackedOutputDataReport::unpack(&buf)?;
    assert_eq!(OutputState::from(&unpacked), state);

    Ok(())
}

#[tokio::test]
async fn test_trigger_effect_params() -> Result<(), Box<dyn Error>> {
    let params = trigger_effect_params(TriggerEffectType::Feedback, 0x11, 0x22, 0x33);
    assert_eq!(params[0], 0x21);
    assert_eq!(params[1], 0x11);
    assert_eq!(params[2], 0x22);
    assert_eq!(params[3], 0x33);
    assert_eq!(&params[4..], &[0u8; 7]);

    Ok(())
}
