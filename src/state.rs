//! Decoded controller state and the outbound configuration, exposed with
//! plain types. Conversions to and from the packed wire reports live here so
//! the rest of the crate never touches raw bit positions.
use packed_struct::prelude::*;

use super::driver::OUTPUT_REPORT_USB;
use super::hid_report::{
    trigger_effect_params, Direction, LightBrightness, LightFadeAnimation, MicSelect,
    MuteLightMode, PackedInputDataReport, PackedOutputDataReport, PowerState, TouchFingerData,
    TriggerEffectType,
};

/// A single decoded touch point on the touchpad.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TouchFinger {
    pub index: u8,
    pub not_touching: bool,
    pub x: u16,
    pub y: u16,
}

/// Decoded snapshot of the controller's input state. Snapshots are plain
/// copyable values; the poller replaces the shared snapshot wholesale, so a
/// copy never mixes fields from two reports.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct InputState {
    pub left_stick_x: u8,
    pub left_stick_y: u8,
    pub right_stick_x: u8,
    pub right_stick_y: u8,
    pub trigger_left: u8,
    pub trigger_right: u8,
    pub seq_no: u8,
    pub dpad: Direction,
    pub button_square: bool,
    pub button_cross: bool,
    pub button_circle: bool,
    pub button_triangle: bool,
    pub button_l1: bool,
    pub button_r1: bool,
    pub button_l2: bool,
    pub button_r2: bool,
    pub button_create: bool,
    pub button_options: bool,
    pub button_l3: bool,
    pub button_r3: bool,
    pub button_home: bool,
    pub button_pad: bool,
    pub button_mute: bool,
    /// DualSense Edge only.
    pub button_left_function: bool,
    /// DualSense Edge only.
    pub button_right_function: bool,
    /// DualSense Edge only.
    pub button_left_paddle: bool,
    /// DualSense Edge only.
    pub button_right_paddle: bool,
    pub angular_velocity_x: i16,
    pub angular_velocity_z: i16,
    pub angular_velocity_y: i16,
    pub accelerometer_x: i16,
    pub accelerometer_y: i16,
    pub accelerometer_z: i16,
    pub sensor_timestamp: u32,
    pub temperature: i8,
    pub touch_finger_1: TouchFinger,
    pub touch_finger_2: TouchFinger,
    pub touch_timestamp: u8,
    pub trigger_right_stop_location: u8,
    pub trigger_right_status: u8,
    pub trigger_left_stop_location: u8,
    pub trigger_left_status: u8,
    pub host_timestamp: u32,
    pub trigger_right_effect: u8,
    pub trigger_left_effect: u8,
    pub device_timestamp: u32,
    /// Battery charge in tenths, 0..=10.
    pub power_percent: u8,
    pub power_state: PowerState,
    pub plugged_headphones: bool,
    pub plugged_mic: bool,
    pub mic_muted: bool,
    pub plugged_usb_data: bool,
    pub plugged_usb_power: bool,
    pub plugged_external_mic: bool,
    pub haptic_low_pass_filter: bool,
    /// Opaque AES-CMAC trailer; surfaced, never validated.
    pub aes_cmac: u64,
}

impl From<&TouchFingerData> for TouchFinger {
    fn from(data: &TouchFingerData) -> Self {
        Self {
            index: data.index.to_primitive(),
            not_touching: data.not_touching,
            x: data.get_x(),
            y: data.get_y(),
        }
    }
}

impl From<PackedInputDataReport> for InputState {
    fn from(report: PackedInputDataReport) -> Self {
        Self {
            left_stick_x: report.joystick_l_x,
            left_stick_y: report.joystick_l_y,
            right_stick_x: report.joystick_r_x,
            right_stick_y: report.joystick_r_y,
            trigger_left: report.l2_trigger,
            trigger_right: report.r2_trigger,
            seq_no: report.seq_number,
            dpad: report.dpad,
            button_square: report.square,
            button_cross: report.cross,
            button_circle: report.circle,
            button_triangle: report.triangle,
            button_l1: report.l1,
            button_r1: report.r1,
            button_l2: report.l2,
            button_r2: report.r2,
            button_create: report.create,
            button_options: report.options,
            button_l3: report.l3,
            button_r3: report.r3,
            button_home: report.ps,
            button_pad: report.touchpad,
            button_mute: report.mute,
            button_left_function: report.left_fn,
            button_right_function: report.right_fn,
            button_left_paddle: report.left_paddle,
            button_right_paddle: report.right_paddle,
            angular_velocity_x: report.gyro_x.to_primitive(),
            angular_velocity_z: report.gyro_z.to_primitive(),
            angular_velocity_y: report.gyro_y.to_primitive(),
            accelerometer_x: report.accel_x.to_primitive(),
            accelerometer_y: report.accel_y.to_primitive(),
            accelerometer_z: report.accel_z.to_primitive(),
            sensor_timestamp: report.sensor_timestamp.to_primitive(),
            temperature: report.temperature,
            touch_finger_1: TouchFinger::from(&report.touch_data.touch_finger_data[0]),
            touch_finger_2: TouchFinger::from(&report.touch_data.touch_finger_data[1]),
            touch_timestamp: report.touch_data.timestamp,
            trigger_right_stop_location: report.r2_stop_location.to_primitive(),
            trigger_right_status: report.r2_status.to_primitive(),
            trigger_left_stop_location: report.l2_stop_location.to_primitive(),
            trigger_left_status: report.l2_status.to_primitive(),
            host_timestamp: report.host_timestamp.to_primitive(),
            trigger_right_effect: report.r2_effect.to_primitive(),
            trigger_left_effect: report.l2_effect.to_primitive(),
            device_timestamp: report.device_timestamp.to_primitive(),
            power_percent: report.power_percent.to_primitive(),
            power_state: report.power_state,
            plugged_headphones: report.plugged_headphones,
            plugged_mic: report.plugged_mic,
            mic_muted: report.mic_muted,
            plugged_usb_data: report.plugged_usb_data,
            plugged_usb_power: report.plugged_usb_power,
            plugged_external_mic: report.plugged_external_mic,
            haptic_low_pass_filter: report.haptic_low_pass_filter,
            aes_cmac: report.aes_cmac.to_primitive(),
        }
    }
}

/// Outbound controller configuration. Every field maps to one slot of the
/// 48-byte output report; the `allow_*`/`enable_*` gates tell the firmware
/// which of the other fields to apply.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutputState {
    pub enable_rumble_emulation: bool,
    /// Use the rumble motors instead of the haptic actuators.
    pub use_rumble_not_haptics: bool,
    /// Enable setting `right_trigger_ffb`.
    pub allow_right_trigger_ffb: bool,
    /// Enable setting `left_trigger_ffb`.
    pub allow_left_trigger_ffb: bool,
    /// Enable setting `volume_headphones`.
    pub allow_headphone_volume: bool,
    /// Enable setting `volume_speaker`.
    pub allow_speaker_volume: bool,
    /// Enable setting `volume_mic`.
    pub allow_mic_volume: bool,
    /// Enable setting the audio-control fields.
    pub allow_audio_control: bool,
    /// Enable setting `mute_light`.
    pub allow_mute_light: bool,
    /// Enable setting the mute-control fields.
    pub allow_audio_mute: bool,
    /// Enable setting the lightbar color.
    pub allow_led_color: bool,
    pub reset_lights: bool,
    /// Enable setting the player-indicator fields.
    pub allow_player_indicators: bool,
    /// Enable setting `haptic_low_pass_filter`.
    pub allow_haptic_low_pass_filter: bool,
    /// Enable setting the motor-power-level fields.
    pub allow_motor_power_level: bool,
    /// Enable setting the audio-control-2 fields.
    pub allow_audio_control2: bool,
    pub rumble_emulation_right: u8,
    pub rumble_emulation_left: u8,
    pub volume_headphones: u8,
    pub volume_speaker: u8,
    pub volume_mic: u8,
    pub mic_select: MicSelect,
    pub echo_cancel_enable: bool,
    pub noise_cancel_enable: bool,
    /// 0 L_R_X, 1 L_L_X, 2 L_L_R, 3 X_X_R. Only the low two bits are packed.
    pub output_path_select: u8,
    /// 0 CHAT_ASR, 1 CHAT_CHAT, 2 ASR_ASR. Only the low two bits are packed.
    pub input_path_select: u8,
    pub mute_light: MuteLightMode,
    pub touch_power_save: bool,
    pub motion_power_save: bool,
    pub haptic_power_save: bool,
    pub audio_power_save: bool,
    pub mic_mute: bool,
    pub speaker_mute: bool,
    pub headphone_mute: bool,
    pub haptic_mute: bool,
    /// Adaptive-trigger parameter block, see [trigger_effect_params].
    pub right_trigger_ffb: [u8; 11],
    /// Adaptive-trigger parameter block, see [trigger_effect_params].
    pub left_trigger_ffb: [u8; 11],
    pub host_timestamp: u32,
    /// Low nibble of the motor-power-level byte.
    pub trigger_motor_power_reduction: u8,
    /// High nibble of the motor-power-level byte.
    pub rumble_motor_power_reduction: u8,
    /// Only the low three bits are packed.
    pub speaker_comp_pre_gain: u8,
    pub beamforming_enable: bool,
    /// Allow setting `light_brightness`.
    pub allow_light_brightness_change: bool,
    /// Allow setting `light_fade_animation`.
    pub allow_color_light_fade_animation: bool,
    /// Use instead of `enable_rumble_emulation`.
    pub enable_improved_rumble_emulation: bool,
    pub haptic_low_pass_filter: bool,
    pub light_fade_animation: LightFadeAnimation,
    pub light_brightness: LightBrightness,
    pub player_light_1: bool,
    pub player_light_2: bool,
    pub player_light_3: bool,
    pub player_light_4: bool,
    pub player_light_5: bool,
    pub player_light_fade: bool,
    pub led_red: u8,
    pub led_green: u8,
    pub led_blue: u8,
}

impl Default for OutputState {
    /// Permissive defaults: every gate open except the light reset and
    /// brightness/fade overrides, haptic low-pass filtering on, triggers
    /// released, lightbar white.
    fn default() -> Self {
        Self {
            enable_rumble_emulation: true,
            use_rumble_not_haptics: true,
            allow_right_trigger_ffb: true,
            allow_left_trigger_ffb: true,
            allow_headphone_volume: true,
            allow_speaker_volume: true,
            allow_mic_volume: true,
            allow_audio_control: true,
            allow_mute_light: true,
            allow_audio_mute: true,
            allow_led_color: true,
            reset_lights: false,
            allow_player_indicators: true,
            allow_haptic_low_pass_filter: true,
            allow_motor_power_level: true,
            allow_audio_control2: true,
            rumble_emulation_right: 0x00,
            rumble_emulation_left: 0x00,
            volume_headphones: 0x00,
            volume_speaker: 0x00,
            volume_mic: 0x00,
            mic_select: MicSelect::Auto,
            echo_cancel_enable: false,
            noise_cancel_enable: false,
            output_path_select: 0x00,
            input_path_select: 0x00,
            mute_light: MuteLightMode::Off,
            touch_power_save: false,
            motion_power_save: false,
            haptic_power_save: false,
            audio_power_save: false,
            mic_mute: false,
            speaker_mute: false,
            headphone_mute: false,
            haptic_mute: false,
            right_trigger_ffb: trigger_effect_params(TriggerEffectType::Off, 0x00, 0x00, 0x00),
            left_trigger_ffb: trigger_effect_params(TriggerEffectType::Off, 0x00, 0x00, 0x00),
            host_timestamp: 0x00,
            trigger_motor_power_reduction: 0x00,
            rumble_motor_power_reduction: 0x00,
            speaker_comp_pre_gain: 0x00,
            beamforming_enable: false,
            allow_light_brightness_change: false,
            allow_color_light_fade_animation: false,
            enable_improved_rumble_emulation: false,
            haptic_low_pass_filter: true,
            light_fade_animation: LightFadeAnimation::FadeOut,
            light_brightness: LightBrightness::Bright,
            player_light_1: false,
            player_light_2: false,
            player_light_3: false,
            player_light_4: false,
            player_light_5: false,
            player_light_fade: false,
            led_red: 0xFF,
            led_green: 0xFF,
            led_blue: 0xFF,
        }
    }
}

impl From<&OutputState> for PackedOutputDataReport {
    fn from(state: &OutputState) -> Self {
        Self {
            report_id: OUTPUT_REPORT_USB,
            enable_rumble_emulation: state.enable_rumble_emulation,
            use_rumble_not_haptics: state.use_rumble_not_haptics,
            allow_right_trigger_ffb: state.allow_right_trigger_ffb,
            allow_left_trigger_ffb: state.allow_left_trigger_ffb,
            allow_headphone_volume: state.allow_headphone_volume,
            allow_speaker_volume: state.allow_speaker_volume,
            allow_mic_volume: state.allow_mic_volume,
            allow_audio_control: state.allow_audio_control,
            allow_mute_light: state.allow_mute_light,
            allow_audio_mute: state.allow_audio_mute,
            allow_led_color: state.allow_led_color,
            reset_lights: state.reset_lights,
            allow_player_indicators: state.allow_player_indicators,
            allow_haptic_low_pass_filter: state.allow_haptic_low_pass_filter,
            allow_motor_power_level: state.allow_motor_power_level,
            allow_audio_control2: state.allow_audio_control2,
            rumble_emulation_right: state.rumble_emulation_right,
            rumble_emulation_left: state.rumble_emulation_left,
            volume_headphones: state.volume_headphones,
            volume_speaker: state.volume_speaker,
            volume_mic: state.volume_mic,
            mic_select: state.mic_select,
            echo_cancel_enable: state.echo_cancel_enable,
            noise_cancel_enable: state.noise_cancel_enable,
            output_path_select: Integer::from_primitive(state.output_path_select & 0x03),
            input_path_select: Integer::from_primitive(state.input_path_select & 0x03),
            mute_light: state.mute_light,
            touch_power_save: state.touch_power_save,
            motion_power_save: state.motion_power_save,
            haptic_power_save: state.haptic_power_save,
            audio_power_save: state.audio_power_save,
            mic_mute: state.mic_mute,
            speaker_mute: state.speaker_mute,
            headphone_mute: state.headphone_mute,
            haptic_mute: state.haptic_mute,
            right_trigger_ffb: state.right_trigger_ffb,
            left_trigger_ffb: state.left_trigger_ffb,
            host_timestamp: Integer::from_primitive(state.host_timestamp),
            trigger_motor_power_reduction: Integer::from_primitive(
                state.trigger_motor_power_reduction & 0x0F,
            ),
            rumble_motor_power_reduction: Integer::from_primitive(
                state.rumble_motor_power_reduction & 0x0F,
            ),
            speaker_comp_pre_gain: Integer::from_primitive(state.speaker_comp_pre_gain & 0x07),
            beamforming_enable: state.beamforming_enable,
            allow_light_brightness_change: state.allow_light_brightness_change,
            allow_color_light_fade_animation: state.allow_color_light_fade_animation,
            enable_improved_rumble_emulation: state.enable_improved_rumble_emulation,
            haptic_low_pass_filter: state.haptic_low_pass_filter,
            light_fade_animation: state.light_fade_animation,
            light_brightness: state.light_brightness,
            player_light_1: state.player_light_1,
            player_light_2: state.player_light_2,
            player_light_3: state.player_light_3,
            player_light_4: state.player_light_4,
            player_light_5: state.player_light_5,
            player_light_fade: state.player_light_fade,
            led_red: state.led_red,
            led_green: state.led_green,
            led_blue: state.led_blue,
        }
    }
}

impl From<&PackedOutputDataReport> for OutputState {
    fn from(report: &PackedOutputDataReport) -> Self {
        Self {
            enable_rumble_emulation: report.enable_rumble_emulation,
            use_rumble_not_haptics: report.use_rumble_not_haptics,
            allow_right_trigger_ffb: report.allow_right_trigger_ffb,
            allow_left_trigger_ffb: report.allow_left_trigger_ffb,
            allow_headphone_volume: report.allow_headphone_volume,
            allow_speaker_volume: report.allow_speaker_volume,
            allow_mic_volume: report.allow_mic_volume,
            allow_audio_control: report.allow_audio_control,
            allow_mute_light: report.allow_mute_light,
            allow_audio_mute: report.allow_audio_mute,
            allow_led_color: report.allow_led_color,
            reset_lights: report.reset_lights,
            allow_player_indicators: report.allow_player_indicators,
            allow_haptic_low_pass_filter: report.allow_haptic_low_pass_filter,
            allow_motor_power_level: report.allow_motor_power_level,
            allow_audio_control2: report.allow_audio_control2,
            rumble_emulation_right: report.rumble_emulation_right,
            rumble_emulation_left: report.rumble_emulation_left,
            volume_headphones: report.volume_headphones,
            volume_speaker: report.volume_speaker,
            volume_mic: report.volume_mic,
            mic_select: report.mic_select,
            echo_cancel_enable: report.echo_cancel_enable,
            noise_cancel_enable: report.noise_cancel_enable,
            output_path_select: report.output_path_select.to_primitive(),
            input_path_select: report.input_path_select.to_primitive(),
            mute_light: report.mute_light,
            touch_power_save: report.touch_power_save,
            motion_power_save: report.motion_power_save,
            haptic_power_save: report.haptic_power_save,
            audio_power_save: report.audio_power_save,
            mic_mute: report.mic_mute,
            speaker_mute: report.speaker_mute,
            headphone_mute: report.headphone_mute,
            haptic_mute: report.haptic_mute,
            right_trigger_ffb: report.right_trigger_ffb,
            left_trigger_ffb: report.left_trigger_ffb,
            host_timestamp: report.host_timestamp.to_primitive(),
            trigger_motor_power_reduction: report.trigger_motor_power_reduction.to_primitive(),
            rumble_motor_power_reduction: report.rumble_motor_power_reduction.to_primitive(),
            speaker_comp_pre_gain: report.speaker_comp_pre_gain.to_primitive(),
            beamforming_enable: report.beamforming_enable,
            allow_light_brightness_change: report.allow_light_brightness_change,
            allow_color_light_fade_animation: report.allow_color_light_fade_animation,
            enable_improved_rumble_emulation: report.enable_improved_rumble_emulation,
            haptic_low_pass_filter: report.haptic_low_pass_filter,
            light_fade_animation: report.light_fade_animation,
            light_brightness: report.light_brightness,
            player_light_1: report.player_light_1,
            player_light_2: report.player_light_2,
            player_light_3: report.player_light_3,
            player_light_4: report.player_light_4,
            player_light_5: report.player_light_5,
            player_light_fade: report.player_light_fade,
            led_red: report.led_red,
            led_green: report.led_green,
            led_blue: report.led_blue,
        }
    }
}
