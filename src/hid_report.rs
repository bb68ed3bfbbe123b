//! Packed report definitions for the DualSense USB interface.
//! Reference: https://controllers.fandom.com/wiki/Sony_DualSense

use packed_struct::prelude::*;

use super::driver::{INPUT_REPORT_USB, OUTPUT_REPORT_USB};

/// Direction of the D-Pad hat switch, clockwise from north. The wire value
/// lives in the low nibble of the combined D-Pad/action-buttons byte; `8`
/// means no direction is pressed.
#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    #[default]
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
    None = 8,
}

/// Battery charge status from the high nibble of the power byte. Every nibble
/// value is named so reserved values survive a decode round-trip unchanged.
#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PowerState {
    #[default]
    Discharging = 0x00,
    Charging = 0x01,
    Complete = 0x02,
    Reserved3 = 0x03,
    Reserved4 = 0x04,
    Reserved5 = 0x05,
    Reserved6 = 0x06,
    Reserved7 = 0x07,
    Reserved8 = 0x08,
    Reserved9 = 0x09,
    AbnormalVoltage = 0x0A,
    AbnormalTemperature = 0x0B,
    ReservedC = 0x0C,
    ReservedD = 0x0D,
    ReservedE = 0x0E,
    ChargingError = 0x0F,
}

/// Behavior of the LED behind the mute button.
#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MuteLightMode {
    #[default]
    Off = 0,
    On = 1,
    Breathing = 2,
    DoNothing = 3,
    NoAction4 = 4,
    NoAction5 = 5,
    NoAction6 = 6,
    NoAction7 = 7,
}

/// Lightbar fade animation applied when the light settings change.
#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LightFadeAnimation {
    #[default]
    Nothing = 0,
    FadeIn = 1,
    FadeOut = 2,
}

/// Player-indicator LED brightness. Values above `Dim` are accepted by the
/// firmware but have no effect.
#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LightBrightness {
    #[default]
    Bright = 0,
    Mid = 1,
    Dim = 2,
    NoAction3 = 3,
    NoAction4 = 4,
    NoAction5 = 5,
    NoAction6 = 6,
    NoAction7 = 7,
}

/// Microphone routing selection in the audio-control byte.
#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MicSelect {
    #[default]
    Auto = 0,
    InternalOnly = 1,
    ExternalOnly = 2,
    Unknown = 3,
}

/// Adaptive-trigger effect selector for the force-feedback parameter block.
#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TriggerEffectType {
    #[default]
    Off = 0x05,
    Feedback = 0x21,
    Weapon = 0x25,
    Vibration = 0x26,
}

/// Build an 11-byte adaptive-trigger force-feedback parameter block.
/// Positions 0..3 hold the effect id, start position, end position and
/// strength; the remaining bytes are zero.
pub fn trigger_effect_params(
    effect: TriggerEffectType,
    start: u8,
    end: u8,
    strength: u8,
) -> [u8; 11] {
    let mut params = [0; 11];
    params[0] = effect.to_primitive();
    params[1] = start;
    params[2] = end;
    params[3] = strength;
    params
}

/// State of a single touch point on the touchpad, packed into 32 bits. The
/// 12-bit x and y coordinates straddle byte 2, so they are exposed through
/// the get/set accessors instead of single fields.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "4")]
pub struct TouchFingerData {
    // byte 0
    #[packed_field(bits = "0")]
    pub not_touching: bool,
    #[packed_field(bits = "1..=7")]
    pub index: Integer<u8, packed_bits::Bits<7>>,
    // byte 1
    #[packed_field(bytes = "1")]
    pub x_lo: u8,
    // byte 2
    #[packed_field(bits = "16..=19")]
    pub y_lo: Integer<u8, packed_bits::Bits<4>>,
    #[packed_field(bits = "20..=23")]
    pub x_hi: Integer<u8, packed_bits::Bits<4>>,
    // byte 3
    #[packed_field(bytes = "3")]
    pub y_hi: u8,
}

impl TouchFingerData {
    pub fn get_x(&self) -> u16 {
        ((self.x_hi.to_primitive() as u16) << 8) | self.x_lo as u16
    }

    pub fn get_y(&self) -> u16 {
        ((self.y_hi as u16) << 4) | self.y_lo.to_primitive() as u16
    }

    pub fn set_x(&mut self, x: u16) {
        self.x_lo = (x & 0x00FF) as u8;
        self.x_hi = Integer::from_primitive(((x & 0x0F00) >> 8) as u8);
    }

    pub fn set_y(&mut self, y: u16) {
        self.y_lo = Integer::from_primitive((y & 0x000F) as u8);
        self.y_hi = ((y & 0x0FF0) >> 4) as u8;
    }
}

impl Default for TouchFingerData {
    fn default() -> Self {
        Self {
            not_touching: true,
            index: Integer::from_primitive(0),
            x_lo: 0,
            y_lo: Integer::from_primitive(0),
            x_hi: Integer::from_primitive(0),
            y_hi: 0,
        }
    }
}

/// Touchpad data: two touch points and the touchpad timestamp.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq, Default)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "9")]
pub struct TouchData {
    #[packed_field(bytes = "0..=7", element_size_bytes = "4")]
    pub touch_finger_data: [TouchFingerData; 2],
    #[packed_field(bytes = "8")]
    pub timestamp: u8,
}

/// DualSense USB input report (0x01), 64 bytes.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "64")]
pub struct PackedInputDataReport {
    // byte 0
    #[packed_field(bytes = "0")]
    pub report_id: u8, // Report ID (always 0x01)

    // byte 1-4
    #[packed_field(bytes = "1")]
    pub joystick_l_x: u8, // left stick X axis
    #[packed_field(bytes = "2")]
    pub joystick_l_y: u8, // left stick Y axis
    #[packed_field(bytes = "3")]
    pub joystick_r_x: u8, // right stick X axis
    #[packed_field(bytes = "4")]
    pub joystick_r_y: u8, // right stick Y axis

    // byte 5-6
    #[packed_field(bytes = "5")]
    pub l2_trigger: u8, // L2 trigger axis
    #[packed_field(bytes = "6")]
    pub r2_trigger: u8, // R2 trigger axis

    // byte 7
    #[packed_field(bytes = "7")]
    pub seq_number: u8, // Sequence number, wraps

    // byte 8
    #[packed_field(bits = "64")]
    pub triangle: bool,
    #[packed_field(bits = "65")]
    pub circle: bool,
    #[packed_field(bits = "66")]
    pub cross: bool,
    #[packed_field(bits = "67")]
    pub square: bool,
    #[packed_field(bits = "68..=71", ty = "enum")]
    pub dpad: Direction, // Directional buttons

    // byte 9
    #[packed_field(bits = "72")]
    pub r3: bool,
    #[packed_field(bits = "73")]
    pub l3: bool,
    #[packed_field(bits = "74")]
    pub options: bool,
    #[packed_field(bits = "75")]
    pub create: bool,
    #[packed_field(bits = "76")]
    pub r2: bool, // Binary sensor for analog triggers
    #[packed_field(bits = "77")]
    pub l2: bool,
    #[packed_field(bits = "78")]
    pub r1: bool, // Shoulder buttons
    #[packed_field(bits = "79")]
    pub l1: bool,

    // byte 10
    #[packed_field(bits = "80")]
    pub right_paddle: bool, // DualSense Edge
    #[packed_field(bits = "81")]
    pub left_paddle: bool, // DualSense Edge
    #[packed_field(bits = "82")]
    pub right_fn: bool, // DualSense Edge
    #[packed_field(bits = "83")]
    pub left_fn: bool, // DualSense Edge
    #[packed_field(bits = "85")]
    pub mute: bool,
    #[packed_field(bits = "86")]
    pub touchpad: bool,
    #[packed_field(bits = "87")]
    pub ps: bool, // PS (home) button

    // byte 16-21 // Gyro, wire order is X, Z, Y
    #[packed_field(bytes = "16..=17", endian = "lsb")]
    pub gyro_x: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "18..=19", endian = "lsb")]
    pub gyro_z: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "20..=21", endian = "lsb")]
    pub gyro_y: Integer<i16, packed_bits::Bits<16>>,
    // byte 22-27 // Accelerometer
    #[packed_field(bytes = "22..=23", endian = "lsb")]
    pub accel_x: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "24..=25", endian = "lsb")]
    pub accel_y: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "26..=27", endian = "lsb")]
    pub accel_z: Integer<i16, packed_bits::Bits<16>>,

    // byte 28-32
    #[packed_field(bytes = "28..=31", endian = "lsb")]
    pub sensor_timestamp: Integer<u32, packed_bits::Bits<32>>,
    #[packed_field(bytes = "32")]
    pub temperature: i8,

    // byte 33-41
    #[packed_field(bytes = "33..=41")]
    pub touch_data: TouchData,

    // byte 42
    #[packed_field(bits = "336..=339")]
    pub r2_status: Integer<u8, packed_bits::Bits<4>>,
    #[packed_field(bits = "340..=343")]
    pub r2_stop_location: Integer<u8, packed_bits::Bits<4>>,
    // byte 43
    #[packed_field(bits = "344..=347")]
    pub l2_status: Integer<u8, packed_bits::Bits<4>>,
    #[packed_field(bits = "348..=351")]
    pub l2_stop_location: Integer<u8, packed_bits::Bits<4>>,

    // byte 44-47
    #[packed_field(bytes = "44..=47", endian = "lsb")]
    pub host_timestamp: Integer<u32, packed_bits::Bits<32>>,

    // byte 48
    #[packed_field(bits = "384..=387")]
    pub l2_effect: Integer<u8, packed_bits::Bits<4>>,
    #[packed_field(bits = "388..=391")]
    pub r2_effect: Integer<u8, packed_bits::Bits<4>>,

    // byte 49-52
    #[packed_field(bytes = "49..=52", endian = "lsb")]
    pub device_timestamp: Integer<u32, packed_bits::Bits<32>>,

    // byte 53
    #[packed_field(bits = "424..=427", ty = "enum")]
    pub power_state: PowerState,
    #[packed_field(bits = "428..=431")]
    pub power_percent: Integer<u8, packed_bits::Bits<4>>, // Battery percent in tenths

    // byte 54
    #[packed_field(bits = "435")]
    pub plugged_usb_power: bool,
    #[packed_field(bits = "436")]
    pub plugged_usb_data: bool,
    #[packed_field(bits = "437")]
    pub mic_muted: bool,
    #[packed_field(bits = "438")]
    pub plugged_mic: bool,
    #[packed_field(bits = "439")]
    pub plugged_headphones: bool,

    // byte 55
    #[packed_field(bits = "446")]
    pub haptic_low_pass_filter: bool,
    #[packed_field(bits = "447")]
    pub plugged_external_mic: bool,

    // byte 56-63 // AES-CMAC trailer, surfaced but not validated
    #[packed_field(bytes = "56..=63", endian = "lsb")]
    pub aes_cmac: Integer<u64, packed_bits::Bits<64>>,
}

impl Default for PackedInputDataReport {
    fn default() -> Self {
        Self {
            report_id: INPUT_REPORT_USB,
            joystick_l_x: 127,
            joystick_l_y: 127,
            joystick_r_x: 127,
            joystick_r_y: 127,
            l2_trigger: 0,
            r2_trigger: 0,
            seq_number: 0,
            triangle: false,
            circle: false,
            cross: false,
            square: false,
            dpad: Direction::None,
            r3: false,
            l3: false,
            options: false,
            create: false,
            r2: false,
            l2: false,
            r1: false,
            l1: false,
            right_paddle: false,
            left_paddle: false,
            right_fn: false,
            left_fn: false,
            mute: false,
            touchpad: false,
            ps: false,
            gyro_x: Integer::from_primitive(0),
            gyro_z: Integer::from_primitive(0),
            gyro_y: Integer::from_primitive(0),
            accel_x: Integer::from_primitive(0),
            accel_y: Integer::from_primitive(0),
            accel_z: Integer::from_primitive(0),
            sensor_timestamp: Integer::from_primitive(0),
            temperature: 0,
            touch_data: TouchData::default(),
            r2_status: Integer::from_primitive(0),
            r2_stop_location: Integer::from_primitive(0),
            l2_status: Integer::from_primitive(0),
            l2_stop_location: Integer::from_primitive(0),
            host_timestamp: Integer::from_primitive(0),
            l2_effect: Integer::from_primitive(0),
            r2_effect: Integer::from_primitive(0),
            device_timestamp: Integer::from_primitive(0),
            power_state: PowerState::Discharging,
            power_percent: Integer::from_primitive(0),
            plugged_usb_power: false,
            plugged_usb_data: false,
            mic_muted: false,
            plugged_mic: false,
            plugged_headphones: false,
            haptic_low_pass_filter: false,
            plugged_external_mic: false,
            aes_cmac: Integer::from_primitive(0),
        }
    }
}

/// DualSense USB output report (0x02), 48 bytes. The two flag bytes gate
/// which of the remaining fields the firmware applies.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "48")]
pub struct PackedOutputDataReport {
    // byte 0
    #[packed_field(bytes = "0")]
    pub report_id: u8, // Report ID (always 0x02)

    // byte 1
    #[packed_field(bits = "8")]
    pub allow_audio_control: bool,
    #[packed_field(bits = "9")]
    pub allow_mic_volume: bool,
    #[packed_field(bits = "10")]
    pub allow_speaker_volume: bool,
    #[packed_field(bits = "11")]
    pub allow_headphone_volume: bool,
    #[packed_field(bits = "12")]
    pub allow_left_trigger_ffb: bool,
    #[packed_field(bits = "13")]
    pub allow_right_trigger_ffb: bool,
    #[packed_field(bits = "14")]
    pub use_rumble_not_haptics: bool,
    #[packed_field(bits = "15")]
    pub enable_rumble_emulation: bool,

    // byte 2
    #[packed_field(bits = "16")]
    pub allow_audio_control2: bool,
    #[packed_field(bits = "17")]
    pub allow_motor_power_level: bool,
    #[packed_field(bits = "18")]
    pub allow_haptic_low_pass_filter: bool,
    #[packed_field(bits = "19")]
    pub allow_player_indicators: bool,
    #[packed_field(bits = "20")]
    pub reset_lights: bool,
    #[packed_field(bits = "21")]
    pub allow_led_color: bool,
    #[packed_field(bits = "22")]
    pub allow_audio_mute: bool,
    #[packed_field(bits = "23")]
    pub allow_mute_light: bool,

    // byte 3-4
    #[packed_field(bytes = "3")]
    pub rumble_emulation_right: u8,
    #[packed_field(bytes = "4")]
    pub rumble_emulation_left: u8,

    // byte 5-7
    #[packed_field(bytes = "5")]
    pub volume_headphones: u8,
    #[packed_field(bytes = "6")]
    pub volume_speaker: u8,
    #[packed_field(bytes = "7")]
    pub volume_mic: u8,

    // byte 8
    #[packed_field(bits = "64..=65")]
    pub input_path_select: Integer<u8, packed_bits::Bits<2>>, // 0 CHAT_ASR, 1 CHAT_CHAT, 2 ASR_ASR
    #[packed_field(bits = "66..=67")]
    pub output_path_select: Integer<u8, packed_bits::Bits<2>>, // 0 L_R_X, 1 L_L_X, 2 L_L_R, 3 X_X_R
    #[packed_field(bits = "68")]
    pub noise_cancel_enable: bool,
    #[packed_field(bits = "69")]
    pub echo_cancel_enable: bool,
    #[packed_field(bits = "70..=71", ty = "enum")]
    pub mic_select: MicSelect,

    // byte 9
    #[packed_field(bytes = "9", ty = "enum")]
    pub mute_light: MuteLightMode,

    // byte 10
    #[packed_field(bits = "80")]
    pub haptic_mute: bool,
    #[packed_field(bits = "81")]
    pub headphone_mute: bool,
    #[packed_field(bits = "82")]
    pub speaker_mute: bool,
    #[packed_field(bits = "83")]
    pub mic_mute: bool,
    #[packed_field(bits = "84")]
    pub audio_power_save: bool,
    #[packed_field(bits = "85")]
    pub haptic_power_save: bool,
    #[packed_field(bits = "86")]
    pub motion_power_save: bool,
    #[packed_field(bits = "87")]
    pub touch_power_save: bool,

    // byte 11-32
    #[packed_field(bytes = "11..=21")]
    pub right_trigger_ffb: [u8; 11],
    #[packed_field(bytes = "22..=32")]
    pub left_trigger_ffb: [u8; 11],

    // byte 33-36
    #[packed_field(bytes = "33..=36", endian = "lsb")]
    pub host_timestamp: Integer<u32, packed_bits::Bits<32>>,

    // byte 37
    #[packed_field(bits = "296..=299")]
    pub rumble_motor_power_reduction: Integer<u8, packed_bits::Bits<4>>,
    #[packed_field(bits = "300..=303")]
    pub trigger_motor_power_reduction: Integer<u8, packed_bits::Bits<4>>,

    // byte 38
    #[packed_field(bits = "308")]
    pub beamforming_enable: bool,
    #[packed_field(bits = "309..=311")]
    pub speaker_comp_pre_gain: Integer<u8, packed_bits::Bits<3>>,

    // byte 39
    #[packed_field(bits = "317")]
    pub enable_improved_rumble_emulation: bool,
    #[packed_field(bits = "318")]
    pub allow_color_light_fade_animation: bool,
    #[packed_field(bits = "319")]
    pub allow_light_brightness_change: bool,

    // byte 40
    #[packed_field(bits = "327")]
    pub haptic_low_pass_filter: bool,

    // byte 41 is reserved and left zero

    // byte 42-43
    #[packed_field(bytes = "42", ty = "enum")]
    pub light_fade_animation: LightFadeAnimation,
    #[packed_field(bytes = "43", ty = "enum")]
    pub light_brightness: LightBrightness,

    // byte 44
    #[packed_field(bits = "354")]
    pub player_light_fade: bool,
    #[packed_field(bits = "355")]
    pub player_light_5: bool,
    #[packed_field(bits = "356")]
    pub player_light_4: bool,
    #[packed_field(bits = "357")]
    pub player_light_3: bool,
    #[packed_field(bits = "358")]
    pub player_light_2: bool,
    #[packed_field(bits = "359")]
    pub player_light_1: bool,

    // byte 45-47
    #[packed_field(bytes = "45")]
    pub led_red: u8,
    #[packed_field(bytes = "46")]
    pub led_green: u8,
    #[packed_field(bytes = "47")]
    pub led_blue: u8,
}

impl Default for PackedOutputDataReport {
    fn default() -> Self {
        Self {
            report_id: OUTPUT_REPORT_USB,
            allow_audio_control: false,
            allow_mic_volume: false,
            allow_speaker_volume: false,
            allow_headphone_volume: false,
            allow_left_trigger_ffb: false,
            allow_right_trigger_ffb: false,
            use_rumble_not_haptics: false,
            enable_rumble_emulation: false,
            allow_audio_control2: false,
            allow_motor_power_level: false,
            allow_haptic_low_pass_filter: false,
            allow_player_indicators: false,
            reset_lights: false,
            allow_led_color: false,
            allow_audio_mute: false,
            allow_mute_light: false,
            rumble_emulation_right: 0,
            rumble_emulation_left: 0,
            volume_headphones: 0,
            volume_speaker: 0,
            volume_mic: 0,
            input_path_select: Integer::from_primitive(0),
            output_path_select: Integer::from_primitive(0),
            noise_cancel_enable: false,
            echo_cancel_enable: false,
            mic_select: MicSelect::Auto,
            mute_light: MuteLightMode::Off,
            haptic_mute: false,
            headphone_mute: false,
            speaker_mute: false,
            mic_mute: false,
            audio_power_save: false,
            haptic_power_save: false,
            motion_power_save: false,
            touch_power_save: false,
            right_trigger_ffb: [0; 11],
            left_trigger_ffb: [0; 11],
            host_timestamp: Integer::from_primitive(0),
            rumble_motor_power_reduction: Integer::from_primitive(0),
            trigger_motor_power_reduction: Integer::from_primitive(0),
            beamforming_enable: false,
            speaker_comp_pre_gain: Integer::from_primitive(0),
            enable_improved_rumble_emulation: false,
            allow_color_light_fade_animation: false,
            allow_light_brightness_change: false,
            haptic_low_pass_filter: false,
            light_fade_animation: LightFadeAnimation::Nothing,
            light_brightness: LightBrightness::Bright,
            player_light_fade: false,
            player_light_5: false,
            player_light_4: false,
            player_light_3: false,
            player_light_2: false,
            player_light_1: false,
            led_red: 0,
            led_green: 0,
            led_blue: 0,
        }
    }
}
