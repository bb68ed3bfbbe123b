//! Field-level mutators for the output configuration. Every setter follows
//! the same protocol: under the output lock, compare against the cached
//! value, skip the write when nothing changed, otherwise pack the updated
//! state, write it to the controller and commit it to the cache.
use super::controller::DualSense;
use super::error::Error;
use super::hid_report::{LightBrightness, LightFadeAnimation, MicSelect, MuteLightMode};

impl DualSense {
    /// Gate for the rumble-emulation bytes.
    pub fn set_enable_rumble_emulation(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.enable_rumble_emulation == value {
            return Ok(());
        }
        let mut next = *output;
        next.enable_rumble_emulation = value;
        self.write_output(&mut output, next)
    }

    /// Drive the rumble motors instead of the haptic actuators.
    pub fn set_use_rumble_not_haptics(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.use_rumble_not_haptics == value {
            return Ok(());
        }
        let mut next = *output;
        next.use_rumble_not_haptics = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the right adaptive-trigger parameter block.
    pub fn set_allow_right_trigger_ffb(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_right_trigger_ffb == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_right_trigger_ffb = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the left adaptive-trigger parameter block.
    pub fn set_allow_left_trigger_ffb(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_left_trigger_ffb == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_left_trigger_ffb = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the headphone volume byte.
    pub fn set_allow_headphone_volume(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_headphone_volume == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_headphone_volume = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the speaker volume byte.
    pub fn set_allow_speaker_volume(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_speaker_volume == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_speaker_volume = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the microphone volume byte.
    pub fn set_allow_mic_volume(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_mic_volume == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_mic_volume = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the audio-control fields.
    pub fn set_allow_audio_control(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_audio_control == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_audio_control = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the mute-light mode.
    pub fn set_allow_mute_light(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_mute_light == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_mute_light = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the mute-control fields.
    pub fn set_allow_audio_mute(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_audio_mute == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_audio_mute = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the lightbar color.
    pub fn set_allow_led_color(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_led_color == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_led_color = value;
        self.write_output(&mut output, next)
    }

    /// Ask the firmware to reset all light state.
    pub fn set_reset_lights(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.reset_lights == value {
            return Ok(());
        }
        let mut next = *output;
        next.reset_lights = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the player-indicator bits.
    pub fn set_allow_player_indicators(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_player_indicators == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_player_indicators = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the haptic low-pass-filter flag.
    pub fn set_allow_haptic_low_pass_filter(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_haptic_low_pass_filter == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_haptic_low_pass_filter = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the motor power-reduction nibbles.
    pub fn set_allow_motor_power_level(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_motor_power_level == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_motor_power_level = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the audio-control-2 fields.
    pub fn set_allow_audio_control2(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_audio_control2 == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_audio_control2 = value;
        self.write_output(&mut output, next)
    }

    pub fn set_rumble_emulation_right(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.rumble_emulation_right == value {
            return Ok(());
        }
        let mut next = *output;
        next.rumble_emulation_right = value;
        self.write_output(&mut output, next)
    }

    pub fn set_rumble_emulation_left(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.rumble_emulation_left == value {
            return Ok(());
        }
        let mut next = *output;
        next.rumble_emulation_left = value;
        self.write_output(&mut output, next)
    }

    /// Set both rumble magnitudes in a single write.
    pub fn set_rumble(&self, left: u8, right: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.rumble_emulation_left == left && output.rumble_emulation_right == right {
            return Ok(());
        }
        let mut next = *output;
        next.rumble_emulation_left = left;
        next.rumble_emulation_right = right;
        self.write_output(&mut output, next)
    }

    pub fn set_volume_headphones(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.volume_headphones == value {
            return Ok(());
        }
        let mut next = *output;
        next.volume_headphones = value;
        self.write_output(&mut output, next)
    }

    pub fn set_volume_speaker(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.volume_speaker == value {
            return Ok(());
        }
        let mut next = *output;
        next.volume_speaker = value;
        self.write_output(&mut output, next)
    }

    pub fn set_volume_mic(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.volume_mic == value {
            return Ok(());
        }
        let mut next = *output;
        next.volume_mic = value;
        self.write_output(&mut output, next)
    }

    pub fn set_mic_select(&self, value: MicSelect) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.mic_select == value {
            return Ok(());
        }
        let mut next = *output;
        next.mic_select = value;
        self.write_output(&mut output, next)
    }

    pub fn set_echo_cancel_enable(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.echo_cancel_enable == value {
            return Ok(());
        }
        let mut next = *output;
        next.echo_cancel_enable = value;
        self.write_output(&mut output, next)
    }

    pub fn set_noise_cancel_enable(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.noise_cancel_enable == value {
            return Ok(());
        }
        let mut next = *output;
        next.noise_cancel_enable = value;
        self.write_output(&mut output, next)
    }

    /// Speaker/headphone routing: 0 L_R_X, 1 L_L_X, 2 L_L_R, 3 X_X_R.
    /// Only the low two bits reach the wire.
    pub fn set_output_path_select(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.output_path_select == value {
            return Ok(());
        }
        let mut next = *output;
        next.output_path_select = value;
        self.write_output(&mut output, next)
    }

    /// Microphone routing: 0 CHAT_ASR, 1 CHAT_CHAT, 2 ASR_ASR. Only the
    /// low two bits reach the wire.
    pub fn set_input_path_select(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.input_path_select == value {
            return Ok(());
        }
        let mut next = *output;
        next.input_path_select = value;
        self.write_output(&mut output, next)
    }

    pub fn set_mute_light(&self, value: MuteLightMode) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.mute_light == value {
            return Ok(());
        }
        let mut next = *output;
        next.mute_light = value;
        self.write_output(&mut output, next)
    }

    pub fn set_touch_power_save(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.touch_power_save == value {
            return Ok(());
        }
        let mut next = *output;
        next.touch_power_save = value;
        self.write_output(&mut output, next)
    }

    pub fn set_motion_power_save(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.motion_power_save == value {
            return Ok(());
        }
        let mut next = *output;
        next.motion_power_save = value;
        self.write_output(&mut output, next)
    }

    pub fn set_haptic_power_save(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.haptic_power_save == value {
            return Ok(());
        }
        let mut next = *output;
        next.haptic_power_save = value;
        self.write_output(&mut output, next)
    }

    pub fn set_audio_power_save(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.audio_power_save == value {
            return Ok(());
        }
        let mut next = *output;
        next.audio_power_save = value;
        self.write_output(&mut output, next)
    }

    pub fn set_mic_mute(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.mic_mute == value {
            return Ok(());
        }
        let mut next = *output;
        next.mic_mute = value;
        self.write_output(&mut output, next)
    }

    pub fn set_speaker_mute(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.speaker_mute == value {
            return Ok(());
        }
        let mut next = *output;
        next.speaker_mute = value;
        self.write_output(&mut output, next)
    }

    pub fn set_headphone_mute(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.headphone_mute == value {
            return Ok(());
        }
        let mut next = *output;
        next.headphone_mute = value;
        self.write_output(&mut output, next)
    }

    pub fn set_haptic_mute(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.haptic_mute == value {
            return Ok(());
        }
        let mut next = *output;
        next.haptic_mute = value;
        self.write_output(&mut output, next)
    }

    /// Set the right adaptive-trigger effect. Build the parameter block
    /// with [trigger_effect_params](crate::hid_report::trigger_effect_params).
    pub fn set_right_trigger_ffb(&self, value: [u8; 11]) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.right_trigger_ffb == value {
            return Ok(());
        }
        let mut next = *output;
        next.right_trigger_ffb = value;
        self.write_output(&mut output, next)
    }

    /// Set the left adaptive-trigger effect. Build the parameter block
    /// with [trigger_effect_params](crate::hid_report::trigger_effect_params).
    pub fn set_left_trigger_ffb(&self, value: [u8; 11]) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.left_trigger_ffb == value {
            return Ok(());
        }
        let mut next = *output;
        next.left_trigger_ffb = value;
        self.write_output(&mut output, next)
    }

    pub fn set_host_timestamp(&self, value: u32) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.host_timestamp == value {
            return Ok(());
        }
        let mut next = *output;
        next.host_timestamp = value;
        self.write_output(&mut output, next)
    }

    /// Reduce trigger motor power; low nibble only.
    pub fn set_trigger_motor_power_reduction(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.trigger_motor_power_reduction == value {
            return Ok(());
        }
        let mut next = *output;
        next.trigger_motor_power_reduction = value;
        self.write_output(&mut output, next)
    }

    /// Reduce rumble motor power; low nibble only.
    pub fn set_rumble_motor_power_reduction(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.rumble_motor_power_reduction == value {
            return Ok(());
        }
        let mut next = *output;
        next.rumble_motor_power_reduction = value;
        self.write_output(&mut output, next)
    }

    /// Speaker compressor pre-gain; only the low three bits reach the wire.
    pub fn set_speaker_comp_pre_gain(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.speaker_comp_pre_gain == value {
            return Ok(());
        }
        let mut next = *output;
        next.speaker_comp_pre_gain = value;
        self.write_output(&mut output, next)
    }

    pub fn set_beamforming_enable(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.beamforming_enable == value {
            return Ok(());
        }
        let mut next = *output;
        next.beamforming_enable = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the player-indicator brightness byte.
    pub fn set_allow_light_brightness_change(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_light_brightness_change == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_light_brightness_change = value;
        self.write_output(&mut output, next)
    }

    /// Gate for the lightbar fade animation byte.
    pub fn set_allow_color_light_fade_animation(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.allow_color_light_fade_animation == value {
            return Ok(());
        }
        let mut next = *output;
        next.allow_color_light_fade_animation = value;
        self.write_output(&mut output, next)
    }

    /// Newer rumble emulation; used instead of `enable_rumble_emulation`.
    pub fn set_enable_improved_rumble_emulation(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.enable_improved_rumble_emulation == value {
            return Ok(());
        }
        let mut next = *output;
        next.enable_improved_rumble_emulation = value;
        self.write_output(&mut output, next)
    }

    pub fn set_haptic_low_pass_filter(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.haptic_low_pass_filter == value {
            return Ok(());
        }
        let mut next = *output;
        next.haptic_low_pass_filter = value;
        self.write_output(&mut output, next)
    }

    pub fn set_light_fade_animation(&self, value: LightFadeAnimation) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.light_fade_animation == value {
            return Ok(());
        }
        let mut next = *output;
        next.light_fade_animation = value;
        self.write_output(&mut output, next)
    }

    pub fn set_light_brightness(&self, value: LightBrightness) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.light_brightness == value {
            return Ok(());
        }
        let mut next = *output;
        next.light_brightness = value;
        self.write_output(&mut output, next)
    }

    pub fn set_player_light_1(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.player_light_1 == value {
            return Ok(());
        }
        let mut next = *output;
        next.player_light_1 = value;
        self.write_output(&mut output, next)
    }

    pub fn set_player_light_2(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.player_light_2 == value {
            return Ok(());
        }
        let mut next = *output;
        next.player_light_2 = value;
        self.write_output(&mut output, next)
    }

    pub fn set_player_light_3(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.player_light_3 == value {
            return Ok(());
        }
        let mut next = *output;
        next.player_light_3 = value;
        self.write_output(&mut output, next)
    }

    pub fn set_player_light_4(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.player_light_4 == value {
            return Ok(());
        }
        let mut next = *output;
        next.player_light_4 = value;
        self.write_output(&mut output, next)
    }

    pub fn set_player_light_5(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.player_light_5 == value {
            return Ok(());
        }
        let mut next = *output;
        next.player_light_5 = value;
        self.write_output(&mut output, next)
    }

    /// Fade the player indicators in instead of switching them instantly.
    pub fn set_player_light_fade(&self, value: bool) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.player_light_fade == value {
            return Ok(());
        }
        let mut next = *output;
        next.player_light_fade = value;
        self.write_output(&mut output, next)
    }

    pub fn set_led_red(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.led_red == value {
            return Ok(());
        }
        let mut next = *output;
        next.led_red = value;
        self.write_output(&mut output, next)
    }

    pub fn set_led_green(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.led_green == value {
            return Ok(());
        }
        let mut next = *output;
        next.led_green = value;
        self.write_output(&mut output, next)
    }

    pub fn set_led_blue(&self, value: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.led_blue == value {
            return Ok(());
        }
        let mut next = *output;
        next.led_blue = value;
        self.write_output(&mut output, next)
    }

    /// Set the lightbar color in a single write.
    pub fn set_led_color(&self, red: u8, green: u8, blue: u8) -> Result<(), Error> {
        let mut output = self.output_lock();
        if output.led_red == red && output.led_green == green && output.led_blue == blue {
            return Ok(());
        }
        let mut next = *output;
        next.led_red = red;
        next.led_green = green;
        next.led_blue = blue;
        self.write_output(&mut output, next)
    }
}
