//! Change observers for the decoded input state.
//!
//! Each observable field keeps its own append-only list of callbacks. The
//! registry lives behind a read/write lock: registrations append under the
//! write lock while the poll loop dispatches under the read lock, so adding
//! an observer while polling is safe. Callbacks run synchronously on the
//! poll task; a slow callback delays the next read.
use super::controller::DualSense;
use super::hid_report::{Direction, PowerState};
use super::state::{InputState, TouchFinger};

type Callback<T> = Box<dyn Fn(T) + Send + Sync + 'static>;

/// Per-field callback lists, in input-report field order.
#[derive(Default)]
pub(crate) struct Callbacks {
    on_left_stick_x_change: Vec<Callback<u8>>,
    on_left_stick_y_change: Vec<Callback<u8>>,
    on_right_stick_x_change: Vec<Callback<u8>>,
    on_right_stick_y_change: Vec<Callback<u8>>,
    on_trigger_left_change: Vec<Callback<u8>>,
    on_trigger_right_change: Vec<Callback<u8>>,
    on_dpad_change: Vec<Callback<Direction>>,
    on_button_square_change: Vec<Callback<bool>>,
    on_button_cross_change: Vec<Callback<bool>>,
    on_button_circle_change: Vec<Callback<bool>>,
    on_button_triangle_change: Vec<Callback<bool>>,
    on_button_l1_change: Vec<Callback<bool>>,
    on_button_r1_change: Vec<Callback<bool>>,
    on_button_l2_change: Vec<Callback<bool>>,
    on_button_r2_change: Vec<Callback<bool>>,
    on_button_create_change: Vec<Callback<bool>>,
    on_button_options_change: Vec<Callback<bool>>,
    on_button_l3_change: Vec<Callback<bool>>,
    on_button_r3_change: Vec<Callback<bool>>,
    on_button_home_change: Vec<Callback<bool>>,
    on_button_pad_change: Vec<Callback<bool>>,
    on_button_mute_change: Vec<Callback<bool>>,
    on_button_left_function_change: Vec<Callback<bool>>,
    on_button_right_function_change: Vec<Callback<bool>>,
    on_button_left_paddle_change: Vec<Callback<bool>>,
    on_button_right_paddle_change: Vec<Callback<bool>>,
    on_angular_velocity_x_change: Vec<Callback<i16>>,
    on_angular_velocity_z_change: Vec<Callback<i16>>,
    on_angular_velocity_y_change: Vec<Callback<i16>>,
    on_accelerometer_x_change: Vec<Callback<i16>>,
    on_accelerometer_y_change: Vec<Callback<i16>>,
    on_accelerometer_z_change: Vec<Callback<i16>>,
    on_temperature_change: Vec<Callback<i8>>,
    on_touch_finger_1_change: Vec<Callback<TouchFinger>>,
    on_touch_finger_2_change: Vec<Callback<TouchFinger>>,
    on_trigger_right_stop_location_change: Vec<Callback<u8>>,
    on_trigger_right_status_change: Vec<Callback<u8>>,
    on_trigger_left_stop_location_change: Vec<Callback<u8>>,
    on_trigger_left_status_change: Vec<Callback<u8>>,
    on_trigger_right_effect_change: Vec<Callback<u8>>,
    on_trigger_left_effect_change: Vec<Callback<u8>>,
    on_power_percent_change: Vec<Callback<u8>>,
    on_power_state_change: Vec<Callback<PowerState>>,
    on_plugged_headphones_change: Vec<Callback<bool>>,
    on_plugged_mic_change: Vec<Callback<bool>>,
    on_mic_muted_change: Vec<Callback<bool>>,
    on_plugged_usb_data_change: Vec<Callback<bool>>,
    on_plugged_external_mic_change: Vec<Callback<bool>>,
    on_haptic_low_pass_filter_change: Vec<Callback<bool>>,
}

impl Callbacks {
    /// Invoke the callbacks for every field whose value changed between the
    /// two snapshots, in field order, passing the new value. Both snapshots
    /// are complete copies, so observers never see a torn state.
    pub(crate) fn dispatch(&self, previous: &InputState, current: &InputState) {
        if current.left_stick_x != previous.left_stick_x {
            for callback in &self.on_left_stick_x_change {
                callback(current.left_stick_x);
            }
        }
        if current.left_stick_y != previous.left_stick_y {
            for callback in &self.on_left_stick_y_change {
                callback(current.left_stick_y);
            }
        }
        if current.right_stick_x != previous.right_stick_x {
            for callback in &self.on_right_stick_x_change {
                callback(current.right_stick_x);
            }
        }
        if current.right_stick_y != previous.right_stick_y {
            for callback in &self.on_right_stick_y_change {
                callback(current.right_stick_y);
            }
        }
        if current.trigger_left != previous.trigger_left {
            for callback in &self.on_trigger_left_change {
                callback(current.trigger_left);
            }
        }
        if current.trigger_right != previous.trigger_right {
            for callback in &self.on_trigger_right_change {
                callback(current.trigger_right);
            }
        }
        if current.dpad != previous.dpad {
            for callback in &self.on_dpad_change {
                callback(current.dpad);
            }
        }
        if current.button_square != previous.button_square {
            for callback in &self.on_button_square_change {
                callback(current.button_square);
            }
        }
        if current.button_cross != previous.button_cross {
            for callback in &self.on_button_cross_change {
                callback(current.button_cross);
            }
        }
        if current.button_circle != previous.button_circle {
            for callback in &self.on_button_circle_change {
                callback(current.button_circle);
            }
        }
        if current.button_triangle != previous.button_triangle {
            for callback in &self.on_button_triangle_change {
                callback(current.button_triangle);
            }
        }
        if current.button_l1 != previous.button_l1 {
            for callback in &self.on_button_l1_change {
                callback(current.button_l1);
            }
        }
        if current.button_r1 != previous.button_r1 {
            for callback in &self.on_button_r1_change {
                callback(current.button_r1);
            }
        }
        if current.button_l2 != previous.button_l2 {
            for callback in &self.on_button_l2_change {
                callback(current.button_l2);
            }
        }
        if current.button_r2 != previous.button_r2 {
            for callback in &self.on_button_r2_change {
                callback(current.button_r2);
            }
        }
        if current.button_create != previous.button_create {
            for callback in &self.on_button_create_change {
                callback(current.button_create);
            }
        }
        if current.button_options != previous.button_options {
            for callback in &self.on_button_options_change {
                callback(current.button_options);
            }
        }
        if current.button_l3 != previous.button_l3 {
            for callback in &self.on_button_l3_change {
                callback(current.button_l3);
            }
        }
        if current.button_r3 != previous.button_r3 {
            for callback in &self.on_button_r3_change {
                callback(current.button_r3);
            }
        }
        if current.button_home != previous.button_home {
            for callback in &self.on_button_home_change {
                callback(current.button_home);
            }
        }
        if current.button_pad != previous.button_pad {
            for callback in &self.on_button_pad_change {
                callback(current.button_pad);
            }
        }
        if current.button_mute != previous.button_mute {
            for callback in &self.on_button_mute_change {
                callback(current.button_mute);
            }
        }
        if current.button_left_function != previous.button_left_function {
            for callback in &self.on_button_left_function_change {
                callback(current.button_left_function);
            }
        }
        if current.button_right_function != previous.button_right_function {
            for callback in &self.on_button_right_function_change {
                callback(current.button_right_function);
            }
        }
        if current.button_left_paddle != previous.button_left_paddle {
            for callback in &self.on_button_left_paddle_change {
                callback(current.button_left_paddle);
            }
        }
        if current.button_right_paddle != previous.button_right_paddle {
            for callback in &self.on_button_right_paddle_change {
                callback(current.button_right_paddle);
            }
        }
        if current.angular_velocity_x != previous.angular_velocity_x {
            for callback in &self.on_angular_velocity_x_change {
                callback(current.angular_velocity_x);
            }
        }
        if current.angular_velocity_z != previous.angular_velocity_z {
            for callback in &self.on_angular_velocity_z_change {
                callback(current.angular_velocity_z);
            }
        }
        if current.angular_velocity_y != previous.angular_velocity_y {
            for callback in &self.on_angular_velocity_y_change {
                callback(current.angular_velocity_y);
            }
        }
        if current.accelerometer_x != previous.accelerometer_x {
            for callback in &self.on_accelerometer_x_change {
                callback(current.accelerometer_x);
            }
        }
        if current.accelerometer_y != previous.accelerometer_y {
            for callback in &self.on_accelerometer_y_change {
                callback(current.accelerometer_y);
            }
        }
        if current.accelerometer_z != previous.accelerometer_z {
            for callback in &self.on_accelerometer_z_change {
                callback(current.accelerometer_z);
            }
        }
        if current.temperature != previous.temperature {
            for callback in &self.on_temperature_change {
                callback(current.temperature);
            }
        }
        if current.touch_finger_1 != previous.touch_finger_1 {
            for callback in &self.on_touch_finger_1_change {
                callback(current.touch_finger_1);
            }
        }
        if current.touch_finger_2 != previous.touch_finger_2 {
            for callback in &self.on_touch_finger_2_change {
                callback(current.touch_finger_2);
            }
        }
        if current.trigger_right_stop_location != previous.trigger_right_stop_location {
            for callback in &self.on_trigger_right_stop_location_change {
                callback(current.trigger_right_stop_location);
            }
        }
        if current.trigger_right_status != previous.trigger_right_status {
            for callback in &self.on_trigger_right_status_change {
                callback(current.trigger_right_status);
            }
        }
        if current.trigger_left_stop_location != previous.trigger_left_stop_location {
            for callback in &self.on_trigger_left_stop_location_change {
                callback(current.trigger_left_stop_location);
            }
        }
        if current.trigger_left_status != previous.trigger_left_status {
            for callback in &self.on_trigger_left_status_change {
                callback(current.trigger_left_status);
            }
        }
        if current.trigger_right_effect != previous.trigger_right_effect {
            for callback in &self.on_trigger_right_effect_change {
                callback(current.trigger_right_effect);
            }
        }
        if current.trigger_left_effect != previous.trigger_left_effect {
            for callback in &self.on_trigger_left_effect_change {
                callback(current.trigger_left_effect);
            }
        }
        if current.power_percent != previous.power_percent {
            for callback in &self.on_power_percent_change {
                callback(current.power_percent);
            }
        }
        if current.power_state != previous.power_state {
            for callback in &self.on_power_state_change {
                callback(current.power_state);
            }
        }
        if current.plugged_headphones != previous.plugged_headphones {
            for callback in &self.on_plugged_headphones_change {
                callback(current.plugged_headphones);
            }
        }
        if current.plugged_mic != previous.plugged_mic {
            for callback in &self.on_plugged_mic_change {
                callback(current.plugged_mic);
            }
        }
        if current.mic_muted != previous.mic_muted {
            for callback in &self.on_mic_muted_change {
                callback(current.mic_muted);
            }
        }
        if current.plugged_usb_data != previous.plugged_usb_data {
            for callback in &self.on_plugged_usb_data_change {
                callback(current.plugged_usb_data);
            }
        }
        if current.plugged_external_mic != previous.plugged_external_mic {
            for callback in &self.on_plugged_external_mic_change {
                callback(current.plugged_external_mic);
            }
        }
        if current.haptic_low_pass_filter != previous.haptic_low_pass_filter {
            for callback in &self.on_haptic_low_pass_filter_change {
                callback(current.haptic_low_pass_filter);
            }
        }
    }
}

impl DualSense {
    pub fn on_left_stick_x_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_left_stick_x_change
            .push(Box::new(callback));
    }

    pub fn on_left_stick_y_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_left_stick_y_change
            .push(Box::new(callback));
    }

    pub fn on_right_stick_x_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_right_stick_x_change
            .push(Box::new(callback));
    }

    pub fn on_right_stick_y_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_right_stick_y_change
            .push(Box::new(callback));
    }

    pub fn on_trigger_left_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_trigger_left_change
            .push(Box::new(callback));
    }

    pub fn on_trigger_right_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_trigger_right_change
            .push(Box::new(callback));
    }

    /// The D-Pad reports one of nine directions; diagonal presses arrive as
    /// a single combined value, not as two events.
    pub fn on_dpad_change<F>(&self, callback: F)
    where
        F: Fn(Direction) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_dpad_change
            .push(Box::new(callback));
    }

    pub fn on_button_square_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_square_change
            .push(Box::new(callback));
    }

    pub fn on_button_cross_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_cross_change
            .push(Box::new(callback));
    }

    pub fn on_button_circle_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_circle_change
            .push(Box::new(callback));
    }

    pub fn on_button_triangle_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_triangle_change
            .push(Box::new(callback));
    }

    pub fn on_button_l1_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_l1_change
            .push(Box::new(callback));
    }

    pub fn on_button_r1_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_r1_change
            .push(Box::new(callback));
    }

    pub fn on_button_l2_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_l2_change
            .push(Box::new(callback));
    }

    pub fn on_button_r2_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_r2_change
            .push(Box::new(callback));
    }

    pub fn on_button_create_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_create_change
            .push(Box::new(callback));
    }

    pub fn on_button_options_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_options_change
            .push(Box::new(callback));
    }

    pub fn on_button_l3_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_l3_change
            .push(Box::new(callback));
    }

    pub fn on_button_r3_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_r3_change
            .push(Box::new(callback));
    }

    pub fn on_button_home_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_home_change
            .push(Box::new(callback));
    }

    pub fn on_button_pad_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_pad_change
            .push(Box::new(callback));
    }

    pub fn on_button_mute_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_mute_change
            .push(Box::new(callback));
    }

    /// DualSense Edge only.
    pub fn on_button_left_function_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_left_function_change
            .push(Box::new(callback));
    }

    /// DualSense Edge only.
    pub fn on_button_right_function_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_right_function_change
            .push(Box::new(callback));
    }

    /// DualSense Edge only.
    pub fn on_button_left_paddle_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_left_paddle_change
            .push(Box::new(callback));
    }

    /// DualSense Edge only.
    pub fn on_button_right_paddle_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_button_right_paddle_change
            .push(Box::new(callback));
    }

    pub fn on_angular_velocity_x_change<F>(&self, callback: F)
    where
        F: Fn(i16) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_angular_velocity_x_change
            .push(Box::new(callback));
    }

    pub fn on_angular_velocity_z_change<F>(&self, callback: F)
    where
        F: Fn(i16) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_angular_velocity_z_change
            .push(Box::new(callback));
    }

    pub fn on_angular_velocity_y_change<F>(&self, callback: F)
    where
        F: Fn(i16) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_angular_velocity_y_change
            .push(Box::new(callback));
    }

    pub fn on_accelerometer_x_change<F>(&self, callback: F)
    where
        F: Fn(i16) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_accelerometer_x_change
            .push(Box::new(callback));
    }

    pub fn on_accelerometer_y_change<F>(&self, callback: F)
    where
        F: Fn(i16) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_accelerometer_y_change
            .push(Box::new(callback));
    }

    pub fn on_accelerometer_z_change<F>(&self, callback: F)
    where
        F: Fn(i16) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_accelerometer_z_change
            .push(Box::new(callback));
    }

    pub fn on_temperature_change<F>(&self, callback: F)
    where
        F: Fn(i8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_temperature_change
            .push(Box::new(callback));
    }

    /// Fires when any part of the first touch point changes: position,
    /// contact or slot index.
    pub fn on_touch_finger_1_change<F>(&self, callback: F)
    where
        F: Fn(TouchFinger) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_touch_finger_1_change
            .push(Box::new(callback));
    }

    /// Fires when any part of the second touch point changes: position,
    /// contact or slot index.
    pub fn on_touch_finger_2_change<F>(&self, callback: F)
    where
        F: Fn(TouchFinger) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_touch_finger_2_change
            .push(Box::new(callback));
    }

    pub fn on_trigger_right_stop_location_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_trigger_right_stop_location_change
            .push(Box::new(callback));
    }

    pub fn on_trigger_right_status_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_trigger_right_status_change
            .push(Box::new(callback));
    }

    pub fn on_trigger_left_stop_location_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_trigger_left_stop_location_change
            .push(Box::new(callback));
    }

    pub fn on_trigger_left_status_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_trigger_left_status_change
            .push(Box::new(callback));
    }

    pub fn on_trigger_right_effect_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_trigger_right_effect_change
            .push(Box::new(callback));
    }

    pub fn on_trigger_left_effect_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_trigger_left_effect_change
            .push(Box::new(callback));
    }

    pub fn on_power_percent_change<F>(&self, callback: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_power_percent_change
            .push(Box::new(callback));
    }

    pub fn on_power_state_change<F>(&self, callback: F)
    where
        F: Fn(PowerState) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_power_state_change
            .push(Box::new(callback));
    }

    pub fn on_plugged_headphones_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_plugged_headphones_change
            .push(Box::new(callback));
    }

    pub fn on_plugged_mic_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_plugged_mic_change
            .push(Box::new(callback));
    }

    pub fn on_mic_muted_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_mic_muted_change
            .push(Box::new(callback));
    }

    pub fn on_plugged_usb_data_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_plugged_usb_data_change
            .push(Box::new(callback));
    }

    pub fn on_plugged_external_mic_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_plugged_external_mic_change
            .push(Box::new(callback));
    }

    pub fn on_haptic_low_pass_filter_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks
            .write()
            .unwrap()
            .on_haptic_low_pass_filter_change
            .push(Box::new(callback));
    }
}
