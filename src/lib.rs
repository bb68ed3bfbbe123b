//! User-space library for the Sony DualSense controller over USB HID.
//!
//! The controller is polled on a background task: each 64-byte input report
//! is decoded into an [InputState] snapshot, diffed against the previous
//! snapshot, and per-field change callbacks fire with the new values. The
//! outbound 48-byte output report is managed through per-field setters that
//! skip the write when the requested value matches the cached [OutputState].
//!
//! ```no_run
//! use dualsense::DualSense;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dualsense::Error> {
//!     let mut controller = DualSense::open()?;
//!     controller.on_button_cross_change(|pressed| {
//!         log::info!("Cross button: {pressed}");
//!     });
//!     controller.start(None)?;
//!     controller.set_led_color(0x00, 0x40, 0xFF)?;
//!     tokio::time::sleep(std::time::Duration::from_secs(60)).await;
//!     controller.close();
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod hid_report;
pub mod state;

mod observers;
mod setters;

#[cfg(test)]
mod controller_test;
#[cfg(test)]
mod hid_report_test;

pub use config::Config;
pub use controller::DualSense;
pub use error::Error;
pub use hid_report::{
    trigger_effect_params, Direction, LightBrightness, LightFadeAnimation, MicSelect,
    MuteLightMode, PowerState, TriggerEffectType,
};
pub use state::{InputState, OutputState, TouchFinger};
