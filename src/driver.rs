// Source: https://github.com/torvalds/linux/blob/master/drivers/hid/hid-playstation.c
use hidapi::{HidApi, HidDevice};

use super::error::Error;

pub const DS5_NAME: &str = "Sony Interactive Entertainment DualSense Wireless Controller";
pub const DS5_VID: u16 = 0x054C;
pub const DS5_PID: u16 = 0x0ce6;

pub const INPUT_REPORT_USB: u8 = 0x01;
pub const INPUT_REPORT_USB_SIZE: usize = 64;
pub const OUTPUT_REPORT_USB: u8 = 0x02;
pub const OUTPUT_REPORT_USB_SIZE: usize = 48;

/// How long a single read blocks waiting for an input report.
pub const DEFAULT_READ_TIMEOUT_MS: i32 = 100;
/// How long to sleep between polls, 20Hz.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// The HID transport capability set the rest of the crate depends on. The
/// transport must support concurrent reads and writes on one handle.
pub trait HidInterface: Send + Sync {
    /// Read an input report into `buf`, waiting at most `timeout_ms`.
    /// Returns the number of bytes read; `0` means the read timed out.
    fn read_timeout(&self, buf: &mut [u8], timeout_ms: i32) -> Result<usize, Error>;

    /// Write an output report. Returns the number of bytes written.
    fn write(&self, data: &[u8]) -> Result<usize, Error>;
}

/// hidapi-backed transport for the DualSense USB endpoint.
pub struct Driver {
    device: HidDevice,
}

// SAFETY: `Driver` only exposes `HidDevice` through `&self` methods that map
// directly onto the underlying OS read/write calls; hidapi's backends already
// require `Send`, and the `HidInterface` contract above relies on concurrent
// calls from the poll thread and the caller being safe.
unsafe impl Sync for Driver {}

impl Driver {
    /// Open the first HID endpoint matching the given vendor/product pair and
    /// switch it to blocking mode.
    pub fn open(vid: u16, pid: u16) -> Result<Self, Error> {
        let api = HidApi::new().map_err(Error::Open)?;
        let info = api
            .device_list()
            .find(|info| info.vendor_id() == vid && info.product_id() == pid)
            .ok_or(Error::NotFound { vid, pid })?;
        let device = info.open_device(&api).map_err(Error::Open)?;
        device.set_blocking_mode(true).map_err(Error::Open)?;
        log::debug!(
            "Opened {} ({:04x}:{:04x})",
            info.product_string().unwrap_or(DS5_NAME),
            vid,
            pid
        );

        Ok(Self { device })
    }
}

impl HidInterface for Driver {
    fn read_timeout(&self, buf: &mut [u8], timeout_ms: i32) -> Result<usize, Error> {
        self.device.read_timeout(buf, timeout_ms).map_err(Error::Io)
    }

    fn write(&self, data: &[u8]) -> Result<usize, Error> {
        self.device.write(data).map_err(Error::Io)
    }
}
