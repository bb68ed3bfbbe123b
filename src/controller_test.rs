use std::collections::VecDeque;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use packed_struct::PackedStruct;

use crate::config::Config;
use crate::controller::DualSense;
use crate::driver::{HidInterface, INPUT_REPORT_USB, INPUT_REPORT_USB_SIZE};
use crate::hid_report::{Direction, MuteLightMode, PackedOutputDataReport};
use crate::state::OutputState;

/// One scripted poll-loop read. An exhausted script reads as a timeout.
enum ReadStep {
    Report([u8; INPUT_REPORT_USB_SIZE]),
    Short(usize),
}

/// Scripted stand-in for the HID transport.
#[derive(Default)]
struct MockDevice {
    reads: Mutex<VecDeque<ReadStep>>,
    writes: Mutex<Vec<Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MockDevice {
    fn new(reads: Vec<ReadStep>) -> Self {
        Self {
            reads: Mutex::new(reads.into()),
            ..Default::default()
        }
    }

    fn written(&self) -> Vec<Vec<u8>> {
        self.writes.lock().unwrap().clone()
    }
}

impl HidInterface for MockDevice {
    fn read_timeout(&self, buf: &mut [u8], _timeout_ms: i32) -> Result<usize, crate::Error> {
        match self.reads.lock().unwrap().pop_front() {
            Some(ReadStep::Report(report)) => {
                buf[..report.len()].copy_from_slice(&report);
                Ok(report.len())
            }
            Some(ReadStep::Short(len)) => Ok(len),
            None => Ok(0),
        }
    }

    fn write(&self, data: &[u8]) -> Result<usize, crate::Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(crate::Error::Io(hidapi::HidError::HidApiError {
                message: "injected write failure".to_string(),
            }));
        }
        self.writes.lock().unwrap().push(data.to_vec());
        Ok(data.len())
    }
}

fn controller_with(reads: Vec<ReadStep>) -> (Arc<MockDevice>, DualSense) {
    let device = Arc::new(MockDevice::new(reads));
    let controller = DualSense::with_device(device.clone(), Config::default());
    (device, controller)
}

fn input_report(dpad_action_buttons: u8) -> ReadStep {
    let mut buf = [0u8; INPUT_REPORT_USB_SIZE];
    buf[0] = INPUT_REPORT_USB;
    buf[8] = dpad_action_buttons;
    ReadStep::Report(buf)
}

fn packed(state: &OutputState) -> Vec<u8> {
    PackedOutputDataReport::from(state).pack().unwrap().to_vec()
}

#[tokio::test]
async fn test_setter_coalesces() -> Result<(), Box<dyn Error>> {
    let (device, controller) = controller_with(Vec::new());

    // The default lightbar is already white, so this must not hit the device
    controller.set_led_red(0xFF)?;
    assert!(device.written().is_empty());

    controller.set_led_red(0x10)?;
    let writes = device.written();
    assert_eq!(writes.len(), 1);

    let expected = OutputState {
        led_red: 0x10,
        ..OutputState::default()
    };
    assert_eq!(writes[0], packed(&expected));
    assert_eq!(controller.output_state().led_red, 0x10);

    controller.set_led_red(0x10)?;
    assert_eq!(device.written().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_combined_setters_write_once() -> Result<(), Box<dyn Error>> {
    let (device, controller) = controller_with(Vec::new());

    controller.set_rumble(0x80, 0x40)?;
    assert_eq!(device.written().len(), 1);
    let output = controller.output_state();
    assert_eq!(output.rumble_emulation_left, 0x80);
    assert_eq!(output.rumble_emulation_right, 0x40);

    controller.set_rumble(0x80, 0x40)?;
    assert_eq!(device.written().len(), 1);

    controller.set_led_color(0xFF, 0xFF, 0xFF)?;
    assert_eq!(device.written().len(), 1, "lightbar already white");
    controller.set_led_color(0x00, 0x20, 0x40)?;
    assert_eq!(device.written().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_failed_write_leaves_cache_unchanged() -> Result<(), Box<dyn Error>> {
    let (device, controller) = controller_with(Vec::new());

    device.fail_writes.store(true, Ordering::SeqCst);
    assert!(controller.set_volume_speaker(0x40).is_err());
    assert_eq!(controller.output_state().volume_speaker, 0x00);

    device.fail_writes.store(false, Ordering::SeqCst);
    controller.set_volume_speaker(0x40)?;
    assert_eq!(controller.output_state().volume_speaker, 0x40);
    assert_eq!(device.written().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_set_state_replaces_whole_configuration() -> Result<(), Box<dyn Error>> {
    let (device, controller) = controller_with(Vec::new());

    controller.set_state(OutputState::default())?;
    assert!(device.written().is_empty(), "unchanged state is coalesced");

    let next = OutputState {
        mute_light: MuteLightMode::Breathing,
        led_blue: 0x00,
        ..OutputState::default()
    };
    controller.set_state(next)?;
    assert_eq!(device.written().len(), 1);
    assert_eq!(controller.output_state(), next);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_start_writes_initial_state() -> Result<(), Box<dyn Error>> {
    let (device, mut controller) = controller_with(Vec::new());

    controller.start(None)?;
    let writes = device.written();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0], packed(&OutputState::default()));

    // A second start must not spawn another poller or rewrite the state
    controller.start(None)?;
    assert_eq!(device.written().len(), 1);

    controller.close();
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_start_writes_custom_initial_state() -> Result<(), Box<dyn Error>> {
    let (device, mut controller) = controller_with(Vec::new());

    let initial = OutputState {
        led_red: 0x00,
        led_green: 0x80,
        ..OutputState::default()
    };
    controller.start(Some(initial))?;
    assert_eq!(device.written()[0], packed(&initial));
    assert_eq!(controller.output_state(), initial);

    controller.close();
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_observers_fire_on_change_only() -> Result<(), Box<dyn Error>> {
    // All-zero snapshot, then Cross pressed with the D-Pad released, then an
    // identical report that must not fire anything.
    let (_device, mut controller) =
        controller_with(vec![input_report(0x00), input_report(0x28), input_report(0x28)]);

    let (cross_tx, cross_rx) = mpsc::channel();
    controller.on_button_cross_change(move |pressed| {
        cross_tx.send(pressed).unwrap();
    });
    let (dpad_tx, dpad_rx) = mpsc::channel();
    controller.on_dpad_change(move |direction| {
        dpad_tx.send(direction).unwrap();
    });

    controller.set_polling_rate(1000);
    controller.start(None)?;

    assert!(cross_rx.recv_timeout(Duration::from_secs(5))?);
    assert_eq!(dpad_rx.recv_timeout(Duration::from_secs(5))?, Direction::None);
    assert!(controller.input_state().button_cross);

    // Give the poll loop time to consume the identical report
    std::thread::sleep(Duration::from_millis(200));
    assert!(cross_rx.try_recv().is_err(), "no event without a change");
    assert!(dpad_rx.try_recv().is_err(), "no event without a change");

    controller.close();
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_short_read_is_skipped() -> Result<(), Box<dyn Error>> {
    let (_device, mut controller) = controller_with(vec![ReadStep::Short(32), input_report(0x28)]);

    let (cross_tx, cross_rx) = mpsc::channel();
    controller.on_button_cross_change(move |pressed| {
        cross_tx.send(pressed).unwrap();
    });

    controller.set_polling_rate(1000);
    controller.start(None)?;

    // The short read is discarded; the following good report still arrives
    assert!(cross_rx.recv_timeout(Duration::from_secs(5))?);

    controller.close();
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_short_read_leaves_snapshot_unchanged() -> Result<(), Box<dyn Error>> {
    let (_device, mut controller) = controller_with(vec![ReadStep::Short(32)]);

    let (tx, rx) = mpsc::channel();
    controller.on_button_cross_change(move |pressed| {
        tx.send(pressed).unwrap();
    });

    controller.set_polling_rate(1000);
    controller.start(None)?;

    std::thread::sleep(Duration::from_millis(200));
    assert!(rx.try_recv().is_err());
    assert_eq!(controller.input_state(), Default::default());

    controller.close();
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_close_stops_polling() -> Result<(), Box<dyn Error>> {
    let (_device, mut controller) = controller_with(Vec::new());

    controller.set_polling_rate(1000);
    controller.start(None)?;
    assert!(controller.is_running());

    controller.close();
    let mut waited = Duration::ZERO;
    while controller.is_running() && waited < Duration::from_secs(2) {
        std::thread::sleep(Duration::from_millis(10));
        waited += Duration::from_millis(10);
    }
    assert!(!controller.is_running());

    // Closing again is a no-op
    controller.close();
    Ok(())
}

#[tokio::test]
async fn test_polling_rate_is_stored_as_interval() -> Result<(), Box<dyn Error>> {
    let (_device, controller) = controller_with(Vec::new());

    controller.set_polling_rate(250);
    assert_eq!(controller.poll_interval_ms.load(Ordering::Relaxed), 4);

    controller.set_polling_rate(20);
    assert_eq!(controller.poll_interval_ms.load(Ordering::Relaxed), 50);

    // A zero rate clamps instead of dividing by zero
    controller.set_polling_rate(0);
    assert_eq!(controller.poll_interval_ms.load(Ordering::Relaxed), 1000);

    Ok(())
}
