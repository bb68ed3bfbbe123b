//! Device lifecycle and the background polling loop.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::thread;
use std::time::Duration;

use packed_struct::PackedStruct;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use super::config::Config;
use super::driver::{Driver, HidInterface, INPUT_REPORT_USB_SIZE};
use super::error::Error;
use super::hid_report::{PackedInputDataReport, PackedOutputDataReport};
use super::observers::Callbacks;
use super::state::{InputState, OutputState};

/// Handle to an opened DualSense controller.
///
/// [DualSense::start] launches a background task that continuously reads
/// input reports, keeps the latest decoded snapshot, and invokes the
/// registered change callbacks. The `set_*` methods mutate the cached output
/// configuration and write it to the controller, skipping the write when the
/// value is unchanged.
pub struct DualSense {
    device: Arc<dyn HidInterface>,
    input_state: Arc<RwLock<InputState>>,
    output_state: Arc<Mutex<OutputState>>,
    pub(crate) callbacks: Arc<RwLock<Callbacks>>,
    pub(crate) poll_interval_ms: Arc<AtomicU64>,
    read_timeout_ms: i32,
    stop_tx: Option<mpsc::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl DualSense {
    /// Open the first DualSense controller on the system.
    pub fn open() -> Result<Self, Error> {
        Self::open_with_config(Config::default())
    }

    /// Open the first controller matching the configured vendor/product pair.
    pub fn open_with_config(config: Config) -> Result<Self, Error> {
        let driver = Driver::open(config.vendor_id, config.product_id)?;
        Ok(Self::with_device(Arc::new(driver), config))
    }

    pub(crate) fn with_device(device: Arc<dyn HidInterface>, config: Config) -> Self {
        Self {
            device,
            input_state: Arc::new(RwLock::new(InputState::default())),
            output_state: Arc::new(Mutex::new(OutputState::default())),
            callbacks: Arc::new(RwLock::new(Callbacks::default())),
            poll_interval_ms: Arc::new(AtomicU64::new(config.polling_interval_ms)),
            read_timeout_ms: config.read_timeout_ms,
            stop_tx: None,
            task: None,
        }
    }

    /// Start polling the controller and write the initial output state, the
    /// default one if `initial` is `None`. Must be called from within a tokio
    /// runtime; the poll loop runs on a blocking task until [DualSense::close]
    /// is called or the handle is dropped.
    pub fn start(&mut self, initial: Option<OutputState>) -> Result<(), Error> {
        if self.stop_tx.is_some() {
            log::warn!("Controller is already started");
            return Ok(());
        }

        let (stop_tx, stop_rx) = mpsc::channel(1);
        let device = self.device.clone();
        let input_state = self.input_state.clone();
        let callbacks = self.callbacks.clone();
        let poll_interval_ms = self.poll_interval_ms.clone();
        let read_timeout_ms = self.read_timeout_ms;
        let task = tokio::task::spawn_blocking(move || {
            poll_loop(
                device,
                input_state,
                callbacks,
                poll_interval_ms,
                read_timeout_ms,
                stop_rx,
            );
        });
        self.stop_tx = Some(stop_tx);
        self.task = Some(task);

        // The initial write is unconditional so the controller and the cache
        // agree even when the caller passes the current cached state.
        let mut output = self.output_state.lock().unwrap();
        self.write_output(&mut output, initial.unwrap_or_default())
    }

    /// Stop the polling task. Callbacks for an in-flight snapshot complete
    /// before the task exits. Safe to call more than once.
    pub fn close(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            log::debug!("Stopping controller poll loop");
            let _ = stop_tx.try_send(());
        }
    }

    /// Set the polling rate in hertz. Stored as a sleep of `1000 / rate_hz`
    /// milliseconds and picked up by the poll loop on its next iteration.
    pub fn set_polling_rate(&self, rate_hz: u32) {
        let interval_ms = 1000 / u64::from(rate_hz.max(1));
        self.poll_interval_ms.store(interval_ms, Ordering::Relaxed);
    }

    /// Whether the polling task has been started and is still running.
    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    /// Latest decoded input snapshot, by value.
    pub fn input_state(&self) -> InputState {
        *self.input_state.read().unwrap()
    }

    /// The last output configuration successfully written to the controller.
    pub fn output_state(&self) -> OutputState {
        *self.output_state.lock().unwrap()
    }

    /// Replace the whole output configuration. Like the per-field setters
    /// this skips the write when the controller is already in the requested
    /// state.
    pub fn set_state(&self, state: OutputState) -> Result<(), Error> {
        let mut output = self.output_state.lock().unwrap();
        if *output == state {
            return Ok(());
        }
        self.write_output(&mut output, state)
    }

    /// Pack and write `next`, then update the cache. The caller holds the
    /// output lock for the whole pack + write + cache-update sequence, so
    /// writes are totally ordered and the cache only ever reflects states the
    /// controller acknowledged.
    pub(crate) fn write_output(
        &self,
        output: &mut OutputState,
        next: OutputState,
    ) -> Result<(), Error> {
        let report = PackedOutputDataReport::from(&next);
        let buf = report.pack()?;
        self.device.write(&buf)?;
        *output = next;
        Ok(())
    }

    pub(crate) fn output_lock(&self) -> std::sync::MutexGuard<'_, OutputState> {
        self.output_state.lock().unwrap()
    }
}

impl Drop for DualSense {
    fn drop(&mut self) {
        self.close();
    }
}

/// Read input reports until a stop signal arrives. Timeouts, short reads and
/// undecodable reports leave the snapshot untouched and fire no callbacks.
fn poll_loop(
    device: Arc<dyn HidInterface>,
    input_state: Arc<RwLock<InputState>>,
    callbacks: Arc<RwLock<Callbacks>>,
    poll_interval_ms: Arc<AtomicU64>,
    read_timeout_ms: i32,
    mut stop_rx: mpsc::Receiver<()>,
) {
    log::debug!("Starting poll loop");
    loop {
        match stop_rx.try_recv() {
            Ok(()) => {
                log::debug!("Received stop signal, exiting poll loop");
                break;
            }
            Err(TryRecvError::Disconnected) => {
                log::debug!("Stop channel closed, exiting poll loop");
                break;
            }
            Err(TryRecvError::Empty) => (),
        }

        let mut buf = [0u8; INPUT_REPORT_USB_SIZE];
        match read_report(device.as_ref(), &mut buf, read_timeout_ms) {
            Ok(Some(report)) => {
                let state = InputState::from(report);
                let previous = {
                    let mut guard = input_state.write().unwrap();
                    std::mem::replace(&mut *guard, state)
                };
                callbacks.read().unwrap().dispatch(&previous, &state);
            }
            // Read timed out, nothing to do
            Ok(None) => (),
            Err(err) => {
                log::debug!("Discarding input report: {err}");
            }
        }

        let interval = poll_interval_ms.load(Ordering::Relaxed);
        thread::sleep(Duration::from_millis(interval));
    }
}

/// Read and decode one input report. `Ok(None)` means the read timed out.
fn read_report(
    device: &dyn HidInterface,
    buf: &mut [u8; INPUT_REPORT_USB_SIZE],
    timeout_ms: i32,
) -> Result<Option<PackedInputDataReport>, Error> {
    let bytes_read = device.read_timeout(buf, timeout_ms)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    if bytes_read != INPUT_REPORT_USB_SIZE {
        return Err(Error::ShortRead {
            expected: INPUT_REPORT_USB_SIZE,
            got: bytes_read,
        });
    }
    let report = PackedInputDataReport::unpack(buf)?;
    Ok(Some(report))
}
