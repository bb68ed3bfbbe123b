use thiserror::Error;

/// Represents all possible errors talking to a DualSense controller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no controller found ({vid:04x}:{pid:04x})")]
    NotFound { vid: u16, pid: u16 },
    #[error("unable to open controller: {0}")]
    Open(#[source] hidapi::HidError),
    #[error("device I/O failed: {0}")]
    Io(#[from] hidapi::HidError),
    #[error("short input report: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },
    #[error("unable to encode or decode report: {0}")]
    Codec(#[from] packed_struct::PackingError),
}
