//! Packet sources: the serial link to the controller, or any buffered reader.

use std::io::{self, BufRead, BufReader};

use log::info;
use serialport::{ClearBuffer, SerialPort};

use crate::config::AcquisitionConfig;
use crate::error::AcquisitionError;

/// Supplies raw newline-terminated packets to the acquisition loop.
pub trait PacketSource {
    /// Read one packet, blocking at most for the source's timeout.
    ///
    /// A timeout is not an error: it yields an empty packet, and any partial
    /// line received before it is dropped.
    fn read_packet(&mut self) -> io::Result<Vec<u8>>;
}

/// Reads packets line by line from any [`BufRead`].
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> PacketSource for ReaderSource<R> {
    fn read_packet(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(_) => Ok(buf),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}

pub type SerialSource = ReaderSource<BufReader<Box<dyn SerialPort>>>;

/// Open the controller's serial port and prepare it for reading.
///
/// Opening resets the board, so this waits for the configured settle delay and
/// then discards whatever the board printed during setup.
pub fn open_serial(cfg: &AcquisitionConfig) -> Result<SerialSource, AcquisitionError> {
    let port = serialport::new(&cfg.port, cfg.baud_rate)
        .timeout(cfg.timeout())
        .open()
        .map_err(|source| AcquisitionError::Open {
            port: cfg.port.clone(),
            source,
        })?;
    info!("Opened {} at {} baud", cfg.port, cfg.baud_rate);

    std::thread::sleep(cfg.settle_delay());
    port.clear(ClearBuffer::Input)?;

    Ok(ReaderSource::new(BufReader::new(port)))
}
