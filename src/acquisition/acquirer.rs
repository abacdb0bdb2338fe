use std::time::Instant;

use log::debug;

use crate::acquisition::packet::parse_packet;
use crate::acquisition::source::PacketSource;
use crate::acquisition::tick::TickSource;
use crate::config::DUTY_MAX_COUNT;
use crate::data::sample::Sample;
use crate::data::table::LiveTable;

/// Where the loop is within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionState {
    /// Waiting for the next tick.
    Idle,
    /// A packet was read and is being decoded.
    Parsing,
}

/// Why a tick produced no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The read timed out before a complete line arrived.
    NoData,
    /// Bytes arrived but did not form a valid packet.
    Malformed,
    /// The source reported an I/O error.
    ReadError,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Appended(Sample),
    Discarded(DiscardReason),
}

/// Reads, decodes and records one packet per tick.
///
/// Per-tick failures never escape: they are counted, logged at debug level and
/// the loop returns to [`AcquisitionState::Idle`].
pub struct Acquirer<S> {
    source: S,
    table: LiveTable,
    state: AcquisitionState,
    duty_max_count: f64,
    ticks: u64,
    received: u64,
    discarded: u64,
}

impl<S: PacketSource> Acquirer<S> {
    pub fn new(source: S) -> Self {
        Self::with_duty_max_count(source, DUTY_MAX_COUNT)
    }

    pub fn with_duty_max_count(source: S, duty_max_count: f64) -> Self {
        Self {
            source,
            table: LiveTable::new(),
            state: AcquisitionState::Idle,
            duty_max_count,
            ticks: 0,
            received: 0,
            discarded: 0,
        }
    }

    /// Run one tick: read a packet, try to parse it, append on success.
    ///
    /// Only `\n`-terminated packets are parsed; a line cut short by a timeout is
    /// discarded.
    pub fn tick(&mut self) -> TickOutcome {
        self.state = AcquisitionState::Parsing;
        self.ticks += 1;
        let outcome = match self.source.read_packet() {
            Ok(packet) if packet.is_empty() => TickOutcome::Discarded(DiscardReason::NoData),
            Ok(packet) if !packet.ends_with(b"\n") => {
                debug!("Discarding unterminated packet {:?}", String::from_utf8_lossy(&packet));
                TickOutcome::Discarded(DiscardReason::Malformed)
            }
            Ok(packet) => match parse_packet(&packet, self.duty_max_count) {
                Some(sample) => {
                    self.table.append_row(sample);
                    TickOutcome::Appended(sample)
                }
                None => {
                    debug!("Discarding packet {:?}", String::from_utf8_lossy(&packet));
                    TickOutcome::Discarded(DiscardReason::Malformed)
                }
            },
            Err(e) => {
                debug!("Packet read failed: {e}");
                TickOutcome::Discarded(DiscardReason::ReadError)
            }
        };
        self.state = AcquisitionState::Idle;
        match outcome {
            TickOutcome::Appended(_) => self.received += 1,
            TickOutcome::Discarded(_) => self.discarded += 1,
        }
        outcome
    }

    /// Poll `ticks` once and run a tick if one is due.
    pub fn poll<T: TickSource + ?Sized>(&mut self, ticks: &mut T, now: Instant) -> Option<TickOutcome> {
        ticks.poll(now).then(|| self.tick())
    }

    pub fn state(&self) -> AcquisitionState {
        self.state
    }

    pub fn table(&self) -> &LiveTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut LiveTable {
        &mut self.table
    }

    /// Ticks run so far; each one passed through [`AcquisitionState::Parsing`].
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Packets successfully appended.
    pub fn received(&self) -> u64 {
        self.received
    }

    /// Ticks that produced no row.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}
