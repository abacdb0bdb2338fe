//! Live acquisition from the controller's serial link.
//!
//! A [`TickSource`] paces the loop; on each tick the [`Acquirer`] reads one
//! packet from its [`PacketSource`], decodes it with [`parse_packet`] and appends
//! the sample to its [`LiveTable`](crate::data::table::LiveTable). Rendering is
//! handled separately by [`crate::app`].

mod acquirer;
pub mod packet;
pub mod source;
pub mod tick;

pub use acquirer::{AcquisitionState, Acquirer, DiscardReason, TickOutcome};
pub use packet::{parse_packet, TERMINATOR};
pub use source::{open_serial, PacketSource, ReaderSource, SerialSource};
pub use tick::{IntervalTicker, ManualTicker, TickSource};
