//! # mochi-telemetry
//!
//! Structured events emitted by the solver, delivered over a lightweight
//! mpsc bus to pluggable sinks. Telemetry is observational only: the
//! solver behaves identically with the bus disabled or absent.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
