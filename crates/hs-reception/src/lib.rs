//! `hs-reception`: the receptionist that hands out seats and rooms.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`pool`]      | `ResourcePool<H>`: arena of handles with exclusive holders  |
//! | [`selection`] | `SelectionPolicy` trait, `LinearScan`, `MinHeap`, `Candidate` |
//! | [`scheduler`] | `ReceptionScheduler<P>`, `Assignment`, `Grant`, `Duty`       |
//! | [`error`]     | `ReceptionError`, `ReceptionResult<T>`                       |
//!
//! # Scheduling rule (summary)
//!
//! ```text
//! each tick, while at the desk:
//!   room free && anyone waiting   → least-patient of (desk ∪ waiting room)
//!                                     waiting room → gets the room
//!                                     desk         → gets a seat, else the room
//!   no room, desk non-empty       → least-patient desk patient gets a seat
//!   otherwise                     → idle
//! ties on patience go to the lower arrival ticket (first come, first served)
//! ```
//!
//! The scheduler never holds references to patients.  It knows them by
//! `PatientId`, reads their patience through a caller-supplied lookup, and
//! reports its decision as an [`Assignment`] for the caller to deliver.

pub mod error;
pub mod pool;
pub mod scheduler;
pub mod selection;

#[cfg(test)]
mod tests;

pub use error::{ReceptionError, ReceptionResult};
pub use pool::{Handle, ResourcePool};
pub use scheduler::{Assignment, Duty, Grant, ReceptionScheduler, Ticket};
pub use selection::{Candidate, LinearScan, MinHeap, Origin, SelectionPolicy};
