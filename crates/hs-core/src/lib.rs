//! `hs-core`: foundational types for the `hospital_sim` workspace.
//!
//! This crate is a dependency of every other `hs-*` crate.  It has no `hs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `PatientId`, `SeatId`, `RoomId`, `OperatingRoomId`, `ExitId` |
//! | [`site`]        | `Waypoint`, `Resource`, `Diagnosis`                        |
//! | [`time`]        | `Tick`, `SimClock`                                         |
//! | [`config`]      | `HospitalConfig`                                           |
//! | [`rng`]         | `PatientRng` (per-patient), `SimRng` (global)              |
//! | [`error`]       | `HsError`, `HsResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod site;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::HospitalConfig;
pub use error::{HsError, HsResult};
pub use ids::{ExitId, OperatingRoomId, PatientId, RoomId, SeatId};
pub use rng::{PatientRng, SimRng};
pub use site::{Diagnosis, Resource, Waypoint};
pub use time::{SimClock, Tick};
