//! `hs-mobility`: the movement capability patients depend on.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`mover`]   | `Mover` trait: accept a target, report arrival               |
//! | [`state`]   | `MovementState`: where a mover is and where it is heading    |
//! | [`timed`]   | `TimedMover`, `TravelTimes`: fixed travel time per leg       |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                          |
//!
//! # Movement model (teleport-at-arrival)
//!
//! 1. `Mover::move_to(target)` records the target and how long the leg takes.
//!    Re-issuing the same target while already heading there is a no-op, so
//!    callers may repeat it every tick.
//! 2. The mover logically stays at its departure waypoint while the leg runs.
//! 3. `Mover::advance(dt)` burns down the remaining time; when it reaches
//!    zero the mover is at the target and `has_arrived(target)` turns true.
//!
//! Because the hospital advances movers at the start of a tick and patients
//! issue targets later in the same tick, a mover never arrives in the tick
//! it was given its target.

pub mod error;
pub mod mover;
pub mod state;
pub mod timed;


pub use error::{MobilityError, MobilityResult};
pub use mover::Mover;
pub use state::MovementState;
pub use timed::{TimedMover, TravelTimes};
