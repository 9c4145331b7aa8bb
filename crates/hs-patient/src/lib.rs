//! `hs-patient`: the per-patient lifecycle state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`state`]   | `PatientState` (tagged variants), `Posture`                     |
//! | [`effect`]  | `PatientEffect`: side effects a tick asks the hospital to apply |
//! | [`agent`]   | `PatientAgent<M>`: the state machine itself                    |
//! | [`builder`] | `PatientBuilder<M>`: validated admission                       |
//! | [`error`]   | `PatientError`, `PatientResult<T>`                              |
//!
//! # Design notes
//!
//! A patient never touches scheduler or world state directly.  Each call to
//! [`PatientAgent::tick`] returns a `Vec<PatientEffect>` (join the queue,
//! release a room, drop a payment, leave the building) and the hospital
//! applies them in a separate, sequential step.  Inbound events (a seat or
//! room grant, a diagnosis, the orderly arriving) are plain method calls that
//! either succeed or are rejected without changing anything.

pub mod agent;
pub mod builder;
pub mod effect;
pub mod error;
pub mod state;


pub use agent::PatientAgent;
pub use builder::PatientBuilder;
pub use effect::PatientEffect;
pub use error::{PatientError, PatientResult};
pub use state::{PatientState, Posture};
