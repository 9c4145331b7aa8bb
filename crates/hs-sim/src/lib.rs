//! `hs-sim`: the hospital tick loop.
//!
//! # One step
//!
//! ```text
//! Hospital::advance(dt):
//!   ① Movers   : every patient's mover burns down `dt` of travel.
//!   ② Patients : ascending PatientId; each pass returns effects that are
//!                 applied immediately, in order:
//!                   JoinQueue / LeaveQueue  → reception enqueue / withdraw
//!                   Release(resource)       → back to the reception's pool
//!                   DropPayment { at }      → World::spawn_money_drop
//!                   Exited                  → marked for removal
//!   ③ Reception: one scheduling pass; the grant is delivered to the patient
//!                 (a rejected grant goes straight back to its pool).
//!   ④ Cleanup  : exited patients are removed and World::destroy_entity is
//!                 called, never while the patient map is being iterated.
//! ```
//!
//! Doctor, orderly and surgeon events arrive between steps through
//! [`Hospital::submit_diagnosis`], [`Hospital::orderly_arrived`] and
//! [`Hospital::operation_completed`]; patients act on them at their next pass.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hs_core::{ExitId, HospitalConfig};
//! use hs_mobility::TimedMover;
//! use hs_patient::PatientBuilder;
//! use hs_sim::{HospitalBuilder, NoopObserver};
//!
//! let mut hospital = HospitalBuilder::<TimedMover>::new(HospitalConfig::default()).build()?;
//! hospital.admit(PatientBuilder::new().mover(TimedMover::uniform(5.0)?).exit(ExitId(0)))?;
//! let stats = hospital.run(&mut NoopObserver)?;
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod hospital;
pub mod observer;
pub mod stats;
pub mod world;


pub use arrivals::{Arrival, ArrivalSchedule};
pub use builder::HospitalBuilder;
pub use error::{SimError, SimResult};
pub use hospital::Hospital;
pub use observer::{HospitalObserver, NoopObserver, Transition};
pub use stats::{HospitalStats, TickSummary};
pub use world::{LedgerWorld, NullWorld, World};
