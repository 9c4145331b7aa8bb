//! Side effects a patient asks the hospital to apply.

use hs_core::{Resource, Waypoint};

/// One side effect produced by [`PatientAgent::tick`][crate::PatientAgent::tick].
///
/// Effects are applied by the hospital in the order they were produced,
/// after the patient's tick returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientEffect {
    /// Register with the reception's arrival queue.
    JoinQueue,

    /// Leave the arrival queue or the waiting-room roster.  The reception
    /// returns the patient's seat, if it had one.
    LeaveQueue,

    /// Return a room or operating room to the reception's pool.
    Release(Resource),

    /// Leave money behind at `at` (discharge or completed operation).
    DropPayment { at: Waypoint },

    /// Reached the exit; the entity can be destroyed at end of tick.
    Exited,
}
