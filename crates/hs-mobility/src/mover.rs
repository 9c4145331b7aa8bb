//! The `Mover` trait: the only view the simulation core has of movement.

use hs_core::Waypoint;

/// Movement capability owned by one patient.
///
/// Implement this trait to plug a navigation system into the simulation.
/// The core only ever names a target and polls for arrival; it never reads
/// positions.
///
/// # Contract
///
/// - `move_to` must be safely re-callable with the same target: repeating
///   it must not restart or otherwise disturb a journey already under way.
/// - `has_arrived(target)` is true only once the mover is at `target` and no
///   path computation is pending.  A geometric implementation would use a
///   proximity threshold (the reference layout used 0.5 units).
/// - Issuing a new target supersedes the previous one; there is no separate
///   cancellation call.
pub trait Mover {
    /// Head for `target`.
    fn move_to(&mut self, target: Waypoint);

    /// `true` once the mover stands at `target`.
    fn has_arrived(&self, target: Waypoint) -> bool;

    /// Halt in place (the patient sat down or lay on a gurney).
    ///
    /// Default: no-op, for movers that stop on their own at the target.
    fn stop(&mut self) {}

    /// Advance internal movement by `dt_secs` of simulated time.
    ///
    /// Called by the hospital once per tick before any patient is evaluated.
    /// Default: no-op, for movers driven by an external engine.
    fn advance(&mut self, _dt_secs: f64) {}
}

impl<M: Mover + ?Sized> Mover for Box<M> {
    fn move_to(&mut self, target: Waypoint) {
        (**self).move_to(target)
    }

    fn has_arrived(&self, target: Waypoint) -> bool {
        (**self).has_arrived(target)
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn advance(&mut self, dt_secs: f64) {
        (**self).advance(dt_secs)
    }
}
