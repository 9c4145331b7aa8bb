//! A mover with a fixed travel time per kind of leg.

use hs_core::Waypoint;

use crate::{MobilityError, MobilityResult, MovementState, Mover};

/// How many simulated seconds it takes to reach each kind of waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTimes {
    pub to_desk:           f64,
    pub to_seat:           f64,
    pub to_room:           f64,
    pub to_operating_room: f64,
    pub to_exit:           f64,
}

impl TravelTimes {
    /// Every leg takes `secs`.
    pub fn uniform(secs: f64) -> Self {
        Self {
            to_desk:           secs,
            to_seat:           secs,
            to_room:           secs,
            to_operating_room: secs,
            to_exit:           secs,
        }
    }

    /// Reject negative or non-finite leg times.
    pub fn validate(&self) -> MobilityResult<()> {
        let legs = [
            ("desk", self.to_desk),
            ("seat", self.to_seat),
            ("room", self.to_room),
            ("operating room", self.to_operating_room),
            ("exit", self.to_exit),
        ];
        for (leg, secs) in legs {
            if !(secs.is_finite() && secs >= 0.0) {
                return Err(MobilityError::InvalidTravelTime { leg, secs });
            }
        }
        Ok(())
    }

    /// Leg time towards `target`.
    pub fn secs_to(&self, target: Waypoint) -> f64 {
        match target {
            Waypoint::ReceptionDesk    => self.to_desk,
            Waypoint::Seat(_)          => self.to_seat,
            Waypoint::Room(_)          => self.to_room,
            Waypoint::OperatingRoom(_) => self.to_operating_room,
            Waypoint::Exit(_)          => self.to_exit,
        }
    }
}

/// Teleport-at-arrival [`Mover`] with per-leg travel times.
///
/// Stands in for a navigation mesh in tests and headless runs.
#[derive(Debug, Clone)]
pub struct TimedMover {
    travel: TravelTimes,
    state:  MovementState,
}

impl TimedMover {
    pub fn new(travel: TravelTimes) -> MobilityResult<Self> {
        travel.validate()?;
        Ok(Self { travel, state: MovementState::at_door() })
    }

    /// Every leg takes `secs`.
    pub fn uniform(secs: f64) -> MobilityResult<Self> {
        Self::new(TravelTimes::uniform(secs))
    }

    #[inline]
    pub fn state(&self) -> &MovementState {
        &self.state
    }
}

impl Mover for TimedMover {
    fn move_to(&mut self, target: Waypoint) {
        if self.state.target == Some(target) {
            return;
        }
        if !self.state.in_transit() && self.state.position == Some(target) {
            return;
        }
        self.state.depart(target, self.travel.secs_to(target));
    }

    fn has_arrived(&self, target: Waypoint) -> bool {
        !self.state.in_transit() && self.state.position == Some(target)
    }

    fn stop(&mut self) {
        self.state.halt();
    }

    fn advance(&mut self, dt_secs: f64) {
        self.state.advance(dt_secs);
    }
}
