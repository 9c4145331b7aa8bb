//! The receptionist.

use std::collections::VecDeque;

use log::{debug, warn};

use hs_core::{HospitalConfig, OperatingRoomId, PatientId, Resource, RoomId, SeatId};

use crate::{
    Candidate, LinearScan, Origin, ReceptionError, ReceptionResult, ResourcePool, SelectionPolicy,
};

/// A patient's place in the arrival order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Ticket {
    pub patient: PatientId,
    /// Monotonic per scheduler; lower arrived earlier.
    pub number:  u64,
}

/// What the receptionist handed out.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Grant {
    Seat(SeatId),
    Room(RoomId),
}

impl Grant {
    pub fn resource(self) -> Resource {
        match self {
            Grant::Seat(seat) => Resource::Seat(seat),
            Grant::Room(room) => Resource::Room(room),
        }
    }
}

/// One scheduling decision, to be delivered to `patient` by the caller.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Assignment {
    pub patient: PatientId,
    pub grant:   Grant,
}

/// Whether the receptionist is at the desk.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Duty {
    AtPost,
    /// Walking back from the waiting room after calling a patient.
    Away { remaining_secs: f64 },
}

/// Assigns waiting-room seats and consultation rooms, and keeps the pools
/// for seats, rooms and operating rooms.
///
/// Patients are known only by `PatientId`.  Each patient is in at most one
/// of the arrival queue and the waiting-room roster.
pub struct ReceptionScheduler<P: SelectionPolicy = LinearScan> {
    arrival_queue:    VecDeque<Ticket>,
    /// Patients holding a seat, with the ticket they arrived with.
    waiting_room:     Vec<(Ticket, SeatId)>,
    seats:            ResourcePool<SeatId>,
    rooms:            ResourcePool<RoomId>,
    operating_rooms:  ResourcePool<OperatingRoomId>,
    next_ticket:      u64,
    /// The assignment made by the latest pass and the ticket it consumed.
    issued:           Option<(Assignment, Ticket)>,
    duty:             Duty,
    notify_walk_secs: f64,
    policy:           P,
}

impl ReceptionScheduler<LinearScan> {
    /// Scheduler sized from `config` using the linear-scan policy.
    pub fn from_config(config: &HospitalConfig) -> Self {
        Self::with_policy(config, LinearScan)
    }
}

impl<P: SelectionPolicy> ReceptionScheduler<P> {
    pub fn with_policy(config: &HospitalConfig, policy: P) -> Self {
        Self {
            arrival_queue:    VecDeque::new(),
            waiting_room:     Vec::new(),
            seats:            ResourcePool::new((0..config.waiting_seats).map(SeatId)),
            rooms:            ResourcePool::new((0..config.consultation_rooms).map(RoomId)),
            operating_rooms:  ResourcePool::new((0..config.operating_rooms).map(OperatingRoomId)),
            next_ticket:      0,
            issued:           None,
            duty:             Duty::AtPost,
            notify_walk_secs: config.notify_walk_secs.max(0.0),
            policy,
        }
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Put `patient` at the back of the arrival queue.  Returns its ticket.
    pub fn enqueue(&mut self, patient: PatientId) -> ReceptionResult<Ticket> {
        if self.is_registered(patient) {
            return Err(ReceptionError::AlreadyRegistered(patient));
        }
        let ticket = Ticket { patient, number: self.next_ticket };
        self.next_ticket += 1;
        self.arrival_queue.push_back(ticket);
        debug!("{patient}: joined the desk queue (ticket {})", ticket.number);
        Ok(ticket)
    }

    /// Remove `patient` from the queue or the waiting room, returning its
    /// seat to the pool.  Yields the seat it held, if any.
    pub fn withdraw(&mut self, patient: PatientId) -> ReceptionResult<Option<SeatId>> {
        if let Some(i) = self.arrival_queue.iter().position(|t| t.patient == patient) {
            self.arrival_queue.remove(i);
            debug!("{patient}: left the desk queue");
            return Ok(None);
        }
        if let Some(i) = self.waiting_room.iter().position(|(t, _)| t.patient == patient) {
            let (_, seat) = self.waiting_room.remove(i);
            self.seats.release(seat)?;
            debug!("{patient}: left the waiting room, seat {seat} free");
            return Ok(Some(seat));
        }
        Err(ReceptionError::NotRegistered(patient))
    }

    /// Return a room or operating room to its pool.  Yields its former holder.
    ///
    /// Seats come back through [`withdraw`][Self::withdraw] or promotion, so
    /// releasing one here also drops its holder from the waiting room.
    pub fn release(&mut self, resource: Resource) -> ReceptionResult<PatientId> {
        let holder = match resource {
            Resource::Seat(seat) => {
                let holder = self.seats.release(seat)?;
                self.waiting_room.retain(|(_, s)| *s != seat);
                holder
            }
            Resource::Room(room) => self.rooms.release(room)?,
            Resource::OperatingRoom(or) => self.operating_rooms.release(or)?,
        };
        debug!("{resource} released by {holder}");
        Ok(holder)
    }

    /// Take back the assignment made by the latest pass, which the patient
    /// refused.
    ///
    /// The seat or room returns to its pool and the patient rejoins the desk
    /// queue under its original ticket, keeping its place in arrival order.
    pub fn refuse(&mut self, assignment: Assignment) -> ReceptionResult<Ticket> {
        let Assignment { patient, grant } = assignment;
        let ticket = match self.issued.take() {
            Some((issued, ticket)) if issued == assignment => ticket,
            other => {
                self.issued = other;
                return Err(ReceptionError::NotIssued { patient, resource: grant.resource() });
            }
        };
        match grant {
            Grant::Seat(seat) => {
                self.waiting_room.retain(|(t, _)| t.patient != patient);
                self.seats.release(seat)?;
            }
            Grant::Room(room) => {
                self.rooms.release(room)?;
            }
        }
        let at = self
            .arrival_queue
            .iter()
            .position(|t| t.number > ticket.number)
            .unwrap_or(self.arrival_queue.len());
        self.arrival_queue.insert(at, ticket);
        debug!("{patient}: refused {}, back at the desk (ticket {})", grant.resource(), ticket.number);
        Ok(ticket)
    }

    /// Reserve a specific operating room for `patient`.
    pub fn claim_operating_room(
        &mut self,
        operating_room: OperatingRoomId,
        patient: PatientId,
    ) -> ReceptionResult<()> {
        self.operating_rooms.claim(operating_room, patient)?;
        debug!("{operating_room} reserved for {patient}");
        Ok(())
    }

    /// Reserve the lowest free operating room for `patient`.
    pub fn acquire_operating_room(&mut self, patient: PatientId) -> Option<OperatingRoomId> {
        let or = self.operating_rooms.acquire(patient)?;
        debug!("{or} reserved for {patient}");
        Some(or)
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Run one scheduling pass covering `dt_secs`.
    ///
    /// `patience` looks up a registered patient's current patience.  An ID
    /// it cannot resolve is dropped from reception (returning its seat).
    /// At most one assignment is made per call.
    pub fn tick<F>(&mut self, dt_secs: f64, patience: F) -> Option<Assignment>
    where
        F: Fn(PatientId) -> Option<f64>,
    {
        self.issued = None;
        if let Duty::Away { remaining_secs } = &mut self.duty {
            *remaining_secs -= dt_secs;
            if *remaining_secs > 0.0 {
                return None;
            }
            self.duty = Duty::AtPost;
            debug!("receptionist back at the desk");
        }

        self.forget_unknown(&patience);

        if self.rooms.has_free() && self.has_waiting() {
            let candidates = self.candidates(&patience, true);
            let chosen = self.policy.select(&candidates)?;
            match chosen.origin {
                Origin::WaitingRoom(seat) => self.promote(chosen.patient, seat),
                Origin::Desk => self.admit_from_desk(chosen.patient),
            }
        } else if !self.arrival_queue.is_empty() && self.seats.has_free() {
            let candidates = self.candidates(&patience, false);
            let chosen = self.policy.select(&candidates)?;
            let seat = self.seats.acquire(chosen.patient)?;
            self.take_from_desk(chosen.patient, seat)
        } else {
            None
        }
    }

    /// Desk patient wins: a seat if one is free, otherwise the room.
    fn admit_from_desk(&mut self, patient: PatientId) -> Option<Assignment> {
        if let Some(seat) = self.seats.acquire(patient) {
            return self.take_from_desk(patient, seat);
        }
        let room = self.rooms.acquire(patient)?;
        let ticket = self.leave_desk(patient)?;
        debug!("{patient}: sent from the desk straight to {room}");
        Some(self.issue(Assignment { patient, grant: Grant::Room(room) }, ticket))
    }

    fn take_from_desk(&mut self, patient: PatientId, seat: SeatId) -> Option<Assignment> {
        let ticket = self.leave_desk(patient)?;
        self.waiting_room.push((ticket, seat));
        debug!("{patient}: seated at {seat}");
        Some(self.issue(Assignment { patient, grant: Grant::Seat(seat) }, ticket))
    }

    fn leave_desk(&mut self, patient: PatientId) -> Option<Ticket> {
        let i = self.arrival_queue.iter().position(|t| t.patient == patient)?;
        self.arrival_queue.remove(i)
    }

    fn issue(&mut self, assignment: Assignment, ticket: Ticket) -> Assignment {
        self.issued = Some((assignment, ticket));
        assignment
    }

    /// Waiting-room patient wins: the seat goes back, the room is granted,
    /// and the receptionist walks over to call them.
    fn promote(&mut self, patient: PatientId, seat: SeatId) -> Option<Assignment> {
        let i = self.waiting_room.iter().position(|(t, _)| t.patient == patient)?;
        let room = self.rooms.acquire(patient)?;
        let (ticket, _) = self.waiting_room.remove(i);
        if let Err(e) = self.seats.release(seat) {
            warn!("{patient}: seat bookkeeping out of step on promotion: {e}");
        }
        if self.notify_walk_secs > 0.0 {
            self.duty = Duty::Away { remaining_secs: self.notify_walk_secs };
        }
        debug!("{patient}: called from {seat} to {room}");
        Some(self.issue(Assignment { patient, grant: Grant::Room(room) }, ticket))
    }

    fn candidates<F>(&self, patience: &F, include_waiting_room: bool) -> Vec<Candidate>
    where
        F: Fn(PatientId) -> Option<f64>,
    {
        let desk = self.arrival_queue.iter().filter_map(|t| {
            Some(Candidate {
                patient:  t.patient,
                patience: patience(t.patient)?,
                ticket:   t.number,
                origin:   Origin::Desk,
            })
        });
        let seated = self
            .waiting_room
            .iter()
            .filter(|_| include_waiting_room)
            .filter_map(|&(t, seat)| {
                Some(Candidate {
                    patient:  t.patient,
                    patience: patience(t.patient)?,
                    ticket:   t.number,
                    origin:   Origin::WaitingRoom(seat),
                })
            });
        desk.chain(seated).collect()
    }

    fn forget_unknown<F>(&mut self, patience: &F)
    where
        F: Fn(PatientId) -> Option<f64>,
    {
        self.arrival_queue.retain(|t| {
            let known = patience(t.patient).is_some();
            if !known {
                warn!("{}: unknown at the desk, dropped from the queue", t.patient);
            }
            known
        });
        let seats = &mut self.seats;
        self.waiting_room.retain(|&(t, seat)| {
            if patience(t.patient).is_some() {
                return true;
            }
            warn!("{}: unknown in the waiting room, freeing {seat}", t.patient);
            let _ = seats.release(seat);
            false
        });
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn duty(&self) -> Duty {
        self.duty
    }

    #[inline]
    pub fn is_at_post(&self) -> bool {
        self.duty == Duty::AtPost
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.arrival_queue.len()
    }

    #[inline]
    pub fn waiting_room_len(&self) -> usize {
        self.waiting_room.len()
    }

    #[inline]
    pub fn has_waiting(&self) -> bool {
        !self.arrival_queue.is_empty() || !self.waiting_room.is_empty()
    }

    /// Desk queue in arrival order.
    pub fn queued(&self) -> impl Iterator<Item = PatientId> + '_ {
        self.arrival_queue.iter().map(|t| t.patient)
    }

    /// Waiting-room roster in the order patients were seated.
    pub fn seated(&self) -> impl Iterator<Item = (PatientId, SeatId)> + '_ {
        self.waiting_room.iter().map(|&(t, seat)| (t.patient, seat))
    }

    pub fn is_registered(&self, patient: PatientId) -> bool {
        self.arrival_queue.iter().any(|t| t.patient == patient)
            || self.waiting_room.iter().any(|(t, _)| t.patient == patient)
    }

    #[inline]
    pub fn seats(&self) -> &ResourcePool<SeatId> {
        &self.seats
    }

    #[inline]
    pub fn rooms(&self) -> &ResourcePool<RoomId> {
        &self.rooms
    }

    #[inline]
    pub fn operating_rooms(&self) -> &ResourcePool<OperatingRoomId> {
        &self.operating_rooms
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }
}
