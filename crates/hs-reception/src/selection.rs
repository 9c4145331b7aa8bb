//! Choosing whom to serve next.
//!
//! The scheduler rebuilds its candidate list every tick because every
//! waiting patient's patience moves every tick.  The choice itself sits
//! behind [`SelectionPolicy`] so the plain scan can be swapped for a heap
//! without touching the scheduler; both implementations here agree on the
//! ordering key:
//!
//!   (patience ascending, arrival ticket ascending)

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use hs_core::{PatientId, SeatId};

/// Where a candidate is waiting.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Origin {
    /// In the front-desk queue.
    Desk,
    /// In the waiting room, holding `SeatId`.
    WaitingRoom(SeatId),
}

/// One patient eligible for a seat or a room this tick.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Candidate {
    pub patient:  PatientId,
    pub patience: f64,
    /// Arrival order at the desk; lower is earlier.
    pub ticket:   u64,
    pub origin:   Origin,
}

impl Candidate {
    /// Total priority order: least patience first, then earliest arrival.
    #[inline]
    pub fn priority_cmp(&self, other: &Candidate) -> Ordering {
        self.patience
            .total_cmp(&other.patience)
            .then(self.ticket.cmp(&other.ticket))
    }
}

/// Pick the candidate to serve.
///
/// Implementations must return the minimum under
/// [`Candidate::priority_cmp`], or `None` for an empty slice.
pub trait SelectionPolicy {
    fn select(&self, candidates: &[Candidate]) -> Option<Candidate>;
}

/// Single pass over the candidates.  Fine for the tens of patients a ward
/// holds.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearScan;

impl SelectionPolicy for LinearScan {
    fn select(&self, candidates: &[Candidate]) -> Option<Candidate> {
        candidates.iter().copied().min_by(Candidate::priority_cmp)
    }
}

/// Min-heap keyed on the same order as [`LinearScan`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MinHeap;

/// `Ord` wrapper so candidates can live in a `BinaryHeap`.
struct Keyed(Candidate);

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.priority_cmp(&other.0)
    }
}

impl SelectionPolicy for MinHeap {
    fn select(&self, candidates: &[Candidate]) -> Option<Candidate> {
        let mut heap: BinaryHeap<Reverse<Keyed>> =
            candidates.iter().map(|&c| Reverse(Keyed(c))).collect();
        heap.pop().map(|Reverse(Keyed(c))| c)
    }
}
