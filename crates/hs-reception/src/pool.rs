//! Arena-style resource pools.
//!
//! A pool owns a fixed set of handles.  Each handle is either free or held
//! by exactly one patient; only the pool moves it between the two, so a
//! handle can never be double-booked.  Patients keep the bare handle, never
//! a reference into the pool.

use std::collections::{BTreeMap, BTreeSet};

use hs_core::{PatientId, Resource};

use crate::{ReceptionError, ReceptionResult};

/// Anything a [`ResourcePool`] can hand out.
pub trait Handle: Copy + Ord + Into<Resource> {}

impl<T: Copy + Ord + Into<Resource>> Handle for T {}

/// A fixed set of handles with at most one holder each.
#[derive(Debug, Clone)]
pub struct ResourcePool<H: Handle> {
    free: BTreeSet<H>,
    held: BTreeMap<H, PatientId>,
}

impl<H: Handle> ResourcePool<H> {
    /// Create a pool in which every handle starts free.
    pub fn new(handles: impl IntoIterator<Item = H>) -> Self {
        Self {
            free: handles.into_iter().collect(),
            held: BTreeMap::new(),
        }
    }

    /// Hand the lowest free handle to `patient`.
    pub fn acquire(&mut self, patient: PatientId) -> Option<H> {
        let handle = self.free.pop_first()?;
        self.held.insert(handle, patient);
        Some(handle)
    }

    /// Hand a specific handle to `patient`.
    pub fn claim(&mut self, handle: H, patient: PatientId) -> ReceptionResult<()> {
        if let Some(&holder) = self.held.get(&handle) {
            return Err(ReceptionError::AlreadyHeld { resource: handle.into(), holder });
        }
        if !self.free.remove(&handle) {
            return Err(ReceptionError::UnknownResource(handle.into()));
        }
        self.held.insert(handle, patient);
        Ok(())
    }

    /// Return `handle` to the free set, yielding its former holder.
    pub fn release(&mut self, handle: H) -> ReceptionResult<PatientId> {
        match self.held.remove(&handle) {
            Some(holder) => {
                self.free.insert(handle);
                Ok(holder)
            }
            None if self.free.contains(&handle) => Err(ReceptionError::NotHeld(handle.into())),
            None => Err(ReceptionError::UnknownResource(handle.into())),
        }
    }

    #[inline]
    pub fn holder(&self, handle: H) -> Option<PatientId> {
        self.held.get(&handle).copied()
    }

    #[inline]
    pub fn is_free(&self, handle: H) -> bool {
        self.free.contains(&handle)
    }

    #[inline]
    pub fn has_free(&self) -> bool {
        !self.free.is_empty()
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.free.len() + self.held.len()
    }

    /// Free handles in ascending order.
    pub fn free_handles(&self) -> impl Iterator<Item = H> + '_ {
        self.free.iter().copied()
    }

    /// `(handle, holder)` pairs in ascending handle order.
    pub fn holdings(&self) -> impl Iterator<Item = (H, PatientId)> + '_ {
        self.held.iter().map(|(&h, &p)| (h, p))
    }
}
