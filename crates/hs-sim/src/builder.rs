//! Fluent builder for constructing a [`Hospital`].

use std::marker::PhantomData;

use hs_core::HospitalConfig;
use hs_mobility::Mover;
use hs_reception::{LinearScan, ReceptionScheduler, SelectionPolicy};

use crate::{Hospital, NullWorld, SimResult, World};

/// Fluent builder for [`Hospital<M, W, P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default        |
/// |---------------|----------------|
/// | `.world(w)`   | [`NullWorld`]  |
/// | `.policy(p)`  | [`LinearScan`] |
///
/// The mover type `M` is fixed up front because every admitted patient
/// carries one.
///
/// ```rust,ignore
/// let hospital = HospitalBuilder::<TimedMover>::new(config)
///     .world(LedgerWorld::new())
///     .policy(MinHeap)
///     .build()?;
/// ```
pub struct HospitalBuilder<M: Mover, W: World = NullWorld, P: SelectionPolicy = LinearScan> {
    config: HospitalConfig,
    world:  W,
    policy: P,
    _mover: PhantomData<fn() -> M>,
}

impl<M: Mover> HospitalBuilder<M> {
    pub fn new(config: HospitalConfig) -> Self {
        Self {
            config,
            world:  NullWorld,
            policy: LinearScan,
            _mover: PhantomData,
        }
    }
}

impl<M: Mover, W: World, P: SelectionPolicy> HospitalBuilder<M, W, P> {
    /// Report money drops and entity removal into `world`.
    pub fn world<W2: World>(self, world: W2) -> HospitalBuilder<M, W2, P> {
        HospitalBuilder {
            config: self.config,
            world,
            policy: self.policy,
            _mover: PhantomData,
        }
    }

    /// Use `policy` to choose whom the reception serves next.
    pub fn policy<P2: SelectionPolicy>(self, policy: P2) -> HospitalBuilder<M, W, P2> {
        HospitalBuilder {
            config: self.config,
            world:  self.world,
            policy,
            _mover: PhantomData,
        }
    }

    /// Validate the configuration and return an empty hospital.
    pub fn build(self) -> SimResult<Hospital<M, W, P>> {
        self.config.validate()?;
        let reception = ReceptionScheduler::with_policy(&self.config, self.policy);
        Ok(Hospital::new(self.config, reception, self.world))
    }
}
