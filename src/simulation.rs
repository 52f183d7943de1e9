// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::{
    fmt,
    time::{Duration, Instant},
};

use app_config::Configuration;
use dynamics::{LJFunctor, PairwiseFunctor, ParticleContainer, VelocityVerlet};
use particles::{space::describe, DefaultSpace, IteratorBehavior, MemorySpace};

use crate::{setup, DirectSum, SimulationError};

/// Accumulates the wall time of repeated intervals.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer {
    total: Duration,
    started: Option<Instant>,
}

impl Timer {
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Ends the running interval and returns its length.  Does nothing if no interval is running.
    pub fn stop(&mut self) -> Duration {
        match self.started.take() {
            Some(started) => {
                let elapsed = started.elapsed();
                self.total += elapsed;
                elapsed
            }
            None => Duration::ZERO,
        }
    }

    pub fn total(&self) -> Duration {
        self.total
    }
}

/// Total time spent in each phase of the iteration loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timings {
    pub position_update: Duration,
    pub interactions: Duration,
    pub velocity_update: Duration,
}

impl fmt::Display for Timings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "1. Update: {:?}", self.position_update)?;
        writeln!(f, "2. Update: {:?}", self.interactions)?;
        write!(f, "3. Update: {:?}", self.velocity_update)
    }
}

/// A particle system advanced with velocity Verlet under a pairwise force, Lennard-Jones unless
/// told otherwise.
pub struct Simulation<M: MemorySpace = DefaultSpace, F: PairwiseFunctor<M> = LJFunctor<M>> {
    container: DirectSum<M>,
    functor: F,
    integrator: VelocityVerlet,
    delta_t: f64,
    position_timer: Timer,
    interactions_timer: Timer,
    velocity_timer: Timer,
}

impl<M: MemorySpace> Simulation<M> {
    /// An empty system with the parameters of `config`.
    pub fn new(config: &Configuration) -> Self {
        Self::from_parts(
            DirectSum::new(config.domain(), config.cutoff, config.verlet_skin),
            LJFunctor::with_parameters(config.cutoff, config.epsilon24, config.sigma),
            VelocityVerlet::new(config.global_force()),
            config.delta_t,
        )
    }
}

impl<M: MemorySpace, F: PairwiseFunctor<M>> Simulation<M, F> {
    pub fn from_parts(
        container: DirectSum<M>,
        functor: F,
        integrator: VelocityVerlet,
        delta_t: f64,
    ) -> Self {
        Self {
            container,
            functor,
            integrator,
            delta_t,
            position_timer: Timer::default(),
            interactions_timer: Timer::default(),
            velocity_timer: Timer::default(),
        }
    }

    /// Places the particles described by `config`.
    pub fn populate(&mut self, config: &Configuration) -> Result<setup::Population, SimulationError> {
        Ok(setup::fill_particles(&mut self.container, config)?)
    }

    pub fn container(&self) -> &DirectSum<M> {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut DirectSum<M> {
        &mut self.container
    }

    pub fn functor(&self) -> &F {
        &self.functor
    }

    /// Advances the system by one time step: position update, force evaluation, velocity
    /// update.  `iteration` only labels errors and log lines.
    pub fn step(&mut self, iteration: usize) -> Result<(), SimulationError> {
        self.position_timer.start();
        self.integrator.update_positions(&mut self.container, self.delta_t);
        if self.container.needs_rebuild() {
            log::debug!(
                "Iteration {iteration}: displacement {:.4} exceeds half the skin, rebuilding",
                self.container.max_displacement_since_rebuild()
            );
            self.container.rebuild();
        }
        self.position_timer.stop();

        self.interactions_timer.start();
        let computed = self.container.compute_interactions(&self.functor);
        self.interactions_timer.stop();
        if !computed {
            return Err(SimulationError::Interactions {
                functor: self.functor.name(),
                iteration,
            });
        }

        self.velocity_timer.start();
        self.integrator.update_velocities(&mut self.container, self.delta_t);
        self.velocity_timer.stop();

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Iteration {iteration}: kinetic energy {:.6e}", self.kinetic_energy());
        }
        Ok(())
    }

    /// Runs `iterations` steps and returns the accumulated phase times.
    pub fn run(&mut self, iterations: usize) -> Result<Timings, SimulationError> {
        log::info!(
            "Running {iterations} iterations of {} owned and {} halo particles on {}",
            self.container.num_particles(IteratorBehavior::OWNED),
            self.container.num_particles(IteratorBehavior::HALO),
            describe::<M>(),
        );
        for iteration in 0..iterations {
            self.step(iteration)?;
        }
        let timings = self.timings();
        log::info!(
            "Finished {iterations} iterations: positions {:?}, interactions {:?}, velocities {:?}",
            timings.position_update,
            timings.interactions,
            timings.velocity_update,
        );
        Ok(timings)
    }

    pub fn timings(&self) -> Timings {
        Timings {
            position_update: self.position_timer.total(),
            interactions: self.interactions_timer.total(),
            velocity_update: self.velocity_timer.total(),
        }
    }

    /// Total kinetic energy of the owned particles.
    pub fn kinetic_energy(&self) -> f64 {
        self.container
            .reduce(IteratorBehavior::OWNED, 0.0, |slot| slot.kinetic_energy(), |a, b| a + b)
    }
}


// End of File
