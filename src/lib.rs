// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Driver for a Lennard-Jones particle system.
//!
//! The driver owns everything around the kernels of `ljmd-dynamics`: the [`DirectSum`]
//! container that holds the particles, the population routine in [`setup`], and the
//! [`Simulation`] loop that times each phase of every iteration.

use app_config::{CliArgs, Configuration};
use logging::prelude::*;
use particles::DefaultSpace;

mod container;
mod error;
pub mod setup;
mod simulation;

pub use container::DirectSum;
pub use error::SimulationError;
pub use simulation::{Simulation, Timer, Timings};

pub const APP_NAME: &str = "ljmd";

/// Configures logging, builds and populates the system described by `args`, and runs it.
pub fn start(args: &CliArgs) -> Result<Timings, SimulationError> {
    Logging::new(vec![
        env!("CARGO_PKG_NAME"),
        "app_config",
        "ljmd_dynamics",
        "ljmd_particles",
    ])
    .init()?;

    let config = Configuration::load(args)?;
    log::debug!("{config:?}");

    let mut simulation = Simulation::<DefaultSpace>::new(&config);
    let population = simulation.populate(&config)?;
    log::info!(
        "{APP_NAME}: {} owned and {} halo particles, cutoff {}, time step {}",
        population.owned.end - population.owned.start,
        population.halo.end - population.halo.start,
        config.cutoff,
        config.delta_t,
    );

    let timings = simulation.run(config.iterations)?;
    log::info!(
        "Kinetic energy after {} iterations: {:.6e}",
        config.iterations,
        simulation.kinetic_energy()
    );
    Ok(timings)
}

// End of File
