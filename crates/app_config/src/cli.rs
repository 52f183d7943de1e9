// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::path::PathBuf;

use clap::Parser;

/// Command-line overrides.  Every flag is optional; an absent flag keeps the value from the
/// configuration file, or the built-in default.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about = "Lennard-Jones molecular dynamics on columnar particle storage", long_about = None)]
pub struct CliArgs {
    /// TOML file with run parameters
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Interaction cutoff radius
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Integration time step
    #[arg(long = "delta-t", visible_alias = "deltaT")]
    pub delta_t: Option<f64>,

    /// Lower corner of the cubic domain box, on every axis
    #[arg(long, visible_alias = "boxMin", allow_negative_numbers = true)]
    pub box_min: Option<f64>,

    /// Upper corner of the cubic domain box, on every axis
    #[arg(long, visible_alias = "boxMax", allow_negative_numbers = true)]
    pub box_max: Option<f64>,

    /// Number of time steps
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Number of owned particles
    #[arg(short = 'n', long, visible_alias = "numParticles")]
    pub num_particles: Option<usize>,

    /// Number of halo particles
    #[arg(long, visible_alias = "numHalos")]
    pub num_halos: Option<usize>,

    /// Lennard-Jones well depth, times 24
    #[arg(long)]
    pub epsilon24: Option<f64>,

    /// Lennard-Jones length scale
    #[arg(long)]
    pub sigma: Option<f64>,

    /// Mass of every particle
    #[arg(long)]
    pub mass: Option<f64>,

    /// Constant force every particle feels, as X,Y,Z
    #[arg(long, value_name = "X,Y,Z", value_delimiter = ',', allow_hyphen_values = true)]
    pub global_force: Option<Vec<f64>>,

    /// Displacement margin before the container is rebuilt
    #[arg(long)]
    pub verlet_skin: Option<f64>,

    /// Seed of the particle placement generator
    #[arg(long)]
    pub seed: Option<u64>,
}

// End of File
