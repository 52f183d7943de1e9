// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Run configuration for the simulation driver.
//!
//! A [`Configuration`] is assembled in three layers, later layers winning: the built-in
//! defaults, an optional TOML file named by `--config`, and the individual command-line flags
//! in [`CliArgs`].  The result is validated before it is handed to the driver.
//!
//! ```toml
//! cutoff = 2.5
//! delta_t = 0.002
//! num_particles = 500
//! global_force = [0.0, 0.0, -1.0]
//! ```

mod cli;
mod error;

use std::{fs, path::Path};

use common::BoundingBox;
use glam::DVec3;
use serde::{Deserialize, Serialize};

pub use cli::CliArgs;
pub use error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Interaction cutoff radius.
    pub cutoff: f64,
    /// Integration time step.
    #[serde(alias = "deltaT")]
    pub delta_t: f64,
    /// Lower corner of the cubic domain box.
    #[serde(alias = "boxMin")]
    pub box_min: f64,
    /// Upper corner of the cubic domain box.
    #[serde(alias = "boxMax")]
    pub box_max: f64,
    pub iterations: usize,
    #[serde(alias = "numParticles")]
    pub num_particles: usize,
    #[serde(alias = "numHalos")]
    pub num_halos: usize,
    /// 24 times the Lennard-Jones well depth.
    pub epsilon24: f64,
    pub sigma: f64,
    pub mass: f64,
    #[serde(alias = "globalForce")]
    pub global_force: [f64; 3],
    /// Largest displacement since the last rebuild the container tolerates, relative to the
    /// cutoff shell.
    #[serde(alias = "verletSkin")]
    pub verlet_skin: f64,
    pub seed: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            cutoff: 3.0,
            delta_t: 0.001,
            box_min: 0.0,
            box_max: 10.0,
            iterations: 10,
            num_particles: 1000,
            num_halos: 0,
            epsilon24: 24.0,
            sigma: 1.0,
            mass: 1.0,
            global_force: [0.0; 3],
            verlet_skin: 0.2,
            seed: 42,
        }
    }
}

impl Configuration {
    /// Builds the configuration for a run: defaults, then the file named by `--config`, then
    /// the remaining flags.
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(args)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file.  Parameters the file omits keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Overwrites every parameter that `args` sets.
    pub fn apply(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut self.cutoff, args.cutoff);
        set(&mut self.delta_t, args.delta_t);
        set(&mut self.box_min, args.box_min);
        set(&mut self.box_max, args.box_max);
        set(&mut self.iterations, args.iterations);
        set(&mut self.num_particles, args.num_particles);
        set(&mut self.num_halos, args.num_halos);
        set(&mut self.epsilon24, args.epsilon24);
        set(&mut self.sigma, args.sigma);
        set(&mut self.mass, args.mass);
        set(&mut self.verlet_skin, args.verlet_skin);
        set(&mut self.seed, args.seed);

        if let Some(force) = &args.global_force {
            self.global_force = <[f64; 3]>::try_from(force.as_slice()).map_err(|_| {
                ConfigError::invalid(
                    "global_force",
                    format!("expected three components, got {}", force.len()),
                )
            })?;
        }
        Ok(())
    }

    /// Rejects parameters no run can use.  Zero iterations is accepted and runs nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
            }
        }

        positive("cutoff", self.cutoff)?;
        positive("delta_t", self.delta_t)?;
        positive("sigma", self.sigma)?;
        positive("mass", self.mass)?;
        if !self.epsilon24.is_finite() {
            return Err(ConfigError::invalid("epsilon24", "must be finite"));
        }
        if !(self.verlet_skin.is_finite() && self.verlet_skin >= 0.0) {
            return Err(ConfigError::invalid(
                "verlet_skin",
                format!("must not be negative, got {}", self.verlet_skin),
            ));
        }
        if !(self.box_min.is_finite() && self.box_max.is_finite() && self.domain().is_valid()) {
            return Err(ConfigError::invalid(
                "box_max",
                format!("box [{}, {}] is empty", self.box_min, self.box_max),
            ));
        }
        if self.global_force.iter().any(|f| !f.is_finite()) {
            return Err(ConfigError::invalid("global_force", "must be finite"));
        }
        Ok(())
    }

    /// The domain owned particles live in.
    pub fn domain(&self) -> BoundingBox {
        BoundingBox::cube(self.box_min, self.box_max)
    }

    pub fn global_force(&self) -> DVec3 {
        DVec3::from_array(self.global_force)
    }
}


// End of File
