// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use app_config::ConfigError;
use thiserror::Error;

/// Errors that end a simulation run.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// The run parameters could not be read or were rejected.
    #[error("Failed to load configuration")]
    Config(#[from] ConfigError),

    /// A global logger was already installed.
    #[error("Failed to initialize logging")]
    Logging(#[from] log::SetLoggerError),

    /// The container could not evaluate the pairwise interactions.
    #[error("Failed to compute interactions with {functor} in iteration {iteration}")]
    Interactions {
        functor: &'static str,
        iteration: usize,
    },
}

// End of File
