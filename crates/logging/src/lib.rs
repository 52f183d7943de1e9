// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # ljmd's Logging Framework
//!
//! This crate initializes the logging framework for the simulation driver.  Everything logs
//! through the [`log`] facade; on desktop platforms [`env_logger`] writes the records to stderr
//! and reads its filter from the environment.  Other targets get no logger at all.
//!
//! By default, the logging level is set to [`Info`](log::Level::Info) for debug builds, and
//! [`Warn`](log::Level::Warn) for release builds, for the crates passed to [`Logging::new`].
//! This can be overridden by setting the `RUST_LOG` environment variable, like so:
//!
//! ```sh
//! $> RUST_LOG=ljmd=debug cargo run -- --iterations 5
//! ```

mod platform;
mod platform_impl;
pub use platform::Logging;

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::Logging;
}

// End of File
