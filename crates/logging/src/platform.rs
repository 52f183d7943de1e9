// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

/// Initializes the logging framework to capture logs from the crates specified with a minimum
/// [`log::Level`] of [`Info`](log::Level::Info) on debug builds and [`Warn`](log::Level::Warn) on
/// release builds.  On desktop platforms, these defaults can be overridden by setting the
/// `RUST_LOG` environment variable.
#[derive(Clone, Debug)]
pub struct Logging {
    crates: Vec<&'static str>,
    level: log::LevelFilter,
}

impl Logging {
    /// Creates a new [`Logging`] instance with the specified list of crates to capture logs
    /// from, at the default level for the build profile.
    pub fn new(crates: Vec<&'static str>) -> Self {
        Self {
            crates,
            level: Self::default_level(),
        }
    }

    pub fn default_level() -> log::LevelFilter {
        if cfg!(debug_assertions) {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        }
    }

    /// The `RUST_LOG`-style directive used when the environment sets none.
    pub fn filter(&self) -> String {
        let level = self.level.to_string().to_lowercase();
        self.crates
            .iter()
            .map(|name| format!("{name}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Installs the global logger.  Fails if a logger is already installed.
    pub fn init(&self) -> Result<(), log::SetLoggerError> {
        crate::platform_impl::init_with_filter(&self.filter())
    }
}


// End of File
