// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::error::Error;

use app_config::CliArgs;
use clap::Parser;

fn main() {
    let args = CliArgs::parse();

    match ljmd::start(&args) {
        Ok(timings) => println!("{timings}"),
        Err(err) => {
            eprintln!("Error: {}", err);
            let mut cause = err.source();
            while let Some(err) = cause {
                eprintln!("because: {}", err);
                cause = err.source();
            }
            std::process::exit(1);
        }
    }
}

// End of File
