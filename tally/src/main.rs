use std::process::ExitCode;

use crate::driver::Driver;

mod cli;
mod driver;
mod report;

fn main() -> ExitCode {
    Driver::new().run()
}
