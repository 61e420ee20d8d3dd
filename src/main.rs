use std::process::ExitCode;

mod cli;
mod collector;
mod config;
mod error;
mod logging;
mod runtime;
mod tagger;

#[cfg(test)]
mod test_support;

fn main() -> ExitCode {
    runtime::run()
}
