//! Command-line front end

pub mod commands;

pub fn run() -> anyhow::Result<()> {
    commands::run()
}
