use crate::utils::error::Result;

/// Line-oriented output sink for the fixture programs.
pub trait Console {
    fn print_line(&mut self, line: &str) -> Result<()>;
}

/// A fixture entry point driven by `FixtureEngine`.
pub trait Program {
    fn banner(&self) -> &str;
    fn run(&self, console: &mut dyn Console) -> Result<()>;
}
