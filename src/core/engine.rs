use crate::core::{Console, Program};
use crate::utils::error::Result;

pub struct FixtureEngine<P: Program> {
    program: P,
}

impl<P: Program> FixtureEngine<P> {
    pub fn new(program: P) -> Self {
        Self { program }
    }

    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        tracing::info!("Starting fixture program: {}", self.program.banner());

        console.print_line(self.program.banner())?;
        self.program.run(console)?;

        tracing::info!("Fixture program finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferConsole;

    struct Echo;

    impl Program for Echo {
        fn banner(&self) -> &str {
            "Echo"
        }

        fn run(&self, console: &mut dyn Console) -> Result<()> {
            console.print_line("body")
        }
    }

    #[test]
    fn test_banner_precedes_program_output() {
        let mut console = BufferConsole::new();
        FixtureEngine::new(Echo).run(&mut console).unwrap();
        assert_eq!(console.lines(), ["Echo", "body"]);
    }
}
