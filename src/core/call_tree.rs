//! Free-function call tree: `process_data` -> `path_a`/`path_b` ->
//! `path_c`/`deep_function`.
//!
//! Every node is `#[inline(never)]` so each keeps its own stack frame for the
//! debugger observing it.

use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Inputs above this value take the "A" path.
pub const BRANCH_THRESHOLD: i32 = 10;

/// The value `deep_function` computes.
pub const DEEP_RESULT: i32 = 42;

#[inline(never)]
pub fn deep_function(console: &mut dyn Console) -> Result<()> {
    tracing::debug!("enter deep_function");
    console.print_line("Deep function called")?;
    // Breakpoint target.
    let result = DEEP_RESULT;
    console.print_line(&format!("Result: {}", result))?;
    Ok(())
}

#[inline(never)]
pub fn path_c(console: &mut dyn Console) -> Result<()> {
    tracing::debug!("enter path_c");
    console.print_line("Path C")?;
    deep_function(console)
}

#[inline(never)]
pub fn path_b(console: &mut dyn Console) -> Result<()> {
    tracing::debug!("enter path_b");
    console.print_line("Path B")?;
    deep_function(console)
}

#[inline(never)]
pub fn path_a(console: &mut dyn Console) -> Result<()> {
    tracing::debug!("enter path_a");
    console.print_line("Path A")?;
    path_b(console)?;
    path_c(console)
}

#[inline(never)]
pub fn process_data(console: &mut dyn Console, value: i32) -> Result<()> {
    tracing::debug!(value, "enter process_data");
    console.print_line(&format!("Processing data: {}", value))?;
    if value > BRANCH_THRESHOLD {
        path_a(console)
    } else {
        path_b(console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferConsole;

    #[test]
    fn test_high_value_walks_path_a() {
        let mut console = BufferConsole::new();
        process_data(&mut console, 15).unwrap();

        assert_eq!(
            console.lines(),
            [
                "Processing data: 15",
                "Path A",
                "Path B",
                "Deep function called",
                "Result: 42",
                "Path C",
                "Deep function called",
                "Result: 42",
            ]
        );
        assert_eq!(console.count("Deep function called"), 2);
    }

    #[test]
    fn test_low_value_walks_path_b_only() {
        let mut console = BufferConsole::new();
        process_data(&mut console, 5).unwrap();

        assert_eq!(
            console.lines(),
            ["Processing data: 5", "Path B", "Deep function called", "Result: 42"]
        );
        assert_eq!(console.count("Path A"), 0);
        assert_eq!(console.count("Path C"), 0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut console = BufferConsole::new();
        process_data(&mut console, BRANCH_THRESHOLD).unwrap();
        assert_eq!(console.count("Path A"), 0);

        let mut console = BufferConsole::new();
        process_data(&mut console, BRANCH_THRESHOLD + 1).unwrap();
        assert_eq!(console.count("Path A"), 1);
    }

    #[test]
    fn test_negative_value_takes_b_path() {
        let mut console = BufferConsole::new();
        process_data(&mut console, -100).unwrap();
        assert_eq!(console.lines()[0], "Processing data: -100");
        assert_eq!(console.count("Path B"), 1);
    }
}
