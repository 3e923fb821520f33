use crate::core::call_tree::{BRANCH_THRESHOLD, DEEP_RESULT};
use crate::domain::model::{CastTo, Container};
use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::fmt::Display;

/// Multiplier `process_vector` applies to the first element.
pub const VECTOR_MULTIPLIER: f64 = 1.5;

/// Method-based twin of the free-function call tree. Every printed line
/// carries the processor's name.
#[derive(Debug, Clone)]
pub struct DataProcessor {
    name: String,
}

impl DataProcessor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn say(&self, console: &mut dyn Console, message: &str) -> Result<()> {
        console.print_line(&format!("[{}] {}", self.name, message))
    }

    #[inline(never)]
    pub fn process_data(&self, console: &mut dyn Console, value: i32) -> Result<()> {
        tracing::debug!(processor = %self.name, value, "enter DataProcessor::process_data");
        self.say(console, &format!("Processing data: {}", value))?;
        if value > BRANCH_THRESHOLD {
            self.path_a(console)
        } else {
            self.path_b(console)
        }
    }

    /// Wraps the first element in a `Container` and transforms it by
    /// [`VECTOR_MULTIPLIER`]. Empty input only reports its size.
    #[inline(never)]
    pub fn process_vector<T>(&self, console: &mut dyn Console, items: &[T]) -> Result<Option<f64>>
    where
        T: Copy + CastTo<f64>,
    {
        tracing::debug!(processor = %self.name, len = items.len(), "enter DataProcessor::process_vector");
        self.say(console, &format!("Processing vector of size: {}", items.len()))?;

        let Some(&first) = items.first() else {
            return Ok(None);
        };

        let container = Container::new(first);
        let transformed = container.transform(VECTOR_MULTIPLIER);
        self.say(console, &format!("Transformed first element: {}", transformed))?;
        Ok(Some(transformed))
    }

    #[inline(never)]
    fn path_a(&self, console: &mut dyn Console) -> Result<()> {
        tracing::debug!(processor = %self.name, "enter DataProcessor::path_a");
        self.say(console, "Path A")?;
        self.path_b(console)?;
        self.path_c(console)
    }

    #[inline(never)]
    fn path_b(&self, console: &mut dyn Console) -> Result<()> {
        tracing::debug!(processor = %self.name, "enter DataProcessor::path_b");
        self.say(console, "Path B")?;
        self.deep_function(console)
    }

    #[inline(never)]
    fn path_c(&self, console: &mut dyn Console) -> Result<()> {
        tracing::debug!(processor = %self.name, "enter DataProcessor::path_c");
        self.say(console, "Path C")?;
        self.deep_function(console)
    }

    #[inline(never)]
    fn deep_function(&self, console: &mut dyn Console) -> Result<()> {
        tracing::debug!(processor = %self.name, "enter DataProcessor::deep_function");
        self.say(console, "Deep function called")?;
        let result = DEEP_RESULT;
        self.say(console, &format!("Result: {}", result))
    }
}

/// Multiplier `template_function` applies.
pub const TEMPLATE_MULTIPLIER: i32 = 2;

/// Free generic counterpart of `process_vector`: wraps `value` and
/// transforms it by [`TEMPLATE_MULTIPLIER`].
#[inline(never)]
pub fn template_function<T>(console: &mut dyn Console, value: T) -> Result<i32>
where
    T: Copy + Display + CastTo<i32>,
{
    tracing::debug!(type_name = std::any::type_name::<T>(), "enter template_function");
    console.print_line(&format!("Template function called with: {}", value))?;
    let container = Container::new(value);
    let transformed = container.transform(TEMPLATE_MULTIPLIER);
    console.print_line(&format!("Transformed value: {}", transformed))?;
    Ok(transformed)
}
