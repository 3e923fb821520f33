use crate::config::{CallTreeConfig, ProcessorConfig};
use crate::core::call_tree;
use crate::core::processor::{template_function, DataProcessor};
use crate::core::{Console, Program};
use crate::utils::error::Result;

pub const CALL_TREE_BANNER: &str = "Call Stack to PlantUML Test Program";
pub const PROCESSOR_BANNER: &str = "Call Stack to PlantUML Test Program (Structs and Generics)";

/// Free-function program: one `process_data` call per configured value.
#[derive(Debug, Clone)]
pub struct CallTreeProgram {
    config: CallTreeConfig,
}

impl CallTreeProgram {
    pub fn new(config: CallTreeConfig) -> Self {
        Self { config }
    }
}

impl Program for CallTreeProgram {
    fn banner(&self) -> &str {
        CALL_TREE_BANNER
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        for &value in &self.config.values {
            call_tree::process_data(console, value)?;
        }
        Ok(())
    }
}

/// Struct-and-generics program: drives one `DataProcessor` through both
/// branches, then the generic entry points with integer and float types.
#[derive(Debug, Clone)]
pub struct ProcessorProgram {
    config: ProcessorConfig,
}

impl ProcessorProgram {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }
}

impl Program for ProcessorProgram {
    fn banner(&self) -> &str {
        PROCESSOR_BANNER
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let processor = DataProcessor::new(self.config.name.as_str());

        for &value in &self.config.values {
            processor.process_data(console, value)?;
        }

        processor.process_vector(console, &self.config.int_vector)?;
        processor.process_vector(console, &self.config.float_vector)?;

        template_function(console, self.config.template_int)?;
        template_function(console, self.config.template_float)?;
        Ok(())
    }
}
