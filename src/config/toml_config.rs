use crate::core::processor::TEMPLATE_MULTIPLIER;
use crate::domain::model::CastTo;
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use regex::Regex;
use serde::Deserialize;
use std::fmt::Display;
use std::path::Path;

/// Inputs for both fixture programs. Every section falls back to the
/// hard-wired inputs when absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub call_tree: CallTreeConfig,
    pub processor: ProcessorConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CallTreeConfig {
    pub values: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    pub name: String,
    pub values: Vec<i32>,
    pub int_vector: Vec<i32>,
    pub float_vector: Vec<f64>,
    pub template_int: i32,
    pub template_float: f64,
}

impl Default for CallTreeConfig {
    fn default() -> Self {
        Self { values: vec![15, 5] }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            name: "MainProcessor".to_string(),
            values: vec![15, 5],
            int_vector: vec![1, 2, 3],
            float_vector: vec![2.5, 3.5],
            template_int: 42,
            template_float: 3.75,
        }
    }
}

impl FixtureConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Expands `${VAR}` placeholders. Unset variables are an error.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FixtureError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(FixtureError::ConfigError {
                message: format!("undefined environment variables: {}", missing.join(", ")),
            });
        }

        Ok(result.into_owned())
    }

    /// Replaces the dispatcher inputs of both programs.
    pub fn override_values(&mut self, values: &[i32]) {
        if values.is_empty() {
            return;
        }
        tracing::debug!("Overriding dispatcher inputs with {:?}", values);
        self.call_tree.values = values.to_vec();
        self.processor.values = values.to_vec();
    }
}

impl Validate for FixtureConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("call_tree.values", &self.call_tree.values)?;
        validate_non_empty_string("processor.name", &self.processor.name)?;
        validate_non_empty_list("processor.values", &self.processor.values)?;
        validate_template_input("processor.template_int", self.processor.template_int)?;
        validate_template_input("processor.template_float", self.processor.template_float)?;
        Ok(())
    }
}

/// `template_function` multiplies in `i32`; reject inputs whose product overflows.
fn validate_template_input<T>(field_name: &str, value: T) -> Result<()>
where
    T: Copy + Display + CastTo<i32>,
{
    let cast: i32 = value.cast_to();
    if cast.checked_mul(TEMPLATE_MULTIPLIER).is_none() {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value times {} overflows i32", TEMPLATE_MULTIPLIER),
        });
    }
    Ok(())
}
