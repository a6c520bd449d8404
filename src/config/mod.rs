pub mod cli;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::error::{PostcodeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TomlConfig {
    pub lookup: Option<LookupConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    pub table: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub special_cases: Option<Vec<String>>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PostcodeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PostcodeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the environment value; unset variables are
    // left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn table_path(&self) -> Option<&str> {
        self.lookup.as_ref().map(|l| l.table.as_str())
    }

    pub fn special_cases(&self) -> Option<&[String]> {
        self.validation
            .as_ref()
            .and_then(|v| v.special_cases.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(lookup) = &self.lookup {
            validate_path("lookup.table", &lookup.table)?;
        }
        if let Some(validation) = &self.validation {
            for case in validation.special_cases.as_deref().unwrap_or(&[]) {
                validate_non_empty_string("validation.special_cases", case)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [lookup]
            table = "./postcodes.csv"

            [validation]
            special_cases = ["G1R 0AA", "SAN TA1"]
            "#,
        )
        .unwrap();

        assert_eq!(config.table_path(), Some("./postcodes.csv"));
        assert_eq!(config.special_cases().unwrap().len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.table_path(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_special_case_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
            [validation]
            special_cases = ["   "]
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GEO_POSTCODE_TEST_TABLE", "/tmp/table.csv");
        let config = TomlConfig::from_toml_str(
            r#"
            [lookup]
            table = "${GEO_POSTCODE_TEST_TABLE}"
            "#,
        )
        .unwrap();
        assert_eq!(config.table_path(), Some("/tmp/table.csv"));
    }
}
