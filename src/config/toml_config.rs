use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub plan: PlanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub program: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "PlanConfig::default_max_credits")]
    pub max_credits_per_semester: f64,
    #[serde(default = "PlanConfig::default_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl PlanConfig {
    fn default_max_credits() -> f64 {
        18.0
    }

    fn default_debounce_ms() -> u64 {
        150
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_credits_per_semester: Self::default_max_credits(),
            search_debounce_ms: Self::default_debounce_ms(),
        }
    }
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn program(&self) -> &str {
        &self.api.program
    }

    fn max_credits_per_semester(&self) -> f64 {
        self.plan.max_credits_per_semester
    }

    fn search_debounce_ms(&self) -> u64 {
        self.plan.search_debounce_ms
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_non_empty_string("api.program", &self.api.program)?;
        validate_range(
            "plan.max_credits_per_semester",
            self.plan.max_credits_per_semester,
            1.0,
            40.0,
        )?;
        validate_range("plan.search_debounce_ms", self.plan.search_debounce_ms, 0, 5_000)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_full_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
base_url = "http://localhost:5000"
program = "BS-CS-Core-2025"

[plan]
max_credits_per_semester = 15.0
search_debounce_ms = 200
"#
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_credits_per_semester(), 15.0);
        assert_eq!(config.search_debounce_ms(), 200);
        assert_eq!(config.program(), "BS-CS-Core-2025");
    }

    #[test]
    fn plan_section_is_optional_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
base_url = "http://localhost:5000"
program = "BS-CS-Core-2025"
"#
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_credits_per_semester(), 18.0);
        assert_eq!(config.search_debounce_ms(), 150);
    }

    #[test]
    fn invalid_base_url_fails_validation() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
base_url = "ftp://nope"
program = "BS-CS-Core-2025"
"#
        )
        .unwrap();

        assert!(TomlConfig::from_file(file.path()).is_err());
    }
}
