use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "semester-planner")]
#[command(about = "Client engine for the semester degree planner")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:5000")]
    pub api_base_url: String,

    #[arg(long, default_value = "BS-CS-Core-2025")]
    pub program: String,

    #[arg(long, default_value = "18.0")]
    pub max_credits: f64,

    #[arg(long, default_value = "150")]
    pub search_debounce_ms: u64,

    #[arg(long, default_value = "")]
    pub current_term: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn max_credits_per_semester(&self) -> f64 {
        self.max_credits
    }

    fn search_debounce_ms(&self) -> u64 {
        self.search_debounce_ms
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_non_empty_string("program", &self.program)?;
        validate_range("max_credits", self.max_credits, 1.0, 40.0)?;
        validate_range("search_debounce_ms", self.search_debounce_ms, 0, 5_000)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CliConfig {
        CliConfig {
            api_base_url: "http://localhost:5000".into(),
            program: "BS-CS-Core-2025".into(),
            max_credits: 18.0,
            search_debounce_ms: 150,
            current_term: String::new(),
            verbose: false,
        }
    }

    #[test]
    fn default_like_config_validates() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn bad_url_and_out_of_range_credits_are_rejected() {
        let mut cfg = base();
        cfg.api_base_url = "not a url".into();
        assert!(cfg.validate().is_err());

        let mut cfg = base();
        cfg.max_credits = 0.0;
        assert!(cfg.validate().is_err());
    }
}
