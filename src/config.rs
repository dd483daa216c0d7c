//! Audit Configuration
//!
//! Thresholds used by the salary and reporting-line analyses. Values come
//! from the built-in defaults, optionally a JSON file, then command-line
//! overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{OrgError, Result};

pub const DEFAULT_MIN_MULTIPLIER: f64 = 1.20;
pub const DEFAULT_MAX_MULTIPLIER: f64 = 1.50;
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Allowed manager salary, as multiples of the average salary of direct reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryBand {
    pub min_multiplier: f64,
    pub max_multiplier: f64,
}

impl Default for SalaryBand {
    fn default() -> Self {
        Self {
            min_multiplier: DEFAULT_MIN_MULTIPLIER,
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
        }
    }
}

impl SalaryBand {
    /// Expected `(min, max)` salary for a manager whose reports average `avg`
    pub fn bounds(&self, avg: f64) -> (f64, f64) {
        (avg * self.min_multiplier, avg * self.max_multiplier)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub salary_band: SalaryBand,
    /// Most managers allowed between an employee and the CEO
    pub max_depth: u32,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            salary_band: SalaryBand::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AuditConfig {
    /// Load a configuration file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| OrgError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            OrgError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_multiplier(mut self, multiplier: f64) -> Self {
        self.salary_band.min_multiplier = multiplier;
        self
    }

    pub fn with_max_multiplier(mut self, multiplier: f64) -> Self {
        self.salary_band.max_multiplier = multiplier;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let band = &self.salary_band;
        for (name, value) in [
            ("min_multiplier", band.min_multiplier),
            ("max_multiplier", band.max_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OrgError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if band.min_multiplier > band.max_multiplier {
            return Err(OrgError::InvalidConfig(format!(
                "min_multiplier ({}) exceeds max_multiplier ({})",
                band.min_multiplier, band.max_multiplier
            )));
        }
        Ok(())
    }
}
