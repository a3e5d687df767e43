//! Problem catalog
//!
//! The fixed set of problems this tool seeds. The catalog ships inside the
//! binary as JSON and is validated before any database work starts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::MAX_TITLE_LENGTH,
    error::{AppError, AppResult},
    models::{AccessType, Difficulty},
};

const EMBEDDED_CATALOG: &str = include_str!("problems.json");

/// A single problem as described in the catalog
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDefinition {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    pub difficulty: Difficulty,

    pub access_type: AccessType,

    #[validate(length(min = 1))]
    pub description: String,

    pub input_format: String,

    pub output_format: String,

    pub constraints: String,

    #[serde(default)]
    pub additional_info: Option<String>,

    /// Sample tests shown to contestants
    #[validate(length(min = 1))]
    pub visible_tests: Vec<TestCaseDefinition>,

    #[validate(length(min = 1))]
    pub hidden_tests: Vec<TestCaseDefinition>,
}

/// Input / expected-output pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseDefinition {
    pub input: String,
    pub expected_output: String,
}

impl ProblemDefinition {
    /// Total number of test cases (visible + hidden)
    pub fn test_case_count(&self) -> usize {
        self.visible_tests.len() + self.hidden_tests.len()
    }
}

/// Load and validate the catalog compiled into the binary
pub fn embedded() -> AppResult<Vec<ProblemDefinition>> {
    parse(EMBEDDED_CATALOG)
}

/// Parse a catalog from JSON and validate it
pub fn parse(json: &str) -> AppResult<Vec<ProblemDefinition>> {
    let problems: Vec<ProblemDefinition> = serde_json::from_str(json)?;
    validate(&problems)?;
    Ok(problems)
}

/// Validate every entry and reject duplicate titles
pub fn validate(problems: &[ProblemDefinition]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(problems.len());

    for problem in problems {
        problem.validate()?;

        if !seen.insert(problem.title.as_str()) {
            return Err(AppError::Validation(format!(
                "Duplicate problem title in catalog: {}",
                problem.title
            )));
        }
    }

    Ok(())
}
