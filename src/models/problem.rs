//! Problem model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ProblemDefinition;
use crate::constants::access;

/// A problem row ready to be inserted into `problems`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProblem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub constraints: String,
    pub input_format: String,
    pub output_format: String,
    pub additional_info: Option<String>,
    pub access_type: AccessType,
    pub created_by_id: String,
}

impl NewProblem {
    /// Build the insert row for a catalog entry, credited to `created_by_id`
    pub fn from_definition(id: Uuid, definition: &ProblemDefinition, created_by_id: &str) -> Self {
        Self {
            id,
            title: definition.title.clone(),
            description: definition.description.clone(),
            difficulty: definition.difficulty,
            constraints: definition.constraints.clone(),
            input_format: definition.input_format.clone(),
            output_format: definition.output_format.clone(),
            additional_info: definition.additional_info.clone(),
            access_type: definition.access_type,
            created_by_id: created_by_id.to_string(),
        }
    }
}

/// Problem difficulty levels, stored capitalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problem visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessType {
    Public,
    Private,
}

impl AccessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => access::PUBLIC,
            Self::Private => access::PRIVATE,
        }
    }
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
