use super::ids::CategoryId;
use crate::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DESCRIPTION_MAX: usize = 50;

/// A category groups beers; the beer side of the relation lives in the link graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub version: u64,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryDraft {
    pub description: String,
}

impl Category {
    pub fn from_draft(id: CategoryId, draft: CategoryDraft) -> Result<Self, ValidationErrors> {
        let now = Utc::now();
        let category = Self {
            id,
            version: 0,
            description: draft.description,
            created_date: now,
            update_date: now,
        };
        category.validate()?;
        Ok(category)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("description", &self.description, DESCRIPTION_MAX);
        errors.into_result()
    }
}
