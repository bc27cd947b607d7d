//! Customer record and payloads.

use super::ids::CustomerId;
use crate::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CUSTOMER_NAME_MAX: usize = 255;
pub const EMAIL_MAX: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub version: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: Option<String>,
}

/// Sparse customer payload; `None` and blank text mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CustomerUpdate {
    Replace(CustomerDraft),
    Patch(CustomerPatch),
}

impl Customer {
    pub fn from_draft(id: CustomerId, draft: CustomerDraft) -> Result<Self, ValidationErrors> {
        let now = Utc::now();
        let customer = Self {
            id,
            version: 0,
            name: draft.name,
            email: draft.email,
            created_date: now,
            update_date: now,
        };
        customer.validate()?;
        Ok(customer)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", &self.name, CUSTOMER_NAME_MAX);
        if let Some(email) = &self.email {
            errors.max_chars("email", email, EMAIL_MAX);
            errors.check("email", email.contains('@'), "must be a well-formed email address");
        }
        errors.into_result()
    }
}
