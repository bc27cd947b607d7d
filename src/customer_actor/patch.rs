//! Merge table for customer patches.

use crate::merge::{self, overwrite_optional_text, overwrite_text, MergeRule};
use crate::model::{Customer, CustomerPatch};
use crate::validation::ValidationErrors;

fn name(patch: &CustomerPatch, customer: &mut Customer) -> bool {
    overwrite_text(&patch.name, &mut customer.name)
}

fn email(patch: &CustomerPatch, customer: &mut Customer) -> bool {
    overwrite_optional_text(&patch.email, &mut customer.email)
}

pub const CUSTOMER_PATCH_RULES: &[MergeRule<CustomerPatch, Customer>] = &[
    MergeRule { field: "name", merge: name },
    MergeRule { field: "email", merge: email },
];

/// Merges `patch` into `customer` and re-validates. On a violation `customer` is left
/// untouched.
pub fn merge_patch(
    customer: &mut Customer,
    patch: &CustomerPatch,
) -> Result<Vec<&'static str>, ValidationErrors> {
    let mut candidate = customer.clone();
    let changed = merge::apply(CUSTOMER_PATCH_RULES, patch, &mut candidate);
    candidate.validate()?;
    *customer = candidate;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerDraft, CustomerId};

    fn stored() -> Customer {
        Customer::from_draft(
            CustomerId::new(),
            CustomerDraft {
                name: "Customer 1".into(),
                email: Some("one@example.com".into()),
            },
        )
        .unwrap()
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut customer = stored();
        let before = customer.clone();
        let patch = CustomerPatch {
            name: Some("".into()),
            email: Some(" ".into()),
        };
        assert!(merge_patch(&mut customer, &patch).unwrap().is_empty());
        assert_eq!(customer, before);
    }

    #[test]
    fn invalid_email_is_rejected_atomically() {
        let mut customer = stored();
        let before = customer.clone();
        let patch = CustomerPatch {
            name: Some("Renamed".into()),
            email: Some("nobody".into()),
        };
        assert!(merge_patch(&mut customer, &patch).unwrap_err().has_field("email"));
        assert_eq!(customer, before);
    }
}
