//! Declarative partial-update merging.
//!
//! A patch is a sparse structure whose fields are all optional. Each record type
//! declares one table of [`MergeRule`]s; a rule owns the presence predicate for its
//! field and copies the value when the predicate holds. [`apply`] runs the table in
//! order and reports which fields changed. The patch is only ever borrowed.

/// One entry of a merge table.
pub struct MergeRule<P, T> {
    pub field: &'static str,
    pub merge: fn(&P, &mut T) -> bool,
}

/// Runs every rule and returns the names of the fields that were overwritten.
pub fn apply<P, T>(rules: &[MergeRule<P, T>], patch: &P, target: &mut T) -> Vec<&'static str> {
    rules
        .iter()
        .filter_map(|rule| (rule.merge)(patch, target).then_some(rule.field))
        .collect()
}

/// Text fields are overwritten only by values that carry non-whitespace text.
pub fn overwrite_text(value: &Option<String>, target: &mut String) -> bool {
    match value {
        Some(text) if crate::validation::has_text(text) => {
            target.clone_from(text);
            true
        }
        _ => false,
    }
}

/// Text rule for fields that are optional on the record.
pub fn overwrite_optional_text(value: &Option<String>, target: &mut Option<String>) -> bool {
    match value {
        Some(text) if crate::validation::has_text(text) => {
            *target = Some(text.clone());
            true
        }
        _ => false,
    }
}

/// Enumerated, reference and numeric fields are overwritten by any present value.
pub fn overwrite<V: Clone>(value: &Option<V>, target: &mut V) -> bool {
    match value {
        Some(v) => {
            *target = v.clone();
            true
        }
        None => false,
    }
}

/// Like [`overwrite`] for fields that are themselves optional on the record.
pub fn overwrite_optional<V: Clone>(value: &Option<V>, target: &mut Option<V>) -> bool {
    match value {
        Some(v) => {
            *target = Some(v.clone());
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Label {
        title: String,
        stock: u32,
        note: Option<String>,
    }

    #[derive(Default)]
    struct LabelPatch {
        title: Option<String>,
        stock: Option<u32>,
        note: Option<String>,
    }

    const RULES: &[MergeRule<LabelPatch, Label>] = &[
        MergeRule {
            field: "title",
            merge: |p, t| overwrite_text(&p.title, &mut t.title),
        },
        MergeRule {
            field: "stock",
            merge: |p, t| overwrite(&p.stock, &mut t.stock),
        },
        MergeRule {
            field: "note",
            merge: |p, t| overwrite_optional(&p.note, &mut t.note),
        },
    ];

    fn label() -> Label {
        Label {
            title: "Saison".into(),
            stock: 12,
            note: None,
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut target = label();
        let changed = apply(RULES, &LabelPatch::default(), &mut target);
        assert!(changed.is_empty());
        assert_eq!(target, label());
    }

    #[test]
    fn blank_text_is_ignored_but_zero_is_applied() {
        let mut target = label();
        let patch = LabelPatch {
            title: Some("  ".into()),
            stock: Some(0),
            note: Some("seasonal".into()),
        };
        let changed = apply(RULES, &patch, &mut target);
        assert_eq!(changed, vec!["stock", "note"]);
        assert_eq!(target.title, "Saison");
        assert_eq!(target.stock, 0);
        assert_eq!(target.note.as_deref(), Some("seasonal"));
        assert_eq!(patch.title.as_deref(), Some("  "));
    }
}
