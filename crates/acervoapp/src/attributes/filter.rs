//! Attribute filtering.
//!
//! An [`AttrFilter`] is one clause of the gallery predicate: a field, an
//! operation and a value. Clauses are evaluated against any [`Attributes`]
//! source, so the same clause gives different answers for a raw `Item` and for
//! its redacted `PublicItem`. That difference is the point: the engine only
//! ever sees the redacted one.

use super::{AttrValue, Attributes, Field};

/// Filter operation for comparing attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact equality. Text and numbers compare after normalizing the text
    /// side to an integer, so a year selected as `"1950"` matches `1950`.
    Eq,
    /// Case-insensitive substring match on text values.
    ContainsText,
}

/// A filter condition on one field.
#[derive(Debug, Clone)]
pub struct AttrFilter {
    pub field: Field,
    pub op: FilterOp,
    pub value: AttrValue,
}

impl AttrFilter {
    pub fn new(field: Field, op: FilterOp, value: AttrValue) -> Self {
        Self { field, op, value }
    }

    /// Convenience: create an equality filter.
    pub fn eq(field: Field, value: impl Into<AttrValue>) -> Self {
        Self::new(field, FilterOp::Eq, value.into())
    }

    /// Convenience: create a case-insensitive substring filter.
    pub fn contains_text(field: Field, term: &str) -> Self {
        Self::new(
            field,
            FilterOp::ContainsText,
            AttrValue::Text(term.to_lowercase()),
        )
    }

    /// Check if this filter matches the given source.
    ///
    /// An absent field never matches, for either operation.
    pub fn matches<A: Attributes + ?Sized>(&self, source: &A) -> bool {
        let Some(attr_value) = source.get_attr(self.field) else {
            return false;
        };

        match self.op {
            FilterOp::Eq => values_equal(&attr_value, &self.value),
            FilterOp::ContainsText => text_contains(&attr_value, &self.value),
        }
    }
}

fn values_equal(a: &AttrValue, b: &AttrValue) -> bool {
    match (a, b) {
        (AttrValue::Text(a), AttrValue::Text(b)) => a == b,
        (AttrValue::Number(a), AttrValue::Number(b)) => a == b,
        (AttrValue::Number(n), AttrValue::Text(t)) | (AttrValue::Text(t), AttrValue::Number(n)) => {
            t.trim().parse::<i64>().is_ok_and(|parsed| parsed == *n)
        }
        (AttrValue::Fields(a), AttrValue::Fields(b)) => a == b,
        _ => false,
    }
}

fn text_contains(attr_value: &AttrValue, term: &AttrValue) -> bool {
    let (AttrValue::Text(haystack), AttrValue::Text(needle)) = (attr_value, term) else {
        return false;
    };
    haystack.to_lowercase().contains(needle.as_str())
}
