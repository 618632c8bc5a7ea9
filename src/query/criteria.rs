use serde_derive::Deserialize;

use crate::model::TestResult;
use crate::time::Timestamp;

/// Conditions on a text attribute. Every condition that is set must hold.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StringFilter {
    pub equals: Option<String>,
    pub not_equals: Option<String>,
    pub specified: Option<bool>,
    #[serde(rename = "in")]
    pub is_in: Option<Vec<String>>,
    pub not_in: Option<Vec<String>>,
    /// Case-insensitive substring match.
    pub contains: Option<String>,
    pub does_not_contain: Option<String>,
}

/// Conditions on an ordered attribute. Every condition that is set must hold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeFilter<T> {
    pub equals: Option<T>,
    pub not_equals: Option<T>,
    pub specified: Option<bool>,
    #[serde(rename = "in")]
    pub is_in: Option<Vec<T>>,
    pub not_in: Option<Vec<T>>,
    pub greater_than: Option<T>,
    pub greater_than_or_equal: Option<T>,
    pub less_than: Option<T>,
    pub less_than_or_equal: Option<T>,
}

/// Per-attribute filters over [`TestResult`]. Filters left unset match
/// everything, so `TestResultCriteria::default()` selects every record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestResultCriteria {
    pub id: Option<RangeFilter<u64>>,
    pub status: Option<RangeFilter<i32>>,
    pub test_name: Option<StringFilter>,
    pub class_name: Option<StringFilter>,
    pub error_message: Option<StringFilter>,
    pub failure_stack: Option<StringFilter>,
    pub failure_type: Option<StringFilter>,
    pub created_date: Option<RangeFilter<Timestamp>>,
    pub last_modified_date: Option<RangeFilter<Timestamp>>,
}

// Hand-written so `T` does not need to implement `Default`.
impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            equals: None,
            not_equals: None,
            specified: None,
            is_in: None,
            not_in: None,
            greater_than: None,
            greater_than_or_equal: None,
            less_than: None,
            less_than_or_equal: None,
        }
    }
}

impl StringFilter {
    fn has_value_conditions(&self) -> bool {
        self.equals.is_some()
            || self.not_equals.is_some()
            || self.is_in.is_some()
            || self.not_in.is_some()
            || self.contains.is_some()
            || self.does_not_contain.is_some()
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        if let Some(specified) = self.specified {
            if specified != value.is_some() {
                return false;
            }
        }
        let value = match value {
            Some(value) => value,
            None => return !self.has_value_conditions(),
        };
        if let Some(expected) = &self.equals {
            if value != expected.as_str() {
                return false;
            }
        }
        if let Some(unexpected) = &self.not_equals {
            if value == unexpected.as_str() {
                return false;
            }
        }
        if let Some(values) = &self.is_in {
            if !values.iter().any(|v| v == value) {
                return false;
            }
        }
        if let Some(values) = &self.not_in {
            if values.iter().any(|v| v == value) {
                return false;
            }
        }
        let upper = value.to_uppercase();
        if let Some(needle) = &self.contains {
            if !upper.contains(&needle.to_uppercase()) {
                return false;
            }
        }
        if let Some(needle) = &self.does_not_contain {
            if upper.contains(&needle.to_uppercase()) {
                return false;
            }
        }
        true
    }
}

impl<T: PartialOrd> RangeFilter<T> {
    fn has_value_conditions(&self) -> bool {
        self.equals.is_some()
            || self.not_equals.is_some()
            || self.is_in.is_some()
            || self.not_in.is_some()
            || self.greater_than.is_some()
            || self.greater_than_or_equal.is_some()
            || self.less_than.is_some()
            || self.less_than_or_equal.is_some()
    }

    pub fn matches(&self, value: Option<&T>) -> bool {
        if let Some(specified) = self.specified {
            if specified != value.is_some() {
                return false;
            }
        }
        let value = match value {
            Some(value) => value,
            None => return !self.has_value_conditions(),
        };
        let checks = [
            self.equals.as_ref().map(|expected| value == expected),
            self.not_equals.as_ref().map(|unexpected| value != unexpected),
            self.is_in.as_ref().map(|values| values.iter().any(|v| v == value)),
            self.not_in.as_ref().map(|values| !values.iter().any(|v| v == value)),
            self.greater_than.as_ref().map(|bound| value > bound),
            self.greater_than_or_equal.as_ref().map(|bound| value >= bound),
            self.less_than.as_ref().map(|bound| value < bound),
            self.less_than_or_equal.as_ref().map(|bound| value <= bound),
        ];
        checks.iter().all(|check| check.unwrap_or(true))
    }
}

fn string_matches(filter: &Option<StringFilter>, value: Option<&str>) -> bool {
    filter.as_ref().map_or(true, |f| f.matches(value))
}

fn range_matches<T: PartialOrd>(filter: &Option<RangeFilter<T>>, value: &T) -> bool {
    filter.as_ref().map_or(true, |f| f.matches(Some(value)))
}

impl TestResultCriteria {
    pub fn matches(&self, result: &TestResult) -> bool {
        range_matches(&self.id, &result.id)
            && range_matches(&self.status, &result.status)
            && string_matches(&self.test_name, Some(result.test_name.as_str()))
            && string_matches(&self.class_name, Some(result.class_name.as_str()))
            && string_matches(&self.error_message, result.error_message.as_deref())
            && string_matches(&self.failure_stack, result.failure_stack.as_deref())
            && string_matches(&self.failure_type, result.failure_type.as_deref())
            && range_matches(&self.created_date, &result.created_date)
            && range_matches(&self.last_modified_date, &result.last_modified_date)
    }
}
