use serde_derive::{Deserialize, Serialize};

use crate::time::Timestamp;

/// A persisted test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct TestResult {
    pub id: u64,
    pub status: i32,
    pub test_name: String,
    pub class_name: String,
    /// Only set when the test failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default = "None", setter(into, strip_option))]
    pub error_message: Option<String>,
    /// Stack trace of the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default = "None", setter(into, strip_option))]
    pub failure_stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default = "None", setter(into, strip_option))]
    pub failure_type: Option<String>,
    pub created_date: Timestamp,
    pub last_modified_date: Timestamp,
}

/// A test result that has not been persisted yet, so it carries no id.
///
/// The shape matches [`TestResult`]; `id` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct NewTestResult {
    #[serde(skip_deserializing)]
    #[builder(setter(skip))]
    pub id: Option<u64>,
    pub status: i32,
    pub test_name: String,
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default = "None", setter(into, strip_option))]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default = "None", setter(into, strip_option))]
    pub failure_stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default = "None", setter(into, strip_option))]
    pub failure_type: Option<String>,
    pub created_date: Timestamp,
    pub last_modified_date: Timestamp,
}

impl TestResult {
    pub fn builder() -> TestResultBuilder {
        TestResultBuilder::default()
    }
}

impl NewTestResult {
    pub fn builder() -> NewTestResultBuilder {
        NewTestResultBuilder::default()
    }

    /// Turns this record into a persisted one under `id`, keeping every
    /// other field.
    pub fn assign_id(self, id: u64) -> TestResult {
        TestResult {
            id,
            status: self.status,
            test_name: self.test_name,
            class_name: self.class_name,
            error_message: self.error_message,
            failure_stack: self.failure_stack,
            failure_type: self.failure_type,
            created_date: self.created_date,
            last_modified_date: self.last_modified_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn timestamp(value: &str) -> Timestamp {
        value.parse().unwrap()
    }

    #[test]
    fn test_builder_leaves_optional_fields_unset() {
        let result = TestResult::builder()
            .id(1u64)
            .status(0)
            .test_name("name")
            .class_name("class")
            .created_date(timestamp("2023-09-26T09:11"))
            .last_modified_date(timestamp("2023-09-26T09:12"))
            .build()
            .unwrap();

        assert_eq!(result.error_message, None);
        assert_eq!(result.failure_stack, None);
        assert_eq!(result.failure_type, None);
    }

    #[test]
    fn test_builder_fails_without_required_fields() {
        let result = TestResult::builder().id(1u64).status(0).build();

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_message_is_not_absent() {
        let result = TestResult::builder()
            .id(1u64)
            .status(0)
            .test_name("name")
            .class_name("class")
            .error_message("")
            .created_date(timestamp("2023-09-26T09:11"))
            .last_modified_date(timestamp("2023-09-26T09:12"))
            .build()
            .unwrap();

        assert_eq!(result.error_message.as_deref(), Some(""));
        assert_eq!(serde_json::to_value(&result).unwrap()["errorMessage"], json!(""));
    }

    #[test]
    fn test_new_result_serializes_null_id() {
        let result = NewTestResult::builder()
            .status(3)
            .test_name("name")
            .class_name("class")
            .created_date(timestamp("2023-09-26T09:11"))
            .last_modified_date(timestamp("2023-09-26T09:12"))
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "id": null,
                "status": 3,
                "testName": "name",
                "className": "class",
                "createdDate": "2023-09-26T09:11",
                "lastModifiedDate": "2023-09-26T09:12",
            })
        );
    }

    #[test]
    fn test_assign_id_keeps_other_fields() {
        let new = NewTestResult::builder()
            .status(3)
            .test_name("name")
            .class_name("class")
            .failure_type("assertion")
            .created_date(timestamp("2023-09-26T09:11"))
            .last_modified_date(timestamp("2023-09-26T09:12"))
            .build()
            .unwrap();
        let persisted = new.clone().assign_id(42);

        assert_eq!(persisted.id, 42);
        assert_eq!(persisted.status, new.status);
        assert_eq!(persisted.test_name, new.test_name);
        assert_eq!(persisted.class_name, new.class_name);
        assert_eq!(persisted.failure_type, new.failure_type);
        assert_eq!(persisted.created_date, new.created_date);
        assert_eq!(persisted.last_modified_date, new.last_modified_date);
    }

    #[test]
    fn test_new_result_ignores_incoming_id() {
        let result: NewTestResult = serde_json::from_value(json!({
            "id": 5,
            "status": 1,
            "testName": "name",
            "className": "class",
            "createdDate": "2023-09-26T09:11",
            "lastModifiedDate": "2023-09-26T09:12",
        }))
        .unwrap();

        assert_eq!(result.id, None);
        assert_eq!(result.status, 1);
    }

    #[test]
    fn test_deserialize_from_camel_case() {
        let result: TestResult = serde_json::from_value(json!({
            "id": 7,
            "status": 1,
            "testName": "name",
            "className": "class",
            "failureStack": "at line 1",
            "createdDate": "2023-09-26T09:11",
            "lastModifiedDate": "2023-09-26T09:12",
        }))
        .unwrap();

        assert_eq!(result.id, 7);
        assert_eq!(result.failure_stack.as_deref(), Some("at line 1"));
        assert_eq!(result.error_message, None);
    }
}
