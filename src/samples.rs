//! Shared, read-only `TestResult` records for tests.
//!
//! Each sample is built once on first access and handed out as a
//! `&'static` reference. Nothing hands out mutable access, so a test that
//! needs a modified record clones it first and cannot leak the change into
//! other tests.

use lazy_static::*;

use crate::model::{NewTestResult, TestResult};
use crate::time::Timestamp;

fn at(literal: &str) -> Timestamp {
    literal.parse().expect("Sample timestamp error")
}

lazy_static! {
    /// Only the mandatory fields are set.
    pub static ref SAMPLE_WITH_REQUIRED_DATA: TestResult = TestResult::builder()
        .id(22758u64)
        .status(18375)
        .test_name("breadcrumb")
        .class_name("newspaper")
        .created_date(at("2023-09-26T09:11"))
        .last_modified_date(at("2023-09-26T14:25"))
        .build()
        .expect("Sample construction error");

    /// Failure message and stack are set, the failure type is not.
    pub static ref SAMPLE_WITH_PARTIAL_DATA: TestResult = TestResult::builder()
        .id(1008u64)
        .status(25893)
        .test_name("zowie")
        .class_name("regarding openly")
        .error_message("toward")
        .failure_stack("whose")
        .created_date(at("2023-09-26T13:39"))
        .last_modified_date(at("2023-09-26T15:03"))
        .build()
        .expect("Sample construction error");

    /// Every field is set.
    pub static ref SAMPLE_WITH_FULL_DATA: TestResult = TestResult::builder()
        .id(11970u64)
        .status(5871)
        .test_name("peruse probable display")
        .class_name("dining")
        .error_message("reproachfully better what")
        .failure_stack("flugelhorn over")
        .failure_type("aha")
        .created_date(at("2023-09-26T07:09"))
        .last_modified_date(at("2023-09-26T09:18"))
        .build()
        .expect("Sample construction error");

    /// Not persisted yet, `id` is `None`.
    pub static ref SAMPLE_WITH_NEW_DATA: NewTestResult = NewTestResult::builder()
        .status(22262)
        .test_name("um finally")
        .class_name("supporter vastly")
        .created_date(at("2023-09-25T22:19"))
        .last_modified_date(at("2023-09-26T03:16"))
        .build()
        .expect("Sample construction error");
}

/// The persisted samples: required, partial, full.
pub fn persisted_samples() -> Vec<&'static TestResult> {
    vec![
        &*SAMPLE_WITH_REQUIRED_DATA,
        &*SAMPLE_WITH_PARTIAL_DATA,
        &*SAMPLE_WITH_FULL_DATA,
    ]
}
