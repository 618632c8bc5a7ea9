pub mod test_result;

pub use self::test_result::{NewTestResult, NewTestResultBuilder, TestResult, TestResultBuilder};
