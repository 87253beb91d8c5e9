// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `test` namespace.

use crate::registry::{Entry, Stability::*};

/// The fully qualified human readable name of the test case.
///
/// Type: `string`. Examples: `"org.example.TestCase1.test1"`, `"example/tests/TestCase1.test1"`, `"ExampleTestCase1_test1"`.
#[cfg(feature = "semconv_experimental")]
pub const TEST_CASE_NAME: &str = "test.case.name";

/// The status of the actual test case result from test execution.
///
/// Type: `string`. Examples: `"pass"`, `"fail"`.
#[cfg(feature = "semconv_experimental")]
pub const TEST_CASE_RESULT_STATUS: &str = "test.case.result.status";

/// pass
#[cfg(feature = "semconv_experimental")]
pub const TEST_CASE_RESULT_STATUS_VALUE_PASS: &str = "pass";

/// fail
#[cfg(feature = "semconv_experimental")]
pub const TEST_CASE_RESULT_STATUS_VALUE_FAIL: &str = "fail";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`TEST_CASE_RESULT_STATUS`].
    TestCaseResultStatus for TEST_CASE_RESULT_STATUS {
        /// pass
        Pass = "pass",
        /// fail
        Fail = "fail",
    }
}

/// The human readable name of a test suite.
///
/// Type: `string`. Examples: `"TestSuite1"`.
#[cfg(feature = "semconv_experimental")]
pub const TEST_SUITE_NAME: &str = "test.suite.name";

/// The status of the test suite run.
///
/// Type: `string`. Examples: `"success"`, `"failure"`, `"skipped"`, `"aborted"`, `"timed_out"`, `"in_progress"`.
#[cfg(feature = "semconv_experimental")]
pub const TEST_SUITE_RUN_STATUS: &str = "test.suite.run.status";

/// success
#[cfg(feature = "semconv_experimental")]
pub const TEST_SUITE_RUN_STATUS_VALUE_SUCCESS: &str = "success";

/// failure
#[cfg(feature = "semconv_experimental")]
pub const TEST_SUITE_RUN_STATUS_VALUE_FAILURE: &str = "failure";

/// skipped
#[cfg(feature = "semconv_experimental")]
pub const TEST_SUITE_RUN_STATUS_VALUE_SKIPPED: &str = "skipped";

/// aborted
#[cfg(feature = "semconv_experimental")]
pub const TEST_SUITE_RUN_STATUS_VALUE_ABORTED: &str = "aborted";

/// timed_out
#[cfg(feature = "semconv_experimental")]
pub const TEST_SUITE_RUN_STATUS_VALUE_TIMED_OUT: &str = "timed_out";

/// in_progress
#[cfg(feature = "semconv_experimental")]
pub const TEST_SUITE_RUN_STATUS_VALUE_IN_PROGRESS: &str = "in_progress";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`TEST_SUITE_RUN_STATUS`].
    TestSuiteRunStatus for TEST_SUITE_RUN_STATUS {
        /// success
        Success = "success",
        /// failure
        Failure = "failure",
        /// skipped
        Skipped = "skipped",
        /// aborted
        Aborted = "aborted",
        /// timed_out
        TimedOut = "timed_out",
        /// in_progress
        InProgress = "in_progress",
    }
}

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("TEST_CASE_NAME", "test.case.name", Experimental),
    Entry::attribute("TEST_CASE_RESULT_STATUS", "test.case.result.status", Experimental),
    Entry::value(
        "TEST_CASE_RESULT_STATUS_VALUE_PASS",
        "test.case.result.status",
        "pass",
        Experimental,
    ),
    Entry::value(
        "TEST_CASE_RESULT_STATUS_VALUE_FAIL",
        "test.case.result.status",
        "fail",
        Experimental,
    ),
    Entry::attribute("TEST_SUITE_NAME", "test.suite.name", Experimental),
    Entry::attribute("TEST_SUITE_RUN_STATUS", "test.suite.run.status", Experimental),
    Entry::value(
        "TEST_SUITE_RUN_STATUS_VALUE_SUCCESS",
        "test.suite.run.status",
        "success",
        Experimental,
    ),
    Entry::value(
        "TEST_SUITE_RUN_STATUS_VALUE_FAILURE",
        "test.suite.run.status",
        "failure",
        Experimental,
    ),
    Entry::value(
        "TEST_SUITE_RUN_STATUS_VALUE_SKIPPED",
        "test.suite.run.status",
        "skipped",
        Experimental,
    ),
    Entry::value(
        "TEST_SUITE_RUN_STATUS_VALUE_ABORTED",
        "test.suite.run.status",
        "aborted",
        Experimental,
    ),
    Entry::value(
        "TEST_SUITE_RUN_STATUS_VALUE_TIMED_OUT",
        "test.suite.run.status",
        "timed_out",
        Experimental,
    ),
    Entry::value(
        "TEST_SUITE_RUN_STATUS_VALUE_IN_PROGRESS",
        "test.suite.run.status",
        "in_progress",
        Experimental,
    ),
];
