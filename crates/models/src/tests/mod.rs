/// Wire-format tests for both record types
pub mod serde_tests;
