//! Demo suites run by the host binary.
//!
//! Each module carries a small allocation-free routine and the tests that
//! exercise it, the way a firmware image would ship its self-checks.
