//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests that drive a `TuiApp` over a test
//! backend with real key and mouse events.
