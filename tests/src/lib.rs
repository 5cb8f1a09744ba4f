//! # New Year Countdown Test Suite
//!
//! Unified test crate driving the assembled gateway router end to end.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     └── http_api.rs   # Full-router request/response tests
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p countdown-tests
//! ```

pub mod integration;
