//! # Telemetry State Channels Test Suite
//!
//! Cross-crate scenarios that no single crate can test on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (encode, recover, close)
//! └── src/integration/  # End-to-end channel flows with real keys
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sc-tests
//! cargo test -p sc-tests integration::close_settlement
//! cargo bench -p sc-tests
//! ```

pub mod integration;
