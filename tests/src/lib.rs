//! # OCR Config Generator Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Full request → output flows
//! └── benches/           # Pipeline throughput
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ocr-tests integration::
//! cargo bench -p ocr-tests
//! ```

pub mod fixtures;
pub mod integration;
