// Test helpers shared by the integration tests.
//
// Include from a test file with:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
#![allow(dead_code)]

pub mod fake_processor;
pub mod test_data;

pub use fake_processor::*;
pub use test_data::*;
