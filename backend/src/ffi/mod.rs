//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the estimator to a Python presentation layer
//! (printing, plotting).
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: one entry point per operation
//! 2. **Simple types**: primitives, lists and dicts at the boundary
//! 3. **Validate inputs**: all Rust-side validation runs before sampling
//! 4. **Safe errors**: Rust errors become Python `ValueError`s
//! 5. **No references**: Python gets copies of the sample array

pub mod estimator;
pub mod types;
