// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: a checked matrix wrapper and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **`VerifiedMatrix`** validates a whole table against its inputs and
//!    returns an `InvariantError` describing the first bad cell. Use it on
//!    tables you did not fill yourself (deserialized, hand-built).
//!
//! 2. **Runtime contracts** that panic in debug builds when the recurrence
//!    produces an inconsistent table. Zero-cost in release, but catch bugs
//!    whenever tests or the fuzzer run.

mod types;
pub mod contracts;

pub use types::*;
