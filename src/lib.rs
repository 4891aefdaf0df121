//! __qpkit__ is the instrumentation and verification layer that sits next
//! to an embedded ADMM solver for convex quadratic programs of the form
//!
//! ```text
//! minimize    ½ xᵀPx + qᵀx
//! subject to  l ≤ Ax ≤ u
//! ```
//!
//! with `P` and `A` held in compressed sparse column (CSC) form.  It does
//! not solve anything itself.  It provides:
//!
//! * __Timing__: a monotonic [`Timer`](timers::Timer) and per-phase
//!   accumulation of setup, update, solve and polish times in
//!   [`PhaseTimers`](timers::PhaseTimers).
//!
//! * __Sparse matrix verification__: conversion of a
//!   [`CscMatrix`](algebra::CscMatrix) to dense column major form, format
//!   checks, and a tolerance-based structural comparison of two matrices.
//!
//! * __Settings__: solver [`Settings`](settings::Settings) with compiled-in
//!   defaults, validation, independent snapshots and a reduced profile for
//!   embedded builds.
//!
//! * __Debug dumps__: plain text triplet and vector dumps for inspecting
//!   solver data in external tools (see [`io`]).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod settings;
pub mod timers;

/// Version of this crate
pub fn version() -> &'static str {
    VERSION
}

#[test]
fn test_version() {
    assert_eq!(version().split('.').count(), 3);
}
