//! biorevyx-bioage — Organ biological age scoring engine.
//!
//! Pure, synchronous arithmetic: a validated metrics record goes in, a
//! per-organ age report comes out. No I/O, no state.

pub mod curve;
pub mod metrics;
pub mod reference;
pub mod scorer;
