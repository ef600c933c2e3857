#![forbid(unsafe_code)]

//! HIGH5 team strengths analytics.
//!
//! Pure, deterministic analyses over a team roster: composition counts,
//! domain balance, pairwise complementarity and generated insights.
//! No I/O and no global state; reference data is passed in as a
//! `catalog::ReferenceCatalog`.

/// Version of the analysis rules. Part of every canonical report digest.
pub const ENGINE_VERSION: u32 = 1;

pub mod arithmetic;
pub mod domain;
pub mod catalog;
pub mod roster;
pub mod composition;
pub mod balance;
pub mod complementarity;
pub mod insights;
pub mod invariants;
pub mod hashing;
pub mod engine;
