//! # dl-draw — Weighted draft-lottery draw engine
//!
//! Selects one winner from a weighted field and produces the randomized
//! elimination order the reveal sequence plays back.
//!
//! ## Architecture
//!
//! ```text
//! RosterEntry rows ──collect_participants──> Vec<Participant>
//!                                                  │
//!                                                  v
//!                                    DrawEngine::draw (weighted)
//!                                                  │
//!                                                  v
//!                  DrawResult ──reveal_plan──> dl_reveal::RevealPlan
//! ```
//!
//! The draw is synchronous and stateless apart from the injected random
//! stream; scheduling the reveal of its outcome is `dl-reveal`'s job.

pub mod engine;
pub mod error;
pub mod participant;
pub mod roster;

pub use engine::*;
pub use error::*;
pub use participant::*;
pub use roster::*;
