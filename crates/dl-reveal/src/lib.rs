//! # dl-reveal — Reveal sequencing for draft-lottery presentations
//!
//! Takes an ordered list of reveal items and plays them back strictly one
//! at a time with fixed pacing, signalling completion exactly once. The
//! crate is presentation-agnostic: consumers receive callbacks and decide
//! how a reveal looks.
//!
//! ## Architecture
//!
//! ```text
//! RevealTiming (pacing profile)
//!       │
//!       v
//! RevealPlan<T> ──schedule──> RevealSchedule (absolute deadlines)
//!       │                           │
//!       └────────> RevealScheduler <┘
//!                        │
//!                        v
//!            on_reveal(item) … on_complete()
//! ```
//!
//! The scheduler is cooperative: it never blocks and owns no timers. The
//! host event loop arms a one-shot timer for `next_deadline_ms()` and calls
//! `advance_to(now)` when it fires.

pub mod error;
pub mod plan;
pub mod scheduler;
pub mod timing;

pub use error::*;
pub use plan::*;
pub use scheduler::*;
pub use timing::*;
