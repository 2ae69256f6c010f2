//! # Astro-Core
//!
//! Deterministic reading-context derivation for astrology readings.
//!
//! ## Pipeline
//!
//! ```text
//! ReadingRequest ──validate──▶ ReadingInput
//!     │
//!     ├─▶ [zodiac]      day/month        → ZodiacSign
//!     ├─▶ [life_stage]  birth year, now  → LifeStage
//!     ├─▶ [categorizer] question text    → QuestionCategory
//!     ↓
//! [context] + season, birth season, two random flavour picks
//!     → ReadingContext
//! ```
//!
//! Everything here is a pure function of its inputs plus an injected
//! random source. No state survives between requests.

pub mod categorizer;
pub mod context;
pub mod error;
pub mod life_stage;
pub mod types;
pub mod zodiac;

pub use categorizer::*;
pub use context::*;
pub use error::{Error, Result};
pub use life_stage::*;
pub use types::*;
pub use zodiac::*;
