//! # Astro-Agents
//!
//! Text assembly around the reading context and the external model call.
//!
//! ## Flow
//!
//! ```text
//! ReadingInput
//!     ↓
//! [astro-core] zodiac + ReadingContext
//!     ↓
//! [composer]  random PromptTemplate + client block → prompt
//!     ↓
//! [TextGenerator] (Gemini) ── text ──▶ AiReading
//!     │
//!     └─ empty / error ──▶ [fallback] ──▶ FallbackReading
//! ```
//!
//! The fallback path makes no external calls and cannot fail, so every
//! well-formed request ends with a usable reading.

pub mod agent;
pub mod composer;
pub mod fallback;
pub mod gemini;
pub mod orchestrator;
pub mod prompts;

pub use agent::*;
pub use composer::*;
pub use fallback::*;
pub use gemini::*;
pub use orchestrator::*;
pub use prompts::*;
