//! Answer orchestration: choose between grounded and general answers and
//! memoize completion responses.

pub mod orchestrator;
pub mod prompt;
pub mod types;


pub use orchestrator::AnswerOrchestrator;
pub use prompt::{build_context, build_general_prompt, build_grounded_prompt};
pub use types::{Answer, AnswerCacheStats, AnswerSource};
