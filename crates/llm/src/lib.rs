pub mod advice;
pub mod client;

pub use advice::{advisor_prompt, fallback_report, parse_report, AdvisorReport};
pub use client::{LlmClient, LlmError, ZEPHYR_MODEL_URL};
