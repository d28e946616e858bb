// Résumé and portfolio content generation.
// All LLM calls go through llm_client; everything else here is pure text assembly.

pub mod assembler;
pub mod context;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
