// Retrieval and context-grounding pipeline
//
// Components:
// - Retrieval: tokenizer, TF-IDF index, cosine ranker
// - Selection: threshold + top-k with position tie-break
// - Context: record blocks and grounded prompt assembly
// - Pipeline: TravelAssistant, end-to-end orchestration

pub mod retrieval;
pub mod selection;
pub mod context;
pub mod pipeline;

// Re-export key types
pub use context::{format_record, GroundedPrompt, GroundingAssembler, NO_CONTEXT_PLACEHOLDER};
pub use pipeline::{Answer, Match, TravelAssistant};
pub use retrieval::{score, ScoredDocument, TfIdfIndex};
pub use selection::{select_top_k, SelectedRecord, SelectionParams, Selector, DEFAULT_TOP_K};
