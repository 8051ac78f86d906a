// Lexical retrieval: tokenizer, TF-IDF index and cosine ranker
pub mod tokenizer;
pub mod index;
pub mod ranker;

pub use index::{SparseVector, TfIdfIndex};
pub use ranker::{score, ScoredDocument};
pub use tokenizer::tokenize;
