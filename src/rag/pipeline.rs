// End-to-end grounding pipeline: retrieve -> select -> assemble -> generate
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::RetrievalConfig;
use crate::corpus::{Destination, Record, RecordStore};
use crate::errors::Result;
use crate::llm::{ChatMessage, Generator};
use crate::rag::context::{GroundedPrompt, GroundingAssembler};
use crate::rag::retrieval::{self, TfIdfIndex};
use crate::rag::selection::{SelectedRecord, SelectionParams, Selector};

/// System prompt for the plain, ungrounded assistant
pub const UNGROUNDED_SYSTEM_PROMPT: &str = "You are a helpful travel assistant. \
Provide practical, specific travel advice including attractions, food, \
budget estimates, and cultural tips.";

/// One destination that made it into the context, with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub position: usize,
    pub destination: String,
    pub score: f64,
}

/// Result of a grounded question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Prompt that was sent
    pub prompt: GroundedPrompt,
    /// Destinations used as context
    pub matches: Vec<Match>,
    /// Model output
    pub text: String,
}

/// Travel assistant over one immutable corpus.
///
/// The index is built once in the constructor and shared read-only; clones
/// share both the store and the index.
#[derive(Debug, Clone)]
pub struct TravelAssistant {
    store: Arc<RecordStore>,
    index: Arc<TfIdfIndex>,
    selector: Selector,
    assembler: GroundingAssembler,
}

impl TravelAssistant {
    /// Build the index over a loaded store
    pub fn new(store: RecordStore, params: SelectionParams) -> Self {
        let index = TfIdfIndex::build(store.records());
        info!(
            destinations = store.len(),
            vocabulary = index.vocabulary_size(),
            top_k = params.top_k,
            "travel assistant ready"
        );

        Self {
            store: Arc::new(store),
            index: Arc::new(index),
            selector: Selector::new(params),
            assembler: GroundingAssembler::new(),
        }
    }

    /// Load the corpus file and build the index. Load failures are fatal.
    pub fn from_path(path: impl AsRef<Path>, params: SelectionParams) -> Result<Self> {
        let store = RecordStore::load(path)?;
        Ok(Self::new(store, params))
    }

    /// Build from the `[retrieval]` config section
    pub fn from_config(config: &RetrievalConfig) -> Result<Self> {
        Self::from_path(&config.corpus_path, SelectionParams { top_k: config.top_k })
    }

    /// Ranked, thresholded, truncated destinations for a query
    pub fn retrieve(&self, query: &str) -> Vec<SelectedRecord<'_, Destination>> {
        let scores = retrieval::score(&self.index, query);
        let selected = self.selector.select(scores, self.store.records());

        if selected.is_empty() {
            info!(query, "no relevant destinations found");
        } else {
            for s in &selected {
                debug!(destination = s.record.id(), score = s.score, "selected");
            }
        }
        selected
    }

    /// Retrieve and assemble the grounded prompt for a query
    pub fn ground(&self, query: &str) -> GroundedPrompt {
        let selected = self.retrieve(query);
        self.assembler.assemble(query, &selected)
    }

    /// Answer a question using only retrieved context
    pub async fn answer<G>(&self, query: &str, generator: &G) -> Result<Answer>
    where
        G: Generator + ?Sized,
    {
        let selected = self.retrieve(query);
        let matches = selected
            .iter()
            .map(|s| Match {
                position: s.position,
                destination: s.record.id().to_string(),
                score: s.score,
            })
            .collect();
        let prompt = self.assembler.assemble(query, &selected);
        let messages = prompt.messages();
        debug!(
            tokens = messages.iter().map(ChatMessage::estimate_tokens).sum::<usize>(),
            "grounded prompt assembled"
        );

        let text = generator.generate(&messages).await?;

        Ok(Answer {
            prompt,
            matches,
            text,
        })
    }

    /// Ask the model directly, without any retrieved context
    pub async fn ask_ungrounded<G>(&self, query: &str, generator: &G) -> Result<String>
    where
        G: Generator + ?Sized,
    {
        generator
            .generate(&[
                ChatMessage::system(UNGROUNDED_SYSTEM_PROMPT),
                ChatMessage::user(query),
            ])
            .await
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn index(&self) -> &TfIdfIndex {
        &self.index
    }

    pub fn params(&self) -> &SelectionParams {
        self.selector.params()
    }

    /// Change `top_k`; the index is untouched
    pub fn set_params(&mut self, params: SelectionParams) {
        self.selector.set_params(params);
    }
}
