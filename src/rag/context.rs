// Grounded prompt assembly
use serde::{Deserialize, Serialize};

use crate::corpus::Record;
use crate::llm::ChatMessage;
use crate::rag::selection::SelectedRecord;

/// Opening line of a non-empty context section
pub const CONTEXT_INTRO: &str = "Here is relevant travel information:\n\n";

/// Context section used when nothing was selected
pub const NO_CONTEXT_PLACEHOLDER: &str =
    "No specific destination information found in the database.";

/// System instruction sent alongside every grounded prompt
pub const GROUNDED_SYSTEM_INSTRUCTION: &str = "\
You are a helpful travel assistant.
You must ONLY use the travel information provided in the user's message as your source of knowledge.
Do not use any external knowledge about destinations.

Key instructions:
- Base your recommendations EXCLUSIVELY on the provided travel information
- If the provided information is insufficient to answer the question, clearly state what information is missing
- Include specific details from the context such as attractions, cuisine, budget ranges, and cultural tips
- If no relevant information is provided, politely explain that you don't have that information in your database
- Be helpful and detailed, but stay within the bounds of the provided context";

/// Render one record as its canonical context block
pub fn format_record<R: Record>(record: &R) -> String {
    record.context_block()
}

/// Fully assembled prompt, ready for the generative model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundedPrompt {
    /// Original query
    pub query: String,
    /// Context section (blocks or placeholder)
    pub context: String,
    /// System instruction
    pub system: String,
    /// User message wrapping context and query
    pub user: String,
    /// Identifiers of the records included, in order
    pub record_ids: Vec<String>,
}

impl GroundedPrompt {
    /// Whether any record made it into the context
    pub fn has_context(&self) -> bool {
        !self.record_ids.is_empty()
    }

    /// System + user messages for the chat model
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system.clone()),
            ChatMessage::user(self.user.clone()),
        ]
    }
}

/// Builds grounded prompts from selected records
#[derive(Debug, Clone, Default)]
pub struct GroundingAssembler;

impl GroundingAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Context section for a selection: intro plus blocks, or the placeholder
    pub fn build_context<R: Record>(&self, selection: &[SelectedRecord<'_, R>]) -> String {
        if selection.is_empty() {
            return NO_CONTEXT_PLACEHOLDER.to_string();
        }

        let mut context = String::from(CONTEXT_INTRO);
        for selected in selection {
            context.push_str(&format_record(selected.record));
            context.push('\n');
        }
        context
    }

    /// Assemble the full prompt. Never contacts the model.
    pub fn assemble<R: Record>(
        &self,
        query: &str,
        selection: &[SelectedRecord<'_, R>],
    ) -> GroundedPrompt {
        let context = self.build_context(selection);
        let user = format!(
            "Travel Information Database:\n\
             {context}\n\
             \n\
             User Question:\n\
             {query}\n\
             \n\
             Please provide travel advice based ONLY on the information provided above."
        );

        GroundedPrompt {
            query: query.to_string(),
            context,
            system: GROUNDED_SYSTEM_INSTRUCTION.to_string(),
            user,
            record_ids: selection.iter().map(|s| s.record.id().to_string()).collect(),
        }
    }
}
