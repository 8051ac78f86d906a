//! Integration tests for the grounding pipeline
//!
//! Covers loading, retrieval, prompt assembly and generation end to end,
//! with a scripted generator in place of a live model.

use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use travelbuddy::{
    rag::{NO_CONTEXT_PLACEHOLDER, DEFAULT_TOP_K},
    ChatMessage, Destination, Generator, RecordStore, Result, SelectionParams, TravelAssistant,
    TravelError,
};

/// Records every request and answers with a fixed reply
struct ScriptedGenerator {
    reply: String,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedGenerator {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        self.requests.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }
}

fn tokyo_paris() -> RecordStore {
    RecordStore::from_records(vec![
        Destination::named("Tokyo")
            .with_description("city of temples and technology")
            .with_attractions(["Shibuya", "Asakusa"]),
        Destination::named("Paris")
            .with_description("city of lights")
            .with_attractions(["Eiffel Tower"]),
    ])
}

fn corpus_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn bundled_corpus() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/travel_data.json")
}

#[test]
fn test_query_selects_matching_destination() {
    let assistant = TravelAssistant::new(tokyo_paris(), SelectionParams { top_k: 1 });
    let selected = assistant.retrieve("Tokyo temples");

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].record.destination, "Tokyo");
    assert_eq!(selected[0].position, 0);
    assert!(selected[0].score > 0.0);

    let at_two = TravelAssistant::new(tokyo_paris(), SelectionParams { top_k: 2 });
    let names: Vec<_> = at_two
        .retrieve("Tokyo temples")
        .iter()
        .map(|s| s.record.destination.clone())
        .collect();
    assert_eq!(names, vec!["Tokyo"]);
}

#[test]
fn test_unmatched_query_gets_placeholder() {
    let assistant = TravelAssistant::new(tokyo_paris(), SelectionParams::default());
    assert!(assistant.retrieve("beach resort").is_empty());

    let prompt = assistant.ground("beach resort");
    assert_eq!(prompt.context, NO_CONTEXT_PLACEHOLDER);
    assert!(prompt.user.contains(NO_CONTEXT_PLACEHOLDER));
    assert!(prompt.user.contains("User Question:\nbeach resort"));
    assert!(prompt.record_ids.is_empty());
}

#[test]
fn test_identical_records_keep_load_order() {
    let twin = |name: &str| {
        let mut d = Destination::named("Lisbon").with_description("hills trams and pastries");
        d.budget_range = name.to_string();
        d
    };
    let store = RecordStore::from_records(vec![
        Destination::named("Oslo").with_description("fjords"),
        twin("first"),
        twin("second"),
    ]);
    let assistant = TravelAssistant::new(store, SelectionParams { top_k: 5 });

    let selected = assistant.retrieve("trams and pastries");
    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].score, selected[1].score);
    assert_eq!(selected[0].position, 1);
    assert_eq!(selected[1].position, 2);
    assert_eq!(selected[0].record.budget_range, "first");
}

#[test]
fn test_empty_corpus_is_valid() {
    let file = corpus_file(r#"{"destinations": []}"#);
    let assistant = TravelAssistant::from_path(file.path(), SelectionParams::default()).unwrap();

    assert!(assistant.store().is_empty());
    assert_eq!(assistant.index().vocabulary_size(), 0);
    assert!(assistant.retrieve("anything at all").is_empty());
    assert!(!assistant.ground("anything at all").has_context());
}

#[test]
fn test_stop_word_query_matches_nothing() {
    let assistant = TravelAssistant::new(tokyo_paris(), SelectionParams::default());
    assert!(assistant.index().vectorize("the of and").is_zero());
    assert!(assistant.retrieve("the of and").is_empty());
}

#[test]
fn test_unknown_terms_are_ignored() {
    let assistant = TravelAssistant::new(tokyo_paris(), SelectionParams::default());
    let selected = assistant.retrieve("zanzibar snorkelling Tokyo");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].record.destination, "Tokyo");
}

#[test]
fn test_load_failures_are_fatal() {
    let missing = TravelAssistant::from_path("/nonexistent/travel.json", SelectionParams::default());
    assert!(matches!(missing, Err(TravelError::CorpusLoad { .. })));

    let file = corpus_file("{ not json");
    let malformed = TravelAssistant::from_path(file.path(), SelectionParams::default());
    assert!(matches!(malformed, Err(TravelError::CorpusParse(_))));

    let file = corpus_file(r#"{"places": []}"#);
    let wrong_shape = TravelAssistant::from_path(file.path(), SelectionParams::default());
    assert!(matches!(wrong_shape, Err(TravelError::CorpusParse(_))));
}

#[test]
fn test_partial_records_load_with_defaults() {
    let file = corpus_file(
        r#"{"destinations": [
            {"destination": "Hanoi", "description": "street food and lakes"},
            {"destination": "Lima", "local_cuisine": ["Ceviche"]}
        ]}"#,
    );
    let assistant = TravelAssistant::from_path(file.path(), SelectionParams::default()).unwrap();

    assert_eq!(assistant.store().len(), 2);
    let selected = assistant.retrieve("ceviche");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].record.destination, "Lima");
    assert!(selected[0].record.top_attractions.is_empty());
}

#[test]
fn test_bundled_corpus() {
    let assistant = TravelAssistant::from_path(bundled_corpus(), SelectionParams::default()).unwrap();
    assert_eq!(assistant.params().top_k, DEFAULT_TOP_K);
    assert!(assistant.store().len() >= 5);

    let selected = assistant.retrieve("sushi ramen tempura");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].record.destination, "Tokyo, Japan");

    let selected = assistant.retrieve("northern lights");
    assert_eq!(selected[0].record.destination, "Reykjavik, Iceland");
    assert!(selected.len() <= DEFAULT_TOP_K);
}

#[tokio::test]
async fn test_answer_end_to_end() {
    let file = corpus_file(
        r#"{"destinations": [
            {"destination": "Tokyo", "description": "city of temples and technology",
             "top_attractions": ["Shibuya", "Asakusa"], "budget_range": "$150-300 per day"},
            {"destination": "Paris", "description": "city of lights",
             "top_attractions": ["Eiffel Tower"]}
        ]}"#,
    );
    let assistant = TravelAssistant::from_path(file.path(), SelectionParams::default()).unwrap();
    let generator = ScriptedGenerator::new("Visit Asakusa early in the morning.");

    let answer = assistant.answer("Tokyo temples on a budget", &generator).await.unwrap();

    assert_eq!(answer.text, "Visit Asakusa early in the morning.");
    assert_eq!(answer.matches.len(), 1);
    assert_eq!(answer.matches[0].destination, "Tokyo");
    assert_eq!(answer.prompt.record_ids, vec!["Tokyo"]);

    let requests = generator.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let user = &requests[0][1].content;
    assert!(user.starts_with("Travel Information Database:\nHere is relevant travel information:\n\n"));
    assert!(user.contains("Destination: Tokyo\n"));
    assert!(user.contains("Budget Range: $150-300 per day\n"));
    assert!(user.contains("Top Attractions: Shibuya, Asakusa\n"));
    assert!(!user.contains("Paris"));
    assert!(user.ends_with("Please provide travel advice based ONLY on the information provided above."));
}

#[tokio::test]
async fn test_answer_without_matches_still_asks() {
    let assistant = TravelAssistant::new(tokyo_paris(), SelectionParams::default());
    let generator = ScriptedGenerator::new("I don't have that destination in my database.");

    let answer = assistant.answer("beach resort", &generator).await.unwrap();

    assert!(answer.matches.is_empty());
    assert!(!answer.prompt.has_context());
    let requests = generator.requests.lock().unwrap();
    assert!(requests[0][1].content.contains(NO_CONTEXT_PLACEHOLDER));
}

#[tokio::test]
async fn test_shared_assistant_across_tasks() {
    let assistant = TravelAssistant::new(tokyo_paris(), SelectionParams::default());

    let handles: Vec<_> = ["Tokyo temples", "Eiffel Tower", "beach resort"]
        .into_iter()
        .map(|query| {
            let assistant = assistant.clone();
            tokio::spawn(async move { assistant.ground(query).record_ids })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    assert_eq!(results[0], vec!["Tokyo"]);
    assert_eq!(results[1], vec!["Paris"]);
    assert!(results[2].is_empty());
}
