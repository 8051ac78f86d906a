//! Destination records and the two textual views the pipeline takes of them
//!
//! - Projected text: the flat string the index tokenizes
//! - Context block: the labelled block the model reads

use serde::{Deserialize, Serialize};

/// A corpus item the retrieval pipeline can index and render
pub trait Record {
    /// Stable, human-readable identifier (not required to be unique)
    fn id(&self) -> &str;

    /// Flat searchable text. Field order is fixed because it is part of
    /// what gets weighted.
    fn projected_text(&self) -> String;

    /// Labelled block handed to the model as grounding context
    fn context_block(&self) -> String;
}

/// One travel destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub destination: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub top_attractions: Vec<String>,
    #[serde(default)]
    pub local_cuisine: Vec<String>,
    #[serde(default)]
    pub cultural_tips: String,
    #[serde(default)]
    pub weather_info: String,
    #[serde(default)]
    pub best_season: String,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub transportation: String,
}

impl Destination {
    /// Create a destination with only its name set
    pub fn named(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            description: String::new(),
            top_attractions: Vec::new(),
            local_cuisine: Vec::new(),
            cultural_tips: String::new(),
            weather_info: String::new(),
            best_season: String::new(),
            budget_range: String::new(),
            transportation: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_attractions<I, S>(mut self, attractions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.top_attractions = attractions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cuisine<I, S>(mut self, cuisine: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local_cuisine = cuisine.into_iter().map(Into::into).collect();
        self
    }
}

impl Record for Destination {
    fn id(&self) -> &str {
        &self.destination
    }

    fn projected_text(&self) -> String {
        let attractions = self.top_attractions.join(" ");
        let cuisine = self.local_cuisine.join(" ");

        // name, description, attractions, cuisine, tips, weather
        [
            self.destination.as_str(),
            self.description.as_str(),
            attractions.as_str(),
            cuisine.as_str(),
            self.cultural_tips.as_str(),
            self.weather_info.as_str(),
        ]
        .join(" ")
    }

    fn context_block(&self) -> String {
        let mut block = String::new();
        block.push_str(&format!("Destination: {}\n", self.destination));
        block.push_str(&format!("Best Season: {}\n", self.best_season));
        block.push_str(&format!("Budget Range: {}\n", self.budget_range));
        block.push_str(&format!(
            "Top Attractions: {}\n",
            self.top_attractions.join(", ")
        ));
        block.push_str(&format!("Local Cuisine: {}\n", self.local_cuisine.join(", ")));
        block.push_str(&format!("Transportation: {}\n", self.transportation));
        block.push_str(&format!("Cultural Tips: {}\n", self.cultural_tips));
        block.push_str(&format!("Weather: {}\n", self.weather_info));
        block
    }
}
