//! Generated challenge payloads.
//!
//! The generator's answer is untrusted. Validation uses stillwater's
//! `Validation` so a bad payload reports every violation at once instead of
//! stopping at the first.

use crate::core::{day_of_year, TriviaItem, TriviaSet};
use crate::effects::env::GameEnv;
use crate::effects::error::GenerationError;
use crate::effects::violations::{PayloadViolation, ValueField};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Identifier carried by every generated set; never part of the catalog.
pub const GENERATED_CHALLENGE_ID: u32 = 0;

/// Emoji used when the generator does not supply one.
pub const DEFAULT_EMOJI: &str = "❓";

/// Topics offered to the generator when the player does not pick one.
pub const GENERATION_TOPICS: [&str; 10] = [
    "US City Populations",
    "Olympic Gold Medal Counts",
    "Movie Box Office (Millions)",
    "Deepest Parts of the Ocean (Meters)",
    "Tallest Mountains (Feet)",
    "Life Expectancy of Animals (Years)",
    "Yearly Coffee Consumption (Cups per Capita)",
    "Internet Speeds by Country (Mbps)",
    "Calories in Popular Foods",
    "Wealth of Famous Billionaires (Billions USD)",
];

/// Topic for a date, rotating through [`GENERATION_TOPICS`].
pub fn default_topic(date: NaiveDate) -> &'static str {
    GENERATION_TOPICS[day_of_year(date) as usize % GENERATION_TOPICS.len()]
}

/// Wire shape of a generated set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPayload {
    pub topic: String,
    pub items: Vec<GeneratedItem>,
}

/// Wire shape of a generated item; `id` and `emoji` are optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub proposed_value: f64,
    pub actual_value: f64,
    pub unit: String,
    pub context: String,
    pub fact: String,
    #[serde(default)]
    pub emoji: Option<String>,
}

impl GeneratedItem {
    fn resolved_id(&self, index: usize) -> String {
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("item-{index}"),
        }
    }
}

fn check_value(
    index: usize,
    field: ValueField,
    value: f64,
) -> Validation<(), NonEmptyVec<PayloadViolation>> {
    if !value.is_finite() {
        Validation::fail(PayloadViolation::NonFiniteValue { index, field })
    } else if value < 0.0 {
        Validation::fail(PayloadViolation::NegativeValue { index, field })
    } else {
        Validation::success(())
    }
}

/// Check a payload, accumulating ALL violations.
pub fn validate_payload(
    payload: &GeneratedPayload,
) -> Validation<(), NonEmptyVec<PayloadViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<PayloadViolation>>> = Vec::new();

    if payload.topic.trim().is_empty() {
        checks.push(Validation::fail(PayloadViolation::EmptyTopic));
    }
    if payload.items.is_empty() {
        checks.push(Validation::fail(PayloadViolation::NoItems));
    }

    let mut seen_ids = HashSet::new();
    for (index, item) in payload.items.iter().enumerate() {
        if item.name.trim().is_empty() {
            checks.push(Validation::fail(PayloadViolation::EmptyName { index }));
        }
        checks.push(check_value(index, ValueField::Proposed, item.proposed_value));
        checks.push(check_value(index, ValueField::Actual, item.actual_value));

        let id = item.resolved_id(index);
        if !seen_ids.insert(id.clone()) {
            checks.push(Validation::fail(PayloadViolation::DuplicateItemId { id }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

impl GeneratedPayload {
    /// Convert a validated payload into an off-catalog set.
    fn into_trivia_set(self) -> TriviaSet {
        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| TriviaItem {
                id: item.resolved_id(index),
                name: item.name,
                proposed_value: item.proposed_value,
                actual_value: item.actual_value,
                unit: item.unit,
                context: item.context,
                fact: item.fact,
                emoji: item.emoji.unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
            })
            .collect();

        TriviaSet {
            id: GENERATED_CHALLENGE_ID,
            topic: self.topic,
            items,
        }
    }
}

/// Parse and validate a raw generator answer.
pub fn parse_generated(raw: &str) -> Result<TriviaSet, GenerationError> {
    let payload: GeneratedPayload =
        serde_json::from_str(raw).map_err(|e| GenerationError::Malformed(e.to_string()))?;

    match validate_payload(&payload) {
        Validation::Success(_) => Ok(payload.into_trivia_set()),
        Validation::Failure(violations) => Err(GenerationError::Invalid(
            violations.iter().cloned().collect(),
        )),
    }
}

/// Ask the environment's generator for a set on `topic`.
///
/// Fails when no generator is configured, the call exceeds `timeout`, or the
/// payload does not parse and validate.
pub async fn fetch_generated(
    env: &GameEnv,
    topic: &str,
    timeout: Duration,
) -> Result<TriviaSet, GenerationError> {
    let generator = env.generator().ok_or(GenerationError::NotConfigured)?;
    let raw = tokio::time::timeout(timeout, generator.generate(topic))
        .await
        .map_err(|_| GenerationError::Timeout(timeout))??;
    parse_generated(&raw)
}
