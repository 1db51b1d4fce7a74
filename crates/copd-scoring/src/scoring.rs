use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The type of score an item or total produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Patient-rated semantic differential item (e.g., CAT 0–5).
    Rating,
    /// Single ordinal grade chosen from described levels (e.g., mMRC 0–4).
    Grade,
    /// Unweighted sum of item ratings.
    Total,
}

/// Inclusive integer range of valid scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One scored item of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    /// Statement anchoring the lowest score.
    pub low_anchor: Option<String>,
    /// Statement anchoring the highest score.
    pub high_anchor: Option<String>,
}

/// A score entry provided by the user for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub item_id: String,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    pub value: u32,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}
