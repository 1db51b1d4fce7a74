use copd_core::record::CatAnswers;
use copd_core::CatItem;

use crate::scoring::{Item, ScoreEntry, ScoreRange, ScoreType};
use crate::Instrument;

/// CAT: COPD Assessment Test.
/// 8 items, each rated 0–5 between two opposite statements. Total 0–40.
pub struct Cat;

pub const ITEM_RANGE: ScoreRange = ScoreRange { min: 0, max: 5 };
pub const TOTAL_RANGE: ScoreRange = ScoreRange { min: 0, max: 40 };

/// Totals at or above this value indicate a high symptom impact.
pub const HIGH_IMPACT_THRESHOLD: u32 = 10;

fn item_text(item: CatItem) -> (&'static str, &'static str, &'static str) {
    match item {
        CatItem::Cough => ("Cough frequency", "I never cough", "I cough all the time"),
        CatItem::Phlegm => (
            "Sputum production",
            "I have no phlegm (mucus) in my chest at all",
            "My chest is completely full of phlegm (mucus)",
        ),
        CatItem::ChestTightness => (
            "Chest tightness",
            "My chest does not feel tight at all",
            "My chest feels very tight",
        ),
        CatItem::Breathlessness => (
            "Breathlessness on exertion",
            "When I walk up a hill or one flight of stairs I am not breathless",
            "When I walk up a hill or one flight of stairs I am very breathless",
        ),
        CatItem::ActivityLimitation => (
            "Limitation of activities at home",
            "I am not limited doing any activities at home",
            "I am very limited doing activities at home",
        ),
        CatItem::ConfidenceLeavingHome => (
            "Confidence leaving home",
            "I am confident leaving my home despite my lung condition",
            "I am not at all confident leaving my home because of my lung condition",
        ),
        CatItem::Sleep => (
            "Sleep quality",
            "I sleep soundly",
            "I don't sleep soundly because of my lung condition",
        ),
        CatItem::Energy => ("Energy level", "I have lots of energy", "I have no energy at all"),
    }
}

impl Instrument for Cat {
    fn id(&self) -> &str {
        "cat"
    }

    fn name(&self) -> &str {
        "COPD Assessment Test (CAT)"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            CatItem::ALL
                .iter()
                .map(|item| {
                    let (name, low, high) = item_text(*item);
                    Item {
                        id: item.id().to_string(),
                        name: name.to_string(),
                        score_type: ScoreType::Rating,
                        range: ITEM_RANGE,
                        low_anchor: Some(low.to_string()),
                        high_anchor: Some(high.to_string()),
                    }
                })
                .collect()
        });
        &ITEMS
    }

    fn total_range(&self) -> Option<ScoreRange> {
        Some(TOTAL_RANGE)
    }
}

/// Score entries for every CAT item whose answer parses as an integer.
pub fn score_entries(answers: &CatAnswers) -> Vec<ScoreEntry> {
    CatItem::ALL
        .iter()
        .filter_map(|item| {
            answers.parsed(*item).value().map(|value| ScoreEntry {
                item_id: item.id().to_string(),
                value,
            })
        })
        .collect()
}
