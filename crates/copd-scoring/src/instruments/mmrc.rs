use crate::scoring::{Item, ScoreRange, ScoreType};
use crate::Instrument;

/// mMRC: modified Medical Research Council dyspnea scale.
/// A single grade 0–4 chosen from described levels of breathlessness.
pub struct Mmrc;

pub const GRADE_RANGE: ScoreRange = ScoreRange { min: 0, max: 4 };

/// Grades at or above this value indicate a high symptom burden.
pub const HIGH_BURDEN_THRESHOLD: u32 = 2;

/// The five mMRC grades with the statement the patient identifies with.
pub const GRADES: [(u32, &str); 5] = [
    (0, "Breathless only with strenuous exercise"),
    (1, "Short of breath when hurrying on the level or walking up a slight hill"),
    (
        2,
        "Walks slower than people of the same age because of breathlessness, \
         or has to stop for breath when walking at own pace on the level",
    ),
    (3, "Stops for breath after walking about 100 metres or after a few minutes on the level"),
    (4, "Too breathless to leave the house, or breathless when dressing or undressing"),
];

pub fn grade_description(grade: u32) -> Option<&'static str> {
    GRADES
        .iter()
        .find(|(g, _)| *g == grade)
        .map(|(_, text)| *text)
}

impl Instrument for Mmrc {
    fn id(&self) -> &str {
        "mmrc"
    }

    fn name(&self) -> &str {
        "mMRC dyspnea scale"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![Item {
                id: "mmrc_grade".to_string(),
                name: "Dyspnea grade".to_string(),
                score_type: ScoreType::Grade,
                range: GRADE_RANGE,
                low_anchor: Some(GRADES[0].1.to_string()),
                high_anchor: Some(GRADES[4].1.to_string()),
            }]
        });
        &ITEMS
    }
}
