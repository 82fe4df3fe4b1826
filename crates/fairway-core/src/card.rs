use serde::{Deserialize, Deserializer, Serialize};

/// Strokes taken on a single hole, or `None` when the hole was not played.
pub type HoleScore = Option<i32>;

/// Par and difficulty ranking of one hole on the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleConfig {
    pub par: i32,
    /// 1 is the hardest hole. Expected to be a permutation of 1..=hole_count
    /// across a course; not checked here.
    pub stroke_index: i32,
}

impl HoleConfig {
    pub const fn new(par: i32, stroke_index: i32) -> Self {
        Self { par, stroke_index }
    }
}

/// Convert a raw score from an entry form into a [`HoleScore`].
///
/// Absent values and zero both mean the hole was not played. Negative values
/// are not golf scores either and are treated the same way.
pub fn hole_score(raw: Option<i64>) -> HoleScore {
    match raw {
        Some(strokes) if strokes > 0 => i32::try_from(strokes).ok(),
        Some(strokes) if strokes < 0 => {
            tracing::warn!(strokes, "Negative hole score treated as not played");
            None
        },
        _ => None,
    }
}

/// Convert a whole card of raw scores, preserving positions.
pub fn parse_hole_scores(raw: &[Option<i64>]) -> Vec<HoleScore> {
    raw.iter().copied().map(hole_score).collect()
}

/// Serde adapter for scorecards submitted with `null` or `0` for unplayed holes.
pub fn deserialize_hole_scores<'de, D>(deserializer: D) -> Result<Vec<HoleScore>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Option<i64>>::deserialize(deserializer)?;
    Ok(parse_hole_scores(&raw))
}

/// The strokes of a played hole. Zero and negative scores are not played,
/// the same as `None`.
pub fn played(score: HoleScore) -> Option<i32> {
    score.filter(|&strokes| strokes > 0)
}

/// True if any position on the card was not played.
pub fn has_unplayed(scores: &[HoleScore]) -> bool {
    scores.iter().any(|&s| played(s).is_none())
}

/// One competitor's card for a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundEntry {
    pub entry_id: String,
    pub exact_handicap: f64,
    #[serde(deserialize_with = "deserialize_hole_scores")]
    pub hole_scores: Vec<HoleScore>,
}
