use serde::{Deserialize, Serialize};

use crate::card::{HoleScore, deserialize_hole_scores};

/// One member's result in one event of the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResult {
    pub member_id: String,
    pub points: f64,
    #[serde(default)]
    pub participation_points: f64,
    /// Card used for the eclectic competition.
    #[serde(default, deserialize_with = "deserialize_hole_scores")]
    pub hole_scores: Vec<HoleScore>,
}

/// Where event points come from. Recorded for display; the aggregation
/// arithmetic is the same for every mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointsMode {
    Position,
    #[default]
    Stableford,
    Combined,
}

/// What the eclectic aggregation does when events have different hole counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EclecticPolicy {
    /// Hole count comes from the first event. Shorter events contribute only
    /// the holes they have; extra holes on longer events are ignored.
    #[default]
    FirstEvent,
    /// Hole count comes from the longest event.
    Longest,
    /// Any event whose length differs from the first is rejected.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeasonConfig {
    /// Number of best event scores counted towards the standing.
    #[serde(alias = "best_n")]
    pub best_n: usize,
    #[serde(alias = "points_mode")]
    pub points_mode: PointsMode,
    #[serde(alias = "eclectic_policy")]
    pub eclectic_policy: EclecticPolicy,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            best_n: 8,
            points_mode: PointsMode::default(),
            eclectic_policy: EclecticPolicy::default(),
        }
    }
}

impl SeasonConfig {
    pub fn best_of(best_n: usize) -> Self {
        Self {
            best_n,
            ..Self::default()
        }
    }
}
