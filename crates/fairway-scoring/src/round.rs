use std::fmt;

use serde::{Deserialize, Serialize};

use fairway_core::card::{HoleConfig, HoleScore, RoundEntry, played};
use fairway_core::rules::{CompetitionFormat, CompetitionRules};

use crate::handicap::playing_handicap;
use crate::max_score::normalize_max_score;
use crate::stableford::stableford_points;
use crate::strokes::strokes_for_hole;

/// Whether a row could be evaluated. Serialized as `"OK"` or an
/// `"ERROR: ..."` description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoundStatus {
    Ok,
    /// The competition has no holes configured.
    NoHoles,
}

impl RoundStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NoHoles => "ERROR: No Holes",
        }
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RoundStatus> for String {
    fn from(status: RoundStatus) -> Self {
        status.as_str().to_string()
    }
}

impl TryFrom<String> for RoundStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "OK" => Ok(Self::Ok),
            "ERROR: No Holes" => Ok(Self::NoHoles),
            other => Err(format!("unknown round status '{other}'")),
        }
    }
}

/// Evaluated result of one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionResultRow {
    pub entry_id: String,
    pub gross_total: i32,
    pub net_total: i32,
    pub points: i32,
    pub status: RoundStatus,
    /// Score counted on each hole after format rules, `None` where not played.
    pub hole_by_hole: Vec<HoleScore>,
}

impl CompetitionResultRow {
    fn empty(entry_id: &str, status: RoundStatus) -> Self {
        Self {
            entry_id: entry_id.to_string(),
            gross_total: 0,
            net_total: 0,
            points: 0,
            status,
            hole_by_hole: Vec::new(),
        }
    }
}

/// Evaluate one card against the course and competition rules.
///
/// Holes that were not played, or that have no matching hole config, are
/// reported as `None` and contribute nothing to the totals. A course with no
/// holes yields a zeroed row with [`RoundStatus::NoHoles`].
pub fn evaluate_round(
    entry_id: &str,
    hole_scores: &[HoleScore],
    holes: &[HoleConfig],
    handicap: f64,
    rules: &CompetitionRules,
) -> CompetitionResultRow {
    let playing = playing_handicap(handicap, rules.handicap_cap, rules.handicap_allowance);

    if holes.is_empty() {
        tracing::debug!(entry_id, "No holes configured");
        return CompetitionResultRow::empty(entry_id, RoundStatus::NoHoles);
    }

    let max_score = match rules.format {
        CompetitionFormat::MaxScore => rules.max_score_config.as_ref(),
        _ => None,
    };

    let mut row = CompetitionResultRow::empty(entry_id, RoundStatus::Ok);
    row.hole_by_hole.reserve(hole_scores.len());

    for (i, &score) in hole_scores.iter().enumerate() {
        let Some(gross) = played(score) else {
            row.hole_by_hole.push(None);
            continue;
        };
        let Some(hole) = holes.get(i) else {
            tracing::debug!(entry_id, hole = i + 1, "Score without hole config skipped");
            row.hole_by_hole.push(None);
            continue;
        };

        // Strokes come first: format rules may depend on them.
        let hole_strokes = strokes_for_hole(playing, holes.len(), hole.stroke_index);
        let counted = match max_score {
            Some(cfg) => normalize_max_score(Some(gross), hole.par, hole_strokes, cfg),
            None => gross,
        };

        row.gross_total += counted;
        row.net_total += counted - hole_strokes;
        row.points += stableford_points(Some(counted), hole.par, hole_strokes);
        row.hole_by_hole.push(Some(counted));
    }

    tracing::debug!(
        entry_id,
        playing_handicap = playing,
        gross = row.gross_total,
        net = row.net_total,
        points = row.points,
        "Round evaluated"
    );
    row
}

/// Evaluate every entry of a field, in input order.
pub fn evaluate_field(
    entries: &[RoundEntry],
    holes: &[HoleConfig],
    rules: &CompetitionRules,
) -> Vec<CompetitionResultRow> {
    entries
        .iter()
        .map(|e| evaluate_round(&e.entry_id, &e.hole_scores, holes, e.exact_handicap, rules))
        .collect()
}
