use std::fmt;

use serde::{Deserialize, Serialize};

/// Competition formats supported by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompetitionFormat {
    Stroke,
    #[default]
    Stableford,
    MaxScore,
    MatchPlay,
    Scramble,
}

impl CompetitionFormat {
    pub const ALL: [CompetitionFormat; 5] = [
        Self::Stroke,
        Self::Stableford,
        Self::MaxScore,
        Self::MatchPlay,
        Self::Scramble,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stroke => "stroke",
            Self::Stableford => "stableford",
            Self::MaxScore => "maxScore",
            Self::MatchPlay => "matchPlay",
            Self::Scramble => "scramble",
        }
    }

    /// Formats whose results can't be computed from a total alone.
    pub fn requires_hole_detail(self) -> bool {
        matches!(self, Self::Stableford | Self::MaxScore | Self::MatchPlay)
    }
}

impl fmt::Display for CompetitionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the per-hole cap of a max-score competition is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaxScoreKind {
    /// Every hole is capped at `value`.
    Fixed,
    /// Each hole is capped at its par plus `value`.
    ParPlusX,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxScoreConfig {
    #[serde(rename = "type", alias = "kind")]
    pub kind: MaxScoreKind,
    pub value: i32,
}

impl MaxScoreConfig {
    pub const fn fixed(value: i32) -> Self {
        Self {
            kind: MaxScoreKind::Fixed,
            value,
        }
    }

    pub const fn par_plus(value: i32) -> Self {
        Self {
            kind: MaxScoreKind::ParPlusX,
            value,
        }
    }
}

/// Format and handicap rules for one competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitionRules {
    pub format: CompetitionFormat,
    /// Ceiling applied to the exact handicap before the allowance.
    #[serde(alias = "handicap_cap")]
    pub handicap_cap: f64,
    /// Fraction of the capped handicap a player receives, usually 0..=1.
    #[serde(alias = "handicap_allowance")]
    pub handicap_allowance: f64,
    #[serde(alias = "max_score_config", skip_serializing_if = "Option::is_none")]
    pub max_score_config: Option<MaxScoreConfig>,
}

impl Default for CompetitionRules {
    fn default() -> Self {
        Self {
            format: CompetitionFormat::default(),
            handicap_cap: 54.0,
            handicap_allowance: 1.0,
            max_score_config: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_match_serde() {
        for format in CompetitionFormat::ALL {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format.as_str()));
        }
    }

    #[test]
    fn hole_detail_formats() {
        assert!(CompetitionFormat::Stableford.requires_hole_detail());
        assert!(CompetitionFormat::MaxScore.requires_hole_detail());
        assert!(CompetitionFormat::MatchPlay.requires_hole_detail());
        assert!(!CompetitionFormat::Stroke.requires_hole_detail());
        assert!(!CompetitionFormat::Scramble.requires_hole_detail());
    }

    #[test]
    fn parse_rules_json() {
        let json = r#"{
            "format": "maxScore",
            "handicapCap": 36,
            "handicapAllowance": 0.95,
            "maxScoreConfig": { "type": "parPlusX", "value": 3 }
        }"#;
        let rules: CompetitionRules = serde_json::from_str(json).unwrap();
        assert_eq!(rules.format, CompetitionFormat::MaxScore);
        assert!((rules.handicap_cap - 36.0).abs() < f64::EPSILON);
        assert!((rules.handicap_allowance - 0.95).abs() < f64::EPSILON);
        assert_eq!(rules.max_score_config, Some(MaxScoreConfig::par_plus(3)));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let rules: CompetitionRules = serde_json::from_str(r#"{"format":"stroke"}"#).unwrap();
        assert_eq!(rules.format, CompetitionFormat::Stroke);
        assert!((rules.handicap_cap - 54.0).abs() < f64::EPSILON);
        assert!((rules.handicap_allowance - 1.0).abs() < f64::EPSILON);
        assert!(rules.max_score_config.is_none());
    }
}
