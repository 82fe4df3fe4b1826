pub mod audit;
pub mod card;
pub mod clock;
pub mod config;
pub mod governance;
pub mod rules;
pub mod season;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::card::{HoleConfig, HoleScore, RoundEntry};
    use crate::rules::{CompetitionFormat, CompetitionRules, MaxScoreConfig};
    use crate::season::EventResult;

    /// Pars of a par-72 championship layout.
    pub const PARS_18: [i32; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 3, 4, 5, 4, 4, 3, 5, 4];
    /// Stroke indices for [`PARS_18`], a permutation of 1..=18.
    pub const STROKE_INDEX_18: [i32; 18] =
        [7, 1, 15, 11, 3, 9, 17, 5, 13, 8, 16, 2, 12, 4, 10, 18, 14, 6];

    /// An 18-hole, par-72 course.
    pub fn eighteen_holes() -> Vec<HoleConfig> {
        PARS_18
            .iter()
            .zip(STROKE_INDEX_18)
            .map(|(&par, si)| HoleConfig::new(par, si))
            .collect()
    }

    /// A 9-hole, par-36 loop with stroke indices 1..=9 in hole order.
    pub fn nine_holes() -> Vec<HoleConfig> {
        PARS_18[..9]
            .iter()
            .enumerate()
            .map(|(i, &par)| HoleConfig::new(par, i as i32 + 1))
            .collect()
    }

    /// Card that scores par on every hole.
    pub fn par_card(holes: &[HoleConfig]) -> Vec<HoleScore> {
        holes.iter().map(|h| Some(h.par)).collect()
    }

    /// Card from plain integers, 0 meaning not played.
    pub fn card(scores: &[i32]) -> Vec<HoleScore> {
        scores
            .iter()
            .map(|&s| if s > 0 { Some(s) } else { None })
            .collect()
    }

    pub fn stableford_rules() -> CompetitionRules {
        CompetitionRules {
            format: CompetitionFormat::Stableford,
            handicap_cap: 54.0,
            handicap_allowance: 0.95,
            max_score_config: None,
        }
    }

    pub fn stroke_rules() -> CompetitionRules {
        CompetitionRules {
            format: CompetitionFormat::Stroke,
            handicap_cap: 54.0,
            handicap_allowance: 1.0,
            max_score_config: None,
        }
    }

    /// Max-score competition capping each hole at par plus `par_plus`.
    pub fn max_score_rules(par_plus: i32) -> CompetitionRules {
        CompetitionRules {
            format: CompetitionFormat::MaxScore,
            handicap_cap: 54.0,
            handicap_allowance: 1.0,
            max_score_config: Some(MaxScoreConfig::par_plus(par_plus)),
        }
    }

    pub fn entry(id: &str, exact_handicap: f64, hole_scores: Vec<HoleScore>) -> RoundEntry {
        RoundEntry {
            entry_id: id.to_string(),
            exact_handicap,
            hole_scores,
        }
    }

    pub fn event(member: &str, points: f64, participation: f64) -> EventResult {
        EventResult {
            member_id: member.to_string(),
            points,
            participation_points: participation,
            hole_scores: Vec::new(),
        }
    }

}
