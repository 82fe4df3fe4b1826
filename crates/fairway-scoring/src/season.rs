use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use fairway_core::card::{HoleScore, played};
use fairway_core::season::{EclecticPolicy, EventResult, SeasonConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonError {
    /// An event's card length differs from the first event's.
    HoleCountMismatch {
        event: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for SeasonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HoleCountMismatch {
                event,
                expected,
                found,
            } => write!(f, "event {event} has {found} holes, expected {expected}"),
        }
    }
}

impl std::error::Error for SeasonError {}

/// Season total for one member: the best `best_n` event points plus every
/// event's participation points.
pub fn season_standing(results: &[EventResult], config: &SeasonConfig) -> f64 {
    let mut points: Vec<f64> = results.iter().map(|r| r.points).collect();
    points.sort_by(|a, b| b.total_cmp(a));

    let best: f64 = points.iter().take(config.best_n).sum();
    let participation: f64 = results.iter().map(|r| r.participation_points).sum();
    best + participation
}

/// Best score on each hole across a season's cards, using the first event's
/// hole count.
pub fn eclectic(all_events_hole_scores: &[Vec<HoleScore>]) -> Vec<HoleScore> {
    let hole_count = all_events_hole_scores.first().map_or(0, Vec::len);
    best_per_hole(all_events_hole_scores, hole_count)
}

/// [`eclectic`] with an explicit rule for events of different lengths.
pub fn eclectic_with(
    all_events_hole_scores: &[Vec<HoleScore>],
    policy: EclecticPolicy,
) -> Result<Vec<HoleScore>, SeasonError> {
    let Some(first) = all_events_hole_scores.first() else {
        return Ok(Vec::new());
    };
    let expected = first.len();

    for (event, scores) in all_events_hole_scores.iter().enumerate() {
        if scores.len() == expected {
            continue;
        }
        if policy == EclecticPolicy::Strict {
            return Err(SeasonError::HoleCountMismatch {
                event,
                expected,
                found: scores.len(),
            });
        }
        tracing::warn!(
            event,
            expected,
            found = scores.len(),
            ?policy,
            "Eclectic card length mismatch"
        );
    }

    let hole_count = match policy {
        EclecticPolicy::Longest => all_events_hole_scores
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0),
        EclecticPolicy::FirstEvent | EclecticPolicy::Strict => expected,
    };
    Ok(best_per_hole(all_events_hole_scores, hole_count))
}

fn best_per_hole(events: &[Vec<HoleScore>], hole_count: usize) -> Vec<HoleScore> {
    (0..hole_count)
        .map(|i| {
            events
                .iter()
                .filter_map(|scores| scores.get(i).copied().and_then(played))
                .min()
        })
        .collect()
}

/// One member's line in the season table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStanding {
    pub member_id: String,
    pub total: f64,
    pub events_played: usize,
    pub eclectic: Vec<HoleScore>,
}

/// Group a season's results by member and rank them, highest total first.
/// Equal totals are ordered by member id.
pub fn season_table(results: &[EventResult], config: &SeasonConfig) -> Vec<SeasonStanding> {
    let mut by_member: BTreeMap<&str, Vec<EventResult>> = BTreeMap::new();
    for result in results {
        by_member
            .entry(result.member_id.as_str())
            .or_default()
            .push(result.clone());
    }

    let mut table: Vec<SeasonStanding> = by_member
        .into_iter()
        .map(|(member_id, events)| {
            let cards: Vec<Vec<HoleScore>> = events
                .iter()
                .filter(|e| !e.hole_scores.is_empty())
                .map(|e| e.hole_scores.clone())
                .collect();
            let eclectic = eclectic_with(&cards, config.eclectic_policy).unwrap_or_else(|e| {
                tracing::warn!(member_id, error = %e, "Eclectic skipped");
                Vec::new()
            });
            SeasonStanding {
                member_id: member_id.to_string(),
                total: season_standing(&events, config),
                events_played: events.len(),
                eclectic,
            }
        })
        .collect();

    // BTreeMap iteration already orders by member id; the stable sort keeps it
    // for equal totals.
    table.sort_by(|a, b| b.total.total_cmp(&a.total));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::{card, event};

    #[test]
    fn best_two_plus_all_participation() {
        let results = vec![
            event("m", 10.0, 1.0),
            event("m", 8.0, 1.0),
            event("m", 5.0, 1.0),
        ];
        let total = season_standing(&results, &SeasonConfig::best_of(2));
        assert!((total - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fewer_events_than_best_n() {
        let results = vec![event("m", 30.0, 2.0), event("m", 12.0, 0.0)];
        let total = season_standing(&results, &SeasonConfig::best_of(5));
        assert!((total - 44.0).abs() < f64::EPSILON);
    }

    #[test]
    fn best_n_zero_counts_participation_only() {
        let results = vec![event("m", 30.0, 2.0), event("m", 12.0, 3.0)];
        let total = season_standing(&results, &SeasonConfig::best_of(0));
        assert!((total - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unsorted_input_and_fractional_points() {
        let results = vec![
            event("m", 7.5, 0.5),
            event("m", 12.0, 0.5),
            event("m", 9.25, 0.5),
        ];
        let total = season_standing(&results, &SeasonConfig::best_of(2));
        assert!((total - (12.0 + 9.25 + 1.5)).abs() < 1e-9);
    }

    #[test]
    fn no_events_is_zero() {
        assert_eq!(season_standing(&[], &SeasonConfig::default()), 0.0);
    }

    #[test]
    fn eclectic_best_per_hole() {
        let events = vec![card(&[4, 0, 5]), card(&[5, 3, 4])];
        assert_eq!(eclectic(&events), vec![Some(4), Some(3), Some(4)]);
    }

    #[test]
    fn eclectic_hole_nobody_played() {
        let events = vec![card(&[4, 0, 5]), card(&[5, 0, 4])];
        assert_eq!(eclectic(&events), vec![Some(4), None, Some(4)]);
    }

    #[test]
    fn eclectic_ignores_zero_scores_on_the_card() {
        let events = vec![vec![Some(4), Some(0)], vec![Some(5), Some(3)]];
        assert_eq!(eclectic(&events), vec![Some(4), Some(3)]);

        let events = vec![vec![Some(0), Some(-2)], vec![Some(0), Some(6)]];
        assert_eq!(eclectic(&events), vec![None, Some(6)]);
    }

    #[test]
    fn eclectic_empty_season() {
        assert!(eclectic(&[]).is_empty());
        assert_eq!(eclectic_with(&[], EclecticPolicy::Strict), Ok(Vec::new()));
    }

    #[test]
    fn eclectic_first_event_length_wins() {
        let events = vec![card(&[5, 5, 5]), card(&[4]), card(&[6, 6, 6, 2])];
        let expected = vec![Some(4), Some(5), Some(5)];
        assert_eq!(eclectic(&events), expected);
        assert_eq!(
            eclectic_with(&events, EclecticPolicy::FirstEvent),
            Ok(expected)
        );
    }

    #[test]
    fn eclectic_longest_pads_with_later_holes() {
        let events = vec![card(&[5, 5]), card(&[4, 6, 3])];
        assert_eq!(
            eclectic_with(&events, EclecticPolicy::Longest),
            Ok(vec![Some(4), Some(5), Some(3)])
        );
    }

    #[test]
    fn eclectic_strict_rejects_mismatch() {
        let events = vec![card(&[5, 5]), card(&[4, 6]), card(&[4])];
        let err = eclectic_with(&events, EclecticPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            SeasonError::HoleCountMismatch {
                event: 2,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(err.to_string(), "event 2 has 1 holes, expected 2");
    }

    #[test]
    fn season_table_groups_and_ranks_members() {
        let mut results = vec![
            event("bob", 30.0, 1.0),
            event("amy", 36.0, 1.0),
            event("bob", 34.0, 1.0),
            event("cat", 20.0, 1.0),
            event("amy", 28.0, 1.0),
        ];
        results[0].hole_scores = card(&[5, 4, 0]);
        results[2].hole_scores = card(&[4, 5, 3]);

        let table = season_table(&results, &SeasonConfig::best_of(1));
        let order: Vec<&str> = table.iter().map(|s| s.member_id.as_str()).collect();
        assert_eq!(order, vec!["amy", "bob", "cat"]);
        assert!((table[0].total - 38.0).abs() < f64::EPSILON);
        assert!((table[1].total - 36.0).abs() < f64::EPSILON);
        assert_eq!(table[1].events_played, 2);
        assert_eq!(table[1].eclectic, vec![Some(4), Some(4), Some(3)]);
        assert!(table[0].eclectic.is_empty());
    }

    #[test]
    fn season_table_eclectic_skips_zero_scores() {
        let mut results = vec![event("m", 10.0, 0.0)];
        results[0].hole_scores = vec![Some(0), Some(4)];
        let table = season_table(&results, &SeasonConfig::default());
        assert_eq!(table[0].eclectic, vec![None, Some(4)]);
    }

    #[test]
    fn season_table_ties_ordered_by_member_id() {
        let results = vec![event("zed", 10.0, 0.0), event("abe", 10.0, 0.0)];
        let table = season_table(&results, &SeasonConfig::default());
        assert_eq!(table[0].member_id, "abe");
        assert_eq!(table[1].member_id, "zed");
    }

    #[test]
    fn season_table_strict_mismatch_leaves_eclectic_empty() {
        let mut results = vec![event("m", 10.0, 0.0), event("m", 12.0, 0.0)];
        results[0].hole_scores = card(&[4, 4]);
        results[1].hole_scores = card(&[4]);
        let config = SeasonConfig {
            eclectic_policy: EclecticPolicy::Strict,
            ..SeasonConfig::best_of(2)
        };
        let table = season_table(&results, &config);
        assert!(table[0].eclectic.is_empty());
        assert!((table[0].total - 22.0).abs() < f64::EPSILON);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn season() -> impl Strategy<Value = Vec<Vec<HoleScore>>> {
            prop::collection::vec(
                prop::collection::vec(prop::option::weighted(0.8, 1i32..=9), 9),
                1..8,
            )
        }

        proptest! {
            #[test]
            fn eclectic_never_worse_than_any_event(events in season()) {
                let best = eclectic(&events);
                prop_assert_eq!(best.len(), 9);
                for scores in &events {
                    for (b, s) in best.iter().zip(scores) {
                        if let Some(s) = s {
                            prop_assert!(b.is_some_and(|b| b <= *s));
                        }
                    }
                }
            }

            #[test]
            fn standing_is_monotonic_in_best_n(
                points in prop::collection::vec(0u8..=40, 0..12),
                n in 0usize..12,
            ) {
                let results: Vec<EventResult> =
                    points.iter().map(|&p| event("m", f64::from(p), 1.0)).collect();
                let fewer = season_standing(&results, &SeasonConfig::best_of(n));
                let more = season_standing(&results, &SeasonConfig::best_of(n + 1));
                prop_assert!(more >= fewer);
            }
        }
    }
}
