use serde::{Deserialize, Serialize};

use crate::card::{HoleScore, deserialize_hole_scores, has_unplayed};
use crate::rules::CompetitionFormat;

/// A submitted card as seen by the publish check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishScorecard {
    #[serde(deserialize_with = "deserialize_hole_scores")]
    pub hole_scores: Vec<HoleScore>,
    /// Set by an administrator to publish the card even if incomplete.
    #[serde(default)]
    pub admin_override_publish: bool,
}

/// Outcome of [`validate_for_publish`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceCheck {
    pub can_publish: bool,
    pub reasons: Vec<String>,
}

impl GovernanceCheck {
    fn allowed() -> Self {
        Self {
            can_publish: true,
            reasons: Vec::new(),
        }
    }
}

/// Decide whether a competition's results may be published.
///
/// Formats scored hole by hole are blocked while any card without an admin
/// override still has an unplayed hole.
pub fn validate_for_publish(
    format: CompetitionFormat,
    scorecards: &[PublishScorecard],
) -> GovernanceCheck {
    if !format.requires_hole_detail() {
        return GovernanceCheck::allowed();
    }

    let incomplete = scorecards
        .iter()
        .filter(|card| !card.admin_override_publish && has_unplayed(&card.hole_scores))
        .count();

    if incomplete == 0 {
        return GovernanceCheck::allowed();
    }

    tracing::debug!(%format, incomplete, "Publish blocked by incomplete scorecards");
    GovernanceCheck {
        can_publish: false,
        reasons: vec![format!(
            "{incomplete} scorecard(s) are missing hole-by-hole details required for {format}."
        )],
    }
}
