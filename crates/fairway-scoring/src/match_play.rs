use serde::{Deserialize, Serialize};

use fairway_core::card::{HoleScore, played};

/// Running state of a two-player match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    /// Holes up for player A; negative when player B leads.
    pub score: i32,
    pub holes_played: u32,
    /// Set once the trailing player can no longer draw level.
    pub is_finished: bool,
}

/// Who is ahead in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLeader {
    PlayerA,
    PlayerB,
    AllSquare,
}

impl MatchState {
    pub const fn new() -> Self {
        Self {
            score: 0,
            holes_played: 0,
            is_finished: false,
        }
    }

    /// Apply one hole. A finished match, or a hole either player has not
    /// completed yet, leaves the state untouched.
    #[must_use]
    pub fn advance(self, score_a: HoleScore, score_b: HoleScore, total_holes: u32) -> Self {
        let (Some(a), Some(b)) = (played(score_a), played(score_b)) else {
            return self;
        };
        if self.is_finished {
            return self;
        }

        let score = self.score + (b - a).signum();
        let holes_played = self.holes_played + 1;
        let holes_left = i64::from(total_holes) - i64::from(holes_played);

        Self {
            score,
            holes_played,
            is_finished: i64::from(score.abs()) > holes_left,
        }
    }

    pub fn leader(&self) -> MatchLeader {
        match self.score.signum() {
            1 => MatchLeader::PlayerA,
            -1 => MatchLeader::PlayerB,
            _ => MatchLeader::AllSquare,
        }
    }

    pub fn holes_left(&self, total_holes: u32) -> u32 {
        total_holes.saturating_sub(self.holes_played)
    }

    /// Conventional result text: `"3&2"` for a match closed out early,
    /// `"2 UP"` for a lead (or a win on the last hole), `"AS"` while level and
    /// `"Halved"` for a level match with no holes left.
    pub fn summary(&self, total_holes: u32) -> String {
        let margin = self.score.unsigned_abs();
        let left = self.holes_left(total_holes);
        if margin == 0 {
            if left == 0 {
                "Halved".to_string()
            } else {
                "AS".to_string()
            }
        } else if self.is_finished && left > 0 {
            format!("{margin}&{left}")
        } else {
            format!("{margin} UP")
        }
    }
}

/// Play two cards against each other hole by hole. Positions past the end of
/// the shorter card count as not played.
pub fn play_match(card_a: &[HoleScore], card_b: &[HoleScore], total_holes: u32) -> MatchState {
    let len = card_a.len().max(card_b.len());
    (0..len).fold(MatchState::new(), |state, i| {
        let a = card_a.get(i).copied().flatten();
        let b = card_b.get(i).copied().flatten();
        state.advance(a, b, total_holes)
    })
}
