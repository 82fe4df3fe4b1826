pub mod handicap;
pub mod leaderboard;
pub mod match_play;
pub mod max_score;
pub mod round;
pub mod season;
pub mod stableford;
pub mod strokes;

pub use handicap::playing_handicap;
pub use leaderboard::{LeaderboardRow, leaderboard};
pub use match_play::{MatchLeader, MatchState, play_match};
pub use max_score::normalize_max_score;
pub use round::{CompetitionResultRow, RoundStatus, evaluate_field, evaluate_round};
pub use season::{
    SeasonError, SeasonStanding, eclectic, eclectic_with, season_standing, season_table,
};
pub use stableford::stableford_points;
pub use strokes::{allocate_strokes, strokes_for_hole};
