use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use fairway_core::rules::CompetitionFormat;

use crate::round::CompetitionResultRow;

/// A result row with its finishing position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    /// `None` for rows that could not be evaluated.
    pub position: Option<usize>,
    pub row: CompetitionResultRow,
}

/// Whether a format ranks by points (higher is better) or by net strokes.
fn ranks_by_points(format: CompetitionFormat) -> bool {
    matches!(format, CompetitionFormat::Stableford | CompetitionFormat::MaxScore)
}

fn compare(
    format: CompetitionFormat,
    a: &CompetitionResultRow,
    b: &CompetitionResultRow,
) -> Ordering {
    if ranks_by_points(format) {
        b.points.cmp(&a.points)
    } else {
        a.net_total.cmp(&b.net_total)
    }
}

/// Order a field's results for display.
///
/// Ties share a position and the next position is skipped (1, 2, 2, 4).
/// Tied rows keep their input order. Rows that failed evaluation come last
/// without a position.
pub fn leaderboard(
    rows: &[CompetitionResultRow],
    format: CompetitionFormat,
) -> Vec<LeaderboardRow> {
    let (mut ranked, failed): (Vec<&CompetitionResultRow>, Vec<&CompetitionResultRow>) =
        rows.iter().partition(|r| r.status.is_ok());

    // Stable sort keeps input order within ties.
    ranked.sort_by(|a, b| compare(format, a, b));

    let mut board = Vec::with_capacity(rows.len());
    let mut position = 0;
    for (i, row) in ranked.iter().enumerate() {
        let tied = i > 0 && compare(format, ranked[i - 1], row) == Ordering::Equal;
        if !tied {
            position = i + 1;
        }
        board.push(LeaderboardRow {
            position: Some(position),
            row: (*row).clone(),
        });
    }
    board.extend(failed.into_iter().map(|row| LeaderboardRow {
        position: None,
        row: row.clone(),
    }));
    board
}
