use fairway_core::card::{HoleScore, played};

/// Points for one hole.
///
/// - Net double bogey or worse: 0
/// - Net bogey: 1
/// - Net par: 2
/// - Each stroke under net par: +1
/// - Not played: 0
pub fn stableford_points(gross: HoleScore, par: i32, strokes_received: i32) -> i32 {
    let Some(gross) = played(gross) else {
        return 0;
    };

    let net = gross - strokes_received;
    let vs_par = par - net;
    (vs_par + 2).max(0)
}
