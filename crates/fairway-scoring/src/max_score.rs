use fairway_core::card::{HoleScore, played};
use fairway_core::rules::{MaxScoreConfig, MaxScoreKind};

/// Cap a gross hole score under a max-score rule.
///
/// Unplayed holes yield 0; the round evaluator never passes them in.
/// `_hole_strokes` does not affect the cap for the fixed or par-plus rules.
// TODO: net double bogey (par + 2 + strokes received) needs its own
// `MaxScoreKind` variant before `_hole_strokes` is used.
pub fn normalize_max_score(
    gross: HoleScore,
    par: i32,
    _hole_strokes: i32,
    config: &MaxScoreConfig,
) -> i32 {
    let Some(gross) = played(gross) else {
        return 0;
    };

    let cap = match config.kind {
        MaxScoreKind::Fixed => config.value,
        MaxScoreKind::ParPlusX => par + config.value,
    };
    gross.min(cap)
}
