/// Convert an exact handicap into the strokes a player receives for a round.
///
/// The cap is applied first, then the allowance. The result is rounded half
/// away from zero, so 16.5 becomes 17.
pub fn playing_handicap(exact: f64, cap: f64, allowance: f64) -> i32 {
    let capped = exact.min(cap);
    (capped * allowance).round() as i32
}
