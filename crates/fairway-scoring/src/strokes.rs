use fairway_core::card::HoleConfig;

/// Strokes received on one hole.
///
/// Every hole gets `floor(playing_handicap / hole_count)`. Holes whose stroke
/// index is at most the truncated remainder get one more. The remainder keeps
/// the sign of the handicap, so plus-handicap players never reach the extra
/// stroke and give back a full stroke on every hole instead.
pub fn strokes_for_hole(playing_handicap: i32, hole_count: usize, stroke_index: i32) -> i32 {
    let Ok(hole_count) = i32::try_from(hole_count) else {
        return 0;
    };
    if hole_count == 0 {
        return 0;
    }

    let base = playing_handicap.div_euclid(hole_count);
    let threshold = playing_handicap % hole_count;
    base + i32::from(stroke_index <= threshold)
}

/// Strokes received on every hole of a course, in hole order.
pub fn allocate_strokes(playing_handicap: i32, holes: &[HoleConfig]) -> Vec<i32> {
    holes
        .iter()
        .map(|h| strokes_for_hole(playing_handicap, holes.len(), h.stroke_index))
        .collect()
}
