//! Position features computed against a merged interval set.
//!
//! Both functions assume `intervals` is sorted by start and mutually
//! non-overlapping (the output of [`crate::ranges::merge_overlapping`]);
//! no tie-break is needed since overlaps are eliminated before the lookup.

/// Boolean membership: true iff the position lies inside any interval,
/// using half-open `[start, end)` coordinates.
pub fn is_in(pos: &[u32], intervals: &[(u32, u32)]) -> Vec<bool> {
    pos.iter()
        .map(|&p| {
            let idx = intervals.partition_point(|&(start, _)| start <= p);
            idx > 0 && p < intervals[idx - 1].1
        })
        .collect()
}

/// Distance from each position to the nearest interval edge: 0 inside an
/// interval, otherwise the minimum of the gap to the closest flanking
/// interval. With no intervals at all the distance is undefined (`None`).
pub fn distance(pos: &[u32], intervals: &[(u32, u32)]) -> Vec<Option<u32>> {
    if intervals.is_empty() {
        return vec![None; pos.len()];
    }

    pos.iter()
        .map(|&p| {
            let idx = intervals.partition_point(|&(start, _)| start <= p);

            let left = idx.checked_sub(1).map(|i| {
                let (_, end) = intervals[i];
                // inside the interval counts as distance 0
                p.saturating_sub(end)
            });
            let right = intervals.get(idx).map(|&(start, _)| start - p);

            Some(match (left, right) {
                (Some(l), Some(r)) => l.min(r),
                (Some(l), None) => l,
                (None, Some(r)) => r,
                (None, None) => unreachable!("intervals checked non-empty above"),
            })
        })
        .collect()
}
