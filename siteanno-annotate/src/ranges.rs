use siteanno_core::models::Region;

/// Merge overlapping and adjacent intervals into a minimal disjoint set.
///
/// Takes regions already filtered to one chromosome, sorts them by start,
/// then sweeps to merge intervals where `next.start <= current.end`.
/// Returns `(start, end)` pairs sorted by start and mutually non-overlapping.
pub fn merge_overlapping(regions: &[&Region]) -> Vec<(u32, u32)> {
    if regions.is_empty() {
        return Vec::new();
    }

    let mut intervals: Vec<(u32, u32)> = regions.iter().map(|r| (r.start, r.end)).collect();
    intervals.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::new();
    let mut current = intervals[0];

    for &(start, end) in &intervals[1..] {
        if start <= current.1 {
            // Overlapping or adjacent -- extend
            current.1 = current.1.max(end);
        } else {
            merged.push(current);
            current = (start, end);
        }
    }
    merged.push(current);

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn make_regions(intervals: Vec<(u32, u32)>) -> Vec<Region> {
        intervals
            .into_iter()
            .map(|(start, end)| Region {
                chr: "1".to_string(),
                start,
                end,
            })
            .collect()
    }

    fn merge(intervals: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
        let regions = make_regions(intervals);
        let refs: Vec<&Region> = regions.iter().collect();
        merge_overlapping(&refs)
    }

    #[rstest]
    fn test_merge_overlapping_chain() {
        // chr1:2-6, 4-7, 5-9, 7-12 all overlap -> single merged interval
        assert_eq!(merge(vec![(2, 6), (4, 7), (5, 9), (7, 12)]), vec![(2, 12)]);
    }

    #[rstest]
    fn test_merge_non_overlapping_unchanged() {
        assert_eq!(
            merge(vec![(0, 5), (10, 15), (20, 25)]),
            vec![(0, 5), (10, 15), (20, 25)]
        );
    }

    #[rstest]
    fn test_merge_adjacent_joined() {
        assert_eq!(merge(vec![(0, 10), (10, 20)]), vec![(0, 20)]);
    }

    #[rstest]
    fn test_merge_unsorted_input() {
        assert_eq!(merge(vec![(40, 60), (0, 20), (50, 55)]), vec![(0, 20), (40, 60)]);
    }

    #[rstest]
    fn test_merge_contained_interval() {
        assert_eq!(merge(vec![(0, 100), (10, 20)]), vec![(0, 100)]);
    }

    #[rstest]
    fn test_merge_empty() {
        assert_eq!(merge(vec![]), Vec::<(u32, u32)>::new());
    }

    #[rstest]
    fn test_merge_idempotent() {
        // Re-merging already merged intervals changes nothing
        let once = merge(vec![(2, 6), (4, 7), (40, 60)]);
        let regions = make_regions(once.clone());
        let refs: Vec<&Region> = regions.iter().collect();
        assert_eq!(merge_overlapping(&refs), once);
    }
}
