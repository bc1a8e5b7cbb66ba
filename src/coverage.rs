/// Closed range `[left, right]` of x-coordinates. Any interval with
/// `left > right` covers nothing.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Interval {
    pub left: i64,
    pub right: i64,
}

impl Interval {
    pub const EMPTY: Interval = Interval { left: 1, right: -1 };

    pub fn new(left: i64, right: i64) -> Self {
        Interval { left, right }
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right
    }

    pub fn len(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.right - self.left + 1
        }
    }

    pub fn contains(&self, x: i64) -> bool {
        self.left <= x && x <= self.right
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct MergeOutcome {
    /// Maximal covered runs, sorted and pairwise separated by at least one
    /// uncovered position.
    pub runs: Vec<Interval>,
    /// The first single-position hole found between two runs.
    pub gap: Option<i64>,
}

impl MergeOutcome {
    pub fn covered(&self) -> i64 {
        self.runs.iter().map(Interval::len).sum()
    }
}

/// Merges `intervals` into maximal runs and looks for a hole exactly one
/// position wide between two of them.
///
/// Only width-one holes are reported. Wider holes, and holes at either end
/// of the covered span, are not gaps: the search relies on the puzzle
/// guaranteeing a single uncovered cell surrounded by coverage.
pub fn merge_and_find_gap<I>(intervals: I) -> MergeOutcome
where
    I: IntoIterator<Item = Interval>,
{
    let mut sorted: Vec<Interval> = intervals.into_iter()
        .filter(|i| !i.is_empty())
        .collect();
    sorted.sort_unstable();

    let mut runs: Vec<Interval> = Vec::with_capacity(sorted.len());
    let mut gap = None;
    for next in sorted {
        let Some(run) = runs.last_mut() else {
            runs.push(next);
            continue;
        };
        // Touching runs merge: [0,5] and [6,9] leave nothing uncovered.
        if next.left <= run.right.saturating_add(1) {
            run.right = run.right.max(next.right);
        } else {
            if gap.is_none() && next.left.checked_sub(run.right) == Some(2) {
                gap = Some(run.right + 1);
            }
            runs.push(next);
        }
    }
    MergeOutcome { runs, gap }
}


#[cfg(test)]
mod test {
    use super::*;

    fn iv(left: i64, right: i64) -> Interval {
        Interval::new(left, right)
    }

    #[test]
    fn test_empty_input() {
        let out = merge_and_find_gap(Vec::<Interval>::new());
        assert_eq!(out.covered(), 0);
        assert_eq!(out.gap, None);
        assert!(out.runs.is_empty());
    }

    #[test]
    fn test_single_interval() {
        let out = merge_and_find_gap([iv(-2, 4)]);
        assert_eq!(out.runs, vec![iv(-2, 4)]);
        assert_eq!(out.covered(), 7);
        assert_eq!(out.gap, None);
    }

    #[test]
    fn test_discards_empty() {
        let out = merge_and_find_gap([Interval::EMPTY, iv(3, 4), iv(9, 2)]);
        assert_eq!(out.runs, vec![iv(3, 4)]);
        assert_eq!(out.covered(), 2);
    }

    #[test]
    fn test_overlapping_and_nested() {
        let out = merge_and_find_gap([iv(12, 12), iv(2, 14), iv(-2, 2), iv(16, 24), iv(14, 18)]);
        assert_eq!(out.runs, vec![iv(-2, 24)]);
        assert_eq!(out.covered(), 27);
        assert_eq!(out.gap, None);
    }

    #[test]
    fn test_touching_merge() {
        let out = merge_and_find_gap([iv(0, 5), iv(6, 9)]);
        assert_eq!(out.runs, vec![iv(0, 9)]);
        assert_eq!(out.gap, None);
    }

    #[test]
    fn test_single_gap() {
        let out = merge_and_find_gap([iv(7, 10), iv(0, 5)]);
        assert_eq!(out.gap, Some(6));
        assert_eq!(out.covered(), 10);
        assert_eq!(out.runs, vec![iv(0, 5), iv(7, 10)]);
    }

    #[test]
    fn test_wide_gap_ignored() {
        let out = merge_and_find_gap([iv(0, 5), iv(8, 10)]);
        assert_eq!(out.gap, None);
        assert_eq!(out.covered(), 9);
    }

    #[test]
    fn test_gap_after_nested_run() {
        // [3,4] sits inside [0,10]; the hole is measured from the run's end.
        let out = merge_and_find_gap([iv(0, 10), iv(3, 4), iv(12, 20)]);
        assert_eq!(out.gap, Some(11));
        assert_eq!(out.covered(), 20);
    }

    #[test]
    fn test_first_gap_wins() {
        let out = merge_and_find_gap([iv(0, 1), iv(3, 4), iv(6, 7)]);
        assert_eq!(out.gap, Some(2));
        assert_eq!(out.covered(), 6);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let out = merge_and_find_gap([iv(5, 9), iv(0, 3), iv(2, 4), iv(20, 22), iv(11, 15)]);
        let again = merge_and_find_gap(out.runs.clone());
        assert_eq!(again.runs, out.runs);
        assert_eq!(again.covered(), out.covered());
    }

    #[test]
    fn test_order_independent() {
        let intervals = [iv(0, 5), iv(7, 10), iv(3, 4), iv(9, 15), iv(-4, 1)];
        let expected = merge_and_find_gap(intervals);
        assert_eq!(expected.gap, Some(6));
        assert_eq!(expected.covered(), 19);

        let mut perm = intervals;
        for shift in 0..perm.len() {
            perm.rotate_left(1);
            let out = merge_and_find_gap(perm);
            assert_eq!(out, expected, "rotation {shift}");
            let mut rev = perm;
            rev.reverse();
            assert_eq!(merge_and_find_gap(rev), expected, "reversed rotation {shift}");
        }
    }

    #[test]
    fn test_interval_len() {
        assert_eq!(iv(0, 17).len(), 18);
        assert_eq!(Interval::EMPTY.len(), 0);
        assert!(iv(-1, 1).contains(0));
        assert!(!Interval::EMPTY.contains(0));
    }
}
