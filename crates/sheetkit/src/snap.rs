//! Snap-point set
//!
//! The heights a sheet may rest at. Order is the configured order, not
//! numeric order: "next" and "previous" walk the configured sequence, and
//! ties in distance go to the height configured first. `0` (hidden) is an
//! implicit resting point reached only through the not-presented path.

use smallvec::SmallVec;

/// Ordered set of configured resting heights
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapPoints {
    heights: SmallVec<[f32; 4]>,
}

impl SnapPoints {
    pub fn new(heights: impl IntoIterator<Item = f32>) -> Self {
        Self {
            heights: heights.into_iter().collect(),
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.heights
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Tallest configured height, `None` when nothing is configured
    pub fn max_height(&self) -> Option<f32> {
        self.heights.iter().copied().reduce(f32::max)
    }

    /// Position of the first height exactly equal to `height`
    pub fn index_of(&self, height: f32) -> Option<usize> {
        self.heights.iter().position(|h| *h == height)
    }

    /// Configured height closest to `offset`, or `0` when not presented
    ///
    /// Returns `0` for an empty set.
    pub fn nearest(&self, offset: f32, presented: bool) -> f32 {
        if !presented {
            return 0.0;
        }

        let mut best = (0.0, f32::MAX);
        for &height in &self.heights {
            let distance = (height - offset).abs();
            // Strict comparison keeps the first of equally close heights
            if distance < best.1 {
                best = (height, distance);
            }
        }
        best.0
    }

    /// Height configured just before the nearest one
    ///
    /// The nearest height is returned unchanged when it is first in the
    /// sequence or is not a configured height at all.
    pub fn previous(&self, offset: f32, presented: bool) -> f32 {
        let nearest = self.nearest(offset, presented);
        match self.index_of(nearest) {
            Some(index) if index > 0 => self.heights[index - 1],
            _ => nearest,
        }
    }

    /// Height configured just after the nearest one
    ///
    /// Past the end (or when the nearest is not configured, i.e. the hidden
    /// `0`) this wraps to the first height if `wrap` is set and otherwise
    /// returns the nearest unchanged.
    pub fn next(&self, offset: f32, presented: bool, wrap: bool) -> f32 {
        let nearest = self.nearest(offset, presented);
        match self.index_of(nearest) {
            Some(index) if index + 1 < self.heights.len() => self.heights[index + 1],
            _ if wrap => self.heights.first().copied().unwrap_or(nearest),
            _ => nearest,
        }
    }
}

impl From<&[f32]> for SnapPoints {
    fn from(heights: &[f32]) -> Self {
        Self::new(heights.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nearest_not_presented_is_zero() {
        let snaps = SnapPoints::new([200.0, 452.0]);
        assert_eq!(snaps.nearest(452.0, false), 0.0);
    }

    #[test]
    fn test_nearest_picks_closest() {
        let snaps = SnapPoints::new([200.0, 452.0, 700.0]);
        assert_eq!(snaps.nearest(0.0, true), 200.0);
        assert_eq!(snaps.nearest(330.0, true), 452.0);
        assert_eq!(snaps.nearest(1000.0, true), 700.0);
    }

    #[test]
    fn test_nearest_tie_goes_to_first_configured() {
        // 300 is 100 away from both; 400 is configured first
        let snaps = SnapPoints::new([400.0, 200.0]);
        assert_eq!(snaps.nearest(300.0, true), 400.0);

        let snaps = SnapPoints::new([200.0, 400.0]);
        assert_eq!(snaps.nearest(300.0, true), 200.0);
    }

    #[test]
    fn test_previous_walks_configured_order() {
        let snaps = SnapPoints::new([452.0, 120.0, 700.0]);
        assert_eq!(snaps.previous(700.0, true), 120.0);
        assert_eq!(snaps.previous(120.0, true), 452.0);
    }

    #[test]
    fn test_previous_on_first_returns_itself() {
        let snaps = SnapPoints::new([120.0, 452.0]);
        assert_eq!(snaps.previous(130.0, true), 120.0);
    }

    #[test]
    fn test_next_without_wrap_stops_at_last() {
        let snaps = SnapPoints::new([120.0, 452.0]);
        assert_eq!(snaps.next(120.0, true, false), 452.0);
        assert_eq!(snaps.next(452.0, true, false), 452.0);
    }

    #[test]
    fn test_next_with_wrap_returns_to_first() {
        let snaps = SnapPoints::new([120.0, 452.0]);
        assert_eq!(snaps.next(452.0, true, true), 120.0);
    }

    #[test]
    fn test_next_from_hidden_wraps_to_first() {
        let snaps = SnapPoints::new([120.0, 452.0]);
        assert_eq!(snaps.next(0.0, false, true), 120.0);
        assert_eq!(snaps.next(0.0, false, false), 0.0);
        assert_eq!(snaps.previous(0.0, false), 0.0);
    }

    #[test]
    fn test_empty_set_degrades_to_zero() {
        let snaps = SnapPoints::default();
        assert!(snaps.is_empty());
        assert_eq!(snaps.max_height(), None);
        assert_eq!(snaps.nearest(300.0, true), 0.0);
        assert_eq!(snaps.previous(300.0, true), 0.0);
        assert_eq!(snaps.next(300.0, true, true), 0.0);
        assert_eq!(snaps.next(300.0, true, false), 0.0);
    }

    #[test]
    fn test_max_height_ignores_order() {
        let snaps = SnapPoints::new([452.0, 700.0, 120.0]);
        assert_eq!(snaps.max_height(), Some(700.0));
    }

    fn heights() -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec(0u16..2000, 1..8)
            .prop_map(|hs| hs.into_iter().map(f32::from).collect())
    }

    fn distinct_heights() -> impl Strategy<Value = Vec<f32>> {
        prop::collection::btree_set(0u16..2000, 1..8)
            .prop_map(|hs| hs.into_iter().map(f32::from).collect())
            .prop_shuffle()
    }

    proptest! {
        #[test]
        fn nearest_is_a_configured_minimizer(hs in heights(), offset in 0.0f32..2000.0) {
            let snaps = SnapPoints::new(hs.iter().copied());
            let nearest = snaps.nearest(offset, true);

            prop_assert!(hs.contains(&nearest));
            let best = hs.iter().map(|h| (h - offset).abs()).fold(f32::MAX, f32::min);
            prop_assert_eq!((nearest - offset).abs(), best);

            // First minimizer in configured order
            let first = hs.iter().position(|h| (h - offset).abs() == best);
            prop_assert_eq!(snaps.index_of(nearest), first);
        }

        #[test]
        fn nearest_hidden_is_zero(hs in heights(), offset in 0.0f32..2000.0) {
            let snaps = SnapPoints::new(hs);
            prop_assert_eq!(snaps.nearest(offset, false), 0.0);
        }

        #[test]
        fn next_with_wrap_is_cyclic(hs in distinct_heights(), offset in 0.0f32..2000.0) {
            let snaps = SnapPoints::new(hs.iter().copied());
            let start = snaps.nearest(offset, true);

            let mut current = start;
            for _ in 0..hs.len() {
                current = snaps.next(current, true, true);
            }
            prop_assert_eq!(current, start);
        }

        #[test]
        fn previous_never_underflows(hs in heights()) {
            let snaps = SnapPoints::new(hs.iter().copied());
            let first = hs[0];
            prop_assert_eq!(snaps.previous(first, true), first);
        }
    }
}
