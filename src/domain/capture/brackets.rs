//! Threshold ladders - ordered (threshold, points) tables, first match wins.
//!
//! [`Bands`] keeps only the thresholds, for callers that need the index alone.

/// A single comparison applied to a measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Threshold {
    /// value > bound
    Above(f64),
    /// value >= bound
    AtLeast(f64),
    /// value <= bound
    AtMost(f64),
    /// value == bound
    Exactly(f64),
}

impl Threshold {
    fn matches(self, value: f64) -> bool {
        match self {
            Threshold::Above(bound) => value > bound,
            Threshold::AtLeast(bound) => value >= bound,
            Threshold::AtMost(bound) => value <= bound,
            Threshold::Exactly(bound) => value == bound,
        }
    }
}

/// Ordered rungs evaluated top-down; the first matching rung awards its points.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ladder {
    rungs: &'static [(Threshold, i64)],
    otherwise: i64,
}

impl Ladder {
    pub(crate) const fn new(rungs: &'static [(Threshold, i64)], otherwise: i64) -> Self {
        Self { rungs, otherwise }
    }

    /// Points for the first rung the value satisfies, or the fallback.
    pub(crate) fn points(&self, value: f64) -> i64 {
        self.rungs
            .iter()
            .find(|(threshold, _)| threshold.matches(value))
            .map(|(_, points)| *points)
            .unwrap_or(self.otherwise)
    }
}

/// Ordered thresholds with no points attached; reports which band a value falls in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bands {
    thresholds: &'static [Threshold],
}

impl Bands {
    pub(crate) const fn new(thresholds: &'static [Threshold]) -> Self {
        Self { thresholds }
    }

    /// Index of the first matching threshold, or `None` below every band.
    pub(crate) fn band(&self, value: f64) -> Option<usize> {
        self.thresholds
            .iter()
            .position(|threshold| threshold.matches(value))
    }
}

/// Ladder over two measurements where both bounds must be exceeded together.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PairLadder {
    rungs: &'static [(f64, f64, i64)],
    otherwise: i64,
}

impl PairLadder {
    pub(crate) const fn new(rungs: &'static [(f64, f64, i64)], otherwise: i64) -> Self {
        Self { rungs, otherwise }
    }

    pub(crate) fn points(&self, first: f64, second: f64) -> i64 {
        self.rungs
            .iter()
            .find(|(a, b, _)| first > *a && second > *b)
            .map(|(_, _, points)| *points)
            .unwrap_or(self.otherwise)
    }
}

/// Ladder rewarding values far from typical on either side.
///
/// Each rung is `(above, below, points)` and matches when the value is
/// greater than `above` or less than `below`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExtremityLadder {
    rungs: &'static [(f64, f64, i64)],
}

impl ExtremityLadder {
    pub(crate) const fn new(rungs: &'static [(f64, f64, i64)]) -> Self {
        Self { rungs }
    }

    pub(crate) fn points(&self, value: f64) -> i64 {
        self.rung(value)
            .map(|index| self.rungs[index].2)
            .unwrap_or(0)
    }

    pub(crate) fn rung(&self, value: f64) -> Option<usize> {
        self.rungs
            .iter()
            .position(|(above, below, _)| value > *above || value < *below)
    }
}

#[cfg(test)]
mod tests {
    use super::Threshold::*;
    use super::*;

    const STEPS: Ladder = Ladder::new(&[(Above(100.0), 3), (Above(10.0), 2)], 1);

    #[test]
    fn ladder_first_match_wins() {
        assert_eq!(STEPS.points(500.0), 3);
        assert_eq!(STEPS.points(50.0), 2);
    }

    #[test]
    fn ladder_bounds_are_strict_for_above() {
        assert_eq!(STEPS.points(100.0), 2);
        assert_eq!(STEPS.points(10.0), 1);
    }

    #[test]
    fn ladder_exact_rung_takes_precedence_over_range() {
        let ladder = Ladder::new(&[(Exactly(10.0), 30), (AtLeast(8.0), 25)], 0);
        assert_eq!(ladder.points(10.0), 30);
        assert_eq!(ladder.points(11.0), 25);
        assert_eq!(ladder.points(7.0), 0);
    }

    #[test]
    fn ladder_at_most_walks_upwards() {
        let ladder = Ladder::new(&[(AtMost(10.0), 10), (AtMost(25.0), 8)], 0);
        assert_eq!(ladder.points(10.0), 10);
        assert_eq!(ladder.points(25.0), 8);
        assert_eq!(ladder.points(25.5), 0);
    }

    #[test]
    fn bands_report_first_matching_index() {
        let bands = Bands::new(&[Above(3000.0), Above(1500.0), Above(500.0)]);
        assert_eq!(bands.band(4000.0), Some(0));
        assert_eq!(bands.band(3000.0), Some(1));
        assert_eq!(bands.band(501.0), Some(2));
        assert_eq!(bands.band(500.0), None);
    }

    #[test]
    fn bands_honour_exact_and_upper_bounds() {
        let genome = Bands::new(&[Exactly(10.0), AtLeast(8.0)]);
        assert_eq!(genome.band(10.0), Some(0));
        assert_eq!(genome.band(9.0), Some(1));
        assert_eq!(genome.band(7.0), None);

        let near = Bands::new(&[AtMost(50.0), AtMost(200.0)]);
        assert_eq!(near.band(50.0), Some(0));
        assert_eq!(near.band(120.0), Some(1));
        assert_eq!(near.band(200.5), None);
    }

    #[test]
    fn pair_ladder_needs_both_bounds() {
        let ladder = PairLadder::new(&[(100.0, 1000.0, 9)], 1);
        assert_eq!(ladder.points(150.0, 1500.0), 9);
        assert_eq!(ladder.points(150.0, 500.0), 1);
        assert_eq!(ladder.points(50.0, 1500.0), 1);
    }

    #[test]
    fn extremity_ladder_matches_either_side() {
        let ladder = ExtremityLadder::new(&[(4000.0, 100.0, 15), (2500.0, 120.0, 10)]);
        assert_eq!(ladder.points(5000.0), 15);
        assert_eq!(ladder.points(50.0), 15);
        assert_eq!(ladder.points(110.0), 10);
        assert_eq!(ladder.points(1000.0), 0);
    }
}
