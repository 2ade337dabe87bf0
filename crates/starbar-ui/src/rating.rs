//! Mapping a single rating value onto per-star fill fractions.

/// Signed fill fraction of star `index` for `current_rating`.
///
/// No clamping: stars past the rating come out negative, stars well below it
/// come out above one. [`FillState::of`] interprets the value.
#[inline]
pub fn fill_fraction_for(index: usize, current_rating: f32) -> f32 {
    current_rating - index as f32
}

/// How much of a star is painted in the fill color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FillState {
    /// Fraction below zero: background only.
    Empty,
    /// Fraction in `[0, 1)`: the left `fraction` of the star's width.
    Partial(f32),
    /// Fraction of one or more.
    Full,
}

impl FillState {
    pub fn of(fraction: f32) -> Self {
        if fraction < 0.0 {
            FillState::Empty
        } else if fraction < 1.0 {
            FillState::Partial(fraction)
        } else {
            FillState::Full
        }
    }

    /// `true` when the star gets a clipped foreground pass.
    #[inline]
    pub fn has_foreground(self) -> bool {
        !matches!(self, FillState::Empty)
    }
}

/// Fractional part of the rating, the only part that shapes a partial mask.
#[inline]
pub fn rating_fraction(current_rating: f32) -> f32 {
    current_rating - current_rating.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_rating_minus_index() {
        for rating in [0.0_f32, 0.3, 3.7, 5.0, 12.25, -2.0] {
            for index in 0..8 {
                assert_eq!(fill_fraction_for(index, rating), rating - index as f32);
            }
        }
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(FillState::of(-0.0001), FillState::Empty);
        assert_eq!(FillState::of(0.0), FillState::Partial(0.0));
        assert_eq!(FillState::of(0.999), FillState::Partial(0.999));
        assert_eq!(FillState::of(1.0), FillState::Full);
        assert_eq!(FillState::of(7.5), FillState::Full);
    }

    #[test]
    fn only_empty_skips_the_foreground() {
        assert!(!FillState::of(-0.3).has_foreground());
        assert!(FillState::of(0.0).has_foreground());
        assert!(FillState::of(2.0).has_foreground());
    }

    #[test]
    fn rating_fraction_of_whole_and_partial() {
        assert_eq!(rating_fraction(3.0), 0.0);
        assert!((rating_fraction(3.7) - 0.7).abs() < 1e-6);
        assert!((rating_fraction(-0.25) - 0.75).abs() < 1e-6);
    }
}
