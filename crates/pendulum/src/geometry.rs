use crate::{Params, State};

/// A point in the plane of swing, in meters.
///
/// The origin is the pivot, `x` grows to the right and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Cartesian positions of both bobs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Positions {
    pub upper: Point,
    pub lower: Point,
}

impl Positions {
    /// Places both bobs for the given state.
    #[must_use]
    pub fn of(state: &State, params: &Params) -> Self {
        let (sin1, cos1) = state.theta1.sin_cos();
        let (sin2, cos2) = state.theta2.sin_cos();

        let upper = Point {
            x: params.length1() * sin1,
            y: params.length1() * cos1,
        };
        let lower = Point {
            x: upper.x + params.length2() * sin2,
            y: upper.y + params.length2() * cos2,
        };

        Self { upper, lower }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::BobSpec;

    #[test]
    fn hanging_straight_down() {
        let params = Params::new(
            &BobSpec::new(0.0, 0.0, 1.0, 1.0),
            &BobSpec::new(0.0, 0.0, 0.5, 1.0),
            9.81,
        )
        .unwrap();

        let positions = Positions::of(&State::default(), &params);

        assert_eq!(positions.upper, Point { x: 0.0, y: 1.0 });
        assert_eq!(positions.lower, Point { x: 0.0, y: 1.5 });
    }

    #[test]
    fn rods_keep_their_lengths() {
        let params = Params::new(
            &BobSpec::new(0.0, 0.0, 1.0, 1.0),
            &BobSpec::new(0.0, 0.0, 0.65, 0.3),
            9.81,
        )
        .unwrap();
        let state = State::from_array([2.1, 0.0, -0.7, 0.0]);

        let Positions { upper, lower } = Positions::of(&state, &params);

        assert_relative_eq!(upper.x.hypot(upper.y), 1.0, max_relative = 1e-12);
        assert_relative_eq!(
            (lower.x - upper.x).hypot(lower.y - upper.y),
            0.65,
            max_relative = 1e-12
        );
    }
}
