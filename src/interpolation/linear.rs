use super::{accel::IntervalAccel, DerivativeOrder};

/// Piecewise linear interpolant over borrowed samples.
#[derive(Debug, Clone)]
pub(crate) struct LinearInterpolant<'a> {
    times: &'a [f64],
    points: &'a [f64],
}

impl<'a> LinearInterpolant<'a> {
    pub(crate) fn new(times: &'a [f64], points: &'a [f64]) -> Self {
        LinearInterpolant { times, points }
    }

    /// Evaluate the segment containing `time`.
    ///
    /// The first derivative is the slope of that segment, the second derivative is zero.
    pub(crate) fn evaluate(
        &self,
        time: f64,
        order: DerivativeOrder,
        accel: &mut IntervalAccel,
    ) -> f64 {
        let i = accel.find(self.times, time);
        let (t_lo, t_hi) = (self.times[i], self.times[i + 1]);
        let (y_lo, y_hi) = (self.points[i], self.points[i + 1]);

        match order {
            DerivativeOrder::Value => y_lo + (y_hi - y_lo) * (time - t_lo) / (t_hi - t_lo),
            DerivativeOrder::First => (y_hi - y_lo) / (t_hi - t_lo),
            DerivativeOrder::Second => 0.0,
        }
    }
}

#[cfg(test)]
mod linear_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_segments() {
        let times = [0.0, 1.0, 3.0];
        let points = [0.0, 2.0, -2.0];
        let interp = LinearInterpolant::new(&times, &points);
        let mut accel = IntervalAccel::new();

        assert_relative_eq!(interp.evaluate(0.5, DerivativeOrder::Value, &mut accel), 1.0);
        assert_relative_eq!(interp.evaluate(2.0, DerivativeOrder::Value, &mut accel), 0.0);
        assert_relative_eq!(interp.evaluate(3.0, DerivativeOrder::Value, &mut accel), -2.0);

        assert_relative_eq!(interp.evaluate(0.5, DerivativeOrder::First, &mut accel), 2.0);
        assert_relative_eq!(interp.evaluate(2.0, DerivativeOrder::First, &mut accel), -2.0);
        assert_eq!(interp.evaluate(2.0, DerivativeOrder::Second, &mut accel), 0.0);
    }
}
