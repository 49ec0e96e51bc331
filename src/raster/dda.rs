//! Digital differential analyzer.
//!
//! Samples the segment `max(|dx|, |dy|) + 1` times at equal parameter steps.
//! Sampling starts at the pixel center `(x0 + 0.5, y0 + 0.5)` and each sample
//! is floored, which keeps the sampling grid centered on the pixels.

use crate::geometry::Point;
use crate::step::{Step, StepTrace};

/// Rasterize the segment `start`-`end` with a center-sampled DDA.
#[must_use]
pub fn dda_line(start: Point, end: Point) -> Vec<Step> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = dx.abs().max(dy.abs());

    if length == 0 {
        return vec![Step::new(start, "single point")];
    }

    let origin_x = f64::from(start.x) + 0.5;
    let origin_y = f64::from(start.y) + 0.5;
    let len = f64::from(length);

    let mut trace = StepTrace::with_capacity(length as usize + 1);
    for i in 0..=length {
        // i * d / L is evaluated from integers each step so the samples cannot drift.
        let sample_x = origin_x + (i64::from(i) * i64::from(dx)) as f64 / len;
        let sample_y = origin_y + (i64::from(i) * i64::from(dy)) as f64 / len;
        let pixel = Point::new(sample_x.floor() as i32, sample_y.floor() as i32);
        trace.push_unique(Step::new(pixel, format!("step {i}: ({sample_x:.2}, {sample_y:.2})")));
    }

    trace.into_steps()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(steps: &[Step]) -> Vec<(i32, i32)> {
        steps.iter().map(|s| (s.coordinates().x, s.coordinates().y)).collect()
    }

    #[test]
    fn test_single_point() {
        let steps = dda_line(Point::new(5, -2), Point::new(5, -2));
        assert_eq!(points(&steps), vec![(5, -2)]);
    }

    #[test]
    fn test_gentle_slope() {
        let steps = dda_line(Point::new(0, 0), Point::new(4, 2));
        assert_eq!(points(&steps), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_negative_direction() {
        let steps = dda_line(Point::new(0, 0), Point::new(-4, -2));
        assert_eq!(points(&steps), vec![(0, 0), (-1, 0), (-2, -1), (-3, -1), (-4, -2)]);
    }

    #[test]
    fn test_steep_line_is_connected() {
        let steps = dda_line(Point::new(0, 0), Point::new(3, 11));
        assert_eq!(steps.len(), 12);
        for pair in steps.windows(2) {
            assert!(pair[0].coordinates().touches(pair[1].coordinates()));
        }
        assert_eq!(steps.first().map(Step::coordinates), Some(Point::new(0, 0)));
        assert_eq!(steps.last().map(Step::coordinates), Some(Point::new(3, 11)));
    }

    #[test]
    fn test_diagonal() {
        let steps = dda_line(Point::new(0, 0), Point::new(3, 3));
        assert_eq!(points(&steps), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }
}
