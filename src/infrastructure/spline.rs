// Curve smoothing for line series

type Point = (f64, f64);

/// Sample a cubic Bézier curve through `points`.
///
/// Control points follow the neighbouring points, scaled by `tension`; a
/// tension of 0 keeps the straight segments. Every input point is kept,
/// with `steps` samples per segment.
pub fn smooth(points: &[Point], tension: f64, steps: usize) -> Vec<Point> {
    if tension <= 0.0 || points.len() < 3 || steps < 2 {
        return points.to_vec();
    }

    let controls = control_points(points, tension);
    let mut curve = Vec::with_capacity((points.len() - 1) * steps + 1);
    curve.push(points[0]);

    for (i, segment) in points.windows(2).enumerate() {
        let (start, end) = (segment[0], segment[1]);
        let (c1, c2) = (controls[i].1, controls[i + 1].0);
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            curve.push(bezier(start, c1, c2, end, t));
        }
    }

    curve
}

/// (incoming, outgoing) control point for each input point
fn control_points(points: &[Point], tension: f64) -> Vec<(Point, Point)> {
    let last = points.len() - 1;
    (0..points.len())
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let current = points[i];
            let next = points[(i + 1).min(last)];

            let d01 = distance(prev, current);
            let d12 = distance(current, next);
            let total = d01 + d12;
            if total == 0.0 {
                return (current, current);
            }

            let fa = tension * d01 / total;
            let fb = tension * d12 / total;
            let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);

            (
                (current.0 - fa * dx, current.1 - fa * dy),
                (current.0 + fb * dx, current.1 + fb * dy),
            )
        })
        .collect()
}

fn distance(a: Point, b: Point) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

fn bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_zero_tension_keeps_points() {
        let points = vec![(0.0, 10.0), (1.0, 50.0), (2.0, 20.0)];
        assert_eq!(smooth(&points, 0.0, 8), points);
    }

    #[test]
    fn test_short_series_unchanged() {
        assert!(smooth(&[], 0.1, 8).is_empty());
        assert_eq!(smooth(&[(0.0, 1.0)], 0.1, 8), vec![(0.0, 1.0)]);
        assert_eq!(smooth(&[(0.0, 1.0), (1.0, 2.0)], 0.1, 8), vec![(0.0, 1.0), (1.0, 2.0)]);
    }

    #[test]
    fn test_curve_passes_through_inputs() {
        let points = vec![(0.0, 10.0), (1.0, 50.0), (2.0, 20.0), (3.0, 30.0)];
        let steps = 8;
        let curve = smooth(&points, 0.1, steps);

        assert_eq!(curve.len(), (points.len() - 1) * steps + 1);
        for (i, point) in points.iter().enumerate() {
            let sampled = curve[i * steps];
            assert!((sampled.0 - point.0).abs() < EPS);
            assert!((sampled.1 - point.1).abs() < EPS);
        }
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let points: Vec<Point> = (0..5).map(|i| (i as f64, 2.0 * i as f64)).collect();
        for (x, y) in smooth(&points, 0.4, 6) {
            assert!((y - 2.0 * x).abs() < EPS);
        }
    }

    #[test]
    fn test_repeated_points_do_not_produce_nan() {
        let points = vec![(1.0, 5.0), (1.0, 5.0), (1.0, 5.0)];
        for (x, y) in smooth(&points, 0.1, 4) {
            assert!(x.is_finite() && y.is_finite());
        }
    }
}
