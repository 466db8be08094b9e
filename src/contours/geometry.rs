use super::Point;

/// Absolute polygon area by the shoelace formula (implicitly closed).
pub fn contour_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    twice.abs() as f64 * 0.5
}

/// Polyline length; `closed` adds the segment from the last point back to the
/// first.
pub fn arc_length(points: &[Point], closed: bool) -> f64 {
    let seg = |a: &Point, b: &Point| {
        let dx = (b.x - a.x) as f64;
        let dy = (b.y - a.y) as f64;
        dx.hypot(dy)
    };
    let open: f64 = points.windows(2).map(|w| seg(&w[0], &w[1])).sum();
    match (closed, points.first(), points.last()) {
        (true, Some(first), Some(last)) if points.len() > 1 => open + seg(last, first),
        _ => open,
    }
}

/// Keep the first point and every point where the chain changes direction.
pub fn simplify_chain(chain: &[Point]) -> Vec<Point> {
    let n = chain.len();
    if n < 3 {
        return chain.to_vec();
    }
    let delta = |a: Point, b: Point| (b.x - a.x, b.y - a.y);
    let mut out = Vec::with_capacity(n / 2 + 1);
    for i in 0..n {
        let prev = chain[(i + n - 1) % n];
        let cur = chain[i];
        let next = chain[(i + 1) % n];
        if i == 0 || delta(prev, cur) != delta(cur, next) {
            out.push(cur);
        }
    }
    out
}
