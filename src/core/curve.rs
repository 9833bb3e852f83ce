/// One cubic Bezier span of the projected price curve, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub x0: f64,
    pub y0: f64,
    pub cx1: f64,
    pub cy1: f64,
    pub cx2: f64,
    pub cy2: f64,
    pub x1: f64,
    pub y1: f64,
}

impl CubicSegment {
    /// Evaluates the Bezier at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn eval(self, t: f64) -> (f64, f64) {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        (
            b0 * self.x0 + b1 * self.cx1 + b2 * self.cx2 + b3 * self.x1,
            b0 * self.y0 + b1 * self.cy1 + b2 * self.cy2 + b3 * self.y1,
        )
    }
}

/// Monotone cubic interpolation (Fritsch-Carlson) through projected points.
///
/// Tangents are clamped so each span never overshoots the y extent of its
/// bracketing points: a rendered price curve cannot imply local extrema the
/// data does not contain. Fewer than two points yield no segments.
#[must_use]
pub fn monotone_segments(points: &[(f64, f64)]) -> Vec<CubicSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let n = points.len();
    let mut tangents = vec![0.0; n];
    if n == 2 {
        // Two points degenerate to the straight secant.
        let h = points[1].0 - points[0].0;
        let secant = if h != 0.0 {
            (points[1].1 - points[0].1) / h
        } else {
            0.0
        };
        let secant = if secant.is_finite() { secant } else { 0.0 };
        tangents[0] = secant;
        tangents[1] = secant;
    } else {
        for i in 1..n - 1 {
            tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
        }
        tangents[0] = endpoint_tangent(points[0], points[1], tangents[1]);
        tangents[n - 1] = endpoint_tangent(points[n - 2], points[n - 1], tangents[n - 2]);
    }

    let mut segments = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = (x1 - x0) / 3.0;
        segments.push(CubicSegment {
            x0,
            y0,
            cx1: x0 + dx,
            cy1: y0 + dx * tangents[i],
            cx2: x1 - dx,
            cy2: y1 - dx * tangents[i + 1],
            x1,
            y1,
        });
    }
    segments
}

/// Three-point tangent: the harmonic blend of secant slopes, clamped to
/// zero when the secants disagree in sign.
fn interior_tangent(prev: (f64, f64), current: (f64, f64), next: (f64, f64)) -> f64 {
    let h0 = current.0 - prev.0;
    let h1 = next.0 - current.0;
    let s0 = (current.1 - prev.1) / h0;
    let s1 = (next.1 - current.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);

    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

/// One-sided endpoint tangent preserving monotonicity of the edge span.
fn endpoint_tangent(from: (f64, f64), to: (f64, f64), inner_tangent: f64) -> f64 {
    let h = to.0 - from.0;
    let tangent = if h != 0.0 {
        (3.0 * (to.1 - from.1) / h - inner_tangent) / 2.0
    } else {
        inner_tangent
    };
    if tangent.is_finite() { tangent } else { 0.0 }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
