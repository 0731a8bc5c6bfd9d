/// An oriented rectangle fitted around a set of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MinAreaRect {
    /// Center of the rectangle in sub-pixel image coordinates.
    pub center: [f64; 2],
    /// Extents along the width and height directions.
    pub size: [f64; 2],
    /// Rotation of the width direction from the positive x axis, in degrees
    /// within `[0, 90)`.
    pub angle_deg: f64,
}

impl MinAreaRect {
    /// The four corner points of the rectangle in traversal order.
    pub fn corner_points(&self) -> [[f64; 2]; 4] {
        let (sin, cos) = self.angle_deg.to_radians().sin_cos();
        let u = [cos, sin];
        let v = [-sin, cos];
        let half_w = self.size[0] / 2.0;
        let half_h = self.size[1] / 2.0;
        [
            [
                self.center[0] - half_w * u[0] - half_h * v[0],
                self.center[1] - half_w * u[1] - half_h * v[1],
            ],
            [
                self.center[0] + half_w * u[0] - half_h * v[0],
                self.center[1] + half_w * u[1] - half_h * v[1],
            ],
            [
                self.center[0] + half_w * u[0] + half_h * v[0],
                self.center[1] + half_w * u[1] + half_h * v[1],
            ],
            [
                self.center[0] - half_w * u[0] + half_h * v[0],
                self.center[1] - half_w * u[1] + half_h * v[1],
            ],
        ]
    }
}

fn cross(o: [i32; 2], a: [i32; 2], b: [i32; 2]) -> i64 {
    let oa = [(a[0] - o[0]) as i64, (a[1] - o[1]) as i64];
    let ob = [(b[0] - o[0]) as i64, (b[1] - o[1]) as i64];
    oa[0] * ob[1] - oa[1] * ob[0]
}

/// Convex hull of a set of integer points via the monotone chain scan.
///
/// Returns the hull vertices in traversal order without repeating the first
/// one. Points collinear along a hull edge are dropped.
pub fn convex_hull(points: &[[i32; 2]]) -> Vec<[i32; 2]> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() <= 2 {
        return sorted;
    }

    let mut hull: Vec<[i32; 2]> = Vec::with_capacity(sorted.len() + 1);
    for &p in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

/// Fit the minimum-area oriented rectangle around a set of points.
///
/// Runs rotating calipers over the convex hull: the minimal rectangle shares
/// a direction with some hull edge, so every edge direction is evaluated in
/// turn. Ties keep the first minimal edge in traversal order. Returns `None`
/// when `points` is empty.
pub fn min_area_rect(points: &[[i32; 2]]) -> Option<MinAreaRect> {
    let hull = convex_hull(points);
    match hull.len() {
        0 => None,
        1 => Some(MinAreaRect {
            center: [hull[0][0] as f64, hull[0][1] as f64],
            size: [0.0, 0.0],
            angle_deg: 0.0,
        }),
        _ => Some(rect_from_hull(&hull)),
    }
}

fn rect_from_hull(hull: &[[i32; 2]]) -> MinAreaRect {
    let mut best_area = f64::INFINITY;
    let mut best = MinAreaRect {
        center: [hull[0][0] as f64, hull[0][1] as f64],
        size: [0.0, 0.0],
        angle_deg: 0.0,
    };

    for (i, a) in hull.iter().enumerate() {
        let b = hull[(i + 1) % hull.len()];
        let edge = [(b[0] - a[0]) as f64, (b[1] - a[1]) as f64];
        let norm = edge[0].hypot(edge[1]);
        if norm == 0.0 {
            continue;
        }
        let u = [edge[0] / norm, edge[1] / norm];
        let v = [-u[1], u[0]];

        let mut u_min = f64::INFINITY;
        let mut u_max = f64::NEG_INFINITY;
        let mut v_min = f64::INFINITY;
        let mut v_max = f64::NEG_INFINITY;
        for p in hull {
            let s_u = p[0] as f64 * u[0] + p[1] as f64 * u[1];
            let s_v = p[0] as f64 * v[0] + p[1] as f64 * v[1];
            u_min = u_min.min(s_u);
            u_max = u_max.max(s_u);
            v_min = v_min.min(s_v);
            v_max = v_max.max(s_v);
        }

        let area = (u_max - u_min) * (v_max - v_min);
        if area < best_area {
            best_area = area;
            best = orient_rect(u, v, [u_min, u_max], [v_min, v_max]);
        }
    }
    best
}

/// Express the winning frame with an angle in `[0, 90)`: the frame rotated by
/// 90 degrees describes the same rectangle with the extents swapped.
fn orient_rect(u: [f64; 2], v: [f64; 2], span_u: [f64; 2], span_v: [f64; 2]) -> MinAreaRect {
    let mid_u = (span_u[0] + span_u[1]) / 2.0;
    let mid_v = (span_v[0] + span_v[1]) / 2.0;
    let center = [mid_u * u[0] + mid_v * v[0], mid_u * u[1] + mid_v * v[1]];

    let mut angle_deg = u[1].atan2(u[0]).to_degrees().rem_euclid(180.0);
    let mut size = [span_u[1] - span_u[0], span_v[1] - span_v[0]];
    if angle_deg >= 90.0 {
        angle_deg -= 90.0;
        size = [size[1], size[0]];
    }

    MinAreaRect {
        center,
        size,
        angle_deg,
    }
}
