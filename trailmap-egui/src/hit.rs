//! Screen-space hit testing for overlay clicks.

use egui::Pos2;

/// Extra distance in points around a line within which a click still counts.
pub const CLICK_TOLERANCE: f32 = 6.0;

/// Distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }

    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Distance from `p` to an open polyline. A single point is treated as a dot.
pub fn distance_to_polyline(p: Pos2, points: &[Pos2]) -> Option<f32> {
    match points {
        [] => None,
        [single] => Some(p.distance(*single)),
        _ => points
            .windows(2)
            .map(|w| distance_to_segment(p, w[0], w[1]))
            .reduce(f32::min),
    }
}

/// Distance from `p` to the border of a closed ring.
pub fn distance_to_ring(p: Pos2, ring: &[Pos2]) -> Option<f32> {
    let open = distance_to_polyline(p, ring)?;
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 2 => {
            Some(open.min(distance_to_segment(p, *last, *first)))
        }
        _ => Some(open),
    }
}

/// Even-odd point in polygon test. The ring is implicitly closed.
pub fn point_in_polygon(p: Pos2, ring: &[Pos2]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Returns true if a click at `p` lands on a polyline drawn with `width`.
pub fn hits_polyline(p: Pos2, points: &[Pos2], width: f32) -> bool {
    distance_to_polyline(p, points)
        .is_some_and(|d| d <= width.max(0.0) / 2.0 + CLICK_TOLERANCE)
}

/// Returns true if a click at `p` lands inside a polygon or on its border.
pub fn hits_polygon(p: Pos2, ring: &[Pos2], stroke_width: f32) -> bool {
    point_in_polygon(p, ring)
        || distance_to_ring(p, ring)
            .is_some_and(|d| d <= stroke_width.max(0.0) / 2.0 + CLICK_TOLERANCE)
}
