//! Polygon area and lattice counting for rectilinear loops

/// Twice the signed area of a closed polygon (shoelace formula).
///
/// The last vertex connects back to the first.
pub fn shoelace_area2(vertices: &[(i64, i64)]) -> i64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let (x1, y1) = vertices[i];
            let (x2, y2) = vertices[(i + 1) % n];
            x1 * y2 - x2 * y1
        })
        .sum()
}

/// Length of the closed polygon boundary, for axis-aligned or unit steps.
pub fn perimeter(vertices: &[(i64, i64)]) -> i64 {
    let n = vertices.len();
    (0..n)
        .map(|i| manhattan(vertices[i], vertices[(i + 1) % n]))
        .sum()
}

/// Lattice points strictly inside a lattice polygon (Pick's theorem).
pub fn interior_points(vertices: &[(i64, i64)]) -> i64 {
    let area2 = shoelace_area2(vertices).abs();
    let boundary = perimeter(vertices);
    (area2 - boundary) / 2 + 1
}

/// Lattice points inside or on the polygon boundary.
///
/// For a dig plan of unit cubes this is the lagoon volume.
pub fn enclosed_points(vertices: &[(i64, i64)]) -> i64 {
    interior_points(vertices) + perimeter(vertices)
}

pub fn manhattan(a: (i64, i64), b: (i64, i64)) -> i64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}
