//! Procedural sphere tessellation and normal reconstruction.

use glam::Vec3;

/// UV-sphere positions and triangle indices.
///
/// Vertices are laid out row by row from the north pole (`+Y`) to the south
/// pole, `width_segments + 1` per row, so the seam column and the poles are
/// duplicated. Degenerate pole triangles are skipped.
#[must_use]
pub fn uv_sphere(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
) -> (Vec<Vec3>, Vec<u32>) {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let row = w + 1;

    let mut positions = Vec::with_capacity((row * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let (sin_v, cos_v) = (v * std::f32::consts::PI).sin_cos();
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_u, cos_u) = (u * std::f32::consts::TAU).sin_cos();
            positions.push(Vec3::new(
                -radius * cos_u * sin_v,
                radius * cos_v,
                radius * sin_u * sin_v,
            ));
        }
    }

    let mut indices = Vec::with_capacity((w * (h - 1) * 6) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    (positions, indices)
}

/// Area-weighted vertex normals for an indexed triangle list.
///
/// `normals` is resized to `positions.len()`. Vertices not referenced by any
/// triangle (or only by degenerate ones) get a zero normal.
pub fn compute_vertex_normals(
    positions: &[Vec3],
    indices: &[u32],
    normals: &mut Vec<Vec3>,
) {
    normals.clear();
    normals.resize(positions.len(), Vec3::ZERO);

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let (Some(&pa), Some(&pb), Some(&pc)) =
            (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };
        // Unnormalized cross product weights by triangle area.
        let face = (pc - pb).cross(pa - pb);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for n in normals.iter_mut() {
        *n = n.normalize_or_zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertex_and_index_counts() {
        let (positions, indices) = uv_sphere(2.5, 80, 80);
        assert_eq!(positions.len(), 81 * 81);
        // Two triangles per quad, minus one per quad on each pole row.
        assert_eq!(indices.len(), (80 * 80 * 2 - 2 * 80) * 3);
        assert!(indices.iter().all(|&i| (i as usize) < positions.len()));
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let (positions, _) = uv_sphere(0.5, 16, 12);
        for p in &positions {
            assert!((p.length() - 0.5).abs() < 1e-5);
        }
        assert!(positions[0].abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), 1e-6));
        assert!(positions
            .last()
            .is_some_and(|p| p.abs_diff_eq(Vec3::new(0.0, -0.5, 0.0), 1e-6)));
    }

    #[test]
    fn sphere_normals_point_outward() {
        let (positions, indices) = uv_sphere(1.0, 24, 16);
        let mut normals = Vec::new();
        compute_vertex_normals(&positions, &indices, &mut normals);
        assert_eq!(normals.len(), positions.len());
        // Skip the poles and the seam where duplicated vertices only see
        // half of their neighbourhood.
        for (p, n) in positions.iter().zip(&normals).skip(25).take(20) {
            assert!(n.dot(*p) > 0.95, "normal {n} at {p}");
        }
    }

    #[test]
    fn degenerate_input_yields_zero_normals() {
        let positions = vec![Vec3::ZERO; 3];
        let mut normals = vec![Vec3::X; 7];
        compute_vertex_normals(&positions, &[0, 1, 2, 0, 1], &mut normals);
        assert_eq!(normals, vec![Vec3::ZERO; 3]);
    }

    #[test]
    fn tiny_segment_counts_are_raised() {
        let (positions, indices) = uv_sphere(1.0, 0, 0);
        assert_eq!(positions.len(), 4 * 3);
        assert!(!indices.is_empty());
    }
}
