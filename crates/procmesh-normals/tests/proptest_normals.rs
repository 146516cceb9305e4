//! Property-based tests for normal recomputation.
//!
//! These tests generate random meshes and verify the algebraic properties
//! of the solver: output normal length, winding antisymmetry, crease
//! threshold monotonicity, and triangle-order independence.
//!
//! Run with: cargo test -p procmesh-normals -- proptest

use nalgebra::{Point3, Vector3};
use procmesh_normals::smooth_normals;
use procmesh_types::Triangle;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Positions snapped to a coarse grid, so duplicated (weldable) positions
/// actually occur in random meshes.
fn arb_position() -> impl Strategy<Value = Point3<f32>> {
    prop::array::uniform3(-4i32..=4).prop_map(|[x, y, z]| {
        Point3::new(x as f32 * 0.5, y as f32 * 0.5, z as f32 * 0.5)
    })
}

/// A mesh with valid triangle indices. Degenerate triangles (repeated or
/// collinear corners) are allowed; the solver accepts them.
fn arb_mesh() -> impl Strategy<Value = (Vec<Point3<f32>>, Vec<Triangle>)> {
    (4usize..24).prop_flat_map(|num_vertices| {
        let vertices = prop::collection::vec(arb_position(), num_vertices);

        vertices.prop_flat_map(move |verts| {
            let n = verts.len() as u32;
            let tri = prop::array::uniform3(0..n).prop_map(|[a, b, c]| Triangle::new(a, b, c));
            let faces = prop::collection::vec(tri, 1..20);

            faces.prop_map(move |tris| (verts.clone(), tris))
        })
    })
}

/// A fold mesh: two triangles sharing a duplicated edge, the second rotated
/// `fold_deg` about the shared X axis. Returns positions and triangles.
fn fold_mesh(fold_deg: f32) -> (Vec<Point3<f32>>, Vec<Triangle>) {
    let (s, c) = fold_deg.to_radians().sin_cos();
    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, -c, s),
    ];
    let triangles = vec![Triangle::new(0, 1, 2), Triangle::new(3, 5, 4)];
    (positions, triangles)
}

fn approx_eq(a: Vector3<f32>, b: Vector3<f32>) -> bool {
    (a - b).norm() < 1e-4
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every written output normal is unit length, unless a degenerate
    /// triangle poisoned its group (NaN). Unreferenced slots stay zero.
    #[test]
    fn outputs_are_unit_zero_or_nan((positions, triangles) in arb_mesh()) {
        let normals = smooth_normals(&positions, &triangles, 60.0).unwrap();
        prop_assert_eq!(normals.len(), positions.len());

        for n in &normals {
            let len = n.norm();
            let ok = len.is_nan() || len == 0.0 || (len - 1.0).abs() < 1e-4;
            prop_assert!(ok, "unexpected normal length {}", len);
        }
    }

    /// Reversing the winding of every triangle negates every finite output.
    #[test]
    fn global_winding_reversal_negates_outputs((positions, triangles) in arb_mesh()) {
        let forward = smooth_normals(&positions, &triangles, 60.0).unwrap();

        let reversed: Vec<Triangle> = triangles.iter().map(Triangle::reversed).collect();
        let backward = smooth_normals(&positions, &reversed, 60.0).unwrap();

        for (f, b) in forward.iter().zip(&backward) {
            if f.iter().all(|c| c.is_finite()) {
                prop_assert!(approx_eq(*b, -f), "expected {:?}, got {:?}", -f, b);
            }
        }
    }

    /// Supplying the triangles in a different order changes nothing.
    #[test]
    fn triangle_order_is_irrelevant(
        (positions, triangles) in arb_mesh(),
        seed in 0usize..1000,
    ) {
        let baseline = smooth_normals(&positions, &triangles, 60.0).unwrap();

        let mut permuted = triangles.clone();
        let permuted_len = permuted.len();
        permuted.rotate_left(seed % permuted_len.max(1));
        if permuted_len > 1 {
            permuted.swap(0, seed % permuted_len);
        }
        let shuffled = smooth_normals(&positions, &permuted, 60.0).unwrap();

        for (a, b) in baseline.iter().zip(&shuffled) {
            if a.iter().all(|c| c.is_finite()) {
                prop_assert!(approx_eq(*a, *b), "expected {:?}, got {:?}", a, b);
            }
        }
    }

    /// A fold smooths exactly when the crease angle reaches the fold angle:
    /// below it both sides keep their face normals, above it they share one
    /// blended normal. Widening the crease angle can only add smoothing.
    #[test]
    fn crease_threshold_is_monotonic(fold_deg in 20.0f32..160.0) {
        let (positions, triangles) = fold_mesh(fold_deg);

        // Margins of one degree keep the check away from rounding at the
        // exact threshold (the inclusive boundary has its own test).
        let hard = smooth_normals(&positions, &triangles, fold_deg - 1.0).unwrap();
        let smooth = smooth_normals(&positions, &triangles, fold_deg + 1.0).unwrap();

        // Hard: the duplicated occurrences disagree.
        prop_assert!(!approx_eq(hard[0], hard[3]));
        // Smooth: they agree.
        prop_assert!(approx_eq(smooth[0], smooth[3]));

        // And every angle past the fold keeps them agreeing.
        for extra in [10.0f32, 30.0, 60.0] {
            let angle = (fold_deg + extra).min(180.0);
            let wider = smooth_normals(&positions, &triangles, angle).unwrap();
            prop_assert!(approx_eq(wider[0], wider[3]));
        }
    }
}
