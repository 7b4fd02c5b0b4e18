use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use mesh_shape::prelude::*;

const C: f64 = -2.44948974278318;

fn quadratic() -> HierarchicShape {
    HierarchicShape::quadratic()
}

fn values(cell_type: CellType, xi: Vector3) -> Vec<f64> {
    quadratic().entity_shape(cell_type).unwrap().values(xi)
}

#[test]
fn vertex_is_constant_one() {
    let n = values(CellType::Vertex, Vector3::new(0.3, -0.7, 2.0));
    assert_eq!(n, vec![1.0]);
    let dn = quadratic()
        .entity_shape(CellType::Vertex)
        .unwrap()
        .local_gradients(Vector3::ZERO);
    assert_eq!(dn, vec![Vector3::ZERO]);
}

#[test]
fn edge_bubble_vanishes_at_endpoints() {
    for xi in [-1.0, 1.0] {
        let n = values(CellType::Segment, Vector3::new(xi, 0.0, 0.0));
        assert_abs_diff_eq!(n[2], 0.0);
    }
    // Interior maximum magnitude at the midpoint.
    let mid = values(CellType::Segment, Vector3::ZERO);
    assert_abs_diff_eq!(mid[2], C / 4.0);
}

#[test]
fn triangle_bubbles_vanish_at_vertices() {
    for vertex in [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ] {
        let n = values(CellType::Triangle, vertex);
        for bubble in &n[3..] {
            assert_abs_diff_eq!(*bubble, 0.0);
        }
    }
}

#[test]
fn tetrahedron_bubbles_vanish_at_vertices() {
    for vertex in [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ] {
        let n = values(CellType::Tetrahedron, vertex);
        for bubble in &n[4..] {
            assert_abs_diff_eq!(*bubble, 0.0);
        }
    }
}

#[test]
fn count_nodes_matches_produced_lengths_for_both_families() {
    let xi = Vector3::new(0.11, 0.07, 0.05);
    let families: [&dyn FieldShape; 2] = [&HierarchicShape::quadratic(), &LagrangeShape::linear()];
    for family in families {
        for cell_type in [
            CellType::Vertex,
            CellType::Segment,
            CellType::Triangle,
            CellType::Tetrahedron,
        ] {
            let es = family.entity_shape(cell_type).unwrap();
            assert_eq!(es.values(xi).len(), es.count_nodes());
            assert_eq!(es.local_gradients(xi).len(), es.count_nodes());
        }
    }
}

#[test]
fn node_xi_is_always_the_origin() {
    // Node positions of the hierarchic family are not geometrically
    // meaningful; every query answers the origin.
    let shape = quadratic();
    for cell_type in [CellType::Vertex, CellType::Segment, CellType::Triangle] {
        for node in 0..3 {
            assert_eq!(shape.node_xi(cell_type, node), Vector3::ZERO);
        }
    }
}

fn finite_difference_gradient(
    cell_type: CellType,
    xi: Vector3,
    node: usize,
    dims: usize,
) -> Vector3 {
    let h = 1e-6;
    let mut grad = Vector3::ZERO;
    for d in 0..dims {
        let mut fwd = xi;
        let mut bwd = xi;
        fwd[d] += h;
        bwd[d] -= h;
        grad[d] = (values(cell_type, fwd)[node] - values(cell_type, bwd)[node]) / (2.0 * h);
    }
    grad
}

#[test]
fn gradients_match_finite_differences() {
    let samples = [
        (CellType::Segment, Vector3::new(-0.35, 0.0, 0.0), 1),
        (CellType::Segment, Vector3::new(0.6, 0.0, 0.0), 1),
        (CellType::Triangle, Vector3::new(0.25, 0.3, 0.0), 2),
        (CellType::Triangle, Vector3::new(0.1, 0.05, 0.0), 2),
        (CellType::Tetrahedron, Vector3::new(0.2, 0.25, 0.3), 3),
        (CellType::Tetrahedron, Vector3::new(0.05, 0.1, 0.15), 3),
    ];
    for (cell_type, xi, dims) in samples {
        let space = quadratic();
        let es = space.entity_shape(cell_type).unwrap();
        let gradients = es.local_gradients(xi);
        for (node, analytic) in gradients.iter().enumerate() {
            let numeric = finite_difference_gradient(cell_type, xi, node, dims);
            for d in 0..3 {
                assert_abs_diff_eq!(analytic[d], numeric[d], epsilon = 1e-6);
            }
        }
    }
}

fn triangle_xi() -> impl Strategy<Value = Vector3> {
    (0.0..1.0f64, 0.0..1.0f64).prop_map(|(a, b)| {
        if a + b > 1.0 {
            Vector3::new(1.0 - a, 1.0 - b, 0.0)
        } else {
            Vector3::new(a, b, 0.0)
        }
    })
}

fn tetrahedron_xi() -> impl Strategy<Value = Vector3> {
    (0.0..1.0f64, 0.0..1.0f64, 0.0..1.0f64).prop_map(|(a, b, c)| {
        let mut s = [a, b, c];
        s.sort_by(|u, v| u.partial_cmp(v).unwrap());
        Vector3::new(s[0], s[1] - s[0], s[2] - s[1])
    })
}

proptest! {
    #[test]
    fn edge_linear_subset_sums_to_one(x in -1.0..1.0f64) {
        let n = values(CellType::Segment, Vector3::new(x, 0.0, 0.0));
        prop_assert!((n[0] + n[1] - 1.0).abs() < 1e-12);
        // The bubble is the scaled product of the linear pair.
        prop_assert!((n[2] - C * n[0] * n[1]).abs() < 1e-12);
    }

    #[test]
    fn triangle_linear_subset_sums_to_one(xi in triangle_xi()) {
        let n = values(CellType::Triangle, xi);
        prop_assert!((n[0] + n[1] + n[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tetrahedron_linear_subset_sums_to_one(xi in tetrahedron_xi()) {
        let n = values(CellType::Tetrahedron, xi);
        prop_assert!((n[0] + n[1] + n[2] + n[3] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn triangle_bubbles_are_scaled_pair_products(xi in triangle_xi()) {
        let n = values(CellType::Triangle, xi);
        let pairs = [(0, 1), (1, 2), (2, 0)];
        for (k, (i, j)) in pairs.iter().enumerate() {
            prop_assert!((n[3 + k] - C * n[*i] * n[*j]).abs() < 1e-12);
        }
    }
}
