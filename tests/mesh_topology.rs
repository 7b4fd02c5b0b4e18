use mesh_shape::prelude::*;

#[test]
fn two_tetrahedra_share_a_face_and_its_edges() {
    let mut mesh = InMemoryMesh::new();
    let v: Vec<PointId> = (0..5).map(|_| mesh.add_vertex()).collect();
    let t0 = mesh
        .add_cell(CellType::Tetrahedron, &[v[0], v[1], v[2], v[3]])
        .unwrap();
    let t1 = mesh
        .add_cell(CellType::Tetrahedron, &[v[0], v[1], v[2], v[4]])
        .unwrap();

    // 6 + 3 new edges, 4 + 3 new faces.
    assert_eq!(mesh.entity_count(0), 5);
    assert_eq!(mesh.entity_count(1), 9);
    assert_eq!(mesh.entity_count(2), 7);
    assert_eq!(mesh.entity_count(3), 2);

    let f0 = mesh.down(t0, 2).unwrap();
    let f1 = mesh.down(t1, 2).unwrap();
    // Both tets list the shared face (0,1,2) first in canonical order.
    assert_eq!(f0[0], f1[0]);
}

#[test]
fn down_vertices_follow_insertion_order_of_cell() {
    let mut mesh = InMemoryMesh::new();
    let a = mesh.add_vertex();
    let b = mesh.add_vertex();
    let c = mesh.add_vertex();
    let tri = mesh.add_cell(CellType::Triangle, &[c, a, b]).unwrap();
    assert_eq!(mesh.down(tri, 0).unwrap(), vec![c, a, b]);
}

#[test]
fn entity_iteration_is_restartable_and_deterministic() {
    let mut mesh = InMemoryMesh::new();
    let v: Vec<PointId> = (0..4).map(|_| mesh.add_vertex()).collect();
    mesh.add_cell(CellType::Triangle, &[v[0], v[1], v[2]])
        .unwrap();
    mesh.add_cell(CellType::Triangle, &[v[1], v[3], v[2]])
        .unwrap();

    for dim in 0..=2 {
        let first: Vec<PointId> = mesh.points_of_dimension(dim).collect();
        let second: Vec<PointId> = mesh.points_of_dimension(dim).collect();
        assert_eq!(first, second);
    }
    assert!(mesh.points_of_dimension(3).next().is_none());
}
