use cgar_kds::{
    error::MeshError,
    geometry::point::Point,
    mesh::basic_types::Mesh,
    numeric::cgar_f64::CgarF64,
};

type TestMesh = Mesh<CgarF64, 2>;
type TestPoint = Point<CgarF64, 2>;

fn p(x: f64, y: f64) -> TestPoint {
    TestPoint::from_vals([x, y])
}

/// Unit square split along the diagonal 0-2.
fn unit_square() -> TestMesh {
    TestMesh::from_triangles(
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)],
        &[[0, 1, 2], [0, 2, 3]],
    )
    .unwrap()
}

fn assert_twins_symmetric(mesh: &TestMesh) {
    for (h, he) in mesh.half_edges.iter().enumerate() {
        assert_eq!(mesh.half_edges[he.twin].twin, h, "twin mismatch at {}", h);
        assert_eq!(mesh.source(he.twin), mesh.target(h));
    }
}

fn assert_edge_map_consistent(mesh: &TestMesh) {
    assert_eq!(mesh.edge_map.len(), mesh.half_edges.len());
    for (&(u, v), &h) in &mesh.edge_map {
        assert_eq!((mesh.source(h), mesh.target(h)), (u, v));
    }
}

fn assert_faces_consistent(mesh: &TestMesh) {
    for f in 0..mesh.face_count() {
        for h in mesh.face_half_edges(f) {
            assert_eq!(mesh.half_edges[h].face, Some(f));
            let next = mesh.half_edges[h].next;
            assert_eq!(mesh.half_edges[next].prev, h);
            assert_eq!(mesh.source(next), mesh.target(h));
        }
    }
}

#[test]
fn test_square_construction() {
    let mesh = unit_square();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.face_count(), 2);
    assert_eq!(mesh.half_edges.len(), 10);
    assert_eq!(mesh.edges().len(), 5);
    assert_eq!(mesh.border_half_edges().len(), 4);
    assert_twins_symmetric(&mesh);
    assert_edge_map_consistent(&mesh);
    assert_faces_consistent(&mesh);
}

#[test]
fn test_face_vertices_follow_input_order() {
    let mesh = unit_square();
    assert_eq!(mesh.face_vertices(0), [0, 1, 2]);
    assert_eq!(mesh.face_vertices(1), [0, 2, 3]);
}

#[test]
fn test_boundary_loop_walks_the_square() {
    let mesh = unit_square();
    let b = mesh.half_edge_between(1, 0).unwrap();
    assert!(mesh.is_border(b));

    let loop_ = mesh.half_edges_around_face(b);
    assert_eq!(loop_.len(), 4);
    for &h in &loop_ {
        assert!(mesh.is_border(h));
    }
    let targets: Vec<usize> = loop_.iter().map(|&h| mesh.target(h)).collect();
    assert_eq!(targets, vec![0, 3, 2, 1]);
}

#[test]
fn test_outgoing_half_edges() {
    let mesh = unit_square();
    let mut around_0: Vec<usize> = mesh
        .outgoing_half_edges(0)
        .into_iter()
        .map(|h| mesh.target(h))
        .collect();
    around_0.sort();
    assert_eq!(around_0, vec![1, 2, 3]);
    assert_eq!(mesh.outgoing_half_edges(1).len(), 2);

    let mut lonely = TestMesh::new();
    let v = lonely.add_vertex(p(0.0, 0.0));
    assert!(lonely.outgoing_half_edges(v).is_empty());
}

#[test]
fn test_add_triangle_rejects_bad_input() {
    let mut mesh = unit_square();
    assert_eq!(mesh.add_triangle(0, 1, 9), Err(MeshError::VertexOutOfRange(9)));
    assert_eq!(mesh.add_triangle(0, 0, 1), Err(MeshError::DegenerateTriangle(0, 0, 1)));
    // 0->1 already bounds face 0.
    let v = mesh.add_vertex(p(0.5, -1.0));
    assert_eq!(mesh.add_triangle(0, 1, v), Err(MeshError::NonManifoldEdge(0, 1)));
    assert_eq!(mesh.face_count(), 2);
    assert_edge_map_consistent(&mesh);
}

#[test]
fn test_add_triangle_claims_border_half_edges() {
    let mut mesh = unit_square();
    let v = mesh.add_vertex(p(0.5, -1.0));
    let f = mesh.add_triangle(1, 0, v).unwrap();
    mesh.build_boundary_loops();

    assert_eq!(mesh.face_vertices(f), [1, 0, v]);
    assert_eq!(mesh.border_half_edges().len(), 5);
    assert_twins_symmetric(&mesh);
    assert_faces_consistent(&mesh);
}

#[test]
fn test_split_face() {
    let mut mesh = unit_square();
    let split = mesh.split_face(0, p(2.0 / 3.0, 1.0 / 3.0)).unwrap();

    assert_eq!(split.vertex, 4);
    assert_eq!(split.faces, [0, 2, 3]);
    assert_eq!(mesh.face_count(), 4);
    assert_eq!(mesh.face_vertices(0), [0, 1, 4]);
    assert_eq!(mesh.face_vertices(2), [1, 2, 4]);
    assert_eq!(mesh.face_vertices(3), [2, 0, 4]);
    assert_eq!(mesh.outgoing_half_edges(4).len(), 3);
    assert_twins_symmetric(&mesh);
    assert_edge_map_consistent(&mesh);
    assert_faces_consistent(&mesh);

    assert_eq!(
        mesh.split_face(9, p(0.0, 0.0)),
        Err(MeshError::FaceOutOfRange(9))
    );
}

#[test]
fn test_flip_edge() {
    let mut mesh = unit_square();
    let diagonal = mesh.half_edge_between(0, 2).unwrap();
    mesh.flip_edge(diagonal).unwrap();

    assert_eq!(mesh.half_edge_between(0, 2), None);
    assert_eq!(mesh.half_edge_between(2, 0), None);
    // The flipped half-edge keeps its index and now runs 1 -> 3.
    assert_eq!(mesh.half_edge_between(1, 3), Some(diagonal));
    assert!(mesh.half_edge_between(3, 1).is_some());

    let mut corners: Vec<[usize; 3]> = (0..2)
        .map(|f| {
            let mut v = mesh.face_vertices(f);
            v.sort();
            v
        })
        .collect();
    corners.sort();
    assert_eq!(corners, vec![[0, 1, 3], [1, 2, 3]]);

    for v in 0..4 {
        let out = mesh.outgoing_half_edges(v);
        assert!(out.iter().all(|&h| mesh.source(h) == v));
    }
    assert_twins_symmetric(&mesh);
    assert_edge_map_consistent(&mesh);
    assert_faces_consistent(&mesh);
}

#[test]
fn test_border_edge_is_seen_from_both_sides() {
    let mesh = unit_square();
    let inner = mesh.half_edge_between(0, 1).unwrap();
    let outer = mesh.half_edge_between(1, 0).unwrap();
    assert!(!mesh.is_border(inner));
    assert!(mesh.is_border(outer));
    assert!(mesh.is_border_edge(inner));
    assert!(mesh.is_border_edge(outer));

    let diagonal = mesh.half_edge_between(0, 2).unwrap();
    assert!(!mesh.is_border_edge(diagonal));
    assert!(!mesh.is_border_edge(mesh.half_edges[diagonal].twin));
}

#[test]
fn test_flip_edge_errors() {
    let mut mesh = unit_square();
    let border = mesh.half_edge_between(0, 1).unwrap();
    assert_eq!(mesh.flip_edge(border), Err(MeshError::BorderEdge(border)));
    assert_eq!(mesh.flip_edge(1000), Err(MeshError::HalfEdgeOutOfRange(1000)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MeshError::NotBorder(3).to_string(),
        "half-edge 3 is not a border half-edge"
    );
    assert_eq!(
        MeshError::InvalidDensityFactor(-1.0).to_string(),
        "density control factor -1 must be finite and positive"
    );
}
