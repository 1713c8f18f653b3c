use cgar_kds::{
    error::MeshError,
    geometry::point::Point,
    mesh::basic_types::Mesh,
    mesh_processing::{RefineOptions, RefineResult},
    numeric::cgar_f64::CgarF64,
};

type TestMesh = Mesh<CgarF64, 2>;

fn unit_square() -> TestMesh {
    TestMesh::from_triangles(
        vec![
            Point::from_vals([0.0, 0.0]),
            Point::from_vals([1.0, 0.0]),
            Point::from_vals([1.0, 1.0]),
            Point::from_vals([0.0, 1.0]),
        ],
        &[[0, 1, 2], [0, 2, 3]],
    )
    .unwrap()
}

/// Two unit squares side by side, faces 0-1 on the left, 2-3 on the right.
fn strip() -> TestMesh {
    TestMesh::from_triangles(
        vec![
            Point::from_vals([0.0, 0.0]),
            Point::from_vals([1.0, 0.0]),
            Point::from_vals([1.0, 1.0]),
            Point::from_vals([0.0, 1.0]),
            Point::from_vals([2.0, 0.0]),
            Point::from_vals([2.0, 1.0]),
        ],
        &[[0, 1, 2], [0, 2, 3], [1, 4, 5], [1, 5, 2]],
    )
    .unwrap()
}

fn assert_twins_symmetric(mesh: &TestMesh) {
    for (h, he) in mesh.half_edges.iter().enumerate() {
        assert_eq!(mesh.half_edges[he.twin].twin, h);
    }
}

fn refine_all(mesh: &mut TestMesh, factor: f64) -> RefineResult {
    let faces: Vec<usize> = (0..mesh.face_count()).collect();
    mesh.refine(&faces, &RefineOptions::new(factor)).unwrap()
}

#[test]
fn test_default_options() {
    let options = RefineOptions::default();
    assert!((options.density_control_factor - 2f64.sqrt()).abs() < 1e-15);
    assert_eq!(options.max_iterations, 10);
}

#[test]
fn test_refine_adds_vertices_and_keeps_area() {
    let mut mesh = unit_square();
    let result = refine_all(&mut mesh, 4.0);

    assert!(result.vertices.len() >= 2);
    assert_eq!(result.faces.len(), 2 + 2 * result.vertices.len());
    assert_eq!(mesh.face_count(), result.faces.len());
    assert_eq!(mesh.vertices.len(), 4 + result.vertices.len());
    assert!((mesh.area() - 1.0).abs() < 1e-9);
    assert!((mesh.faces_area(result.faces.iter().copied()) - 1.0).abs() < 1e-9);
    assert_twins_symmetric(&mesh);

    // The boundary is untouched.
    let border = mesh.half_edge_between(1, 0).unwrap();
    assert!((mesh.border_length(border).unwrap() - 4.0).abs() < 1e-9);
}

#[test]
fn test_low_density_factor_leaves_mesh_alone() {
    let mut mesh = unit_square();
    let result = refine_all(&mut mesh, 1.0);
    assert!(result.vertices.is_empty());
    assert_eq!(result.faces, vec![0, 1]);
    assert_eq!(mesh.face_count(), 2);
}

#[test]
fn test_faces_outside_patch_are_untouched() {
    let mut mesh = strip();
    let before = [mesh.face_vertices(2), mesh.face_vertices(3)];

    let result = mesh.refine(&[0, 1], &RefineOptions::new(4.0)).unwrap();
    assert!(!result.vertices.is_empty());
    assert!(!result.faces.contains(&2) && !result.faces.contains(&3));
    assert_eq!([mesh.face_vertices(2), mesh.face_vertices(3)], before);
    assert!((mesh.faces_area(result.faces.iter().copied()) - 1.0).abs() < 1e-9);
    assert!((mesh.area() - 2.0).abs() < 1e-9);
    assert_twins_symmetric(&mesh);
}

#[test]
fn test_duplicate_patch_faces_are_ignored() {
    let mut mesh = unit_square();
    let result = mesh.refine(&[0, 0, 1], &RefineOptions::new(1.0)).unwrap();
    assert_eq!(result.faces, vec![0, 1]);
}

#[test]
fn test_invalid_options_are_rejected() {
    let mut mesh = unit_square();
    for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = mesh.refine(&[0], &RefineOptions::new(factor)).unwrap_err();
        assert!(matches!(err, MeshError::InvalidDensityFactor(_)));
    }
    assert_eq!(
        mesh.refine(&[0, 7], &RefineOptions::default()).unwrap_err(),
        MeshError::FaceOutOfRange(7)
    );
    assert_eq!(mesh.face_count(), 2);
}

#[test]
fn test_iteration_budget_is_respected() {
    let mut mesh = unit_square();
    let options = RefineOptions {
        density_control_factor: 50.0,
        max_iterations: 1,
    };
    let result = mesh.refine(&[0, 1], &options).unwrap();
    // A single pass splits each input face once.
    assert_eq!(result.vertices.len(), 2);
}
