use pk_results::{ArtifactStore, ResultsError, RunManifest, names};

fn fresh_store(dir_name: &str) -> ArtifactStore {
    let temp_dir = std::env::temp_dir().join(dir_name);
    let _ = std::fs::remove_dir_all(&temp_dir);
    ArtifactStore::new(temp_dir).unwrap()
}

#[test]
fn vector_round_trip() {
    let store = fresh_store("pk_results_vector");
    store
        .write_vector(names::POWERS, &[1.0, 1.25, 1.5e-3, -0.75])
        .unwrap();
    let values = store.read_vector(names::POWERS).unwrap();
    assert_eq!(values, vec![1.0, 1.25, 1.5e-3, -0.75]);
}

#[test]
fn matrix_round_trip() {
    let store = fresh_store("pk_results_matrix");
    let rows = vec![vec![-1.0, 1.5, 0.0], vec![0.0, -1.0, 1.5]];
    store.write_matrix(names::MATRIX_A, &rows).unwrap();
    let loaded = store.read_matrix(names::MATRIX_A).unwrap();
    assert_eq!(loaded, rows);
}

#[test]
fn manifest_round_trip() {
    let store = fresh_store("pk_results_manifest");
    let manifest = RunManifest {
        run_id: "solution".to_string(),
        timestamp: "2026-08-07T12:00:00Z".to_string(),
        solver_version: "0.1.0".to_string(),
        method: "implicit euler".to_string(),
        num_steps: 101,
        dt_s: 0.01,
        num_groups: 1,
    };
    store.save_manifest(&manifest).unwrap();
    assert_eq!(store.load_manifest().unwrap(), manifest);
}

#[test]
fn missing_artifact_reported_by_name() {
    let store = fresh_store("pk_results_missing");
    let err = store.read_vector(names::TIMES).unwrap_err();
    assert!(matches!(err, ResultsError::ArtifactNotFound { .. }));
}

#[test]
fn malformed_artifact_reports_line() {
    let store = fresh_store("pk_results_malformed");
    std::fs::write(store.path_of(names::POWERS), "1.0\nnot-a-number\n").unwrap();
    let err = store.read_vector(names::POWERS).unwrap_err();
    match err {
        ResultsError::MalformedArtifact { line, token, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "not-a-number");
        }
        other => panic!("unexpected error: {other}"),
    }
}
