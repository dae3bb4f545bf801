//! Integration test: full solution pipeline from a YAML file to artifacts.

use std::path::PathBuf;

use pk_app::run_solution;
use pk_project::load_yaml;
use pk_results::{ArtifactStore, names};

fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn fresh_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn step_insertion_end_to_end() {
    let input = load_yaml(&demo_path("step_insertion.yaml")).expect("demo input loads");
    let out_dir = fresh_dir("pk_app_solution_e2e");

    let summary = run_solution(&input, &out_dir).expect("solution run");
    assert_eq!(summary.num_steps, 101);
    assert_eq!(summary.num_groups, 1);
    assert!(summary.final_power > 1.05 && summary.final_power < 1.5);

    let store = ArtifactStore::new(&out_dir).unwrap();

    let times = store.read_vector(names::TIMES).unwrap();
    assert_eq!(times.len(), 101);
    assert_eq!(times[0], 0.0);
    assert!((times[100] - 1.0).abs() < 1e-9);

    let rho = store.read_vector(names::REACTIVITIES).unwrap();
    assert_eq!(rho.len(), 101);
    assert!(rho.iter().all(|&r| r == 0.001));

    let powers = store.read_vector(names::POWERS).unwrap();
    assert_eq!(powers.len(), 101);
    assert!((powers[0] - 1.0).abs() < 1e-9);
    assert!(powers.windows(2).all(|w| w[1] > w[0]));

    let concentrations = store.read_matrix(names::CONCENTRATIONS).unwrap();
    assert_eq!(concentrations.len(), 1);
    assert_eq!(concentrations[0].len(), 101);
    let c0 = 0.0065 / (0.0765 * 2e-5);
    assert!((concentrations[0][0] - c0).abs() / c0 < 1e-6);

    let a = store.read_matrix(names::MATRIX_A).unwrap();
    assert_eq!(a.len(), 2 * 101);
    assert!(a.iter().all(|row| row.len() == 2 * 101));

    let b = store.read_vector(names::RHS_B).unwrap();
    assert_eq!(b.len(), 2 * 101);
    // Boundary entries are the only nonzeros in B
    assert_eq!(b[100], 1.0);
    assert!((b[201] - c0).abs() / c0 < 1e-6);
    assert_eq!(b.iter().filter(|&&v| v != 0.0).count(), 2);

    let manifest = store.load_manifest().unwrap();
    assert_eq!(manifest.method, "implicit euler");
    assert_eq!(manifest.num_steps, 101);
    assert_eq!(manifest.num_groups, 1);
}

#[test]
fn all_demo_inputs_run() {
    for name in [
        "step_insertion.yaml",
        "ramp_six_group.yaml",
        "sine_oscillation.yaml",
    ] {
        let input = load_yaml(&demo_path(name))
            .unwrap_or_else(|e| panic!("failed to load {name}: {e}"));
        let out_dir = fresh_dir(&format!("pk_app_demo_{name}"));
        let summary = run_solution(&input, &out_dir)
            .unwrap_or_else(|e| panic!("failed to run {name}: {e}"));
        assert!(summary.final_power.is_finite() && summary.final_power > 0.0);
    }
}
