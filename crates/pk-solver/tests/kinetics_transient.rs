//! Integration tests: assembled transients solved end to end.

use pk_core::{KineticsData, TimeGrid, Tolerances};
use pk_reactivity::ReactivityProfile;
use pk_solver::{AssemblyMethod, KineticsSolution, solve};

fn one_group() -> KineticsData {
    KineticsData::new(vec![0.0065], vec![0.0765], 2e-5).unwrap()
}

fn run_transient(
    kinetics: &KineticsData,
    profile: &ReactivityProfile,
    total: f64,
    dt: f64,
) -> KineticsSolution {
    let grid = TimeGrid::from_horizon(total, dt).expect("grid");
    let rho = profile.sample(&grid);
    let system = AssemblyMethod::ImplicitEuler
        .assemble(&grid, &rho, kinetics, 1.0)
        .expect("assembly");
    solve(&system).expect("solve")
}

#[test]
fn zero_reactivity_holds_steady_state() {
    let kinetics = one_group();
    let grid = TimeGrid::from_horizon(1.0, 0.01).unwrap();
    let rho = vec![0.0; grid.num_steps()];
    let system = AssemblyMethod::ImplicitEuler
        .assemble(&grid, &rho, &kinetics, 1.0)
        .unwrap();
    let sol = solve(&system).unwrap();

    let tol = Tolerances::default();
    let c0 = kinetics.initial_concentration(0, 1.0);
    for &p in &sol.powers {
        assert!(tol.within(p, 1.0), "power drifted to {p}");
    }
    for &c in &sol.concentrations[0] {
        assert!(tol.within(c, c0), "concentration drifted to {c}");
    }
}

#[test]
fn boundary_rows_pin_initial_conditions_exactly() {
    let kinetics = KineticsData::new(
        vec![0.0002, 0.001, 0.0012],
        vec![0.0127, 0.0317, 0.115],
        2e-5,
    )
    .unwrap();
    let profile = ReactivityProfile::sine(0.0005, 1.0).unwrap();
    let sol = run_transient(&kinetics, &profile, 0.5, 0.01);

    assert!((sol.powers[0] - 1.0).abs() < 1e-9);
    for (k, series) in sol.concentrations.iter().enumerate() {
        let c0 = kinetics.initial_concentration(k, 1.0);
        assert!(
            (series[0] - c0).abs() / c0 < 1e-9,
            "group {k} initial concentration off: {} vs {c0}",
            series[0]
        );
    }
}

#[test]
fn positive_step_insertion_raises_power() {
    // beta = 0.0065, lambda = 0.0765, Lambda = 2e-5, rho = 0.001 step at t >= 0,
    // dt = 0.01 over 1 s: 101 grid points, power and concentration both rise
    // monotonically from their initial values.
    let kinetics = one_group();
    let profile = ReactivityProfile::step_from(0.001, 0.0).unwrap();
    let sol = run_transient(&kinetics, &profile, 1.0, 0.01);

    assert_eq!(sol.powers.len(), 101);
    assert_eq!(sol.concentrations.len(), 1);
    assert_eq!(sol.concentrations[0].len(), 101);

    assert!((sol.powers[0] - 1.0).abs() < 1e-9);
    for w in sol.powers.windows(2) {
        assert!(w[1] > w[0], "power not increasing: {} -> {}", w[0], w[1]);
    }
    for w in sol.concentrations[0].windows(2) {
        assert!(w[1] > w[0], "concentration not increasing");
    }

    // Sub-prompt-critical insertion: prompt jump of roughly beta/(beta - rho)
    // followed by a slow rise; the 1 s endpoint stays well below prompt
    // criticality but clearly above the initial power.
    let p_final = *sol.powers.last().unwrap();
    assert!(p_final > 1.05 && p_final < 1.5, "final power {p_final}");
}

#[test]
fn halving_dt_roughly_halves_endpoint_change() {
    // First-order scheme: the change in the t = 1 s power when dt halves
    // should itself roughly halve on the next refinement.
    let kinetics = one_group();
    let profile = ReactivityProfile::step_from(0.001, 0.0).unwrap();

    let p_coarse = *run_transient(&kinetics, &profile, 1.0, 0.02).powers.last().unwrap();
    let p_mid = *run_transient(&kinetics, &profile, 1.0, 0.01).powers.last().unwrap();
    let p_fine = *run_transient(&kinetics, &profile, 1.0, 0.005).powers.last().unwrap();

    let d1 = (p_mid - p_coarse).abs();
    let d2 = (p_fine - p_mid).abs();
    assert!(d2 < d1, "refinement did not reduce the endpoint change");
    let ratio = d2 / d1;
    assert!(
        (0.25..=0.75).contains(&ratio),
        "endpoint change ratio {ratio} not consistent with first order"
    );
}

#[test]
fn ramp_insertion_tracks_clamped_reactivity() {
    // Ramp to 0.0005 at 0.001/s: reactivity still climbing at t = 0.4 s, so
    // power accelerates throughout the window but stays finite and positive.
    let kinetics = one_group();
    let profile = ReactivityProfile::ramp(0.0005, 0.001, 0.0).unwrap();
    let sol = run_transient(&kinetics, &profile, 0.4, 0.01);

    assert!((sol.powers[0] - 1.0).abs() < 1e-9);
    for &p in &sol.powers {
        assert!(p.is_finite() && p > 0.0);
    }
    assert!(*sol.powers.last().unwrap() > sol.powers[0]);
}
