use approx::assert_relative_eq;
use nalgebra::Vector3;

use airframe::systems::aerodynamics::AeroCoefficients;
use airframe::{SimConfig, Simulation};

/// One simulated second from the documented trim defaults: no moments, no
/// rates, so attitude must stay exactly zero while the forward speed
/// drifts under the thrust-minus-drag imbalance.
#[test]
fn test_one_second_trim_rollout() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();

    for _ in 0..60 {
        sim.step();
    }

    let state = sim.state();
    assert_eq!(state.attitude.phi, 0.0);
    assert_eq!(state.attitude.theta, 0.0);
    assert_eq!(state.attitude.psi, 0.0);
    assert_eq!(state.rates, Vector3::zeros());

    // Direct double integration of the per-tick force balance, tracked
    // independently of the stepper.
    let coeffs = AeroCoefficients::default();
    let (rho, s_ref, m, g) = (1.06, 16.2, 760.0, 9.81);
    let (thrust, f_az) = (7000.0, 9300.0);
    let dt = 1.0 / 60.0;

    let (mut u, mut v, mut w) = (36.0f64, 0.0f64, 0.0f64);
    for _ in 0..60 {
        let alpha = w.atan2(u);
        let beta = v.atan2((u * u + w * w).sqrt());
        let q_s = 0.5 * rho * (u * u + v * v + w * w) * s_ref;

        let drag = q_s * coeffs.drag(alpha);
        let lift = q_s * coeffs.lift(alpha);
        let side = q_s * coeffs.side_force(beta);

        // Level attitude throughout, all rates zero: no gravity x-term and
        // no gyroscopic coupling.
        let u_dot = (-drag * alpha.cos() + lift * alpha.sin() + thrust) / m;
        let v_dot = side / m;
        let w_dot = (m * g + f_az) / m;

        u += u_dot * dt;
        v += v_dot * dt;
        w += w_dot * dt;
    }

    assert_relative_eq!(state.velocity.x, u, max_relative = 1e-9);
    assert_relative_eq!(state.velocity.y, v, max_relative = 1e-9);
    assert_relative_eq!(state.velocity.z, w, max_relative = 1e-9);
}

#[test]
fn test_rollout_is_deterministic() {
    let mut a = Simulation::new(SimConfig::default()).unwrap();
    let mut b = Simulation::new(SimConfig::default()).unwrap();

    for _ in 0..600 {
        a.step();
        b.step();
    }

    assert_eq!(a.state(), b.state());
}

#[test]
fn test_state_stays_finite_over_long_run() {
    // The model is allowed to drift without artificial stabilization, but a
    // ten-second trim rollout should stay well-behaved.
    let mut sim = Simulation::new(SimConfig::default()).unwrap();

    for _ in 0..600 {
        sim.step();
    }

    assert!(sim.state().is_finite());
    assert!(sim.state().velocity.x > 0.0);
}
