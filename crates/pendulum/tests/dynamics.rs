use std::thread;

use approx::assert_relative_eq;
use pendula::{BobSpec, Config, DoublePendulum, Event, Method, Status};

fn upper() -> BobSpec {
    BobSpec::new(1.0, 0.0, 1.0, 1.0)
}

fn lower() -> BobSpec {
    BobSpec::new(0.6, 0.0, 0.65, 0.3)
}

fn pendulum(config: Config) -> DoublePendulum {
    DoublePendulum::new(upper(), lower(), config).expect("valid pendulum")
}

#[test]
fn rk4_conserves_energy_over_ten_seconds() {
    let mut rk4 = pendulum(Config::default());

    rk4.update(10.0).unwrap();

    assert!(rk4.time() >= 10.0);
    assert!(rk4.state().is_finite());
    assert!(
        rk4.energy_drift().abs() < 1.0,
        "RK4 drift {}%",
        rk4.energy_drift()
    );
}

#[test]
fn euler_drifts_far_more_than_rk4() {
    let mut euler = pendulum(Config::default().method(Method::Euler));
    let mut rk4 = pendulum(Config::default().method(Method::Rk4));

    euler.update(10.0).unwrap();
    rk4.update(10.0).unwrap();

    let (euler_drift, rk4_drift) = (euler.energy_drift().abs(), rk4.energy_drift().abs());
    assert!(euler_drift > 1.0, "Euler drift {euler_drift}%");
    assert!(
        euler_drift > 10.0 * rk4_drift,
        "Euler drift {euler_drift}% vs RK4 drift {rk4_drift}%"
    );
}

#[test]
fn worst_rk4_drift_stays_small_throughout() {
    let mut rk4 = pendulum(Config::default());
    let mut worst: f64 = 0.0;

    let status = rk4
        .update_observed(10.0, |event: &Event<'_>| {
            worst = worst.max(event.drift_percent().abs());
            None
        })
        .unwrap();

    assert_eq!(status, Status::Complete);
    assert!(worst < 1.0, "worst RK4 drift {worst}%");
}

#[test]
fn chunked_updates_match_a_single_update() {
    let config = Config::default().step_size(1.0 / 128.0);
    let mut single = pendulum(config);
    let mut chunked = pendulum(config);

    single.update(2.0).unwrap();
    for target in [0.25, 0.5, 0.75, 1.0, 1.5, 2.0] {
        chunked.update(target).unwrap();
    }

    assert_eq!(single.steps(), 256);
    assert_eq!(chunked.steps(), single.steps());
    assert_eq!(chunked.time(), single.time());
    assert_eq!(chunked.state(), single.state());
}

#[test]
fn repeated_update_at_current_time_advances_one_step_each() {
    let mut p = pendulum(Config::default().step_size(0.25));

    for expected in 1..=4 {
        p.update(p.time()).unwrap();
        assert_eq!(p.steps(), expected);
    }
    assert_relative_eq!(p.time(), 1.0);
}

#[test]
fn independent_pendula_run_in_parallel() {
    let configs = [
        Config::default(),
        Config::default().method(Method::Euler),
        Config::default().step_size(0.001),
    ];

    let sequential: Vec<_> = configs
        .iter()
        .map(|&config| {
            let mut p = pendulum(config);
            p.update(1.0).unwrap();
            *p.state()
        })
        .collect();

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = configs
            .iter()
            .map(|&config| {
                scope.spawn(move || {
                    let mut p = pendulum(config);
                    p.update(1.0).unwrap();
                    *p.state()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, sequential);
}

#[cfg(feature = "serde-derive")]
#[test]
fn config_loads_from_json() {
    let config: Config =
        serde_json::from_str(r#"{ "step_size": 0.01, "gravity": 1.62, "method": "euler" }"#)
            .unwrap();
    let bob: BobSpec =
        serde_json::from_str(r#"{ "theta0": 0.5, "omega0": 0.0, "length": 2.0, "mass": 1.5 }"#)
            .unwrap();

    let p = DoublePendulum::new(bob, lower(), config).unwrap();

    assert_eq!(p.solver_method(), "Euler");
    assert_eq!(p.step_size(), 0.01);
    assert_eq!(p.gravity(), 1.62);
    assert_eq!(p.length1(), 2.0);
    assert_eq!(p.mass1(), 1.5);
}
