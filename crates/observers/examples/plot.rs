//! Interactive visualizations of double pendulum runs.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- drift
//! cargo run --example plot --features plot -- drift 0.01
//! cargo run --example plot --features plot -- angles
//! ```
//!
//! # Modes
//!
//! - **drift [dt]** — Integrate the same pendulum with Euler and RK4 for 20
//!   seconds and overlay their energy drift. Euler's drift grows steadily
//!   while RK4 stays flat. Try `0.005` (default), `0.01`, `0.001`.
//!
//! - **angles** — Plot both rod angles for 20 seconds of RK4. The angles are
//!   not wrapped, so full flips show up as steps of 2π.

use std::error::Error;

use pendula::{BobSpec, Config, DoublePendulum, Event, Method};
use pendula_observers::{PlotObserver, ShowConfig};

const DURATION: f64 = 20.0;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "drift".into());
    match mode.as_str() {
        "drift" => {
            let dt = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()?
                .unwrap_or(Config::DEFAULT_STEP_SIZE);
            drift(dt)
        }
        "angles" => angles(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [drift [dt]|angles]");
            std::process::exit(1);
        }
    }
}

fn pendulum(config: Config) -> Result<DoublePendulum, pendula::Error> {
    DoublePendulum::new(
        BobSpec::new(1.0, 0.0, 1.0, 1.0),
        BobSpec::new(0.6, 0.0, 0.65, 0.3),
        config,
    )
}

/// Overlay Euler and RK4 energy drift for the same initial conditions.
fn drift(dt: f64) -> Result<(), Box<dyn Error>> {
    let mut obs = PlotObserver::<2>::new(["Euler", "Runge Kutta (RK4)"]);

    for (slot, method) in [Method::Euler, Method::Rk4].into_iter().enumerate() {
        let mut p = pendulum(Config::default().step_size(dt).method(method))?;
        p.update_observed(DURATION, |event: &Event<'_>| {
            let mut traces = [None, None];
            traces[slot] = Some(event.drift_percent());
            obs.record(event.time(), traces);
            None
        })?;
        println!("{:<20} {}", p.solver_method(), p.energy_report());
    }

    obs.show(
        ShowConfig::new()
            .title(format!("Energy drift, dt={dt}"))
            .legend()
            .x_label("t [s]")
            .y_label("drift [%]"),
    )?;

    Ok(())
}

/// Plot both rod angles for an RK4 run.
fn angles() -> Result<(), Box<dyn Error>> {
    let mut obs = PlotObserver::<2>::new(["θ1", "θ2"]);

    let mut p = pendulum(Config::default())?;
    p.update_observed(DURATION, &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title("Rod angles (RK4)")
            .legend()
            .x_label("t [s]")
            .y_label("angle [rad]"),
    )?;

    Ok(())
}
