//! Plotting observer for visualizing pendulum runs.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use pendula::Event;
use pendula_core::Observer;

/// Window settings for [`PlotObserver::show`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Energy drift").legend().x_label("t [s]"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl ShowConfig {
    /// Creates a `ShowConfig` with no title, no legend, and no axis labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Labels the x-axis.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Labels the y-axis.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }
}

/// Extracts plottable data from an event.
///
/// Implementing this lets [`PlotObserver`] be handed straight to
/// [`DoublePendulum::update_observed`]. Return `None` from
/// [`x`](Plottable::x) to skip the event, or `None` in a trace slot to skip
/// only that trace.
///
/// [`pendula::Event`] implements `Plottable<1>` (energy drift in percent) and
/// `Plottable<2>` (both rod angles in radians), each against simulated time.
///
/// [`DoublePendulum::update_observed`]: pendula::DoublePendulum::update_observed
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<1> for Event<'_> {
    fn x(&self) -> Option<f64> {
        Some(self.time())
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.drift_percent())]
    }
}

impl Plottable<2> for Event<'_> {
    fn x(&self) -> Option<f64> {
        Some(self.time())
    }

    fn traces(&self) -> [Option<f64>; 2] {
        let state = self.state();
        [Some(state.theta1), Some(state.theta2)]
    }
}

/// Collects traces during integration and displays them in an egui window.
///
/// `N` is the number of traces. Record data either by passing
/// `&mut PlotObserver` as the observer (events must implement
/// [`Plottable<N>`](Plottable)), or by calling [`record`](PlotObserver::record)
/// from a closure, which is how several runs are overlaid in one plot.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["Energy drift"]);
/// pendulum.update_observed(20.0, &mut obs)?;
/// obs.show(ShowConfig::new().title("RK4").y_label("%"))?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates an observer with one empty trace per name.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records one x value against every trace whose slot is `Some`.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Number of points recorded for each trace.
    #[must_use]
    pub fn counts(&self) -> [usize; N] {
        std::array::from_fn(|i| self.data[i].len())
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Returns once the window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed by value so
/// [`PlotObserver::show`] can be called after the integration returns.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("pendula_plot");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.config.y_label {
                plot = plot.y_axis_label(label.clone());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pendula::{Action, BobSpec, Config, DoublePendulum, Status};

    struct Sample {
        t: Option<f64>,
        theta: Option<f64>,
        omega: Option<f64>,
    }

    impl Plottable<2> for Sample {
        fn x(&self) -> Option<f64> {
            self.t
        }

        fn traces(&self) -> [Option<f64>; 2] {
            [self.theta, self.omega]
        }
    }

    fn feed(obs: &mut PlotObserver<2>, t: Option<f64>, theta: Option<f64>, omega: Option<f64>) {
        let action: Option<Action> = obs.observe(&Sample { t, theta, omega });
        assert!(action.is_none());
    }

    #[test]
    fn records_each_trace_independently() {
        let mut obs = PlotObserver::new(["theta", "omega"]);

        feed(&mut obs, Some(0.0), Some(1.0), Some(0.0));
        feed(&mut obs, Some(0.1), None, Some(-0.5));
        feed(&mut obs, None, Some(9.0), Some(9.0));

        assert_eq!(obs.data[0], [[0.0, 1.0]]);
        assert_eq!(obs.data[1], [[0.0, 0.0], [0.1, -0.5]]);
        assert_eq!(obs.counts(), [1, 2]);
    }

    #[test]
    fn record_can_overlay_runs() {
        let mut obs = PlotObserver::new(["Euler", "RK4"]);

        obs.record(0.5, [Some(-3.0), None]);
        obs.record(0.5, [None, Some(1e-6)]);

        assert_eq!(obs.data[0], [[0.5, -3.0]]);
        assert_eq!(obs.data[1], [[0.5, 1e-6]]);
    }

    #[test]
    fn plots_pendulum_events_directly() {
        let mut pendulum = DoublePendulum::new(
            BobSpec::new(1.0, 0.0, 1.0, 1.0),
            BobSpec::new(0.6, 0.0, 0.65, 0.3),
            Config::default().step_size(0.125),
        )
        .unwrap();

        let mut drift = PlotObserver::<1>::new(["drift"]);
        let status = pendulum.update_observed(0.5, &mut drift).unwrap();
        assert_eq!(status, Status::Complete);
        assert_eq!(drift.counts(), [4]);
        assert_eq!(drift.data[0][3][0], 0.5);

        let mut angles = PlotObserver::<2>::new(["theta1", "theta2"]);
        pendulum.update_observed(1.0, &mut angles).unwrap();
        assert_eq!(angles.counts(), [4, 4]);
        assert_eq!(angles.data[0][3], [1.0, pendulum.theta1()]);
        assert_eq!(angles.data[1][3], [1.0, pendulum.theta2()]);
    }
}
