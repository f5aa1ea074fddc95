// main.rs - Cellular growth simulation display
// The egui frame loop drives the session; a tokio runtime hosts the ticker

use eframe::egui;
use growth::{DEFAULT_INTERVAL_MS, Session, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod ui;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    let app = GrowthApp::new(runtime, &SimulationConfig::default());
    info!("growth display starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cellular Growth",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("display failed: {err}"))
}

pub struct GrowthApp {
    session: Session,

    pub interval_input: u64,              // Value in the interval field, not yet applied
    pub interval_warning: Option<String>, // Last rejected interval, shown until the next change
    pub selected_seed: usize,
    pub scatter_density: f64,

    // Declared last so the session's ticker is dropped before the runtime
    _runtime: tokio::runtime::Runtime,
}

impl GrowthApp {
    pub fn new(runtime: tokio::runtime::Runtime, config: &SimulationConfig) -> Self {
        let session = Session::new(runtime.handle().clone(), config);
        Self {
            session,
            interval_input: DEFAULT_INTERVAL_MS,
            interval_warning: None,
            selected_seed: 0,
            scatter_density: 0.05,
            _runtime: runtime,
        }
    }

    pub fn apply_interval(&mut self) {
        self.interval_warning = match self.session.set_interval_ms(self.interval_input) {
            Ok(_) => None,
            Err(err) => Some(err.to_string()),
        };
    }
}
