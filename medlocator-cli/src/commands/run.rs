//! `medlocator run` - the interactive locator dashboard.

use std::sync::Arc;

use tracing::info;

use crate::error::CliError;
use crate::tui_app;
use medlocator::config::LocatorConfig;
use medlocator::controller::LocatorController;
use medlocator::geo;
use medlocator::location::{LocationSource, SimulatedLocationSource, UnsupportedLocationSource};
use medlocator::logging;
use medlocator::map::ModelMapView;
use medlocator::registry::Registry;

/// Accuracy assumed when a `--fix` omits it.
const DEFAULT_FIX_ACCURACY_M: f64 = 25.0;

pub struct RunArgs {
    /// Scripted device fixes as `LAT,LON[,ACCURACY_M]` strings.
    pub fixes: Vec<String>,
}

pub fn run(args: RunArgs) -> Result<(), CliError> {
    let _logging_guard = logging::init_logging("logs", "medlocator.log")
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    let fixes = parse_fixes(&args.fixes)?;
    let source: Arc<dyn LocationSource> = if fixes.is_empty() {
        Arc::new(UnsupportedLocationSource)
    } else {
        Arc::new(SimulatedLocationSource::from_fixes(fixes))
    };

    info!(version = medlocator::VERSION, "Starting MedLocator");

    // The location source spawns its delivery task with tokio; keep a
    // runtime entered for the lifetime of the synchronous UI loop.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let _runtime_guard = runtime.enter();

    let config = LocatorConfig::default();
    let controller = LocatorController::new(
        Registry::builtin(),
        ModelMapView::new(config.initial_viewport()),
        source,
        config,
    );

    tui_app::run(controller)
}

/// Parse `LAT,LON[,ACCURACY_M]` fix arguments.
fn parse_fixes(raw: &[String]) -> Result<Vec<(f64, f64, f64)>, CliError> {
    raw.iter().map(|value| parse_fix(value)).collect()
}

fn parse_fix(value: &str) -> Result<(f64, f64, f64), CliError> {
    let invalid = |reason: &str| CliError::InvalidFix {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(invalid("expected 2 or 3 comma-separated numbers"));
    }

    let lat: f64 = parts[0].parse().map_err(|_| invalid("latitude is not a number"))?;
    let lon: f64 = parts[1].parse().map_err(|_| invalid("longitude is not a number"))?;
    let accuracy_m = match parts.get(2) {
        Some(part) => {
            let accuracy: f64 = part.parse().map_err(|_| invalid("accuracy is not a number"))?;
            if !accuracy.is_finite() || accuracy < 0.0 {
                return Err(invalid("accuracy must be a non-negative number"));
            }
            accuracy
        }
        None => DEFAULT_FIX_ACCURACY_M,
    };

    geo::validate_coords(lat, lon)?;
    Ok((lat, lon, accuracy_m))
}
