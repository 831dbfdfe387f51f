//! Othello GUI
//!
//! Play Dark against the minimax AI. `RUST_LOG` controls log output and the
//! `OTHELLO_*` variables configure the AI (see `othello::config`).

use othello::ui::OthelloApp;
use othello::EngineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("othello=info")),
        )
        .init();

    let config = EngineConfig::from_env()?;
    info!(
        depth = config.depth,
        pass_rule = %config.pass_rule,
        think_ms = config.think_delay.as_millis() as u64,
        "starting Othello"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Othello Game with Minimax AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, config)))),
    )?;

    Ok(())
}
