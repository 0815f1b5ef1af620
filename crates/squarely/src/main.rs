mod app;
mod config;
mod square;

use squarely_engine::logging::init_logging;
use squarely_engine::window::Runtime;

use app::SquareApp;
use config::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::default();
    init_logging(config.logging.clone());

    log::info!("W/A/S/D move the square, 1/2/3 recolor it, Esc quits");

    let runtime = config.runtime.clone();
    let gpu = config.gpu.clone();

    Runtime::run(runtime, gpu, SquareApp::new(config))
}
