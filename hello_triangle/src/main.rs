//! Hello triangle: opens a fixed 800x600 window and polls until it is closed.

use triangle_engine::foundation::logging;
use triangle_engine::prelude::*;

/// Identity of this application; the window is titled with it
const APP_NAME: &str = "HelloTriangleApplication";

fn main() {
    let config = ApplicationConfig::new(APP_NAME);
    logging::init(&config.engine.log_level);

    let mut app = Application::new(config, GlfwSubsystem::new(), NullBackend);
    if let Err(e) = app.run() {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
