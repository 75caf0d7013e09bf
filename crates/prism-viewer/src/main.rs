//! Spinning prism viewer.
//!
//! Renders a depth-tested triangular prism that spins under UI control: a
//! radio strip picks the rotation direction and two buttons step the zoom.

use std::path::Path;

use anyhow::Result;
use winit::dpi::LogicalSize;

use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::PrismApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = PrismApp::new(
        &load_font(),
        load_shader("vertex.wgsl"),
        load_shader("fragment.wgsl"),
    );

    let config = RuntimeConfig {
        title: "Spinning Prism".to_string(),
        initial_size: LogicalSize::new(app::WINDOW_WIDTH, app::WINDOW_HEIGHT),
    };
    Runtime::run(config, GpuInit::default(), app)
}

/// Reads one of the prism's WGSL stages from the crate's `shaders/` directory.
///
/// A missing or unreadable file is logged and reported as `None`; the mesh
/// renderer then stays disabled while the rest of the viewer keeps running.
fn load_shader(name: &str) -> Option<String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders").join(name);
    match std::fs::read_to_string(&path) {
        Ok(src) => Some(src),
        Err(err) => {
            log::error!("failed to read shader {}: {err}", path.display());
            None
        }
    }
}

fn load_font() -> Vec<u8> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .unwrap_or_default()
}
