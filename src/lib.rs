//! # RipperKit
//!
//! Crosshair rip-cut planner for CNC panel work.
//!
//! ## Architecture
//!
//! RipperKit is organized as a workspace with multiple crates:
//!
//! 1. **ripperkit-core** - Panel/crosshair data model, quadrant ids, errors, event bus
//! 2. **ripperkit-designer** - Crosshair controller, hit testing, view scale, overlay
//! 3. **ripperkit-camtools** - Rip cut generator and ShopBot program output
//! 4. **ripperkit-settings** - JSON/TOML configuration
//! 5. **ripperkit** - Glue between the controller and the generator, and the CLI
//!
//! ## Example
//!
//! ```
//! use ripperkit::{program_for, Config, QuadrantLine};
//!
//! let config = Config::default();
//! let mut controller = ripperkit::controller_for(&config);
//! controller.toggle_quad(QuadrantLine::Top);
//! controller.toggle_quad(QuadrantLine::Bottom);
//!
//! let program = program_for(&controller.snapshot(), &config).unwrap();
//! assert!(program.contains("' Rip Y"));
//! ```

pub mod cli;
pub mod replay;

pub use ripperkit_camtools as camtools;
pub use ripperkit_designer as designer;

pub use ripperkit_core::{
    ChangeEvent, CrosshairEvent, EventCategory, EventFilter, HitTarget, Panel, Point,
    QuadrantError, QuadrantLine, SelectionSet,
};
pub use ripperkit_designer::{CrosshairController, CrosshairOptions, InteractionMode, Overlay};
pub use ripperkit_camtools::{RipCutGenerator, RipCutParameters};
pub use ripperkit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version banner shown by `--version`
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so program text on stdout stays clean
/// - RUST_LOG environment variable support (INFO when unset)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Controller configured from the panel and interaction settings.
pub fn controller_for(config: &Config) -> CrosshairController {
    CrosshairController::with_options(CrosshairOptions {
        panel: config.panel(),
        hit_radius: config.interaction.hit_radius,
        container_margin: config.interaction.container_margin,
    })
}

/// Program text for a controller snapshot under the given configuration.
pub fn program_for(change: &ChangeEvent, config: &Config) -> anyhow::Result<String> {
    let mut params =
        RipCutParameters::from_snapshot(&config.panel(), change, config.toolpath.safe_z)?;
    params.thickness = config.toolpath.thickness;
    params.cut_through = config.toolpath.cut_through;

    RipCutGenerator::new(params).generate()
}
