//! # Abyssal Engine
//!
//! Headless entry point for Abyssal — a streaming underwater world
//! where a submarine cruises over a procedural seafloor and nearby
//! cells are populated on demand.
//!
//! This binary wires together:
//! - Terrain: analytic height field plus the coarse patch
//! - World: spatial cell index and per-cell population
//! - Engine: config, scripted input, submarine controller, frame loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod config;
mod input;
mod scene;
mod submarine;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("abyssal=info".parse()?))
        .init();

    info!("Abyssal starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    app::run()?;

    info!("Abyssal shutdown complete");
    Ok(())
}
