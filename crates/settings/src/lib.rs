//! Responsible for creating and managing the settings of the rasterizer binary

mod cli;

use std::{path::PathBuf, sync::LazyLock};

use clap::Parser;

/// The global settings singleton
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::init);

/// The log filter used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// The request the binary should answer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Operation {
    /// Rasterize a primitive, inferring its kind from the algorithm
    #[default]
    Draw,

    /// Rasterize a primitive of the given kind
    Rasterize { kind: String },

    /// Clip a primitive against a window
    Clip,

    /// Transform a primitive, without rasterizing it
    Transform,

    /// Transform a primitive and rasterize the result
    TransformAndDraw,
}

/// Holds all the configurable information for a rasterizer run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub operation: Operation,

    /// File to read the request from, `None` means stdin
    pub input: Option<PathBuf>,

    /// Indent the json output
    pub pretty: bool,

    /// Log filter that takes precedence over `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Settings {
    #[must_use]
    pub fn init() -> Self {
        let mut settings = Self::default();

        let args = cli::Arguments::parse();

        args.update_settings(&mut settings);

        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            operation: Operation::default(),
            input: None,
            pretty: false,
            log_filter: None,
        }
    }
}
