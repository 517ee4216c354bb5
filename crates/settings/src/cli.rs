use std::path::PathBuf;

use crate::{Operation, Settings};

#[derive(clap::Parser, Debug)]
#[command(name = "rasterizer", version, about="Rasterize, clip and transform 2D primitives", long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    command: Option<Command>,

    /// File containing the json request, "-" reads from stdin
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Indent the json response
    #[clap(
        long,
        global = true,
        action = clap::ArgAction::SetTrue,
    )]
    pretty: bool,

    /// Log filter, overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(clap::Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Rasterize a line or circle, inferring its kind from "algoritmo"
    Draw,

    /// Rasterize a primitive of the given kind ("linha" or "circulo")
    Rasterize { kind: String },

    /// Clip a primitive against the window in the request
    Clip,

    /// Transform a primitive and print its new description
    Transform,

    /// Transform a primitive and rasterize the result
    TransformDraw,
}

impl From<Command> for Operation {
    fn from(value: Command) -> Self {
        match value {
            Command::Draw => Self::Draw,
            Command::Rasterize { kind } => Self::Rasterize { kind },
            Command::Clip => Self::Clip,
            Command::Transform => Self::Transform,
            Command::TransformDraw => Self::TransformAndDraw,
        }
    }
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        if let Some(command) = self.command {
            settings.operation = command.into();
        }

        settings.input = self.input.filter(|path| path.as_os_str() != "-");
        settings.pretty = self.pretty;

        if self.log_level.is_some() {
            settings.log_filter = self.log_level;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn settings_from(args: &[&str]) -> Settings {
        let mut settings = Settings::default();
        Arguments::try_parse_from(args)
            .unwrap()
            .update_settings(&mut settings);
        settings
    }

    #[test]
    fn defaults() {
        assert_eq!(settings_from(&["rasterizer"]), Settings::default());
    }

    #[test]
    fn subcommand_with_input() {
        let settings = settings_from(&["rasterizer", "clip", "--input", "request.json", "--pretty"]);

        assert_eq!(settings.operation, Operation::Clip);
        assert_eq!(settings.input, Some(PathBuf::from("request.json")));
        assert!(settings.pretty);
    }

    #[test]
    fn rasterize_kind() {
        let settings = settings_from(&["rasterizer", "rasterize", "circulo", "-i", "-"]);

        assert_eq!(
            settings.operation,
            Operation::Rasterize {
                kind: "circulo".to_string()
            }
        );
        assert_eq!(settings.input, None);
    }

    #[test]
    fn log_level() {
        let settings = settings_from(&["rasterizer", "transform-draw", "--log-level", "debug"]);

        assert_eq!(settings.operation, Operation::TransformAndDraw);
        assert_eq!(settings.log_filter.as_deref(), Some("debug"));
    }
}
