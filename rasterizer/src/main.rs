use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
    process::ExitCode,
};

use error_derive::Error;
use serde::Serialize;
use serde_json::Value;
use settings::{Operation, SETTINGS};

#[derive(Debug, Error)]
enum Error {
    #[msg = "failed to read or write json"]
    IO(io::Error),

    #[msg = "malformed json"]
    Json(serde_json::Error),

    #[msg = "request rejected"]
    Engine(engine::Error),
}

pub fn main() -> ExitCode {
    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings::DEFAULT_LOG_FILTER),
    );
    if let Some(filter) = &SETTINGS.log_filter {
        logger.parse_filters(filter);
    }
    logger.init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");

            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                log::error!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }

            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<(), Error> {
    let request = read_request(SETTINGS.input.as_deref())?;
    log::debug!("Answering {:?} request", SETTINGS.operation);

    match &SETTINGS.operation {
        Operation::Draw => write_response(&engine::draw(&request)?),
        Operation::Rasterize { kind } => write_response(&engine::rasterize(&request, kind)?),
        Operation::Clip => write_response(&engine::clip_and_rasterize(&request)?),
        Operation::Transform => write_response(&engine::transform_request(&request)?),
        Operation::TransformAndDraw => write_response(&engine::transform_and_draw(&request)?),
    }
}

fn read_request(path: Option<&Path>) -> Result<Value, Error> {
    let source = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        },
    };

    Ok(serde_json::from_str(&source)?)
}

fn write_response<T: Serialize>(response: &T) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();

    if SETTINGS.pretty {
        serde_json::to_writer_pretty(&mut stdout, response)?;
    } else {
        serde_json::to_writer(&mut stdout, response)?;
    }

    writeln!(stdout)?;
    Ok(())
}
