#![warn(missing_docs)]
//! # ndview binary
//!
//! Renders a synthetic demo mosaic and prints it as an inline HTML `<img>`
//! element. An optional JSON file supplies [`RenderOptions`].

use std::path::Path;
use std::process::ExitCode;

use log::{error, info};
use ndview_app::{AppError, RenderOptions, app_version, demo_images, load_render_options, render_html};

const DEMO_TILE_COUNT: usize = 4;
const DEMO_TILE_WIDTH: usize = 96;
const DEMO_TILE_HEIGHT: usize = 64;

fn usage() -> String {
    "Usage: ndview [options.json]".to_string()
}

fn demo_options() -> RenderOptions {
    RenderOptions {
        grid_layout: vec![2, 2],
        title: Some(format!("ndview {} demo", app_version())),
        ..RenderOptions::default()
    }
}

fn run(path: Option<&str>) -> Result<String, AppError> {
    let options = match path {
        Some(path) => load_render_options(Path::new(path))?,
        None => demo_options(),
    };
    info!(
        "ndview {} rendering {DEMO_TILE_COUNT} demo tiles with grid {:?}",
        app_version(),
        options.grid_layout
    );
    let tiles = demo_images(DEMO_TILE_COUNT, DEMO_TILE_WIDTH, DEMO_TILE_HEIGHT)?;
    render_html(&tiles, &options)
}

/// CLI entry point.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = match args.as_slice() {
        [] => None,
        [flag] if flag == "-h" || flag == "--help" => {
            println!("{}", usage());
            return ExitCode::SUCCESS;
        }
        [path] => Some(path.as_str()),
        _ => {
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    match run(path) {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("render failed ({:?}): {err}", err.kind());
            ExitCode::FAILURE
        }
    }
}
