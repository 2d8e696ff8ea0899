use hdl_bitmap::config::{load_config, BitmapToolConfig};
use hdl_bitmap::image::io::{save_grayscale_u8, write_json_file};
use hdl_bitmap::BitmapConverter;
use std::env;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let arg = env::args().nth(1).ok_or_else(usage)?;
    let path = Path::new(&arg);
    let config = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        load_config(path)?
    } else {
        BitmapToolConfig::for_input(path)
    };

    let converter = BitmapConverter::new(config.conversion_params());
    let conversion = converter
        .convert_path(&config.input)
        .map_err(|e| e.to_string())?;

    if let Some(preview) = &config.output.preview_image {
        save_grayscale_u8(&conversion.grid.to_preview(), preview)?;
        log::info!("Saved bitmap preview to {}", preview.display());
    }
    if let Some(report) = &config.output.report_json {
        write_json_file(report, &conversion.report)?;
        log::info!("Saved conversion report to {}", report.display());
    }

    let text = conversion.declaration.to_string();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| format!("Failed to write declaration: {e}"))
}

fn usage() -> String {
    "Usage: image_to_bitmap <config.json | image>".to_string()
}
