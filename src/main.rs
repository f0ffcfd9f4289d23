use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use braillify::cli::Args;
use braillify::config::Config;
use braillify::output;
use braillify::render::{self, palette, RenderOptions, Rgb};
use braillify::source;

fn main() {
    let args = Args::parse();

    // Load config file. An explicit --config must exist and parse; the
    // default path silently falls back to built-in defaults.
    let cfg = if let Some(ref path) = args.config {
        match Config::load_from_explicit(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
    } else {
        match Config::load() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.");
                Config::default()
            }
        }
    };

    // Merge settings: CLI args > config file > built-in defaults.
    let defaults = RenderOptions::default();
    let cutoff = args.cutoff.or(cfg.render.cutoff).unwrap_or(defaults.cutoff);
    let size = args.size.or(cfg.render.size).unwrap_or(defaults.size);

    // --nocolor wins over --color and the config file.
    let color = if args.nocolor {
        false
    } else {
        args.color || cfg.render.color.unwrap_or(false)
    };

    let irc = args.irc || cfg.render.irc.unwrap_or(false);
    let invert = args.invert || cfg.render.invert.unwrap_or(false);
    let extended = args.ext || cfg.render.extended.unwrap_or(false);

    // Unknown background names fall back to black.
    let background = args.background.or(cfg.render.background);
    let alpha_fill = match background.as_deref() {
        Some(name) => match palette::by_name(name) {
            Some(entry) => entry.rgb,
            None => {
                log::debug!("unknown background color '{}', using black", name);
                Rgb::BLACK
            }
        },
        None => Rgb::BLACK,
    };

    let output_path = args
        .output
        .or(cfg.output.path)
        .unwrap_or_else(|| PathBuf::from("out.txt"));

    let opts = RenderOptions {
        color,
        irc,
        no_resize: args.noresize,
        cutoff,
        size,
        invert,
        alpha_fill,
        extended,
    };

    let img = match source::load(&args.file) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let doc = render::render(&img, &opts);

    output::print_document(&doc);
    output::print_stats(&doc);

    if let Err(e) = output::write_document(&output_path, &doc) {
        eprintln!("Error: Failed to write '{}': {}", output_path.display(), e);
        exit(1);
    }
}
