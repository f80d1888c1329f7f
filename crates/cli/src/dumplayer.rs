//! dumplayer - dump computed text-layer placements as JSON
//!
//! The inspection counterpart of layer2html: reads the same JSON page
//! descriptions and writes the computed geometry (unscaled and scaled)
//! for each item, for downstream consumers and debugging.

mod input;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use calco_core::TextLayer;
use clap::{ArgAction, Parser};
use serde::Serialize;

use crate::input::PageDescriptions;

/// Dump computed text-layer placements from JSON page descriptions.
#[derive(Parser, Debug)]
#[command(name = "dumplayer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to JSON page description files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Override the render scale from the page descriptions
    #[arg(short = 's', long)]
    scale: Option<f64>,

    /// Override the viewer-requested rotation in degrees
    #[arg(short = 'R', long)]
    rotation: Option<i32>,

    /// Pretty-print the JSON output
    #[arg(short = 'p', long, action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlacementDump {
    item_index: usize,
    data_start: usize,
    text: String,
    font_name: String,
    sideways: bool,
    font_size: f64,
    top: f64,
    left: f64,
    font_size_px: f64,
    top_px: f64,
    left_px: f64,
    /// Run origin mapped through the viewport, in pixel space
    origin: [f64; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageDump {
    page_number: usize,
    width: f64,
    height: f64,
    scale: f64,
    items: Vec<PlacementDump>,
}

fn dump_layer(layer: &TextLayer, page_number: usize) -> PageDump {
    let ctx = layer.ctx();
    let scale = ctx.scale();
    let (width, height) = ctx.viewport().pixel_size(scale);

    let items = layer
        .placements()
        .map(|(item, placement)| {
            let scaled = placement.at_scale(scale);
            let transform = item.transform();
            let (ox, oy) = ctx.viewport().to_pixels((transform.x, transform.y), scale);
            PlacementDump {
                item_index: item.item_index(),
                data_start: item.data_start(),
                text: item.get_text().to_string(),
                font_name: item.fontname().to_string(),
                sideways: placement.sideways,
                font_size: placement.font_size,
                top: placement.top,
                left: placement.left,
                font_size_px: scaled.font_size_px,
                top_px: scaled.top_px,
                left_px: scaled.left_px,
                origin: [ox, oy],
            }
        })
        .collect();

    PageDump {
        page_number,
        width,
        height,
        scale,
        items,
    }
}

fn run(args: &Args, output: &mut dyn Write) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut pages = Vec::new();
    let mut page_number = 0;

    for path in &args.files {
        let data = std::fs::read_to_string(path)?;
        let descriptions: PageDescriptions = serde_json::from_str(&data)?;

        for page in descriptions.into_vec() {
            let layer = page.into_layer(args.scale, args.rotation)?;
            page_number += 1;
            if args.debug {
                eprintln!("{}: page {} ({} items)", path.display(), page_number, layer.items().len());
            }
            pages.push(dump_layer(&layer, page_number));
        }
    }

    if args.pretty {
        serde_json::to_writer_pretty(&mut *output, &pages)?;
    } else {
        serde_json::to_writer(&mut *output, &pages)?;
    }
    writeln!(output)?;
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.debug {
        eprintln!("Debug mode enabled");
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            std::process::exit(1);
        }
    }

    if let Err(e) = run(&args, &mut output) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    output.flush()?;
    Ok(())
}
