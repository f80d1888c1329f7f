//! layer2html - render PDF page text layers as positioned HTML
//!
//! Reads JSON page descriptions (view box, rotations, scale, font styles,
//! text items) and writes the selectable text layer as absolutely
//! positioned HTML spans.

mod input;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use calco_core::HtmlLayerWriter;
use clap::{ArgAction, Parser};

use crate::input::PageDescriptions;

/// Render PDF page text layers from JSON page descriptions to HTML.
#[derive(Parser, Debug)]
#[command(name = "layer2html")]
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
}

fn run(args: &Args, output: Box<dyn Write>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut writer = HtmlLayerWriter::new(output)?;

    for path in &args.files {
        let data = std::fs::read_to_string(path)?;
        let pages: PageDescriptions = serde_json::from_str(&data)?;

        for page in pages.into_vec() {
            let layer = page.into_layer(args.scale, args.rotation)?;
            if args.debug {
                eprintln!(
                    "{}: {} items at scale {}",
                    path.display(),
                    layer.items().len(),
                    layer.ctx().scale()
                );
            }
            writer.write_layer(&layer)?;
        }
    }

    writer.close()?.flush()?;
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.debug {
        eprintln!("Debug mode enabled");
    }

    let output: Box<dyn Write> = if args.outfile == "-" {
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

    if let Err(e) = run(&args, output) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}
