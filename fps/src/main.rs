use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use fps::config::FPSConfig;
use fps::extract::{ScaleFactor, TileExtractor};
use fps::io;
use fps::io::cli::Cli;
use fps::opt::fps_optimizer::FPSOptimizer;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use tessera::io::preview::layout_to_raster;
use tessera::io::svg::layout_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FPSConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    config.validate()?;
    info!("[MAIN] Successfully parsed FPSConfig: {config:?}");

    //decode before anything is written, a broken photo leaves no output behind
    let source = io::read_image(&args.input_file)?;

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("input file has no usable name: {:?}", args.input_file))?;
    let output_folder = args.output_folder.join(input_stem);
    let tile_folder = output_folder.join("tile");
    fs::create_dir_all(&tile_folder)
        .with_context(|| format!("could not create output folder: {tile_folder:?}"))?;

    io::copy_source(&args.input_file, &output_folder)?;

    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let positions_path = output_folder.join("positions.json");
    let positions = match positions_path.exists() && !args.regenerate {
        true => {
            info!("[MAIN] reusing positions from {positions_path:?}");
            io::read_positions(&positions_path)?
        }
        false => {
            let positions = FPSOptimizer::new(config, &mut rng)?.solve()?;
            io::write_positions(&positions, &positions_path)?;
            positions
        }
    };

    {
        let preview = layout_to_raster(&positions, &config.geometry, config.preview, &mut rng)?;
        io::write_image(&preview, &output_folder.join("layout.png"))?;

        let svg = layout_to_svg(&positions, &config.geometry, config.svg_draw_options, input_stem)?;
        io::write_svg(&svg, &output_folder.join("layout.svg"))?;
    }

    {
        let (width, height) = source.dimensions();
        let scale = ScaleFactor::derive(width, height, &config.geometry)?;
        let extractor = TileExtractor::new(&source, &config.geometry, scale, config.extraction)?;
        let tiles = extractor.extract_all(&positions)?;
        for (i, tile) in tiles.iter().enumerate() {
            io::write_image(tile, &tile_folder.join(format!("tile_{i}.png")))?;
        }
        info!("[MAIN] {} tiles written to {tile_folder:?}", tiles.len());
    }

    Ok(())
}
