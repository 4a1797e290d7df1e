use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use svg::Document;
use tessera::entities::PositionList;
use tessera::io::ext_repr::ExtPositionList;
use tessera::io::{export, import};
use tessera::raster::RasterImage;

use crate::EPOCH;
use crate::config::FPSConfig;
use crate::error::FpsError;

pub mod cli;

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}

pub fn read_config(path: &Path) -> Result<FPSConfig> {
    let file = File::open(path).with_context(|| format!("could not open config file: {path:?}"))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn read_positions(path: &Path) -> Result<PositionList, FpsError> {
    let file = File::open(path).map_err(|source| FpsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ext_positions: ExtPositionList =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            FpsError::Persistence {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let positions = import::import_positions(&ext_positions).map_err(FpsError::configuration)?;
    info!("[IO] {} positions read from {path:?}", positions.len());
    Ok(positions)
}

pub fn write_positions(positions: &PositionList, path: &Path) -> Result<(), FpsError> {
    let file = File::create(path).map_err(|source| FpsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &export::export_positions(positions)).map_err(
        |source| FpsError::Persistence {
            path: path.to_path_buf(),
            source,
        },
    )?;
    info!("[IO] positions written to {path:?}");
    Ok(())
}

/// Reads and decodes a photo, dropping any alpha channel
pub fn read_image(path: &Path) -> Result<RasterImage, FpsError> {
    let decoded = image::open(path)
        .map_err(|source| FpsError::SourceDecode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    let (width, height) = decoded.dimensions();
    info!("[IO] read {width}x{height} image from {path:?}");
    RasterImage::from_raw(width as usize, height as usize, decoded.into_raw())
        .map_err(FpsError::configuration)
}

/// Encodes an image, the format follows from the extension of `path`
pub fn write_image(raster: &RasterImage, path: &Path) -> Result<(), FpsError> {
    let (width, height) = raster.dimensions();
    let buffer = image::RgbImage::from_raw(width as u32, height as u32, raster.to_raw())
        .ok_or_else(|| {
            FpsError::Configuration(format!(
                "pixel buffer does not match a {width}x{height} image"
            ))
        })?;
    buffer.save(path).map_err(|source| FpsError::ImageEncode {
        path: path.to_path_buf(),
        source,
    })?;
    info!("[IO] image written to {path:?}");
    Ok(())
}

/// Copies the source photo into `output_folder` under its own file name.
/// An existing copy is left untouched.
pub fn copy_source(input: &Path, output_folder: &Path) -> Result<PathBuf, FpsError> {
    let file_name = input.file_name().ok_or_else(|| {
        FpsError::Configuration(format!("source photo has no file name: {input:?}"))
    })?;
    let copy = output_folder.join(file_name);
    if !copy.exists() {
        fs::copy(input, &copy).map_err(|source| FpsError::Io {
            path: copy.clone(),
            source,
        })?;
        info!("[IO] source photo copied to {copy:?}");
    }
    Ok(copy)
}

pub fn write_svg(document: &Document, path: &Path) -> Result<(), FpsError> {
    svg::save(path, document).map_err(|source| FpsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("[IO] svg written to {:?}", fs::canonicalize(path).unwrap_or(path.to_path_buf()));
    Ok(())
}
