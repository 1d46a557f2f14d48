use crate::codec::{self, EncodeOptions};
use crate::error::RecolorError;
use crate::models::Settings;
use palette_remap::{Raster, RecolorStats, RemapError, RemapOptions};
use std::path::PathBuf;
use std::time::Instant;

/// The three files of one recolor run
#[derive(Debug, Clone)]
pub struct RecolorJob {
    /// Image whose brightness structure is kept
    pub source: PathBuf,
    /// Image whose colors are used
    pub palette: PathBuf,
    /// Destination PNG
    pub output: PathBuf,
}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct RecolorReport {
    pub stats: RecolorStats,
    pub bytes_written: usize,
}

/// Reads, recolors and writes images according to [`Settings`]
pub struct RecolorService {
    remap: RemapOptions,
    encode: EncodeOptions,
}

impl RecolorService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            remap: settings.remap_options(),
            encode: EncodeOptions {
                compression: settings.compression,
                optimize: settings.optimize,
            },
        }
    }

    /// Run a job end to end.
    ///
    /// Both inputs are decoded and the whole output is encoded in memory
    /// before the destination file is created, so any failure leaves the
    /// destination untouched.
    pub fn run(&self, job: &RecolorJob) -> Result<RecolorReport, RecolorError> {
        let started = Instant::now();

        let value = codec::read_image(&job.source)?;
        let palette_image = codec::read_image(&job.palette)?;

        let (image, stats) = self.recolor(&value, &palette_image, job)?;

        let bytes_written = codec::write_image(&job.output, &image, &self.encode)?;

        tracing::info!(
            output = %job.output.display(),
            bytes = bytes_written,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Wrote recolored image"
        );

        Ok(RecolorReport {
            stats,
            bytes_written,
        })
    }

    /// Extract both palettes and remap the value image
    pub fn recolor(
        &self,
        value: &Raster,
        palette_image: &Raster,
        job: &RecolorJob,
    ) -> Result<(Raster, RecolorStats), RecolorError> {
        let output = palette_remap::recolor(value, palette_image, &self.remap).map_err(|source| {
            let path = match source {
                RemapError::EmptyTargetPalette => job.palette.clone(),
                _ => job.source.clone(),
            };
            RecolorError::Remap { path, source }
        })?;
        let stats = output.stats;

        tracing::info!(
            source_colors = stats.source_colors,
            target_colors = stats.target_colors,
            "Extracted palettes"
        );
        if stats.target_colors < stats.source_colors {
            tracing::debug!(
                merged = stats.source_colors - stats.target_colors,
                "Palette image has fewer colors; several source colors will share one"
            );
        }
        if stats.clamped_indices > 0 {
            tracing::warn!(
                clamped = stats.clamped_indices,
                "Scaled palette indices clamped to the last target color"
            );
        }
        tracing::info!(
            ratio = stats.ratio,
            remapped = stats.remapped,
            passed_through = stats.passed_through,
            "Remapped pixels"
        );
        Ok((output.image, stats))
    }
}
