//! Add letter-spacing to a font file.
//!
//! This crate is the file-level wrapper around the `spacedfont` library: it
//! resolves CSS-style spacing lengths, picks an output path, and drives the
//! external font compiler on either side of the metric rewrite.
mod compiler;
mod error;
pub mod length;

use std::path::{Path, PathBuf};

use spacedfont::number::format_number;
use spacedfont::{NumberFormat, SpacingOptions};

pub use crate::compiler::{FontCompiler, Ttx, TTX_ENV};
pub use crate::error::{Error, Result};
use crate::length::{letter_spacing_em, Length};

/// The base font size assumed when none is given.
pub const DEFAULT_BASE_FONT_SIZE: &str = "16px";

/// What to space, by how much, and where to put it.
#[derive(Clone, Debug)]
pub struct Options {
    pub input_file: PathBuf,
    /// Derived from the input file name and spacing when not given.
    pub output_file: Option<PathBuf>,
    pub letter_spacing: String,
    pub base_font_size: Option<String>,
    pub number_format: NumberFormat,
}

impl Options {
    pub fn new(input_file: impl Into<PathBuf>, letter_spacing: impl Into<String>) -> Self {
        Options {
            input_file: input_file.into(),
            output_file: None,
            letter_spacing: letter_spacing.into(),
            base_font_size: None,
            number_format: NumberFormat::default(),
        }
    }
}

fn parse_length(input: &str) -> Result<Length> {
    input.parse().map_err(|source| Error::Length {
        input: input.to_string(),
        source,
    })
}

/// Resolve the letter spacing of `options` to ems.
pub fn resolve_spacing(options: &Options) -> Result<f64> {
    let base_font_size = options
        .base_font_size
        .as_deref()
        .unwrap_or(DEFAULT_BASE_FONT_SIZE);
    let letter_spacing = parse_length(&options.letter_spacing)?;
    let base = parse_length(base_font_size)?;
    let em = letter_spacing_em(&letter_spacing, &base).map_err(|source| Error::Length {
        input: base_font_size.to_string(),
        source,
    })?;
    log::info!(
        "Adding {} of space based on a font size of {} -> {}em",
        letter_spacing,
        base,
        em
    );
    Ok(em)
}

/// `dir/name.ttf` spaced by 0.1em becomes `dir/name.space-0.1em.ttf`.
pub fn derive_output_path(input: &Path, spacing_em: f64) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!(
        "{}.space-{}em",
        stem,
        format_number(spacing_em, NumberFormat::Exact)
    );
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

/// Write a letter-spaced copy of a font, returning where it was written.
///
/// An explicitly given output file is overwritten, but a derived one never
/// is.
pub fn make_spaced_font(options: &Options, compiler: &dyn FontCompiler) -> Result<PathBuf> {
    if !options.input_file.exists() {
        return Err(Error::FileNotFound(options.input_file.clone()));
    }
    let spacing_em = resolve_spacing(options)?;

    let output_file = match &options.output_file {
        Some(path) => path.clone(),
        None => {
            let path = derive_output_path(&options.input_file, spacing_em);
            if path.exists() {
                log::warn!("Not overwriting {}", path.display());
                return Err(Error::OutputExists(path));
            }
            path
        }
    };

    let xml = compiler.decompile(&options.input_file)?;
    let tree = spacedfont::ttx::parse(&xml)?;
    let spaced = spacedfont::transform_with(
        &tree,
        &SpacingOptions {
            letter_spacing: spacing_em,
            number_format: options.number_format,
        },
    )?;
    compiler.compile(&spacedfont::ttx::to_string(&spaced)?, &output_file)?;
    Ok(output_file)
}
