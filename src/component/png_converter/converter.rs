//! Single PNG to JPEG conversion
//!
//! Decodes one image, flattens any transparency onto white and writes a
//! JPEG with per-image Huffman tables.

use crate::config::Quality;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, Rgb, RgbImage, Rgba};
use jpeg_encoder::{ColorType, Encoder, EncodingError};
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Unable to open image: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("Unable to save JPEG: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodingError,
    },
    #[error("Unable to save JPEG: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to save JPEG: image of {width}x{height} exceeds the 65535x65535 JPEG limit")]
    TooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

impl ConvertError {
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. }
            | Self::TooLarge { path, .. } => path,
        }
    }
}

/// One file's worth of work for the converter.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub quality: Quality,
}

impl ConversionRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        quality: Quality,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            quality,
        }
    }
}

pub fn convert_png_to_jpeg(request: &ConversionRequest) -> Result<(), ConvertError> {
    let path = &request.input_path;
    let bytes = fs::read(path).map_err(|e| ConvertError::Decode {
        path: path.clone(),
        source: ImageError::IoError(e),
    })?;
    let image = decode_image(path, &bytes)?;

    let composite = match png_header(&bytes) {
        Some((color_type, has_trns)) => needs_compositing(color_type, has_trns),
        None => image.color().has_alpha(),
    };

    let rgb = if composite {
        debug!("{} has transparency, compositing onto white", path.display());
        flatten_onto_white(&image)
    } else {
        // a tRNS colour key on RGB or grey is expanded to alpha by the decoder; drop it
        image.into_rgb8()
    };

    let jpeg = encode_jpeg(&rgb, request.quality, &request.output_path)?;

    fs::write(&request.output_path, jpeg).map_err(|source| ConvertError::Write {
        path: request.output_path.clone(),
        source,
    })
}

fn decode_image(path: &Path, bytes: &[u8]) -> Result<DynamicImage, ConvertError> {
    let to_error = |source: ImageError| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    // sniff the signature so a mislabelled file still decodes
    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| to_error(ImageError::IoError(e)))?;
    if reader.format().is_none() {
        if let Ok(format) = ImageFormat::from_path(path) {
            reader.set_format(format);
        }
    }

    reader.decode().map_err(to_error)
}

/// Colour type and `tRNS` presence as stored in the PNG header, before any
/// expansion by the decoder. `None` when `bytes` is not a readable PNG.
fn png_header(bytes: &[u8]) -> Option<(png::ColorType, bool)> {
    let reader = png::Decoder::new(Cursor::new(bytes)).read_info().ok()?;
    let info = reader.info();
    Some((info.color_type, info.trns.is_some()))
}

/// Alpha channels and palettes with a transparency entry are composited;
/// RGB and grey images are only coerced, even when they carry a `tRNS` key.
#[must_use]
pub const fn needs_compositing(color_type: png::ColorType, has_trns: bool) -> bool {
    match color_type {
        png::ColorType::Rgba | png::ColorType::GrayscaleAlpha => true,
        png::ColorType::Indexed => has_trns,
        png::ColorType::Rgb | png::ColorType::Grayscale => false,
    }
}

/// Composites an image with alpha over an opaque white canvas.
#[must_use]
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        Rgb([
            blend_over_white(r, a),
            blend_over_white(g, a),
            blend_over_white(b, a),
        ])
    })
}

/// `round((c * a + 255 * (255 - a)) / 255)`
#[must_use]
pub const fn blend_over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

fn encode_jpeg(image: &RgbImage, quality: Quality, path: &Path) -> Result<Vec<u8>, ConvertError> {
    let (width, height) = image.dimensions();
    let too_large = || ConvertError::TooLarge {
        path: path.to_path_buf(),
        width,
        height,
    };
    let frame_width = u16::try_from(width).map_err(|_| too_large())?;
    let frame_height = u16::try_from(height).map_err(|_| too_large())?;

    encode_rgb(image.as_raw(), frame_width, frame_height, quality, true).map_err(|source| {
        ConvertError::Encode {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn encode_rgb(
    pixels: &[u8],
    width: u16,
    height: u16,
    quality: Quality,
    optimize_huffman: bool,
) -> Result<Vec<u8>, EncodingError> {
    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, quality.get());
    encoder.set_optimized_huffman_tables(optimize_huffman);
    encoder.encode(pixels, width, height, ColorType::Rgb)?;
    Ok(buffer)
}
