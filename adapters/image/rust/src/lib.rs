//! Host image adapter implementation.  `ImageCrateDecoder` implements the
//! `ImageDecoder` trait with the `image` crate: the format is guessed from the
//! leading bytes and the body is fully decoded so that truncated or corrupt
//! images are rejected.

use anyhow::{Context, Result};
use image::ImageReader;
use request_easy_service::api::ImageDecoder;
use request_easy_service::model::ImageData;
use std::io::Cursor;

pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode_image(&self, bytes: &[u8]) -> Result<ImageData> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .context("failed to read image header")?;
        let format = reader
            .format()
            .and_then(|f| f.extensions_str().first())
            .map(|ext| ext.to_string());
        let image = reader.decode().context("failed to decode image")?;
        Ok(ImageData {
            bytes: bytes.to_vec(),
            width: image.width(),
            height: image.height(),
            format,
        })
    }
}
