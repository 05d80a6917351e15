//! GeoTIFF loading for bioclim rasters.
//!
//! Only what sampling needs is read: the first band, the north-up
//! georeferencing from ModelPixelScale + ModelTiepoint, and the GDAL no-data
//! value if present.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;
use tracing::{debug, info};

use crate::error::{EnvmapError, Result};
use crate::raster::{GeoRaster, GeoTransform};

const MODEL_PIXEL_SCALE: u16 = 33550;
const MODEL_TIEPOINT: u16 = 33922;
const GDAL_NODATA: u16 = 42113;

impl GeoRaster {
    /// Open a GeoTIFF and load its first band into memory.
    pub fn from_geotiff(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| EnvmapError::open_failed(path, e))?;

        let raster = decode_geotiff(BufReader::new(file))
            .map_err(|e| match e {
                EnvmapError::ReadFailed(msg) => EnvmapError::open_failed(path, msg),
                other => other,
            })?;

        info!(
            path = %path.display(),
            width = raster.width(),
            height = raster.height(),
            nodata = ?raster.nodata(),
            "Loaded raster"
        );
        Ok(raster)
    }
}

/// Decode a GeoTIFF from any `Read + Seek` source.
pub fn decode_geotiff<R: Read + Seek>(reader: R) -> Result<GeoRaster> {
    let mut decoder = Decoder::new(reader)?.with_limits(Limits::unlimited());

    let (width, height) = decoder.dimensions()?;
    let (width, height) = (width as usize, height as usize);

    let transform = read_geotransform(&mut decoder)?;
    let nodata_text = read_nodata(&mut decoder);

    let (values, is_f32) = decode_values(decoder.read_image()?)?;

    let pixels = width * height;
    if pixels == 0 || values.len() % pixels != 0 {
        return Err(EnvmapError::invalid_metadata(format!(
            "{} samples do not fit a {}x{} image",
            values.len(),
            width,
            height
        )));
    }
    let samples_per_pixel = values.len() / pixels;
    let band: Vec<f64> = if samples_per_pixel == 1 {
        values
    } else {
        debug!(samples_per_pixel, "Interleaved image, keeping first band");
        values.into_iter().step_by(samples_per_pixel).collect()
    };

    let nodata = nodata_text.and_then(|s| parse_nodata(&s, is_f32));

    Ok(GeoRaster::new(width, height, transform, band)?.with_nodata(nodata))
}

fn read_geotransform<R: Read + Seek>(decoder: &mut Decoder<R>) -> Result<GeoTransform> {
    let scale = decoder
        .get_tag_f64_vec(Tag::from_u16_exhaustive(MODEL_PIXEL_SCALE))
        .map_err(|_| EnvmapError::invalid_metadata("missing ModelPixelScale tag"))?;
    let tiepoint = decoder
        .get_tag_f64_vec(Tag::from_u16_exhaustive(MODEL_TIEPOINT))
        .map_err(|_| EnvmapError::invalid_metadata("missing ModelTiepoint tag"))?;

    GeoTransform::from_tiepoint(&tiepoint, &scale)
        .ok_or_else(|| EnvmapError::invalid_metadata("cannot determine geotransform"))
}

fn read_nodata<R: Read + Seek>(decoder: &mut Decoder<R>) -> Option<String> {
    decoder
        .get_tag_ascii_string(Tag::from_u16_exhaustive(GDAL_NODATA))
        .ok()
}

/// Parse a GDAL no-data string.
///
/// Float32 rasters store the sentinel at single precision, so the parsed value
/// is rounded the same way or it would never compare equal to a sample.
fn parse_nodata(text: &str, is_f32: bool) -> Option<f64> {
    let text = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    let value = match text.to_ascii_lowercase().as_str() {
        "nan" => f64::NAN,
        "inf" | "+inf" => f64::INFINITY,
        "-inf" => f64::NEG_INFINITY,
        other => other.parse::<f64>().ok()?,
    };
    Some(if is_f32 { value as f32 as f64 } else { value })
}

fn decode_values(result: DecodingResult) -> Result<(Vec<f64>, bool)> {
    let values = match result {
        DecodingResult::F32(buf) => return Ok((buf.into_iter().map(f64::from).collect(), true)),
        DecodingResult::F64(buf) => buf,
        DecodingResult::U8(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::U16(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::U32(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::U64(buf) => buf.into_iter().map(|v| v as f64).collect(),
        DecodingResult::I8(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::I16(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::I32(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::I64(buf) => buf.into_iter().map(|v| v as f64).collect(),
        #[allow(unreachable_patterns)]
        _ => {
            return Err(EnvmapError::UnsupportedDataType(
                "unsupported TIFF pixel format".to_string(),
            ))
        }
    };
    Ok((values, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nodata() {
        assert_eq!(parse_nodata("-9999", false), Some(-9999.0));
        assert_eq!(parse_nodata(" -9999\0", false), Some(-9999.0));
        assert!(parse_nodata("nan", false).unwrap().is_nan());
        assert_eq!(parse_nodata("junk", false), None);
    }

    #[test]
    fn test_parse_nodata_f32_rounding() {
        let text = "-3.4e+38";
        let parsed = parse_nodata(text, true).unwrap();
        assert_eq!(parsed, -3.4e38f32 as f64);
        assert_ne!(parsed, -3.4e38);
    }
}
