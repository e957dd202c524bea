use sidetrip_core::geopoint::GeoPoint;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PolylineError {
    #[error("unexpected end of polyline input")]
    UnexpectedEof,

    #[error("invalid polyline character {0:?}")]
    InvalidCharacter(char),

    #[error("polyline chunk exceeds 64 bits")]
    ChunkTooLong,
}

const PRECISION: f64 = 1e5;

/// Decodes a Google encoded polyline (1e-5 precision) into coordinates.
pub fn decode_polyline(encoded: &str) -> Result<Vec<GeoPoint>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let (dlat, next) = decode_delta(bytes, index)?;
        let (dlng, next) = decode_delta(bytes, next)?;
        index = next;

        lat += dlat;
        lng += dlng;
        points.push(GeoPoint {
            lat: lat as f64 / PRECISION,
            lng: lng as f64 / PRECISION,
        });
    }

    Ok(points)
}

fn decode_delta(bytes: &[u8], mut index: usize) -> Result<(i64, usize), PolylineError> {
    let mut shift = 0;
    let mut accumulator: i64 = 0;

    loop {
        let Some(&byte) = bytes.get(index) else {
            return Err(PolylineError::UnexpectedEof);
        };
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter(byte as char));
        }
        // a run of continuation bytes must not shift past the accumulator
        if shift >= 64 {
            return Err(PolylineError::ChunkTooLong);
        }
        index += 1;

        let chunk = (byte - 63) as i64;
        accumulator |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk & 0x20 == 0 {
            break;
        }
    }

    let delta = if accumulator & 1 == 1 {
        !(accumulator >> 1)
    } else {
        accumulator >> 1
    };
    Ok((delta, index))
}

#[cfg(test)]
mod tests {
    use super::{PolylineError, decode_polyline};
    use sidetrip_core::geopoint::GeoPoint;

    // the worked example from the provider's encoding documentation
    const DOC_EXAMPLE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    #[test]
    fn decodes_documented_example() {
        let points = decode_polyline(DOC_EXAMPLE).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], GeoPoint::new(38.5, -120.2));
        assert_eq!(points[1], GeoPoint::new(40.7, -120.95));
        assert_eq!(points[2], GeoPoint::new(43.252, -126.453));
    }

    #[test]
    fn empty_input_is_an_empty_path() {
        assert_eq!(decode_polyline("").unwrap(), Vec::new());
    }

    #[test]
    fn truncated_input_is_rejected() {
        // drop the final byte so the last chunk never terminates
        let truncated = &DOC_EXAMPLE[..DOC_EXAMPLE.len() - 1];
        assert_eq!(
            decode_polyline(truncated),
            Err(PolylineError::UnexpectedEof)
        );
    }

    #[test]
    fn overlong_continuation_run_is_rejected() {
        // 14 continuation bytes would shift past 64 bits
        assert_eq!(
            decode_polyline("~~~~~~~~~~~~~~"),
            Err(PolylineError::ChunkTooLong)
        );
    }

    #[test]
    fn out_of_range_byte_is_rejected() {
        assert_eq!(
            decode_polyline("_p~iF\n"),
            Err(PolylineError::InvalidCharacter('\n'))
        );
    }
}
