//! デモデータ
//!
//! デモデータの読込に失敗した場合に使う埋め込みレコード

use crate::error::FetchError;
use crate::types::{Coordinates, ImageRecord, J2000Position};

pub fn fallback_records() -> Vec<ImageRecord> {
    vec![ImageRecord {
        identifier: "20241011011347".to_string(),
        caption: Some("Spectra Demo - Earth observation from DSCOVR satellite".to_string()),
        image: "epic_1b_20241011011347".to_string(),
        date: "2024-10-11 01:13:47".to_string(),
        centroid_coordinates: Coordinates { lat: 15.2, lon: -45.8 },
        version: Some("03".to_string()),
        dscovr_j2000_position: Some(J2000Position {
            x: 1256894.321,
            y: -654321.123,
            z: 298456.789,
        }),
    }]
}

/// デモデータJSONを解析する（空配列もエラー扱い）
pub fn parse_dataset(body: &str) -> Result<Vec<ImageRecord>, FetchError> {
    let records: Vec<ImageRecord> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    if records.is_empty() {
        return Err(FetchError::EmptyPayload);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_single_record() {
        let records = fallback_records();
        assert_eq!(records.len(), 1);
        assert!(records[0].captured_at().is_some());
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let body = include_str!("../../assets/demo-data.json");
        let records = parse_dataset(body).expect("同梱デモデータの解析失敗");
        assert!(records.len() >= 3);
    }

    #[test]
    fn test_parse_dataset_errors() {
        assert_eq!(parse_dataset("[]"), Err(FetchError::EmptyPayload));
        assert!(matches!(parse_dataset("{not json"), Err(FetchError::Parse(_))));
    }
}
