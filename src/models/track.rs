use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A music track record.
///
/// The API only ever inspects `track_id` and `track_name`; everything else a
/// client sends rides along in `extra` and is echoed back on reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub track_id: i32,
    pub track_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_comments: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_keys_are_camel_case() {
        let track = Track {
            track_id: 1,
            track_name: "So What".to_string(),
            track_comments: Some("take 2".to_string()),
            extra: Map::new(),
        };

        let value = serde_json::to_value(&track).unwrap();
        assert_eq!(
            value,
            json!({"trackId": 1, "trackName": "So What", "trackComments": "take 2"})
        );
    }

    #[test]
    fn unknown_fields_are_kept() {
        let input = json!({
            "trackId": 2,
            "trackName": "Blue in Green",
            "durationSeconds": 337,
            "album": {"title": "Kind of Blue"}
        });

        let track: Track = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(track.track_comments, None);
        assert_eq!(track.extra["durationSeconds"], json!(337));

        // The opaque fields come back out exactly as they went in
        assert_eq!(serde_json::to_value(&track).unwrap(), input);
    }
}
