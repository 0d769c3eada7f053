use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Serialize, Deserialize};
use serde_json::{json, Value};

use crate::prelude::*;

wire_enum! {
    pub enum Color {
        Red => "Red",
        DarkBlue => "Dark_Blue"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct Sample {
    #[serde(with = "crate::json::string")]
    pub name: String,

    #[serde(with = "crate::json::list")]
    pub tags: Vec<String>,

    #[serde(deserialize_with = "crate::json::or_default")]
    pub counters: HashMap<String, i32>,

    #[serde(deserialize_with = "crate::json::or_default")]
    pub level: i32,

    pub score: Option<f64>,

    #[serde(with = "crate::json::enumeration")]
    pub color: Option<Color>,

    #[serde(with = "crate::json::enumeration::required")]
    pub shade: Color,

    #[serde(with = "crate::json::timestamp")]
    pub created: DateTime<Utc>,

    #[serde(with = "crate::json::timestamp::optional")]
    pub expires: Option<DateTime<Utc>>,

    pub payload: Value
}

fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
}

#[test]
pub fn test_default_model_writes_every_field() {
    assert_eq!(Sample::default().to_json().unwrap(), json!({
        "Name": null,
        "Tags": null,
        "Counters": {},
        "Level": 0,
        "Score": null,
        "Color": null,
        "Shade": "Red",
        "Created": "1970-01-01T00:00:00.000Z",
        "Expires": null,
        "Payload": null
    }));
}

#[test]
pub fn test_missing_and_null_fields() {
    assert_eq!(Sample::from_json(&Value::Null).unwrap(), Sample::default());
    assert_eq!(Sample::from_json(&json!({})).unwrap(), Sample::default());

    let sample = Sample::from_json(&json!({
        "Name": null,
        "Tags": null,
        "Counters": null,
        "Level": null,
        "Score": null,
        "Color": null,
        "Shade": null,
        "Created": null,
        "Expires": null,
        "Payload": null
    })).unwrap();

    assert_eq!(sample, Sample::default());
}

#[test]
pub fn test_full_model() {
    let value = json!({
        "Name": "sword",
        "Tags": ["rare", "melee"],
        "Counters": { "kills": 12 },
        "Level": 7,
        "Score": 1.5,
        "Color": "Dark_Blue",
        "Shade": "Dark_Blue",
        "Created": "2024-03-01T12:30:00.000Z",
        "Expires": "2024-03-01T14:30:00+02:00",
        "Payload": { "anything": [1, "two", null] },
        "UnknownField": true
    });

    let sample = Sample::from_json(&value).unwrap();

    assert_eq!(sample.name, "sword");
    assert_eq!(sample.tags, ["rare", "melee"]);
    assert_eq!(sample.counters.get("kills"), Some(&12));
    assert_eq!(sample.level, 7);
    assert_eq!(sample.score, Some(1.5));
    assert_eq!(sample.color, Some(Color::DarkBlue));
    assert_eq!(sample.shade, Color::DarkBlue);
    assert_eq!(sample.created, created());
    assert_eq!(sample.expires, Some(created()));
    assert_eq!(sample.payload, json!({ "anything": [1, "two", null] }));

    let encoded = sample.to_json().unwrap();

    assert_eq!(encoded["Color"], "Dark_Blue");
    assert_eq!(encoded["Shade"], "Dark_Blue");
    assert_eq!(encoded["Expires"], "2024-03-01T12:30:00.000Z");
    assert!(encoded.get("UnknownField").is_none());

    assert_eq!(Sample::from_json(&encoded).unwrap(), sample);
}

#[test]
pub fn test_unknown_enum_values_are_dropped() {
    let sample = Sample::from_json(&json!({
        "Name": "shield",
        "Color": "Purple"
    })).unwrap();

    assert_eq!(sample.name, "shield");
    assert_eq!(sample.color, None);

    let sample = Sample::from_json(&json!({ "Color": 1 })).unwrap();

    assert_eq!(sample.color, None);

    // Wire strings are case sensitive
    let sample = Sample::from_json(&json!({ "Color": "red" })).unwrap();

    assert_eq!(sample.color, None);
}

#[test]
pub fn test_required_enum_fields() {
    assert_eq!(Color::default(), Color::Red);

    let sample = Sample::from_json(&json!({ "Shade": "Dark_Blue" })).unwrap();

    assert_eq!(sample.shade, Color::DarkBlue);
    assert_eq!(sample.to_json().unwrap()["Shade"], "Dark_Blue");

    for shade in [json!("Purple"), json!(null), json!(3)] {
        let sample = Sample::from_json(&json!({ "Name": "cape", "Shade": shade })).unwrap();

        assert_eq!(sample.name, "cape");
        assert_eq!(sample.shade, Color::Red);
    }

    let sample = Sample::from_json(&json!({})).unwrap();

    assert_eq!(sample.shade, Color::Red);
    assert_eq!(sample.to_json().unwrap()["Shade"], "Red");
}

#[test]
pub fn test_precise_timestamps_round_trip() {
    let sample = Sample::from_json(&json!({
        "Created": "2024-03-01T12:30:00.1234567Z",
        "Expires": "2024-03-01T12:30:00.9876543+00:00"
    })).unwrap();

    assert_eq!(sample.created, created() + chrono::Duration::milliseconds(123));
    assert_eq!(sample.expires, Some(created() + chrono::Duration::milliseconds(987)));

    let encoded = sample.to_json().unwrap();

    assert_eq!(encoded["Created"], "2024-03-01T12:30:00.123Z");
    assert_eq!(encoded["Expires"], "2024-03-01T12:30:00.987Z");

    assert_eq!(Sample::from_json(&encoded).unwrap(), sample);
}

#[test]
pub fn test_strict_enum_decoding() {
    assert_eq!(serde_json::from_value::<Color>(json!("Red")).unwrap(), Color::Red);

    assert!(serde_json::from_value::<Color>(json!("Purple")).is_err());
    assert!(serde_json::from_value::<Color>(json!(null)).is_err());

    assert_eq!("Dark_Blue".parse::<Color>(), Ok(Color::DarkBlue));

    let error = "DarkBlue".parse::<Color>().unwrap_err();

    assert_eq!(error.name, "Color");
    assert_eq!(error.value, "DarkBlue");
    assert_eq!(error.to_string(), "Unknown Color value: DarkBlue");
}

#[test]
pub fn test_mismatched_types_fail() {
    assert!(Sample::from_json(&json!({ "Level": "high" })).is_err());
    assert!(Sample::from_json(&json!({ "Tags": "rare" })).is_err());
    assert!(Sample::from_json(&json!({ "Created": "yesterday" })).is_err());
    assert!(Sample::from_json(&json!({ "Expires": 42 })).is_err());
}

#[test]
pub fn test_json_strings() {
    let sample = Sample::from_json_str(r#"{"Name":"bow","Level":3}"#).unwrap();

    assert_eq!(sample.name, "bow");
    assert_eq!(sample.level, 3);

    let encoded = sample.to_json_string().unwrap();

    assert!(encoded.starts_with(r#"{"Name":"bow","Tags":null,"Counters":{},"Level":3,"#));

    assert!(Sample::from_json_str("{").is_err());
}
