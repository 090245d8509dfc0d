//! Domain records exchanged with the remote services.
//!
//! # Design
//! `Foo` uses the Foo service's PascalCase field names on the wire. Its
//! `data` map keeps insertion order, so entries go out in the order the
//! caller added them and come back in the order the service sent them. The
//! weather types mirror the weather API's response shape; every field is
//! optional because the API omits or nulls them freely.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A record stored by the Foo service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Foo {
    pub id: i32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: IndexMap<String, String>,
}

impl Foo {
    pub fn new(id: i32, name: impl Into<String>, data: IndexMap<String, String>) -> Self {
        Self {
            id,
            name: name.into(),
            data,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Weather report as returned by the weather API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Weather {
    #[serde(rename = "apiVersion", default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub data: Option<WeatherData>,
}

/// Renders as the JSON text of the report.
impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherData {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub skytext: Option<String>,
    #[serde(default)]
    pub humidity: Option<String>,
    #[serde(default)]
    pub wind: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
}
