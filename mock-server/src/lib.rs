use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Foo {
    pub id: i32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: IndexMap<String, String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Weather {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub data: WeatherData,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: String,
    pub temperature: String,
    pub skytext: String,
    pub humidity: String,
    pub wind: String,
    pub date: String,
    pub day: String,
}

#[derive(Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<i32, Foo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/foo", get(list_foos).post(save_foo))
        .route("/foo/{id}", get(get_foo).delete(delete_foo))
        .route("/api.php", get(weather))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_foos(State(db): State<Db>) -> Json<Vec<Foo>> {
    let foos = db.read().await;
    Json(foos.values().cloned().collect())
}

/// Create or replace by `Id`. Answers with a `Location` header and no body.
async fn save_foo(State(db): State<Db>, Json(input): Json<Foo>) -> Response {
    let id = input.id;
    let previous = db.write().await.insert(id, input);
    let status = if previous.is_some() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    tracing::debug!(id, %status, "saved foo");
    (status, [(header::LOCATION, format!("/foo/{id}"))]).into_response()
}

async fn get_foo(State(db): State<Db>, Path(id): Path<i32>) -> Result<Json<Foo>, StatusCode> {
    let foos = db.read().await;
    foos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_foo(State(db): State<Db>, Path(id): Path<i32>) -> Result<StatusCode, StatusCode> {
    let mut foos = db.write().await;
    foos.remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn weather(Query(query): Query<WeatherQuery>) -> Response {
    let Some(city) = query.city.filter(|c| !c.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, "City cannot be empty.").into_response();
    };
    Json(canned_weather(&city)).into_response()
}

/// Fixed report for `city`, shaped like the public weather API's answer.
pub fn canned_weather(city: &str) -> Weather {
    Weather {
        api_version: "1.0".to_string(),
        data: WeatherData {
            location: city.to_string(),
            temperature: "25".to_string(),
            skytext: "Scattered clouds".to_string(),
            humidity: "50".to_string(),
            wind: "15.52 km/h".to_string(),
            date: "06-17-2017".to_string(),
            day: "Saturday".to_string(),
        },
    }
}
