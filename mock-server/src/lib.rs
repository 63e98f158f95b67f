use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// First id handed out by `POST /items`.
pub const FIRST_ITEM_ID: u64 = 42;

/// How long `GET /slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
}

/// What `/echo` saw. Header names are lower-case.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Stored items and the id the next `POST /items` hands out. Ids are never
/// reused, even after a delete.
#[derive(Debug)]
pub struct Store {
    pub items: BTreeMap<u64, Item>,
    pub next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: FIRST_ITEM_ID,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/items", post(create_item))
        .route("/items/{id}", get(get_item).delete(delete_item))
        .route("/health", get(health))
        .route("/echo", any(echo))
        .route("/slow", get(slow))
        .route("/status/{code}", get(status))
        .route("/html", get(html))
        .route("/bytes/{len}", get(bytes))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_item(State(db): State<Db>, Json(input): Json<CreateItem>) -> (StatusCode, Json<Item>) {
    let mut store = db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    let item = Item { id, name: input.name };
    store.items.insert(id, item.clone());
    tracing::info!(id, "item created");
    (StatusCode::CREATED, Json(item))
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, (StatusCode, Json<ErrorBody>)> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or_else(|| not_found(id))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorBody>)> {
    let mut store = db.write().await;
    store
        .items
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| not_found(id))
}

async fn health() -> &'static str {
    "ok"
}

async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(Echo {
        method: method.to_string(),
        headers,
        body,
    })
}

async fn slow() -> &'static str {
    tokio::time::sleep(SLOW_DELAY).await;
    "late"
}

async fn status(Path(code): Path<u16>) -> (StatusCode, Json<ErrorBody>) {
    let code = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        code,
        Json(ErrorBody {
            error: code.canonical_reason().unwrap_or("unknown").to_string(),
        }),
    )
}

async fn html() -> &'static str {
    "<html><body>not json</body></html>"
}

/// `len` bytes of `a`, for body-size tests.
async fn bytes(Path(len): Path<usize>) -> Vec<u8> {
    vec![b'a'; len]
}

fn not_found(id: u64) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: format!("item {id} not found"),
        }),
    )
}
