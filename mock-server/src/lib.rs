//! In-memory stand-in for the items store.
//!
//! Serves the `/items` REST resource with the persisted schema the real
//! store defines: an auto-incrementing integer primary key, a `what` text
//! column, a `when` date column, and store-managed `created_at`/`updated_at`
//! timestamps. `when` is a real `NaiveDate` here, so the storage tier is
//! what rejects malformed dates; the client sends and receives plain text.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub what: String,
    pub when: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for create and update. Both fields are required: update is a full
/// replacement, never a partial merge.
#[derive(Deserialize)]
pub struct ItemDraft {
    pub what: String,
    pub when: NaiveDate,
}

pub struct Store {
    items: BTreeMap<i64, Item>,
    next_id: i64,
}

impl Store {
    fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::new()));
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(draft): Json<ItemDraft>,
) -> (StatusCode, Json<Item>) {
    let mut store = db.write().await;
    let now = Utc::now();
    let item = Item {
        id: store.next_id,
        what: draft.what,
        when: draft.when,
        created_at: now,
        updated_at: now,
    };
    store.next_id += 1;
    store.items.insert(item.id, item.clone());
    info!(id = item.id, "created item");
    (StatusCode::CREATED, Json(item))
}

async fn get_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Item>, StatusCode> {
    let store = db.read().await;
    store
        .items
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(draft): Json<ItemDraft>,
) -> Result<Json<Item>, StatusCode> {
    let mut store = db.write().await;
    let item = store.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    item.what = draft.what;
    item.when = draft.when;
    item.updated_at = Utc::now();
    info!(id, "replaced item");
    Ok(Json(item.clone()))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let removed = store.items.remove(&id);
    if removed.is_some() {
        info!(id, "deleted item");
    }
    removed
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn item_serializes_to_json() {
        let now = "2026-01-07T16:50:41Z".parse::<DateTime<Utc>>().unwrap();
        let item = Item {
            id: 1,
            what: "Buy milk".to_string(),
            when: date("2026-01-10"),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["what"], "Buy milk");
        assert_eq!(json["when"], "2026-01-10");
        assert!(json["created_at"].is_string());
        assert!(json["updated_at"].is_string());
    }

    #[test]
    fn draft_rejects_missing_what() {
        let result: Result<ItemDraft, _> = serde_json::from_str(r#"{"when":"2026-01-10"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_rejects_missing_when() {
        let result: Result<ItemDraft, _> = serde_json::from_str(r#"{"what":"No date"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_rejects_non_date_when() {
        let result: Result<ItemDraft, _> =
            serde_json::from_str(r#"{"what":"Bad date","when":"next tuesday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_parses_iso_date() {
        let draft: ItemDraft =
            serde_json::from_str(r#"{"what":"Buy milk","when":"2026-01-10"}"#).unwrap();
        assert_eq!(draft.what, "Buy milk");
        assert_eq!(draft.when, date("2026-01-10"));
    }
}
