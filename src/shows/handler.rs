//! # Show Handler
//!
//! Request policy for the `shows` collection. Each method takes the raw path
//! segment or body the route received, talks to the datastore and returns the
//! finished envelope.
//!
//! Result wrapping differs per operation and is part of the API contract:
//! `list` wraps records under `"shows"`, while `get`, `create` and `update`
//! return the bare record.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::datastore::{Record, Store};
use crate::envelope::Envelope;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{ShowError, ShowResult};

/// Collection holding show records
pub const COLLECTION: &str = "shows";

/// Required at creation
pub const NAME_FIELD: &str = "name";

/// Required at creation
pub const EPISODES_SEEN_FIELD: &str = "episodes_seen";

/// Show CRUD policy over an injected datastore
#[derive(Clone)]
pub struct ShowHandler {
    store: Store,
}

impl ShowHandler {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// `GET /shows`
    pub fn list(&self) -> ShowResult<Envelope> {
        let shows: Vec<Value> = self
            .store
            .get_all(COLLECTION)?
            .into_iter()
            .map(Value::Object)
            .collect();
        Ok(Envelope::ok(json!({ "shows": shows }))?)
    }

    /// `GET /shows/{id}`
    pub fn get(&self, raw_id: &str) -> ShowResult<Envelope> {
        let id = parse_id(raw_id)?;
        let show = self.fetch(id)?;
        Ok(Envelope::ok(Value::Object(show))?)
    }

    /// `POST /shows`
    ///
    /// A body that is missing, malformed or not an object counts as having no
    /// fields, so it fails the `name` check.
    pub fn create(&self, body: &[u8]) -> ShowResult<Envelope> {
        let show = parse_object(body).unwrap_or_default();
        validate_new_show(&show)?;

        let id = self.store.create(COLLECTION, show)?;
        let created = self.fetch(id)?;
        log_event_with_fields(Event::ShowCreated, &[("id", &id.to_string())]);

        Ok(Envelope::new(
            Some(Value::Object(created)),
            StatusCode::CREATED,
            "show added",
        )?)
    }

    /// `PUT /shows/{id}`
    pub fn update(&self, raw_id: &str, body: &[u8]) -> ShowResult<Envelope> {
        let id = parse_id(raw_id)?;
        self.fetch(id)?;

        let patch = parse_object(body).ok_or(ShowError::InvalidPatch)?;
        self.store.update_by_id(COLLECTION, id, patch)?;
        let updated = self.fetch(id)?;
        log_event_with_fields(Event::ShowUpdated, &[("id", &id.to_string())]);

        Ok(Envelope::ok(Value::Object(updated))?)
    }

    /// `DELETE /shows/{id}`
    pub fn delete(&self, raw_id: &str) -> ShowResult<Envelope> {
        let id = parse_id(raw_id)?;
        self.fetch(id)?;

        self.store.delete_by_id(COLLECTION, id)?;
        log_event_with_fields(Event::ShowDeleted, &[("id", &id.to_string())]);

        Ok(Envelope::status(StatusCode::OK, "Show deleted"))
    }

    fn fetch(&self, id: u64) -> ShowResult<Record> {
        self.store
            .get_by_id(COLLECTION, id)?
            .ok_or(ShowError::NotFound)
    }
}

/// Path ids that are not unsigned integers can never name a record
fn parse_id(raw: &str) -> ShowResult<u64> {
    raw.trim().parse().map_err(|_| ShowError::NotFound)
}

fn parse_object(body: &[u8]) -> Option<Record> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Presence checks only, `name` first
fn validate_new_show(show: &Record) -> ShowResult<()> {
    if !show.contains_key(NAME_FIELD) {
        return Err(ShowError::MissingName);
    }
    if !show.contains_key(EPISODES_SEEN_FIELD) {
        return Err(ShowError::MissingEpisodesSeen);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastore::InMemoryDatastore;
    use std::sync::Arc;

    fn handler() -> ShowHandler {
        ShowHandler::new(Arc::new(InMemoryDatastore::new()))
    }

    fn create(handler: &ShowHandler, body: Value) -> ShowResult<Envelope> {
        handler.create(body.to_string().as_bytes())
    }

    #[test]
    fn test_list_empty_is_wrapped() {
        let envelope = handler().list().unwrap();
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.result, Some(json!({"shows": []})));
    }

    #[test]
    fn test_create_returns_assigned_record() {
        let handler = handler();
        let envelope = create(&handler, json!({"name": "Foo", "episodes_seen": 2})).unwrap();
        assert_eq!(envelope.code, 201);
        assert_eq!(envelope.message, "show added");
        assert_eq!(
            envelope.result,
            Some(json!({"id": 1, "name": "Foo", "episodes_seen": 2}))
        );
    }

    #[test]
    fn test_create_name_checked_first() {
        let handler = handler();
        assert_eq!(create(&handler, json!({"episodes_seen": 3})), Err(ShowError::MissingName));
        assert_eq!(create(&handler, json!({})), Err(ShowError::MissingName));
        assert_eq!(
            create(&handler, json!({"name": "Foo"})),
            Err(ShowError::MissingEpisodesSeen)
        );
    }

    #[test]
    fn test_create_non_object_body_missing_name() {
        let handler = handler();
        assert_eq!(handler.create(b""), Err(ShowError::MissingName));
        assert_eq!(handler.create(b"not json"), Err(ShowError::MissingName));
        assert_eq!(handler.create(b"[1,2]"), Err(ShowError::MissingName));
    }

    #[test]
    fn test_create_ignores_caller_id() {
        let handler = handler();
        let envelope = create(&handler, json!({"id": 50, "name": "Foo", "episodes_seen": 0})).unwrap();
        assert_eq!(envelope.result.unwrap()["id"], 1);
        assert_eq!(handler.get("50"), Err(ShowError::NotFound));
    }

    #[test]
    fn test_get_unknown_or_unparseable_id() {
        let handler = handler();
        assert_eq!(handler.get("1"), Err(ShowError::NotFound));
        assert_eq!(handler.get("abc"), Err(ShowError::NotFound));
        assert_eq!(handler.get("-1"), Err(ShowError::NotFound));
    }

    #[test]
    fn test_update_patches_fields() {
        let handler = handler();
        create(&handler, json!({"name": "Foo", "episodes_seen": 2})).unwrap();

        let envelope = handler.update("1", br#"{"episodes_seen": 5}"#).unwrap();
        assert_eq!(envelope.code, 200);
        assert_eq!(
            envelope.result,
            Some(json!({"id": 1, "name": "Foo", "episodes_seen": 5}))
        );
    }

    #[test]
    fn test_update_missing_checked_before_body() {
        let handler = handler();
        assert_eq!(handler.update("9", b"garbage"), Err(ShowError::NotFound));

        create(&handler, json!({"name": "Foo", "episodes_seen": 2})).unwrap();
        assert_eq!(handler.update("1", b"[]"), Err(ShowError::InvalidPatch));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let handler = handler();
        create(&handler, json!({"name": "Foo", "episodes_seen": 2})).unwrap();

        let envelope = handler.delete("1").unwrap();
        assert_eq!(envelope.message, "Show deleted");
        assert_eq!(envelope.result, None);
        assert_eq!(handler.get("1"), Err(ShowError::NotFound));
        assert_eq!(handler.delete("1"), Err(ShowError::NotFound));
    }
}
