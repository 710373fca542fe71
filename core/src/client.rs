//! HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, so
//! both sides of the wire can be tested without a server. `TodoApi` composes
//! the two around a [`Transport`] and is what the controller talks to.
//!
//! Any 2xx status counts as success; the backend answers 201 for create and
//! 200 everywhere else. Everything outside that range becomes
//! `ApiError::Status` carrying the code and reason phrase.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{NewTodo, TodoId, TodoItem};

/// Stateless request builder / response parser for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, draft: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Full-record replace; the id in the path is the one that counts.
    pub fn build_update(&self, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(item).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/todos/{}", self.base_url, item.id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_success(&response)?;
        parse_body(&response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_success(&response)?;
        parse_body(&response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_success(&response)?;
        parse_body(&response)
    }

    /// The backend answers a delete with the removed record.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_success(&response)?;
        parse_body(&response)
    }
}

fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        status_text: response.status_text.clone(),
    })
}

fn parse_body<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// The four CRUD operations, executed end to end over a [`Transport`].
#[derive(Debug)]
pub struct TodoApi<T: Transport> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn list(&self) -> Result<Vec<TodoItem>, ApiError> {
        let request = self.client.build_list();
        let response = self.transport.execute(&request)?;
        let items = self.client.parse_list(response)?;
        log::debug!("listed {} todos", items.len());
        Ok(items)
    }

    pub fn create(&self, draft: &NewTodo) -> Result<TodoItem, ApiError> {
        let request = self.client.build_create(draft)?;
        let response = self.transport.execute(&request)?;
        let created = self.client.parse_create(response)?;
        log::debug!("created todo {}", created.id);
        Ok(created)
    }

    pub fn update(&self, item: &TodoItem) -> Result<TodoItem, ApiError> {
        let request = self.client.build_update(item)?;
        let response = self.transport.execute(&request)?;
        let updated = self.client.parse_update(response)?;
        log::debug!("updated todo {}", updated.id);
        Ok(updated)
    }

    pub fn delete(&self, id: TodoId) -> Result<TodoItem, ApiError> {
        let request = self.client.build_delete(id);
        let response = self.transport.execute(&request)?;
        let deleted = self.client.parse_delete(response)?;
        log::debug!("deleted todo {}", deleted.id);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn ok(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: "OK".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_produces_correct_request() {
        let draft = NewTodo::pending("Buy milk");
        let req = client().build_create(&draft).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["content"], "Buy milk");
        assert_eq!(body["pending"], true);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_puts_full_record_to_item_url() {
        let item = TodoItem {
            id: 42,
            content: "Edited".to_string(),
            pending: false,
        };
        let req = client().build_update(&item).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/todos/42");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 42);
        assert_eq!(body["content"], "Edited");
        assert_eq!(body["pending"], false);
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = client().build_delete(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_success() {
        let body = r#"[{"id":1,"content":"Test","pending":true}]"#;
        let todos = client().parse_list(ok(200, body)).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].content, "Test");
        assert!(todos[0].pending);
    }

    #[test]
    fn parse_create_accepts_201() {
        let body = r#"{"id":3,"content":"New","pending":true}"#;
        let todo = client().parse_create(ok(201, body)).unwrap();
        assert_eq!(todo.id, 3);
    }

    #[test]
    fn parse_delete_returns_deleted_record() {
        let body = r#"{"id":3,"content":"Gone","pending":false}"#;
        let todo = client().parse_delete(ok(200, body)).unwrap();
        assert_eq!(todo.content, "Gone");
    }

    #[test]
    fn non_2xx_carries_status_and_reason() {
        let response = HttpResponse {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: "boom".to_string(),
        };
        let err = client().parse_create(response).unwrap_err();
        match err {
            ApiError::Status {
                status,
                status_text,
            } => {
                assert_eq!(status, 500);
                assert_eq!(status_text, "Internal Server Error");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list(ok(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list();
        assert_eq!(req.url, "http://localhost:3000/todos");
    }
}
