//! Task operations: list, lookup, create, delete.

use rota_core::{JsonMap, time};
use urlencoding::encode;

use crate::http::{self, Method, RawResponse};
use crate::{Gateway, ServiceError};

/// Parameters for task creation, forwarded verbatim as query parameters.
///
/// The service owns validation (priority range, time ordering, coordinate
/// bounds); the gateway does not second-guess it. Times travel in the
/// `yyyy-mm-dd hh:mm` display pattern the service accepts on this endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub task_name: String,
    pub priority: i32,
    pub start_time: String,
    pub end_time: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Gateway {
    /// Retrieve every task owned by `client_id`, start and end times
    /// rewritten for display. A 404 means the tenant has no tasks yet and
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service answers an unexpected
    /// status, the body does not decode, or the connection fails.
    pub async fn tasks(&self, client_id: &str) -> Result<Vec<JsonMap>, ServiceError> {
        let path = format!("/retrieveTasks?clientId={}", encode(client_id));
        let raw = self
            .send(Method::Get, &path)
            .await
            .map_err(|_| ServiceError::Connection)?;
        tasks_outcome(raw)
    }

    /// Retrieve one task by id, times rewritten for display.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the service does not know the
    /// task, and the usual status, decode, and connection classifications
    /// otherwise.
    pub async fn task(&self, task_id: &str, client_id: &str) -> Result<JsonMap, ServiceError> {
        let path = format!(
            "/retrieveTask?taskId={}&clientId={}",
            encode(task_id),
            encode(client_id)
        );
        let raw = self
            .send(Method::Get, &path)
            .await
            .map_err(|_| ServiceError::Connection)?;
        task_outcome(raw)
    }

    /// Create a task and return the record the service stored, exactly as
    /// the service sent it back.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service answers a non-2xx status or
    /// the exchange fails before a record comes back.
    pub async fn add_task(&self, task: &NewTask, client_id: &str) -> Result<JsonMap, ServiceError> {
        let path = format!(
            "/addTask?taskName={}&priority={}&startTime={}&endTime={}&latitude={}&longitude={}&clientId={}",
            encode(&task.task_name),
            task.priority,
            encode(&task.start_time),
            encode(&task.end_time),
            task.latitude,
            task.longitude,
            encode(client_id)
        );
        let raw = self
            .send(Method::Patch, &path)
            .await
            .map_err(|error| ServiceError::failed("add task", error.0))?;
        add_task_outcome(raw)
    }

    /// Delete a task and return the service's confirmation text.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service answers a non-2xx status or
    /// the exchange fails.
    pub async fn delete_task(
        &self,
        task_id: &str,
        client_id: &str,
    ) -> Result<String, ServiceError> {
        let path = format!(
            "/deleteTask?taskId={}&clientId={}",
            encode(task_id),
            encode(client_id)
        );
        let raw = self
            .send(Method::Delete, &path)
            .await
            .map_err(|error| ServiceError::failed("delete task", error.0))?;
        delete_task_outcome(raw)
    }
}

fn tasks_outcome(raw: RawResponse) -> Result<Vec<JsonMap>, ServiceError> {
    if raw.is_success() {
        let mut tasks = http::json_array(&raw.body).map_err(|error| {
            tracing::debug!(%error, "task list body did not decode");
            ServiceError::Parse
        })?;
        for task in &mut tasks {
            time::normalize_task(task).map_err(|error| {
                tracing::debug!(%error, "task list carried a bad timestamp");
                ServiceError::Parse
            })?;
        }
        return Ok(tasks);
    }
    match raw.status {
        404 => {
            tracing::debug!("task listing answered 404, treating as empty");
            Ok(Vec::new())
        }
        status => Err(ServiceError::UnexpectedStatus(status)),
    }
}

fn task_outcome(raw: RawResponse) -> Result<JsonMap, ServiceError> {
    if raw.is_success() {
        let mut task = http::json_object(&raw.body).map_err(|error| {
            tracing::debug!(%error, "task body did not decode");
            ServiceError::Parse
        })?;
        time::normalize_task(&mut task).map_err(|error| {
            tracing::debug!(%error, "task carried a bad timestamp");
            ServiceError::Parse
        })?;
        return Ok(task);
    }
    match raw.status {
        404 => Err(ServiceError::NotFound("Task not found.".to_string())),
        status => Err(ServiceError::UnexpectedStatus(status)),
    }
}

fn add_task_outcome(raw: RawResponse) -> Result<JsonMap, ServiceError> {
    if raw.is_success() {
        return http::json_object(&raw.body)
            .map_err(|error| ServiceError::failed("add task", error.to_string()));
    }
    Err(ServiceError::UnexpectedStatus(raw.status))
}

fn delete_task_outcome(raw: RawResponse) -> Result<String, ServiceError> {
    if raw.is_success() {
        return Ok(raw.body);
    }
    Err(ServiceError::UnexpectedStatus(raw.status))
}
