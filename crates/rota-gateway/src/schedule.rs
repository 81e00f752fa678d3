//! Schedule operations: fetch, recompute, unschedule one task.
//!
//! A schedule entry pairs one task with the resources assigned to it. Both
//! fetch and recompute answer with the same entry shape, so they share one
//! outcome mapping; nested task and resource timestamps are rewritten for
//! display on the way through.

use rota_core::{JsonMap, time};
use urlencoding::encode;

use crate::http::{self, Method, RawResponse};
use crate::{Gateway, ServiceError};

impl Gateway {
    /// Retrieve the current schedule for `client_id`. A 404 means nothing is
    /// scheduled yet and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service answers an unexpected
    /// status, the body does not decode, or the connection fails.
    pub async fn schedule(&self, client_id: &str) -> Result<Vec<JsonMap>, ServiceError> {
        let path = format!("/retrieveSchedule?clientId={}", encode(client_id));
        let raw = self
            .send(Method::Get, &path)
            .await
            .map_err(|_| ServiceError::Connection)?;
        schedule_outcome(raw)
    }

    /// Ask the service to recompute the schedule, matching tasks only to
    /// resources within `max_distance` kilometers, and return the new
    /// schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service answers an unexpected
    /// status, the body does not decode, or the connection fails.
    pub async fn recompute_schedule(
        &self,
        max_distance: f64,
        client_id: &str,
    ) -> Result<Vec<JsonMap>, ServiceError> {
        let path = format!(
            "/updateSchedule?maxDistance={max_distance}&clientId={}",
            encode(client_id)
        );
        let raw = self
            .send(Method::Patch, &path)
            .await
            .map_err(|_| ServiceError::Connection)?;
        schedule_outcome(raw)
    }

    /// Pull one task out of the schedule and return the fixed confirmation
    /// text. The task itself survives; only its assignment is released.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Conflict`] when the task is not currently
    /// scheduled, [`ServiceError::NotFound`] when the service does not know
    /// it, and the usual status and connection classifications otherwise.
    pub async fn unschedule_task(
        &self,
        task_id: &str,
        client_id: &str,
    ) -> Result<String, ServiceError> {
        let path = format!(
            "/unscheduleTask?taskId={}&clientId={}",
            encode(task_id),
            encode(client_id)
        );
        let raw = self
            .send(Method::Patch, &path)
            .await
            .map_err(|_| ServiceError::Connection)?;
        unschedule_task_outcome(raw)
    }
}

fn schedule_outcome(raw: RawResponse) -> Result<Vec<JsonMap>, ServiceError> {
    if raw.is_success() {
        let mut entries = http::json_array(&raw.body).map_err(|error| {
            tracing::debug!(%error, "schedule body did not decode");
            ServiceError::Parse
        })?;
        for entry in &mut entries {
            time::normalize_schedule_entry(entry).map_err(|error| {
                tracing::debug!(%error, "schedule entry carried a bad timestamp");
                ServiceError::Parse
            })?;
        }
        return Ok(entries);
    }
    match raw.status {
        404 => {
            tracing::debug!("schedule answered 404, treating as empty");
            Ok(Vec::new())
        }
        status => Err(ServiceError::UnexpectedStatus(status)),
    }
}

fn unschedule_task_outcome(raw: RawResponse) -> Result<String, ServiceError> {
    if raw.is_success() {
        return Ok("Task unscheduled successfully".to_string());
    }
    match raw.status {
        400 => Err(ServiceError::Conflict(
            "Cannot unschedule a task that is not currently scheduled".to_string(),
        )),
        404 => Err(ServiceError::NotFound("Task not found".to_string())),
        status => Err(ServiceError::UnexpectedStatus(status)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    const SCHEDULE_FIXTURE: &str = r#"[
        {
            "task": {
                "taskId": "t1",
                "taskName": "Emergency room triage",
                "startTime": "2024-11-05T08:00:00",
                "endTime": "2024-11-05T12:30:00"
            },
            "assignedResources": [
                {"resourceId": "Ambulance 1", "availableFrom": "2024-11-05T12:30:00"},
                {"resourceId": "Nurse 4", "availableFrom": null}
            ]
        }
    ]"#;

    fn ok(body: &str) -> RawResponse {
        RawResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn entries_rewrite_nested_times() {
        let entries = schedule_outcome(ok(SCHEDULE_FIXTURE)).unwrap();
        assert_eq!(entries.len(), 1);

        let task = entries[0].get("task").and_then(Value::as_object).unwrap();
        assert_eq!(task.get("startTime"), Some(&json!("2024-11-05 08:00")));
        assert_eq!(task.get("endTime"), Some(&json!("2024-11-05 12:30")));

        let resources = entries[0]
            .get("assignedResources")
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(
            resources[0].get("availableFrom"),
            Some(&json!("2024-11-05 12:30"))
        );
        assert_eq!(resources[1].get("availableFrom"), Some(&Value::Null));
    }

    #[test]
    fn entries_without_nested_slots_pass_through() {
        let entries = schedule_outcome(ok(r#"[{"note": "empty slot"}]"#)).unwrap();
        assert_eq!(entries[0].get("note"), Some(&json!("empty slot")));
    }

    #[test]
    fn empty_schedule_404_degrades_to_empty() {
        assert_eq!(schedule_outcome(raw(404, "")).unwrap(), Vec::new());
    }

    #[test]
    fn bad_nested_timestamp_is_a_parse_failure() {
        let body = r#"[{"task": {"startTime": "soon"}}]"#;
        assert_eq!(schedule_outcome(ok(body)).unwrap_err(), ServiceError::Parse);
    }

    #[test]
    fn recompute_shares_the_listing_shape() {
        let entries = schedule_outcome(ok("[]")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn unschedule_answers_with_the_fixed_message() {
        assert_eq!(
            unschedule_task_outcome(ok("whatever the service said")).unwrap(),
            "Task unscheduled successfully"
        );
    }

    #[test]
    fn unscheduling_an_unscheduled_task_is_a_conflict() {
        let error = unschedule_task_outcome(raw(400, "")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot unschedule a task that is not currently scheduled"
        );
        assert!(matches!(error, ServiceError::Conflict(_)));
    }

    #[test]
    fn unscheduling_an_unknown_task_is_not_found() {
        let error = unschedule_task_outcome(raw(404, "")).unwrap_err();
        assert_eq!(error.to_string(), "Task not found");
        assert!(matches!(error, ServiceError::NotFound(_)));
    }

    #[test]
    fn unschedule_reports_other_statuses() {
        assert_eq!(
            unschedule_task_outcome(raw(500, "")).unwrap_err(),
            ServiceError::UnexpectedStatus(500)
        );
    }
}
