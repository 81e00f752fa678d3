//! Resource type operations: list, create, adjust quantity, delete.
//!
//! Resource records carry no timestamps at the top level, so listings come
//! back exactly as the service sent them. Mutation confirmations are plain
//! text on the wire; creation and deletion answer with fixed messages, the
//! quantity adjustment echoes whatever the service said.

use rota_core::JsonMap;
use urlencoding::encode;

use crate::http::{self, Method, RawResponse};
use crate::{Gateway, ServiceError};

/// Parameters for resource type creation, forwarded verbatim as query
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResourceType {
    pub type_name: String,
    pub total_units: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl Gateway {
    /// Retrieve every resource type owned by `client_id`. A 404 means the
    /// tenant has no resource types yet and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service answers an unexpected
    /// status, the body does not decode, or the connection fails.
    pub async fn resource_types(&self, client_id: &str) -> Result<Vec<JsonMap>, ServiceError> {
        let path = format!("/retrieveResourceTypes?clientId={}", encode(client_id));
        let raw = self
            .send(Method::Get, &path)
            .await
            .map_err(|_| ServiceError::Connection)?;
        resource_types_outcome(raw)
    }

    /// Create a resource type and return the fixed confirmation text.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service answers a non-2xx status or
    /// the exchange fails.
    pub async fn add_resource_type(
        &self,
        resource_type: &NewResourceType,
        client_id: &str,
    ) -> Result<String, ServiceError> {
        let path = format!(
            "/addResourceType?typeName={}&totalUnits={}&latitude={}&longitude={}&clientId={}",
            encode(&resource_type.type_name),
            resource_type.total_units,
            resource_type.latitude,
            resource_type.longitude,
            encode(client_id)
        );
        let raw = self
            .send(Method::Patch, &path)
            .await
            .map_err(|error| ServiceError::failed("add resource type", error.0))?;
        add_resource_type_outcome(raw)
    }

    /// Set how many units of `type_name` the task needs and return the
    /// service's confirmation text.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the service answers a non-2xx status or
    /// the exchange fails.
    pub async fn modify_resource(
        &self,
        task_id: &str,
        type_name: &str,
        quantity: i32,
        client_id: &str,
    ) -> Result<String, ServiceError> {
        let path = format!(
            "/modifyResourceType?taskId={}&typeName={}&quantity={quantity}&clientId={}",
            encode(task_id),
            encode(type_name),
            encode(client_id)
        );
        let raw = self
            .send(Method::Patch, &path)
            .await
            .map_err(|error| ServiceError::failed("modify resource", error.0))?;
        modify_resource_outcome(raw)
    }

    /// Delete a resource type and return the fixed confirmation text.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Conflict`] when the type is still in use,
    /// [`ServiceError::NotFound`] when the service does not know it, and the
    /// usual status and connection classifications otherwise.
    pub async fn delete_resource_type(
        &self,
        type_name: &str,
        client_id: &str,
    ) -> Result<String, ServiceError> {
        let path = format!(
            "/deleteResourceType?typeName={}&clientId={}",
            encode(type_name),
            encode(client_id)
        );
        let raw = self
            .send(Method::Delete, &path)
            .await
            .map_err(|error| ServiceError::failed("delete resource type", error.0))?;
        delete_resource_type_outcome(raw)
    }
}

fn resource_types_outcome(raw: RawResponse) -> Result<Vec<JsonMap>, ServiceError> {
    if raw.is_success() {
        return http::json_array(&raw.body).map_err(|error| {
            tracing::debug!(%error, "resource type list body did not decode");
            ServiceError::Parse
        });
    }
    match raw.status {
        404 => {
            tracing::debug!("resource type listing answered 404, treating as empty");
            Ok(Vec::new())
        }
        status => Err(ServiceError::UnexpectedStatus(status)),
    }
}

fn add_resource_type_outcome(raw: RawResponse) -> Result<String, ServiceError> {
    if raw.is_success() {
        return Ok("Resource type added successfully".to_string());
    }
    Err(ServiceError::UnexpectedStatus(raw.status))
}

fn modify_resource_outcome(raw: RawResponse) -> Result<String, ServiceError> {
    if raw.is_success() {
        return Ok(raw.body);
    }
    Err(ServiceError::UnexpectedStatus(raw.status))
}

fn delete_resource_type_outcome(raw: RawResponse) -> Result<String, ServiceError> {
    if raw.is_success() {
        return Ok("Resource type deleted successfully".to_string());
    }
    match raw.status {
        400 => Err(ServiceError::Conflict(
            "Cannot delete a resource type that is currently in use".to_string(),
        )),
        404 => Err(ServiceError::NotFound("Resource type not found".to_string())),
        status => Err(ServiceError::UnexpectedStatus(status)),
    }
}
