//! `interviews/` endpoint.

use super::fetch_list;
use crate::error::ApiError;
use crate::gateway::{ApiRequest, Gateway, Transport};
use crate::types::Interview;

/// Interviews visible to the signed-in user, in server order.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn list<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Interview>, ApiError> {
    fetch_list(gateway, ApiRequest::get("interviews/")).await
}
