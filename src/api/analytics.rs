//! Analytics Endpoints

use super::{get_json, ApiError};
use crate::models::Summary;

/// `GET /analytics/summary`
pub async fn fetch_summary() -> Result<Summary, ApiError> {
    get_json("/analytics/summary").await
}
