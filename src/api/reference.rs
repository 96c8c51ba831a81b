//! Reference Data Endpoints
//!
//! Dogs and exercises, fetched once for the new-task form.

use super::{get_json, ApiError};
use crate::models::{Dog, Exercise, ItemList};

pub async fn list_dogs() -> Result<Vec<Dog>, ApiError> {
    let list: ItemList<Dog> = get_json("/dogs").await?;
    Ok(list.items)
}

pub async fn list_exercises() -> Result<Vec<Exercise>, ApiError> {
    let list: ItemList<Exercise> = get_json("/exercises").await?;
    Ok(list.items)
}
