//! Task Endpoints

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{get_json, post_empty, post_json, ApiError};
use crate::models::{CreateTaskRequest, CreatedTask, Id, ItemList, Task};

/// Characters left as-is inside a path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let list: ItemList<Task> = get_json("/tasks").await?;
    Ok(list.items)
}

pub async fn create_task(request: &CreateTaskRequest) -> Result<CreatedTask, ApiError> {
    post_json("/tasks", request).await
}

pub async fn complete_task(id: &Id) -> Result<(), ApiError> {
    post_empty(&complete_path(id)).await
}

fn complete_path(id: &Id) -> String {
    format!("/tasks/{}/complete", utf8_percent_encode(id.as_str(), PATH_SEGMENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_path_encodes_id() {
        assert_eq!(complete_path(&Id::new("42")), "/tasks/42/complete");
        assert_eq!(complete_path(&Id::new("a-b_c.d~e")), "/tasks/a-b_c.d~e/complete");
        assert_eq!(complete_path(&Id::new("x/y z")), "/tasks/x%2Fy%20z/complete");
    }
}
