use serde::Serialize;

use crate::error::AqrError;

pub fn render<T: Serialize>(data: &T) -> Result<String, AqrError> {
    Ok(serde_json::to_string_pretty(data)?)
}
