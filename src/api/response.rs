use crate::error::Result;
use serde_json::Value;

/// Extract the generated text from a chat-completions response body.
pub fn extract_content(response_json: &Value) -> Result<Option<String>> {
    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| crate::error::NewsdeskError::Other("No choices in response".to_string()))?;

    let first_choice = choices
        .first()
        .ok_or_else(|| crate::error::NewsdeskError::Other("Empty choices array".to_string()))?;

    let message = first_choice
        .get("message")
        .ok_or_else(|| crate::error::NewsdeskError::Other("No message in response".to_string()))?;

    Ok(message
        .get("content")
        .and_then(|c| c.as_str())
        .map(|s| s.to_string()))
}
