use lab_core::fields::StudentIdInput;
use serde::de::DeserializeOwned;

/// Classify a raw command-line student ID the way a loosely typed caller
/// would send it: integer first, then float, otherwise text.
#[must_use]
pub fn student_id_input(raw: &str) -> StudentIdInput {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return StudentIdInput::Int(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => StudentIdInput::Float(value),
        _ => StudentIdInput::Text(raw.to_string()),
    }
}

/// Deserialize a JSON payload into a `NewX` struct, naming the entity on failure.
pub fn parse_payload<T>(raw: &str, entity: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(raw).map_err(|error| anyhow::anyhow!("invalid {entity} payload: {error}"))
}
