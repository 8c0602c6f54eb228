//! Embedded JSON-schema documents and response-body validation.
//!
//! Each verifier family has a default schema; `verify_json_schema` accepts
//! an override for tests probing alternative contracts. Schemas are small,
//! so they are compiled per validation call rather than cached.

use jsonschema::JSONSchema;
use serde_json::Value;

/// Schema for full player entities (create and get-by-id responses).
pub const PLAYER: &str = include_str!("../schemas/player.json");
/// Schema for update responses: a full entity without a password.
pub const PLAYER_UPDATE: &str = include_str!("../schemas/player-update.json");
/// Schema for the get-all response envelope of reduced projections.
pub const PLAYER_LIST: &str = include_str!("../schemas/player-list.json");

/// Validate a raw response body against a schema document.
///
/// Returns every violation, not just the first, so a mismatched body reports
/// all its problems at once.
pub fn validate(body: &str, schema_src: &str) -> Result<(), Vec<String>> {
    let schema: Value = serde_json::from_str(schema_src)
        .map_err(|e| vec![format!("schema document is not valid JSON: {e}")])?;
    let instance: Value = serde_json::from_str(body)
        .map_err(|e| vec![format!("response body is not valid JSON: {e}")])?;

    let compiled = JSONSchema::compile(&schema)
        .map_err(|e| vec![format!("schema compilation failed: {e}")])?;

    if let Err(errors) = compiled.validate(&instance) {
        let messages: Vec<String> = errors
            .map(|error| format!("{} (at {})", error, error.instance_path))
            .collect();
        return Err(messages);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PLAYER: &str = r#"{
        "id": 10, "login": "u1", "password": "p1", "role": "user",
        "age": 30, "gender": "MALE", "screenName": "S1"
    }"#;

    #[test]
    fn full_player_matches_player_schema() {
        assert!(validate(FULL_PLAYER, PLAYER).is_ok());
    }

    #[test]
    fn missing_required_field_is_reported() {
        let body = r#"{"id": 10, "login": "u1"}"#;
        let errors = validate(body, PLAYER).unwrap_err();
        assert!(!errors.is_empty());
        assert!(errors.iter().any(|e| e.contains("role")), "got: {errors:?}");
    }

    #[test]
    fn non_positive_id_violates_player_schema() {
        let body = r#"{
            "id": 0, "login": "u1", "role": "user",
            "age": 30, "gender": "MALE", "screenName": "S1"
        }"#;
        assert!(validate(body, PLAYER).is_err());
    }

    #[test]
    fn update_schema_rejects_password_presence() {
        let errors = validate(FULL_PLAYER, PLAYER_UPDATE).unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn update_schema_accepts_entity_without_password() {
        let body = r#"{
            "id": 10, "login": "u1", "role": "user",
            "age": 30, "gender": "MALE", "screenName": "S1"
        }"#;
        assert!(validate(body, PLAYER_UPDATE).is_ok());
    }

    #[test]
    fn list_schema_validates_envelope_and_items() {
        let body = r#"{"players":[
            {"id":1,"age":30,"gender":"MALE","role":"supervisor","screenName":"Boss"}
        ]}"#;
        assert!(validate(body, PLAYER_LIST).is_ok());

        let bad = r#"{"players":[{"id":1}]}"#;
        assert!(validate(bad, PLAYER_LIST).is_err());
    }

    #[test]
    fn unparseable_body_is_reported_not_panicked() {
        let errors = validate("not json", PLAYER).unwrap_err();
        assert!(errors[0].contains("not valid JSON"));
    }
}
