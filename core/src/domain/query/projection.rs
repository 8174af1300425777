use serde_json::Value;

/// Reduce a serialized record to the selected fields. The identifier field is
/// always retained so records stay addressable. Non-object values pass
/// through untouched.
pub fn project_fields(value: Value, select: &[String]) -> Value {
    match value {
        Value::Object(map) => {
            let projected = map
                .into_iter()
                .filter(|(key, _)| key == "id" || select.iter().any(|f| f == key))
                .collect();
            Value::Object(projected)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_only_selected_fields_plus_id() {
        let record = json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Devworks",
            "description": "Full stack",
            "phone": "(111) 111-1111",
            "housing": true,
        });
        let select = vec!["name".to_string(), "description".to_string()];
        let projected = project_fields(record, &select);
        let map = projected.as_object().unwrap();
        assert_eq!(map.len(), 3);
        assert!(map.contains_key("id"));
        assert!(map.contains_key("name"));
        assert!(map.contains_key("description"));
    }

    #[test]
    fn unknown_selected_field_is_ignored() {
        let record = json!({"id": 1, "name": "x"});
        let projected = project_fields(record, &["nope".to_string()]);
        let map = projected.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("id"));
    }

    #[test]
    fn non_object_passes_through() {
        let projected = project_fields(json!(42), &["name".to_string()]);
        assert_eq!(projected, json!(42));
    }
}
