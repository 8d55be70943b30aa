use serde_json::Value;

/// Every successful response carries the three contract fields
pub fn assert_voice_response_shape(body: &Value) {
    assert!(
        body.get("voiceUrl").and_then(|v| v.as_str()).is_some(),
        "Missing voiceUrl field"
    );
    assert!(
        body.get("requestChararacters")
            .and_then(|v| v.as_i64())
            .is_some(),
        "Missing requestChararacters field"
    );
    assert!(
        body.get("taskId").and_then(|v| v.as_str()).is_some(),
        "Missing taskId field"
    );
}

/// Provider failure: nothing published, nothing billed, no task
pub fn assert_empty_voice_response(body: &Value) {
    assert_voice_response_shape(body);
    assert_eq!(body["voiceUrl"], "");
    assert_eq!(body["requestChararacters"], 0);
    assert_eq!(body["taskId"], "");
}
