use chrono::{TimeZone, Utc};
use error_map::{context, ErrorCategory, ErrorKind, ErrorValue};
use serde_json::json;

fn sample() -> ErrorValue {
    let mut err = ErrorValue::external_service("PAYMENT_FAILED", "stripe")
        .with_message("card declined")
        .with_trace_id("trace-9")
        .with_upstream_status(402)
        .with_context(context! { "orderId" => 42, "retry" => false });
    err.update_timestamp(Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 15).unwrap());
    err
}

#[test]
fn to_json_uses_camel_case_wire_names() {
    let record = sample().to_json();

    assert_eq!(record["name"], "ExternalServiceError");
    assert_eq!(record["code"], "PAYMENT_FAILED");
    assert_eq!(record["message"], "card declined");
    assert_eq!(record["statusCode"], 402);
    assert_eq!(record["category"], "external_service");
    assert_eq!(record["isOperational"], true);
    assert_eq!(record["traceId"], "trace-9");
    assert_eq!(record["externalService"], "stripe");
    assert_eq!(record["context"], json!({ "orderId": 42, "retry": false }));
    assert!(record["serviceName"].is_string());
    assert!(record["stack"].is_string());
}

#[test]
fn timestamp_serializes_as_iso_8601_with_millis() {
    let record = sample().to_json();

    assert_eq!(record["timestamp"], "2024-05-17T08:30:15.000Z");
}

#[test]
fn round_trip_preserves_every_field() {
    let original = sample();

    let restored = ErrorValue::from_json(original.to_json()).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.kind(), ErrorKind::ExternalService);
    assert_eq!(restored.status_code(), 402);
    assert_eq!(restored.context().get("orderId"), Some(&json!(42)));
}

#[test]
fn round_trip_through_a_string() {
    let original = ErrorValue::not_found("USER_NOT_FOUND").with_message("gone");
    let text = original.to_json().to_string();

    let restored = ErrorValue::from_json_str(&text).unwrap();

    assert_eq!(restored.code(), "USER_NOT_FOUND");
    assert_eq!(restored.message(), "gone");
    assert_eq!(restored.timestamp().timestamp_millis(), original.timestamp().timestamp_millis());
}

#[test]
fn values_are_trusted_as_serialized() {
    let record = json!({
        "name": "NotFoundError",
        "code": "ODD",
        "statusCode": 499,
        "category": "internal",
        "isOperational": false,
        "timestamp": "2023-01-01T00:00:00.000Z",
        "serviceName": "billing",
    });

    let err = ErrorValue::from_json(record).unwrap();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.status_code(), 499);
    assert_eq!(err.category(), ErrorCategory::Internal);
    assert_eq!(err.service_name(), "billing");
    assert_eq!(err.message(), "");
    assert!(err.context().is_empty());
    assert!(err.external_service_name().is_none());
}

#[test]
fn absent_external_service_is_omitted() {
    let record = ErrorValue::conflict("DUP").to_json();

    assert!(record.get("externalService").is_none());
}

#[test]
fn malformed_records_are_rejected() {
    assert!(ErrorValue::from_json_str("not json").is_err());
    assert!(ErrorValue::from_json(json!({ "name": "TeapotError", "code": "X" })).is_err());
    assert!(ErrorValue::from_json(json!({
        "name": "InternalError",
        "code": "X",
        "statusCode": 500,
        "category": "internal",
        "isOperational": false,
        "timestamp": "yesterday",
        "serviceName": "svc",
    }))
    .is_err());
}
