use std::io;

use error_map::prelude_async::*;

fn transformer() -> ErrorTransformer {
    let map = ErrorMapBuilder::new(ErrorValue::internal("INTERNAL_ERROR"))
        .instance_of::<io::Error>()
        .throw_error_instance(ErrorValue::external_service("UPSTREAM_IO", "files"));
    ErrorTransformer::new(map, "files")
}

#[tokio::test]
async fn transform_err_passes_success_through() {
    let result = async { Ok::<_, io::Error>(3) }.transform_err(&transformer(), ()).await;

    assert_eq!(result.unwrap(), 3);
}

#[tokio::test]
async fn transform_err_reclassifies_errors() {
    let result = async { Err::<(), _>(io::Error::other("reset")) }
        .transform_err(&transformer(), context! { "op" => "read" })
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.status_code(), 502);
    let value = err.as_error_value().unwrap();
    assert_eq!(value.external_service_name(), Some("files"));
    assert_eq!(value.context().get_str("op"), Some("read"));
}

#[tokio::test]
async fn transform_err_accepts_lazy_context() {
    let result = async { Err::<(), _>(io::Error::other("reset")) }
        .transform_err(&transformer(), lazy_context! { "computed" => 1 + 1 })
        .await;

    assert_eq!(result.unwrap_err().as_error_value().unwrap().context().get("computed"), Some(&serde_json::json!(2)));
}
