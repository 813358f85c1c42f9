use std::time::Duration;

use error_map::{context, ErrorMapBuilder, ErrorTransformer, ErrorValue, RawError};

fn transformer() -> ErrorTransformer {
    let map = ErrorMapBuilder::new(ErrorValue::internal("INTERNAL_ERROR"))
        .equals("X")
        .throw_string("X_CODE")
        .includes(["timeout"])
        .throw_error_instance(ErrorValue::network("UPSTREAM_TIMEOUT"));
    ErrorTransformer::new(map, "gateway")
}

async fn fetch(id: u64) -> Result<String, String> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    match id {
        0 => Err("X".to_owned()),
        1 => Err("read timeout".to_owned()),
        _ => Ok(format!("record-{}", id)),
    }
}

#[tokio::test]
async fn async_wrapper_passes_success_through() {
    let wrapped = transformer().with_async_transform(fetch, ());

    assert_eq!(wrapped(5).await.unwrap(), "record-5");
}

#[tokio::test]
async fn async_wrapper_transforms_rejections() {
    let wrapped = transformer().with_async_transform(|_: ()| async { Err::<(), _>("X") }, ());

    assert_eq!(wrapped(()).await.unwrap_err(), "X_CODE");
}

#[tokio::test]
async fn unmatched_rejection_becomes_fallback() {
    let wrapped = transformer().with_async_transform(|_: ()| async { Err::<(), _>("oops") }, ());

    let err = wrapped(()).await.unwrap_err().into_error_value().unwrap();

    assert_eq!(err.code(), "INTERNAL_ERROR");
    assert_eq!(err.context()["originalError"]["message"], "oops");
}

#[tokio::test]
async fn null_rejection_becomes_fallback() {
    let wrapped = transformer().with_async_transform(|_: ()| async { Err::<(), _>(RawError::Null) }, ());

    assert_eq!(wrapped(()).await.unwrap_err().code(), Some("INTERNAL_ERROR"));
}

#[tokio::test]
async fn async_wrapper_applies_patch() {
    let wrapped = transformer().with_async_transform(fetch, context! { "upstream" => "records" });

    let err = wrapped(1).await.unwrap_err().into_error_value().unwrap();

    assert_eq!(err.code(), "UPSTREAM_TIMEOUT");
    assert_eq!(err.context().get_str("upstream"), Some("records"));
    assert_eq!(err.context().get_str("transformerModuleName"), Some("gateway"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_do_not_share_state() {
    let transformer = transformer();

    let handles: Vec<_> = (0..16u64)
        .map(|i| {
            let transformer = transformer.clone();
            tokio::spawn(async move {
                let wrapped = transformer.with_async_transform(|_: ()| async { fetch(1).await }, context! { "call" => i });
                (i, wrapped(()).await)
            })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.await.unwrap();
        let err = result.unwrap_err().into_error_value().unwrap();
        assert_eq!(err.context().get("call"), Some(&serde_json::json!(i)));
    }
    match &transformer.error_map().rules()[1].output {
        error_map::map::Action::ThrowErrorInstance(template) => assert!(template.context().is_empty()),
        other => panic!("unexpected action {:?}", other),
    }
}
