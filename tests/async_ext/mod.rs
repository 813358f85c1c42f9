pub mod transform_future;
pub mod with_async_transform;
