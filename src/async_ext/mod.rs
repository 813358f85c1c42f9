//! Async extensions for error-map.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! error-map = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_map::prelude_async::*;
//!
//! async fn fetch_user(transformer: &ErrorTransformer, id: u64) -> TransformResult<User> {
//!     repository.find(id)
//!         .transform_err(transformer, context! { "layer" => "repository" })
//!         .await
//! }
//! ```

mod future_ext;
mod transform_future;

pub use future_ext::FutureTransformExt;
pub use transform_future::TransformFuture;
