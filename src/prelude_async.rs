//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! future extension and its future type.
//!
//! ```ignore
//! use error_map::prelude_async::*;
//!
//! async fn fetch_user(transformer: &ErrorTransformer, id: u64) -> TransformResult<User> {
//!     fetch_from_db(id).transform_err(transformer, context! { "userId" => id }).await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{FutureTransformExt, TransformFuture};
