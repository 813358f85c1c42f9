pub mod map;

#[cfg(feature = "async")]
pub mod async_ext;
