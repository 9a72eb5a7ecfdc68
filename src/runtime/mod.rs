//! Runtime module
//!
//! Provides the async task handle returned by GitHub operations.

pub mod async_task;

pub use async_task::AsyncTask;
