//! Runtime module
//!
//! Provides the async task primitive used by every GitHub request.

pub mod async_task;

pub use async_task::AsyncTask;
