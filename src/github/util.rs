//! GitHub API utilities

use crate::runtime::AsyncTask;
use std::future::Future;

/// Spawn an async task for GitHub API operations.
///
/// Thin wrapper around `AsyncTask::spawn_async` so every operation module
/// launches its request the same way.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Percent-encode a single path segment (user logins, team slugs).
#[inline]
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
