//! Cancellable-operation-with-deadline primitive.
//!
//! Every external call the workflow makes (store, mail) races against its
//! own timer; whichever settles first decides the outcome. On timeout the
//! underlying operation is dropped — it may still complete in the
//! background, and the workflow neither waits for nor confirms it.

use std::future::Future;
use std::time::Duration;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Completed(T),
    TimedOut,
    Failed(E),
}

pub async fn with_deadline<T, E, F>(limit: Duration, operation: F) -> Outcome<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(Ok(value)) => Outcome::Completed(value),
        Ok(Err(error)) => Outcome::Failed(error),
        Err(_) => Outcome::TimedOut,
    }
}
