//! Chat surface channels.
//!
//! A [`Channel`] is the seam between the assistant and whatever delivers
//! user text (console today; a messaging platform would slot in the same
//! way). Channels capture no assistant state: they receive a shared
//! [`Assistant`] handle at spawn time and run until the shutdown token is
//! cancelled or their input source closes.

pub mod console;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::assistant::Assistant;
use crate::error::AppError;

pub trait Channel {
    fn id(&self) -> &str;

    /// Consume the channel and run it to completion.
    fn run(
        self: Box<Self>,
        assistant: Arc<Assistant>,
        shutdown: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 'static>>;
}
