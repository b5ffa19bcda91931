use async_trait::async_trait;
use std::sync::Arc;

use oppidum_types::errors::ApplicationError;

use crate::{config::Config, repository::Repositories};

/// A marker trait for Command structs.
/// Commands are operations that change the state of the system.
pub trait Command: Send + Sync {}

/// A trait for handlers that execute Commands.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        repos: &Repositories,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError>;
}
