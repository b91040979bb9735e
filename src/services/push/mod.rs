pub mod bridge;

use async_trait::async_trait;

use crate::models::Notification;

#[async_trait]
pub trait PushProvider: Send + Sync {
    async fn push(&self, notification: &Notification) -> anyhow::Result<()>;
}
