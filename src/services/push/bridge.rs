use anyhow::Context;
use async_trait::async_trait;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::PushProvider;
use crate::models::Notification;

/// Forwards notifications to an external publish/subscribe bridge over
/// HTTP. The bridge fan-outs to device channels; this side only posts.
pub struct BridgePushProvider {
    url: String,
    secret: String,
    client: reqwest::Client,
}

impl BridgePushProvider {
    pub fn new(url: String, secret: String) -> Self {
        Self {
            url,
            secret,
            client: reqwest::Client::new(),
        }
    }
}

// Signature the bridge checks before accepting a publish: URL + raw body,
// HMAC-SHA1 under the shared secret, base64-encoded.
fn sign_payload(secret: &str, url: &str, body: &str) -> anyhow::Result<String> {
    let mut mac = Hmac::<Sha1>::new_from_slice(secret.as_bytes())
        .map_err(|_| anyhow::anyhow!("invalid push bridge secret"))?;
    mac.update(url.as_bytes());
    mac.update(body.as_bytes());
    let result = mac.finalize().into_bytes();
    Ok(base64::engine::general_purpose::STANDARD.encode(result))
}

#[async_trait]
impl PushProvider for BridgePushProvider {
    async fn push(&self, notification: &Notification) -> anyhow::Result<()> {
        if self.url.is_empty() {
            tracing::debug!("push bridge not configured, skipping");
            return Ok(());
        }

        let body = serde_json::to_string(&serde_json::json!({
            "user_id": notification.user_id,
            "event": notification.kind,
            "payload": notification,
        }))?;

        let signature = sign_payload(&self.secret, &self.url, &body)?;

        self.client
            .post(&self.url)
            .header("content-type", "application/json")
            .header("x-wrenchly-signature", signature)
            .body(body)
            .send()
            .await
            .context("failed to reach push bridge")?
            .error_for_status()
            .context("push bridge returned error")?;

        Ok(())
    }
}
