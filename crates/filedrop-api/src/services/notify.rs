//! Notification invoker.
//!
//! Dispatches the email-notification function over HTTP. The invocation is
//! fire-and-forget: a 2xx response means the function *accepted* the
//! request, not that any email was delivered. The call is bounded by the
//! configured cloud timeout so a stalled endpoint cannot hang a request.

use async_trait::async_trait;
use filedrop_core::models::NotifyPayload;
use filedrop_core::AppError;
use std::time::Duration;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Submit the payload for asynchronous execution. `Ok(())` means the
    /// invocation was accepted; any other outcome is an error the caller
    /// treats as non-fatal.
    async fn invoke(&self, payload: &NotifyPayload) -> Result<(), AppError>;
}

/// Invokes the notification function at a fixed HTTP endpoint.
#[derive(Clone)]
pub struct HttpFunctionInvoker {
    client: reqwest::Client,
    endpoint: String,
    function_name: String,
}

impl HttpFunctionInvoker {
    pub fn new(
        endpoint: String,
        function_name: String,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::Internal(format!("Failed to create notification HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint,
            function_name,
        })
    }
}

#[async_trait]
impl Notifier for HttpFunctionInvoker {
    async fn invoke(&self, payload: &NotifyPayload) -> Result<(), AppError> {
        // The function expects its input wrapped in a "body" envelope.
        let envelope = serde_json::json!({
            "function": self.function_name,
            "body": serde_json::to_string(payload)?,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| AppError::Notification(format!("Invoke request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(
                function = %self.function_name,
                file_name = %payload.file_name,
                recipients = payload.emails.len(),
                status = status.as_u16(),
                "Notification invocation accepted"
            );
            Ok(())
        } else {
            tracing::warn!(
                function = %self.function_name,
                file_name = %payload.file_name,
                status = status.as_u16(),
                "Notification invocation rejected"
            );
            Err(AppError::Notification(format!(
                "Invoke returned status {}",
                status.as_u16()
            )))
        }
    }
}
