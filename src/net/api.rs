//! Typed remote API used by every view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the transport chosen at startup. Each method builds its [`Call`],
//! applies the reply rule and decodes the result, so views deal only in
//! records and [`RemoteError`]s.
//!
//! ERROR HANDLING
//! ==============
//! The reply rule is applied here as well as inside the real transports, so
//! a `{success: false}` envelope rejects whichever transport produced it.
//! Failed calls are logged once at `warn`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use records::{
    AuthUser, Call, DashboardStats, Envelope, Filters, MailType, PingReply, ProfileUpdate, RemoteError,
    Surat, reject_failed_envelope_or, reject_failed_reply,
};
use serde_json::Value;

use super::transport::Transport;

/// Shown when a login is refused without a reason.
pub const LOGIN_FAILED_MESSAGE: &str = "Login gagal. Periksa kembali email dan password Anda.";

/// Handle to the active transport; cheap to clone and provided via context.
#[derive(Clone)]
pub struct RemoteApi {
    transport: Arc<dyn Transport>,
}

impl RemoteApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    async fn invoke(&self, call: Call) -> Result<Value, RemoteError> {
        let function = call.function_name();
        let operation = call.operation;
        let result = self
            .transport
            .call(call)
            .await
            .and_then(|value| reject_failed_reply(operation, value));
        if let Err(err) = &result {
            log::warn!("{function} failed: {err}");
        }
        result
    }

    async fn invoke_as<T: serde::de::DeserializeOwned>(&self, call: Call) -> Result<T, RemoteError> {
        Ok(serde_json::from_value(self.invoke(call).await?)?)
    }

    /// Connectivity probe. `success: false` is returned, not rejected.
    ///
    /// # Errors
    ///
    /// Rejects when the transport fails or the reply carries `error`.
    pub async fn ping(&self) -> Result<PingReply, RemoteError> {
        self.invoke_as(Call::ping()).await
    }

    /// Sign in and return the user.
    ///
    /// # Errors
    ///
    /// Rejects with the backend's reason, or [`LOGIN_FAILED_MESSAGE`].
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, RemoteError> {
        let value = self
            .transport
            .call(Call::login(email, password))
            .await
            .and_then(|value| reject_failed_envelope_or(value, LOGIN_FAILED_MESSAGE))
            .map_err(|err| err.or_backend_message(LOGIN_FAILED_MESSAGE));
        let envelope: Envelope = match value {
            Ok(value) => serde_json::from_value(value)?,
            Err(err) => {
                log::warn!("login failed: {err}");
                return Err(err);
            }
        };
        envelope
            .user
            .ok_or_else(|| RemoteError::Backend(LOGIN_FAILED_MESSAGE.to_owned()))
    }

    /// # Errors
    ///
    /// Rejects when the backend refuses the logout.
    pub async fn logout(&self) -> Result<Envelope, RemoteError> {
        self.invoke_as(Call::logout()).await
    }

    /// The user of the current session, if any.
    ///
    /// # Errors
    ///
    /// Rejects when the check itself fails; "not signed in" is `Ok(None)`.
    pub async fn check_auth(&self) -> Result<Option<AuthUser>, RemoteError> {
        let envelope: Envelope = self.invoke_as(Call::check_auth()).await?;
        Ok(envelope.user.filter(|_| envelope.success))
    }

    /// # Errors
    ///
    /// Rejects on transport failure or an unreadable reply.
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, RemoteError> {
        self.invoke_as(Call::get_dashboard_stats()).await
    }

    /// # Errors
    ///
    /// Rejects on transport failure or when a row does not fit `mail_type`.
    pub async fn list_surat(&self, mail_type: MailType, filters: &Filters) -> Result<Vec<Surat>, RemoteError> {
        let value = self.invoke(Call::list_surat(mail_type, filters)).await?;
        Ok(Surat::list_from_value(mail_type, value)?)
    }

    /// # Errors
    ///
    /// Rejects on transport failure or an unreadable record.
    pub async fn get_surat_by_id(&self, mail_type: MailType, id: &str) -> Result<Surat, RemoteError> {
        let value = self.invoke(Call::get_surat_by_id(mail_type, id)).await?;
        Ok(Surat::from_value(mail_type, value)?)
    }

    /// # Errors
    ///
    /// Rejects when the backend refuses the record.
    pub async fn create_surat(&self, mail_type: MailType, data: Value) -> Result<Envelope, RemoteError> {
        self.invoke_as(Call::create_surat(mail_type, data)).await
    }

    /// # Errors
    ///
    /// Rejects when the backend refuses the update.
    pub async fn update_surat(&self, mail_type: MailType, id: &str, data: Value) -> Result<Envelope, RemoteError> {
        self.invoke_as(Call::update_surat(mail_type, id, data)).await
    }

    /// # Errors
    ///
    /// Rejects when the backend refuses the deletion.
    pub async fn delete_surat(&self, mail_type: MailType, id: &str) -> Result<Envelope, RemoteError> {
        self.invoke_as(Call::delete_surat(mail_type, id)).await
    }

    /// Next outgoing-mail number. Numeric replies are accepted as text.
    ///
    /// # Errors
    ///
    /// Rejects on transport failure or a non-scalar reply.
    pub async fn get_new_nomor_surat(&self) -> Result<String, RemoteError> {
        match self.invoke(Call::get_new_nomor_surat()).await? {
            Value::String(number) => Ok(number),
            Value::Number(number) => Ok(number.to_string()),
            other => Err(RemoteError::Decode(format!("nomor surat tidak dikenali: {other}"))),
        }
    }

    /// # Errors
    ///
    /// Rejects on transport failure or an unreadable profile.
    pub async fn get_user_profile(&self) -> Result<AuthUser, RemoteError> {
        self.invoke_as(Call::get_user_profile()).await
    }

    /// # Errors
    ///
    /// Rejects when the backend refuses the update.
    pub async fn update_user_profile(&self, update: &ProfileUpdate) -> Result<Envelope, RemoteError> {
        self.invoke_as(Call::update_user_profile(update)).await
    }
}
