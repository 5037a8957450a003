//! Catalogue of backend functions and their positional arguments.
//!
//! Every transport receives a [`Call`]: the backend function name plus an
//! argument list whose order is fixed per operation. Constructors are the
//! only way to build a call, so argument order cannot drift between the
//! bridge, simulated and HTTP paths.

#[cfg(test)]
#[path = "operation_test.rs"]
mod operation_test;

use serde::Serialize;
use serde_json::Value;

use crate::model::{Filters, MailType, ProfileUpdate};

/// A backend function exposed by the scripting host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Ping,
    Login,
    Logout,
    CheckAuth,
    GetDashboardStats,
    ListSurat,
    GetSuratById,
    CreateSurat,
    UpdateSurat,
    DeleteSurat,
    GetNewNomorSurat,
    GetUserProfile,
    UpdateUserProfile,
}

impl Operation {
    /// Function name as registered on the backend.
    #[must_use]
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::CheckAuth => "checkAuth",
            Self::GetDashboardStats => "getDashboardStats",
            Self::ListSurat => "listSurat",
            Self::GetSuratById => "getSuratById",
            Self::CreateSurat => "createSurat",
            Self::UpdateSurat => "updateSurat",
            Self::DeleteSurat => "deleteSurat",
            Self::GetNewNomorSurat => "getNewNomorSurat",
            Self::GetUserProfile => "getUserProfile",
            Self::UpdateUserProfile => "updateUserProfile",
        }
    }

    /// Whether `success: false` in the reply is data rather than a failure.
    ///
    /// Only `ping` answers `{success, source}` where `success: false` is a
    /// probe result. Every other function reports failure that way.
    #[must_use]
    pub const fn reports_status_as_data(self) -> bool {
        matches!(self, Self::Ping)
    }
}

/// One remote invocation: operation plus positional arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub operation: Operation,
    pub args: Vec<Value>,
}

impl Call {
    fn new(operation: Operation, args: Vec<Value>) -> Self {
        Self { operation, args }
    }

    #[must_use]
    pub fn ping() -> Self {
        Self::new(Operation::Ping, Vec::new())
    }

    #[must_use]
    pub fn login(email: &str, password: &str) -> Self {
        Self::new(Operation::Login, vec![Value::from(email), Value::from(password)])
    }

    #[must_use]
    pub fn logout() -> Self {
        Self::new(Operation::Logout, Vec::new())
    }

    #[must_use]
    pub fn check_auth() -> Self {
        Self::new(Operation::CheckAuth, Vec::new())
    }

    #[must_use]
    pub fn get_dashboard_stats() -> Self {
        Self::new(Operation::GetDashboardStats, Vec::new())
    }

    #[must_use]
    pub fn list_surat(mail_type: MailType, filters: &Filters) -> Self {
        Self::new(
            Operation::ListSurat,
            vec![Value::from(mail_type.as_str()), to_value_or_empty(filters)],
        )
    }

    #[must_use]
    pub fn get_surat_by_id(mail_type: MailType, id: &str) -> Self {
        Self::new(
            Operation::GetSuratById,
            vec![Value::from(mail_type.as_str()), Value::from(id)],
        )
    }

    /// `data` is the record payload as produced by the form layer.
    #[must_use]
    pub fn create_surat(mail_type: MailType, data: Value) -> Self {
        Self::new(Operation::CreateSurat, vec![Value::from(mail_type.as_str()), data])
    }

    #[must_use]
    pub fn update_surat(mail_type: MailType, id: &str, data: Value) -> Self {
        Self::new(
            Operation::UpdateSurat,
            vec![Value::from(mail_type.as_str()), Value::from(id), data],
        )
    }

    #[must_use]
    pub fn delete_surat(mail_type: MailType, id: &str) -> Self {
        Self::new(
            Operation::DeleteSurat,
            vec![Value::from(mail_type.as_str()), Value::from(id)],
        )
    }

    #[must_use]
    pub fn get_new_nomor_surat() -> Self {
        Self::new(Operation::GetNewNomorSurat, Vec::new())
    }

    #[must_use]
    pub fn get_user_profile() -> Self {
        Self::new(Operation::GetUserProfile, Vec::new())
    }

    #[must_use]
    pub fn update_user_profile(update: &ProfileUpdate) -> Self {
        Self::new(Operation::UpdateUserProfile, vec![to_value_or_empty(update)])
    }

    #[must_use]
    pub const fn function_name(&self) -> &'static str {
        self.operation.function_name()
    }

    /// String argument at `index`, if present.
    #[must_use]
    pub fn str_arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).and_then(Value::as_str)
    }
}

/// JSON body POSTed by the HTTP transport.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HttpRequestBody<'a> {
    #[serde(rename = "functionName")]
    pub function_name: &'static str,
    pub args: &'a [Value],
}

impl<'a> From<&'a Call> for HttpRequestBody<'a> {
    fn from(call: &'a Call) -> Self {
        Self {
            function_name: call.function_name(),
            args: &call.args,
        }
    }
}

fn to_value_or_empty<T: Serialize>(value: &T) -> Value {
    // Plain derived structs of strings cannot fail to serialize.
    serde_json::to_value(value).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}
