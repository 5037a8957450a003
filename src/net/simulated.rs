//! In-browser stand-in for the backend, used when no host bridge exists.
//!
//! Replies are canned and deterministic so the UI can be exercised without
//! deployment. The single development account is `admin@example.com` /
//! `admin123`.

#[cfg(test)]
#[path = "simulated_test.rs"]
mod simulated_test;

use std::time::Duration;

use async_trait::async_trait;
use records::{Call, Operation, RemoteError};
use serde_json::{Value, json};

use super::transport::Transport;
use crate::util::timer;

pub const DEMO_EMAIL: &str = "admin@example.com";
pub const DEMO_PASSWORD: &str = "admin123";

/// Placeholder number handed out by `getNewNomorSurat`.
pub const PLACEHOLDER_NOMOR_SURAT: &str = "001/SK/SIMULASI";

const SOURCE: &str = "Simulasi lokal (google.script.run tidak tersedia)";

/// [`Transport`] answering from canned data after an artificial delay.
#[derive(Clone, Debug)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// The canned reply for `call`, without the delay.
    #[must_use]
    pub fn respond(call: &Call) -> Value {
        match call.operation {
            Operation::Ping => json!({ "success": true, "source": SOURCE }),
            Operation::Login => {
                if call.str_arg(0) == Some(DEMO_EMAIL) && call.str_arg(1) == Some(DEMO_PASSWORD) {
                    json!({ "success": true, "user": demo_user() })
                } else {
                    json!({ "success": false, "message": "Email atau password salah." })
                }
            }
            Operation::CheckAuth => json!({ "success": true, "user": demo_user() }),
            Operation::Logout => json!({ "success": true }),
            Operation::GetUserProfile => demo_user(),
            Operation::GetDashboardStats => json!({
                "totalMasuk": 10,
                "totalKeluar": 5,
                "masukBulanIni": 2,
                "keluarBulanIni": 1,
                "belumDisposisi": 3,
            }),
            Operation::ListSurat => json!([]),
            Operation::GetSuratById => json!({
                "ID": call.str_arg(1).unwrap_or_default(),
                "Perihal": "Data simulasi",
            }),
            Operation::GetNewNomorSurat => json!(PLACEHOLDER_NOMOR_SURAT),
            Operation::CreateSurat
            | Operation::UpdateSurat
            | Operation::DeleteSurat
            | Operation::UpdateUserProfile => json!({ "success": true, "message": "Mocked success" }),
        }
    }
}

#[async_trait(?Send)]
impl Transport for SimulatedTransport {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn call(&self, call: Call) -> Result<Value, RemoteError> {
        log::debug!("simulating {}", call.function_name());
        timer::sleep(self.latency).await;
        Ok(Self::respond(&call))
    }
}

fn demo_user() -> Value {
    json!({
        "ID": "1",
        "Email": DEMO_EMAIL,
        "Nama": "Admin Alfy",
        "Jabatan": "Developer",
        "Unit": "IT",
        "Foto URL": "",
    })
}
