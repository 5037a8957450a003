//! Profile editor draft.

#[cfg(test)]
#[path = "profile_form_test.rs"]
mod profile_form_test;

use records::{AuthUser, ProfileUpdate, UploadedFile, ValidationError};

use super::error::FormError;
use crate::net::api::RemoteApi;

pub const PROFILE_UPDATED_MESSAGE: &str = "Profil berhasil diperbarui!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub nama: String,
    pub jabatan: String,
    pub unit: String,
    /// Image shown next to the form: the stored photo or a new pick.
    pub photo_preview: Option<String>,
    /// Newly picked photo, sent with the update.
    pub photo_file: Option<UploadedFile>,
}

impl ProfileForm {
    #[must_use]
    pub fn from_user(user: &AuthUser) -> Self {
        Self {
            nama: user.nama.clone(),
            jabatan: user.jabatan.clone(),
            unit: user.unit.clone(),
            photo_preview: user.foto_url.clone(),
            photo_file: None,
        }
    }

    /// Use a newly picked image; `data_url` becomes the preview.
    pub fn set_photo(&mut self, file_name: &str, mime_type: &str, data_url: &str) {
        self.photo_file = UploadedFile::from_data_url(file_name, mime_type, data_url);
        if self.photo_file.is_some() {
            self.photo_preview = Some(data_url.to_owned());
        }
    }

    /// # Errors
    ///
    /// [`ValidationError::MissingName`] when the name is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.nama.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(())
    }

    #[must_use]
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            nama: self.nama.clone(),
            jabatan: self.jabatan.clone(),
            unit: self.unit.clone(),
            foto_url: None,
            photo_file: self.photo_file.clone(),
        }
    }

    /// The stored user after a successful update. A new photo's preview
    /// stands in for its URL until the next profile fetch.
    #[must_use]
    pub fn apply_to(&self, user: &AuthUser) -> AuthUser {
        let foto_url = match (&self.photo_file, &self.photo_preview) {
            (Some(_), Some(preview)) => Some(preview.clone()),
            _ => user.foto_url.clone(),
        };
        AuthUser {
            nama: self.nama.clone(),
            jabatan: self.jabatan.clone(),
            unit: self.unit.clone(),
            foto_url,
            ..user.clone()
        }
    }

    /// Reload from `latest` unless the form was edited since it was built
    /// from `shown`.
    pub fn refresh_from(&mut self, shown: &AuthUser, latest: &AuthUser) {
        if *self == Self::from_user(shown) {
            *self = Self::from_user(latest);
        }
    }

    /// Validate, send one `updateUserProfile`, and return the merged user.
    ///
    /// # Errors
    ///
    /// [`FormError::Invalid`] without a remote call, or
    /// [`FormError::Remote`] when the backend refuses.
    pub async fn submit(&self, api: &RemoteApi, user: &AuthUser) -> Result<AuthUser, FormError> {
        self.validate()?;
        api.update_user_profile(&self.to_update()).await?;
        Ok(self.apply_to(user))
    }
}

/// Fetch the backend's copy of the signed-in profile. `None` when it cannot
/// be loaded, so the session copy stays in use.
pub async fn fetch_latest(api: &RemoteApi) -> Option<AuthUser> {
    match api.get_user_profile().await {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("profile refresh skipped: {err}");
            None
        }
    }
}
