//! Form gateway.
//!
//! Validates untrusted input before it reaches the authenticator or the
//! upload coordinator. Each form rejects missing fields, checks email
//! syntax, and (for uploads) bounds the recipient list.

use axum::extract::Multipart;
use filedrop_core::validation::{is_valid_email, parse_recipients};
use filedrop_core::AppError;
use serde::Deserialize;

/// Registration input: all fields required, email syntactically valid,
/// password equal to its confirmation.
#[derive(Debug, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.full_name.trim().is_empty() {
            return Err(AppError::InvalidInput("Full name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::InvalidInput("Email is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(AppError::InvalidInput(format!(
                "Invalid email: {}. Try Again",
                self.email
            )));
        }
        if self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(AppError::InvalidInput("Password is required".to_string()));
        }
        // Checked again by the authenticator; both checks must hold.
        if self.password != self.confirm_password {
            return Err(AppError::InvalidInput(
                "Passwords do not match".to_string(),
            ));
        }
        Ok(())
    }
}

/// Login input: email and password required, email syntactically valid.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() {
            return Err(AppError::InvalidInput("Email is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(AppError::InvalidInput(format!(
                "Invalid email: {}. Try Again",
                self.email
            )));
        }
        if self.password.is_empty() {
            return Err(AppError::InvalidInput("Password is required".to_string()));
        }
        Ok(())
    }
}

/// Upload input: the file part and the raw comma-separated recipient list.
#[derive(Debug)]
pub struct UploadForm {
    pub file_name: String,
    pub content: Vec<u8>,
    pub emails_raw: String,
}

impl UploadForm {
    /// Drain the multipart stream into a validated form.
    ///
    /// The file part must carry a non-empty name and non-empty content; the
    /// emails field must parse to 1-5 well-formed addresses.
    pub async fn from_multipart(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut file: Option<(String, Vec<u8>)> = None;
        let mut emails_raw: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Invalid form data: {}", e)))?
        {
            let field_name = field.name().map(|n| n.to_string());
            match field_name.as_deref() {
                Some("file") => {
                    let name = field.file_name().unwrap_or_default().to_string();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::InvalidInput(format!("Invalid file data: {}", e)))?;
                    file = Some((name, data.to_vec()));
                }
                Some("emails") => {
                    let value = field.text().await.map_err(|e| {
                        AppError::InvalidInput(format!("Invalid emails field: {}", e))
                    })?;
                    emails_raw = Some(value);
                }
                _ => {}
            }
        }

        let (file_name, content) =
            file.ok_or_else(|| AppError::InvalidInput("A file is required".to_string()))?;
        if file_name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "The uploaded file must have a name".to_string(),
            ));
        }
        if content.is_empty() {
            return Err(AppError::InvalidInput(
                "The uploaded file is empty".to_string(),
            ));
        }

        let emails_raw = emails_raw
            .ok_or_else(|| AppError::InvalidInput("Recipient emails are required".to_string()))?;
        // Shape check only; the coordinator re-trims the raw list itself.
        parse_recipients(&emails_raw)?;

        Ok(UploadForm {
            file_name,
            content,
            emails_raw,
        })
    }
}
