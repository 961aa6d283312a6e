use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Candidate details submitted through the resume builder form.
///
/// Missing fields deserialize as empty strings; only `name` and `email` are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRecord {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub address: String,
    pub education: String,
    pub skills: String,
    pub projects: String,
    pub experience: String,
    pub achievements: String,
}

impl FormRecord {
    /// Field names in form order, paired with their values.
    pub fn fields(&self) -> [(&'static str, &str); 11] {
        [
            ("name", self.name.as_str()),
            ("contact", self.contact.as_str()),
            ("email", self.email.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("github", self.github.as_str()),
            ("address", self.address.as_str()),
            ("education", self.education.as_str()),
            ("skills", self.skills.as_str()),
            ("projects", self.projects.as_str()),
            ("experience", self.experience.as_str()),
            ("achievements", self.achievements.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(AppError::Validation(
                "Name and Email are required fields.".to_string(),
            ));
        }
        Ok(())
    }
}
