use reqwest::multipart::{Form, Part};

use super::{
    client::{read_json, ApiClient},
    types::{ApiError, EventAnnouncement, Profile, StudentRow},
};
use crate::reconcile::PendingFile;

/// Text parts of the profile update form plus the image picked locally, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub contact_number: String,
    pub profile_image: Option<PendingFile>,
}

impl ProfileUpdate {
    fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("firstName", self.first_name)
            .text("lastName", self.last_name)
            .text("dateOfBirth", self.date_of_birth)
            .text("gender", self.gender)
            .text("address", self.address)
            .text("contactNumber", self.contact_number);

        if let Some(file) = self.profile_image {
            let mut part = Part::bytes(file.bytes).file_name(file.name);
            if !file.mime.is_empty() {
                part = part
                    .mime_str(&file.mime)
                    .map_err(|e| ApiError::Request(e.to_string()))?;
            }
            form = form.part("profileImage", part);
        }
        Ok(form)
    }
}

impl ApiClient {
    pub async fn get_lecturer_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/lecturer/profile").await
    }

    pub async fn update_lecturer_profile(&self, update: ProfileUpdate) -> Result<Profile, ApiError> {
        let request = self
            .http_client()
            .put(self.url("/lecturer/profile/update"))
            .multipart(update.into_form()?);
        let response = self.send_authorized(request).await?;
        read_json(response).await
    }

    pub async fn get_events(&self) -> Result<Vec<EventAnnouncement>, ApiError> {
        self.get_json("/events").await
    }

    pub async fn get_lecturer_students(
        &self,
        module: &str,
        batch: &str,
    ) -> Result<Vec<StudentRow>, ApiError> {
        let request = self
            .http_client()
            .get(self.url("/lecturer/students"))
            .query(&[("module", module), ("batch", batch)]);
        let response = self.send_authorized(request).await?;
        read_json(response).await
    }
}
