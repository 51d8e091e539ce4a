use crate::{
    api::{Profile, ProfileUpdate},
    reconcile::{PendingFile, ProfileImage},
};

/// Lecturer profile as bound to the form controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub contact_number: String,
    pub email: String,
    pub department: String,
    pub image: Option<ProfileImage>,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            first_name: text(&profile.first_name),
            last_name: text(&profile.last_name),
            date_of_birth: text(&profile.date_of_birth),
            gender: text(&profile.gender),
            address: text(&profile.address),
            contact_number: text(&profile.contact_number),
            email: text(&profile.email),
            department: text(&profile.department),
            image: ProfileImage::from_remote(profile.profile_image.as_deref()),
        }
    }

    pub fn pick_image(&mut self, file: PendingFile) {
        self.image = Some(ProfileImage::PendingUpload(file));
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("First and last name are required.".into());
        }
        let dob = self.date_of_birth.trim();
        if !dob.is_empty() && chrono::NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err() {
            return Err("Date of birth must be YYYY-MM-DD.".into());
        }
        Ok(())
    }

    /// Multipart payload. Only a locally picked image is uploaded.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            gender: self.gender.trim().to_string(),
            address: self.address.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            profile_image: self
                .image
                .as_ref()
                .and_then(ProfileImage::pending_upload)
                .cloned(),
        }
    }

    /// Server response laid over the submitted form.
    pub fn merged_with(&self, server: Profile) -> Self {
        fn pick(server: Option<String>, local: &str) -> String {
            server.unwrap_or_else(|| local.to_string())
        }
        Self {
            image: ProfileImage::from_remote(server.profile_image.as_deref())
                .or_else(|| self.image.clone()),
            first_name: pick(server.first_name, &self.first_name),
            last_name: pick(server.last_name, &self.last_name),
            date_of_birth: pick(server.date_of_birth, &self.date_of_birth),
            gender: pick(server.gender, &self.gender),
            address: pick(server.address, &self.address),
            contact_number: pick(server.contact_number, &self.contact_number),
            email: pick(server.email, &self.email),
            department: pick(server.department, &self.department),
        }
    }
}

/// Text inputs of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
    Address,
    ContactNumber,
}

impl ProfileField {
    pub const EDITABLE: [ProfileField; 6] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::DateOfBirth,
        ProfileField::Gender,
        ProfileField::Address,
        ProfileField::ContactNumber,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First name",
            ProfileField::LastName => "Last name",
            ProfileField::DateOfBirth => "Date of birth",
            ProfileField::Gender => "Gender",
            ProfileField::Address => "Address",
            ProfileField::ContactNumber => "Contact number",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            ProfileField::DateOfBirth => "date",
            ProfileField::ContactNumber => "tel",
            _ => "text",
        }
    }

    pub fn get<'a>(&self, form: &'a ProfileForm) -> &'a str {
        match self {
            ProfileField::FirstName => &form.first_name,
            ProfileField::LastName => &form.last_name,
            ProfileField::DateOfBirth => &form.date_of_birth,
            ProfileField::Gender => &form.gender,
            ProfileField::Address => &form.address,
            ProfileField::ContactNumber => &form.contact_number,
        }
    }

    pub fn set(&self, form: &mut ProfileForm, value: String) {
        let slot = match self {
            ProfileField::FirstName => &mut form.first_name,
            ProfileField::LastName => &mut form.last_name,
            ProfileField::DateOfBirth => &mut form.date_of_birth,
            ProfileField::Gender => &mut form.gender,
            ProfileField::Address => &mut form.address,
            ProfileField::ContactNumber => &mut form.contact_number,
        };
        *slot = value;
    }
}
