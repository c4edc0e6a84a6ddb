//! Typed record of a student registration, as the form submits it

use serde::{Deserialize, Serialize};

use super::fields::*;
use super::snapshot::{FileRef, StaticSnapshot};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub class: String,
    pub section: String,
    pub school: String,
    pub city: String,
    pub school_address: String,
    pub category: String,
    pub remarks: String,
    pub student_photo: Option<FileRef>,
    pub supporting_documents: String,
}

impl From<Registration> for StaticSnapshot {
    /// Builds the snapshot a browser would produce with no native constraint failures.
    fn from(registration: Registration) -> Self {
        let snapshot = StaticSnapshot::new()
            .with_value(FULL_NAME, registration.full_name)
            .with_value(EMAIL, registration.email)
            .with_value(CLASS, registration.class)
            .with_value(SECTION, registration.section)
            .with_value(SCHOOL, registration.school)
            .with_value(CITY, registration.city)
            .with_value(SCHOOL_ADDRESS, registration.school_address)
            .with_value(CATEGORY, registration.category)
            .with_value(REMARKS, registration.remarks)
            .with_value(SUPPORTING_DOCUMENTS, registration.supporting_documents);

        match registration.student_photo {
            Some(photo) => snapshot.with_value(STUDENT_PHOTO, photo),
            None => snapshot,
        }
    }
}
