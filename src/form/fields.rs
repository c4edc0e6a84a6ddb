//! The fixed set of fields the registration form requires

/// A required field: its form name and the label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
}

pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const CLASS: &str = "class";
pub const SECTION: &str = "section";
pub const SCHOOL: &str = "school";
pub const CITY: &str = "city";
pub const SCHOOL_ADDRESS: &str = "schoolAddress";
pub const CATEGORY: &str = "category";
pub const REMARKS: &str = "remarks";
pub const STUDENT_PHOTO: &str = "studentPhoto";
pub const SUPPORTING_DOCUMENTS: &str = "supportingDocuments";

/// Every field the form requires, in the order they appear on the page
pub const REQUIRED_FIELDS: [FieldSpec; 11] = [
    FieldSpec { name: FULL_NAME, label: "Full Name" },
    FieldSpec { name: EMAIL, label: "Email ID" },
    FieldSpec { name: CLASS, label: "Class" },
    FieldSpec { name: SECTION, label: "Section" },
    FieldSpec { name: SCHOOL, label: "School" },
    FieldSpec { name: CITY, label: "City" },
    FieldSpec { name: SCHOOL_ADDRESS, label: "School Address" },
    FieldSpec { name: CATEGORY, label: "Category" },
    FieldSpec { name: REMARKS, label: "Remarks" },
    FieldSpec { name: STUDENT_PHOTO, label: "Student Photograph" },
    FieldSpec { name: SUPPORTING_DOCUMENTS, label: "Supporting Documents" },
];
