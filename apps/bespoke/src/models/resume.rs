use serde::{Deserialize, Serialize};

/// One named slice of a resume: the canonical section name, the raw
/// content lines, and any bullet lines found inside the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSection {
    pub name: String,
    pub content: String,
    pub bullet_points: Vec<String>,
}

/// Contact details pulled from the resume text. Every field is optional;
/// a resume with none of them is still a valid resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.linkedin.is_none()
            && self.website.is_none()
    }
}

/// A resume split into ordered sections plus extracted contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub raw_text: String,
    pub sections: Vec<ResumeSection>,
    pub contact: ContactInfo,
}
