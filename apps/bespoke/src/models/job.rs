use serde::{Deserialize, Serialize};

/// Structured analysis of a job posting, deserialized from the analyzer's
/// JSON output. Built once per job description and never mutated.
///
/// Every list field defaults to empty so a partial response still parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobAnalysis {
    #[serde(default)]
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub experience_required: String,
    #[serde(default)]
    pub key_responsibilities: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub culture_keywords: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
    #[serde(default)]
    pub action_verbs: Vec<String>,
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
}

impl JobAnalysis {
    /// The scoring denominator: hard skills, soft skills, and general
    /// keywords concatenated. Duplicates are kept and counted individually.
    pub fn requirement_items(&self) -> Vec<String> {
        self.hard_skills
            .iter()
            .chain(&self.soft_skills)
            .chain(&self.keywords)
            .cloned()
            .collect()
    }

    /// Every keyword the posting surfaced, across all categories,
    /// deduplicated case-sensitively in first-seen order.
    pub fn all_keywords(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let categories = [
            &self.hard_skills,
            &self.soft_skills,
            &self.keywords,
            &self.culture_keywords,
            &self.nice_to_have,
        ];
        for category in categories {
            for item in category {
                if !out.contains(item) {
                    out.push(item.clone());
                }
            }
        }
        out
    }
}
