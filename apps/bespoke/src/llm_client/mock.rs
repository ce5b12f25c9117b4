//! Offline generator for development and tests. Returns a canned job
//! analysis for extraction prompts and a canned resume otherwise.

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Closing line of the extraction prompt, used to tell the two prompt
/// kinds apart. Matching on "job description" would misfire because the
/// tailoring prompt embeds the job description too.
const EXTRACTION_SENTINEL: &str = "Return the JSON analysis";

const MOCK_ANALYSIS: &str = r#"{
    "hard_skills": ["Python", "AWS", "Docker", "PostgreSQL", "REST APIs"],
    "soft_skills": ["Communication", "Leadership", "Problem Solving"],
    "qualifications": ["Bachelor's degree in Computer Science or related field"],
    "experience_required": "5+ years of software development experience",
    "key_responsibilities": [
        "Design and build scalable backend services",
        "Collaborate with product and design teams",
        "Mentor junior engineers"
    ],
    "keywords": ["microservices", "CI/CD", "agile", "cloud infrastructure"],
    "culture_keywords": ["collaborative", "fast-paced"],
    "nice_to_have": ["Kubernetes", "Terraform"],
    "action_verbs": ["designed", "built", "led", "optimized"],
    "company_name": "Mock Corp",
    "job_title": "Senior Software Engineer",
    "location": "Remote"
}"#;

const MOCK_RESUME: &str = "\
# Jane Doe

jane.doe@example.com | 415-555-0100 | linkedin.com/in/jane-doe

## SUMMARY
Senior software engineer with 7 years of experience designing and building \
scalable backend services on AWS. Led cross-functional teams and mentored \
junior engineers in fast-paced, collaborative environments.

## EXPERIENCE
### Senior Software Engineer, Example Inc (2020-present)
- Designed and built Python microservices handling 10M requests per day
- Led migration to Docker and CI/CD pipelines, cutting deploy time by 60%
- Mentored four junior engineers through structured code review

### Software Engineer, Sample Co (2017-2020)
- Built REST APIs backed by PostgreSQL for customer-facing products
- Optimized cloud infrastructure costs by 30% through right-sizing

## SKILLS
Python, AWS, Docker, PostgreSQL, REST APIs, microservices, CI/CD, agile

## EDUCATION
BS in Computer Science, State University
";

pub struct MockGenerator;

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        _system: &str,
        user: &str,
        _temperature: f32,
        _max_tokens: u32,
    ) -> Result<String, LlmError> {
        if user.contains(EXTRACTION_SENTINEL) {
            Ok(MOCK_ANALYSIS.to_string())
        } else {
            Ok(MOCK_RESUME.to_string())
        }
    }
}
