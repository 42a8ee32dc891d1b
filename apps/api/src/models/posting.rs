use serde::{Deserialize, Serialize};

/// A job listing as submitted by the upload form. Never mutated after submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    // Missing fields decode as empty so `validate` reports them.
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl JobPosting {
    pub fn new(
        job_title: impl Into<String>,
        company: impl Into<String>,
        job_description: impl Into<String>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            job_description: job_description.into(),
            company: company.into(),
            job_url: None,
            location: None,
        }
    }
}
