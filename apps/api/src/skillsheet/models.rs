use serde::{Deserialize, Serialize};

/// Basic profile fields as `(label, value)` pairs in template order.
/// Empty fields are never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub fields: Vec<(String, String)>,
}

impl BasicInfo {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
impl BasicInfo {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v.as_str())
    }
}

/// One row of the project history table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<String>,
    pub period: Option<String>,
    pub summary: Option<String>,
    pub role: Option<String>,
    pub server_os: Option<String>,
    pub database: Option<String>,
    pub tools: Option<String>,
    pub language: Option<String>,
    /// Marked phase names, in vocabulary order.
    pub phases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSheet {
    pub basic_info: BasicInfo,
    pub self_pr: String,
    pub certifications: Vec<String>,
    pub projects: Vec<Project>,
}

impl SkillSheet {
    pub fn is_empty(&self) -> bool {
        self.basic_info.is_empty()
            && self.self_pr.is_empty()
            && self.certifications.is_empty()
            && self.projects.is_empty()
    }
}
