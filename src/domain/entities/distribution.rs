//! CloudFront distribution entity

/// A CDN distribution as reported by the distribution list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    id: String,
    domain_name: String,
}

impl Distribution {
    pub fn new(id: impl Into<String>, domain_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            domain_name: domain_name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }
}
