//! Stack output entity

/// A named value exposed by a deployed CloudFormation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    key: String,
    value: String,
}

impl StackOutput {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}
