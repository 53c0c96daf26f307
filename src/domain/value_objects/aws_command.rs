//! AWS CLI command value object
//!
//! Global flags (`--region`, `--profile`) belong to the base command and are
//! kept apart from the operation arguments, so the same operation can be
//! rendered for display or handed to a process spawner as an argv.

/// Executable name of the AWS CLI
pub const AWS_PROGRAM: &str = "aws";

/// An `aws` invocation: program, global flags, operation arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsCommand {
    program: String,
    global_flags: Vec<String>,
    args: Vec<String>,
}

impl AwsCommand {
    /// Build a command for `args`, augmenting the base command with
    /// `--region` and `--profile` when those values are present and non-empty.
    pub fn new<I, S>(region: Option<&str>, profile: Option<&str>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut global_flags = Vec::new();
        if let Some(region) = region.filter(|r| !r.is_empty()) {
            global_flags.push("--region".to_string());
            global_flags.push(region.to_string());
        }
        if let Some(profile) = profile.filter(|p| !p.is_empty()) {
            global_flags.push("--profile".to_string());
            global_flags.push(profile.to_string());
        }

        Self {
            program: AWS_PROGRAM.to_string(),
            global_flags,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Override the executable (e.g. a pinned `aws` path)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program plus global flags, e.g. `aws --region us-east-1 --profile prod`
    pub fn base_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.global_flags.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Everything passed to the program: global flags, then operation args
    pub fn argv(&self) -> Vec<String> {
        self.global_flags
            .iter()
            .chain(self.args.iter())
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for AwsCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base_command())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
