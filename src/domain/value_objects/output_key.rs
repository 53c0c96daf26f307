//! Output key value object - the stack outputs this tool knows how to read
//!
//! - `WebAppBucket`: name of the S3 bucket holding the web app
//! - `WebAppDomain`: domain name of the CloudFront distribution in front of it

/// Well-known CloudFormation output key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKey {
    WebAppBucket,
    WebAppDomain,
}

impl OutputKey {
    /// The `OutputKey` string as declared in the stack template
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKey::WebAppBucket => "WebAppS3BucketOutput",
            OutputKey::WebAppDomain => "WebAppCloudFrontDistributionOutput",
        }
    }
}

impl std::fmt::Display for OutputKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
