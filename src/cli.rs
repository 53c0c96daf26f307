use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// webdeploy - deploy a static web app to S3 behind CloudFront
#[derive(Parser, Debug)]
#[command(name = "webdeploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Bucket and domain are read from the outputs of the <service>-<stage> CloudFormation stack.")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (default: ./webdeploy.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Deployment stage (overrides provider.stage)
    #[arg(short, long, global = true)]
    pub stage: Option<String>,

    /// AWS region (overrides provider.region)
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// AWS credential profile (overrides provider.profile)
    #[arg(long, alias = "aws-profile", global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Deploys the local app directory to your bucket
    #[command(name = "syncToS3", alias = "sync-to-s3")]
    SyncToS3,

    /// Fetches and prints out the deployed bucket name
    #[command(name = "bucketInfo", alias = "bucket-info")]
    BucketInfo,

    /// Fetches and prints out the deployed CloudFront domain name
    #[command(name = "domainInfo", alias = "domain-info")]
    DomainInfo,

    /// Invalidates the CloudFront cache
    #[command(name = "invalidateCloudFrontCache", alias = "invalidate-cache")]
    InvalidateCloudFrontCache,
}

impl Commands {
    /// Name of the command as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::SyncToS3 => "syncToS3",
            Commands::BucketInfo => "bucketInfo",
            Commands::DomainInfo => "domainInfo",
            Commands::InvalidateCloudFrontCache => "invalidateCloudFrontCache",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_plugin_command_names() {
        let cli = Cli::try_parse_from(["webdeploy", "invalidateCloudFrontCache"]).unwrap();
        assert_eq!(cli.command, Commands::InvalidateCloudFrontCache);

        let cli = Cli::try_parse_from(["webdeploy", "syncToS3"]).unwrap();
        assert_eq!(cli.command, Commands::SyncToS3);
    }

    #[test]
    fn parses_kebab_case_aliases() {
        let cli = Cli::try_parse_from(["webdeploy", "bucket-info"]).unwrap();
        assert_eq!(cli.command, Commands::BucketInfo);

        let cli = Cli::try_parse_from(["webdeploy", "invalidate-cache"]).unwrap();
        assert_eq!(cli.command, Commands::InvalidateCloudFrontCache);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "webdeploy",
            "domainInfo",
            "--stage",
            "prod",
            "-r",
            "eu-west-1",
            "--aws-profile",
            "ci",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.command, Commands::DomainInfo);
        assert_eq!(cli.stage.as_deref(), Some("prod"));
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        assert_eq!(cli.profile.as_deref(), Some("ci"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn command_name_round_trips_through_parser() {
        for command in [
            Commands::SyncToS3,
            Commands::BucketInfo,
            Commands::DomainInfo,
            Commands::InvalidateCloudFrontCache,
        ] {
            let cli = Cli::try_parse_from(["webdeploy", command.name()]).unwrap();
            assert_eq!(cli.command, command);
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["webdeploy"]).is_err());
    }
}
