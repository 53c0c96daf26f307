//! Property tests for `aws` command augmentation.

use proptest::prelude::*;

use webdeploy::domain::value_objects::AwsCommand;

fn flag_value() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::string::string_regex("[a-z0-9-]{0,12}").unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the base command only carries flags for non-empty values, region first.
    #[test]
    fn property_base_command_matches_present_flags(
        region in flag_value(),
        profile in flag_value()
    ) {
        let cmd = AwsCommand::new(region.as_deref(), profile.as_deref(), ["s3", "ls"]);

        let mut expected = "aws".to_string();
        if let Some(r) = region.as_deref().filter(|r| !r.is_empty()) {
            expected.push_str(&format!(" --region {}", r));
        }
        if let Some(p) = profile.as_deref().filter(|p| !p.is_empty()) {
            expected.push_str(&format!(" --profile {}", p));
        }

        prop_assert_eq!(cmd.base_command(), expected);
    }

    /// PROPERTY: operation arguments always end the argv, unchanged and in order.
    #[test]
    fn property_args_are_preserved_after_global_flags(
        region in flag_value(),
        args in proptest::collection::vec("[a-z0-9:/*.-]{1,10}", 0..6)
    ) {
        let cmd = AwsCommand::new(region.as_deref(), None, args.clone());
        let argv = cmd.argv();

        prop_assert!(argv.len() >= args.len());
        prop_assert_eq!(&argv[argv.len() - args.len()..], args.as_slice());
    }
}
