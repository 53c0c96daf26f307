//! Property tests for stack output and distribution lookups.

use proptest::prelude::*;

use webdeploy::domain::entities::{Distribution, StackOutput};
use webdeploy::domain::services::{find_distribution, find_output};

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{1,6}").unwrap()
}

fn outputs() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec((key(), "[a-z0-9-]{0,12}"), 0..12)
}

fn domains() -> impl Strategy<Value = Vec<(String, String)>> {
    let domain = proptest::string::string_regex("d[0-9]{1,2}\\.cloudfront\\.net").unwrap();
    proptest::collection::vec(("E[0-9A-Z]{4}", domain), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: lookup returns the value of the first entry with the key, or nothing.
    #[test]
    fn property_find_output_returns_first_match(pairs in outputs(), wanted in key()) {
        let outputs: Vec<StackOutput> = pairs
            .iter()
            .map(|(k, v)| StackOutput::new(k.clone(), v.clone()))
            .collect();

        let expected = pairs.iter().find(|(k, _)| *k == wanted).map(|(_, v)| v.as_str());
        let found = find_output(&outputs, &wanted).map(StackOutput::value);

        prop_assert_eq!(found, expected);
    }

    /// PROPERTY: the selected distribution is the first one serving the domain.
    #[test]
    fn property_find_distribution_returns_first_match(
        entries in domains(),
        wanted in proptest::string::string_regex("d[0-9]{1,2}\\.cloudfront\\.net").unwrap()
    ) {
        let distributions: Vec<Distribution> = entries
            .iter()
            .map(|(id, domain)| Distribution::new(id.clone(), domain.clone()))
            .collect();

        let expected = entries.iter().position(|(_, d)| *d == wanted);
        let found = find_distribution(&distributions, &wanted);

        match expected {
            Some(index) => {
                let found = found.expect("a matching distribution exists");
                prop_assert_eq!(found.id(), entries[index].0.as_str());
                prop_assert_eq!(found.domain_name(), wanted.as_str());
            }
            None => prop_assert!(found.is_none()),
        }
    }
}
