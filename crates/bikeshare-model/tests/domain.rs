//! Property tests for answer domains.

use bikeshare_model::{City, Domain, FilterMenu};
use proptest::prelude::*;

fn random_case(value: &str, mask: &[bool]) -> String {
    value
        .chars()
        .zip(mask.iter().cycle())
        .map(|(ch, upper)| {
            if *upper {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn city_aliases_resolve_in_any_casing(
        index in 0usize..6,
        mask in proptest::collection::vec(any::<bool>(), 1..16),
    ) {
        let aliases = ["chicago", "c", "new york city", "nyc", "washington", "w"];
        let alias = aliases[index];
        let resolved = City::domain().resolve(&random_case(alias, &mask));
        let expected = City::ALL
            .into_iter()
            .find(|city| city.aliases().contains(&alias))
            .map(City::file_name);
        prop_assert_eq!(resolved.as_deref(), expected);
    }

    #[test]
    fn enumeration_accepts_only_members(values in proptest::collection::btree_set(1u32..=12, 1..12), probe in 0u32..20) {
        let domain = Domain::enumeration(values.iter());
        prop_assert_eq!(domain.contains(&probe.to_string()), values.contains(&probe));
    }

    #[test]
    fn gender_aliases_follow_column_presence(has_gender in any::<bool>()) {
        let domain = FilterMenu::new(has_gender).domain();
        prop_assert_eq!(domain.contains("gender"), has_gender);
        prop_assert_eq!(domain.contains("G"), has_gender);
    }
}
