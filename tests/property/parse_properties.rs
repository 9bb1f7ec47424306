use callsite_migrations::migration::{parse_migration_info, MigrationError};
use proptest::prelude::*;

// Words may be empty (from `__`) but never contain separators, dots or `_`.
const WORD: &str = "[a-z0-9]{0,8}";
const ID: &str = "[a-zA-Z0-9]{1,16}";

proptest! {
    #[test]
    fn description_round_trips_to_base_name(
        id in ID,
        words in prop::collection::vec(WORD, 1..6),
        ext in "[a-z]{1,4}",
    ) {
        let base = format!("{}_{}", id, words.join("_"));
        let info = parse_migration_info(&format!("{base}.{ext}")).unwrap();

        prop_assert_eq!(&info.id, &id);
        prop_assert_eq!(&info.description, &words.join(" "));
        let rebuilt = format!("{}_{}", info.id, info.description.split(' ').collect::<Vec<_>>().join("_"));
        prop_assert_eq!(rebuilt, base);
    }

    #[test]
    fn no_underscore_is_missing_description(id in ID, ext in "[a-z]{1,4}") {
        match parse_migration_info(&format!("{id}.{ext}")) {
            Err(MigrationError::MissingDescription { identifier, .. }) => {
                prop_assert_eq!(identifier, id);
            }
            other => {
                prop_assert!(false, "expected MissingDescription, got {:?}", other);
            }
        }
    }

    #[test]
    fn directory_and_extension_do_not_matter(
        id in ID,
        words in prop::collection::vec("[a-z]{1,8}", 1..4),
        dirs in prop::collection::vec("[a-z.]{1,6}", 0..4),
        ext_a in "[a-z]{1,4}",
        ext_b in "[a-z]{1,4}",
    ) {
        let base = format!("{}_{}", id, words.join("_"));
        let nested = format!("/{}/{base}.{ext_a}", dirs.join("/"));
        let bare = format!("{base}.{ext_b}");

        let nested = parse_migration_info(&nested).unwrap();
        let bare = parse_migration_info(&bare).unwrap();
        prop_assert_eq!(nested, bare);
    }

    #[test]
    fn parsing_is_deterministic(file in ".{0,40}") {
        let first = parse_migration_info(&file).map_err(|e| e.to_string());
        let second = parse_migration_info(&file).map_err(|e| e.to_string());
        prop_assert_eq!(first, second);
    }
}
