//! Property-based tests for path manipulation.
//!
//! The normalize module carries its own idempotence checks; this module
//! covers the cross-cutting properties of join, resolve, parse and format.

use super::{
    basename, dirname, extname, format, is_absolute, join, normalize, parse, resolve, Location,
    PathParts, WebPath,
};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn file_strategy() -> impl Strategy<Value = String> {
    (name_strategy(), prop::option::of("[a-z]{1,4}")).prop_map(|(name, ext)| match ext {
        Some(ext) => format!("{name}.{ext}"),
        None => name,
    })
}

/// Clean relative or absolute paths: no dots, no doubled or trailing slash.
fn clean_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(name_strategy(), 0..5),
        file_strategy(),
    )
        .prop_map(|(absolute, dirs, file)| {
            let mut parts = dirs;
            parts.push(file);
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else if parts.len() == 1 {
                format!("./{joined}")
            } else {
                joined
            }
        })
}

fn messy_segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
        name_strategy(),
    ]
}

fn messy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(messy_segment_strategy(), 0..8).prop_map(|parts| parts.join("/"))
}

fn location_strategy() -> impl Strategy<Value = Location> {
    prop::collection::vec(name_strategy(), 0..4)
        .prop_map(|parts| Location::new(format!("/{}", parts.join("/"))))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn join_single_is_normalize(p in messy_path_strategy()) {
        let loc = Location::default();
        prop_assert_eq!(join(&[p.as_str()], &loc), normalize(&p, &loc));
    }

    #[test]
    fn resolve_always_absolute(
        args in prop::collection::vec(messy_path_strategy(), 0..5),
        loc in location_strategy(),
    ) {
        let resolved = resolve(&args, &loc);
        prop_assert!(resolved.starts_with('/'));
        prop_assert!(!resolved.starts_with("//"));
        prop_assert!(is_absolute(&resolved, &loc));
    }

    #[test]
    fn resolve_never_contains_dot_segments(
        args in prop::collection::vec(messy_path_strategy(), 0..5),
        loc in location_strategy(),
    ) {
        let resolved = resolve(&args, &loc);
        for segment in resolved.split('/').skip(1) {
            prop_assert_ne!(segment, ".");
            prop_assert_ne!(segment, "..");
        }
    }

    #[test]
    fn format_parse_round_trip(p in clean_path_strategy()) {
        let loc = Location::default();
        let parts = PathParts::from(parse(&p, &loc));
        prop_assert_eq!(format(&parts), p);
    }

    #[test]
    fn parse_parts_agree(p in clean_path_strategy()) {
        let loc = Location::default();
        let parsed = parse(&p, &loc);
        prop_assert_eq!(&parsed.dir, &dirname(&p, &loc));
        prop_assert_eq!(&parsed.base, &basename(&p, None));
        prop_assert_eq!(&parsed.ext, &extname(&p));
        prop_assert_eq!(format!("{}{}", parsed.name, parsed.ext), parsed.base);
    }

    #[test]
    fn value_wrapper_matches_free_functions(p in messy_path_strategy()) {
        let loc = Location::new("/base");
        let path = WebPath::new(p.clone());
        prop_assert_eq!(path.normalize(&loc).as_str(), normalize(&p, &loc));
        prop_assert_eq!(path.dirname(&loc).as_str(), dirname(&p, &loc));
        prop_assert_eq!(path.resolve::<&str>(&[], &loc).as_str(), resolve(&[p.as_str()], &loc));
    }

    #[test]
    fn normalize_forward_slashes_only(p in messy_path_strategy()) {
        let with_backslashes = p.replace('/', "\\");
        let normalized = normalize(&with_backslashes, &Location::default());
        prop_assert!(!normalized.contains('\\'));
    }
}
