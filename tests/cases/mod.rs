// Elements starting with `!` are rejected by the visitors below.
pub fn reject_marked(item: &str) -> Result<(), String> {
    match item.strip_prefix('!') {
        Some(rest) => Err(format!("marked element {rest}")),
        None => Ok(()),
    }
}

// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] count, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_count() {
            let result = tally::try_count(input(), tally::Noop);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] visits, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_visits() {
            let mut seen: Vec<&str> = Vec::new();
            let n = tally::count(input(), |item| seen.push(*item));
            assert_eq!(n, seen.len(), "count must equal the number of visits");
            let result: Result<Vec<&str>, ()> = Ok(seen);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] fail_fast, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_fail_fast() {
            let mut seen: Vec<&str> = Vec::new();
            let result = tally::try_count(input(), |item: &&'static str| {
                seen.push(*item);
                $crate::cases::reject_marked(item)
            });
            let result = result.map(|_| seen);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] abort, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_abort() {
            let traversal = tally::Traversal::default();
            let result = traversal.run(input(), |item: &&'static str| $crate::cases::reject_marked(item));
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] skip, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_skip() {
            let traversal = tally::Traversal::new(tally::TraversalOptions {
                on_failure: tally::FailurePolicy::Skip,
                ..Default::default()
            });
            let result = traversal.run(input(), |item: &&'static str| $crate::cases::reject_marked(item));
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;
            use once_cell::sync::OnceCell;

            // Make `$input` available to all test functions
            fn input() -> &'static [&'static str] {
                static INPUT_CELL: OnceCell<Vec<&'static str>> = OnceCell::new();
                INPUT_CELL.get_or_init(|| $input)
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
