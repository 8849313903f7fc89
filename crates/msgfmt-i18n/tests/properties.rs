//! Property tests for named-argument rewriting.

use msgfmt_i18n::{
    format_message, replace_named_arguments, rewrite_with_report, ArgValue, ArgumentSet, Locale,
    PositionIndex, PositionalEngine,
};
use proptest::prelude::*;

/// Argument names, including words that double as branch keywords.
const NAMES: &[&str] = &["a", "b", "count", "who", "one", "other", "items"];

const NUMBER_STYLES: &[&str] = &["integer", "percent"];

#[derive(Debug, Clone)]
enum Part {
    Text(String),
    Simple(&'static str),
    /// `{name, number}` with an optional style.
    Number(&'static str, Option<&'static str>),
    /// A brace group that is not an argument, e.g. `{ab-cd}`.
    Literal(String),
    Plural(&'static str, Vec<Part>, Vec<Part>),
    /// `offset:1` plural with an `=0` branch.
    ExactPlural(&'static str, Vec<Part>, Vec<Part>),
    SelectOrdinal(&'static str, Vec<Part>, Vec<Part>),
    Select(&'static str, Vec<Part>, Vec<Part>),
}

fn render(parts: &[Part]) -> String {
    parts
        .iter()
        .map(|part| match part {
            Part::Text(text) => text.clone(),
            Part::Simple(name) => format!("{{{name}}}"),
            Part::Number(name, None) => format!("{{{name}, number}}"),
            Part::Number(name, Some(style)) => format!("{{{name}, number, {style}}}"),
            Part::Literal(text) => format!("{{{text}}}"),
            Part::Plural(name, one, other) => format!(
                "{{{name}, plural, one{{{}}} other{{{}}}}}",
                render(one),
                render(other)
            ),
            Part::ExactPlural(name, zero, other) => format!(
                "{{{name}, plural, offset:1 =0{{{}}} other{{{}}}}}",
                render(zero),
                render(other)
            ),
            Part::SelectOrdinal(name, one, other) => format!(
                "{{{name}, selectordinal, one{{{}}} other{{{}}}}}",
                render(one),
                render(other)
            ),
            Part::Select(name, one, other) => format!(
                "{{{name}, select, 1{{{}}} other{{{}}}}}",
                render(one),
                render(other)
            ),
        })
        .collect()
}

fn name() -> impl Strategy<Value = &'static str> + Clone {
    prop::sample::select(NAMES)
}

fn leaf() -> BoxedStrategy<Part> {
    prop_oneof![
        "[a-z .]{1,8}".prop_map(Part::Text),
        name().prop_map(Part::Simple),
        (name(), prop::option::of(prop::sample::select(NUMBER_STYLES)))
            .prop_map(|(n, style)| Part::Number(n, style)),
    ]
    .boxed()
}

fn nested(leaf: BoxedStrategy<Part>) -> impl Strategy<Value = Vec<Part>> {
    let part = leaf.prop_recursive(3, 24, 4, |inner| {
        let branch = prop::collection::vec(inner, 0..4);
        let choice = (name(), branch.clone(), branch);
        prop_oneof![
            choice.clone().prop_map(|(n, one, other)| Part::Plural(n, one, other)),
            choice.clone().prop_map(|(n, zero, other)| Part::ExactPlural(n, zero, other)),
            choice.clone().prop_map(|(n, one, other)| Part::SelectOrdinal(n, one, other)),
            choice.prop_map(|(n, one, other)| Part::Select(n, one, other)),
        ]
    });
    prop::collection::vec(part, 0..6)
}

/// Well-formed messages every engine accepts.
fn message() -> impl Strategy<Value = Vec<Part>> {
    nested(leaf())
}

/// Messages that also carry free-text brace groups, at any depth.
fn message_with_literals() -> impl Strategy<Value = Vec<Part>> {
    let literal = "[a-z]{1,4}-[a-z]{1,4}".prop_map(Part::Literal);
    nested(prop_oneof![leaf(), literal].boxed())
}

/// Every name in [`NAMES`], in random order, with small integer values.
fn all_arguments() -> impl Strategy<Value = ArgumentSet> {
    (
        Just(NAMES.to_vec()).prop_shuffle(),
        prop::collection::vec(0i64..12, NAMES.len()),
    )
        .prop_map(|(names, values)| names.into_iter().zip(values).collect())
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,5}"
}

proptest! {
    #[test]
    fn test_unknown_names_pass_through(names in prop::collection::vec(identifier(), 0..6)) {
        let pattern: String = names.iter().map(|n| format!("{{{n}}} and ")).collect();
        let args = ArgumentSet::new().with("ARG0", 1).with("ARG1", "x");
        prop_assert_eq!(replace_named_arguments(&pattern, &args), pattern);
    }

    #[test]
    fn test_known_names_get_their_position(
        names in prop::collection::hash_set(identifier(), 1..6),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let args: ArgumentSet = names.iter().map(|n| (n.clone(), ArgValue::Int(0))).collect();

        let pattern: String = names.iter().map(|n| format!("[{{ {n} }}]")).collect();
        let expected: String = (0..names.len()).map(|i| format!("[{{ {i} }}]")).collect();
        prop_assert_eq!(replace_named_arguments(&pattern, &args), expected);
    }

    #[test]
    fn test_brace_counts_preserved(pattern in "[{}a-z ,#0-9]{0,40}", args in all_arguments()) {
        let out = replace_named_arguments(&pattern, &args);
        prop_assert_eq!(out.matches('{').count(), pattern.matches('{').count());
        prop_assert_eq!(out.matches('}').count(), pattern.matches('}').count());
    }

    #[test]
    fn test_text_without_braces_is_identity(pattern in "[^{]{0,40}", args in all_arguments()) {
        prop_assert_eq!(replace_named_arguments(&pattern, &args), pattern);
    }

    #[test]
    fn test_balanced_patterns_stay_balanced(
        parts in message_with_literals(),
        args in all_arguments(),
    ) {
        let pattern = render(&parts);
        let out = rewrite_with_report(&pattern, &PositionIndex::from_arguments(&args));

        prop_assert_eq!(out.unclosed, 0, "unclosed frames for {}", pattern);
        prop_assert_eq!(out.stray_closers, 0, "stray closers for {}", pattern);
        prop_assert!(out.unresolved.is_empty(), "unresolved {:?} in {}", out.unresolved, pattern);
    }

    #[test]
    fn test_rewrite_matches_native_named(parts in message(), args in all_arguments()) {
        let pattern = render(&parts);
        let locale = Locale::default();
        let native_engine = PositionalEngine::with_named_arguments();

        let rewritten = format_message(&PositionalEngine::new(), &locale, &pattern, &args, true);
        let native = format_message(&native_engine, &locale, &pattern, &args, false);

        prop_assert!(rewritten.is_ok(), "rewritten failed for {}: {:?}", pattern, rewritten);
        prop_assert_eq!(rewritten.ok(), native.ok());
    }
}
