//! Identifier casing and English inflection.
//!
//! Every identifier an emitter derives (file names, class names, table names,
//! URL segments) goes through these functions so that independently generated
//! targets agree on spelling.
//!
//! Casing functions are total: any input produces a fragment made only of ASCII
//! letters, digits and the case's delimiter, never starting with a digit.
//! Applying the same transform twice yields the same result.

use std::sync::LazyLock;

use convert_case::{Boundary, Case, Casing};
use regex::Regex;
use serde::Serialize;

/// Convert to `snake_case`.
pub fn snake_case(name: &str) -> String {
    convert(name, Case::Snake)
}

/// Convert to `camelCase`.
pub fn camel_case(name: &str) -> String {
    convert(name, Case::Camel)
}

/// Convert to `PascalCase`.
pub fn pascal_case(name: &str) -> String {
    convert(name, Case::Pascal)
}

/// Convert to `kebab-case`.
pub fn kebab_case(name: &str) -> String {
    convert(name, Case::Kebab)
}

fn convert(name: &str, case: Case) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { ' ' })
        .collect();

    let mut converted = join_words(&cleaned, case);
    if matches!(case, Case::Pascal | Case::Camel) {
        // Adjacent one-letter words come out as a capital run ("XY") that
        // reads back as a single word; settle on that reading.
        converted = join_words(&converted, case);
    }

    if converted.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{converted}")
    } else {
        converted
    }
}

fn join_words(name: &str, case: Case) -> String {
    name.remove_boundaries(&Boundary::digits())
        .remove_empty()
        .to_case(case)
}

/// All casing and inflection forms of one name, precomputed for templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameForms {
    pub snake: String,
    pub camel: String,
    pub pascal: String,
    pub kebab: String,
    pub plural: String,
    pub singular: String,
}

impl NameForms {
    pub fn of(name: &str) -> Self {
        Self {
            snake: snake_case(name),
            camel: camel_case(name),
            pascal: pascal_case(name),
            kebab: kebab_case(name),
            plural: pluralize(name),
            singular: singularize(name),
        }
    }
}

// =============================================================================
// Inflection
// =============================================================================

const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "jeans",
    "media",
    "metadata",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "species",
];

/// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("move", "moves"),
    ("person", "people"),
    ("sex", "sexes"),
    ("tooth", "teeth"),
    ("woman", "women"),
    ("zombie", "zombies"),
];

/// Ordered most specific first; the first matching rule wins. Rules only see
/// the last word, so `^` anchors at its start.
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)^(oxen)$", "${1}"),
    (r"(?i)^(ox)$", "${1}en"),
    (r"(?i)^(m|l)ice$", "${1}ice"),
    (r"(?i)^(m|l)ouse$", "${1}ice"),
    (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)^(wol|hal|shel|cal|el|sel|lea|loa|thie|shea|dwar|whar|scar)f$", "${1}ves"),
    (r"(?i)^(kni|wi|li)fe$", "${1}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])a$", "${1}a"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|tomat)o$", "${1}oes"),
    (r"(?i)(bu)s$", "${1}ses"),
    (r"(?i)(alias|status)$", "${1}es"),
    (r"(?i)(octop|vir)i$", "${1}i"),
    (r"(?i)(octop|vir)us$", "${1}i"),
    (r"(?i)^(ax|test)is$", "${1}es"),
    (r"(?i)^(campu|bonu|censu|choru|circu|consensu|corpu|focu|genu|nexu|prospectu|surplu|syllabu|walru)s$", "${1}ses"),
    (r"(?i)s$", "s"),
    (r"$", "s"),
];

/// Ordered most specific first; the first matching rule wins. Rules only see
/// the last word, so `^` anchors at its start.
const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(database)s$", "${1}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias|status)(es)?$", "${1}"),
    (r"(?i)(octop|vir)(us|i)$", "${1}us"),
    (r"(?i)^(a)x[ie]s$", "${1}xis"),
    (r"(?i)(cris|test)(is|es)$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(bus)(es)?$", "${1}"),
    (r"(?i)^(campu|bonu|censu|choru|circu|consensu|corpu|focu|genu|nexu|prospectu|surplu|syllabu|walru)s(es)?$", "${1}s"),
    (r"(?i)^(m|l)ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)^(wol|hal|shel|cal|el|sel|lea|loa|thie|shea|dwar|whar|scar)ves$", "${1}f"),
    (r"(?i)^(kni|wi|li)ves$", "${1}fe"),
    (r"(?i)(^analy)(sis|ses)$", "${1}sis"),
    (
        r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"(?i)(ss)$", "${1}"),
    (r"(?i)s$", ""),
];

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn compile(rules: &[(&str, &'static str)]) -> Vec<Rule> {
    rules
        .iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|pattern| Rule {
                pattern,
                replacement,
            })
        })
        .collect()
}

static PLURALS: LazyLock<Vec<Rule>> = LazyLock::new(|| compile(PLURAL_RULES));
static SINGULARS: LazyLock<Vec<Rule>> = LazyLock::new(|| compile(SINGULAR_RULES));

/// Pluralize the last word of an identifier.
///
/// Words already in plural form, uncountable words and words that do not end
/// in a letter are returned unchanged.
pub fn pluralize(word: &str) -> String {
    inflect(word, &PLURALS, |tail| {
        IRREGULAR.iter().find_map(|(singular, plural)| {
            if tail == *singular || tail == *plural {
                Some(*plural)
            } else {
                None
            }
        })
    })
}

/// Singularize the last word of an identifier.
///
/// Words already in singular form, uncountable words and words that do not end
/// in a letter are returned unchanged.
pub fn singularize(word: &str) -> String {
    inflect(word, &SINGULARS, |tail| {
        IRREGULAR.iter().find_map(|(singular, plural)| {
            if tail == *singular || tail == *plural {
                Some(*singular)
            } else {
                None
            }
        })
    })
}

fn inflect(word: &str, rules: &[Rule], irregular: impl Fn(&str) -> Option<&'static str>) -> String {
    if !word.ends_with(|c: char| c.is_ascii_alphabetic()) {
        return word.to_string();
    }

    let (head, tail) = split_last_word(word);
    let lower = tail.to_ascii_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some(replacement) = irregular(&lower) {
        return format!("{head}{}", match_case(replacement, tail));
    }

    rules
        .iter()
        .find(|rule| rule.pattern.is_match(tail))
        .map(|rule| format!("{head}{}", rule.pattern.replace(tail, rule.replacement)))
        .unwrap_or_else(|| word.to_string())
}

/// Split `UserProfile`, `user_profile` or `user-profile` before its last word.
fn split_last_word(word: &str) -> (&str, &str) {
    let bytes = word.as_bytes();
    let mut start = 0;
    for i in 1..bytes.len() {
        let (prev, cur) = (bytes[i - 1], bytes[i]);
        if matches!(prev, b'_' | b'-' | b' ')
            || (prev.is_ascii_lowercase() && cur.is_ascii_uppercase())
        {
            start = i;
        }
    }
    word.split_at(start)
}

fn match_case(replacement: &str, original: &str) -> String {
    let all_upper = original.len() > 1 && original.chars().all(|c| !c.is_ascii_lowercase());
    if all_upper {
        return replacement.to_ascii_uppercase();
    }
    if original.starts_with(|c: char| c.is_ascii_uppercase()) {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        };
    }
    replacement.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("UserProfile", "user_profile")]
    #[case("userProfile", "user_profile")]
    #[case("user-profile", "user_profile")]
    #[case("HTTPServer", "http_server")]
    #[case("oauth2_token", "oauth2_token")]
    #[case("first name", "first_name")]
    fn test_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(snake_case(input), expected);
    }

    #[rstest]
    #[case("user_profile", "userProfile")]
    #[case("UserProfile", "userProfile")]
    #[case("_private_field", "privateField")]
    #[case("point_x_y", "pointXy")]
    fn test_camel_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_case(input), expected);
    }

    #[rstest]
    #[case("user_profile", "UserProfile")]
    #[case("blog-post", "BlogPost")]
    #[case("APIKey", "ApiKey")]
    #[case("x_y", "Xy")]
    #[case("a_b_c", "Abc")]
    #[case("x_yz", "XYz")]
    fn test_pascal_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(pascal_case(input), expected);
    }

    #[rstest]
    #[case("UserProfile", "user-profile")]
    #[case("blog_post", "blog-post")]
    fn test_kebab_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(kebab_case(input), expected);
    }

    #[test]
    fn test_punctuation_becomes_word_boundary() {
        assert_eq!(snake_case("user.name!"), "user_name");
        assert_eq!(pascal_case("order#item"), "OrderItem");
    }

    #[test]
    fn test_leading_digit_is_guarded() {
        assert_eq!(snake_case("2fa_code"), "_2fa_code");
        assert_eq!(pascal_case("2fa_code"), "_2faCode");
        assert_eq!(kebab_case("3d-model"), "_3d-model");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(snake_case(""), "");
        assert_eq!(pluralize(""), "");
        assert_eq!(singularize(""), "");
    }

    #[rstest]
    #[case("UserProfile")]
    #[case("user_profile")]
    #[case("HTTPServer")]
    #[case("2fa_code")]
    #[case("order#item")]
    #[case("userID")]
    #[case("x_y")]
    #[case("a_b_c")]
    #[case("point_x_y")]
    #[case("ab_c_d")]
    #[case("x2_y")]
    fn test_casing_idempotent(#[case] input: &str) {
        for transform in [snake_case, camel_case, pascal_case, kebab_case] {
            let once = transform(input);
            assert_eq!(transform(&once), once, "not idempotent for {input:?} -> {once:?}");
        }
    }

    #[rstest]
    #[case("user", "users")]
    #[case("category", "categories")]
    #[case("box", "boxes")]
    #[case("address", "addresses")]
    #[case("status", "statuses")]
    #[case("bus", "buses")]
    #[case("wolf", "wolves")]
    #[case("knife", "knives")]
    #[case("drive", "drives")]
    #[case("cafe", "cafes")]
    #[case("roof", "roofs")]
    #[case("campus", "campuses")]
    #[case("menu", "menus")]
    #[case("quiz", "quizzes")]
    #[case("tomato", "tomatoes")]
    #[case("person", "people")]
    #[case("child", "children")]
    #[case("mouse", "mice")]
    #[case("BlogPost", "BlogPosts")]
    #[case("SalesPerson", "SalesPeople")]
    #[case("human", "humans")]
    fn test_pluralize(#[case] singular: &str, #[case] plural: &str) {
        assert_eq!(pluralize(singular), plural);
    }

    #[rstest]
    #[case("users", "user")]
    #[case("categories", "category")]
    #[case("boxes", "box")]
    #[case("addresses", "address")]
    #[case("statuses", "status")]
    #[case("wolves", "wolf")]
    #[case("knives", "knife")]
    #[case("waves", "wave")]
    #[case("olives", "olive")]
    #[case("campuses", "campus")]
    #[case("menus", "menu")]
    #[case("shelves", "shelf")]
    #[case("UserLives", "UserLife")]
    #[case("movies", "movie")]
    #[case("analyses", "analysis")]
    #[case("people", "person")]
    #[case("Children", "Child")]
    #[case("user_roles", "user_role")]
    fn test_singularize(#[case] plural: &str, #[case] singular: &str) {
        assert_eq!(singularize(plural), singular);
    }

    #[rstest]
    #[case("news")]
    #[case("sheep")]
    #[case("metadata")]
    #[case("v2")]
    fn test_uncountable_and_unknown_unchanged(#[case] word: &str) {
        assert_eq!(pluralize(word), word);
        assert_eq!(singularize(word), word);
    }

    #[test]
    fn test_already_inflected_words_are_stable() {
        assert_eq!(pluralize("users"), "users");
        assert_eq!(pluralize("people"), "people");
        assert_eq!(singularize("user"), "user");
        assert_eq!(singularize("address"), "address");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("campus"), "campus");
        assert_eq!(pluralize("campuses"), "campuses");
    }

    #[rstest]
    #[case("user")]
    #[case("post")]
    #[case("comment")]
    #[case("category")]
    #[case("company")]
    #[case("box")]
    #[case("address")]
    #[case("status")]
    #[case("hive")]
    #[case("photo")]
    #[case("day")]
    #[case("drive")]
    #[case("wave")]
    #[case("curve")]
    #[case("valve")]
    #[case("glove")]
    #[case("cave")]
    #[case("campus")]
    #[case("bonus")]
    #[case("menu")]
    #[case("leaf")]
    #[case("wife")]
    fn test_singularize_pluralize_roundtrip(#[case] noun: &str) {
        assert_eq!(singularize(&pluralize(noun)), singularize(noun));
        assert_eq!(singularize(&pluralize(noun)), noun);
    }

    #[test]
    fn test_name_forms() {
        let forms = NameForms::of("BlogPost");
        assert_eq!(forms.snake, "blog_post");
        assert_eq!(forms.camel, "blogPost");
        assert_eq!(forms.pascal, "BlogPost");
        assert_eq!(forms.kebab, "blog-post");
        assert_eq!(forms.plural, "BlogPosts");
        assert_eq!(forms.singular, "BlogPost");
    }

    #[test]
    fn test_name_forms_plural_input() {
        let forms = NameForms::of("waves");
        assert_eq!(forms.pascal, "Waves");
        assert_eq!(forms.singular, "wave");
        assert_eq!(forms.plural, "waves");
    }
}
