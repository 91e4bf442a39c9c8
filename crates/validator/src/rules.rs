//! Rule-tag vocabulary and extension keys
//!
//! Every problem produced by a built-in operator carries its rule tag under
//! the [`RULE`] extension. The tags are part of the wire contract: API
//! consumers branch on them for client-side localization, so they never
//! change once published.

// ============================================================================
// EXTENSION KEYS
// ============================================================================

/// Rule tag of the failed check.
pub const RULE: &str = "rule";
/// Value that was checked.
pub const CURRENT: &str = "current";
/// Value or bound the check expected.
pub const EXPECTED: &str = "expected";
/// Regular expression of pattern rules.
pub const PATTERN: &str = "pattern";
/// Ordered pair of property names of two-operand rules.
pub const PROPERTIES: &str = "properties";
/// Ordered pair of operand values of two-operand rules.
pub const VALUES: &str = "values";
/// Simple type name of a record that was not found.
pub const ENTITY: &str = "entity";
/// Id of a record that was not found.
pub const ID: &str = "id";

// ============================================================================
// RULE TAGS
// ============================================================================

pub const NOT_NULL_OR_NOT_EMPTY: &str = "not-null-or-not-empty";
pub const NULL_OR_NOT_EMPTY: &str = "null-or-not-empty";
pub const BOTH_NULL_OR_NOT: &str = "both-null-or-not";

pub const EQUALS: &str = "equals";
pub const NOT_EQUALS: &str = "not-equals";
pub const BOTH_EQUALS: &str = "both-equals";
pub const BOTH_NOT_EQUALS: &str = "both-not-equals";

pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const MIN_MAX: &str = "min-max";
pub const NULL_OR_MIN: &str = "null-or-min";
pub const NULL_OR_MAX: &str = "null-or-max";
pub const NULL_OR_MIN_MAX: &str = "null-or-min-max";

pub const MIN_LENGTH: &str = "min-length";
pub const MAX_LENGTH: &str = "max-length";
pub const LENGTH: &str = "length";
pub const NULL_OR_MIN_LENGTH: &str = "null-or-min-length";
pub const NULL_OR_LENGTH: &str = "null-or-length";

pub const LESS_THAN: &str = "less-than";
pub const LESS_THAN_OR_EQUAL: &str = "less-than-or-equal";
pub const GREATER_THAN: &str = "greater-than";
pub const GREATER_THAN_OR_EQUAL: &str = "greater-than-or-equal";

pub const MATCH_PATTERN: &str = "match-pattern";
pub const NOT_MATCH_PATTERN: &str = "not-match-pattern";
pub const STARTS_WITH: &str = "starts-with";
pub const ENDS_WITH: &str = "ends-with";
pub const CONTAINS: &str = "contains";
pub const NOT_CONTAIN: &str = "not-contain";
pub const ONLY_LETTERS: &str = "only-letters";
pub const ONLY_DIGITS: &str = "only-digits";
pub const ONLY_LETTERS_OR_DIGITS: &str = "only-letters-or-digits";
pub const NO_WHITE_SPACE: &str = "no-white-space";

pub const EMAIL: &str = "email";
pub const URL: &str = "url";
pub const HTTPS_URL: &str = "https-url";
pub const ABSOLUTE_URL: &str = "absolute-url";
pub const RELATIVE_URL: &str = "relative-url";

pub const IN_PAST: &str = "in-past";
pub const IN_FUTURE: &str = "in-future";
pub const TODAY: &str = "today";
pub const AFTER: &str = "after";
pub const BEFORE: &str = "before";
pub const BETWEEN: &str = "between";
