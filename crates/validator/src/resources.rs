//! Localizable message templates
//!
//! Every failing rule formats its message from one named template in
//! [`MessageTemplates`]. Templates use positional placeholders: `{0}` is the
//! display name of the checked property, `{1}`, `{2}` are the rule operands
//! (bounds, expected value, second property). `{{` and `}}` write literal
//! braces.
//!
//! The process-wide templates live in an `ArcSwap`: reads are lock-free and
//! a localized set can be swapped in at startup.
//!
//! ```rust,ignore
//! use verity_validator::resources::{self, MessageTemplates};
//!
//! let pt = MessageTemplates::from_json(r#"{ "not_null_or_empty": "O campo '{0}' deve ser informado" }"#)?;
//! resources::install(pt)?;
//! ```

use std::fmt::{self, Write as _};
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to load or validate a set of message templates.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The templates document is not valid JSON for [`MessageTemplates`].
    #[error("malformed message templates: {0}")]
    Json(#[from] serde_json::Error),

    /// A lone `{` or `}` that is not part of a placeholder or an escape.
    #[error("template `{template}` has an unbalanced brace at byte {position}")]
    UnbalancedBrace {
        /// Template name.
        template: &'static str,
        /// Byte offset of the brace.
        position: usize,
    },

    /// A placeholder that is not a plain argument index.
    #[error("template `{template}` has an invalid placeholder `{{{placeholder}}}`")]
    InvalidPlaceholder {
        /// Template name.
        template: &'static str,
        /// Placeholder body.
        placeholder: String,
    },

    /// A placeholder index beyond the arguments the rule supplies.
    #[error("template `{template}` references argument {index} but only {arity} are supplied")]
    UnknownArgument {
        /// Template name.
        template: &'static str,
        /// Referenced index.
        index: usize,
        /// Number of arguments supplied to this template.
        arity: usize,
    },
}

// ============================================================================
// MESSAGE TEMPLATES
// ============================================================================

macro_rules! message_templates {
    ($(
        $(#[$doc:meta])*
        $field:ident / $arity:literal => $default:literal,
    )*) => {
        /// One message template per rule kind.
        ///
        /// Deserialization fills missing entries with the English defaults,
        /// so a localized document only needs to name what it overrides.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct MessageTemplates {
            $(
                $(#[$doc])*
                pub $field: String,
            )*
        }

        impl Default for MessageTemplates {
            fn default() -> Self {
                Self {
                    $($field: $default.to_owned(),)*
                }
            }
        }

        impl MessageTemplates {
            /// `(name, template, arity)` for every template.
            fn entries(&self) -> impl Iterator<Item = (&'static str, &str, usize)> {
                [$((stringify!($field), self.$field.as_str(), $arity),)*].into_iter()
            }
        }
    };
}

message_templates! {
    /// Required value missing or empty.
    not_null_or_empty / 1 => "The '{0}' field must be informed",
    /// Optional value present but empty.
    null_or_not_empty / 1 => "The '{0}' field, when informed, must contain a value",
    /// Pair of values where only one is informed.
    both_null_or_not / 2 => "Both fields '{0}' and '{1}' must be informed together or not informed",
    /// Value equal to a forbidden value.
    not_equal / 2 => "The '{0}' field must not be equal to '{1}'",
    /// Value different from the expected value.
    equal / 2 => "The '{0}' field must be equal to '{1}'",
    /// Two fields with the same value.
    both_not_equal / 2 => "The '{0}' field must not be equal to the '{1}' field",
    /// Two fields with different values.
    both_equal / 2 => "The '{0}' field must be equal to the '{1}' field",
    min / 2 => "The '{0}' field must be at least '{1}'",
    null_or_min / 2 => "The '{0}' field, when informed, must be at least '{1}'",
    max / 2 => "The '{0}' field must be at most '{1}'",
    null_or_max / 2 => "The '{0}' field, when informed, must be at most '{1}'",
    min_max / 3 => "The '{0}' field must be between '{1}' and '{2}'",
    null_or_min_max / 3 => "The '{0}' field, when informed, must be between '{1}' and '{2}'",
    min_length / 2 => "The '{0}' field must have at least '{1}' character(s)",
    null_or_min_length / 2 => "The '{0}' field, when informed, must have at least '{1}' character(s)",
    max_length / 2 => "The '{0}' field must have at most '{1}' character(s)",
    length / 3 => "The '{0}' field must have a length between '{1}' and '{2}' characters",
    null_or_length / 3 => "The '{0}' field, when informed, must have a length between '{1}' and '{2}' characters",
    less_than / 2 => "The value of the '{0}' field must be less than the value of the '{1}' field",
    less_than_or_equal / 2 => "The value of the '{0}' field must be less than or equal to the value of the '{1}' field",
    greater_than / 2 => "The value of the '{0}' field must be greater than the value of the '{1}' field",
    greater_than_or_equal / 2 => "The value of the '{0}' field must be greater than or equal to the value of the '{1}' field",
    match_pattern / 2 => "The '{0}' field does not match the expected format",
    not_match_pattern / 2 => "The '{0}' field must not match the format '{1}'",
    starts_with / 2 => "The '{0}' field must start with '{1}'",
    ends_with / 2 => "The '{0}' field must end with '{1}'",
    contains / 2 => "The '{0}' field must contain '{1}'",
    not_contain / 2 => "The '{0}' field must not contain '{1}'",
    only_letters / 1 => "The '{0}' field must contain only letters",
    only_digits / 1 => "The '{0}' field must contain only digits",
    only_letters_or_digits / 1 => "The '{0}' field must contain only letters or digits",
    no_white_space / 1 => "The '{0}' field must not contain white spaces",
    email / 1 => "The '{0}' field must be a valid e-mail",
    url / 1 => "The '{0}' field must be a valid URL",
    https_url / 1 => "The '{0}' field must be a valid HTTPS URL",
    absolute_url / 1 => "The '{0}' field must be an absolute URL",
    relative_url / 1 => "The '{0}' field must be a relative URL",
    in_past / 1 => "The '{0}' field must be in the past",
    in_future / 1 => "The '{0}' field must be in the future",
    today / 1 => "The '{0}' field must be today",
    after / 2 => "The '{0}' field must be after '{1}'",
    before / 2 => "The '{0}' field must be before '{1}'",
    between / 3 => "The '{0}' field must be between '{1}' and '{2}'",
    /// Lookup without a known key.
    entity_not_found / 1 => "The '{0}' record was not found",
    /// Lookup by a named field: entity, field, value.
    entity_not_found_by / 3 => "The '{0}' record with {1} '{2}' was not found",
    /// Lookup by id: entity, id.
    entity_not_found_by_id / 2 => "The '{0}' record with id '{1}' was not found",
}

impl MessageTemplates {
    /// Parses a (possibly partial) JSON document and validates every template.
    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        let templates: Self = serde_json::from_str(json)?;
        templates.validate()?;
        Ok(templates)
    }

    /// Checks that every template is well formed and only references the
    /// arguments its rule supplies.
    pub fn validate(&self) -> Result<(), ResourceError> {
        for (name, template, arity) in self.entries() {
            let segments = parse(template).map_err(|err| err.into_resource_error(name))?;
            for segment in segments {
                if let Segment::Argument(index) = segment
                    && index >= arity
                {
                    return Err(ResourceError::UnknownArgument {
                        template: name,
                        index,
                        arity,
                    });
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Argument(usize),
}

#[derive(Debug)]
enum SyntaxError {
    Unbalanced(usize),
    Placeholder(String),
}

impl SyntaxError {
    fn into_resource_error(self, template: &'static str) -> ResourceError {
        match self {
            Self::Unbalanced(position) => ResourceError::UnbalancedBrace { template, position },
            Self::Placeholder(placeholder) => ResourceError::InvalidPlaceholder {
                template,
                placeholder,
            },
        }
    }
}

fn parse(template: &str) -> Result<SmallVec<[Segment<'_>; 8]>, SyntaxError> {
    let mut segments = SmallVec::new();
    let bytes = template.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                segments.push(Segment::Literal(&template[start..=i]));
                i += 2;
                start = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                segments.push(Segment::Literal(&template[start..=i]));
                i += 2;
                start = i;
            }
            b'{' => {
                let close = template[i + 1..]
                    .find('}')
                    .map(|offset| i + 1 + offset)
                    .ok_or(SyntaxError::Unbalanced(i))?;
                let body = &template[i + 1..close];
                let index = body
                    .parse::<usize>()
                    .map_err(|_| SyntaxError::Placeholder(body.to_owned()))?;
                if start < i {
                    segments.push(Segment::Literal(&template[start..i]));
                }
                segments.push(Segment::Argument(index));
                i = close + 1;
                start = i;
            }
            b'}' => return Err(SyntaxError::Unbalanced(i)),
            _ => i += 1,
        }
    }
    if start < template.len() {
        segments.push(Segment::Literal(&template[start..]));
    }
    Ok(segments)
}

/// Formats `template`, replacing `{n}` with `args[n]`.
///
/// Placeholders without a matching argument are written verbatim; a
/// malformed template is returned unchanged.
pub fn format(template: &str, args: &[&dyn fmt::Display]) -> String {
    let Ok(segments) = parse(template) else {
        tracing::warn!(template, "malformed message template, using it verbatim");
        return template.to_owned();
    };

    let mut out = String::with_capacity(template.len() + 16);
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Argument(index) => match args.get(index) {
                Some(arg) => {
                    let _ = write!(out, "{arg}");
                }
                None => {
                    let _ = write!(out, "{{{index}}}");
                }
            },
        }
    }
    out
}

// ============================================================================
// PROCESS-WIDE TEMPLATES
// ============================================================================

static CURRENT: LazyLock<ArcSwap<MessageTemplates>> =
    LazyLock::new(|| ArcSwap::from_pointee(MessageTemplates::default()));

/// Validates and installs `templates` as the process-wide set.
pub fn install(templates: MessageTemplates) -> Result<(), ResourceError> {
    templates.validate()?;
    CURRENT.store(Arc::new(templates));
    tracing::info!("installed message templates");
    Ok(())
}

/// The process-wide templates.
#[inline]
pub fn current() -> Arc<MessageTemplates> {
    CURRENT.load_full()
}

/// Restores the built-in English templates.
pub fn reset() {
    CURRENT.store(Arc::new(MessageTemplates::default()));
    tracing::info!("restored default message templates");
}

// ============================================================================
// TESTS
// ============================================================================
