//! E-mail and URL operators.

use super::{RuleSet, Template, Violation};
use crate::foundation::TextOperand;
use crate::predicates::shape;
use crate::rules;

impl RuleSet {
    /// Requires a syntactically valid e-mail address.
    pub fn email<S: TextOperand + ?Sized>(self, value: &S, property: &str) -> Self {
        self.shaped(value, shape::is_email, rules::EMAIL, |t| &t.email, property)
    }

    /// Requires an absolute `http`, `https` or `ftp` URL.
    pub fn url<S: TextOperand + ?Sized>(self, value: &S, property: &str) -> Self {
        self.shaped(value, shape::is_url, rules::URL, |t| &t.url, property)
    }

    /// Requires an absolute `https` URL.
    pub fn https_url<S: TextOperand + ?Sized>(self, value: &S, property: &str) -> Self {
        self.shaped(value, shape::is_https_url, rules::HTTPS_URL, |t| &t.https_url, property)
    }

    /// Requires an absolute URL of any scheme.
    pub fn absolute_url<S: TextOperand + ?Sized>(self, value: &S, property: &str) -> Self {
        self.shaped(value, shape::is_absolute_url, rules::ABSOLUTE_URL, |t| &t.absolute_url, property)
    }

    /// Requires a relative reference such as `/orders/1?page=2`.
    pub fn relative_url<S: TextOperand + ?Sized>(self, value: &S, property: &str) -> Self {
        self.shaped(value, shape::is_relative_url, rules::RELATIVE_URL, |t| &t.relative_url, property)
    }

    fn shaped<S: TextOperand + ?Sized>(
        self,
        value: &S,
        holds: fn(Option<&str>) -> bool,
        rule: &'static str,
        template: Template,
        property: &str,
    ) -> Self {
        let current = value.text();
        if holds(current) {
            return self;
        }
        self.report(property, Violation::new(rule, template).current(current))
    }
}
