//! Conditional composition
//!
//! `when`/`unless` gate a builder on a flag. The `unless_either*` family
//! expresses "either group A holds or group B holds": nothing is added when
//! either group passes, and the problems of both groups are added when
//! neither does.

use super::RuleSet;

impl RuleSet {
    /// Applies `build` only when `condition` is true.
    ///
    /// ```rust,ignore
    /// set().when(order.shipped, |s| s.not_empty(&order.tracking_code, "tracking_code"))
    /// ```
    pub fn when(self, condition: bool, build: impl FnOnce(Self) -> Self) -> Self {
        if condition { build(self) } else { self }
    }

    /// Applies `build` only when `condition` is false.
    pub fn unless(self, condition: bool, build: impl FnOnce(Self) -> Self) -> Self {
        if condition { self } else { build(self) }
    }

    /// Runs `primary` on an empty set sharing this set's subject and prefix.
    /// When it fails, runs `alternative` the same way; when that fails too,
    /// both groups' problems are added.
    ///
    /// ```rust,ignore
    /// set().unless_either(
    ///     |s| s.not_empty(&contact.email, "email"),
    ///     |s| s.not_empty(&contact.phone, "phone"),
    /// )
    /// ```
    pub fn unless_either(
        self,
        primary: impl FnOnce(Self) -> Self,
        alternative: impl FnOnce(Self) -> Self,
    ) -> Self {
        let primary = primary(self.fresh());
        if !primary.has_problems() {
            return self;
        }
        let alternative = alternative(self.fresh());
        self.splice_either(primary, alternative)
    }

    /// Like [`unless_either`](RuleSet::unless_either), with the primary group
    /// built by `factory` from scratch.
    pub fn unless_either_from(
        self,
        factory: impl FnOnce() -> Self,
        alternative: impl FnOnce(Self) -> Self,
    ) -> Self {
        let primary = factory();
        if !primary.has_problems() {
            return self;
        }
        let alternative = alternative(self.fresh());
        self.splice_either(primary, alternative)
    }

    /// Like [`unless_either`](RuleSet::unless_either), over two sets that
    /// were already evaluated.
    pub fn unless_either_sets(self, primary: Self, alternative: Self) -> Self {
        self.splice_either(primary, alternative)
    }

    fn splice_either(self, primary: Self, alternative: Self) -> Self {
        match (primary.problems, alternative.problems) {
            (Some(primary), Some(alternative)) => {
                tracing::trace!(
                    primary = primary.len(),
                    alternative = alternative.len(),
                    "neither alternative holds"
                );
                self.with_problems(primary).with_problems(alternative)
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::foundation::Problems;
    use crate::set;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_when_and_unless() {
        let code = "";
        assert!(set().when(true, |s| s.not_empty(code, "code")).has_problems());
        assert!(!set().when(false, |s| s.not_empty(code, "code")).has_problems());
        assert!(!set().unless(true, |s| s.not_empty(code, "code")).has_problems());

        let failed = set().unless(false, |s| s.not_empty(code, "code"));
        let problem = &failed.problems().unwrap().as_slice()[0];
        assert_eq!(problem.property.as_deref(), Some("code"));
    }

    #[test]
    fn test_unless_either_both_fail() {
        let set = set().unless_either(|s| s.not_empty("", "a"), |s| s.not_empty("", "b"));
        assert_eq!(set.problems().map(Problems::len), Some(2));
    }

    #[test]
    fn test_unless_either_any_pass() {
        assert!(!set().unless_either(|s| s.not_empty("ok", "a"), |s| s.not_empty("", "b")).has_problems());
        assert!(!set().unless_either(|s| s.not_empty("", "a"), |s| s.not_empty("ok", "b")).has_problems());
    }

    #[test]
    fn test_unless_either_keeps_prefix() {
        let name = "";
        let from_factory = set().with_property_prefix("model").unless_either_from(
            || set().with_property_prefix("model").not_empty(name, "model.name"),
            |s| s.not_empty(name, "model.name"),
        );
        let problems = from_factory.problems().unwrap();
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().all(|p| p.property.as_deref() == Some("name")));

        let from_builders = set()
            .with_property_prefix("model")
            .unless_either(|s| s.not_empty(name, "model.name"), |s| s.not_empty(name, "model.name"));
        assert!(from_builders.problems().unwrap().iter().all(|p| p.property.as_deref() == Some("name")));
    }

    #[test]
    fn test_unless_either_sets() {
        let primary = set().not_empty("", "v1");
        let alternative = set().not_empty("", "v2");
        let neither = set().unless_either_sets(primary, alternative);
        assert_eq!(neither.problems().map(Problems::len), Some(2));

        let alternative_holds = set().unless_either_sets(set().not_empty("", "v1"), set());
        assert!(!alternative_holds.has_problems());
    }
}
