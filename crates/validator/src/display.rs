//! Display-name resolution for types and properties
//!
//! Messages name fields by a human-readable label rather than by their
//! source identifier. Labels come from two places, without reflection:
//!
//! - the [`DisplayNamed`] trait, usually generated with
//!   [`display_names!`](crate::display_names), a compile-time table;
//! - a runtime registry ([`register_type`], [`register_property`]) filled
//!   at startup, which takes precedence over the trait.
//!
//! When neither knows a label the raw property name (or the simple type
//! name) is used. Resolved labels are memoized per `(type, property)` in a
//! concurrent cache; registering a label evicts the matching cache entry.

use std::any::TypeId;
use std::fmt;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

/// Sentinel returned when neither a type nor a property is known.
pub const UNKNOWN: &str = "?";

// ============================================================================
// DISPLAY NAMED
// ============================================================================

/// Compile-time display labels for a model type and its properties.
///
/// Both methods default to "no label", so an empty impl is valid.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::display::DisplayNamed;
///
/// struct Order;
///
/// impl DisplayNamed for Order {
///     fn type_display_name() -> Option<&'static str> {
///         Some("Purchase Order")
///     }
///
///     fn property_display_name(property: &str) -> Option<&'static str> {
///         match property {
///             "name" => Some("Customer Name"),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait DisplayNamed: 'static {
    /// Label of the type itself.
    fn type_display_name() -> Option<&'static str> {
        None
    }

    /// Label of `property` on this type.
    fn property_display_name(property: &str) -> Option<&'static str> {
        let _ = property;
        None
    }
}

// ============================================================================
// SUBJECT
// ============================================================================

/// Type tag carried by a rule set for display-name lookups.
#[derive(Clone, Copy)]
pub struct Subject {
    id: TypeId,
    type_name: &'static str,
    annotated: bool,
    type_label: fn() -> Option<&'static str>,
    property_label: fn(&str) -> Option<&'static str>,
}

impl Subject {
    /// Subject for any `'static` type, without compile-time labels.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            annotated: false,
            type_label: || None,
            property_label: |_| None,
        }
    }

    /// Subject for a type with [`DisplayNamed`] labels.
    #[must_use]
    pub fn named<T: DisplayNamed>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            annotated: true,
            type_label: T::type_display_name,
            property_label: T::property_display_name,
        }
    }

    /// The [`TypeId`] of the subject type.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Full type path, as reported by [`std::any::type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Last path segment of the type name, generics removed.
    #[must_use]
    pub fn simple_name(&self) -> &'static str {
        simple_type_name(self.type_name)
    }

    /// Returns true when the subject carries [`DisplayNamed`] labels.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.annotated
    }
}

impl PartialEq for Subject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Subject {}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subject").field(&self.type_name).finish()
    }
}

/// `alloc::vec::Vec<my::Item>` -> `Vec`, `my::model::Order` -> `Order`.
pub(crate) fn simple_type_name(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit("::").next().unwrap_or(base)
}

// ============================================================================
// DISPLAY NAMES
// ============================================================================

/// Concurrent, memoizing display-name resolver.
///
/// Cache entries are keyed by type, annotation presence and property, so a
/// bare [`Subject::of`] never shadows the labels of [`Subject::named`].
///
/// Most code uses the process-wide instance through the free functions of
/// this module; separate instances are useful in tests.
#[derive(Debug, Default)]
pub struct DisplayNames {
    type_labels: DashMap<TypeId, Arc<str>>,
    property_labels: DashMap<(TypeId, String), Arc<str>>,
    type_cache: DashMap<(TypeId, bool), Arc<str>>,
    property_cache: DashMap<(TypeId, bool, String), Arc<str>>,
}

static GLOBAL: LazyLock<DisplayNames> = LazyLock::new(DisplayNames::new);

impl DisplayNames {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide resolver.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers a label for the type `T`, overriding any trait label.
    pub fn register_type<T: ?Sized + 'static>(&self, label: impl Into<Arc<str>>) {
        let id = TypeId::of::<T>();
        let label = label.into();
        tracing::debug!(type_name = std::any::type_name::<T>(), label = %label, "registered type display name");
        self.type_labels.insert(id, label);
        self.type_cache.remove(&(id, false));
        self.type_cache.remove(&(id, true));
    }

    /// Registers a label for `property` on `T`, overriding any trait label.
    pub fn register_property<T: ?Sized + 'static>(&self, property: &str, label: impl Into<Arc<str>>) {
        let id = TypeId::of::<T>();
        let label = label.into();
        tracing::debug!(
            type_name = std::any::type_name::<T>(),
            property,
            label = %label,
            "registered property display name"
        );
        self.property_labels.insert((id, property.to_owned()), label);
        for annotated in [false, true] {
            self.property_cache.remove(&(id, annotated, property.to_owned()));
        }
    }

    /// Resolves the label of `property` on `subject`.
    ///
    /// - no subject, no property: [`UNKNOWN`];
    /// - no subject: the property unchanged;
    /// - no property: the label of the subject type;
    /// - both: the registered or annotated label, else the raw property.
    pub fn resolve(&self, subject: Option<&Subject>, property: Option<&str>) -> Arc<str> {
        match (subject, property) {
            (None, None) => Arc::from(UNKNOWN),
            (None, Some(property)) => Arc::from(property),
            (Some(subject), None) => self.resolve_type(Some(subject)),
            (Some(subject), Some(property)) => self.resolve_property(subject, property),
        }
    }

    /// Resolves the label of the subject type itself, falling back to its
    /// simple name.
    pub fn resolve_type(&self, subject: Option<&Subject>) -> Arc<str> {
        let Some(subject) = subject else {
            return Arc::from(UNKNOWN);
        };
        let key = (subject.id, subject.annotated);
        if let Some(cached) = self.type_cache.get(&key) {
            return Arc::clone(cached.value());
        }

        let label = self
            .type_labels
            .get(&subject.id)
            .map(|entry| Arc::clone(entry.value()))
            .or_else(|| (subject.type_label)().map(Arc::from))
            .unwrap_or_else(|| Arc::from(subject.simple_name()));

        tracing::debug!(type_name = subject.type_name, label = %label, "cached type display name");
        self.type_cache.insert(key, Arc::clone(&label));
        label
    }

    fn resolve_property(&self, subject: &Subject, property: &str) -> Arc<str> {
        let key = (subject.id, subject.annotated, property.to_owned());
        if let Some(cached) = self.property_cache.get(&key) {
            return Arc::clone(cached.value());
        }

        let label = self
            .property_labels
            .get(&(subject.id, property.to_owned()))
            .map(|entry| Arc::clone(entry.value()))
            .or_else(|| (subject.property_label)(property).map(Arc::from))
            .unwrap_or_else(|| Arc::from(property));

        tracing::debug!(
            type_name = subject.type_name,
            property,
            label = %label,
            "cached property display name"
        );
        self.property_cache.insert(key, Arc::clone(&label));
        label
    }
}

// ============================================================================
// GLOBAL SHORTCUTS
// ============================================================================

/// Registers a type label on the process-wide resolver.
pub fn register_type<T: ?Sized + 'static>(label: impl Into<Arc<str>>) {
    DisplayNames::global().register_type::<T>(label);
}

/// Registers a property label on the process-wide resolver.
pub fn register_property<T: ?Sized + 'static>(property: &str, label: impl Into<Arc<str>>) {
    DisplayNames::global().register_property::<T>(property, label);
}

/// Resolves a property label on the process-wide resolver.
pub fn resolve(subject: Option<&Subject>, property: Option<&str>) -> Arc<str> {
    DisplayNames::global().resolve(subject, property)
}

/// Resolves a type label on the process-wide resolver.
pub fn resolve_type(subject: Option<&Subject>) -> Arc<str> {
    DisplayNames::global().resolve_type(subject)
}

// ============================================================================
// TESTS
// ============================================================================
