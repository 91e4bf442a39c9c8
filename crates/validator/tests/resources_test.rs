//! Process-wide message templates and display-name registration.
//!
//! Installing templates affects every rule set in the process, so the
//! swap-and-restore sequence lives in a single test.

use pretty_assertions::assert_eq;
use verity_validator::display::{self, DisplayNamed};
use verity_validator::prelude::*;
use verity_validator::resources::{self, MessageTemplates, ResourceError};

struct Customer;

display_names! {
    Customer as "Cliente" {
        "name" => "Nome",
    }
}

struct Supplier;

#[test]
fn installed_templates_localize_messages() {
    let portuguese = MessageTemplates::from_json(
        r#"{
            "not_null_or_empty": "O campo '{0}' deve ser informado",
            "min": "O campo '{0}' deve ser no mínimo '{1}'"
        }"#,
    )
    .unwrap();
    resources::install(portuguese).unwrap();

    let localized = set_for::<Customer>()
        .not_empty("", "name")
        .min(&0, 1, "age")
        .max(&10, 5, "age");
    let messages: Vec<_> = localized
        .problems()
        .unwrap()
        .iter()
        .map(|p| p.message.clone())
        .collect();
    assert_eq!(
        messages,
        vec![
            "O campo 'Nome' deve ser informado",
            "O campo 'age' deve ser no mínimo '1'",
            "The 'age' field must be at most '5'",
        ]
    );

    resources::reset();
    let restored = set().not_empty("", "name");
    assert_eq!(
        restored.problems().unwrap().as_slice()[0].message,
        "The 'name' field must be informed"
    );
}

#[test]
fn invalid_templates_are_rejected() {
    let err = MessageTemplates::from_json(r#"{ "min": "The '{0}' field must be at least '{3}'" }"#)
        .unwrap_err();
    assert!(matches!(err, ResourceError::UnknownArgument { index: 3, .. }));

    let err = MessageTemplates::from_json(r#"{ "max": "broken {0" }"#).unwrap_err();
    assert!(matches!(err, ResourceError::UnbalancedBrace { .. }));

    assert!(matches!(
        MessageTemplates::from_json("not json"),
        Err(ResourceError::Json(_))
    ));
}

#[test]
fn registered_labels_take_precedence() {
    assert_eq!(Customer::type_display_name(), Some("Cliente"));

    display::register_property::<Supplier>("tax_id", "Tax number");
    let supplier = RuleSet::for_type::<Supplier>().not_empty("", "tax_id");
    let problem = &supplier.problems().unwrap().as_slice()[0];
    assert!(problem.message.contains("'Tax number'"));

    display::register_type::<Supplier>("Vendor");
    assert_eq!(&*display::resolve_type(Some(&display::Subject::of::<Supplier>())), "Vendor");
}
