use exposable_model::{
    expose, expose_many, expose_one, Exposable, ExposeAll, ExposeError, ExposeExt, FieldList, Models,
    Result,
};
use serde_json::{json, Value};
use std::borrow::Cow;

/// Hand-written model with a name-based attribute table.
struct Account {
    a: i64,
    b: i64,
    extra: Option<Value>,
}

impl Account {
    fn plain(a: i64, b: i64) -> Self {
        Self { a, b, extra: None }
    }
}

impl Exposable for Account {
    fn exposable_fields(&self) -> FieldList<'_> {
        Cow::Borrowed(&["a", "b"])
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>> {
        Ok(match name {
            "a" => Some(json!(self.a)),
            "b" => Some(json!(self.b)),
            _ => None,
        })
    }

    fn computed_fields(&self) -> Result<Option<Value>> {
        Ok(self.extra.clone())
    }

    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("account")
    }
}

/// Narrower view of an account, exposing only `a`.
struct PublicAccount(Account);

impl Exposable for PublicAccount {
    fn exposable_fields(&self) -> FieldList<'_> {
        Cow::Borrowed(&["a"])
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>> {
        self.0.attribute(name)
    }

    fn computed_fields(&self) -> Result<Option<Value>> {
        Ok(Some(json!({ "c": 3 })))
    }
}

/// Declares a field it cannot read.
struct Misconfigured;

impl Exposable for Misconfigured {
    fn exposable_fields(&self) -> FieldList<'_> {
        Cow::Borrowed(&["id", "nickname"])
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>> {
        Ok((name == "id").then(|| json!(1)))
    }

    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("misconfigured")
    }
}

#[test]
fn test_declared_fields_in_order() {
    let exposed = expose_one(&Account::plain(1, 2)).unwrap();

    assert_eq!(exposed.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(serde_json::to_string(&exposed).unwrap(), r#"{"a":1,"b":2}"#);
}

#[test]
fn test_computed_fields_are_appended() {
    let exposed = expose_one(&PublicAccount(Account::plain(7, 8))).unwrap();

    assert_eq!(Value::from(exposed), json!({"a": 7, "c": 3}));
}

#[test]
fn test_computed_overrides_declared() {
    let account = Account {
        a: 1,
        b: 2,
        extra: Some(json!({"a": 99})),
    };

    let exposed = account.expose().unwrap();
    assert_eq!(exposed.get("a"), Some(&json!(99)));
    assert_eq!(exposed.len(), 2);
}

#[test]
fn test_sequence_preserves_order() {
    let accounts = vec![Account::plain(1, 2), Account::plain(3, 4)];

    let exposed = expose_many(&accounts).unwrap();
    assert_eq!(exposed.len(), 2);
    assert_eq!(exposed[0].get("a"), Some(&json!(1)));
    assert_eq!(exposed[1].get("a"), Some(&json!(3)));

    assert_eq!(accounts.expose_all().unwrap(), exposed);
}

#[test]
fn test_single_is_not_wrapped() {
    let account = Account::plain(1, 2);
    let accounts = vec![Account::plain(1, 2)];

    let one = expose(Models::One(&account)).unwrap();
    let many = expose(Models::Many(&accounts)).unwrap();

    assert_eq!(Value::from(one), json!({"a": 1, "b": 2}));
    assert_eq!(Value::from(many), json!([{"a": 1, "b": 2}]));
}

#[test]
fn test_missing_attribute_is_an_error() {
    let err = expose_one(&Misconfigured).unwrap_err();

    match err {
        ExposeError::AttributeNotFound { model, field } => {
            assert_eq!(model, "misconfigured");
            assert_eq!(field, "nickname");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_attribute_aborts_sequence() {
    let models: Vec<Box<dyn Exposable>> = vec![Box::new(Account::plain(1, 2)), Box::new(Misconfigured)];

    assert!(matches!(
        expose_many(&models),
        Err(ExposeError::AttributeNotFound { .. })
    ));
}

#[test]
fn test_empty_computed_equals_plain_projection() {
    let plain = expose_one(&Account::plain(5, 6)).unwrap();
    let empty = expose_one(&Account {
        a: 5,
        b: 6,
        extra: Some(json!({})),
    })
    .unwrap();

    assert_eq!(plain, empty);
}

#[test]
fn test_heterogeneous_sequence_resolves_runtime_type() {
    let models: Vec<Box<dyn Exposable>> = vec![
        Box::new(Account::plain(1, 2)),
        Box::new(PublicAccount(Account::plain(3, 4))),
    ];

    let exposed = expose(Models::Many(&models)).unwrap();
    assert_eq!(
        Value::from(exposed),
        json!([{"a": 1, "b": 2}, {"a": 3, "c": 3}])
    );
}

#[test]
fn test_expose_does_not_consume_models() {
    let account = Account::plain(1, 2);
    let first = account.expose().unwrap();
    let second = account.expose().unwrap();

    assert_eq!(first, second);
    assert_eq!(account.a, 1);
}
