use crate::domain::model::{Exposed, Exposure};
use crate::domain::ports::Exposable;
use crate::utils::error::{ExposeError, Result};
use serde_json::Value;

/// Input of [`expose`]: a single model or an ordered sequence of models.
#[derive(Debug)]
pub enum Models<'a, T> {
    One(&'a T),
    Many(&'a [T]),
}

impl<T> Clone for Models<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Models<'_, T> {}

/// Projects one model or a sequence of models.
///
/// The output keeps the input's shape: `Models::One` gives `Exposure::One`,
/// never a one-element sequence.
pub fn expose<T: Exposable>(models: Models<'_, T>) -> Result<Exposure> {
    match models {
        Models::One(model) => expose_one(model).map(Exposure::One),
        Models::Many(all) => expose_many(all).map(Exposure::Many),
    }
}

/// Projects each model in order. Stops at the first failure.
pub fn expose_many<I>(models: I) -> Result<Vec<Exposed>>
where
    I: IntoIterator,
    I::Item: Exposable,
{
    models.into_iter().map(|model| expose_one(&model)).collect()
}

pub fn expose_one<T: Exposable + ?Sized>(model: &T) -> Result<Exposed> {
    let model_name = model.model_name();
    let fields = model.exposable_fields();
    let mut exposed = Exposed::new();

    for &field in fields.iter() {
        let value = model
            .attribute(field)?
            .ok_or_else(|| ExposeError::attribute_not_found(&*model_name, field))?;
        tracing::trace!("{}: exposing '{}'", model_name, field);
        exposed.insert(field, value);
    }

    let computed = merge_computed(&mut exposed, &model_name, model.computed_fields()?)?;

    tracing::debug!(
        "{}: exposed {} declared and {} computed fields",
        model_name,
        fields.len(),
        computed
    );

    Ok(exposed)
}

// Trailing merge: computed keys overwrite declared ones in place.
fn merge_computed(exposed: &mut Exposed, model_name: &str, computed: Option<Value>) -> Result<usize> {
    match computed {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Object(extra)) => {
            let count = extra.len();
            for (key, value) in extra {
                exposed.insert(key, value);
            }
            Ok(count)
        }
        Some(Value::Array(items)) if items.is_empty() => Ok(0),
        Some(other) => Err(ExposeError::MalformedComputed {
            model: model_name.to_string(),
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Method-call form of [`expose_one`].
pub trait ExposeExt: Exposable {
    fn expose(&self) -> Result<Exposed> {
        expose_one(self)
    }
}

impl<T: Exposable + ?Sized> ExposeExt for T {}

/// Method-call form of [`expose_many`] for slices and vectors.
pub trait ExposeAll {
    fn expose_all(&self) -> Result<Vec<Exposed>>;
}

impl<T: Exposable> ExposeAll for [T] {
    fn expose_all(&self) -> Result<Vec<Exposed>> {
        expose_many(self)
    }
}
