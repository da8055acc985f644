use crate::utils::error::Result;
use serde_json::Value;
use std::borrow::Cow;

/// Ordered set of field names a model allows on its API representation.
pub type FieldList<'a> = Cow<'a, [&'a str]>;

/// Capability a model provides to be projected into an [`Exposed`](crate::domain::model::Exposed).
///
/// Methods dispatch on the runtime type, so a `dyn Exposable` resolves the
/// field list and computed hook of the concrete model behind it.
pub trait Exposable {
    /// Field names to copy, in output order.
    fn exposable_fields(&self) -> FieldList<'_>;

    /// Reads an attribute by name. `Ok(None)` means the model has no such attribute.
    fn attribute(&self, name: &str) -> Result<Option<Value>>;

    /// Extra key/value pairs merged after the declared fields.
    ///
    /// `None`, `null`, `{}` and `[]` add nothing; any other non-object value is rejected.
    fn computed_fields(&self) -> Result<Option<Value>> {
        Ok(None)
    }

    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

impl<T: Exposable + ?Sized> Exposable for &T {
    fn exposable_fields(&self) -> FieldList<'_> {
        (**self).exposable_fields()
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>> {
        (**self).attribute(name)
    }

    fn computed_fields(&self) -> Result<Option<Value>> {
        (**self).computed_fields()
    }

    fn model_name(&self) -> Cow<'_, str> {
        (**self).model_name()
    }
}

impl<T: Exposable + ?Sized> Exposable for Box<T> {
    fn exposable_fields(&self) -> FieldList<'_> {
        (**self).exposable_fields()
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>> {
        (**self).attribute(name)
    }

    fn computed_fields(&self) -> Result<Option<Value>> {
        (**self).computed_fields()
    }

    fn model_name(&self) -> Cow<'_, str> {
        (**self).model_name()
    }
}
