/// Implements [`Exposable`](crate::Exposable) for a struct from its field list.
///
/// Each listed field is read through `self.<field>` and converted with
/// `serde_json::to_value`, so a misspelled field fails to compile. Listing a
/// field twice is rejected at compile time.
///
/// ```
/// use exposable_model::{exposable, ExposeExt};
/// use serde_json::json;
///
/// struct User {
///     id: u64,
///     email: String,
///     password_hash: String,
/// }
///
/// exposable!(User {
///     fields: [id, email],
///     computed: |user: &User| Some(json!({ "has_password": !user.password_hash.is_empty() })),
///     name: "user",
/// });
///
/// let user = User { id: 1, email: "a@example.com".into(), password_hash: "x".into() };
/// let exposed = user.expose().unwrap();
/// assert_eq!(exposed.keys().collect::<Vec<_>>(), ["id", "email", "has_password"]);
/// ```
#[macro_export]
macro_rules! exposable {
    (
        $ty:ty {
            fields: [$($field:ident),* $(,)?]
            $(, computed: $computed:expr)?
            $(, name: $name:literal)?
            $(,)?
        }
    ) => {
        const _: () = assert!(
            !$crate::core::macros::has_duplicate_names(&[$(stringify!($field)),*]),
            "exposable! field list contains a duplicate field"
        );

        impl $crate::Exposable for $ty {
            fn exposable_fields(&self) -> $crate::domain::ports::FieldList<'_> {
                ::std::borrow::Cow::Borrowed(&[$(stringify!($field)),*])
            }

            fn attribute(
                &self,
                name: &str,
            ) -> $crate::Result<::std::option::Option<$crate::__reexports::serde_json::Value>> {
                match name {
                    $(
                        stringify!($field) => $crate::__reexports::serde_json::to_value(&self.$field)
                            .map(::std::option::Option::Some)
                            .map_err($crate::ExposeError::from),
                    )*
                    _ => ::std::result::Result::Ok(::std::option::Option::None),
                }
            }

            $(
                fn computed_fields(
                    &self,
                ) -> $crate::Result<::std::option::Option<$crate::__reexports::serde_json::Value>> {
                    let hook: fn(&Self) -> ::std::option::Option<$crate::__reexports::serde_json::Value> =
                        $computed;
                    ::std::result::Result::Ok(hook(self))
                }
            )?

            $(
                fn model_name(&self) -> ::std::borrow::Cow<'_, str> {
                    ::std::borrow::Cow::Borrowed($name)
                }
            )?
        }
    };
}

#[doc(hidden)]
pub const fn has_duplicate_names(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if same_name(names[i], names[j]) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

const fn same_name(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
