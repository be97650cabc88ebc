//!
//! Values that are masked or plain depending on where they came from.
//!

use crate::{ExposeInterface, PeekInterface, Secret};

///
/// A value that is either masked (wrapped in a [`Secret`]) or plain.
///
/// Request headers are stored as `Maskable<String>`, so logging a header set prints
/// `Signature: *** ***`-style placeholders for masked entries.
///
#[derive(Clone, Eq, PartialEq)]
pub enum Maskable<T: Eq + PartialEq + Clone> {
    /// Value hidden behind a [`Secret`]
    Masked(Secret<T>),
    /// Value printed as is
    Normal(T),
}

impl<T: std::fmt::Debug + Clone + Eq + PartialEq> std::fmt::Debug for Maskable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Masked(secret_value) => std::fmt::Debug::fmt(secret_value, f),
            Self::Normal(value) => std::fmt::Debug::fmt(value, f),
        }
    }
}

impl<T: Eq + PartialEq + Clone + std::hash::Hash> std::hash::Hash for Maskable<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Masked(value) => value.peek().hash(state),
            Self::Normal(value) => value.hash(state),
        }
    }
}

impl<T: Eq + PartialEq + Clone> Maskable<T> {
    /// Get the inner data while consuming self
    pub fn into_inner(self) -> T {
        match self {
            Self::Masked(inner_secret) => inner_secret.expose(),
            Self::Normal(inner) => inner,
        }
    }

    /// Borrow the inner data
    pub fn inner(&self) -> &T {
        match self {
            Self::Masked(inner_secret) => inner_secret.peek(),
            Self::Normal(inner) => inner,
        }
    }

    /// `true` for values that must not be printed
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Masked(_))
    }

    /// Create a new masked value
    pub fn new_masked(item: Secret<T>) -> Self {
        Self::Masked(item)
    }

    /// Create a new plain value
    pub fn new_normal(item: T) -> Self {
        Self::Normal(item)
    }
}

/// Conversion of a value into its masked [`Maskable`] form.
pub trait Mask {
    /// The type held by the resulting [`Maskable`]
    type Output: Eq + Clone + PartialEq;

    /// Wrap `self` as masked data
    fn into_masked(self) -> Maskable<Self::Output>;
}

impl Mask for String {
    type Output = Self;
    fn into_masked(self) -> Maskable<Self::Output> {
        Maskable::new_masked(self.into())
    }
}

impl Mask for Secret<String> {
    type Output = String;
    fn into_masked(self) -> Maskable<Self::Output> {
        Maskable::new_masked(self)
    }
}

impl<T: Eq + PartialEq + Clone> From<T> for Maskable<T> {
    fn from(value: T) -> Self {
        Self::new_normal(value)
    }
}

impl From<&str> for Maskable<String> {
    fn from(value: &str) -> Self {
        Self::new_normal(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{Mask, Maskable};

    #[test]
    fn masked_header_value_is_hidden_in_debug_output() {
        let signature = "1d41b723b630e0cd790e553b12293995f24a1dd8".to_string().into_masked();
        let rendered = format!("{signature:?}");

        assert!(signature.is_masked());
        assert!(!rendered.contains("1d41b723"));
        assert_eq!(signature.inner(), "1d41b723b630e0cd790e553b12293995f24a1dd8");
    }

    #[test]
    fn normal_header_value_is_printed() {
        let content_type: Maskable<String> = "application/json".into();
        assert_eq!(format!("{content_type:?}"), r#""application/json""#);
        assert_eq!(content_type.into_inner(), "application/json");
    }
}
