//!
//! Structure describing secret.
//!

use std::{fmt, marker::PhantomData};

use crate::{strategy::Strategy, PeekInterface};

///
/// Secret thing.
///
/// To get access to value use method `expose()` of trait [`crate::ExposeInterface`], or
/// borrow it with `peek()` of trait [`crate::PeekInterface`].
///
/// The second generic parameter picks the [`Strategy`] used when the secret is printed with
/// `Debug`; the value itself never reaches the formatter.
///
/// ```
/// use masking::{PeekInterface, Secret};
///
/// let secret: Secret<String> = Secret::new("api-secret".to_string());
///
/// assert_eq!("*** alloc::string::String ***", format!("{secret:?}"));
/// assert_eq!("api-secret", secret.peek());
/// ```
///
pub struct Secret<S, I = crate::WithType>
where
    I: Strategy<S>,
{
    pub(crate) inner_secret: S,
    pub(crate) marker: PhantomData<I>,
}

impl<S, I> Secret<S, I>
where
    I: Strategy<S>,
{
    /// Take ownership of a secret value
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
            marker: PhantomData,
        }
    }
}

impl<S, I> From<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<S, I> Clone for Secret<S, I>
where
    S: Clone,
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self::new(self.inner_secret.clone())
    }
}

impl<S, I> PartialEq for Secret<S, I>
where
    S: PartialEq,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for Secret<S, I>
where
    S: Eq,
    I: Strategy<S>,
{
}

impl<S, I> fmt::Debug for Secret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S, I> Default for Secret<S, I>
where
    S: Default,
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}
