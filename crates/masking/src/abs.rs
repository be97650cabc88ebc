//!
//! Access to the value held by a secret.
//!

use crate::{Secret, Strategy};

/// Borrow the inner value of a secret.
pub trait PeekInterface<S> {
    /// Only method providing access to the secret value.
    fn peek(&self) -> &S;
}

/// Consume a secret and return the inner value.
pub trait ExposeInterface<S> {
    /// Consume the secret and return the inner value
    fn expose(self) -> S;
}

impl<S, I> PeekInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S, I> ExposeInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn expose(self) -> S {
        self.inner_secret
    }
}
