//!
//! Secret strings.
//!

use std::str::FromStr;

use crate::{Secret, Strategy};

impl<I> FromStr for Secret<String, I>
where
    I: Strategy<String>,
{
    type Err = core::convert::Infallible;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(src.to_owned()))
    }
}
