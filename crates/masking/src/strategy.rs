use core::fmt;

/// Controls how a [`crate::Secret`] renders itself under `Debug`.
pub trait Strategy<T> {
    /// Format information about the secret.
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Print the type name only.
#[derive(Debug)]
pub enum WithType {}

impl<T> Strategy<T> for WithType {
    fn fmt(_: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "*** {} ***", std::any::type_name::<T>())
    }
}

/// Print a fixed placeholder.
#[derive(Debug)]
pub enum WithoutType {}

impl<T> Strategy<T> for WithoutType {
    fn fmt(_: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("*** ***")
    }
}

/// Keep the last four characters of a card number visible.
#[derive(Debug)]
pub enum CardNumberStrategy {}

impl<T> Strategy<T> for CardNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = value.as_ref();
        let visible = value
            .char_indices()
            .rev()
            .nth(3)
            .map_or("", |(index, _)| value.get(index..).unwrap_or_default());

        if visible.is_empty() || visible.len() == value.len() {
            return fmt.write_str("*** card ***");
        }
        write!(fmt, "**** {visible}")
    }
}
