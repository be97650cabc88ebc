//! Closed value sets of the Bova API.
//!
//! Every enum is string backed: the snake case form is what travels on the wire and what
//! [`std::str::FromStr`] / [`TryFrom<&str>`] accept. Matching is exact, so `"RUB"` is not a
//! currency.

use error_stack::report;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::errors::ApiClientError;

/// Implements exact-match parsing through the declared string forms
macro_rules! impl_enum_parse {
    ($($enum:ident),+ $(,)?) => {
        $(
            impl std::str::FromStr for $enum {
                type Err = error_stack::Report<ApiClientError>;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    Self::iter()
                        .find(|variant| variant.as_ref() == value)
                        .ok_or_else(|| {
                            report!(ApiClientError::InvalidEnumValue {
                                type_name: stringify!($enum),
                                value: value.to_owned(),
                            })
                        })
                }
            }

            impl TryFrom<&str> for $enum {
                type Error = error_stack::Report<ApiClientError>;

                fn try_from(value: &str) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }
        )+
    };
}

/// Currency of a transaction
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Currency {
    /// Russian ruble
    Rub,
    /// Uzbekistani som
    Uzs,
}

/// How the payer transfers the money
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    /// Card to card transfer
    Card,
    /// SberPay
    Sberpay,
    /// Faster Payments System
    Sbp,
}

/// Lifecycle state of a P2P transaction
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionState {
    /// Created, the payer has not paid yet
    WaitingPayment,
    /// The payer reported the transfer
    Paid,
    /// Not paid in time or cancelled
    Failed,
    /// Closed as failed after review
    ClosedFailed,
    /// Closed as failed after a repeated review
    RepeatedClosedFailed,
    /// Payment confirmed
    Successed,
    /// Confirmed after review
    AcceptedSuccessed,
    /// Confirmed after a repeated review
    RepeatedAcceptedSuccessed,
    /// Under dispute review
    Reviewing,
    /// Under a repeated dispute review
    RepeatedReviewing,
}

/// Trust level the merchant assigns to the payer
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PayeerType {
    /// Payer with a history on the merchant side
    Trust,
    /// First time deposit
    Ftd,
}

impl_enum_parse!(Currency, PaymentMethod, TransactionState, PayeerType);

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use strum::IntoEnumIterator;

    use super::{Currency, PayeerType, PaymentMethod, TransactionState};
    use crate::errors::ApiClientError;

    #[test]
    fn wire_names_match_declared_values() {
        let states: Vec<String> = TransactionState::iter().map(|s| s.to_string()).collect();
        assert_eq!(
            states,
            [
                "waiting_payment",
                "paid",
                "failed",
                "closed_failed",
                "repeated_closed_failed",
                "successed",
                "accepted_successed",
                "repeated_accepted_successed",
                "reviewing",
                "repeated_reviewing",
            ]
        );
        assert_eq!(Currency::Uzs.to_string(), "uzs");
        assert_eq!(PaymentMethod::Sberpay.as_ref(), "sberpay");
        assert_eq!(PayeerType::Ftd.as_ref(), "ftd");
    }

    #[test]
    fn every_value_parses_back_from_its_string_form() {
        for currency in Currency::iter() {
            assert_eq!(Currency::try_from(currency.as_ref()).unwrap(), currency);
        }
        for method in PaymentMethod::iter() {
            assert_eq!(PaymentMethod::try_from(method.as_ref()).unwrap(), method);
        }
        for state in TransactionState::iter() {
            assert_eq!(state.to_string().parse::<TransactionState>().unwrap(), state);
        }
        for payeer_type in PayeerType::iter() {
            assert_eq!(PayeerType::try_from(payeer_type.as_ref()).unwrap(), payeer_type);
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        let error = Currency::try_from("usd").expect_err("usd is not declared");
        assert_eq!(
            error.current_context(),
            &ApiClientError::InvalidEnumValue {
                type_name: "Currency",
                value: "usd".to_string(),
            }
        );

        assert!(Currency::try_from("RUB").is_err());
        assert!(PaymentMethod::try_from("").is_err());
        assert!(TransactionState::try_from("created").is_err());
        assert!(PayeerType::try_from("trusted").is_err());
    }

    #[test]
    fn serde_uses_the_same_names() {
        let json = serde_json::to_string(&TransactionState::RepeatedAcceptedSuccessed).unwrap();
        assert_eq!(json, r#""repeated_accepted_successed""#);

        let method: PaymentMethod = serde_json::from_str(r#""sbp""#).unwrap();
        assert_eq!(method, PaymentMethod::Sbp);
    }
}
