//! Request and response contracts of the Bova API

mod mass_transaction;
mod p2p;

pub use mass_transaction::{MassTransactionPayload, MassTransactionRequest, MassTransactionResponse};
pub use p2p::{
    P2PDisputeRecipientCard, P2PDisputeRequest, P2PDisputeResponse, P2PRecipientCard,
    P2PTransactionPayload, P2PTransactionRequest, P2PTransactionResponse,
    P2PTransactionShortPayload, P2PTransactionShortResponse, ProofImage,
};
