//! Header names, form fields and endpoint paths of the Bova API

/// Header carrying the body signature
pub const SIGNATURE_HEADER: &str = "Signature";

/// Dispute form field: transaction the dispute is opened on
pub const TRANSACTION_ID_FORM: &str = "transaction_id";
/// Dispute form field: disputed amount
pub const P2P_DISPUTE_AMOUNT_FORM: &str = "p2p_dispute[amount]";
/// Dispute form file part, repeated when a second proof image is attached
pub const P2P_DISPUTE_PROOF_IMAGE_FORM: &str = "p2p_dispute[proof_image]";

/// Content type of uploaded proof images
pub const PROOF_IMAGE_MIME: &str = "application/octet-stream";

pub(crate) const P2P_TRANSACTIONS_PATH: &str = "/p2p_transactions";
pub(crate) const P2P_DISPUTES_PATH: &str = "/p2p_disputes/from_client";
pub(crate) const MASS_TRANSACTIONS_PATH: &str = "/mass_transactions";
