//! P2P deposit transactions and disputes

use std::{io::Read, sync::Arc};

use bova_env::{logger::instrument, Flow};
use common_utils::request::Method;
use error_stack::ResultExt;
use reqwest::multipart::{Form, Part};

use crate::{
    client::ClientConfig,
    consts::{
        P2P_DISPUTES_PATH, P2P_DISPUTE_AMOUNT_FORM, P2P_DISPUTE_PROOF_IMAGE_FORM,
        P2P_TRANSACTIONS_PATH, PROOF_IMAGE_MIME, TRANSACTION_ID_FORM,
    },
    errors::{ApiClientError, CustomResult},
    services::api,
    types::{
        P2PDisputeRequest, P2PDisputeResponse, P2PTransactionRequest, P2PTransactionResponse,
        ProofImage,
    },
};

/// P2P endpoint group, obtained from [`crate::BovaApi::p2p`]
#[derive(Clone, Debug)]
pub struct P2P {
    config: Arc<ClientConfig>,
}

impl P2P {
    pub(crate) fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &Arc<ClientConfig> {
        &self.config
    }

    /// Create a deposit transaction and get the payment form for the payer.
    ///
    /// `POST /p2p_transactions`, signed.
    #[instrument(skip_all, fields(flow = %Flow::CreateP2PTransaction))]
    pub async fn create_transaction(
        &self,
        request: &P2PTransactionRequest,
    ) -> CustomResult<P2PTransactionResponse, ApiClientError> {
        let request = api::build_signed_json_request(
            &self.config,
            Flow::CreateP2PTransaction,
            Method::Post,
            P2P_TRANSACTIONS_PATH,
            request,
        )?;

        api::execute(&self.config, Flow::CreateP2PTransaction, request).await
    }

    /// Report that the payer has paid. `PUT /p2p_transactions/{id}/paid`
    #[instrument(
        skip_all,
        fields(flow = %Flow::MarkP2PTransactionPaid, transaction_id = %transaction_id)
    )]
    pub async fn mark_transaction_paid(
        &self,
        transaction_id: &str,
    ) -> CustomResult<P2PTransactionResponse, ApiClientError> {
        let url = self
            .config
            .resource_endpoint(P2P_TRANSACTIONS_PATH, &[transaction_id, "paid"])
            .attach_printable_lazy(|| format!("Flow: {}", Flow::MarkP2PTransactionPaid))?;
        let request = api::build_request(Method::Put, &url);

        api::execute(&self.config, Flow::MarkP2PTransactionPaid, request).await
    }

    /// Cancel a transaction. `PUT /p2p_transactions/{id}/cancel`
    #[instrument(
        skip_all,
        fields(flow = %Flow::CancelP2PTransaction, transaction_id = %transaction_id)
    )]
    pub async fn cancel_transaction(
        &self,
        transaction_id: &str,
    ) -> CustomResult<P2PTransactionResponse, ApiClientError> {
        let url = self
            .config
            .resource_endpoint(P2P_TRANSACTIONS_PATH, &[transaction_id, "cancel"])
            .attach_printable_lazy(|| format!("Flow: {}", Flow::CancelP2PTransaction))?;
        let request = api::build_request(Method::Put, &url);

        api::execute(&self.config, Flow::CancelP2PTransaction, request).await
    }

    /// `GET /p2p_transactions/{id}`
    #[instrument(
        skip_all,
        fields(flow = %Flow::GetP2PTransaction, transaction_id = %transaction_id)
    )]
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> CustomResult<P2PTransactionResponse, ApiClientError> {
        let url = self
            .config
            .resource_endpoint(P2P_TRANSACTIONS_PATH, &[transaction_id])
            .attach_printable_lazy(|| format!("Flow: {}", Flow::GetP2PTransaction))?;
        let request = api::build_request(Method::Get, &url);

        api::execute(&self.config, Flow::GetP2PTransaction, request).await
    }

    /// Open a dispute with one or two proof images, both sent as `p2p_dispute[proof_image]` parts.
    ///
    /// `POST /p2p_disputes/from_client` as `multipart/form-data`, not signed. The request is
    /// consumed and its proof streams are dropped before this returns, on success and on error.
    #[instrument(
        skip_all,
        fields(flow = %Flow::CreateP2PDispute, transaction_id = %request.transaction_id)
    )]
    pub async fn create_dispute(
        &self,
        request: P2PDisputeRequest,
    ) -> CustomResult<P2PDisputeResponse, ApiClientError> {
        let P2PDisputeRequest {
            transaction_id,
            amount,
            proof_image,
            proof_image2,
        } = request;

        let flow = Flow::CreateP2PDispute;
        let mut form = Form::new()
            .percent_encode_noop()
            .text(TRANSACTION_ID_FORM, transaction_id)
            .text(P2P_DISPUTE_AMOUNT_FORM, amount.to_string());
        for proof_image in std::iter::once(proof_image).chain(proof_image2) {
            let part = read_proof_image(proof_image)
                .await
                .attach_printable_lazy(|| format!("Flow: {flow}"))?;
            form = form.part(P2P_DISPUTE_PROOF_IMAGE_FORM, part);
        }

        let request = api::build_form_request(&self.config, Method::Post, P2P_DISPUTES_PATH, form);

        api::execute(&self.config, flow, request).await
    }
}

/// Drains the proof stream off the async executor and closes it.
async fn read_proof_image(proof_image: ProofImage) -> CustomResult<Part, ApiClientError> {
    let (file_name, mut reader) = proof_image.into_parts();

    let bytes = tokio::task::spawn_blocking(move || {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map(|_| bytes)
    })
    .await
    .change_context(ApiClientError::SerializationFailure)?
    .change_context(ApiClientError::SerializationFailure)
    .attach_printable_lazy(|| format!("Unable to read proof image {file_name:?}"))?;

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(PROOF_IMAGE_MIME)
        .change_context(ApiClientError::SerializationFailure)
}
