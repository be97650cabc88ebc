//! Mass transactions: payouts to cards

use std::sync::Arc;

use bova_env::{logger::instrument, Flow};
use common_utils::request::Method;
use error_stack::ResultExt;

use crate::{
    client::ClientConfig,
    consts::MASS_TRANSACTIONS_PATH,
    errors::{ApiClientError, CustomResult},
    services::api,
    types::{MassTransactionRequest, MassTransactionResponse},
};

/// Mass transaction endpoint group, obtained from [`crate::BovaApi::mass_transaction`]
#[derive(Clone, Debug)]
pub struct MassTransaction {
    config: Arc<ClientConfig>,
}

impl MassTransaction {
    pub(crate) fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &Arc<ClientConfig> {
        &self.config
    }

    /// Create a payout to a card. `POST /mass_transactions`, signed.
    #[instrument(skip_all, fields(flow = %Flow::CreateMassTransaction))]
    pub async fn create_transaction(
        &self,
        request: &MassTransactionRequest,
    ) -> CustomResult<MassTransactionResponse, ApiClientError> {
        let request = api::build_signed_json_request(
            &self.config,
            Flow::CreateMassTransaction,
            Method::Post,
            MASS_TRANSACTIONS_PATH,
            request,
        )?;

        api::execute(&self.config, Flow::CreateMassTransaction, request).await
    }

    /// `GET /mass_transactions/{id}`
    #[instrument(
        skip_all,
        fields(flow = %Flow::GetMassTransaction, transaction_id = %transaction_id)
    )]
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> CustomResult<MassTransactionResponse, ApiClientError> {
        let url = self
            .config
            .resource_endpoint(MASS_TRANSACTIONS_PATH, &[transaction_id])
            .attach_printable_lazy(|| format!("Flow: {}", Flow::GetMassTransaction))?;
        let request = api::build_request(Method::Get, &url);

        api::execute(&self.config, Flow::GetMassTransaction, request).await
    }
}
