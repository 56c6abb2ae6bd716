use error_stack::ResultExt as _;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::{
    error::{Error, FetcherResult},
    network::http::{handle_reqwest_response, value_to_sorted_querystring},
    routers::one_inch::{
        BASE_1INCH_API_URL, requests::OneInchSwapRequest, responses::OneInchSwapResponse,
    },
    utils::evm::strip_function_selector,
};

/// Client for the 1inch classic-swap endpoint. Holds the bearer credential
/// so nothing on the call path reads ambient environment state.
#[derive(Debug, Clone)]
pub struct OneInchClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OneInchClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_1INCH_API_URL.to_string(),
        }
    }

    /// Points the client at a different API host. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Requests a swap quote for the given parameters. One GET, no retry.
    pub async fn swap(&self, request: &OneInchSwapRequest) -> FetcherResult<OneInchSwapResponse> {
        let query = json!({
            "src": request.src,
            "dst": request.dst,
            "amount": request.amount,
            "from": request.from,
            "receiver": request.receiver,
            "slippage": request.slippage,
            "allowPartialFill": request.allow_partial_fill,
            "disableEstimate": request.disable_estimate,
            "usePermit2": request.use_permit2,
            "compatibility": request.compatibility,
            "protocols": request.protocols,
        });

        let query_string = value_to_sorted_querystring(&query)?;

        let chain = request.chain;

        let url = format!("{}/{chain}/swap?{query_string}", self.base_url);

        debug!("1inch swap request: {url}");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .send()
            .await
            .change_context(Error::ReqwestError("Error in 1inch request".to_string()))?;

        handle_reqwest_response(response).await
    }

    /// Requests a swap quote and returns its calldata with the 4-byte
    /// function selector stripped, ready to be placed behind the caller's
    /// own selector downstream.
    pub async fn swap_calldata(&self, request: &OneInchSwapRequest) -> FetcherResult<String> {
        let swap_response = self.swap(request).await?;
        strip_function_selector(&swap_response.tx.data)
    }
}
