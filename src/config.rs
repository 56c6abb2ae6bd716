use crate::routers::constants::{ARBITRUM_CHAIN_ID, PSM_TOKEN, WETH_TOKEN};
use crate::routers::one_inch::requests::OneInchSwapRequest;

const DEFAULT_AMOUNT: &str = "25000000000000000000000";
const DEFAULT_FROM: &str = "0xD59Eb7E224Ad741C06c26d4670Fc0C2D89121DE3";
const DEFAULT_RECEIVER: &str = "0xB9927a561527Ac7Bb7a93cDc80ba3c7F14EBDD1e";
const DEFAULT_SLIPPAGE: &str = "5";

/// Everything one run needs, assembled once at startup. The credential and
/// the swap parameters are handed to the client explicitly instead of being
/// read off the environment inside the call path.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Bearer credential for the aggregator API. Not validated locally;
    /// an unset variable yields the empty string and the remote rejects it.
    pub api_key: String,
    pub swap: OneInchSwapRequest,
}

impl FetcherConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            api_key: lookup("API_TOKEN").unwrap_or_default(),
            swap: OneInchSwapRequest {
                chain: ARBITRUM_CHAIN_ID,
                src: var("SRC_TOKEN", PSM_TOKEN),
                dst: var("DST_TOKEN", WETH_TOKEN),
                amount: var("AMOUNT", DEFAULT_AMOUNT),
                from: var("FROM_ADDRESS", DEFAULT_FROM),
                receiver: var("RECEIVER", DEFAULT_RECEIVER),
                slippage: var("SLIPPAGE", DEFAULT_SLIPPAGE),
                allow_partial_fill: false,
                disable_estimate: true,
                use_permit2: false,
                compatibility: true,
                protocols: lookup("PROTOCOLS"),
            },
        }
    }
}
