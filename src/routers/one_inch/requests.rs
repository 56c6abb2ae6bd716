use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneInchSwapRequest {
    pub chain: u32,
    /// contract address of a token to sell
    pub src: String,
    /// contract address of a token to buy
    pub dst: String,
    /// amount of a token to sell, set in minimal divisible units.
    /// Kept as a decimal string since amounts routinely exceed what a
    /// double-width float or a 53-bit-safe integer can carry
    pub amount: String,
    /// address of a seller, make sure that this address has approved to spend src
    /// in needed amount
    pub from: String,
    /// recipient address of a purchased token
    pub receiver: String,
    /// limit of price slippage you are willing to accept in percentage,
    /// may be set with decimals. &slippage=0.5 means 0.5% slippage is acceptable
    pub slippage: String,
    pub allow_partial_fill: bool,
    /// skips the aggregator's onchain simulation of the transaction
    pub disable_estimate: bool,
    pub use_permit2: bool,
    pub compatibility: bool,
    /// comma-separated whitelist of liquidity sources, e.g. "ARBITRUM_UNISWAP_V3";
    /// all sources when unset
    pub protocols: Option<String>,
}
