use serde::Deserialize;

/// Only the transaction payload is consumed; every other field the swap
/// endpoint returns (dstAmount, gas breakdowns, route) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OneInchSwapResponse {
    pub tx: OneInchTx,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OneInchTx {
    pub data: String,
}
