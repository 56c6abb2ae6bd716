pub const ARBITRUM_CHAIN_ID: u32 = 42161;

// Arbitrum One token addresses
pub const PSM_TOKEN: &str = "0x17A8541B82BF67e10B0874284b4Ae66858cb1fd5";
pub const USDC_TOKEN: &str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";
pub const USDCE_TOKEN: &str = "0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8";
pub const USDT_TOKEN: &str = "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9";
pub const WETH_TOKEN: &str = "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1";
/// Sentinel the aggregator uses for the chain's native asset
pub const NATIVE_ETH: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";
