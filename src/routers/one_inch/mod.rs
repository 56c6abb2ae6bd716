pub mod one_inch;
pub mod requests;
pub mod responses;

// https://portal.1inch.dev/documentation/apis/swap/classic-swap/introduction
const BASE_1INCH_API_URL: &str = "https://api.1inch.dev/swap/v6.0";
