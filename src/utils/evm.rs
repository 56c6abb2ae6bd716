use crate::error::{Error, FetcherResult};
use error_stack::report;

/// Removes the leading 4-byte function selector from hex calldata and
/// re-prefixes the remainder with "0x".
///
/// Throws if the input is not "0x"-prefixed hex of at least 10 characters
pub fn strip_function_selector(call_data: &str) -> FetcherResult<String> {
    let hex = call_data.strip_prefix("0x").ok_or_else(|| {
        report!(Error::MalformedResponse(format!(
            "Calldata is not 0x-prefixed: {call_data}"
        )))
    })?;

    if hex.len() < 8 {
        return Err(report!(Error::MalformedResponse(format!(
            "Calldata {call_data} is shorter than a function selector"
        ))));
    }

    // The payload is server-supplied; anything outside hex must land on the
    // error path, and the check also keeps the byte slice below on a char
    // boundary.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(report!(Error::MalformedResponse(format!(
            "Calldata {call_data} is not hex"
        ))));
    }

    Ok(format!("0x{}", &hex[8..]))
}
