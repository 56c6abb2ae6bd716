use crate::error::{Error, FetcherResult};
use error_stack::{ResultExt, report};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::value::Value;
use tracing::error;

/// Converts a JSON object into a URL query string with parameters sorted
/// alphabetically by key. `Null` entries are dropped, which is how optional
/// parameters stay out of the request entirely.
pub fn value_to_sorted_querystring(value: &Value) -> FetcherResult<String> {
    let mut pairs: Vec<(String, String)> = match value {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !matches!(v, Value::Null))
            .map(|(k, v)| {
                let value_str = match v {
                    Value::String(s) => s.to_string(),
                    _ => v.to_string(),
                };
                (k.clone(), value_str)
            })
            .collect(),
        _ => {
            return Err(report!(Error::ParseError)
                .attach_printable(format!("Invalid JSON Object: {value:?}")));
        }
    };

    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<String>>()
        .join("&"))
}

/// Deserializes a JSON response body when the status is below 400, otherwise
/// relays the error body into the report. No retry at this layer.
pub async fn handle_reqwest_response<T: DeserializeOwned>(response: Response) -> FetcherResult<T> {
    let response_code: u16 = response.status().as_u16();
    match response_code {
        0..=399 => response.json().await.change_context(Error::SerdeDeserialize(
            "Failed to deserialize JSON".to_string(),
        )),
        _ => {
            let error_body = response.text().await.change_context(Error::ReqwestError(
                "Failed to get text from response".to_string(),
            ))?;

            error!("Error Body: {}", &error_body);

            Err(report!(Error::ReqwestError(error_body)))
        }
    }
}
