use crate::core::VsmeError;

#[cfg(feature = "test-mode")]
use std::env;

/// Turn a non-2xx response into [`VsmeError::Status`].
pub(crate) fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, VsmeError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(VsmeError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        })
    }
}

/// Read the response body as text.
/// In `test-mode`, if `VSME_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
) -> Result<String, VsmeError> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("VSME_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, "json", &text)
        {
            #[cfg(feature = "tracing")]
            tracing::warn!(endpoint = _endpoint, key = _key, error = %e, "failed to record fixture");
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }

    Ok(text)
}

/// Check the status, read the body and decode it as JSON.
pub(crate) async fn get_json<T>(
    resp: reqwest::Response,
    endpoint: &str,
    key: &str,
) -> Result<T, VsmeError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let resp = ensure_success(resp)?;
    let text = get_text(resp, endpoint, key).await?;
    serde_json::from_str(&text).map_err(|e| VsmeError::Data(format!("{endpoint} json parse: {e}")))
}
