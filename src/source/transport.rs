//! HTTP transport seam for the resolver.
//!
//! The resolver's branching (probe threshold, mode selection, fallback)
//! is pure decision logic; everything browser-specific sits behind this
//! trait so the decisions can run on the host under test.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::error::SourceError;
use super::remote::FALLBACK_DELAY_MS;

pub(crate) trait Transport {
	/// Fetch a URL and return the response body as text.
	async fn get(&self, url: &str) -> Result<String, SourceError>;

	/// Hold the loading state visible long enough to register. No-op
	/// outside the browser.
	async fn settle(&self) {}
}

/// The real transport, backed by the browser fetch API.
pub(crate) struct WebTransport;

impl Transport for WebTransport {
	async fn get(&self, url: &str) -> Result<String, SourceError> {
		let window =
			web_sys::window().ok_or_else(|| SourceError::Fetch("no window".to_string()))?;

		let response = JsFuture::from(window.fetch_with_str(url))
			.await
			.map_err(js_error)?;
		let response: Response = response
			.dyn_into()
			.map_err(|_| SourceError::Fetch("fetch did not yield a Response".to_string()))?;

		if !response.ok() {
			return Err(SourceError::BadStatus(response.status()));
		}

		let body = JsFuture::from(response.text().map_err(js_error)?)
			.await
			.map_err(js_error)?;
		Ok(body.as_string().unwrap_or_default())
	}

	async fn settle(&self) {
		minimum_display_delay().await;
	}
}

fn js_error(value: JsValue) -> SourceError {
	SourceError::Fetch(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Resolve after [`FALLBACK_DELAY_MS`] via a `setTimeout`-backed promise.
async fn minimum_display_delay() {
	let promise = js_sys::Promise::new(&mut |resolve, _reject| {
		if let Some(window) = web_sys::window() {
			let _ = window
				.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, FALLBACK_DELAY_MS);
		}
	});
	let _ = JsFuture::from(promise).await;
}
