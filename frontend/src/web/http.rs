//! HTTP 请求封装模块
//!
//! `fetch`-backed transport for the client core. Non-2xx answers are returned
//! as responses; only transport failures become errors.

use async_trait::async_trait;
use grievance_client::{ClientError, ClientResult, HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Browser HTTP client
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

fn js_error(context: &str, err: JsValue) -> String {
    format!("{}: {:?}", context, err)
}

#[async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let headers = Headers::new()
            .map_err(|e| ClientError::network(js_error("Failed to create headers", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| ClientError::network(js_error("Failed to set header", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| ClientError::network(js_error("Invalid request", e)))?;

        let window =
            web_sys::window().ok_or_else(|| ClientError::network("No window object available"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ClientError::network(js_error("Fetch failed", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ClientError::decode(js_error("Not a Response", e)))?;

        let status = response.status();
        let promise = response
            .text()
            .map_err(|e| ClientError::decode(js_error("Failed to read body", e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| ClientError::network(js_error("Failed to read body", e)))?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
