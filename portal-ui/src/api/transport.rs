//! `gloo-net` transport

use async_trait::async_trait;
use gloo_net::http::Request;
use hospital_portal::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

/// Fetch-API transport for the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(HttpResponse::new(status, body))
    }
}
