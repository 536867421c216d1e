use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::wizard::{FormTransport, SubmitError};

/// Posts URL-encoded form bodies with `fetch`, giving up after `timeout_ms`.
pub struct GlooTransport {
    url: String,
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(url: impl Into<String>, timeout_ms: u32) -> Self {
        Self { url: url.into(), timeout_ms }
    }
}

impl FormTransport for GlooTransport {
    async fn post_form(&self, body: String) -> Result<(), SubmitError> {
        let request = Request::post(&self.url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send();

        match select(Box::pin(request), Box::pin(TimeoutFuture::new(self.timeout_ms))).await {
            Either::Left((Ok(response), _)) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(SubmitError::Rejected(response.status()))
                }
            }
            Either::Left((Err(e), _)) => Err(SubmitError::Network(e.to_string())),
            Either::Right(_) => Err(SubmitError::TimedOut(self.timeout_ms)),
        }
    }
}
