//! HTTP implementation of the interview backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! [`SourceError::Unavailable`], which the fallback turns into synthetic data.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies each map to
//! their own [`SourceError`] variant. Pages never see them: they talk to
//! [`interview_source`], which logs the error and substitutes a mock payload.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use prep::source::{
    FallbackSource, InitializeRequest, InitializeResponse, InterviewContext, InterviewSource, InterviewStatus, LogRequest,
    SourceError, SyntheticSource,
};

use crate::config::AppConfig;
use crate::util::clock;

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> SourceError {
    SourceError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
fn check(resp: &gloo_net::http::Response) -> Result<(), SourceError> {
    if resp.ok() { Ok(()) } else { Err(SourceError::Status(resp.status())) }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, SourceError> {
    check(&resp)?;
    resp.json::<T>().await.map_err(|e| SourceError::Decode(e.to_string()))
}

/// Talks to `/api/interview/*` on the serving origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteSource;

impl InterviewSource for RemoteSource {
    async fn initialize(&self, request: &InitializeRequest) -> Result<InitializeResponse, SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(prep::source::INITIALIZE_ENDPOINT)
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(SourceError::Unavailable)
        }
    }

    async fn log_message(&self, room: &str, request: &LogRequest) -> Result<(), SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let url = prep::source::log_endpoint(room);
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            check(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (room, request);
            Err(SourceError::Unavailable)
        }
    }

    async fn status(&self, interview_id: &str) -> Result<InterviewStatus, SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let url = prep::source::status_endpoint(interview_id);
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(network)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = interview_id;
            Err(SourceError::Unavailable)
        }
    }

    async fn context(&self, room: &str) -> Result<InterviewContext, SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let url = prep::source::context_endpoint(room);
            let resp = gloo_net::http::Request::get(&url).send().await.map_err(network)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = room;
            Err(SourceError::Unavailable)
        }
    }
}

/// Backend as pages see it: remote first, synthetic on any failure.
#[must_use]
pub fn interview_source(config: &AppConfig) -> FallbackSource<RemoteSource> {
    FallbackSource::new(config.source_mode, RemoteSource, SyntheticSource::new(clock::now(), clock::seed()))
}
