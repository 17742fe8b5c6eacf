// ABOUTME: Remote catalog error types and the unified primary-fetch failure
// ABOUTME: ApiError classifies transport, status and decode failures; FetchError hides them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure talking to the remote recipe catalog.
///
/// Variants carry rendered messages rather than the transport's own error
/// types so the value stays `Clone` and can be shared between callers
/// awaiting the same in-flight resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request URL could not be constructed (programmer error)
    #[error("bad endpoint {endpoint}: {reason}")]
    BadEndpoint {
        /// Endpoint path that failed to build
        endpoint: String,
        /// Parser message
        reason: String,
    },
    /// Network unreachable, timeout, or connection reset
    #[error("transport failure: {0}")]
    Transport(String),
    /// Catalog answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body (possibly empty)
        body: String,
    },
    /// Payload did not match the expected shape
    #[error("decode failure: {0}")]
    Decode(String),
}

impl ApiError {
    /// Create a bad-endpoint error
    #[must_use]
    pub fn bad_endpoint(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BadEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a non-success status error
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// The one condition callers see when primary recipe data cannot be loaded.
///
/// The display text is deliberately generic; the classified cause is kept as
/// the error source for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Primary detail or listing fetch failed; re-issuing may succeed
    #[error("couldn't load {resource}, please try again")]
    FetchFailed {
        /// What was being loaded, e.g. `recipe 42`
        resource: String,
        /// Classified cause
        #[source]
        source: ApiError,
    },
}

impl FetchError {
    /// Wrap a catalog error for the given resource
    #[must_use]
    pub fn fetch_failed(resource: impl Into<String>, source: ApiError) -> Self {
        Self::FetchFailed {
            resource: resource.into(),
            source,
        }
    }

    /// The classified cause
    #[must_use]
    pub const fn cause(&self) -> &ApiError {
        match self {
            Self::FetchFailed { source, .. } => source,
        }
    }
}
