//! Fixed-window rate limiter middleware for the `/api/*` routes.
//!
//! Each epoch second is one window. The window and its count live under one
//! lock, so a window rollover and the first request of the new window are
//! never observed separately.

use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{Extension, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::error::ApiError;

#[derive(Debug, Default)]
struct Window {
    second: u64,
    admitted: u64,
}

/// Per-second request budget shared by every clone.
#[derive(Clone)]
pub struct RateLimiter {
    max_per_sec: u64,
    window: Arc<Mutex<Window>>,
}

impl RateLimiter {
    pub fn new(max_per_sec: u64) -> Self {
        Self {
            max_per_sec,
            window: Arc::new(Mutex::new(Window::default())),
        }
    }

    /// Admit one request in the current second, if the budget allows.
    pub fn try_acquire(&self) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        self.try_acquire_at(now)
    }

    fn try_acquire_at(&self, second: u64) -> bool {
        let mut window = self
            .window
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if window.second != second {
            window.second = second;
            window.admitted = 0;
        }
        if window.admitted >= self.max_per_sec {
            return false;
        }
        window.admitted += 1;
        true
    }
}

/// Axum middleware that enforces the rate limit.
pub async fn rate_limit_middleware(
    Extension(limiter): Extension<RateLimiter>,
    req: Request,
    next: Next,
) -> Response {
    if limiter.try_acquire() {
        next.run(req).await
    } else {
        warn!(path = %req.uri().path(), "Rate limit exceeded");
        ApiError::TooManyRequests.into_response()
    }
}
