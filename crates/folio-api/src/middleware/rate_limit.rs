//! Token bucket rate limiter middleware.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;
use tracing::{debug, warn};

use folio_core::config::RateLimitConfig;
use folio_core::error::AppError;

use crate::error::ApiError;

const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// In-memory token bucket rate limiter keyed by client address.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Client key to bucket state.
    buckets: Arc<DashMap<String, TokenBucket>>,
    /// Maximum tokens per bucket.
    max_tokens: f64,
    /// Token refill rate per second.
    refill_rate: f64,
    enabled: bool,
    trust_forwarded_for: bool,
    last_sweep: Arc<Mutex<Instant>>,
}

#[derive(Debug, Clone)]
struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// Creates a new rate limiter.
    pub fn new(max_tokens: u32, refill_rate: f64) -> Self {
        Self {
            buckets: Arc::new(DashMap::new()),
            max_tokens: f64::from(max_tokens.max(1)),
            refill_rate,
            enabled: true,
            trust_forwarded_for: false,
            last_sweep: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Creates a limiter from server settings.
    pub fn from_config(config: &RateLimitConfig) -> Self {
        let mut limiter = Self::new(config.burst, f64::from(config.per_minute) / 60.0);
        limiter.enabled = config.enabled;
        limiter.trust_forwarded_for = config.trust_forwarded_for;
        limiter
    }

    /// Time for an empty bucket to refill completely. A bucket idle this
    /// long is equivalent to a new one. `None` when buckets never refill.
    fn idle_ttl(&self) -> Option<Duration> {
        (self.refill_rate > 0.0)
            .then(|| Duration::from_secs_f64(self.max_tokens / self.refill_rate))
    }

    /// Attempts to consume a token for the given key.
    pub fn check(&self, key: &str) -> bool {
        if !self.enabled {
            return true;
        }
        let now = Instant::now();
        self.maybe_sweep(now);

        let mut bucket = self
            .buckets
            .entry(key.to_string())
            .or_insert_with(|| TokenBucket {
                tokens: self.max_tokens,
                last_refill: now,
            });

        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.refill_rate).min(self.max_tokens);
        bucket.last_refill = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Sweep at most once per refill window.
    fn maybe_sweep(&self, now: Instant) {
        let Some(ttl) = self.idle_ttl() else {
            return;
        };
        let Ok(mut last) = self.last_sweep.try_lock() else {
            return;
        };
        if now.duration_since(*last) >= ttl.max(MIN_SWEEP_INTERVAL) {
            *last = now;
            drop(last);
            self.sweep(now);
        }
    }

    /// Drop buckets idle for a full refill window.
    fn sweep(&self, now: Instant) {
        let Some(ttl) = self.idle_ttl() else {
            return;
        };
        let before = self.buckets.len();
        self.buckets
            .retain(|_, bucket| now.duration_since(bucket.last_refill) < ttl);
        let evicted = before.saturating_sub(self.buckets.len());
        if evicted > 0 {
            debug!(evicted, remaining = self.buckets.len(), "Evicted idle rate limit buckets");
        }
    }

    /// Number of tracked clients.
    pub fn tracked_clients(&self) -> usize {
        self.buckets.len()
    }

    /// Client key: the peer address, or the first `X-Forwarded-For` hop when
    /// the proxy is trusted.
    fn client_key(&self, request: &Request<Body>) -> String {
        if self.trust_forwarded_for {
            if let Some(forwarded) = request
                .headers()
                .get("x-forwarded-for")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|v| !v.is_empty())
            {
                return forwarded.to_string();
            }
        }
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Rejects requests over the limit with 429.
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let key = limiter.client_key(&request);
    if !limiter.check(&key) {
        warn!(client = %key, path = %request.uri().path(), "Rate limit exceeded");
        return ApiError(AppError::rate_limited(
            "Too many requests. Please try again later.",
        ))
        .into_response();
    }
    next.run(request).await
}
