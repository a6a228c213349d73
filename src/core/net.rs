// src/core/net.rs

// HTTPS GET via one shared blocking client.
// pokeapi.co rejects plain HTTP, so this wraps reqwest instead of a raw socket.

use std::error::Error;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};

/// Errors that may cross worker-thread boundaries.
pub type NetError = Box<dyn Error + Send + Sync>;

pub struct Client {
    inner: reqwest::blocking::Client,
}

impl Client {
    pub fn new() -> Result<Self, NetError> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(TIMEOUT_SECS))
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// GET `url` and decode the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NetError> {
        let body = self.get_body(url)?;
        serde_json::from_str(&body).map_err(|e| format!("Bad JSON from {}: {}", url, e).into())
    }

    /// GET `url` and return the raw body (sprite images).
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, NetError> {
        let resp = self.inner.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.bytes()?.to_vec())
    }

    fn get_body(&self, url: &str) -> Result<String, NetError> {
        let resp = self.inner.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.text()?)
    }
}
