// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for SafeTech devices.

use std::time::Duration;

use reqwest::Client;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

/// Configuration for a SafeTech device connection.
///
/// The device listens on port 5333 and each request runs against a
/// fixed timeout, 5 seconds by default.
///
/// # Examples
///
/// ```
/// use safetec_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.42");
///
/// let config = HttpConfig::new("192.168.1.42")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Port the device listens on.
    pub const DEFAULT_PORT: u16 = 5333;
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the device
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty, or
    /// `ProtocolError::Http` if the client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host must not be empty".to_string(),
            ));
        }

        let base_url = self.base_url();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            timeout: self.timeout,
        })
    }
}

/// HTTP client for communicating with a SafeTech device.
///
/// Owns its `reqwest::Client`; connection resources are scoped to the
/// handle and released when it is dropped.
///
/// # Examples
///
/// ```no_run
/// use safetec_lib::protocol::{HttpClient, Protocol};
/// use safetec_lib::command::ShutoffCommand;
///
/// # async fn example() -> safetec_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.42")?;
/// let response = client.send_command(&ShutoffCommand::Get).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host.
    ///
    /// A bare hostname or IP gets the device scheme and port 5333
    /// appended; an address starting with `http://` is used verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty, or
    /// `ProtocolError::Http` if the client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host must not be empty".to_string(),
            ));
        }

        if host.starts_with("http://") || host.starts_with("https://") {
            let client = Client::builder()
                .timeout(HttpConfig::DEFAULT_TIMEOUT)
                .build()
                .map_err(ProtocolError::Http)?;
            Ok(Self {
                base_url: host,
                client,
                timeout: HttpConfig::DEFAULT_TIMEOUT,
            })
        } else {
            HttpConfig::new(host).into_client()
        }
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the full URL for a command.
    fn build_url<C: Command>(&self, command: &C) -> String {
        format!("{}{}", self.base_url, command.to_path())
    }

    /// Maps a transport error, reporting timeouts distinctly whether
    /// they expire while sending or while reading the response body.
    fn classify(&self, error: reqwest::Error) -> ProtocolError {
        if error.is_timeout() {
            ProtocolError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            ProtocolError::Http(error)
        }
    }
}

impl Protocol for HttpClient {
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        let url = self.build_url(command);

        tracing::debug!(url = %url, "sending request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;

        tracing::debug!(body = %body, "received response");

        Ok(CommandResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ShutoffCommand;
    use crate::types::ShutoffState;

    #[test]
    fn config_default_values() {
        let config = HttpConfig::new("192.168.1.42");
        assert_eq!(config.host(), "192.168.1.42");
        assert_eq!(config.port(), 5333);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn config_base_url() {
        let config = HttpConfig::new("192.168.1.42");
        assert_eq!(config.base_url(), "http://192.168.1.42:5333");
    }

    #[test]
    fn config_custom_port_and_timeout() {
        let config = HttpConfig::new("valve.local")
            .with_port(8080)
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.base_url(), "http://valve.local:8080");
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn config_rejects_empty_host() {
        let result = HttpConfig::new("").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn client_rejects_empty_host() {
        assert!(matches!(
            HttpClient::new("  "),
            Err(ProtocolError::InvalidAddress(_))
        ));
    }

    #[test]
    fn client_appends_device_port() {
        let client = HttpClient::new("192.168.1.42").unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.42:5333");
    }

    #[test]
    fn client_keeps_explicit_url() {
        let client = HttpClient::new("http://127.0.0.1:3333").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:3333");
    }

    #[test]
    fn build_url_for_command() {
        let client = HttpClient::new("192.168.1.42").unwrap();
        let url = client.build_url(&ShutoffCommand::Set(ShutoffState::Open));
        assert_eq!(url, "http://192.168.1.42:5333/safe-tec/set/AB/1");
    }
}
