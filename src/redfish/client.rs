use std::time::Duration;

use log::{debug, info, warn};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use super::types::{ChassisData, Collection, Link, PowerData, ServiceRoot, SystemData, ThermalData};
use super::TelemetrySource;
use crate::error::{CheckError, Result};

const SERVICE_ROOT: &str = "/redfish/v1/";
const DEFAULT_SYSTEMS: &str = "/redfish/v1/Systems";
const DEFAULT_CHASSIS: &str = "/redfish/v1/Chassis";
const DEFAULT_SESSIONS: &str = "/redfish/v1/SessionService/Sessions";
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Connection settings for a management board
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub host: String,
    /// `None` uses the HTTPS default port
    pub port: Option<u16>,
    pub username: String,
    pub password: String,
    pub insecure_ssl: bool,
    pub timeout: Duration,
}

impl ConnectionConfig {
    pub fn base_url(&self) -> Result<Url> {
        let authority = match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        };
        Ok(Url::parse(&format!("https://{}", authority))?)
    }
}

#[derive(Debug)]
struct Session {
    token: String,
    location: Option<String>,
}

/// Blocking Redfish client using session based authentication
pub struct RedfishClient {
    http: Client,
    base: Url,
    username: String,
    password: String,
    root: ServiceRoot,
    session: Option<Session>,
}

impl RedfishClient {
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure_ssl)
            .build()?;

        Ok(Self {
            http,
            base: config.base_url()?,
            username: config.username.clone(),
            password: config.password.clone(),
            root: ServiceRoot::default(),
            session: None,
        })
    }

    pub fn hostname(&self) -> &str {
        self.base.host_str().unwrap_or_default()
    }

    /// Read the service root to discover the collection endpoints.
    pub fn initialise(&mut self) -> Result<()> {
        self.root = self.get_json(SERVICE_ROOT)?;
        debug!(
            "Service root of {}: systems={:?} chassis={:?}",
            self.hostname(),
            link_path(self.root.systems.as_ref()),
            link_path(self.root.chassis.as_ref())
        );
        Ok(())
    }

    /// Open a session and keep its token for all further requests.
    pub fn login(&mut self) -> Result<()> {
        let sessions = self
            .root
            .links
            .as_ref()
            .and_then(|links| link_path(links.sessions.as_ref()))
            .unwrap_or(DEFAULT_SESSIONS)
            .to_string();
        let url = self.base.join(&sessions)?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .header("Accept", "application/json")
            .json(&json!({
                "UserName": self.username,
                "Password": self.password,
            }))
            .send()?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CheckError::auth(format!(
                "user {} was rejected with HTTP status {}",
                self.username,
                status.as_u16()
            )));
        }
        if !status.is_success() {
            return Err(CheckError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let headers = response.headers();
        let token = headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CheckError::auth("no X-Auth-Token returned for new session"))?
            .to_string();
        let location = headers
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        info!("Logged in to {} as {}", self.hostname(), self.username);
        self.session = Some(Session { token, location });
        Ok(())
    }

    /// Close the session opened by [`RedfishClient::login`].
    pub fn logout(&mut self) -> Result<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        let Some(location) = session.location else {
            warn!("Session on {} has no location, cannot log out", self.hostname());
            return Ok(());
        };

        let url = self.base.join(&location)?;
        debug!("DELETE {}", url);
        let response = self
            .http
            .delete(url)
            .header(AUTH_TOKEN_HEADER, session.token)
            .send()?;

        if !response.status().is_success() {
            return Err(CheckError::Status {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Some(session) => request.header(AUTH_TOKEN_HEADER, &session.token),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base.join(path)?;
        debug!("GET {}", url);

        let response = self
            .authorized(self.http.get(url))
            .header("Accept", "application/json")
            .send()?;

        if !response.status().is_success() {
            return Err(CheckError::Status {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn members(&self, path: &str) -> Result<Vec<String>> {
        let collection: Collection = self.get_json(path)?;
        Ok(collection
            .members
            .iter()
            .filter_map(|member| link_path(Some(member)))
            .map(str::to_string)
            .collect())
    }
}

fn link_path(link: Option<&Link>) -> Option<&str> {
    link.and_then(|l| l.odata_id.as_deref())
        .filter(|p| !p.is_empty())
}

impl TelemetrySource for RedfishClient {
    fn systems(&self) -> Result<Vec<String>> {
        self.members(link_path(self.root.systems.as_ref()).unwrap_or(DEFAULT_SYSTEMS))
    }

    fn system(&self, id: &str) -> Result<SystemData> {
        self.get_json(id)
    }

    fn chassis(&self) -> Result<Vec<String>> {
        self.members(link_path(self.root.chassis.as_ref()).unwrap_or(DEFAULT_CHASSIS))
    }

    fn chassis_data(&self, id: &str) -> Result<ChassisData> {
        self.get_json(id)
    }

    fn power(&self, id: &str) -> Result<PowerData> {
        self.get_json(id)
    }

    fn thermal(&self, id: &str) -> Result<ThermalData> {
        self.get_json(id)
    }
}
