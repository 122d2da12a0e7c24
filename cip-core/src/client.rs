//! HTTP client for the climate API.
//!
//! One `ApiClient` is built at startup and shared (cheaply cloned) by every
//! view. Each call is attempted exactly once; failures are returned to the
//! caller, which decides how to degrade the view.

use crate::cluster::{ClassifyRequest, ClassifyResponse, ClusterPoint};
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::prediction::{FeatureVector, PollutionPrediction, RiskPrediction};
use crate::weather::{ForecastResponse, Snapshot};
use crate::City;
use log::{debug, error, info};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Response of `GET /`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    base_url: String,
}

/// Origin of the page the app was served from.
#[cfg(target_arch = "wasm32")]
fn default_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| crate::config::DEFAULT_NATIVE_ORIGIN.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_origin() -> String {
    crate::config::DEFAULT_NATIVE_ORIGIN.to_string()
}

impl ApiClient {
    /// Build a client, joining a relative base path onto the default origin
    /// (the page origin in the browser, the local backend natively).
    pub fn new(config: ApiConfig) -> Result<Self> {
        let origin = default_origin();
        Self::with_origin(config, &origin)
    }

    pub fn with_origin(config: ApiConfig, origin: &str) -> Result<Self> {
        let base_url = config.base_url(origin);
        reqwest::Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Http(e.to_string()))?;
        debug!("API client using base URL {}", base_url);
        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, query: &[(&str, &str)]) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {} {:?}", method, url, query);
        let builder = self
            .client
            .request(method, url)
            .timeout(self.config.timeout);
        if query.is_empty() {
            builder
        } else {
            builder.query(query)
        }
    }

    async fn send<T: DeserializeOwned>(&self, path: &str, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(|e| {
            let err = self.transport_error(e);
            error!("{} - {}", path, err);
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::Status {
                status: status.as_u16(),
                body,
            };
            error!("{} - {}", path, err);
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|e| {
            let err = self.transport_error(e);
            error!("{} - {}", path, err);
            err
        })?;
        let parsed = serde_json::from_slice(&bytes).map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            error!("{} - {}", path, err);
            err
        })?;
        info!("{} - Success", path);
        Ok(parsed)
    }

    fn transport_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(self.config.timeout)
        } else {
            ApiError::Http(e.to_string())
        }
    }

    /// GET `path` with query parameters and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        self.send(path, self.request(Method::GET, path, query)).await
    }

    /// POST `path` with query parameters and an optional JSON body.
    ///
    /// `None` sends no body at all.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T> {
        let builder = self.request(Method::POST, path, query);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        self.send(path, builder).await
    }

    /// `GET /weather/current?city={name}`
    pub async fn current_weather(&self, city: City) -> Result<Snapshot> {
        self.get("/weather/current", &[("city", city.name())]).await
    }

    /// `POST /forecast/weather?city={name}` with an empty body.
    pub async fn forecast(&self, city: City) -> Result<ForecastResponse> {
        self.post::<_, ()>("/forecast/weather", &[("city", city.name())], None)
            .await
    }

    /// `POST /predict/air-quality`
    pub async fn predict_air_quality(&self, features: &FeatureVector) -> Result<RiskPrediction> {
        self.post("/predict/air-quality", &[], Some(features)).await
    }

    /// `POST /predict/pollution`
    pub async fn predict_pollution(&self, features: &FeatureVector) -> Result<PollutionPrediction> {
        self.post("/predict/pollution", &[], Some(features)).await
    }

    /// `GET /predict/analysis`
    pub async fn analysis(&self) -> Result<Vec<ClusterPoint>> {
        self.get("/predict/analysis", &[]).await
    }

    /// `POST /cluster/cities`
    pub async fn classify_city(&self, request: &ClassifyRequest) -> Result<ClassifyResponse> {
        self.post("/cluster/cities", &[], Some(request)).await
    }

    /// `GET /`
    pub async fn status(&self) -> Result<ServiceStatus> {
        self.get("/", &[]).await
    }
}
