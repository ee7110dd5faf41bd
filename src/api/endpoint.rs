//! Explorer service routes.

use std::fmt;

use reqwest::{Method, Url};

use crate::api::error::ApiError;

/// One call the client can make against the explorer service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    CreateModel { name: &'a str },
    UpdateModel { name: &'a str },
    ListModels,
    Search { model: &'a str, term: &'a str },
    SeedUpload { model: &'a str },
    ModelStats { model: &'a str },
}

impl<'a> Endpoint<'a> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::UpdateModel { .. } | Endpoint::SeedUpload { .. } => Method::POST,
            _ => Method::GET,
        }
    }

    /// Whether the route lives under the configured API prefix.
    fn is_prefixed(&self) -> bool {
        !matches!(self, Endpoint::Search { .. })
    }

    /// Path segments after the prefix, unencoded.
    fn segments(&self) -> Vec<&'a str> {
        match *self {
            Endpoint::CreateModel { name } => vec!["classify", "createnew", name],
            Endpoint::UpdateModel { name } => vec!["classify", "update", name],
            Endpoint::ListModels => vec!["classify", "listmodels"],
            Endpoint::Search { model, term } => vec!["search", model, term],
            Endpoint::SeedUpload { model } => vec!["cmd", "seed", "upload", model],
            Endpoint::ModelStats { model } => vec!["classify", "stats", model],
        }
    }

    /// Absolute URL for this endpoint.
    ///
    /// Each path parameter is percent-encoded as a single segment, so a
    /// search term containing `/` or spaces cannot change the route.
    /// Parameters that are `.` or `..` would be dropped or resolved as dot
    /// segments, so they are rejected.
    pub fn url(&self, base: &Url, api_prefix: &str) -> Result<Url, ApiError> {
        let segments = self.segments();
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ApiError::InvalidUrl {
                url: base.to_string(),
                reason: format!("path parameter '{dot}' is a dot segment"),
            });
        }

        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: base.to_string(),
                reason: "cannot be used as a base".to_string(),
            })?;
            path.pop_if_empty();
            if self.is_prefixed() {
                path.extend(api_prefix.split('/').filter(|s| !s.is_empty()));
            }
            path.extend(segments);
        }
        Ok(url)
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method(), self.segments().join("/"))
    }
}
