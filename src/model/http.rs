/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::auth::AuthScheme;
use crate::constants::MAX_LOGGED_BODY_LEN;
use crate::error::AppError;
use crate::model::schema::parse_as;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;

/// Which authentication an operation accepts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Security {
    /// Apply whatever authenticator the client is configured with
    #[default]
    Inherit,
    /// Apply the client's authenticator only if its scheme is listed
    ///
    /// An empty list marks a public endpoint.
    Schemes(Vec<AuthScheme>),
}

impl Security {
    /// Whether a client authenticating with `scheme` should sign the request
    #[must_use]
    pub fn accepts(&self, scheme: AuthScheme) -> bool {
        match self {
            Security::Inherit => true,
            Security::Schemes(schemes) => schemes.contains(&scheme),
        }
    }
}

/// A single described HTTP call
///
/// Built with the `with_*` methods and executed by
/// [`ApiClient`](crate::application::client::ApiClient).
#[derive(Debug, Clone)]
pub struct Operation {
    /// HTTP method
    pub method: Method,
    /// Path template relative to the base URL, e.g. `/pets/{pet_id}`
    pub path: String,
    /// Values substituted into the path template
    pub path_params: Vec<(String, String)>,
    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Extra request headers
    pub headers: Vec<(String, String)>,
    /// JSON body, already serialised with wire spellings
    pub body: Option<Value>,
    /// Statuses the operation declares; empty means any 2xx
    pub expected_statuses: Vec<StatusCode>,
    /// Accepted authentication
    pub security: Security,
}

impl Operation {
    /// Creates an operation for `method` on `path`
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            expected_statuses: Vec::new(),
            security: Security::Inherit,
        }
    }

    /// Shorthand for a GET operation
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a POST operation
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Shorthand for a PUT operation
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Shorthand for a PATCH operation
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Shorthand for a DELETE operation
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set a path template value
    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.path_params.push((name.into(), value.to_string()));
        self
    }

    /// Add a query parameter
    pub fn with_query(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present
    pub fn with_optional_query<V: Display>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with_query(name, v),
            None => self,
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the JSON body
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if `body` cannot be represented as JSON.
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        let value =
            serde_json::to_value(body).map_err(|e| AppError::Serialization(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Declare a response status this operation accepts
    pub fn expect_status(mut self, status: StatusCode) -> Self {
        if !self.expected_statuses.contains(&status) {
            self.expected_statuses.push(status);
        }
        self
    }

    /// Restrict which authentication schemes may sign the request
    pub fn with_security(mut self, schemes: impl IntoIterator<Item = AuthScheme>) -> Self {
        self.security = Security::Schemes(schemes.into_iter().collect());
        self
    }

    /// Mark the operation as a public endpoint, never authenticated
    pub fn public(mut self) -> Self {
        self.security = Security::Schemes(Vec::new());
        self
    }

    /// Whether `status` satisfies this operation
    #[must_use]
    pub fn accepts_status(&self, status: StatusCode) -> bool {
        if self.expected_statuses.is_empty() {
            status.is_success()
        } else {
            self.expected_statuses.contains(&status)
        }
    }

    /// Validates the extra headers into a header map
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` for a header name or value that is not
    /// valid in HTTP.
    pub fn header_map(&self) -> Result<HeaderMap, AppError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::InvalidInput(format!("invalid header name {name:?}: {e}")))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                AppError::InvalidInput(format!("invalid value for header {name:?}: {e}"))
            })?;
            map.append(header_name, header_value);
        }
        Ok(map)
    }

    /// Renders the path template against `base`
    ///
    /// Each path segment is percent-encoded and appended to the base URL's
    /// own path. Query parameters are not included.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` if a placeholder has no value or is
    /// unterminated, if a substituted value is empty, if a segment renders to
    /// `.` or `..`, or if the template itself contains `?` or `#`. Query
    /// parameters go through [`Operation::with_query`].
    pub fn url(&self, base: &Url) -> Result<Url, AppError> {
        let segments = self
            .path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.render_segment(segment))
            .collect::<Result<Vec<_>, _>>()?;

        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                AppError::Configuration(format!("base URL {base} cannot carry a path"))
            })?;
            path.pop_if_empty();
            path.extend(segments.iter().map(String::as_str));
        }

        if self.path.ends_with('/') && !segments.is_empty() {
            // keep an explicit trailing slash
            if let Ok(mut path) = url.path_segments_mut() {
                path.push("");
            }
        }

        Ok(url)
    }

    /// Substitutes `{name}` placeholders inside one path segment
    fn render_segment(&self, segment: &str) -> Result<String, AppError> {
        let mut rendered = String::with_capacity(segment.len());
        let mut rest = segment;

        while let Some(start) = rest.find('{') {
            self.push_literal(&mut rendered, &rest[..start])?;
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                AppError::InvalidInput(format!("unterminated placeholder in path {}", self.path))
            })?;
            let name = &after[..end];
            let value = self
                .path_params
                .iter()
                .rev()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value)
                .ok_or_else(|| {
                    AppError::InvalidInput(format!(
                        "missing path parameter {name:?} for {}",
                        self.path
                    ))
                })?;
            if value.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "path parameter {name:?} must not be empty"
                )));
            }
            rendered.push_str(value);
            rest = &after[end + 1..];
        }

        self.push_literal(&mut rendered, rest)?;

        // the URL resolves `.` and `..` away
        if rendered == "." || rendered == ".." {
            return Err(AppError::InvalidInput(format!(
                "path segment {segment:?} of {} renders to {rendered:?}",
                self.path
            )));
        }
        Ok(rendered)
    }

    /// Appends literal template text, refusing URL delimiters
    fn push_literal(&self, rendered: &mut String, literal: &str) -> Result<(), AppError> {
        if literal.contains(['?', '#']) {
            return Err(AppError::InvalidInput(format!(
                "path template {} contains a query or fragment delimiter",
                self.path
            )));
        }
        rendered.push_str(literal);
        Ok(())
    }
}

/// A received HTTP response, fully buffered
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Response status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text
    pub body: String,
    /// Correlation id sent with the request
    pub request_id: String,
}

impl ApiResponse {
    /// Whether the status is 2xx
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parses the body as JSON into `T`
    ///
    /// # Errors
    /// Returns `AppError::Validation` if the body is not JSON or does not fit `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let value: Value = serde_json::from_str(&self.body)
            .map_err(|e| AppError::Validation(format!("response is not valid JSON: {e}")))?;
        parse_as(value)
    }

    /// Fails with the matching error unless `operation` accepts the status
    ///
    /// # Errors
    /// `Unauthorized` for 401, `NotFound` for 404 and `UnexpectedStatus` otherwise.
    pub fn check(&self, operation: &Operation) -> Result<(), AppError> {
        if operation.accepts_status(self.status) {
            return Ok(());
        }
        Err(AppError::from_status(self.status, truncate_body(&self.body)))
    }
}

/// Shortens a body for inclusion in logs and errors
#[must_use]
pub fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_LOGGED_BODY_LEN {
        return body.to_string();
    }
    let mut end = MAX_LOGGED_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
