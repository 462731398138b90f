//! Client for the SurveyGizmo (Alchemer) REST API.
//!
//! Every remote resource is exposed through a small handler obtained from
//! [`SurveyGizmo`]; handlers share one CRUD implementation and return raw
//! [`serde_json::Value`] payloads, leaving response modeling to the
//! caller. Operation parameters, identifiers and credentials all travel
//! in the query string, matching how the upstream API works.
//!
//! # Quick start
//!
//! ```no_run
//! use surveygizmo::{Params, Resource, SurveyGizmo};
//!
//! #[tokio::main]
//! async fn main() -> surveygizmo::Result<()> {
//!     let api = SurveyGizmo::new("api-token", "api-token-secret")?;
//!
//!     // Surveys on the account
//!     let surveys = api.survey().list(Params::new()).await?;
//!     println!("{}", surveys["total_count"]);
//!
//!     // Responses of one survey
//!     let responses = api
//!         .survey_response()
//!         .list(123456, Params::new().set("resultsperpage", 50))
//!         .await?;
//!     println!("{}", responses["data"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Filters
//!
//! List calls accept any number of field filters, encoded the way the
//! API expects them:
//!
//! ```no_run
//! # use surveygizmo::{Params, SurveyGizmo};
//! # #[tokio::main]
//! # async fn main() -> surveygizmo::Result<()> {
//! # let api = SurveyGizmo::new("api-token", "api-token-secret")?;
//! let recent = api
//!     .survey_response()
//!     .list(
//!         123456,
//!         Params::new()
//!             .filter("datesubmitted", ">=", "2024-01-01")
//!             .filter("status", "=", "Complete"),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Credentials can also come from `SURVEYGIZMO_API_TOKEN` and
//! `SURVEYGIZMO_API_TOKEN_SECRET` via [`SurveyGizmo::from_env`]. The
//! builder covers the remaining knobs:
//!
//! ```no_run
//! use surveygizmo::{ApiVersion, SurveyGizmo};
//!
//! # fn main() -> surveygizmo::Result<()> {
//! let api = SurveyGizmo::builder()
//!     .api_token("api-token")
//!     .api_token_secret("api-token-secret")
//!     .api_version(ApiVersion::V5)
//!     .base_url("https://restapi.alchemer.eu")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
mod http;
pub mod params;
pub mod resource;

pub use auth::TokenAuth;
pub use client::{SurveyGizmo, SurveyGizmoBuilder};
pub use config::{ApiVersion, Config, ResponseType};
pub use error::{Result, SurveyGizmoError};
pub use params::{Filter, Params};
pub use resource::{Resource, ResourceDef};
