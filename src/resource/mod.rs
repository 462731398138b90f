//! Resource abstraction layer.
//!
//! Every remote resource type is described by a [`ResourceDef`]: a path
//! template with `{key}` placeholders plus the ordered list of identifier
//! keys the template needs. The [`Resource`] trait turns a definition into
//! the standard operation set (list, get, create, update, delete, copy);
//! handler modules add wrappers that name their required identifiers and
//! disable the operations their endpoint does not provide.
//!
//! # Architecture
//!
//! - [`ResourceDef`] - declarative endpoint description
//! - [`Resource`] - shared CRUD behavior over a definition
//! - one handler module per endpoint, re-exported below
//!
//! Identifiers are substituted into the path and also left in the query
//! string, which is how the upstream API expects them.

use std::future::Future;

use reqwest::Method;
use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::{Result, SurveyGizmoError};
use crate::params::Params;

pub mod account;
pub mod account_teams;
pub mod account_user;
pub mod contact;
pub mod contact_list;
pub mod email_message;
pub mod survey;
pub mod survey_campaign;
pub mod survey_contact;
pub mod survey_option;
pub mod survey_page;
pub mod survey_question;
pub mod survey_report;
pub mod survey_response;
pub mod survey_statistic;

pub use account::Account;
pub use account_teams::AccountTeams;
pub use account_user::AccountUser;
pub use contact::Contact;
pub use contact_list::ContactList;
pub use email_message::EmailMessage;
pub use survey::Survey;
pub use survey_campaign::SurveyCampaign;
pub use survey_contact::SurveyContact;
pub use survey_option::SurveyOption;
pub use survey_page::SurveyPage;
pub use survey_question::SurveyQuestion;
pub use survey_report::SurveyReport;
pub use survey_response::SurveyResponse;
pub use survey_statistic::SurveyStatistic;

/// Declarative description of one REST endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDef {
    name: &'static str,
    path: &'static str,
    id_keys: &'static [&'static str],
}

impl ResourceDef {
    pub const fn new(
        name: &'static str,
        path: &'static str,
        id_keys: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            path,
            id_keys,
        }
    }

    /// Endpoint name as it appears in the API (`surveycampaign`, ...)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Path template with `{key}` placeholders
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Identifier keys, outermost first
    pub fn id_keys(&self) -> &'static [&'static str] {
        self.id_keys
    }

    /// Path for a single item, every placeholder substituted.
    ///
    /// Fails with [`SurveyGizmoError::MissingId`] when a placeholder has
    /// no matching parameter.
    pub fn item_path(&self, params: &Params) -> Result<String> {
        format_template(self.name, self.path, params)
    }

    /// Path for the collection: the template minus its final segment.
    ///
    /// Parent identifiers embedded in the remaining template are still
    /// required.
    pub fn collection_path(&self, params: &Params) -> Result<String> {
        let collection = match self.path.rsplit_once('/') {
            Some((parent, _)) => parent,
            None => self.path,
        };
        format_template(self.name, collection, params)
    }
}

/// Substitute `{key}` placeholders with percent-encoded parameter values
fn format_template(
    resource: &'static str,
    template: &'static str,
    params: &Params,
) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let Some(end) = tail.find('}') else {
            return Err(SurveyGizmoError::InvalidUrl(format!(
                "unterminated placeholder in `{template}`"
            )));
        };
        let key = &tail[..end];
        match params.get(key) {
            Some(value) => out.push_str(&urlencoding::encode(value)),
            None => return Err(SurveyGizmoError::MissingId { resource, key }),
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Ready-made result for operations an endpoint does not provide
pub(crate) fn not_supported(
    def: ResourceDef,
    operation: &'static str,
) -> impl Future<Output = Result<Value>> + Send {
    std::future::ready(Err(SurveyGizmoError::NotSupported {
        resource: def.name,
        operation,
    }))
}

/// Shared CRUD surface over a [`ResourceDef`].
///
/// The upstream API maps verbs unusually: objects are created with `PUT`
/// and updated with `POST`, a copy is an update carrying `copy=true`, and
/// every parameter rides in the query string. Provided methods implement
/// that mapping once; handlers override an operation only to disable it.
///
/// Methods return `impl Future` rather than boxed futures since handlers
/// are never used as trait objects.
pub trait Resource: Send + Sync {
    /// Endpoint description for this handler
    fn def(&self) -> ResourceDef;

    /// Client handle calls are issued through
    fn api(&self) -> &SurveyGizmo;

    /// Fetch the collection. Parent identifiers, where the endpoint is
    /// nested, must be present in `params`.
    fn list(&self, params: Params) -> impl Future<Output = Result<Value>> + Send {
        async move {
            let path = self.def().collection_path(&params)?;
            self.api().execute(Method::GET, &path, &params).await
        }
    }

    /// Fetch a single item. All identifiers must be present in `params`.
    fn get(&self, params: Params) -> impl Future<Output = Result<Value>> + Send {
        async move {
            let path = self.def().item_path(&params)?;
            self.api().execute(Method::GET, &path, &params).await
        }
    }

    /// Create an item under the collection path
    fn create(&self, params: Params) -> impl Future<Output = Result<Value>> + Send {
        async move {
            let path = self.def().collection_path(&params)?;
            self.api().execute(Method::PUT, &path, &params).await
        }
    }

    /// Update an existing item
    fn update(&self, params: Params) -> impl Future<Output = Result<Value>> + Send {
        async move {
            let path = self.def().item_path(&params)?;
            self.api().execute(Method::POST, &path, &params).await
        }
    }

    /// Duplicate an existing item (`copy=true` on the wire)
    fn copy(&self, params: Params) -> impl Future<Output = Result<Value>> + Send {
        async move {
            let params = params.set("copy", "true");
            let path = self.def().item_path(&params)?;
            self.api().execute(Method::POST, &path, &params).await
        }
    }

    /// Delete an item
    fn delete(&self, params: Params) -> impl Future<Output = Result<Value>> + Send {
        async move {
            let path = self.def().item_path(&params)?;
            self.api().execute(Method::DELETE, &path, &params).await
        }
    }
}

static DEFINITIONS: [ResourceDef; 15] = [
    account::DEF,
    account_teams::DEF,
    account_user::DEF,
    contact::DEF,
    contact_list::DEF,
    email_message::DEF,
    survey::DEF,
    survey_campaign::DEF,
    survey_contact::DEF,
    survey_option::DEF,
    survey_page::DEF,
    survey_question::DEF,
    survey_report::DEF,
    survey_response::DEF,
    survey_statistic::DEF,
];

/// Every endpoint description the client exposes
pub fn definitions() -> &'static [ResourceDef] {
    &DEFINITIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: ResourceDef = ResourceDef::new(
        "surveypage",
        "survey/{survey_id}/surveypage/{page_id}",
        &["survey_id", "page_id"],
    );

    fn placeholders(template: &str) -> Vec<&str> {
        let mut keys = Vec::new();
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            let tail = &rest[start + 1..];
            let end = tail.find('}').expect("placeholder is terminated");
            keys.push(&tail[..end]);
            rest = &tail[end + 1..];
        }
        keys
    }

    #[test]
    fn item_path_substitutes_all_ids() {
        let params = Params::new().set("survey_id", 123456).set("page_id", 2);
        assert_eq!(
            PAGE.item_path(&params).unwrap(),
            "survey/123456/surveypage/2"
        );
    }

    #[test]
    fn item_path_percent_encodes_values() {
        let params = Params::new()
            .set("survey_id", "12 34/56")
            .set("page_id", "a#b");
        assert_eq!(
            PAGE.item_path(&params).unwrap(),
            "survey/12%2034%2F56/surveypage/a%23b"
        );
    }

    #[test]
    fn missing_id_is_reported_with_key() {
        let params = Params::new().set("survey_id", 123456);
        let err = PAGE.item_path(&params).unwrap_err();
        match err {
            SurveyGizmoError::MissingId { resource, key } => {
                assert_eq!(resource, "surveypage");
                assert_eq!(key, "page_id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn collection_path_drops_final_segment() {
        let params = Params::new().set("survey_id", 123456);
        assert_eq!(
            PAGE.collection_path(&params).unwrap(),
            "survey/123456/surveypage"
        );
    }

    #[test]
    fn collection_path_still_requires_parent_ids() {
        let err = PAGE.collection_path(&Params::new()).unwrap_err();
        match err {
            SurveyGizmoError::MissingId { key, .. } => assert_eq!(key, "survey_id"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_params_do_not_affect_the_path() {
        let params = Params::new()
            .set("survey_id", 1)
            .set("page_id", 2)
            .set("resultsperpage", 50)
            .filter("status", "=", "Complete");
        assert_eq!(PAGE.item_path(&params).unwrap(), "survey/1/surveypage/2");
    }

    #[test]
    fn definitions_are_consistent() {
        let defs = definitions();
        assert_eq!(defs.len(), 15);

        let mut names: Vec<_> = defs.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 15, "endpoint names are unique");

        for def in defs {
            assert_eq!(
                placeholders(def.path()),
                def.id_keys().to_vec(),
                "`{}` declares exactly its template placeholders",
                def.name()
            );
            let (_, last) = def.path().rsplit_once('/').expect("path has segments");
            assert!(
                last.starts_with('{') && last.ends_with('}'),
                "`{}` ends with its item identifier",
                def.name()
            );
        }
    }
}
