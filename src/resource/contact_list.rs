//! Contact lists (`contactlist`).

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "contactlist",
    "contactlist/{contactlist_id}",
    &["contactlist_id"],
);

/// Handler for contact lists.
///
/// `list` and `create` need no identifiers and come straight from the
/// [`Resource`] trait.
#[derive(Debug, Clone, Copy)]
pub struct ContactList<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> ContactList<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch a single contact list
    pub async fn get(&self, contactlist_id: impl ToString, params: Params) -> Result<Value> {
        Resource::get(self, params.set("contactlist_id", contactlist_id)).await
    }

    /// Update a contact list
    pub async fn update(&self, contactlist_id: impl ToString, params: Params) -> Result<Value> {
        Resource::update(self, params.set("contactlist_id", contactlist_id)).await
    }

    /// Delete a contact list
    pub async fn delete(&self, contactlist_id: impl ToString, params: Params) -> Result<Value> {
        Resource::delete(self, params.set("contactlist_id", contactlist_id)).await
    }
}

impl Resource for ContactList<'_> {
    fn def(&self) -> ResourceDef {
        DEF
    }

    fn api(&self) -> &SurveyGizmo {
        self.api
    }

    fn copy(&self, _params: Params) -> impl Future<Output = Result<Value>> + Send {
        not_supported(DEF, "copy")
    }
}
