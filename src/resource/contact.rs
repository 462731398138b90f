//! Contacts within a contact list (`contactlist/.../contact`).

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "contact",
    "contactlist/{contactlist_id}/contact/{contact_id}",
    &["contactlist_id", "contact_id"],
);

/// Handler for contacts of a contact list
#[derive(Debug, Clone, Copy)]
pub struct Contact<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> Contact<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the contacts of a contact list
    pub async fn list(&self, contactlist_id: impl ToString, params: Params) -> Result<Value> {
        Resource::list(self, params.set("contactlist_id", contactlist_id)).await
    }

    /// Fetch a single contact
    pub async fn get(
        &self,
        contactlist_id: impl ToString,
        contact_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::get(
            self,
            params
                .set("contactlist_id", contactlist_id)
                .set("contact_id", contact_id),
        )
        .await
    }

    /// Add a contact to a contact list. The email address is required by
    /// the API and travels as `semailaddress`.
    pub async fn create(
        &self,
        contactlist_id: impl ToString,
        semailaddress: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::create(
            self,
            params
                .set("contactlist_id", contactlist_id)
                .set("semailaddress", semailaddress),
        )
        .await
    }

    /// Update a contact
    pub async fn update(
        &self,
        contactlist_id: impl ToString,
        contact_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::update(
            self,
            params
                .set("contactlist_id", contactlist_id)
                .set("contact_id", contact_id),
        )
        .await
    }

    /// Remove a contact from a contact list
    pub async fn delete(
        &self,
        contactlist_id: impl ToString,
        contact_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::delete(
            self,
            params
                .set("contactlist_id", contactlist_id)
                .set("contact_id", contact_id),
        )
        .await
    }
}

impl Resource for Contact<'_> {
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
