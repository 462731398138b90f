//! Contacts of a campaign (`survey/.../surveycampaign/.../surveycontact`).
//!
//! Campaign contacts live under both a survey and a campaign, so every
//! operation names at least those two identifiers. Copying a contact
//! between campaigns is not provided by the API.

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "surveycontact",
    "survey/{survey_id}/surveycampaign/{campaign_id}/surveycontact/{contact_id}",
    &["survey_id", "campaign_id", "contact_id"],
);

/// Handler for campaign contacts
#[derive(Debug, Clone, Copy)]
pub struct SurveyContact<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> SurveyContact<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the contacts of a campaign
    pub async fn list(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::list(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id),
        )
        .await
    }

    /// Fetch a single campaign contact
    pub async fn get(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        contact_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::get(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id)
                .set("contact_id", contact_id),
        )
        .await
    }

    /// Add a contact to a campaign. The email address is required by the
    /// API and travels as `semailaddress`.
    pub async fn create(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        semailaddress: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::create(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id)
                .set("semailaddress", semailaddress),
        )
        .await
    }

    /// Update a campaign contact
    pub async fn update(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        contact_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::update(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id)
                .set("contact_id", contact_id),
        )
        .await
    }

    /// Remove a contact from a campaign
    pub async fn delete(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        contact_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::delete(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id)
                .set("contact_id", contact_id),
        )
        .await
    }
}

impl Resource for SurveyContact<'_> {
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
