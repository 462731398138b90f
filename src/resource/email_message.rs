//! Email messages of a campaign (`survey/.../surveycampaign/.../emailmessage`).

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "emailmessage",
    "survey/{survey_id}/surveycampaign/{campaign_id}/emailmessage/{emailmessage_id}",
    &["survey_id", "campaign_id", "emailmessage_id"],
);

/// Handler for campaign email messages
#[derive(Debug, Clone, Copy)]
pub struct EmailMessage<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> EmailMessage<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the email messages of a campaign
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

    /// Fetch a single email message
    pub async fn get(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        emailmessage_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::get(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id)
                .set("emailmessage_id", emailmessage_id),
        )
        .await
    }

    /// Create an email message under a campaign
    pub async fn create(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::create(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id),
        )
        .await
    }

    /// Update an email message
    pub async fn update(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        emailmessage_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::update(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id)
                .set("emailmessage_id", emailmessage_id),
        )
        .await
    }

    /// Delete an email message
    pub async fn delete(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        emailmessage_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::delete(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id)
                .set("emailmessage_id", emailmessage_id),
        )
        .await
    }
}

impl Resource for EmailMessage<'_> {
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
