//! Campaigns of a survey (`survey/.../surveycampaign`).

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "surveycampaign",
    "survey/{survey_id}/surveycampaign/{campaign_id}",
    &["survey_id", "campaign_id"],
);

/// Handler for survey campaigns
#[derive(Debug, Clone, Copy)]
pub struct SurveyCampaign<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> SurveyCampaign<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the campaigns of a survey
    pub async fn list(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::list(self, params.set("survey_id", survey_id)).await
    }

    /// Fetch a single campaign
    pub async fn get(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::get(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id),
        )
        .await
    }

    /// Create a campaign under a survey
    pub async fn create(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::create(self, params.set("survey_id", survey_id)).await
    }

    /// Update a campaign
    pub async fn update(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::update(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id),
        )
        .await
    }

    /// Duplicate a campaign
    pub async fn copy(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::copy(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id),
        )
        .await
    }

    /// Delete a campaign
    pub async fn delete(
        &self,
        survey_id: impl ToString,
        campaign_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::delete(
            self,
            params
                .set("survey_id", survey_id)
                .set("campaign_id", campaign_id),
        )
        .await
    }
}

impl Resource for SurveyCampaign<'_> {
    fn def(&self) -> ResourceDef {
        DEF
    }

    fn api(&self) -> &SurveyGizmo {
        self.api
    }
}
