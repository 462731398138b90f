//! Responses of a survey (`survey/.../surveyresponse`).
//!
//! The heaviest-traffic endpoint. Listings are commonly narrowed with
//! field filters, e.g.
//! `Params::new().filter("datesubmitted", ">=", "2024-01-01")`.

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "surveyresponse",
    "survey/{survey_id}/surveyresponse/{response_id}",
    &["survey_id", "response_id"],
);

/// Handler for survey responses
#[derive(Debug, Clone, Copy)]
pub struct SurveyResponse<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> SurveyResponse<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the responses of a survey
    pub async fn list(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::list(self, params.set("survey_id", survey_id)).await
    }

    /// Fetch a single response
    pub async fn get(
        &self,
        survey_id: impl ToString,
        response_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::get(
            self,
            params
                .set("survey_id", survey_id)
                .set("response_id", response_id),
        )
        .await
    }

    /// Submit a response to a survey
    pub async fn create(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::create(self, params.set("survey_id", survey_id)).await
    }

    /// Update a response
    pub async fn update(
        &self,
        survey_id: impl ToString,
        response_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::update(
            self,
            params
                .set("survey_id", survey_id)
                .set("response_id", response_id),
        )
        .await
    }

    /// Delete a response
    pub async fn delete(
        &self,
        survey_id: impl ToString,
        response_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::delete(
            self,
            params
                .set("survey_id", survey_id)
                .set("response_id", response_id),
        )
        .await
    }
}

impl Resource for SurveyResponse<'_> {
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
