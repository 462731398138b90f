//! Reports of a survey (`survey/.../surveyreport`).

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "surveyreport",
    "survey/{survey_id}/surveyreport/{report_id}",
    &["survey_id", "report_id"],
);

/// Handler for survey reports
#[derive(Debug, Clone, Copy)]
pub struct SurveyReport<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> SurveyReport<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the reports of a survey
    pub async fn list(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::list(self, params.set("survey_id", survey_id)).await
    }

    /// Fetch a single report
    pub async fn get(
        &self,
        survey_id: impl ToString,
        report_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::get(
            self,
            params
                .set("survey_id", survey_id)
                .set("report_id", report_id),
        )
        .await
    }

    /// Create a report under a survey
    pub async fn create(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::create(self, params.set("survey_id", survey_id)).await
    }

    /// Update a report
    pub async fn update(
        &self,
        survey_id: impl ToString,
        report_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::update(
            self,
            params
                .set("survey_id", survey_id)
                .set("report_id", report_id),
        )
        .await
    }

    /// Duplicate a report
    pub async fn copy(
        &self,
        survey_id: impl ToString,
        report_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::copy(
            self,
            params
                .set("survey_id", survey_id)
                .set("report_id", report_id),
        )
        .await
    }

    /// Delete a report
    pub async fn delete(
        &self,
        survey_id: impl ToString,
        report_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::delete(
            self,
            params
                .set("survey_id", survey_id)
                .set("report_id", report_id),
        )
        .await
    }
}

impl Resource for SurveyReport<'_> {
    fn def(&self) -> ResourceDef {
        DEF
    }

    fn api(&self) -> &SurveyGizmo {
        self.api
    }
}
