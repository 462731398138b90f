//! Questions of a survey (`survey/.../surveyquestion`).

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "surveyquestion",
    "survey/{survey_id}/surveyquestion/{question_id}",
    &["survey_id", "question_id"],
);

/// Handler for survey questions
#[derive(Debug, Clone, Copy)]
pub struct SurveyQuestion<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> SurveyQuestion<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the questions of a survey
    pub async fn list(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::list(self, params.set("survey_id", survey_id)).await
    }

    /// Fetch a single question
    pub async fn get(
        &self,
        survey_id: impl ToString,
        question_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::get(
            self,
            params
                .set("survey_id", survey_id)
                .set("question_id", question_id),
        )
        .await
    }

    /// Create a question under a survey
    pub async fn create(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::create(self, params.set("survey_id", survey_id)).await
    }

    /// Update a question
    pub async fn update(
        &self,
        survey_id: impl ToString,
        question_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::update(
            self,
            params
                .set("survey_id", survey_id)
                .set("question_id", question_id),
        )
        .await
    }

    /// Delete a question
    pub async fn delete(
        &self,
        survey_id: impl ToString,
        question_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::delete(
            self,
            params
                .set("survey_id", survey_id)
                .set("question_id", question_id),
        )
        .await
    }
}

impl Resource for SurveyQuestion<'_> {
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
