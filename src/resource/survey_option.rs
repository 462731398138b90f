//! Answer options of a question (`survey/.../surveyquestion/.../surveyoption`).

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "surveyoption",
    "survey/{survey_id}/surveyquestion/{question_id}/surveyoption/{option_id}",
    &["survey_id", "question_id", "option_id"],
);

/// Handler for question answer options
#[derive(Debug, Clone, Copy)]
pub struct SurveyOption<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> SurveyOption<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the options of a question
    pub async fn list(
        &self,
        survey_id: impl ToString,
        question_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::list(
            self,
            params
                .set("survey_id", survey_id)
                .set("question_id", question_id),
        )
        .await
    }

    /// Fetch a single option
    pub async fn get(
        &self,
        survey_id: impl ToString,
        question_id: impl ToString,
        option_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::get(
            self,
            params
                .set("survey_id", survey_id)
                .set("question_id", question_id)
                .set("option_id", option_id),
        )
        .await
    }

    /// Create an option under a question
    pub async fn create(
        &self,
        survey_id: impl ToString,
        question_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::create(
            self,
            params
                .set("survey_id", survey_id)
                .set("question_id", question_id),
        )
        .await
    }

    /// Update an option
    pub async fn update(
        &self,
        survey_id: impl ToString,
        question_id: impl ToString,
        option_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::update(
            self,
            params
                .set("survey_id", survey_id)
                .set("question_id", question_id)
                .set("option_id", option_id),
        )
        .await
    }

    /// Delete an option
    pub async fn delete(
        &self,
        survey_id: impl ToString,
        question_id: impl ToString,
        option_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::delete(
            self,
            params
                .set("survey_id", survey_id)
                .set("question_id", question_id)
                .set("option_id", option_id),
        )
        .await
    }
}

impl Resource for SurveyOption<'_> {
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
