//! Pages of a survey (`survey/.../surveypage`).

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "surveypage",
    "survey/{survey_id}/surveypage/{page_id}",
    &["survey_id", "page_id"],
);

/// Handler for survey pages
#[derive(Debug, Clone, Copy)]
pub struct SurveyPage<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> SurveyPage<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the pages of a survey
    pub async fn list(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::list(self, params.set("survey_id", survey_id)).await
    }

    /// Fetch a single page
    pub async fn get(
        &self,
        survey_id: impl ToString,
        page_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::get(
            self,
            params.set("survey_id", survey_id).set("page_id", page_id),
        )
        .await
    }

    /// Create a page under a survey
    pub async fn create(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::create(self, params.set("survey_id", survey_id)).await
    }

    /// Update a page
    pub async fn update(
        &self,
        survey_id: impl ToString,
        page_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::update(
            self,
            params.set("survey_id", survey_id).set("page_id", page_id),
        )
        .await
    }

    /// Delete a page
    pub async fn delete(
        &self,
        survey_id: impl ToString,
        page_id: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::delete(
            self,
            params.set("survey_id", survey_id).set("page_id", page_id),
        )
        .await
    }
}

impl Resource for SurveyPage<'_> {
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
