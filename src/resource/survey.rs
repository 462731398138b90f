//! Surveys (`survey`).

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{Resource, ResourceDef};

pub(crate) const DEF: ResourceDef =
    ResourceDef::new("survey", "survey/{survey_id}", &["survey_id"]);

/// Handler for surveys.
///
/// `list` takes no identifiers and is available straight from the
/// [`Resource`] trait.
#[derive(Debug, Clone, Copy)]
pub struct Survey<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> Survey<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch a single survey
    pub async fn get(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::get(self, params.set("survey_id", survey_id)).await
    }

    /// Create a survey. The API requires a title and a type
    /// (`survey`, `poll`, `quiz`, ...), sent as `type` on the wire.
    pub async fn create(
        &self,
        title: impl ToString,
        survey_type: impl ToString,
        params: Params,
    ) -> Result<Value> {
        Resource::create(self, params.set("title", title).set("type", survey_type)).await
    }

    /// Update a survey
    pub async fn update(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::update(self, params.set("survey_id", survey_id)).await
    }

    /// Duplicate a survey
    pub async fn copy(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::copy(self, params.set("survey_id", survey_id)).await
    }

    /// Delete a survey
    pub async fn delete(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::delete(self, params.set("survey_id", survey_id)).await
    }
}

impl Resource for Survey<'_> {
    fn def(&self) -> ResourceDef {
        DEF
    }

    fn api(&self) -> &SurveyGizmo {
        self.api
    }
}
