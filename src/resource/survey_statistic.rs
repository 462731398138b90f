//! Statistics of a survey (`survey/.../surveystatistic`).
//!
//! The API serves aggregated statistics per survey; individual statistic
//! objects cannot be addressed or modified, so everything except `list`
//! is disabled.

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "surveystatistic",
    "survey/{survey_id}/surveystatistic/{statistic_id}",
    &["survey_id", "statistic_id"],
);

/// Handler for survey statistics
#[derive(Debug, Clone, Copy)]
pub struct SurveyStatistic<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> SurveyStatistic<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch the statistics of a survey
    pub async fn list(&self, survey_id: impl ToString, params: Params) -> Result<Value> {
        Resource::list(self, params.set("survey_id", survey_id)).await
    }
}

impl Resource for SurveyStatistic<'_> {
    fn def(&self) -> ResourceDef {
        DEF
    }

    fn api(&self) -> &SurveyGizmo {
        self.api
    }

    fn get(&self, _params: Params) -> impl Future<Output = Result<Value>> + Send {
        not_supported(DEF, "get")
    }

    fn create(&self, _params: Params) -> impl Future<Output = Result<Value>> + Send {
        not_supported(DEF, "create")
    }

    fn update(&self, _params: Params) -> impl Future<Output = Result<Value>> + Send {
        not_supported(DEF, "update")
    }

    fn copy(&self, _params: Params) -> impl Future<Output = Result<Value>> + Send {
        not_supported(DEF, "copy")
    }

    fn delete(&self, _params: Params) -> impl Future<Output = Result<Value>> + Send {
        not_supported(DEF, "delete")
    }
}
