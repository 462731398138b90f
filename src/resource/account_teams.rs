//! Teams under the account (`accountteams`).

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef =
    ResourceDef::new("accountteams", "accountteams/{team_id}", &["team_id"]);

/// Handler for account teams.
///
/// `list` and `create` need no identifiers and come straight from the
/// [`Resource`] trait.
#[derive(Debug, Clone, Copy)]
pub struct AccountTeams<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> AccountTeams<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch a single team
    pub async fn get(&self, team_id: impl ToString, params: Params) -> Result<Value> {
        Resource::get(self, params.set("team_id", team_id)).await
    }

    /// Update a team
    pub async fn update(&self, team_id: impl ToString, params: Params) -> Result<Value> {
        Resource::update(self, params.set("team_id", team_id)).await
    }

    /// Delete a team
    pub async fn delete(&self, team_id: impl ToString, params: Params) -> Result<Value> {
        Resource::delete(self, params.set("team_id", team_id)).await
    }
}

impl Resource for AccountTeams<'_> {
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
