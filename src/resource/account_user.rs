//! Users under the account (`accountuser`).

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef = ResourceDef::new(
    "accountuser",
    "accountuser/{account_user_id}",
    &["account_user_id"],
);

/// Handler for account users.
///
/// `list` and `create` need no identifiers and come straight from the
/// [`Resource`] trait.
#[derive(Debug, Clone, Copy)]
pub struct AccountUser<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> AccountUser<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch a single account user
    pub async fn get(&self, account_user_id: impl ToString, params: Params) -> Result<Value> {
        Resource::get(self, params.set("account_user_id", account_user_id)).await
    }

    /// Update an account user
    pub async fn update(&self, account_user_id: impl ToString, params: Params) -> Result<Value> {
        Resource::update(self, params.set("account_user_id", account_user_id)).await
    }

    /// Delete an account user
    pub async fn delete(&self, account_user_id: impl ToString, params: Params) -> Result<Value> {
        Resource::delete(self, params.set("account_user_id", account_user_id)).await
    }
}

impl Resource for AccountUser<'_> {
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
