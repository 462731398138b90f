//! Account details (`account`).
//!
//! Accounts are provisioned through the web application; the API only
//! reads them, so every write operation is disabled here.

use std::future::Future;

use serde_json::Value;

use crate::client::SurveyGizmo;
use crate::error::Result;
use crate::params::Params;
use crate::resource::{not_supported, Resource, ResourceDef};

pub(crate) const DEF: ResourceDef =
    ResourceDef::new("account", "account/{account_id}", &["account_id"]);

/// Handler for account details
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    api: &'a SurveyGizmo,
}

impl<'a> Account<'a> {
    pub(crate) fn new(api: &'a SurveyGizmo) -> Self {
        Self { api }
    }

    /// Fetch a single account
    pub async fn get(&self, account_id: impl ToString, params: Params) -> Result<Value> {
        Resource::get(self, params.set("account_id", account_id)).await
    }
}

impl Resource for Account<'_> {
    fn def(&self) -> ResourceDef {
        DEF
    }

    fn api(&self) -> &SurveyGizmo {
        self.api
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SurveyGizmoError;

    #[test]
    fn write_operations_are_disabled() {
        let api = SurveyGizmo::new("t", "s").unwrap();
        let account = api.account();

        for (operation, result) in [
            (
                "create",
                tokio_test::block_on(Resource::create(&account, Params::new())),
            ),
            (
                "update",
                tokio_test::block_on(Resource::update(&account, Params::new())),
            ),
            (
                "copy",
                tokio_test::block_on(Resource::copy(&account, Params::new())),
            ),
            (
                "delete",
                tokio_test::block_on(Resource::delete(&account, Params::new())),
            ),
        ] {
            match result.unwrap_err() {
                SurveyGizmoError::NotSupported {
                    resource,
                    operation: reported,
                } => {
                    assert_eq!(resource, "account");
                    assert_eq!(reported, operation);
                }
                other => panic!("unexpected error for {operation}: {other}"),
            }
        }
    }
}
