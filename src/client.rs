//! SurveyGizmo API client.
//!
//! [`SurveyGizmo`] ties together configuration, credentials and the HTTP
//! transport. Resource handlers borrow the client and funnel every call
//! through [`SurveyGizmo::execute`], which assembles the signed URL,
//! performs the request and decodes the response.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::auth::TokenAuth;
use crate::config::{ApiVersion, Config, ResponseType, ENV_BASE_URL};
use crate::error::{Result, SurveyGizmoError};
use crate::http::Transport;
use crate::params::Params;
use crate::resource::{
    Account, AccountTeams, AccountUser, Contact, ContactList, EmailMessage, Survey,
    SurveyCampaign, SurveyContact, SurveyOption, SurveyPage, SurveyQuestion, SurveyReport,
    SurveyResponse, SurveyStatistic,
};

/// Client for the SurveyGizmo REST API
#[derive(Debug, Clone)]
pub struct SurveyGizmo {
    config: Config,
    auth: TokenAuth,
    http: Transport,
}

impl SurveyGizmo {
    /// Create a client with default configuration
    pub fn new(api_token: impl Into<String>, api_token_secret: impl Into<String>) -> Result<Self> {
        Self::builder()
            .api_token(api_token)
            .api_token_secret(api_token_secret)
            .build()
    }

    /// Create a client from `SURVEYGIZMO_API_TOKEN`,
    /// `SURVEYGIZMO_API_TOKEN_SECRET` and, when set, `SURVEYGIZMO_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let auth = TokenAuth::from_env()?;
        let mut config = Config::default();
        if let Ok(raw) = std::env::var(ENV_BASE_URL) {
            config.base_url = Config::parse_base_url(&raw)?;
        }
        let http = Transport::new(&config)?;
        Ok(Self { config, auth, http })
    }

    /// Start building a client with custom configuration
    pub fn builder() -> SurveyGizmoBuilder {
        SurveyGizmoBuilder::default()
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Account details (`account`)
    pub fn account(&self) -> Account<'_> {
        Account::new(self)
    }

    /// Teams under the account (`accountteams`)
    pub fn account_teams(&self) -> AccountTeams<'_> {
        AccountTeams::new(self)
    }

    /// Users under the account (`accountuser`)
    pub fn account_user(&self) -> AccountUser<'_> {
        AccountUser::new(self)
    }

    /// Contacts within a contact list (`contactlist/.../contact`)
    pub fn contact(&self) -> Contact<'_> {
        Contact::new(self)
    }

    /// Contact lists (`contactlist`)
    pub fn contact_list(&self) -> ContactList<'_> {
        ContactList::new(self)
    }

    /// Email messages of a campaign (`survey/.../surveycampaign/.../emailmessage`)
    pub fn email_message(&self) -> EmailMessage<'_> {
        EmailMessage::new(self)
    }

    /// Surveys (`survey`)
    pub fn survey(&self) -> Survey<'_> {
        Survey::new(self)
    }

    /// Campaigns of a survey (`survey/.../surveycampaign`)
    pub fn survey_campaign(&self) -> SurveyCampaign<'_> {
        SurveyCampaign::new(self)
    }

    /// Contacts of a campaign (`survey/.../surveycampaign/.../surveycontact`)
    pub fn survey_contact(&self) -> SurveyContact<'_> {
        SurveyContact::new(self)
    }

    /// Answer options of a question (`survey/.../surveyquestion/.../surveyoption`)
    pub fn survey_option(&self) -> SurveyOption<'_> {
        SurveyOption::new(self)
    }

    /// Pages of a survey (`survey/.../surveypage`)
    pub fn survey_page(&self) -> SurveyPage<'_> {
        SurveyPage::new(self)
    }

    /// Questions of a survey (`survey/.../surveyquestion`)
    pub fn survey_question(&self) -> SurveyQuestion<'_> {
        SurveyQuestion::new(self)
    }

    /// Reports of a survey (`survey/.../surveyreport`)
    pub fn survey_report(&self) -> SurveyReport<'_> {
        SurveyReport::new(self)
    }

    /// Responses of a survey (`survey/.../surveyresponse`)
    pub fn survey_response(&self) -> SurveyResponse<'_> {
        SurveyResponse::new(self)
    }

    /// Statistics of a survey (`survey/.../surveystatistic`)
    pub fn survey_statistic(&self) -> SurveyStatistic<'_> {
        SurveyStatistic::new(self)
    }

    /// Assemble the fully signed request URL without executing it.
    ///
    /// `tail` is the unversioned resource path, typically produced by
    /// [`ResourceDef::item_path`](crate::resource::ResourceDef::item_path)
    /// or [`ResourceDef::collection_path`](crate::resource::ResourceDef::collection_path).
    /// Useful for debugging and for driving requests through other
    /// transports.
    pub fn prepare_url(&self, tail: &str, params: &Params) -> Result<Url> {
        let mut path = format!("{}/{}", self.config.api_version, tail);
        if let Some(response_type) = self.config.response_type {
            path.push('.');
            path.push_str(response_type.as_str());
        }

        let mut url = self
            .config
            .base_url
            .join(&path)
            .map_err(|e| SurveyGizmoError::InvalidUrl(format!("{path}: {e}")))?;

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params.pairs() {
                query.append_pair(&key, &value);
            }
            for (key, value) in self.auth.pairs() {
                query.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Issue one API call and decode the response
    pub(crate) async fn execute(&self, method: Method, tail: &str, params: &Params) -> Result<Value> {
        let url = self.prepare_url(tail, params)?;
        let body = self.http.request(method, url).await?;
        self.decode(body)
    }

    /// Decode a successful response body.
    ///
    /// With an explicit response type configured the body is returned
    /// verbatim as a JSON string, since the serialization is the caller's
    /// to interpret.
    fn decode(&self, body: String) -> Result<Value> {
        if self.config.response_type.is_some() {
            return Ok(Value::String(body));
        }
        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| SurveyGizmoError::Parse(e.to_string()))
    }
}

/// Builder for [`SurveyGizmo`]
#[derive(Debug, Default)]
pub struct SurveyGizmoBuilder {
    api_token: Option<String>,
    api_token_secret: Option<String>,
    api_version: Option<ApiVersion>,
    base_url: Option<String>,
    response_type: Option<ResponseType>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    client: Option<reqwest::Client>,
}

impl SurveyGizmoBuilder {
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn api_token_secret(mut self, secret: impl Into<String>) -> Self {
        self.api_token_secret = Some(secret.into());
        self
    }

    /// Target a specific API version (default: v5)
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Point the client at a different endpoint, e.g. the EU data center
    /// `https://restapi.alchemer.eu/`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Request an explicit serialization suffix; responses then come back
    /// verbatim instead of decoded
    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Request timeout (default: 30 seconds)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a caller-configured [`reqwest::Client`] (proxies, custom TLS).
    /// The configured timeout and user agent are ignored in that case.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<SurveyGizmo> {
        let api_token = self
            .api_token
            .ok_or_else(|| SurveyGizmoError::Config("api_token is required".into()))?;
        let api_token_secret = self
            .api_token_secret
            .ok_or_else(|| SurveyGizmoError::Config("api_token_secret is required".into()))?;

        let mut config = Config::default();
        if let Some(version) = self.api_version {
            config.api_version = version;
        }
        if let Some(raw) = &self.base_url {
            config.base_url = Config::parse_base_url(raw)?;
        }
        config.response_type = self.response_type;
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        let http = match self.client {
            Some(client) => Transport::with_client(client),
            None => Transport::new(&config)?,
        };

        Ok(SurveyGizmo {
            config,
            auth: TokenAuth::new(api_token, api_token_secret),
            http,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SurveyGizmo {
        SurveyGizmo::new("test-token", "test-secret").unwrap()
    }

    #[test]
    fn prepare_url_signs_and_versions_the_path() {
        let params = Params::new().set("survey_id", "123456");
        let url = client().prepare_url("survey/123456", &params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://restapi.surveygizmo.com/v5/survey/123456\
             ?survey_id=123456&api_token=test-token&api_token_secret=test-secret"
        );
    }

    #[test]
    fn prepare_url_orders_entries_before_filters() {
        let params = Params::new()
            .filter("status", "=", "Complete")
            .set("page", 2);
        let url = client().prepare_url("survey", &params).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("page".into(), "2".into()));
        assert_eq!(pairs[1], ("filter[field][0]".into(), "status".into()));
        assert_eq!(pairs[2], ("filter[operator][0]".into(), "=".into()));
        assert_eq!(pairs[3], ("filter[value][0]".into(), "Complete".into()));
        assert_eq!(pairs[4].0, "api_token");
        assert_eq!(pairs[5].0, "api_token_secret");
    }

    #[test]
    fn prepare_url_honors_api_version() {
        let api = SurveyGizmo::builder()
            .api_token("t")
            .api_token_secret("s")
            .api_version(ApiVersion::V4)
            .build()
            .unwrap();
        let url = api.prepare_url("survey", &Params::new()).unwrap();
        assert_eq!(url.path(), "/v4/survey");
    }

    #[test]
    fn prepare_url_appends_response_type_suffix() {
        let api = SurveyGizmo::builder()
            .api_token("t")
            .api_token_secret("s")
            .response_type(ResponseType::Debug)
            .build()
            .unwrap();
        let url = api.prepare_url("survey/123", &Params::new()).unwrap();
        assert_eq!(url.path(), "/v5/survey/123.debug");
    }

    #[test]
    fn prepare_url_joins_under_custom_base() {
        let api = SurveyGizmo::builder()
            .api_token("t")
            .api_token_secret("s")
            .base_url("https://restapi.alchemer.eu")
            .build()
            .unwrap();
        let url = api.prepare_url("survey", &Params::new()).unwrap();
        assert_eq!(url.host_str(), Some("restapi.alchemer.eu"));
        assert_eq!(url.path(), "/v5/survey");
    }

    #[test]
    fn builder_requires_credentials() {
        let err = SurveyGizmo::builder().api_token("t").build().unwrap_err();
        assert!(err.to_string().contains("api_token_secret"));

        let err = SurveyGizmo::builder().build().unwrap_err();
        assert!(err.to_string().contains("api_token"));
    }

    #[test]
    fn decode_parses_json_bodies() {
        let value = client().decode(r#"{"result_ok": true}"#.into()).unwrap();
        assert_eq!(value["result_ok"], Value::Bool(true));
    }

    #[test]
    fn decode_maps_empty_bodies_to_null() {
        assert_eq!(client().decode(String::new()).unwrap(), Value::Null);
    }

    #[test]
    fn decode_reports_malformed_json() {
        let err = client().decode("{not json".into()).unwrap_err();
        assert!(matches!(err, SurveyGizmoError::Parse(_)));
    }

    #[test]
    fn decode_returns_raw_body_with_explicit_response_type() {
        let api = SurveyGizmo::builder()
            .api_token("t")
            .api_token_secret("s")
            .response_type(ResponseType::Xml)
            .build()
            .unwrap();
        let body = "<result>ok</result>".to_string();
        assert_eq!(api.decode(body.clone()).unwrap(), Value::String(body));
    }
}
