use serde::{Deserialize, Serialize};

/// An application object as returned by `az ad app list/show/create`.
///
/// Only the fields the workflow reads are modelled; everything else in the
/// Graph payload is ignored on deserialization.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Object id, used for raw Graph calls.
    #[serde(default)]
    pub id: String,
    /// Client id.
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub identifier_uris: Vec<String>,
    #[serde(default)]
    pub api: Option<ApiApplication>,
}

impl Application {
    /// Looks up an exposed scope by its value.
    pub fn scope(&self, value: &str) -> Option<&PermissionScope> {
        self.api
            .as_ref()?
            .oauth2_permission_scopes
            .iter()
            .find(|s| s.value == value)
    }

    pub fn pre_authorized(&self) -> &[PreAuthorizedApplication] {
        self.api
            .as_ref()
            .map(|a| a.pre_authorized_applications.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiApplication {
    #[serde(default)]
    pub oauth2_permission_scopes: Vec<PermissionScope>,
    #[serde(default)]
    pub pre_authorized_applications: Vec<PreAuthorizedApplication>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionScope {
    pub id: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_consent_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_consent_description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreAuthorizedApplication {
    pub app_id: String,
    pub delegated_permission_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppRole {
    pub allowed_member_types: Vec<String>,
    pub description: String,
    pub display_name: String,
    pub id: String,
    pub is_enabled: bool,
    pub value: String,
}

/// Everything `az ad app create` needs for a new registration.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub display_name: String,
    pub sign_in_audience: String,
    pub app_roles: Vec<AppRole>,
    pub web_redirect_uris: Vec<String>,
    pub enable_id_token_issuance: bool,
}

/// Body of a `PATCH /applications/{id}` call. Unset fields are omitted so
/// Graph leaves them untouched.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiPatch>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth2_permission_scopes: Option<Vec<PermissionScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_authorized_applications: Option<Vec<PreAuthorizedApplication>>,
}

impl ApplicationPatch {
    pub fn expose_scope(identifier_uri: String, scope: PermissionScope) -> Self {
        Self {
            identifier_uris: Some(vec![identifier_uri]),
            api: Some(ApiPatch {
                oauth2_permission_scopes: Some(vec![scope]),
                pre_authorized_applications: None,
            }),
        }
    }

    pub fn pre_authorize(client_id: &str, permission_id: &str) -> Self {
        Self {
            identifier_uris: None,
            api: Some(ApiPatch {
                oauth2_permission_scopes: None,
                pre_authorized_applications: Some(vec![PreAuthorizedApplication {
                    app_id: client_id.to_string(),
                    delegated_permission_ids: vec![permission_id.to_string()],
                }]),
            }),
        }
    }
}
