//! Lifecycle state model, its nested objects and the import id format

use isc_client::models::{AccountAction, EmailNotificationOption, LifecycleState};
use isc_core::attributes::{self, AttributeModel, Attributes, object_json, object_list_json};
use isc_core::differ::{FieldRef, PatchField, Patchable};
use isc_core::provider::{ProviderError, ProviderResult, require};
use isc_core::value::Value;

use crate::resources::opt;

/// Plan/state model of `isc_lifecycle_state`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleStateModel {
    pub identity_profile_id: Value<String>,
    pub id: Value<String>,
    pub name: Value<String>,
    pub technical_name: Value<String>,
    pub description: Value<String>,
    pub enabled: Value<bool>,
    pub identity_count: Value<i32>,
    pub identity_state: Value<String>,
    pub priority: Value<i32>,
    pub access_profile_ids: Value<Vec<String>>,
    pub email_notification_option: Value<EmailNotificationOptionModel>,
    pub account_actions: Value<Vec<AccountActionModel>>,
    pub created: Value<String>,
    pub modified: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailNotificationOptionModel {
    pub notify_managers: Value<bool>,
    pub notify_all_admins: Value<bool>,
    pub notify_specific_users: Value<bool>,
    pub email_address_list: Value<Vec<String>>,
}

impl EmailNotificationOptionModel {
    fn from_dto(dto: EmailNotificationOption) -> Self {
        Self {
            notify_managers: Value::from_option(dto.notify_managers),
            notify_all_admins: Value::from_option(dto.notify_all_admins),
            notify_specific_users: Value::from_option(dto.notify_specific_users),
            email_address_list: Value::from_option(dto.email_address_list),
        }
    }

    fn to_dto(&self) -> EmailNotificationOption {
        EmailNotificationOption {
            notify_managers: opt(&self.notify_managers),
            notify_all_admins: opt(&self.notify_all_admins),
            notify_specific_users: opt(&self.notify_specific_users),
            email_address_list: opt(&self.email_address_list),
        }
    }
}

impl AttributeModel for EmailNotificationOptionModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            notify_managers: attributes::get(attributes, "notify_managers")?,
            notify_all_admins: attributes::get(attributes, "notify_all_admins")?,
            notify_specific_users: attributes::get(attributes, "notify_specific_users")?,
            email_address_list: attributes::get(attributes, "email_address_list")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "notify_managers", &self.notify_managers);
        attributes::set(&mut attributes, "notify_all_admins", &self.notify_all_admins);
        attributes::set(&mut attributes, "notify_specific_users", &self.notify_specific_users);
        attributes::set(&mut attributes, "email_address_list", &self.email_address_list);
        attributes
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountActionModel {
    pub action: Value<String>,
    pub source_ids: Value<Vec<String>>,
    pub exclude_source_ids: Value<Vec<String>>,
    pub all_sources: Value<bool>,
}

impl AccountActionModel {
    fn from_dto(dto: AccountAction) -> Self {
        Self {
            action: Value::from_option(dto.action),
            source_ids: Value::from_option(dto.source_ids),
            exclude_source_ids: Value::from_option(dto.exclude_source_ids),
            all_sources: Value::from_option(dto.all_sources),
        }
    }

    fn to_dto(&self) -> AccountAction {
        AccountAction {
            action: opt(&self.action),
            source_ids: opt(&self.source_ids),
            exclude_source_ids: opt(&self.exclude_source_ids),
            all_sources: opt(&self.all_sources),
        }
    }
}

impl AttributeModel for AccountActionModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            action: attributes::get(attributes, "action")?,
            source_ids: attributes::get(attributes, "source_ids")?,
            exclude_source_ids: attributes::get(attributes, "exclude_source_ids")?,
            all_sources: attributes::get(attributes, "all_sources")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "action", &self.action);
        attributes::set(&mut attributes, "source_ids", &self.source_ids);
        attributes::set(&mut attributes, "exclude_source_ids", &self.exclude_source_ids);
        attributes::set(&mut attributes, "all_sources", &self.all_sources);
        attributes
    }
}

impl LifecycleStateModel {
    /// Map an API response; `identity_profile_id` is not part of the body
    pub fn from_response(identity_profile_id: Value<String>, dto: LifecycleState) -> Self {
        Self {
            identity_profile_id,
            id: Value::from_option(dto.id),
            name: Value::from_option(dto.name),
            technical_name: Value::from_option(dto.technical_name),
            description: Value::from_option(dto.description),
            enabled: Value::from_option(dto.enabled),
            identity_count: Value::from_option(dto.identity_count),
            identity_state: Value::from_option(dto.identity_state),
            priority: Value::from_option(dto.priority),
            access_profile_ids: Value::from_option(dto.access_profile_ids),
            email_notification_option: Value::from_option(
                dto.email_notification_option
                    .map(EmailNotificationOptionModel::from_dto),
            ),
            account_actions: Value::from_option(dto.account_actions.map(|actions| {
                actions
                    .into_iter()
                    .map(AccountActionModel::from_dto)
                    .collect()
            })),
            created: Value::from_option(dto.created),
            modified: Value::from_option(dto.modified),
        }
    }

    /// Body of the create call
    pub fn to_create_request(&self) -> ProviderResult<LifecycleState> {
        Ok(LifecycleState {
            name: Some(require(&self.name, "name")?.clone()),
            technical_name: Some(require(&self.technical_name, "technical_name")?.clone()),
            description: opt(&self.description),
            enabled: opt(&self.enabled),
            identity_state: opt(&self.identity_state),
            priority: opt(&self.priority),
            access_profile_ids: opt(&self.access_profile_ids),
            email_notification_option: self
                .email_notification_option
                .known()
                .map(EmailNotificationOptionModel::to_dto),
            account_actions: self
                .account_actions
                .known()
                .map(|actions| actions.iter().map(AccountActionModel::to_dto).collect()),
            ..Default::default()
        })
    }
}

/// Split an import id of the form `<identity_profile_id>/<id>`
pub fn parse_import_id(id: &str) -> ProviderResult<(&str, &str)> {
    match id.split_once('/') {
        Some((profile, state)) if !profile.is_empty() && !state.is_empty() && !state.contains('/') => {
            Ok((profile, state))
        }
        _ => Err(ProviderError::configuration(format!(
            "Unexpected import identifier '{}': expected <identity_profile_id>/<lifecycle_state_id>",
            id
        ))),
    }
}

impl AttributeModel for LifecycleStateModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            identity_profile_id: attributes::get(attributes, "identity_profile_id")?,
            id: attributes::get(attributes, "id")?,
            name: attributes::get(attributes, "name")?,
            technical_name: attributes::get(attributes, "technical_name")?,
            description: attributes::get(attributes, "description")?,
            enabled: attributes::get(attributes, "enabled")?,
            identity_count: attributes::get(attributes, "identity_count")?,
            identity_state: attributes::get(attributes, "identity_state")?,
            priority: attributes::get(attributes, "priority")?,
            access_profile_ids: attributes::get(attributes, "access_profile_ids")?,
            email_notification_option: attributes::get_object(
                attributes,
                "email_notification_option",
            )?,
            account_actions: attributes::get_object_list(attributes, "account_actions")?,
            created: attributes::get(attributes, "created")?,
            modified: attributes::get(attributes, "modified")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "identity_profile_id", &self.identity_profile_id);
        attributes::set(&mut attributes, "id", &self.id);
        attributes::set(&mut attributes, "name", &self.name);
        attributes::set(&mut attributes, "technical_name", &self.technical_name);
        attributes::set(&mut attributes, "description", &self.description);
        attributes::set(&mut attributes, "enabled", &self.enabled);
        attributes::set(&mut attributes, "identity_count", &self.identity_count);
        attributes::set(&mut attributes, "identity_state", &self.identity_state);
        attributes::set(&mut attributes, "priority", &self.priority);
        attributes::set(&mut attributes, "access_profile_ids", &self.access_profile_ids);
        attributes::set_object(
            &mut attributes,
            "email_notification_option",
            &self.email_notification_option,
        );
        attributes::set_object_list(&mut attributes, "account_actions", &self.account_actions);
        attributes::set(&mut attributes, "created", &self.created);
        attributes::set(&mut attributes, "modified", &self.modified);
        attributes
    }
}

impl Patchable for LifecycleStateModel {
    const RESOURCE_TYPE: &'static str = "isc_lifecycle_state";

    fn patch_fields() -> Vec<PatchField<Self>> {
        vec![
            PatchField::<Self>::new("enabled", "/enabled", |m| FieldRef::Bool(&m.enabled)),
            PatchField::<Self>::new("description", "/description", |m| {
                FieldRef::String(&m.description)
            }),
            PatchField::<Self>::new("identity_state", "/identityState", |m| {
                FieldRef::String(&m.identity_state)
            }),
            PatchField::<Self>::new("priority", "/priority", |m| FieldRef::Int(&m.priority)),
            PatchField::<Self>::new("access_profile_ids", "/accessProfileIds", |m| {
                FieldRef::StringList(&m.access_profile_ids)
            }),
            PatchField::<Self>::new("email_notification_option", "/emailNotificationOption", |m| {
                FieldRef::Json(m.email_notification_option.as_ref().and_then(object_json))
            })
            .camel_case_keys(),
            PatchField::<Self>::new("account_actions", "/accountActions", |m| {
                FieldRef::Json(
                    m.account_actions
                        .as_ref()
                        .and_then(|actions| object_list_json(actions)),
                )
            })
            .camel_case_keys(),
        ]
    }
}
