use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::json;

wire_enum! {
    /// Result of an object write
    pub enum OperationTypes {
        Created => "Created",
        Updated => "Updated",
        Deleted => "Deleted",
        None => "None"
    }
}

/// Unique entity identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityKey {
    #[serde(with = "json::string")]
    pub id: String,

    #[serde(rename = "Type", with = "json::string")]
    pub r#type: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AcceptGroupApplicationRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AcceptGroupInvitationRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddMembersRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::list")]
    pub members: Vec<EntityKey>,

    #[serde(with = "json::string")]
    pub role_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ApplyToGroupRequest {
    pub auto_accept_outstanding_invite: Option<bool>,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityWithLineage {
    pub key: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub lineage: HashMap<String, EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ApplyToGroupResponse {
    pub entity: Option<EntityWithLineage>,

    #[serde(with = "json::timestamp")]
    pub expires: DateTime<Utc>,

    pub group: Option<EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BlockEntityRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ChangeMemberRoleRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub destination_role_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::list")]
    pub members: Vec<EntityKey>,

    #[serde(with = "json::string")]
    pub origin_role_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateGroupRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>,

    #[serde(with = "json::string")]
    pub group_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateGroupResponse {
    #[serde(with = "json::string")]
    pub admin_role_id: String,

    #[serde(with = "json::timestamp")]
    pub created: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::string")]
    pub group_name: String,

    #[serde(with = "json::string")]
    pub member_role_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub roles: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateGroupRoleRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::string")]
    pub role_id: String,

    #[serde(with = "json::string")]
    pub role_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateGroupRoleResponse {
    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32,

    #[serde(with = "json::string")]
    pub role_id: String,

    #[serde(with = "json::string")]
    pub role_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteGroupRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteRoleRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::string")]
    pub role_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmptyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityMemberRole {
    #[serde(with = "json::list")]
    pub members: Vec<EntityWithLineage>,

    #[serde(with = "json::string")]
    pub role_id: String,

    #[serde(with = "json::string")]
    pub role_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetGroupRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub group: Option<EntityKey>,

    #[serde(with = "json::string")]
    pub group_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetGroupResponse {
    #[serde(with = "json::string")]
    pub admin_role_id: String,

    #[serde(with = "json::timestamp")]
    pub created: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::string")]
    pub group_name: String,

    #[serde(with = "json::string")]
    pub member_role_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub roles: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GroupApplication {
    pub entity: Option<EntityWithLineage>,

    #[serde(with = "json::timestamp")]
    pub expires: DateTime<Utc>,

    pub group: Option<EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GroupBlock {
    pub entity: Option<EntityWithLineage>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GroupInvitation {
    #[serde(with = "json::timestamp")]
    pub expires: DateTime<Utc>,

    pub group: Option<EntityKey>,
    pub invited_by_entity: Option<EntityWithLineage>,
    pub invited_entity: Option<EntityWithLineage>,

    #[serde(with = "json::string")]
    pub role_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GroupRole {
    #[serde(with = "json::string")]
    pub role_id: String,

    #[serde(with = "json::string")]
    pub role_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GroupWithRoles {
    pub group: Option<EntityKey>,

    #[serde(with = "json::string")]
    pub group_name: String,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32,

    #[serde(with = "json::list")]
    pub roles: Vec<GroupRole>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InviteToGroupRequest {
    pub auto_accept_outstanding_application: Option<bool>,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::string")]
    pub role_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InviteToGroupResponse {
    #[serde(with = "json::timestamp")]
    pub expires: DateTime<Utc>,

    pub group: Option<EntityKey>,
    pub invited_by_entity: Option<EntityWithLineage>,
    pub invited_entity: Option<EntityWithLineage>,

    #[serde(with = "json::string")]
    pub role_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct IsMemberRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::string")]
    pub role_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct IsMemberResponse {
    #[serde(deserialize_with = "json::or_default")]
    pub is_member: bool
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGroupApplicationsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGroupApplicationsResponse {
    #[serde(with = "json::list")]
    pub applications: Vec<GroupApplication>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGroupBlocksRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGroupBlocksResponse {
    #[serde(with = "json::list")]
    pub blocked_entities: Vec<GroupBlock>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGroupInvitationsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGroupInvitationsResponse {
    #[serde(with = "json::list")]
    pub invitations: Vec<GroupInvitation>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGroupMembersRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListGroupMembersResponse {
    #[serde(with = "json::list")]
    pub members: Vec<EntityMemberRole>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListMembershipOpportunitiesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListMembershipOpportunitiesResponse {
    #[serde(with = "json::list")]
    pub applications: Vec<GroupApplication>,

    #[serde(with = "json::list")]
    pub invitations: Vec<GroupInvitation>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListMembershipRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListMembershipResponse {
    #[serde(with = "json::list")]
    pub groups: Vec<GroupWithRoles>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RemoveGroupApplicationRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RemoveGroupInvitationRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RemoveMembersRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::list")]
    pub members: Vec<EntityKey>,

    #[serde(with = "json::string")]
    pub role_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UnblockEntityRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateGroupRequest {
    #[serde(with = "json::string")]
    pub admin_role_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub expected_profile_version: Option<i32>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::string")]
    pub group_name: String,

    #[serde(with = "json::string")]
    pub member_role_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateGroupResponse {
    #[serde(with = "json::string")]
    pub operation_reason: String,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32,

    #[serde(with = "json::enumeration")]
    pub set_result: Option<OperationTypes>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateGroupRoleRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub expected_profile_version: Option<i32>,

    #[serde(deserialize_with = "json::or_default")]
    pub group: EntityKey,

    #[serde(with = "json::string")]
    pub role_id: String,

    #[serde(with = "json::string")]
    pub role_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateGroupRoleResponse {
    #[serde(with = "json::string")]
    pub operation_reason: String,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32,

    #[serde(with = "json::enumeration")]
    pub set_result: Option<OperationTypes>
}
