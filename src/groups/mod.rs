//! Groups API

pub mod models;

use models::*;

api_calls! {
    fn accept_group_application("/Group/AcceptGroupApplication", EntityToken): AcceptGroupApplicationRequest => EmptyResponse;

    fn accept_group_invitation("/Group/AcceptGroupInvitation", EntityToken): AcceptGroupInvitationRequest => EmptyResponse;

    fn add_members("/Group/AddMembers", EntityToken): AddMembersRequest => EmptyResponse;

    fn apply_to_group("/Group/ApplyToGroup", EntityToken): ApplyToGroupRequest => ApplyToGroupResponse;

    fn block_entity("/Group/BlockEntity", EntityToken): BlockEntityRequest => EmptyResponse;

    fn change_member_role("/Group/ChangeMemberRole", EntityToken): ChangeMemberRoleRequest => EmptyResponse;

    /// Create new group with the caller as admin
    fn create_group("/Group/CreateGroup", EntityToken): CreateGroupRequest => CreateGroupResponse;

    fn create_role("/Group/CreateRole", EntityToken): CreateGroupRoleRequest => CreateGroupRoleResponse;

    fn delete_group("/Group/DeleteGroup", EntityToken): DeleteGroupRequest => EmptyResponse;

    fn delete_role("/Group/DeleteRole", EntityToken): DeleteRoleRequest => EmptyResponse;

    fn get_group("/Group/GetGroup", EntityToken): GetGroupRequest => GetGroupResponse;

    fn invite_to_group("/Group/InviteToGroup", EntityToken): InviteToGroupRequest => InviteToGroupResponse;

    fn is_member("/Group/IsMember", EntityToken): IsMemberRequest => IsMemberResponse;

    fn list_group_applications("/Group/ListGroupApplications", EntityToken): ListGroupApplicationsRequest => ListGroupApplicationsResponse;

    fn list_group_blocks("/Group/ListGroupBlocks", EntityToken): ListGroupBlocksRequest => ListGroupBlocksResponse;

    fn list_group_invitations("/Group/ListGroupInvitations", EntityToken): ListGroupInvitationsRequest => ListGroupInvitationsResponse;

    fn list_group_members("/Group/ListGroupMembers", EntityToken): ListGroupMembersRequest => ListGroupMembersResponse;

    fn list_membership("/Group/ListMembership", EntityToken): ListMembershipRequest => ListMembershipResponse;

    fn list_membership_opportunities("/Group/ListMembershipOpportunities", EntityToken): ListMembershipOpportunitiesRequest => ListMembershipOpportunitiesResponse;

    fn remove_group_application("/Group/RemoveGroupApplication", EntityToken): RemoveGroupApplicationRequest => EmptyResponse;

    fn remove_group_invitation("/Group/RemoveGroupInvitation", EntityToken): RemoveGroupInvitationRequest => EmptyResponse;

    fn remove_members("/Group/RemoveMembers", EntityToken): RemoveMembersRequest => EmptyResponse;

    fn unblock_entity("/Group/UnblockEntity", EntityToken): UnblockEntityRequest => EmptyResponse;

    fn update_group("/Group/UpdateGroup", EntityToken): UpdateGroupRequest => UpdateGroupResponse;

    fn update_role("/Group/UpdateRole", EntityToken): UpdateGroupRoleRequest => UpdateGroupRoleResponse;
}
