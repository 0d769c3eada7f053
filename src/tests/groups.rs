use chrono::{TimeZone, Utc};

use crate::prelude::*;
use crate::groups::{self, models::*};

use super::server::serve_once;

#[test]
pub fn test_create_group() {
    let (settings, server) = serve_once(200, r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "AdminRoleId": "admins",
            "MemberRoleId": "members",
            "Created": "2024-06-01T12:00:00.000Z",
            "Group": { "Id": "GROUP1", "Type": "group" },
            "GroupName": "Raiders",
            "ProfileVersion": 0,
            "Roles": { "admins": "Administrators", "members": "Members" }
        }
    }"#);

    let client = PlayFabClient::with_auth(settings, AuthContext::with_entity_token("token"));

    let group = groups::create_group(&client, &CreateGroupRequest {
        group_name: String::from("Raiders"),
        ..CreateGroupRequest::default()
    }).unwrap();

    let request = server.join().unwrap();

    assert!(request.starts_with("post /group/creategroup "));
    assert!(request.contains(r#""groupname":"raiders""#));

    assert_eq!(group.group.id, "GROUP1");
    assert_eq!(group.group.r#type, "group");
    assert_eq!(group.created, Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
    assert_eq!(group.roles.len(), 2);
    assert_eq!(group.roles["admins"], "Administrators");
}

#[test]
pub fn test_list_membership() {
    let response = ListMembershipResponse::from_json_str(r#"{
        "Groups": [
            { "GroupName": "Raiders", "Group": { "Id": "GROUP1", "Type": "group" }, "Roles": null },
            { "GroupName": "Traders" }
        ]
    }"#).unwrap();

    assert_eq!(response.groups.len(), 2);
    assert!(response.groups[0].roles.is_empty());
    assert_eq!(response.groups[1].group, None);

    assert_eq!(ListMembershipResponse::from_json_str("null").unwrap(), ListMembershipResponse::default());
}
