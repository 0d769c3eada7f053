use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::prelude::*;
use crate::multiplayer::{self, models::*};

use super::server::serve_once;

#[test]
pub fn test_create_build_request() {
    let request = CreateBuildWithManagedContainerRequest {
        build_name: String::from("release-1.0"),
        vm_size: Some(AzureVmSize::StandardD2V2),
        container_flavor: Some(ContainerFlavor::ManagedWindowsServerCore),
        multiplayer_server_count_per_vm: 4,
        ports: vec![Port {
            name: String::from("game"),
            num: 7777,
            protocol: ProtocolType::UDP
        }],
        ..CreateBuildWithManagedContainerRequest::default()
    };

    let value = request.to_json().unwrap();

    assert_eq!(value["VmSize"], "Standard_D2_v2");
    assert_eq!(value["ContainerFlavor"], "ManagedWindowsServerCore");
    assert_eq!(value["MultiplayerServerCountPerVm"], 4);
    assert_eq!(value["Ports"][0]["Num"], 7777);
    assert_eq!(value["Ports"][0]["Protocol"], "UDP");
    assert!(value["GameAssetReferences"].is_null());
    assert!(value["InstrumentationConfiguration"].is_null());
    assert_eq!(value["Metadata"], json!({}));

    assert_eq!(CreateBuildWithManagedContainerRequest::from_json(&value).unwrap(), request);
}

#[test]
pub fn test_port_protocol() {
    let port = Port::from_json(&json!({ "Name": "game", "Num": 7777, "Protocol": "UDP" })).unwrap();

    assert_eq!(port.protocol, ProtocolType::UDP);
    assert_eq!(port.to_json().unwrap(), json!({ "Name": "game", "Num": 7777, "Protocol": "UDP" }));

    // Missing and unknown protocols fall back to the first declared one
    let port = Port::from_json(&json!({ "Name": "query", "Num": 7778 })).unwrap();

    assert_eq!(port.protocol, ProtocolType::TCP);
    assert_eq!(port.to_json().unwrap()["Protocol"], "TCP");

    let port = Port::from_json(&json!({ "Name": "voice", "Num": 7779, "Protocol": "QUIC" })).unwrap();

    assert_eq!(port.name, "voice");
    assert_eq!(port.protocol, ProtocolType::TCP);
}

#[test]
pub fn test_core_capacity_change() {
    let change = CoreCapacityChange::from_json(&json!({
        "NewCoreLimit": 64,
        "Region": "NorthEurope",
        "VmFamily": "Dasv4"
    })).unwrap();

    assert_eq!(change.new_core_limit, 64);
    assert_eq!(change.region, "NorthEurope");
    assert_eq!(change.vm_family, AzureVmFamily::Dasv4);

    assert_eq!(CoreCapacityChange::from_json(&change.to_json().unwrap()).unwrap(), change);

    let encoded = CoreCapacityChange::default().to_json().unwrap();

    assert_eq!(encoded["VmFamily"], "A");
    assert!(encoded["Region"].is_null());
}

#[test]
pub fn test_unknown_vm_size() {
    let request = CreateBuildWithManagedContainerRequest::from_json(&json!({
        "BuildName": "release-1.1",
        "VmSize": "Standard_Z99_v9"
    })).unwrap();

    assert_eq!(request.build_name, "release-1.1");
    assert_eq!(request.vm_size, None);
}

#[test]
pub fn test_matchmaking_ticket() {
    let request = CreateMatchmakingTicketRequest {
        creator: MatchmakingPlayer {
            entity: EntityKey {
                id: String::from("ABCDEF"),
                r#type: String::from("title_player_account")
            },
            attributes: Some(MatchmakingPlayerAttributes {
                data_object: json!({ "Skill": 24.4 }),
                ..MatchmakingPlayerAttributes::default()
            })
        },
        give_up_after_seconds: 120,
        queue_name: String::from("ranked"),
        ..CreateMatchmakingTicketRequest::default()
    };

    assert_eq!(request.to_json().unwrap(), json!({
        "Creator": {
            "Attributes": { "DataObject": { "Skill": 24.4 }, "EscapedDataObject": null },
            "Entity": { "Id": "ABCDEF", "Type": "title_player_account" }
        },
        "CustomTags": {},
        "GiveUpAfterSeconds": 120,
        "MembersToMatchWith": null,
        "QueueName": "ranked"
    }));
}

#[test]
pub fn test_get_matchmaking_ticket() {
    let (settings, server) = serve_once(200, r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "TicketId": "ticket-1",
            "Status": "WaitingForMatch",
            "QueueName": "ranked",
            "Created": "2024-02-10T18:00:05.5Z",
            "Creator": { "Id": "ABCDEF", "Type": "title_player_account" },
            "GiveUpAfterSeconds": 120,
            "Members": [{ "Entity": { "Id": "ABCDEF", "Type": "title_player_account" } }],
            "CancellationReason": "Timeout"
        }
    }"#);

    let client = PlayFabClient::with_auth(settings, AuthContext::with_entity_token("token"));

    let ticket = multiplayer::get_matchmaking_ticket(&client, &GetMatchmakingTicketRequest {
        ticket_id: String::from("ticket-1"),
        queue_name: String::from("ranked"),
        ..GetMatchmakingTicketRequest::default()
    }).unwrap();

    let request = server.join().unwrap();

    assert!(request.starts_with("post /match/getmatchmakingticket "));

    assert_eq!(ticket.ticket_id, "ticket-1");
    assert_eq!(ticket.status, "WaitingForMatch");
    assert_eq!(ticket.created, Utc.with_ymd_and_hms(2024, 2, 10, 18, 0, 5).unwrap() + chrono::Duration::milliseconds(500));
    assert_eq!(ticket.creator.id, "ABCDEF");
    assert_eq!(ticket.members.len(), 1);
    assert_eq!(ticket.members[0].attributes, None);
    assert!(ticket.match_id.is_empty());
    assert!(ticket.members_to_match_with.is_empty());
}

#[test]
pub fn test_list_build_summaries() {
    let (settings, server) = serve_once(200, r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "BuildSummaries": [
                {
                    "BuildId": "build-1",
                    "BuildName": "release-1.0",
                    "CreationTime": "2024-01-15T09:30:00Z",
                    "Metadata": { "branch": "main" },
                    "RegionConfigurations": null
                }
            ],
            "PageSize": 10,
            "SkipToken": null
        }
    }"#);

    let client = PlayFabClient::with_auth(settings, AuthContext::with_entity_token("token"));

    let response = multiplayer::list_build_summaries_v2(&client, &ListBuildSummariesRequest::default()).unwrap();

    let request = server.join().unwrap();

    assert!(request.starts_with("post /multiplayerserver/listbuildsummariesv2 "));

    assert_eq!(response.page_size, 10);
    assert!(response.skip_token.is_empty());

    let build = &response.build_summaries[0];

    assert_eq!(build.build_id, "build-1");
    assert_eq!(build.creation_time, Some(Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()));
    assert_eq!(build.metadata.get("branch").map(String::as_str), Some("main"));
    assert!(build.region_configurations.is_empty());
}
