use std::collections::HashSet;
use std::fmt::Display;

use crate::prelude::*;

fn check_wire_enum<T: WireEnum + Display + Default>() {
    let mut names = HashSet::new();

    assert!(!T::list().is_empty(), "{} has no values", T::NAME);

    for value in T::list() {
        assert_eq!(T::from_wire(value.as_str()), Some(*value));
        assert_eq!(value.to_string(), value.as_str());

        assert!(names.insert(value.as_str()), "{} has duplicated wire string {}", T::NAME, value.as_str());
    }

    assert_eq!(T::default(), T::list()[0]);

    assert_eq!(T::from_wire(""), None);
    assert_eq!(T::from_wire("definitely not a value"), None);
}

#[test]
pub fn test_error_codes() {
    check_wire_enum::<ErrorCode>();

    assert_eq!(ErrorCode::list()[0], ErrorCode::InvalidParams);
    assert_eq!(ErrorCode::from_wire("EntityTokenExpired"), Some(ErrorCode::EntityTokenExpired));
}

#[cfg(feature = "authentication")]
#[test]
pub fn test_authentication_enums() {
    use crate::authentication::models::*;

    check_wire_enum::<IdentifiedDeviceType>();
    check_wire_enum::<LoginIdentityProvider>();

    assert_eq!(LoginIdentityProvider::XBoxLive.as_str(), "XBoxLive");
    assert_eq!(LoginIdentityProvider::PSN.as_str(), "PSN");
}

#[cfg(feature = "cloud-script")]
#[test]
pub fn test_cloud_script_enums() {
    use crate::cloud_script::models::*;

    check_wire_enum::<CloudScriptRevisionOption>();
    check_wire_enum::<ContinentCode>();
    check_wire_enum::<CountryCode>();
    check_wire_enum::<EmailVerificationStatus>();
    check_wire_enum::<LoginIdentityProvider>();
    check_wire_enum::<PushNotificationPlatform>();
    check_wire_enum::<SubscriptionProviderStatus>();
    check_wire_enum::<TriggerType>();

    assert_eq!(ContinentCode::list().len(), 7);
    assert_eq!(ContinentCode::list()[0], ContinentCode::AF);

    assert_eq!(CountryCode::from_wire("US"), Some(CountryCode::US));
    assert_eq!(CountryCode::from_wire("us"), None);
}

#[cfg(feature = "data")]
#[test]
pub fn test_data_enums() {
    use crate::data::models::*;

    check_wire_enum::<OperationTypes>();

    assert_eq!(OperationTypes::list(), &[
        OperationTypes::Created,
        OperationTypes::Updated,
        OperationTypes::Deleted,
        OperationTypes::None
    ]);
}

#[cfg(feature = "experimentation")]
#[test]
pub fn test_experimentation_enums() {
    use crate::experimentation::models::*;

    check_wire_enum::<AnalysisTaskState>();
    check_wire_enum::<ExperimentState>();
    check_wire_enum::<ExperimentType>();
}

#[cfg(feature = "groups")]
#[test]
pub fn test_groups_enums() {
    check_wire_enum::<crate::groups::models::OperationTypes>();
}

#[cfg(feature = "matchmaker")]
#[test]
pub fn test_matchmaker_enums() {
    use crate::matchmaker::models::*;

    check_wire_enum::<Region>();

    assert_eq!(Region::USCentral.as_str(), "USCentral");
}

#[cfg(feature = "multiplayer")]
#[test]
pub fn test_multiplayer_enums() {
    use serde_json::json;

    use crate::multiplayer::models::*;

    check_wire_enum::<AzureRegion>();
    check_wire_enum::<AzureVmFamily>();
    check_wire_enum::<AzureVmSize>();
    check_wire_enum::<CancellationReason>();
    check_wire_enum::<ContainerFlavor>();
    check_wire_enum::<OsPlatform>();
    check_wire_enum::<ProtocolType>();
    check_wire_enum::<ServerType>();
    check_wire_enum::<TitleMultiplayerServerEnabledStatus>();

    // Wire strings don't have to be valid identifiers
    assert_eq!(AzureVmSize::StandardD2V2.as_str(), "Standard_D2_v2");
    assert_eq!(AzureVmSize::from_wire("Standard_D2_v2"), Some(AzureVmSize::StandardD2V2));
    assert_eq!(AzureVmSize::from_wire("StandardD2V2"), None);
    assert_eq!(AzureVmFamily::NCasT4V3.to_string(), "NCasT4_v3");

    assert_eq!(serde_json::to_value(AzureVmSize::StandardA1V2).unwrap(), json!("Standard_A1_v2"));
}

#[cfg(feature = "profiles")]
#[test]
pub fn test_profiles_enums() {
    use crate::profiles::models::*;

    check_wire_enum::<EffectType>();
    check_wire_enum::<OperationTypes>();

    assert_eq!(EffectType::list(), &[EffectType::Allow, EffectType::Deny]);
}
