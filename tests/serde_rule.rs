#![cfg(feature = "serde")]

use com_acl_core::{AccessControlType, ComAccessRights, ComAccessRule};

#[test]
fn test_serialize_shape() {
    let rule = ComAccessRule::new(
        "S-1-1-0".to_string(),
        ComAccessRights::EXECUTE | ComAccessRights::EXECUTE_REMOTE,
        AccessControlType::Allow,
    )
    .unwrap();
    let json = serde_json::to_value(&rule).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "identity": "S-1-1-0", "rights": 5, "decision": "Allow" })
    );
}

#[test]
fn test_deserialize_validates() {
    let ok: ComAccessRule<String> =
        serde_json::from_str(r#"{ "identity": "S-1-1-0", "rights": 3, "decision": "Deny" }"#).unwrap();
    assert_eq!(ok.rights(), ComAccessRights::EXECUTE | ComAccessRights::EXECUTE_LOCAL);
    assert_eq!(ok.access_control_type(), AccessControlType::Deny);

    let err = serde_json::from_str::<ComAccessRule<String>>(
        r#"{ "identity": "S-1-1-0", "rights": 2, "decision": "Allow" }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Execute bit"));
}
