#![no_main]

// Harness: rule_new – construction succeeds iff the Execute bit is set, and
// a successful rule echoes its inputs and hashes like an equal copy.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use com_acl_core::{rights, AccessControlType, ComAccessRights, ComAccessRule};

#[derive(Arbitrary, Debug, Clone)]
struct RuleInput {
    identity: Vec<u8>,
    mask: u32,
    deny: bool,
}

fuzz_target!(|input: RuleInput| {
    let decision = if input.deny { AccessControlType::Deny } else { AccessControlType::Allow };
    let requested = ComAccessRights::from_bits(input.mask);
    match ComAccessRule::new(input.identity.clone(), requested, decision) {
        Ok(rule) => {
            assert!(rights::has_execute(input.mask));
            assert_eq!(rule.access_mask(), input.mask);
            let copy = ComAccessRule::new(input.identity, requested, decision).unwrap();
            assert_eq!(rule, copy);
            assert_eq!(rule.hash_code(), copy.hash_code());
        }
        Err(_) => assert!(!rights::has_execute(input.mask)),
    }
});
