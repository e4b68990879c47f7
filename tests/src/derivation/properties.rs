use pnet::ipnetwork::Ipv4Network;
use serde_json::json;
use teamnet_common::SubnetError;
use teamnet_common::config::{Config, ErrorMode, SplitPolicy};
use teamnet_common::network::subnet::SubnetDescriptor;
use teamnet_common::team::TeamNumber;
use teamnet_core::{deriver, lookup};

fn lenient() -> Config {
    Config {
        mode: ErrorMode::Lenient,
        ..Config::default()
    }
}

/// Every team number the standard policy accepts, with its subnet.
fn all_valid(policy: SplitPolicy) -> Vec<SubnetDescriptor> {
    (1..=99_999_u32)
        .filter_map(|n| deriver::derive(TeamNumber::try_from(n).unwrap(), policy).ok())
        .collect()
}

/*************************************************************
                     Known values
**************************************************************/

#[test]
fn small_numbers_live_in_the_third_octet() {
    for n in 1..=255_u32 {
        let subnet = deriver::try_derive(&n, SplitPolicy::Standard).unwrap();
        assert_eq!(subnet.second_octet(), 0, "team {n}");
        assert_eq!(u32::from(subnet.third_octet()), n, "team {n}");
        assert_eq!(subnet.cidr_prefix(), 24);
    }
}

#[test]
fn three_digit_numbers_above_255_overflow() {
    for n in 256..=999_u32 {
        let result = deriver::try_derive(&n, SplitPolicy::Standard);
        assert!(
            matches!(result, Err(SubnetError::OctetOverflow { .. })),
            "team {n} should overflow the third octet"
        );
    }
}

#[test]
fn four_and_five_digit_examples() {
    let subnet = deriver::try_derive("1234", SplitPolicy::Standard).unwrap();
    assert_eq!((subnet.second_octet(), subnet.third_octet()), (12, 34));
    assert_eq!(subnet.subnet_cidr(), "10.12.34.0/24");

    let subnet = deriver::try_derive("12345", SplitPolicy::Standard).unwrap();
    assert_eq!((subnet.second_octet(), subnet.third_octet()), (123, 45));
    assert_eq!(subnet.subnet_cidr(), "10.123.45.0/24");
}

#[test]
fn failures_per_mode() {
    let strict = Config::default();

    assert!(matches!(
        deriver::derive_with("99999", &strict),
        Err(SubnetError::OctetOverflow { .. })
    ));
    assert!(matches!(
        deriver::derive_with("0", &strict),
        Err(SubnetError::InvalidLength { .. })
    ));
    assert!(matches!(
        deriver::derive_with("100000", &strict),
        Err(SubnetError::InvalidLength { .. })
    ));
    assert!(matches!(
        deriver::derive_with("abc", &strict),
        Err(SubnetError::InvalidInput { .. })
    ));
    assert!(matches!(
        deriver::derive_with(&json!(null), &strict),
        Err(SubnetError::InvalidInput { .. })
    ));

    for input in [json!(99999), json!(0), json!(100000), json!("abc"), json!(null)] {
        assert!(
            deriver::derive_with(&input, &lenient()).unwrap().is_none(),
            "lenient mode should skip {input}"
        );
    }
}

#[test]
fn strict_errors_name_the_input() {
    let err = deriver::derive_with("abc", &Config::default()).unwrap_err();
    assert!(err.to_string().contains("abc"), "{err}");

    let err = deriver::derive_with("99999", &Config::default()).unwrap_err();
    assert!(err.to_string().contains("99999"), "{err}");
}

/*************************************************************
                     Invariants
**************************************************************/

#[test]
fn derivation_is_idempotent() {
    for input in ["1", "42", "1234", "25599"] {
        let first = deriver::try_derive(input, SplitPolicy::Standard).unwrap();
        let second = deriver::try_derive(input, SplitPolicy::Standard).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_record(), second.to_record());
    }
}

#[test]
fn assignable_addresses_sit_strictly_inside_the_network() {
    for subnet in all_valid(SplitPolicy::Standard) {
        let network = subnet.network();
        let first = subnet.first_assignable_ip();
        let last = subnet.last_assignable_ip();

        assert!(subnet.network_address() < first, "{}", subnet.subnet_cidr());
        assert!(first < last, "{}", subnet.subnet_cidr());
        assert!(last < subnet.broadcast_address(), "{}", subnet.subnet_cidr());

        assert!(network.contains(first) && network.contains(last));
        assert!(network.contains(subnet.broadcast_address()));
        assert_eq!(subnet.assignable_range().len(), 180);
    }
}

#[test]
fn cidr_string_parses_back() {
    for subnet in all_valid(SplitPolicy::Standard) {
        let parsed: Ipv4Network = subnet.subnet_cidr().parse().unwrap();
        assert_eq!(parsed.network(), subnet.network_address());
        assert_eq!(parsed.prefix(), subnet.cidr_prefix());
        assert_eq!(format!("{}.0/24", subnet.base_ip_prefix()), subnet.subnet_cidr());
    }
}

#[test]
fn every_subnet_names_exactly_one_team() {
    for policy in [SplitPolicy::Standard, SplitPolicy::SplitThreeDigit] {
        let subnets = all_valid(policy);

        let mut cidrs: Vec<String> = subnets.iter().map(SubnetDescriptor::subnet_cidr).collect();
        cidrs.sort();
        cidrs.dedup();
        assert_eq!(cidrs.len(), subnets.len(), "{policy:?} maps two teams to one subnet");

        for subnet in subnets {
            let team = lookup::identify(&subnet.subnet_cidr(), policy).unwrap();
            assert_eq!(team, subnet.team());
        }
    }
}

#[test]
fn derivation_is_safe_to_share_across_threads() {
    let expected = deriver::try_derive("4321", SplitPolicy::Standard).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| deriver::try_derive("4321", SplitPolicy::Standard).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
