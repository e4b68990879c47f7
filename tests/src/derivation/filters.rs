use serde_json::{Value, json};
use teamnet_common::network::subnet::SubnetRecord;
use teamnet_core::filters::{self, FILTERS};

#[test]
fn every_exported_function_is_reachable_by_name() {
    for filter in FILTERS {
        assert_eq!(filters::lookup(filter.name), Some(filter));
    }
}

#[test]
fn details_record_matches_cidr_projection() {
    let cidr = filters::lookup("team_subnet_cidr").unwrap().apply(&json!(4321)).unwrap();
    let details = filters::lookup("team_subnet_details").unwrap().apply(&json!("4321")).unwrap();

    let record: SubnetRecord = serde_json::from_value(details).unwrap();
    assert_eq!(Value::String(record.subnet_cidr.clone()), cidr);
    assert_eq!(record.network.to_string(), "10.43.21.0");
    assert_eq!(record.broadcast_ip.to_string(), "10.43.21.255");
    assert_eq!(record.first_assignable_ip.to_string(), "10.43.21.20");
    assert_eq!(record.last_assignable_ip.to_string(), "10.43.21.199");
    assert_eq!(record.base_ip_prefix, "10.43.21");
    assert_eq!(record.cidr_prefix, 24);
    assert!(record.valid);
}

#[test]
fn lenient_functions_map_failures_to_null() {
    let filter = filters::lookup("generate_subnet_details_filter").unwrap();
    for input in [json!(null), json!(""), json!("abc"), json!(0), json!(99999), json!(true)] {
        assert_eq!(filter.apply(&input).unwrap(), Value::Null, "input {input}");
    }
}
