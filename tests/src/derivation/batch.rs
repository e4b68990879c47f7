use teamnet_common::SubnetError;
use teamnet_common::config::{Config, ErrorMode};
use teamnet_common::team::selection::TeamSelection;
use teamnet_core::batch;

#[test]
fn lenient_batch_over_the_full_input_range() {
    let cfg = Config {
        mode: ErrorMode::Lenient,
        ..Config::default()
    };
    let inputs = "1-99999".parse::<TeamSelection>().unwrap().expand().unwrap();

    let report = batch::derive_all(&inputs, &cfg).unwrap();

    // 1-255, 1000-9999, 10000-25599
    assert_eq!(report.derived_count(), 255 + 9_000 + 15_600);
    assert_eq!(report.derived_count() + report.skipped_count(), 99_999);
    assert_eq!(report.derived.first().unwrap().subnet_cidr(), "10.0.1.0/24");
    assert_eq!(report.derived.last().unwrap().subnet_cidr(), "10.255.99.0/24");
    assert!(
        report
            .skipped
            .iter()
            .all(|skipped| matches!(skipped.error, SubnetError::OctetOverflow { .. }))
    );
}

#[test]
fn strict_batch_fails_on_mixed_selection() {
    let inputs = "1-3, nope, 1234".parse::<TeamSelection>().unwrap().expand().unwrap();
    let err = batch::derive_all(&inputs, &Config::default()).unwrap_err();
    assert!(matches!(err, SubnetError::InvalidInput { .. }));
}

#[test]
fn strict_batch_of_valid_teams() {
    let inputs = "7, 1000-1002, 12345".parse::<TeamSelection>().unwrap().expand().unwrap();
    let report = batch::derive_all(&inputs, &Config::default()).unwrap();

    let cidrs: Vec<String> = report.derived.iter().map(|d| d.subnet_cidr()).collect();
    assert_eq!(
        cidrs,
        vec![
            "10.0.7.0/24",
            "10.10.0.0/24",
            "10.10.1.0/24",
            "10.10.2.0/24",
            "10.123.45.0/24",
        ]
    );
    assert_eq!(report.skipped_count(), 0);
}
