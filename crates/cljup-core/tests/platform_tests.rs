#![cfg(unix)]

mod common;

use common::Harness;
use cljup_core::{Error, PackageManager, detect_platform};
use rstest::rstest;

#[rstest]
#[case(&["apt-get"], PackageManager::Apt)]
#[case(&["dnf"], PackageManager::Dnf)]
#[case(&["dnf", "apt-get"], PackageManager::Apt)]
fn detects_first_package_manager_in_priority_order(
    #[case] present: &[&str],
    #[case] expected: PackageManager,
) {
    let h = Harness::new();
    for name in present {
        h.home.stub_noop(name);
    }

    let system = detect_platform(&h.env()).unwrap();

    assert_eq!(system.package_manager, expected);
    assert_eq!(system.executable, h.home.bin_dir().join(expected.executable()));
}

#[test]
fn no_package_manager_is_unsupported() {
    let h = Harness::new();
    h.home.stub_noop("yum");

    let err = detect_platform(&h.env()).unwrap_err();

    assert!(matches!(err, Error::PlatformUnsupported { .. }));
    assert!(err.to_string().contains("apt-get, dnf"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn non_executable_file_is_not_a_package_manager() {
    let h = Harness::new();
    std::fs::write(h.home.bin_dir().join("apt-get"), "not a program").unwrap();

    assert!(detect_platform(&h.env()).is_err());
}
