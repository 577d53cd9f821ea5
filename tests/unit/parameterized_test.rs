//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use std::cmp::Ordering;

use test_case::test_case;
use tfm_values::core::models::{DisplayNamePolicy, FrameworkFamily, HierarchyId};
use tfm_values::core::services::natural_cmp;

// =============================================================================
// Family Matching Tests
// =============================================================================

#[test_case(".NETCoreApp", Some(FrameworkFamily::NetCoreApp) ; "netcoreapp canonical")]
#[test_case(".netcoreapp", Some(FrameworkFamily::NetCoreApp) ; "netcoreapp lower")]
#[test_case(".NETFramework", Some(FrameworkFamily::NetFramework) ; "netframework canonical")]
#[test_case(".NetStandard", Some(FrameworkFamily::NetStandard) ; "netstandard mixed case")]
#[test_case("NETCoreApp", Some(FrameworkFamily::NetCoreApp) ; "netcoreapp undotted")]
#[test_case("netstandard", Some(FrameworkFamily::NetStandard) ; "netstandard undotted lower")]
#[test_case("NETCore", None ; "undotted prefix")]
#[test_case("NETCoreApp3.1", None ; "undotted with suffix")]
#[test_case(".NETCoreApp ", None ; "trailing space")]
#[test_case(".NET", None ; "prefix only")]
#[test_case("Tizen", None ; "unknown family")]
#[test_case("", None ; "empty")]
fn test_family_from_identifier(identifier: &str, expected: Option<FrameworkFamily>) {
    assert_eq!(FrameworkFamily::from_identifier(identifier), expected);
}

#[test_case(FrameworkFamily::NetCoreApp, "SupportedNETCoreAppTargetFramework" ; "netcoreapp rule")]
#[test_case(FrameworkFamily::NetFramework, "SupportedNETFrameworkTargetFramework" ; "netframework rule")]
#[test_case(FrameworkFamily::NetStandard, "SupportedNETStandardTargetFramework" ; "netstandard rule")]
fn test_family_rule_name(family: FrameworkFamily, expected: &str) {
    assert_eq!(family.rule_name(), expected);
    assert_eq!(FrameworkFamily::from_identifier(family.identifier()), Some(family));
    assert_eq!(FrameworkFamily::from_identifier(family.alias()), Some(family));
}

// =============================================================================
// Natural Ordering Tests
// =============================================================================

#[test_case("net2.0", "net10.0", Ordering::Less ; "numeric magnitude")]
#[test_case("net10.0", "net9.0", Ordering::Greater ; "numeric magnitude reversed")]
#[test_case("net4.7.2", "net4.8", Ordering::Less ; "dotted versions")]
#[test_case("netstandard2.1", "netcoreapp3.1", Ordering::Greater ; "text decides first")]
#[test_case(".NET Core 3.1", ".NET 5.0", Ordering::Less ; "text before digits")]
#[test_case(".NET Standard 2.0", ".NET 8.0", Ordering::Less ; "standard before modern")]
#[test_case("NET8.0", "net8.0", Ordering::Less ; "case only breaks ties")]
#[test_case("net8.0-windows", "net8.0", Ordering::Greater ; "longer sorts after prefix")]
#[test_case(".NET 8.0", ".NET 8.0", Ordering::Equal ; "identical")]
fn test_natural_cmp(a: &str, b: &str, expected: Ordering) {
    assert_eq!(natural_cmp(a, b), expected, "a={a:?} b={b:?}");
    assert_eq!(natural_cmp(b, a), expected.reverse(), "a={b:?} b={a:?}");
}

// =============================================================================
// Policy Tests
// =============================================================================

#[test_case("lenient", DisplayNamePolicy::Lenient ; "lenient")]
#[test_case("STRICT", DisplayNamePolicy::Strict ; "strict uppercase")]
fn test_policy_parse(input: &str, expected: DisplayNamePolicy) {
    assert_eq!(input.parse::<DisplayNamePolicy>().unwrap(), expected);
    assert_eq!(expected.to_string().parse::<DisplayNamePolicy>().unwrap(), expected);
}

#[test]
fn test_policy_parse_invalid() {
    assert!("loose".parse::<DisplayNamePolicy>().is_err());
}

// =============================================================================
// HierarchyId Tests
// =============================================================================

#[test_case(HierarchyId::ROOT, 0xFFFF_FFFE ; "root")]
#[test_case(HierarchyId::SELECTION, 0xFFFF_FFFD ; "selection")]
#[test_case(HierarchyId::NIL, 0xFFFF_FFFF ; "nil")]
#[test_case(HierarchyId::EMPTY, 0 ; "empty")]
fn test_hierarchy_id_values(id: HierarchyId, raw: u32) {
    assert_eq!(id.id(), raw);
    assert_eq!(HierarchyId::new(raw), id);
}
