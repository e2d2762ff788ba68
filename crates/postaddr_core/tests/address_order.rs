use postaddr_core::{compare, PostAddress};
use std::cmp::Ordering;

fn addr(raw: &str) -> PostAddress {
    PostAddress::parse(raw).expect("test addresses must be valid")
}

#[test]
fn state_is_the_coarsest_discriminator() {
    let nsw = addr("9 Zebra Road, Zetland, NS 2017");
    let vic = addr("1 Apple Street, Abbotsford, VI 3067");

    let result = compare(&nsw, &vic);
    assert_eq!(result.ordering, Ordering::Less);
    assert!(result.differs_at_locality);
    assert_eq!(nsw.raw_cmp(&vic), -2);
    assert_eq!(vic.raw_cmp(&nsw), 2);
}

#[test]
fn suburb_breaks_ties_within_a_state() {
    let carlton = addr("9 Zebra Road, Carlton, VI 3053");
    let fitzroy = addr("1 Apple Street, Fitzroy, VI 3065");

    let result = compare(&carlton, &fitzroy);
    assert_eq!(result.ordering, Ordering::Less);
    assert!(result.differs_at_locality);
}

#[test]
fn street_difference_stays_within_locality() {
    let a = addr("1 A St, X, VI 3000");
    let b = addr("2 B St, X, VI 3000");

    let result = compare(&a, &b);
    assert_eq!(result.ordering, Ordering::Less);
    assert!(!result.differs_at_locality);
    assert_eq!(a.raw_cmp(&b), -1);
    assert_eq!(b.raw_cmp(&a), 1);
}

#[test]
fn unit_orders_after_bare_street() {
    let bare = addr("12 Smith Street, Springfield, VI 3000");
    let unit = addr("A1/12 Smith Street, Springfield, VI 3000");

    assert!(bare.lt(&unit));
    assert!(unit.gt(&bare));
    assert_eq!(bare.raw_cmp(&unit), -1);
}

#[test]
fn units_compare_case_insensitively() {
    let lower = addr("a2/12 Smith Street, Springfield, VI 3000");
    let upper = addr("A2/12 Smith Street, Springfield, VI 3000");
    let higher = addr("B1/12 Smith Street, Springfield, VI 3000");

    assert!(lower.eq(&upper));
    assert!(lower.lt(&higher));
    assert_eq!(lower.raw_cmp(&higher), -1);
}

#[test]
fn equality_ignores_case_in_every_field() {
    let a = addr("12 smith street, springfield, VI 3000");
    let b = addr("12 SMITH Street, SpringField, VI 3000");

    assert!(a.eq(&b));
    assert!(!a.ne(&b));
    assert_eq!(a.raw_cmp(&b), 0);
}

#[test]
fn exactly_one_of_lt_eq_gt_holds() {
    let pool = [
        addr("1 A St, X, AA 1000"),
        addr("1 A St, X, AA 1000"),
        addr("2 B St, X, AA 1000"),
        addr("1 A St, Y, AA 1000"),
        addr("1 A St, X, BB 1000"),
        addr("Z9/1 A St, X, AA 1000"),
    ];

    for a in &pool {
        for b in &pool {
            let truths = [a.lt(b), a.eq(b), a.gt(b)];
            assert_eq!(truths.iter().filter(|&&held| held).count(), 1);
            // Antisymmetry.
            assert_eq!(a.lt(b), b.gt(a));
            assert_eq!(a.raw_cmp(b), -b.raw_cmp(a));
        }
    }
}

#[test]
fn le_and_ge_follow_the_ordering() {
    let small = addr("1 A St, X, AA 1000");
    let large = addr("1 A St, X, BB 1000");

    assert!(small.le(&large));
    assert!(small.le(&small));
    assert!(large.ge(&small));
    assert!(!small.ge(&large));
}

#[test]
fn tilde_ignores_street_unit_and_postcode() {
    let a = addr("1 A St, Springfield, VI 3000");
    let b = addr("99 Z Rd, Springfield, VI 3111");
    let c = addr("K9/99 Z Rd, springfield, VI 3111");

    assert!(a.approx_eq(&b));
    assert!(b.approx_eq(&c));
    assert!(!a.not_approx_eq(&b));
}

#[test]
fn tilde_fails_on_locality_difference() {
    let a = addr("1 A St, Springfield, VI 3000");
    let other_suburb = addr("1 A St, Sunbury, VI 3000");
    let other_state = addr("1 A St, Springfield, NS 3000");

    assert!(!a.approx_eq(&other_suburb));
    assert!(a.not_approx_eq(&other_state));
}

#[test]
fn raw_cmp_magnitude_separates_locality_from_street_level() {
    let base = addr("1 A St, X, AA 1000");
    let street_diff = addr("2 B St, X, AA 1000");
    let suburb_diff = addr("1 A St, Y, AA 1000");

    assert_eq!(base.raw_cmp(&street_diff).abs(), 1);
    assert_eq!(base.raw_cmp(&suburb_diff).abs(), 2);
}
