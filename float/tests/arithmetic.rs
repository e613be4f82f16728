use decimal_float::repr::Context;
use decimal_float::round::RoundingMode;
use decimal_float::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn add_sub_mul_div_chain() {
    let a = d("12.5");
    let b = d("3.25");
    assert_eq!(&a + &b, d("15.75"));
    assert_eq!(&a - &b, d("9.25"));
    assert_eq!(&a * &b, d("40.625"));
    assert_eq!(&(&a / &b) * &b, a);
}

#[test]
fn precision_is_enforced_after_rounding() {
    let ctx = Context::new(4, RoundingMode::ToNearestEven);
    let x = d("1").with_context(ctx);
    let y = d("3").with_context(ctx);
    let q = &x / &y;
    assert!(q.digits() <= 4);
}

#[test]
fn ordering_across_signs_and_scales() {
    let mut values = vec![d("-1.5"), d("0"), d("0.001"), d("2"), d("-100")];
    values.sort();
    let rendered: Vec<_> = values.iter().map(|d| format!("{}", d)).collect();
    assert_eq!(rendered, vec!["-100", "-1.5", "0", "0.001", "2"]);
}
