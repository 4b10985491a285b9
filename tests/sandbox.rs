/*
    The sandbox
*/

use interval_seidel::*;

fn mul<N: Number>(x: N, y: N, ctx: N::Ctx) -> Result<N> {
    x.mul(&y, &ctx)
}

#[test]
fn sandbox() {
    let c = mul(2.0_f64, 3.0, FloatContext::default()).unwrap();
    assert_eq!(c, 6.0);

    let a = Interval::point(2.0).unwrap();
    let b = Interval::from_midpoint("3").unwrap();
    let c = mul(a, b, IntervalContext::default()).unwrap();
    assert!(c.is_degenerate() && c.lower() == 6.0, "2 * 3 should be exact: {}", c);

    let c = mul(Interval::from_midpoint("0.1").unwrap(), b, IntervalContext::default()).unwrap();
    assert!(c.contains(0.30000000000000004) || c.contains(0.3), "0.1 * 3 lost its value: {}", c);
}
