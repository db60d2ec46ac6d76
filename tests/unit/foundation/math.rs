use super::*;

#[test]
fn same_seed_same_stream() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn unit_floats_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn seeds_diverge() {
    let mut a = Rng64::new(1);
    let mut b = Rng64::new(2);
    assert_ne!(a.next_u64(), b.next_u64());
}
