use pig::{Dice, DiceSource, DieRoll};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rolls_stay_within_one_to_five(seed in any::<u64>()) {
        let mut dice = Dice::new(SmallRng::seed_from_u64(seed));
        for _ in 0..200 {
            let roll = dice.roll();
            prop_assert!(1 <= roll.low());
            prop_assert!(roll.low() <= roll.high());
            prop_assert!(roll.high() <= 5);
        }
    }

    #[test]
    fn roll_order_does_not_matter(a in 1u8..=5, b in 1u8..=5) {
        let roll = DieRoll::new(a, b);
        prop_assert_eq!(roll, DieRoll::new(b, a));
        prop_assert_eq!(roll.low(), a.min(b));
        prop_assert_eq!(roll.points(), u32::from(a) + u32::from(b));
        prop_assert_eq!(roll.is_bust(), a == 1 || b == 1);
    }
}

#[test]
fn every_face_but_six_comes_up() {
    let mut dice = Dice::new(SmallRng::seed_from_u64(2024));
    let mut seen = [false; 7];
    for _ in 0..2_000 {
        let roll = dice.roll();
        seen[roll.low() as usize] = true;
        seen[roll.high() as usize] = true;
    }
    assert_eq!(seen, [false, true, true, true, true, true, false]);
}
