use numeric::primitives::{Uint128, mask_u64};

#[test]
fn shift_left_low_word_only() {
    let v = Uint128::new(0, mask_u64(16));

    let cases = [
        (0u8, v),
        (64, Uint128::new(mask_u64(16), 0)),
        (128, Uint128::ZERO),
        (32, Uint128::new(0, mask_u64(16) << 32)),
        (96, Uint128::new(mask_u64(16) << 32, 0)),
    ];

    for (amount, expected) in cases {
        assert_eq!(v.shift_left(amount), expected, "shift by {amount}");
    }
}

#[test]
fn shift_left_across_words() {
    let v = Uint128::new(mask_u64(16), u64::MAX);

    let cases = [
        (0u8, v),
        (64, Uint128::new(u64::MAX, 0)),
        (128, Uint128::ZERO),
        (32, Uint128::new(mask_u64(48), mask_u64(32) << 32)),
        (96, Uint128::new(mask_u64(32) << 32, 0)),
    ];

    for (amount, expected) in cases {
        assert_eq!(v.shift_left(amount), expected, "shift by {amount}");
    }
}

#[test]
fn shift_right_high_word_only() {
    let v = Uint128::new(!mask_u64(48), 0);

    let cases = [
        (0u8, v),
        (64, Uint128::new(0, !mask_u64(48))),
        (128, Uint128::ZERO),
        (32, Uint128::new(!mask_u64(48) >> 32, 0)),
        (96, Uint128::new(0, !mask_u64(48) >> 32)),
    ];

    for (amount, expected) in cases {
        assert_eq!(v.shift_right(amount), expected, "shift by {amount}");
    }
}

#[test]
fn shift_right_across_words() {
    let v = Uint128::new(u64::MAX, !mask_u64(48));

    let cases = [
        (0u8, v),
        (64, Uint128::new(0, u64::MAX)),
        (128, Uint128::ZERO),
        (32, Uint128::new(mask_u64(32), !mask_u64(16))),
        (96, Uint128::new(0, mask_u64(32))),
    ];

    for (amount, expected) in cases {
        assert_eq!(v.shift_right(amount), expected, "shift by {amount}");
    }
}

#[test]
fn shift_by_one_carries_between_words() {
    let top_of_low = Uint128::new(0, 1 << 63);
    assert_eq!(top_of_low.shift_left(1), Uint128::new(1, 0));

    let bottom_of_high = Uint128::new(1, 0);
    assert_eq!(bottom_of_high.shift_right(1), Uint128::new(0, 1 << 63));
}

#[test]
fn shift_by_127_keeps_single_bit() {
    assert_eq!(Uint128::ONE.shift_left(127), Uint128::new(1 << 63, 0));
    assert_eq!(Uint128::new(1 << 63, 0).shift_right(127), Uint128::ONE);
    assert_eq!(Uint128::MAX.shift_left(127), Uint128::new(1 << 63, 0));
    assert_eq!(Uint128::MAX.shift_right(127), Uint128::ONE);
}

#[test]
fn shift_saturates_to_zero() {
    for amount in 128..=u8::MAX {
        assert_eq!(Uint128::MAX.shift_left(amount), Uint128::ZERO);
        assert_eq!(Uint128::MAX.shift_right(amount), Uint128::ZERO);
    }
}

#[test]
fn shift_operators_match_methods() {
    let v = Uint128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);

    for amount in 0..=u8::MAX {
        assert_eq!(v << amount, v.shift_left(amount));
        assert_eq!(v >> amount, v.shift_right(amount));
    }

    let mut w = v;
    w <<= 200;
    assert_eq!(w, Uint128::ZERO);

    let mut w = v;
    w >>= 64;
    assert_eq!(w, Uint128::new(0, v.high));
}
