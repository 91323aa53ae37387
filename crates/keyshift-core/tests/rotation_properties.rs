//! Property-based tests for the rotation engine.
//!
//! These pin down the algebra of rotations over arbitrary buffers: round
//! trips, periodicity, padding isolation and agreement between the windowed
//! and whole-buffer paths.

use keyshift_core::{
    BitError, Rotation, bit_capacity, rotate_left, rotate_left_once, rotate_left_within,
    rotate_right, rotate_right_once, rotate_right_within, shift_left, shift_right,
};
use proptest::prelude::*;

/// Non-empty buffer with a window that fits inside it.
fn buffer_and_window() -> impl Strategy<Value = (Vec<u8>, usize)> {
    prop::collection::vec(any::<u8>(), 1..12).prop_flat_map(|buf| {
        let capacity = bit_capacity(buf.len());
        (Just(buf), 0..=capacity)
    })
}

/// Clears every bit of `buf` outside the trailing `bit_len` bits.
fn padding_of(buf: &[u8], bit_len: usize) -> Vec<u8> {
    let padding_bits = bit_capacity(buf.len()) - bit_len;
    buf.iter()
        .enumerate()
        .map(|(i, byte)| {
            let start = i * 8;
            if start + 8 <= padding_bits {
                *byte
            } else if start >= padding_bits {
                0
            } else {
                *byte & !(0xFF >> (padding_bits - start))
            }
        })
        .collect()
}

proptest! {
    /// PROPERTY: Reversibility - right undoes left.
    #[test]
    fn prop_left_then_right_is_identity(
        original in prop::collection::vec(any::<u8>(), 0..16),
        count in 0usize..300,
    ) {
        let mut buf = original.clone();
        rotate_left(&mut buf, count);
        rotate_right(&mut buf, count);
        prop_assert_eq!(buf, original);
    }

    /// PROPERTY: Periodicity - rotating by the bit capacity changes nothing.
    #[test]
    fn prop_full_period_is_identity(original in prop::collection::vec(any::<u8>(), 0..16)) {
        let period = bit_capacity(original.len());

        let mut buf = original.clone();
        rotate_left(&mut buf, period);
        prop_assert_eq!(&buf, &original);

        rotate_right(&mut buf, period);
        prop_assert_eq!(&buf, &original);
    }

    /// PROPERTY: Normalization - counts are taken modulo the period.
    #[test]
    fn prop_count_is_normalized(
        original in prop::collection::vec(any::<u8>(), 1..8),
        count in 0usize..64,
        laps in 0usize..4,
    ) {
        let period = bit_capacity(original.len());

        let mut short = original.clone();
        let mut long = original;
        rotate_left(&mut short, count);
        rotate_left(&mut long, count + laps * period);
        prop_assert_eq!(short, long);
    }

    /// PROPERTY: A rotation by n equals n single-bit rotations.
    #[test]
    fn prop_rotation_is_repeated_single_step(
        original in prop::collection::vec(any::<u8>(), 1..8),
        count in 0usize..40,
    ) {
        let mut stepped = original.clone();
        for _ in 0..count {
            rotate_left_once(&mut stepped);
        }
        let mut rotated = original.clone();
        rotate_left(&mut rotated, count);
        prop_assert_eq!(&rotated, &stepped);

        for _ in 0..count {
            rotate_right_once(&mut stepped);
        }
        prop_assert_eq!(stepped, original);
    }

    /// PROPERTY: Rotation preserves the number of set bits.
    #[test]
    fn prop_rotation_preserves_popcount(
        original in prop::collection::vec(any::<u8>(), 0..16),
        count in 0usize..200,
    ) {
        let ones = |b: &[u8]| b.iter().map(|x| x.count_ones()).sum::<u32>();

        let mut buf = original.clone();
        rotate_right(&mut buf, count);
        prop_assert_eq!(ones(&buf), ones(&original));
    }

    /// PROPERTY: Windowed round trip restores the buffer.
    #[test]
    fn prop_windowed_left_then_right_is_identity(
        (original, bit_len) in buffer_and_window(),
        count in 0usize..200,
    ) {
        let mut buf = original.clone();
        rotate_left_within(&mut buf, count, bit_len).unwrap();
        rotate_right_within(&mut buf, count, bit_len).unwrap();
        prop_assert_eq!(buf, original);
    }

    /// PROPERTY: Rotating a window by its own size is the identity.
    #[test]
    fn prop_window_period_is_identity((original, bit_len) in buffer_and_window()) {
        let mut buf = original.clone();
        rotate_left_within(&mut buf, bit_len, bit_len).unwrap();
        prop_assert_eq!(&buf, &original);

        rotate_right_within(&mut buf, bit_len, bit_len).unwrap();
        prop_assert_eq!(&buf, &original);
    }

    /// PROPERTY: Padding isolation - bits outside the window never change.
    #[test]
    fn prop_window_preserves_padding(
        (original, bit_len) in buffer_and_window(),
        count in 0usize..100,
        left in any::<bool>(),
    ) {
        let mut buf = original.clone();
        let rotation = if left { Rotation::left(count) } else { Rotation::right(count) };
        rotation.within(bit_len).apply(&mut buf).unwrap();

        prop_assert_eq!(padding_of(&buf, bit_len), padding_of(&original, bit_len));
    }

    /// PROPERTY: A window covering the whole buffer is a plain rotation.
    #[test]
    fn prop_full_window_matches_full_rotation(
        original in prop::collection::vec(any::<u8>(), 1..12),
        count in 0usize..200,
    ) {
        let bit_len = bit_capacity(original.len());

        let mut windowed = original.clone();
        let mut full = original;
        rotate_left_within(&mut windowed, count, bit_len).unwrap();
        rotate_left(&mut full, count);
        prop_assert_eq!(&windowed, &full);

        rotate_right_within(&mut windowed, count, bit_len).unwrap();
        rotate_right(&mut full, count);
        prop_assert_eq!(windowed, full);
    }

    /// PROPERTY: Validate-then-mutate - an oversized window is rejected
    /// before any byte is written.
    #[test]
    fn prop_oversized_window_is_rejected(
        original in prop::collection::vec(any::<u8>(), 0..8),
        excess in 1usize..64,
        count in 0usize..64,
    ) {
        let capacity = bit_capacity(original.len());
        let bit_len = capacity + excess;
        let expected = BitError::InvalidWindowLength {
            bit_len: i64::try_from(bit_len).unwrap(),
            capacity,
        };

        let mut buf = original.clone();
        prop_assert_eq!(rotate_left_within(&mut buf, count, bit_len), Err(expected.clone()));
        prop_assert_eq!(rotate_right_within(&mut buf, count, bit_len), Err(expected));
        prop_assert_eq!(buf, original);
    }

    /// PROPERTY: Shift carries are the outermost bits.
    #[test]
    fn prop_shift_carry_is_outer_bit(original in prop::collection::vec(any::<u8>(), 1..16)) {
        let mut buf = original.clone();
        prop_assert_eq!(shift_left(&mut buf), original[0] & 0x80 != 0);
        prop_assert_eq!(buf.last().copied().unwrap_or(0) & 1, 0);

        let mut buf = original.clone();
        prop_assert_eq!(shift_right(&mut buf), original[original.len() - 1] & 1 != 0);
        prop_assert_eq!(buf[0] & 0x80, 0);
    }
}
