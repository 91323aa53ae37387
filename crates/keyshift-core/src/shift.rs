//! Single-step shifts with carry reporting.
//!
//! A buffer is one big-endian bit string: bit 0 is the most significant bit
//! of byte 0, bit `8 * len - 1` is the least significant bit of the last
//! byte. Both shifts run in a single pass and never allocate.

/// Most significant bit of a byte.
pub(crate) const MSB: u8 = 0b1000_0000;

/// Least significant bit of a byte.
pub(crate) const LSB: u8 = 0b0000_0001;

/// Shifts every bit one position toward the front of the buffer.
///
/// Each byte's vacated low bit is filled with the high bit of the byte after
/// it. The last byte's low bit becomes zero.
///
/// Returns the bit that fell off the front (the old MSB of byte 0). An empty
/// buffer is left alone and reports no carry.
pub fn shift_left(buffer: &mut [u8]) -> bool {
    let mut carry = false;
    for byte in buffer.iter_mut().rev() {
        let out = *byte & MSB != 0;
        *byte = (*byte << 1) | u8::from(carry);
        carry = out;
    }
    carry
}

/// Shifts every bit one position toward the back of the buffer.
///
/// Each byte's vacated high bit is filled with the low bit of the byte
/// before it. Byte 0's high bit becomes zero.
///
/// Returns the bit that fell off the back (the old LSB of the last byte).
pub fn shift_right(buffer: &mut [u8]) -> bool {
    let mut carry = false;
    for byte in buffer.iter_mut() {
        let out = *byte & LSB != 0;
        *byte = (*byte >> 1) | if carry { MSB } else { 0 };
        carry = out;
    }
    carry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_left_single_byte() {
        let cases = [
            (0b0000_0001, 0b0000_0010, false),
            (0b0100_0000, 0b1000_0000, false),
            (0b1000_0000, 0b0000_0000, true),
        ];

        for (input, expected, carry) in cases {
            let mut buf = [input];
            assert_eq!(shift_left(&mut buf), carry, "carry for {input:#010b}");
            assert_eq!(buf, [expected], "result for {input:#010b}");
        }
    }

    #[test]
    fn shift_right_single_byte() {
        let cases = [
            (0b0000_0001, 0b0000_0000, true),
            (0b0100_0000, 0b0010_0000, false),
            (0b0100_0001, 0b0010_0000, true),
        ];

        for (input, expected, carry) in cases {
            let mut buf = [input];
            assert_eq!(shift_right(&mut buf), carry, "carry for {input:#010b}");
            assert_eq!(buf, [expected], "result for {input:#010b}");
        }
    }

    #[test]
    fn shift_left_crosses_byte_boundary() {
        let mut buf = [0b0000_0001, 0b1000_0000, 0b1000_0001];
        assert!(!shift_left(&mut buf));
        assert_eq!(buf, [0b0000_0011, 0b0000_0001, 0b0000_0010]);
    }

    #[test]
    fn shift_right_crosses_byte_boundary() {
        let mut buf = [0b1000_0001, 0b0000_0001, 0b1000_0000];
        assert!(!shift_right(&mut buf));
        assert_eq!(buf, [0b0100_0000, 0b1000_0000, 0b1100_0000]);
    }

    #[test]
    fn empty_buffer_is_noop() {
        let mut buf: [u8; 0] = [];
        assert!(!shift_left(&mut buf));
        assert!(!shift_right(&mut buf));
    }

    #[test]
    fn carry_only_reports_outer_bit() {
        // Inner carries move between bytes but never reach the caller.
        let mut buf = [0b0000_0000, 0b1111_1111];
        assert!(!shift_left(&mut buf));
        assert_eq!(buf, [0b0000_0001, 0b1111_1110]);

        let mut buf = [0b1111_1111, 0b0000_0000];
        assert!(!shift_right(&mut buf));
        assert_eq!(buf, [0b0111_1111, 0b1000_0000]);
    }
}
