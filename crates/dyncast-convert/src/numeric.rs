//! Numeric cast kernels.
//!
//! Unchecked casts follow Rust `as` semantics: integers wrap
//! (two's complement), floats truncate toward zero and saturate, NaN becomes
//! zero. Checked casts compute the value in a wider type first (`i128` for
//! integers, `f64` for floats) and fail with `Overflow` if it does not fit.

use dyncast_core::{CastError, PrimitiveKind, Scalar};

/// Convert with wrapping/truncating semantics. Fails only for non-numeric
/// operands.
pub fn convert_unchecked(value: Scalar, to: PrimitiveKind) -> Result<Scalar, CastError> {
    macro_rules! cast_to {
        ($v:expr) => {
            match to {
                PrimitiveKind::Int8 => Scalar::I8($v as i8),
                PrimitiveKind::Int16 => Scalar::I16($v as i16),
                PrimitiveKind::Int32 => Scalar::I32($v as i32),
                PrimitiveKind::Int64 => Scalar::I64($v as i64),
                PrimitiveKind::Uint8 => Scalar::U8($v as u8),
                PrimitiveKind::Uint16 => Scalar::U16($v as u16),
                PrimitiveKind::Uint32 => Scalar::U32($v as u32),
                PrimitiveKind::Uint64 => Scalar::U64($v as u64),
                PrimitiveKind::Float => Scalar::F32($v as f32),
                PrimitiveKind::Double => Scalar::F64($v as f64),
                PrimitiveKind::Bool => return Err(CastError::invalid_cast(value.kind(), to)),
            }
        };
    }

    Ok(match value {
        Scalar::I8(v) => cast_to!(v),
        Scalar::I16(v) => cast_to!(v),
        Scalar::I32(v) => cast_to!(v),
        Scalar::I64(v) => cast_to!(v),
        Scalar::U8(v) => cast_to!(v),
        Scalar::U16(v) => cast_to!(v),
        Scalar::U32(v) => cast_to!(v),
        Scalar::U64(v) => cast_to!(v),
        Scalar::F32(v) => cast_to!(v),
        Scalar::F64(v) => cast_to!(v),
        Scalar::Bool(_) => return Err(CastError::invalid_cast(value.kind(), to)),
    })
}

/// Convert, failing with `Overflow` if the value is not representable in
/// `to`.
///
/// Integer-to-float never overflows (it may round). `f64 -> f32` fails only
/// when a finite value would become infinite; NaN and infinities carry over.
pub fn convert_checked(value: Scalar, to: PrimitiveKind) -> Result<Scalar, CastError> {
    if !value.kind().is_numeric() || !to.is_numeric() {
        return Err(CastError::invalid_cast(value.kind(), to));
    }

    if to.is_float() {
        if let (Scalar::F64(v), PrimitiveKind::Float) = (value, to) {
            if v.is_finite() && (v as f32).is_infinite() {
                return Err(CastError::overflow(value, to));
            }
        }
        return convert_unchecked(value, to);
    }

    let (min, max) = integer_range(to);
    let in_range = match value.as_i128() {
        Some(wide) => (min..=max).contains(&wide),
        None => match value.as_f64() {
            Some(f) if f.is_finite() => {
                let t = f.trunc();
                t >= min as f64 && t < max as f64 + 1.0
            }
            _ => false,
        },
    };

    if in_range {
        convert_unchecked(value, to)
    } else {
        Err(CastError::overflow(value, to))
    }
}

/// Inclusive range of an integer kind, widened to `i128`.
fn integer_range(kind: PrimitiveKind) -> (i128, i128) {
    match kind {
        PrimitiveKind::Int8 => (i8::MIN as i128, i8::MAX as i128),
        PrimitiveKind::Int16 => (i16::MIN as i128, i16::MAX as i128),
        PrimitiveKind::Int32 => (i32::MIN as i128, i32::MAX as i128),
        PrimitiveKind::Int64 => (i64::MIN as i128, i64::MAX as i128),
        PrimitiveKind::Uint8 => (0, u8::MAX as i128),
        PrimitiveKind::Uint16 => (0, u16::MAX as i128),
        PrimitiveKind::Uint32 => (0, u32::MAX as i128),
        PrimitiveKind::Uint64 => (0, u64::MAX as i128),
        PrimitiveKind::Bool | PrimitiveKind::Float | PrimitiveKind::Double => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyncast_core::PrimitiveKind::*;

    #[test]
    fn unchecked_wraps_integers() {
        assert_eq!(convert_unchecked(Scalar::I32(2000), Uint8), Ok(Scalar::U8(208)));
        assert_eq!(convert_unchecked(Scalar::I32(-1), Uint32), Ok(Scalar::U32(u32::MAX)));
        assert_eq!(convert_unchecked(Scalar::U8(200), Int8), Ok(Scalar::I8(-56)));
        assert_eq!(convert_unchecked(Scalar::U8(200), Int32), Ok(Scalar::I32(200)));
    }

    #[test]
    fn unchecked_float_to_int_truncates_and_saturates() {
        assert_eq!(convert_unchecked(Scalar::F64(3.9), Int32), Ok(Scalar::I32(3)));
        assert_eq!(convert_unchecked(Scalar::F64(-3.9), Int32), Ok(Scalar::I32(-3)));
        assert_eq!(convert_unchecked(Scalar::F64(1e10), Int32), Ok(Scalar::I32(i32::MAX)));
        assert_eq!(convert_unchecked(Scalar::F32(f32::NAN), Uint16), Ok(Scalar::U16(0)));
    }

    #[test]
    fn bool_is_not_numeric() {
        assert!(convert_unchecked(Scalar::Bool(true), Int32).unwrap_err().is_invalid_cast());
        assert!(convert_unchecked(Scalar::I32(1), Bool).unwrap_err().is_invalid_cast());
        assert!(convert_checked(Scalar::Bool(false), Uint8).unwrap_err().is_invalid_cast());
    }

    #[test]
    fn checked_integer_bounds() {
        assert_eq!(convert_checked(Scalar::I32(200), Uint8), Ok(Scalar::U8(200)));
        assert!(convert_checked(Scalar::I32(2000), Uint8).unwrap_err().is_overflow());
        assert!(convert_checked(Scalar::I32(-1), Uint8).unwrap_err().is_overflow());
        assert_eq!(convert_checked(Scalar::I64(i64::MIN), Int64), Ok(Scalar::I64(i64::MIN)));
        assert!(convert_checked(Scalar::U64(u64::MAX), Int64).unwrap_err().is_overflow());
        assert_eq!(convert_checked(Scalar::U32(u32::MAX), Int64), Ok(Scalar::I64(u32::MAX as i64)));
    }

    #[test]
    fn checked_float_to_int() {
        assert_eq!(convert_checked(Scalar::F64(255.9), Uint8), Ok(Scalar::U8(255)));
        assert!(convert_checked(Scalar::F64(256.0), Uint8).unwrap_err().is_overflow());
        assert_eq!(convert_checked(Scalar::F64(-0.5), Uint8), Ok(Scalar::U8(0)));
        assert!(convert_checked(Scalar::F64(-1.0), Uint8).unwrap_err().is_overflow());
        assert!(convert_checked(Scalar::F64(f64::NAN), Int32).unwrap_err().is_overflow());
        assert!(convert_checked(Scalar::F32(f32::INFINITY), Int64).unwrap_err().is_overflow());
        assert!(convert_checked(Scalar::F64(9.3e18), Int64).unwrap_err().is_overflow());
        assert!(convert_checked(Scalar::F64(1.9e19), Uint64).unwrap_err().is_overflow());
    }

    #[test]
    fn checked_float_narrowing() {
        assert_eq!(convert_checked(Scalar::F64(1.5), Float), Ok(Scalar::F32(1.5)));
        assert!(convert_checked(Scalar::F64(1e300), Float).unwrap_err().is_overflow());
        assert_eq!(
            convert_checked(Scalar::F64(f64::INFINITY), Float),
            Ok(Scalar::F32(f32::INFINITY))
        );
    }

    #[test]
    fn int_to_float_never_overflows() {
        assert_eq!(
            convert_checked(Scalar::U64(u64::MAX), Float),
            Ok(Scalar::F32(u64::MAX as f32))
        );
        assert_eq!(convert_checked(Scalar::I64(-7), Double), Ok(Scalar::F64(-7.0)));
    }

    #[test]
    fn checked_matches_unchecked_when_in_range() {
        for value in [Scalar::I16(-12), Scalar::U16(300), Scalar::F32(42.75)] {
            for to in PrimitiveKind::NUMERIC {
                if let Ok(checked) = convert_checked(value, to) {
                    assert_eq!(Ok(checked), convert_unchecked(value, to));
                }
            }
        }
    }
}
