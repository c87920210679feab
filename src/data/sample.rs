//! Numeric sample types and width-erased access.
//!
//! Scalar arrays keep their native storage type (`u8` … `f64`). The sweep
//! never sees that type directly: it reads through [`SampleAccess`], which
//! widens every sample to `f64`, and is monomorphized once per storage type
//! by [`ScalarData::visit`].

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

/// Runtime tag for the storage type of a scalar array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl SampleKind {
    /// Returns a stable string label for the sample type.
    pub fn as_str(self) -> &'static str {
        match self {
            SampleKind::U8 => "u8",
            SampleKind::I8 => "i8",
            SampleKind::U16 => "u16",
            SampleKind::I16 => "i16",
            SampleKind::U32 => "u32",
            SampleKind::I32 => "i32",
            SampleKind::U64 => "u64",
            SampleKind::I64 => "i64",
            SampleKind::F32 => "f32",
            SampleKind::F64 => "f64",
        }
    }

    /// Parse a sample type from a string label.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "u8" => Some(SampleKind::U8),
            "i8" => Some(SampleKind::I8),
            "u16" => Some(SampleKind::U16),
            "i16" => Some(SampleKind::I16),
            "u32" => Some(SampleKind::U32),
            "i32" => Some(SampleKind::I32),
            "u64" => Some(SampleKind::U64),
            "i64" => Some(SampleKind::I64),
            "f32" => Some(SampleKind::F32),
            "f64" => Some(SampleKind::F64),
            _ => None,
        }
    }
}

/// A storable sample type.
pub trait Sample: Copy + Send + Sync + AsPrimitive<f64> + 'static {
    const KIND: SampleKind;

    /// Wrap a typed buffer into the tagged container.
    fn into_data(values: Vec<Self>) -> ScalarData;
}

/// Read-only accessor returning samples in the wide floating-point domain.
pub trait SampleAccess {
    /// Value at linear offset `offset` (in values, not tuples).
    fn sample(&self, offset: usize) -> f64;

    /// Number of addressable values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Sample> SampleAccess for [T] {
    #[inline]
    fn sample(&self, offset: usize) -> f64 {
        self[offset].as_()
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

/// Generic operation over a typed sample slice.
pub trait SampleVisitor {
    type Output;

    fn visit<T: Sample>(self, samples: &[T]) -> Self::Output;
}

/// Typed storage for a scalar array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScalarData {
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    U32(Vec<u32>),
    I32(Vec<i32>),
    U64(Vec<u64>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

macro_rules! impl_sample {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Sample for $ty {
                const KIND: SampleKind = SampleKind::$variant;

                fn into_data(values: Vec<Self>) -> ScalarData {
                    ScalarData::$variant(values)
                }
            }
        )*

        impl ScalarData {
            pub fn kind(&self) -> SampleKind {
                match self {
                    $(ScalarData::$variant(_) => SampleKind::$variant,)*
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    $(ScalarData::$variant(v) => v.len(),)*
                }
            }

            /// Dispatch `visitor` on the native element type.
            pub fn visit<V: SampleVisitor>(&self, visitor: V) -> V::Output {
                match self {
                    $(ScalarData::$variant(v) => visitor.visit(v.as_slice()),)*
                }
            }
        }
    };
}

impl_sample! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

impl ScalarData {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widened value at `offset`, or `None` past the end.
    pub fn get(&self, offset: usize) -> Option<f64> {
        struct At(usize);
        impl SampleVisitor for At {
            type Output = Option<f64>;
            fn visit<T: Sample>(self, samples: &[T]) -> Option<f64> {
                samples.get(self.0).map(|&s| s.as_())
            }
        }
        self.visit(At(offset))
    }
}

impl<T: Sample> From<Vec<T>> for ScalarData {
    fn from(values: Vec<T>) -> Self {
        T::into_data(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_storage() {
        assert_eq!(ScalarData::from(vec![1u8, 2]).kind(), SampleKind::U8);
        assert_eq!(ScalarData::from(vec![1i16]).kind(), SampleKind::I16);
        assert_eq!(ScalarData::from(vec![1.0f32]).kind(), SampleKind::F32);
        assert_eq!(<u64 as Sample>::KIND, SampleKind::U64);
    }

    #[test]
    fn labels_parse_back() {
        for kind in [SampleKind::U8, SampleKind::I64, SampleKind::F32] {
            assert_eq!(SampleKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SampleKind::parse("f16"), None);
    }

    #[test]
    fn access_widens_signed_and_unsigned() {
        let data = ScalarData::from(vec![-3i8, 127]);
        assert_eq!(data.get(0), Some(-3.0));
        assert_eq!(data.get(1), Some(127.0));
        assert_eq!(data.get(2), None);

        let wide = ScalarData::from(vec![u32::MAX]);
        assert_eq!(wide.get(0), Some(u32::MAX as f64));
    }

    #[test]
    fn visitor_sums_any_width() {
        struct Sum;
        impl SampleVisitor for Sum {
            type Output = f64;
            fn visit<T: Sample>(self, samples: &[T]) -> f64 {
                (0..SampleAccess::len(samples)).map(|i| samples.sample(i)).sum()
            }
        }
        assert_eq!(ScalarData::from(vec![1u16, 2, 3]).visit(Sum), 6.0);
        assert_eq!(ScalarData::from(vec![0.5f64, 0.25]).visit(Sum), 0.75);
    }
}
