//! Named, multi-component point arrays.

use serde::{Deserialize, Serialize};

use crate::contour_error::ContourError;
use crate::data::sample::{Sample, SampleKind, ScalarData};

/// A named point array: `tuples × components` samples of one native type,
/// stored tuple-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScalarArray")]
pub struct ScalarArray {
    name: Option<String>,
    num_components: usize,
    data: ScalarData,
}

/// Unchecked wire form; deserialization goes through [`ScalarArray::from_data`].
#[derive(Deserialize)]
struct RawScalarArray {
    name: Option<String>,
    num_components: usize,
    data: ScalarData,
}

impl TryFrom<RawScalarArray> for ScalarArray {
    type Error = ContourError;

    fn try_from(raw: RawScalarArray) -> Result<Self, Self::Error> {
        Self::from_data(raw.name.as_deref(), raw.num_components, raw.data)
    }
}

impl ScalarArray {
    /// Wrap `values` as an array with `num_components` values per tuple.
    pub fn try_new<T: Sample>(
        name: Option<&str>,
        num_components: usize,
        values: Vec<T>,
    ) -> Result<Self, ContourError> {
        Self::from_data(name, num_components, ScalarData::from(values))
    }

    pub fn from_data(
        name: Option<&str>,
        num_components: usize,
        data: ScalarData,
    ) -> Result<Self, ContourError> {
        if num_components == 0 {
            return Err(ContourError::ZeroComponents);
        }
        if data.len() % num_components != 0 {
            return Err(ContourError::ArrayLengthMismatch {
                name: name.unwrap_or_default().to_owned(),
                expected: data.len().next_multiple_of(num_components),
                found: data.len(),
            });
        }
        Ok(Self {
            name: name.map(str::to_owned),
            num_components,
            data,
        })
    }

    /// Single-component, unnamed array.
    pub fn scalar<T: Sample>(values: Vec<T>) -> Self {
        Self {
            name: None,
            num_components: 1,
            data: ScalarData::from(values),
        }
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    #[inline]
    pub fn num_tuples(&self) -> usize {
        self.data.len() / self.num_components
    }

    #[inline]
    pub fn kind(&self) -> SampleKind {
        self.data.kind()
    }

    #[inline]
    pub fn data(&self) -> &ScalarData {
        &self.data
    }

    /// Component `component` of tuple `tuple`, widened to `f64`.
    pub fn component(&self, tuple: usize, component: usize) -> Option<f64> {
        if component >= self.num_components {
            return None;
        }
        self.data.get(tuple * self.num_components + component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_components_rejected() {
        let err = ScalarArray::try_new(Some("a"), 0, vec![1.0f32]).unwrap_err();
        assert_eq!(err, ContourError::ZeroComponents);
    }

    #[test]
    fn ragged_tuples_rejected() {
        let err = ScalarArray::try_new(Some("rgb"), 3, vec![0u8; 7]).unwrap_err();
        assert_eq!(
            err,
            ContourError::ArrayLengthMismatch {
                name: "rgb".into(),
                expected: 9,
                found: 7
            }
        );
    }

    #[test]
    fn component_access() {
        let a = ScalarArray::try_new(Some("uv"), 2, vec![1i32, 10, 2, 20]).unwrap();
        assert_eq!(a.num_tuples(), 2);
        assert_eq!(a.component(1, 1), Some(20.0));
        assert_eq!(a.component(0, 2), None);
        assert_eq!(a.name(), Some("uv"));
    }

    #[test]
    fn deserialization_checks_components() {
        let err = serde_json::from_str::<ScalarArray>(
            r#"{"name":null,"num_components":0,"data":{"F64":[1.0]}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least one component"));

        let ragged = r#"{"name":"uv","num_components":2,"data":{"I32":[1,2,3]}}"#;
        assert!(serde_json::from_str::<ScalarArray>(ragged).is_err());

        let a = ScalarArray::try_new(Some("uv"), 2, vec![1i32, 10, 2, 20]).unwrap();
        let back: ScalarArray = serde_json::from_str(&serde_json::to_string(&a).unwrap()).unwrap();
        assert_eq!(back, a);
        assert_eq!(back.num_tuples(), 2);
    }
}
