use serde::{Deserialize, Deserializer, Serialize};

/// A mark encoding that is either shared by every instance or stored per instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ScalarOrArray<T: Clone> {
    Scalar(T),
    Array(Vec<T>),
}

impl<T: Clone> ScalarOrArray<T> {
    pub fn new_scalar(value: T) -> Self {
        ScalarOrArray::Scalar(value)
    }

    pub fn new_array(values: Vec<T>) -> Self {
        ScalarOrArray::Array(values)
    }

    pub fn as_iter(&self, scalar_len: usize) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            ScalarOrArray::Scalar(value) => Box::new(std::iter::repeat_n(value, scalar_len)),
            ScalarOrArray::Array(values) => Box::new(values.iter()),
        }
    }

    pub fn as_vec(&self, scalar_len: usize) -> Vec<T> {
        self.as_iter(scalar_len).cloned().collect()
    }

    /// Value for instance `index`, or `None` when an array is too short
    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            ScalarOrArray::Scalar(value) => Some(value),
            ScalarOrArray::Array(values) => values.get(index),
        }
    }

    pub fn map<U: Clone>(&self, f: impl Fn(&T) -> U) -> ScalarOrArray<U> {
        match self {
            ScalarOrArray::Scalar(value) => ScalarOrArray::Scalar(f(value)),
            ScalarOrArray::Array(values) => ScalarOrArray::Array(values.iter().map(f).collect()),
        }
    }
}

impl ScalarOrArray<f32> {
    pub fn equals_scalar(&self, v: f32) -> bool {
        match self {
            ScalarOrArray::Scalar(value) => v == *value,
            _ => false,
        }
    }
}

/// Reads a float channel, accepting `null` for NaN.
///
/// serde_json writes non-finite floats as `null`, so this is what lets a scene
/// holding NaN geometry be read back.
pub fn deserialize_f32_channel<'de, D>(deserializer: D) -> Result<ScalarOrArray<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let channel = ScalarOrArray::<Option<f32>>::deserialize(deserializer)?;
    Ok(channel.map(|v| v.unwrap_or(f32::NAN)))
}

impl<T: Clone> From<Vec<T>> for ScalarOrArray<T> {
    fn from(values: Vec<T>) -> Self {
        ScalarOrArray::Array(values)
    }
}

impl<T: Clone> From<T> for ScalarOrArray<T> {
    fn from(value: T) -> Self {
        ScalarOrArray::Scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_repeats_to_len() {
        let value = ScalarOrArray::new_scalar(2.0_f32);
        assert_eq!(value.as_vec(3), vec![2.0, 2.0, 2.0]);
        assert_eq!(value.get(10), Some(&2.0));
        assert!(value.equals_scalar(2.0));
    }

    #[test]
    fn test_array_ignores_scalar_len() {
        let value: ScalarOrArray<f32> = vec![1.0, 2.0].into();
        assert_eq!(value.as_vec(5), vec![1.0, 2.0]);
        assert_eq!(value.get(2), None);
        assert_eq!(value.map(|v| v * 10.0).as_vec(0), vec![10.0, 20.0]);
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Channel {
        #[serde(deserialize_with = "deserialize_f32_channel")]
        height: ScalarOrArray<f32>,
    }

    #[test]
    fn test_nan_channel_reads_back() {
        let channel = Channel {
            height: vec![280.0, f32::NAN].into(),
        };
        let json = serde_json::to_string(&channel).unwrap();
        assert!(json.contains("null"));

        let restored: Channel = serde_json::from_str(&json).unwrap();
        let height = restored.height.as_vec(0);
        assert_eq!(height[0], 280.0);
        assert!(height[1].is_nan());

        let scalar: Channel =
            serde_json::from_str(r#"{"height": {"type": "scalar", "value": null}}"#).unwrap();
        assert!(scalar.height.get(0).is_some_and(|v| v.is_nan()));
    }
}
