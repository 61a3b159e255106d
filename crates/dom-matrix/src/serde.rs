use glam::DMat4;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use crate::matrix::DomMatrix;

// Text formats such as JSON have no literal for non-finite numbers, so those cells
// travel by name.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Cell {
    Number(f64),
    Named(String),
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Cell::Number(value)
        } else if value.is_nan() {
            Cell::Named("NaN".to_string())
        } else if value.is_sign_positive() {
            Cell::Named("Infinity".to_string())
        } else {
            Cell::Named("-Infinity".to_string())
        }
    }
}

impl Cell {
    fn into_value(self) -> Result<f64, String> {
        match self {
            Cell::Number(value) => Ok(value),
            Cell::Named(name) => match name.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(format!("Invalid matrix cell: {other}")),
            },
        }
    }
}

impl Serialize for DomMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let data: Vec<Cell> = self
            .to_float64_array()
            .into_iter()
            .map(Cell::from)
            .collect();

        let mut state = serializer.serialize_struct("DomMatrix", 2)?;
        state.serialize_field("data", &data)?;
        state.serialize_field("is_2d", &self.is_2d)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for DomMatrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData {
            data: Vec<Cell>,
            is_2d: bool,
        }

        let MatrixData { data, is_2d } = MatrixData::deserialize(deserializer)?;

        let cells = data
            .into_iter()
            .map(Cell::into_value)
            .collect::<Result<Vec<f64>, _>>()
            .map_err(serde::de::Error::custom)?;

        let cells: [f64; 16] = cells
            .try_into()
            .map_err(|v: Vec<f64>| serde::de::Error::invalid_length(v.len(), &"16 matrix cells"))?;

        Ok(DomMatrix {
            inner: DMat4::from_cols_array(&cells),
            is_2d,
        })
    }
}
