use serde::{Deserialize, Serialize};

use crate::core::ThresholdGeometry;
use crate::error::{ChartError, ChartResult};

pub const THRESHOLD_GEOMETRY_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope used when geometry is handed to a non-Rust renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdGeometryJsonContractV1 {
    pub schema_version: u32,
    pub geometry: ThresholdGeometry,
}

impl ThresholdGeometry {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize threshold geometry: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ThresholdGeometryJsonContractV1 {
            schema_version: THRESHOLD_GEOMETRY_JSON_SCHEMA_V1,
            geometry: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize threshold geometry contract v1: {e}"
            ))
        })
    }

    /// Accepts either bare geometry JSON or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(geometry) = serde_json::from_str::<ThresholdGeometry>(input) {
            return Ok(geometry);
        }
        let payload: ThresholdGeometryJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse threshold geometry json: {e}"))
            })?;
        if payload.schema_version != THRESHOLD_GEOMETRY_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported threshold geometry schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.geometry)
    }
}
