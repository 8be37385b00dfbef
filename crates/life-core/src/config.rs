//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Field configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Width of the cell field
    pub width: i32,
    /// Height of the cell field
    pub height: i32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 70,
            height: 30,
        }
    }
}

/// Driver loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of epochs to simulate; `None` runs until interrupted
    pub epochs: Option<u64>,
    /// Delay between rendered frames (milliseconds)
    pub delay_ms: u64,
    /// Probability for an individual cell to start alive (0.0 to 1.0)
    pub alive_probability: f64,
    /// Random seed for reproducibility; `None` derives one from the clock
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            epochs: None,
            delay_ms: 100,
            alive_probability: 0.5,
            seed: None,
        }
    }
}
