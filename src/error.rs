use crate::gateway::GatewayError;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter gene data or select a disease first.")]
    NoGenes,

    #[error("Select a disease first.")]
    NoPresetSelected,

    #[error("Generate a drug candidate first.")]
    NoDrug,

    #[error("Unknown disease preset '{0}'.")]
    UnknownPreset(String),
}

/// Which backend call a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DrugGeneration,
    Simulation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::DrugGeneration => f.write_str("drug generation"),
            Stage::Simulation => f.write_str("simulation"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", gateway_message(.stage))]
    Gateway {
        stage: Stage,
        #[source]
        source: GatewayError,
    },
}

// Every gateway failure of a stage maps to the same user-facing text.
fn gateway_message(stage: &Stage) -> &'static str {
    match stage {
        Stage::DrugGeneration => {
            "Drug generation failed: could not reach the prediction server (is the backend running?)"
        }
        Stage::Simulation => "Simulation failed.",
    }
}

impl DashboardError {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardError::Validation(_) => "Check your input",
            DashboardError::Gateway { stage, .. } => match stage {
                Stage::DrugGeneration => "Drug generation failed",
                Stage::Simulation => "Simulation failed",
            },
        }
    }
}
