use crate::profile::GeneExpressionProfile;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque embedding of a generated molecule; empty means no drug yet.
pub type DrugVector = Vec<f64>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationResult {
    pub top_gene_changes: IndexMap<String, f64>,
    pub pathway_weights: IndexMap<String, f64>,
}

impl SimulationResult {
    pub fn is_empty(&self) -> bool {
        self.top_gene_changes.is_empty() && self.pathway_weights.is_empty()
    }

    pub fn clear(&mut self) {
        self.top_gene_changes.clear();
        self.pathway_weights.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiStatus {
    pub busy: bool,
    pub phase_message: String,
}

impl UiStatus {
    pub fn start(&mut self, message: &str) {
        self.busy = true;
        self.phase_message = message.to_string();
    }

    pub fn idle(&mut self) {
        self.busy = false;
        self.phase_message.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking message the user has to dismiss.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

const ACTIVITY_LOG_LIMIT: usize = 200;

#[derive(Debug, Default)]
pub struct ActivityLog {
    lines: Vec<String>,
}

impl ActivityLog {
    pub fn push(&mut self, message: impl Into<String>) {
        self.lines.push(message.into());
        if self.lines.len() > ACTIVITY_LOG_LIMIT {
            let overflow = self.lines.len() - ACTIVITY_LOG_LIMIT;
            self.lines.drain(..overflow);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub profile: GeneExpressionProfile,
    pub selected_preset: Option<&'static str>,
    pub drug_vector: DrugVector,
    pub simulation: SimulationResult,
    pub status: UiStatus,
    pub notice: Option<Notice>,
    pub activity: ActivityLog,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FindDrugRequest {
    pub genes: Vec<String>,
    pub expressions: Vec<f64>,
}

impl FindDrugRequest {
    pub fn from_profile(profile: &GeneExpressionProfile) -> Self {
        FindDrugRequest {
            genes: profile.keys().cloned().collect(),
            expressions: profile.values().copied().collect(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    pub smiles_embedding: Vec<f64>,
    pub genes: Vec<String>,
    pub expressions: Vec<f64>,
}

impl SimulationRequest {
    pub fn new(drug_vector: &[f64], profile: &GeneExpressionProfile) -> Self {
        let FindDrugRequest { genes, expressions } = FindDrugRequest::from_profile(profile);
        SimulationRequest {
            smiles_embedding: drug_vector.to_vec(),
            genes,
            expressions,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct FindDrugResponse {
    #[serde(default)]
    pub recommended_drug_vector: Option<Vec<f64>>,
}
