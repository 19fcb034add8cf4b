use crate::models::{
    DrugVector, FindDrugRequest, FindDrugResponse, SimulationRequest, SimulationResult,
};
use crate::profile::GeneExpressionProfile;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

const FIND_DRUG_PATH: &str = "predict/find_drug";
const DRUG_RESPONSE_PATH: &str = "predict/drug_response";

/// Accepted names for the top-genes mapping, in order of preference.
const TOP_GENE_FIELDS: &[&str] = &["top_genes", "top_gene_changes"];
const PATHWAY_FIELDS: &[&str] = &["pathways"];

const BODY_EXCERPT_CHARS: usize = 200;

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("HTTP client initialization failed: {0}")]
    ClientInit(reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("unexpected response from {endpoint}: {message}")]
    Protocol { endpoint: String, message: String },
}

/// The external prediction service.
pub trait Predictor: Send + Sync {
    fn find_drug(&self, profile: &GeneExpressionProfile) -> Result<DrugVector, GatewayError>;

    fn simulate_response(
        &self,
        drug_vector: &[f64],
        profile: &GeneExpressionProfile,
    ) -> Result<SimulationResult, GatewayError>;
}

pub struct HttpPredictor {
    client: reqwest::blocking::Client,
    base: String,
}

impl HttpPredictor {
    /// Builds a blocking client; `None` disables the request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("drugscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GatewayError::ClientInit)?;
        Ok(Self {
            client,
            base: base_url.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, GatewayError> {
        let endpoint = self.endpoint(path);
        let transport = |source: reqwest::Error| GatewayError::Transport {
            endpoint: endpoint.clone(),
            source,
        };

        let resp = self
            .client
            .post(&endpoint)
            .json(body)
            .send()
            .map_err(transport)?;
        let status = resp.status();
        let text = resp.text().map_err(transport)?;

        if !status.is_success() {
            warn!(%endpoint, status = status.as_u16(), "prediction service rejected request");
            return Err(GatewayError::Status {
                endpoint,
                status: status.as_u16(),
                body: body_excerpt(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::Protocol {
            endpoint: endpoint.clone(),
            message: format!("invalid JSON: {e}"),
        })
    }
}

impl Predictor for HttpPredictor {
    fn find_drug(&self, profile: &GeneExpressionProfile) -> Result<DrugVector, GatewayError> {
        let req = FindDrugRequest::from_profile(profile);
        debug!(genes = req.genes.len(), "posting find_drug");
        let body = self.post_json(FIND_DRUG_PATH, &req)?;
        let vector = parse_find_drug(body).map_err(|message| GatewayError::Protocol {
            endpoint: self.endpoint(FIND_DRUG_PATH),
            message,
        })?;
        info!(dims = vector.len(), "drug vector received");
        Ok(vector)
    }

    fn simulate_response(
        &self,
        drug_vector: &[f64],
        profile: &GeneExpressionProfile,
    ) -> Result<SimulationResult, GatewayError> {
        let req = SimulationRequest::new(drug_vector, profile);
        debug!(
            dims = req.smiles_embedding.len(),
            genes = req.genes.len(),
            "posting drug_response"
        );
        let body = self.post_json(DRUG_RESPONSE_PATH, &req)?;
        let result = parse_simulation(&body).map_err(|message| GatewayError::Protocol {
            endpoint: self.endpoint(DRUG_RESPONSE_PATH),
            message,
        })?;
        info!(
            genes = result.top_gene_changes.len(),
            pathways = result.pathway_weights.len(),
            "simulation result received"
        );
        Ok(result)
    }
}

fn body_excerpt(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

fn resolve_field<'a>(
    body: &'a Value,
    names: &'static [&'static str],
) -> Option<(&'static str, &'a Value)> {
    names
        .iter()
        .find_map(|name| body.get(*name).filter(|v| !v.is_null()).map(|v| (*name, v)))
}

fn parse_find_drug(body: Value) -> Result<DrugVector, String> {
    let resp: FindDrugResponse =
        serde_json::from_value(body).map_err(|e| format!("recommended_drug_vector: {e}"))?;
    resp.recommended_drug_vector
        .ok_or_else(|| "missing field `recommended_drug_vector`".to_string())
}

fn parse_weights(field: &str, value: &Value) -> Result<IndexMap<String, f64>, String> {
    IndexMap::<String, f64>::deserialize(value).map_err(|e| format!("{field}: {e}"))
}

fn parse_simulation(body: &Value) -> Result<SimulationResult, String> {
    let (field, top) = resolve_field(body, TOP_GENE_FIELDS)
        .ok_or_else(|| format!("missing field, expected one of {TOP_GENE_FIELDS:?}"))?;
    let top_gene_changes = parse_weights(field, top)?;

    let pathway_weights = match resolve_field(body, PATHWAY_FIELDS) {
        Some((field, value)) => parse_weights(field, value)?,
        None => IndexMap::new(),
    };

    Ok(SimulationResult {
        top_gene_changes,
        pathway_weights,
    })
}
