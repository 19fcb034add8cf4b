//! State transitions applied to the single `AppState` record.

use crate::data::{self, describe_pathway};
use crate::error::{DashboardError, Stage, ValidationError};
use crate::gateway::{GatewayError, Predictor};
use crate::models::{AppState, DrugVector, Notice, SimulationResult};
use crate::profile::{self, GeneExpressionProfile, RandomSource};
use poll_promise::Promise;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

pub const DRUG_PHASES: [&str; 3] = [
    "🧬 Genomic Variation Analysis...",
    "🔍 Searching Chemical Space...",
    "🧪 Generating Molecular Structure...",
];
pub const SIMULATION_PHASE: &str = "📊 Simulating Drug Response...";

/// Pathway label the predictor uses when it cannot classify a gene set.
pub const UNKNOWN_PATHWAY: &str = "Unknown/Novel Pathway";
pub const MAX_PATHWAY_INSIGHTS: usize = 4;
pub const DRUG_PREVIEW_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct PacingStep {
    pub message: String,
    pub duration: Duration,
}

/// The narrated steps shown before a drug request goes out.
pub fn drug_pacing(step: Duration) -> Vec<PacingStep> {
    DRUG_PHASES
        .iter()
        .map(|message| PacingStep {
            message: message.to_string(),
            duration: step,
        })
        .collect()
}

pub fn select_preset(state: &mut AppState, key: &str) -> Result<(), ValidationError> {
    let preset =
        data::find_preset(key).ok_or_else(|| ValidationError::UnknownPreset(key.to_string()))?;
    state.profile = preset.baseline_profile();
    state.selected_preset = Some(preset.key);
    state.drug_vector.clear();
    state.simulation.clear();
    state.activity.push(format!("Selected preset '{}'", preset.label));
    Ok(())
}

pub fn reset(state: &mut AppState) {
    state.profile.clear();
    state.selected_preset = None;
    state.drug_vector.clear();
    state.simulation.clear();
    state.activity.push("Reset");
}

/// Upserts one gene. Text that does not parse is stored as NaN.
pub fn edit_gene(state: &mut AppState, symbol: &str, raw: &str) {
    let value = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
    state.profile.insert(symbol.to_string(), value);
}

pub fn expand_to_full_profile(
    state: &mut AppState,
    rng: &mut dyn RandomSource,
) -> Result<(), ValidationError> {
    let preset = state
        .selected_preset
        .and_then(data::find_preset)
        .ok_or(ValidationError::NoPresetSelected)?;
    state.profile = profile::expand_profile(&preset.baseline_profile(), rng);
    info!(genes = state.profile.len(), "expanded to full profile");
    state.activity.push(format!(
        "Loaded {} genes for '{}'",
        state.profile.len(),
        preset.label
    ));
    state.notice = Some(Notice::info(
        "Profile loaded",
        "🧬 500+ Genes Loaded from Patient Database (WGS/RNA-seq)!",
    ));
    Ok(())
}

pub struct DrugJob {
    profile: GeneExpressionProfile,
    pacing: Vec<PacingStep>,
}

impl DrugJob {
    pub fn run(
        self,
        predictor: &dyn Predictor,
        on_phase: &mut dyn FnMut(&str),
    ) -> Result<DrugVector, GatewayError> {
        for step in &self.pacing {
            on_phase(&step.message);
            if !step.duration.is_zero() {
                thread::sleep(step.duration);
            }
        }
        predictor.find_drug(&self.profile)
    }
}

pub fn begin_drug_request(
    state: &mut AppState,
    pacing: &[PacingStep],
) -> Result<DrugJob, ValidationError> {
    if state.profile.is_empty() {
        return Err(ValidationError::NoGenes);
    }
    let first = pacing.first().map(|s| s.message.as_str()).unwrap_or(DRUG_PHASES[0]);
    state.status.start(first);
    info!(genes = state.profile.len(), "drug request started");
    state.activity.push(format!(
        "Requesting drug candidate for {} genes",
        state.profile.len()
    ));
    Ok(DrugJob {
        profile: state.profile.clone(),
        pacing: pacing.to_vec(),
    })
}

pub fn finish_drug_request(
    state: &mut AppState,
    result: Result<DrugVector, GatewayError>,
) -> Result<(), DashboardError> {
    state.status.idle();
    match result {
        Ok(vector) => {
            state.activity.push(format!("Drug candidate received ({} dims)", vector.len()));
            state.drug_vector = vector;
            state.simulation.clear();
            Ok(())
        }
        Err(source) => {
            warn!(error = %source, "drug request failed");
            state.activity.push(format!("Drug generation failed: {source}"));
            Err(DashboardError::Gateway {
                stage: Stage::DrugGeneration,
                source,
            })
        }
    }
}

pub fn request_drug(
    state: &mut AppState,
    predictor: &dyn Predictor,
    pacing: &[PacingStep],
) -> Result<(), DashboardError> {
    let job = begin_drug_request(state, pacing)?;
    let result = job.run(predictor, &mut |message: &str| {
        state.status.phase_message = message.to_string();
    });
    finish_drug_request(state, result)
}

pub struct SimulationJob {
    drug_vector: DrugVector,
    profile: GeneExpressionProfile,
}

impl SimulationJob {
    pub fn run(self, predictor: &dyn Predictor) -> Result<SimulationResult, GatewayError> {
        predictor.simulate_response(&self.drug_vector, &self.profile)
    }
}

pub fn begin_simulation(state: &mut AppState) -> Result<SimulationJob, ValidationError> {
    if state.drug_vector.is_empty() {
        return Err(ValidationError::NoDrug);
    }
    state.status.start(SIMULATION_PHASE);
    info!(dims = state.drug_vector.len(), "simulation started");
    state.activity.push("Running drug response simulation");
    Ok(SimulationJob {
        drug_vector: state.drug_vector.clone(),
        profile: state.profile.clone(),
    })
}

pub fn finish_simulation(
    state: &mut AppState,
    result: Result<SimulationResult, GatewayError>,
) -> Result<(), DashboardError> {
    state.status.idle();
    match result {
        Ok(simulation) if state.drug_vector.is_empty() => {
            // The drug was cleared while the request was in flight.
            warn!(
                genes = simulation.top_gene_changes.len(),
                "discarding simulation for a cleared drug"
            );
            Ok(())
        }
        Ok(simulation) => {
            state.activity.push(format!(
                "Simulation complete: {} genes, {} pathways",
                simulation.top_gene_changes.len(),
                simulation.pathway_weights.len()
            ));
            state.simulation = simulation;
            Ok(())
        }
        Err(source) => {
            warn!(error = %source, "simulation failed");
            state.activity.push(format!("Simulation failed: {source}"));
            Err(DashboardError::Gateway {
                stage: Stage::Simulation,
                source,
            })
        }
    }
}

pub fn request_simulation(
    state: &mut AppState,
    predictor: &dyn Predictor,
) -> Result<(), DashboardError> {
    let job = begin_simulation(state)?;
    let result = job.run(predictor);
    finish_simulation(state, result)
}

/// Turns a failed operation into the blocking notice shown to the user.
pub fn report(state: &mut AppState, err: &DashboardError) {
    state.notice = Some(Notice::error(err.title(), err.to_string()));
}

enum JobOutcome {
    Drug(Result<DrugVector, GatewayError>),
    Simulation(Result<SimulationResult, GatewayError>),
}

/// A backend request running on a worker thread.
pub struct PendingRequest {
    promise: Option<Promise<JobOutcome>>,
    phases: Receiver<String>,
}

impl PendingRequest {
    pub fn spawn_drug(job: DrugJob, predictor: Arc<dyn Predictor>) -> Self {
        let (tx, phases) = mpsc::channel();
        let promise = Promise::spawn_thread("find_drug_request", move || {
            let result = job.run(predictor.as_ref(), &mut |message: &str| {
                let _ = tx.send(message.to_string());
            });
            JobOutcome::Drug(result)
        });
        PendingRequest {
            promise: Some(promise),
            phases,
        }
    }

    pub fn spawn_simulation(job: SimulationJob, predictor: Arc<dyn Predictor>) -> Self {
        let (_tx, phases) = mpsc::channel();
        let promise = Promise::spawn_thread("drug_response_request", move || {
            JobOutcome::Simulation(job.run(predictor.as_ref()))
        });
        PendingRequest {
            promise: Some(promise),
            phases,
        }
    }

    /// Forwards phase messages and, once the worker is done, applies its outcome.
    /// Returns `None` while the request is still running.
    pub fn poll(&mut self, state: &mut AppState) -> Option<Result<(), DashboardError>> {
        while let Ok(message) = self.phases.try_recv() {
            state.status.phase_message = message;
        }

        let promise = self.promise.take()?;
        match promise.try_take() {
            Ok(JobOutcome::Drug(result)) => Some(finish_drug_request(state, result)),
            Ok(JobOutcome::Simulation(result)) => Some(finish_simulation(state, result)),
            Err(promise) => {
                self.promise = Some(promise);
                None
            }
        }
    }
}

/// Up to four classified pathways paired with their insight text.
pub fn pathway_insights(result: &SimulationResult) -> Vec<(&str, &'static str)> {
    result
        .pathway_weights
        .keys()
        .filter(|name| name.as_str() != UNKNOWN_PATHWAY)
        .take(MAX_PATHWAY_INSIGHTS)
        .map(|name| (name.as_str(), describe_pathway(name)))
        .collect()
}

pub fn drug_vector_preview(vector: &[f64]) -> String {
    let head: Vec<String> = vector
        .iter()
        .take(DRUG_PREVIEW_LEN)
        .map(|v| format!("{v:.3}"))
        .collect();
    format!("[{} ... total {} dims]", head.join(", "), vector.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DISEASE_PRESETS;
    use crate::models::NoticeKind;
    use crate::profile::SYNTHETIC_GENE_COUNT;
    use crate::profile::tests::FixedSequence;
    use indexmap::IndexMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubPredictor {
        drug: Mutex<Option<DrugVector>>,
        simulation: Mutex<Option<SimulationResult>>,
        drug_calls: AtomicUsize,
        simulation_calls: AtomicUsize,
    }

    impl StubPredictor {
        fn with_drug(vector: DrugVector) -> Self {
            let stub = StubPredictor::default();
            *stub.drug.lock().unwrap() = Some(vector);
            stub
        }

        fn with_simulation(result: SimulationResult) -> Self {
            let stub = StubPredictor::default();
            *stub.simulation.lock().unwrap() = Some(result);
            stub
        }
    }

    fn unreachable(endpoint: &str) -> GatewayError {
        GatewayError::Status {
            endpoint: endpoint.to_string(),
            status: 503,
            body: "unavailable".to_string(),
        }
    }

    impl Predictor for StubPredictor {
        fn find_drug(&self, profile: &GeneExpressionProfile) -> Result<DrugVector, GatewayError> {
            assert!(!profile.is_empty());
            self.drug_calls.fetch_add(1, Ordering::SeqCst);
            self.drug
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| unreachable("find_drug"))
        }

        fn simulate_response(
            &self,
            drug_vector: &[f64],
            _profile: &GeneExpressionProfile,
        ) -> Result<SimulationResult, GatewayError> {
            assert!(!drug_vector.is_empty());
            self.simulation_calls.fetch_add(1, Ordering::SeqCst);
            self.simulation
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| unreachable("drug_response"))
        }
    }

    fn weights(pairs: &[(&str, f64)]) -> IndexMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn sample_simulation() -> SimulationResult {
        SimulationResult {
            top_gene_changes: weights(&[("EGFR", 1.5), ("KRAS", -0.8)]),
            pathway_weights: weights(&[("Signaling", 0.6), ("Metabolism", 0.4)]),
        }
    }

    fn fifty_dims() -> DrugVector {
        let mut vector = vec![0.1];
        vector.extend((1..49).map(|i| 0.1 + i as f64 * 0.01));
        vector.push(0.1);
        vector
    }

    fn no_pacing() -> Vec<PacingStep> {
        drug_pacing(Duration::ZERO)
    }

    fn populated_state() -> AppState {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();
        state.drug_vector = vec![0.5; 8];
        state.simulation = sample_simulation();
        state
    }

    #[test]
    fn select_preset_loads_baseline_and_clears_results() {
        for preset in DISEASE_PRESETS {
            let mut state = populated_state();
            select_preset(&mut state, preset.key).unwrap();
            assert_eq!(state.profile, preset.baseline_profile());
            assert_eq!(state.selected_preset, Some(preset.key));
            assert!(state.drug_vector.is_empty());
            assert!(state.simulation.is_empty());
        }
    }

    #[test]
    fn unknown_preset_is_rejected_without_changes() {
        let mut state = populated_state();
        let err = select_preset(&mut state, "melanoma").unwrap_err();
        assert_eq!(err, ValidationError::UnknownPreset("melanoma".to_string()));
        assert_eq!(state.selected_preset, Some("lung"));
        assert_eq!(state.drug_vector.len(), 8);
    }

    #[test]
    fn reset_clears_everything_from_any_state() {
        let mut states = vec![AppState::default(), populated_state()];
        let mut expanded = populated_state();
        expand_to_full_profile(&mut expanded, &mut FixedSequence::new(vec![0.3])).unwrap();
        states.push(expanded);

        for mut state in states {
            reset(&mut state);
            assert!(state.profile.is_empty());
            assert_eq!(state.selected_preset, None);
            assert!(state.drug_vector.is_empty());
            assert!(state.simulation.is_empty());
        }
    }

    #[test]
    fn edit_gene_upserts_and_stores_nan_for_bad_input() {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();

        edit_gene(&mut state, "EGFR", " 7.25 ");
        assert_eq!(state.profile["EGFR"], 7.25);
        assert_eq!(state.profile.get_index(0).unwrap().0, "EGFR");

        edit_gene(&mut state, "KRAS", "abc");
        assert!(state.profile["KRAS"].is_nan());

        edit_gene(&mut state, "KRAS", "-1");
        assert_eq!(state.profile["KRAS"], -1.0);

        edit_gene(&mut state, "MYC", "2");
        assert_eq!(state.profile.len(), 12);
        assert_eq!(state.profile.last(), Some((&"MYC".to_string(), &2.0)));
    }

    #[test]
    fn editing_keeps_existing_results() {
        let mut state = populated_state();
        edit_gene(&mut state, "EGFR", "0");
        assert_eq!(state.drug_vector.len(), 8);
        assert_eq!(state.simulation, sample_simulation());
    }

    #[test]
    fn expand_requires_a_selected_preset() {
        let mut state = AppState::default();
        let err = expand_to_full_profile(&mut state, &mut FixedSequence::new(vec![0.5]));
        assert_eq!(err, Err(ValidationError::NoPresetSelected));
        assert!(state.profile.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn expand_rebuilds_from_preset_baseline() {
        let mut state = AppState::default();
        select_preset(&mut state, "breast").unwrap();
        edit_gene(&mut state, "BRCA1", "9");

        expand_to_full_profile(&mut state, &mut FixedSequence::new(vec![0.75])).unwrap();
        assert_eq!(state.profile.len(), 11 + SYNTHETIC_GENE_COUNT);
        assert_eq!(state.profile["BRCA1"], -4.0);
        assert_eq!(state.profile["RandGene_10"], 1.0);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Info));
    }

    #[test]
    fn drug_request_stores_vector() {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();
        assert_eq!(state.profile["EGFR"], 5.0);

        let predictor = StubPredictor::with_drug(fifty_dims());
        request_drug(&mut state, &predictor, &no_pacing()).unwrap();

        assert_eq!(state.drug_vector.len(), 50);
        assert_eq!(state.drug_vector[0], 0.1);
        assert!(!state.status.busy);
        assert!(state.status.phase_message.is_empty());
    }

    #[test]
    fn successful_drug_request_invalidates_previous_simulation() {
        let mut state = populated_state();
        let predictor = StubPredictor::with_drug(vec![0.9; 3]);
        request_drug(&mut state, &predictor, &no_pacing()).unwrap();
        assert_eq!(state.drug_vector, vec![0.9; 3]);
        assert!(state.simulation.is_empty());
    }

    #[test]
    fn drug_request_without_genes_never_calls_gateway() {
        let mut state = AppState::default();
        let predictor = StubPredictor::with_drug(fifty_dims());
        let err = request_drug(&mut state, &predictor, &no_pacing()).unwrap_err();
        assert!(matches!(err, DashboardError::Validation(ValidationError::NoGenes)));
        assert_eq!(predictor.drug_calls.load(Ordering::SeqCst), 0);
        assert!(!state.status.busy);
    }

    #[test]
    fn failed_drug_request_leaves_state_and_clears_busy() {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();
        let predictor = StubPredictor::default();

        let err = request_drug(&mut state, &predictor, &no_pacing()).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Gateway {
                stage: Stage::DrugGeneration,
                ..
            }
        ));
        assert!(state.drug_vector.is_empty());
        assert!(!state.status.busy);

        let mut populated = populated_state();
        let _ = request_drug(&mut populated, &predictor, &no_pacing());
        assert_eq!(populated.drug_vector.len(), 8);
        assert_eq!(populated.simulation, sample_simulation());
    }

    #[test]
    fn pacing_steps_are_announced_in_order() {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();
        let job = begin_drug_request(&mut state, &no_pacing()).unwrap();
        assert!(state.status.busy);
        assert_eq!(state.status.phase_message, DRUG_PHASES[0]);

        let mut seen = Vec::new();
        let predictor = StubPredictor::with_drug(vec![1.0]);
        job.run(&predictor, &mut |m: &str| seen.push(m.to_string())).unwrap();
        assert_eq!(seen, DRUG_PHASES);
    }

    #[test]
    fn simulation_stores_both_maps() {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();
        state.drug_vector = fifty_dims();

        let predictor = StubPredictor::with_simulation(sample_simulation());
        request_simulation(&mut state, &predictor).unwrap();

        assert_eq!(state.simulation.top_gene_changes["EGFR"], 1.5);
        assert_eq!(state.simulation.pathway_weights.len(), 2);
        let signaling_text = describe_pathway("Signaling");
        let insights = pathway_insights(&state.simulation);
        assert_eq!(
            insights.iter().filter(|(_, text)| *text == signaling_text).count(),
            1
        );
        assert!(!state.status.busy);
    }

    #[test]
    fn simulation_without_drug_is_a_no_op() {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();
        let predictor = StubPredictor::with_simulation(sample_simulation());

        let err = request_simulation(&mut state, &predictor).unwrap_err();
        assert!(matches!(err, DashboardError::Validation(ValidationError::NoDrug)));
        assert_eq!(predictor.simulation_calls.load(Ordering::SeqCst), 0);
        assert!(state.simulation.is_empty());
        assert_eq!(state.status, Default::default());
        assert_eq!(state.profile, data::find_preset("lung").unwrap().baseline_profile());
    }

    #[test]
    fn failed_simulation_keeps_previous_results() {
        let mut state = populated_state();
        let predictor = StubPredictor::default();
        let err = request_simulation(&mut state, &predictor).unwrap_err();
        assert_eq!(err.to_string(), "Simulation failed.");
        assert_eq!(state.simulation, sample_simulation());
        assert!(!state.status.busy);

        report(&mut state, &err);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn simulation_for_cleared_drug_is_discarded() {
        let mut state = populated_state();
        let job = begin_simulation(&mut state).unwrap();
        reset(&mut state);
        let predictor = StubPredictor::with_simulation(sample_simulation());
        finish_simulation(&mut state, job.run(&predictor)).unwrap();
        assert!(state.simulation.is_empty());
        assert!(!state.status.busy);
    }

    #[test]
    fn pending_request_applies_outcome_on_ui_thread() {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();
        let predictor: Arc<dyn Predictor> = Arc::new(StubPredictor::with_drug(fifty_dims()));

        let job = begin_drug_request(&mut state, &no_pacing()).unwrap();
        let mut pending = PendingRequest::spawn_drug(job, predictor);

        let mut outcome = None;
        for _ in 0..500 {
            outcome = pending.poll(&mut state);
            if outcome.is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert!(matches!(outcome, Some(Ok(()))));
        assert_eq!(state.drug_vector.len(), 50);
        assert!(!state.status.busy);
    }

    /// Holds `find_drug` until the test releases it.
    struct GatedPredictor {
        release: Mutex<mpsc::Receiver<()>>,
        drug: DrugVector,
    }

    impl Predictor for GatedPredictor {
        fn find_drug(&self, _profile: &GeneExpressionProfile) -> Result<DrugVector, GatewayError> {
            self.release.lock().unwrap().recv().unwrap();
            Ok(self.drug.clone())
        }

        fn simulate_response(
            &self,
            _drug_vector: &[f64],
            _profile: &GeneExpressionProfile,
        ) -> Result<SimulationResult, GatewayError> {
            unreachable!("drug requests only")
        }
    }

    fn poll_until_done(
        pending: &mut PendingRequest,
        state: &mut AppState,
    ) -> Option<Result<(), DashboardError>> {
        for _ in 0..500 {
            if let Some(outcome) = pending.poll(state) {
                return Some(outcome);
            }
            thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[test]
    fn pending_drug_request_forwards_phases_before_outcome() {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();
        let (release, gate) = mpsc::channel();
        let predictor: Arc<dyn Predictor> = Arc::new(GatedPredictor {
            release: Mutex::new(gate),
            drug: vec![0.4; 5],
        });

        let job = begin_drug_request(&mut state, &no_pacing()).unwrap();
        let mut pending = PendingRequest::spawn_drug(job, predictor);

        for _ in 0..500 {
            assert!(pending.poll(&mut state).is_none());
            if state.status.phase_message == DRUG_PHASES[2] {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(state.status.phase_message, DRUG_PHASES[2]);
        assert!(state.status.busy);
        assert!(state.drug_vector.is_empty());
        assert!(pending.poll(&mut state).is_none());

        release.send(()).unwrap();
        assert!(matches!(poll_until_done(&mut pending, &mut state), Some(Ok(()))));
        assert_eq!(state.drug_vector, vec![0.4; 5]);
        assert!(!state.status.busy);
        assert!(state.status.phase_message.is_empty());
    }

    #[test]
    fn pending_simulation_stores_both_maps() {
        let mut state = AppState::default();
        select_preset(&mut state, "lung").unwrap();
        state.drug_vector = fifty_dims();
        let predictor: Arc<dyn Predictor> =
            Arc::new(StubPredictor::with_simulation(sample_simulation()));

        let job = begin_simulation(&mut state).unwrap();
        assert_eq!(state.status.phase_message, SIMULATION_PHASE);
        let mut pending = PendingRequest::spawn_simulation(job, predictor);

        assert!(matches!(poll_until_done(&mut pending, &mut state), Some(Ok(()))));
        assert_eq!(state.simulation, sample_simulation());
        assert_eq!(state.drug_vector.len(), 50);
        assert!(!state.status.busy);
    }

    #[test]
    fn insights_skip_unknown_and_cap_at_four() {
        let result = SimulationResult {
            top_gene_changes: IndexMap::new(),
            pathway_weights: weights(&[
                (UNKNOWN_PATHWAY, 0.3),
                ("Signaling", 0.2),
                ("Cell Cycle", 0.1),
                ("Immune Response", 0.1),
                ("Protein Folding", 0.1),
                ("Lipid Metabolism", 0.2),
            ]),
        };
        let names: Vec<&str> = pathway_insights(&result).iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["Signaling", "Cell Cycle", "Immune Response", "Protein Folding"]);
    }

    #[test]
    fn preview_shows_first_ten_values_and_length() {
        let preview = drug_vector_preview(&fifty_dims());
        assert!(preview.starts_with("[0.100, 0.110, 0.120"));
        assert!(preview.ends_with("... total 50 dims]"));
        assert_eq!(preview.matches(", ").count(), DRUG_PREVIEW_LEN - 1);
    }
}
