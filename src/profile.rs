use indexmap::IndexMap;
use rand::Rng;

/// Gene symbol to expression level, in insertion order.
pub type GeneExpressionProfile = IndexMap<String, f64>;

pub const SYNTHETIC_GENE_PREFIX: &str = "RandGene_";
pub const SYNTHETIC_GENE_COUNT: usize = 500;

const SYNTHETIC_MIN: f64 = -2.0;
const SYNTHETIC_SPAN: f64 = 4.0;

/// Source of uniform samples in `[0, 1)` used to pad a profile.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

pub fn is_synthetic_gene(symbol: &str) -> bool {
    symbol.starts_with(SYNTHETIC_GENE_PREFIX)
}

pub fn synthetic_gene_count(profile: &GeneExpressionProfile) -> usize {
    profile.keys().filter(|gene| is_synthetic_gene(gene)).count()
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Copies `baseline` and appends `RandGene_0..RandGene_499` with values in `[-2.0, 2.0]`.
pub fn expand_profile(
    baseline: &GeneExpressionProfile,
    rng: &mut dyn RandomSource,
) -> GeneExpressionProfile {
    let mut full = GeneExpressionProfile::with_capacity(baseline.len() + SYNTHETIC_GENE_COUNT);
    full.extend(baseline.iter().map(|(gene, value)| (gene.clone(), *value)));

    for i in 0..SYNTHETIC_GENE_COUNT {
        let value = round_to_hundredths(rng.next_unit() * SYNTHETIC_SPAN + SYNTHETIC_MIN);
        full.insert(format!("{SYNTHETIC_GENE_PREFIX}{i}"), value);
    }
    full
}
