use crate::profile::{GeneExpressionProfile, SYNTHETIC_GENE_PREFIX};

pub struct DiseasePreset {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub baseline_genes: &'static [(&'static str, f64)],
    pub drug_name: &'static str,
    pub drug_image_url: &'static str,
}

impl DiseasePreset {
    pub fn baseline_profile(&self) -> GeneExpressionProfile {
        self.baseline_genes
            .iter()
            .map(|&(gene, value)| (gene.to_string(), value))
            .collect()
    }
}

pub static DISEASE_PRESETS: &[DiseasePreset] = &[
    DiseasePreset {
        key: "lung",
        label: "Lung Cancer",
        description: "Characterised by EGFR and KRAS over-expression together with loss of TP53 function.",
        baseline_genes: &[
            ("EGFR", 5.0),
            ("KRAS", 3.5),
            ("TP53", -3.0),
            ("PTEN", -2.0),
            ("VEGFA", 2.5),
            ("ALK", 4.2),
            ("ROS1", 3.8),
            ("MET", 2.9),
            ("RET", 2.1),
            ("BRAF", 1.5),
            ("NTRK1", 1.2),
        ],
        drug_name: "Gefitinib (Iressa) Analog",
        drug_image_url: "https://pubchem.ncbi.nlm.nih.gov/image/imagefly.cgi?cid=123631&width=400&height=400",
    },
    DiseasePreset {
        key: "breast",
        label: "Breast Cancer",
        description: "Reduced BRCA1/2 function and amplification of the HER2 (ERBB2) gene are observed.",
        baseline_genes: &[
            ("BRCA1", -4.0),
            ("BRCA2", -3.5),
            ("ERBB2", 4.5),
            ("PIK3CA", 2.0),
            ("MYC", 1.8),
            ("ESR1", 3.2),
            ("PGR", 2.5),
            ("AKT1", 2.1),
            ("GATA3", -1.5),
            ("CDH1", -2.8),
            ("CCND1", 2.4),
        ],
        drug_name: "Lapatinib Analog",
        drug_image_url: "https://pubchem.ncbi.nlm.nih.gov/image/imagefly.cgi?cid=208908&width=400&height=400",
    },
    DiseasePreset {
        key: "colorectal",
        label: "Colorectal Cancer",
        description: "Driven mainly by loss of APC together with KRAS and BRAF mutations.",
        baseline_genes: &[
            ("APC", -4.5),
            ("KRAS", 3.0),
            ("TP53", -2.5),
            ("BRAF", 2.0),
            ("SMAD4", -1.5),
            ("NRAS", 2.2),
            ("PIK3CA", 1.8),
            ("FBXW7", -2.0),
            ("TGFBR2", -1.8),
            ("BAX", -1.2),
        ],
        drug_name: "Regorafenib Analog",
        drug_image_url: "https://pubchem.ncbi.nlm.nih.gov/image/imagefly.cgi?cid=11167602&width=400&height=400",
    },
    DiseasePreset {
        key: "pancreatic",
        label: "Pancreatic Cancer",
        description: "KRAS mutations are found in over 90% of cases and the prognosis is poor.",
        baseline_genes: &[
            ("KRAS", 5.5),
            ("TP53", -3.5),
            ("SMAD4", -3.0),
            ("CDKN2A", -2.5),
            ("GNAS", 2.1),
            ("RNF43", -1.9),
            ("ATM", -2.2),
            ("MLH1", -1.5),
            ("ARID1A", -1.8),
        ],
        drug_name: "Gemcitabine Analog",
        drug_image_url: "https://pubchem.ncbi.nlm.nih.gov/image/imagefly.cgi?cid=60750&width=400&height=400",
    },
    DiseasePreset {
        key: "glioblastoma",
        label: "Glioblastoma",
        description: "The most aggressive brain tumour, marked by EGFR amplification and PTEN loss.",
        baseline_genes: &[
            ("EGFR", 4.8),
            ("PTEN", -4.0),
            ("IDH1", 2.5),
            ("NF1", -2.0),
            ("TERT", 3.5),
            ("ATRX", -2.5),
            ("MGMT", -3.0),
            ("RB1", -2.2),
            ("TP53", -2.8),
        ],
        drug_name: "Temozolomide Analog",
        drug_image_url: "https://pubchem.ncbi.nlm.nih.gov/image/imagefly.cgi?cid=5394&width=400&height=400",
    },
];

pub fn find_preset(key: &str) -> Option<&'static DiseasePreset> {
    DISEASE_PRESETS.iter().find(|preset| preset.key == key)
}

static GENE_DESCRIPTIONS: &[(&str, &str)] = &[
    // Common cancer genes
    ("EGFR", "Cell growth signal receptor (major lung cancer target)"),
    ("KRAS", "Cell proliferation and survival signal transducer (MAPK pathway)"),
    ("TP53", "The 'guardian of the genome' that prevents tumour formation (Tumor Suppressor)"),
    ("PTEN", "Tumour suppressor and regulator of PI3K signalling"),
    ("VEGFA", "Angiogenesis factor that supplies tumours with nutrients"),
    ("BRCA1", "DNA double-strand break repair and breast cancer suppression"),
    ("BRCA2", "DNA damage repair and genome stability"),
    ("MYC", "Potent transcription factor controlling proliferation and metabolism"),
    ("PIK3CA", "Signalling enzyme promoting cell survival and growth"),
    ("CDKN2A", "Cell cycle control (G1/S Checkpoint) and tumour suppression"),
    ("APC", "Wnt pathway suppressor linked to colorectal cancer"),
    ("BRAF", "Cell growth signalling (MAPK pathway Kinase)"),
    ("SMAD4", "TGF-beta signalling and tumour suppression"),
    ("IDH1", "Metabolic enzyme with brain-tumour associated mutations"),
    ("NF1", "RAS signalling suppressor linked to neurofibromatosis"),
    // Disease-specific markers
    ("ALK", "Anaplastic lymphoma kinase (lung cancer fusion gene)"),
    ("ROS1", "Receptor tyrosine kinase (lung cancer fusion gene)"),
    ("MET", "Hepatocyte growth factor receptor (proliferation and metastasis)"),
    ("RET", "Neurotrophic factor signalling (thyroid and lung cancer)"),
    ("NTRK1", "Neurotrophin receptor (rare cancer driver)"),
    ("ESR1", "Oestrogen receptor (breast cancer hormone therapy target)"),
    ("PGR", "Progesterone receptor (breast cancer prognostic factor)"),
    ("AKT1", "Cell survival and growth signalling (PI3K pathway)"),
    ("GATA3", "Transcription factor controlling mammary epithelial differentiation"),
    ("CDH1", "E-cadherin (maintains adhesion and suppresses metastasis)"),
    ("CCND1", "Cyclin D1 (drives cell cycle progression)"),
    ("NRAS", "RAS family signalling protein (melanoma and colorectal cancer)"),
    ("FBXW7", "Degrades cell cycle regulators (tumour suppressor)"),
    ("TGFBR2", "TGF-beta receptor (anti-proliferative signal)"),
    ("BAX", "Apoptosis-inducing protein"),
    ("GNAS", "G-protein alpha subunit (involved in pancreatic cancer)"),
    ("RNF43", "Wnt pathway suppressor (Ubiquitin ligase)"),
    ("ATM", "Senses DNA damage and starts repair signalling"),
    ("MLH1", "DNA Mismatch Repair protein"),
    ("ARID1A", "Chromatin remodelling complex (tumour suppressor)"),
    ("TERT", "Telomerase reverse transcriptase (cellular immortality)"),
    ("ATRX", "Chromatin remodelling and telomere maintenance"),
    ("MGMT", "DNA repair enzyme (linked to chemotherapy resistance)"),
    ("RB1", "Retinoblastoma protein (cell cycle suppressor)"),
    // Genes that show up in simulation output
    ("MT-ND4", "Mitochondrial respiratory complex I subunit (energy metabolism)"),
    ("PDE10A", "cAMP/cGMP degrading enzyme (signal modulation)"),
    ("HSP90AA1", "Protein stabilisation and stress response (Chaperone)"),
    ("TMSB10", "Cytoskeleton regulator involved in metastasis"),
    ("SERPINE1", "PAI-1: fibrinolysis inhibitor and tissue fibrosis"),
    ("MALAT1", "Long non-coding RNA linked to metastatic lung adenocarcinoma"),
    ("MT-RNR1", "Mitochondrial 12S ribosomal RNA"),
    ("MT-RNR2", "Mitochondrial 16S ribosomal RNA"),
    ("NEAT1", "Nuclear structure lncRNA involved in tumour growth"),
    ("VIM", "Vimentin: epithelial-mesenchymal transition (EMT) marker"),
    ("FN1", "Fibronectin 1: promotes migration and metastasis"),
    ("GAPDH", "Housekeeping gene at the core of cell metabolism"),
    ("FNDC3B", "Regulates migration and invasion"),
    ("TRIO", "Cytoskeleton remodelling and neurite growth"),
    ("ASPH", "Enzyme promoting migration and invasion"),
    ("HSP90B1", "Endoplasmic reticulum stress response"),
    ("EXT1", "Heparan sulfate biosynthesis and tumour suppression"),
    ("SPARC", "Extracellular matrix regulation and invasion"),
    ("PDE4D", "Enzyme regulating inflammation and signalling"),
    ("TALAM1", "Candidate tumour-associated lncRNA"),
];

const SYNTHETIC_GENE_TEXT: &str = "Virtual data for whole-genome profile simulation (Simulated Data)";
const NOVEL_TARGET_TEXT: &str = "Novel therapeutic target candidate discovered by AI (Novel Target)";
const GENERIC_GENE_TEXT: &str = "Key factor in the cell metabolism and expression control network";

/// Prefixes the predictor uses for genes it cannot map back to a symbol.
const NOVEL_TARGET_PREFIXES: &[&str] = &["Gene_", "Target_"];

pub fn describe_gene(symbol: &str) -> &'static str {
    if let Some((_, text)) = GENE_DESCRIPTIONS.iter().find(|(gene, _)| *gene == symbol) {
        return text;
    }
    if symbol.starts_with(SYNTHETIC_GENE_PREFIX) {
        return SYNTHETIC_GENE_TEXT;
    }
    if NOVEL_TARGET_PREFIXES
        .iter()
        .any(|prefix| symbol.starts_with(prefix))
    {
        return NOVEL_TARGET_TEXT;
    }
    GENERIC_GENE_TEXT
}

/// Description cut before its parenthesised qualifier, for compact labels.
pub fn short_gene_description(symbol: &str) -> &'static str {
    let text = describe_gene(symbol);
    text.split('(').next().unwrap_or(text).trim()
}

struct PathwayRule {
    needles: &'static [&'static str],
    insight: &'static str,
}

// Checked top to bottom; the first rule with a matching needle wins.
static PATHWAY_RULES: &[PathwayRule] = &[
    PathwayRule {
        needles: &["Transcriptional"],
        insight: "Blocks transcription factor binding, shutting down the step where genes essential for tumour growth are transcribed into mRNA.",
    },
    PathwayRule {
        needles: &["Nuclear"],
        insight: "Disrupts nuclear chromatin structure and paraspeckle formation, undermining genome stability and worsening the tumour's survival conditions.",
    },
    PathwayRule {
        needles: &["Translation", "Folding"],
        insight: "Suppresses ribosomal protein synthesis or induces misfolded protein build-up (Proteotoxic Stress), driving cancer cells into self-destruction.",
    },
    PathwayRule {
        needles: &["Metabolism", "Metabolic"],
        insight: "Targets the tumour's excessive energy consumption (Warburg Effect), cutting the nutrient supply needed for rapid growth.",
    },
    PathwayRule {
        needles: &["Signaling"],
        insight: "Blocks the signalling network that relays proliferation and survival commands, halting cell division.",
    },
    PathwayRule {
        needles: &["Metastasis", "EMT", "Motility"],
        insight: "Suppresses the epithelial-mesenchymal transition (EMT) that makes cells mobile, preventing spread to other organs.",
    },
    PathwayRule {
        needles: &["Cycle"],
        insight: "Forces uncontrolled division cycles to stop (Cell Cycle Arrest), restraining tumour growth.",
    },
    PathwayRule {
        needles: &["Immune", "Inflammation"],
        insight: "Modulates inflammation in the tumour microenvironment and helps immune cells attack cancer cells.",
    },
];

const GENERIC_PATHWAY_TEXT: &str = "Modulates core biological networks essential for cell survival, producing a combined anti-cancer effect.";

pub fn describe_pathway(name: &str) -> &'static str {
    PATHWAY_RULES
        .iter()
        .find(|rule| rule.needles.iter().any(|needle| name.contains(needle)))
        .map(|rule| rule.insight)
        .unwrap_or(GENERIC_PATHWAY_TEXT)
}
