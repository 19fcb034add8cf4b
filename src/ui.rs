use crate::controller::{DRUG_PREVIEW_LEN, drug_vector_preview, pathway_insights};
use crate::data::{self, DISEASE_PRESETS, describe_gene, short_gene_description};
use crate::models::{AppState, Notice, NoticeKind, SimulationResult};
use crate::profile::{is_synthetic_gene, synthetic_gene_count};
use eframe::egui;
use eframe::egui::{Align2, Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};
use std::collections::HashMap;
use std::f32::consts::TAU;

const INCREASE_COLOR: Color32 = Color32::from_rgb(0xff, 0x76, 0x75);
const DECREASE_COLOR: Color32 = Color32::from_rgb(0x74, 0xb9, 0xff);
const ACCENT_COLOR: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);
const PATHWAY_PALETTE: [Color32; 7] = [
    Color32::from_rgb(0x00, 0x88, 0xfe),
    Color32::from_rgb(0x00, 0xc4, 0x9f),
    Color32::from_rgb(0xff, 0xbb, 0x28),
    Color32::from_rgb(0xff, 0x80, 0x42),
    Color32::from_rgb(0x88, 0x84, 0xd8),
    Color32::from_rgb(0xff, 0x76, 0x75),
    Color32::from_rgb(0xa2, 0x9b, 0xfe),
];

const GENE_GRID_COLUMNS: usize = 4;
const DONUT_INNER_RADIUS: f32 = 70.0;
const DONUT_OUTER_RADIUS: f32 = 100.0;
const DONUT_PADDING_ANGLE: f32 = 5.0_f32 * TAU / 360.0;

/// What the user asked for this frame. The app applies these through the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectPreset(&'static str),
    Reset,
    EditGene { symbol: String, raw: String },
    ExpandProfile,
    FindDrug,
    Simulate,
    DismissNotice,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Tab {
    Genomics,
    Simulation,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Genomics => "Genomic Analysis & Drug Generation",
            Tab::Simulation => "Efficacy Simulation",
        }
    }
}

/// Text currently typed into each gene field, so partial input survives re-renders.
pub type GeneDrafts = HashMap<String, String>;

pub fn side_panel(ui: &mut Ui, state: &AppState, actions: &mut Vec<Action>) {
    ui.label(RichText::new("Target Disease").strong());
    ui.add_space(4.0);

    let busy = state.status.busy;
    for preset in DISEASE_PRESETS {
        let selected = state.selected_preset == Some(preset.key);
        let response = ui.add_enabled(!busy, egui::SelectableLabel::new(selected, preset.label));
        if response.clicked() {
            actions.push(Action::SelectPreset(preset.key));
        }
    }

    ui.add_space(8.0);
    if ui
        .add_enabled(!busy, egui::Button::new("🔄 Reset"))
        .clicked()
    {
        actions.push(Action::Reset);
    }

    if let Some(preset) = state.selected_preset.and_then(data::find_preset) {
        ui.separator();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(RichText::new("ℹ Case Description").strong().color(ACCENT_COLOR));
            ui.label(preset.description);
        });
    }
}

pub fn tab_bar(ui: &mut Ui, selected: &mut Tab) {
    ui.horizontal(|ui| {
        for tab in [Tab::Genomics, Tab::Simulation] {
            if ui.selectable_label(*selected == tab, tab.label()).clicked() {
                *selected = tab;
            }
        }
    });
}

fn format_gene_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

pub fn genomics_tab(ui: &mut Ui, state: &AppState, drafts: &mut GeneDrafts, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.heading("Patient Gene Expression");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(
                    !state.status.busy,
                    egui::Button::new("📂 Load Full Patient Profile (Whole Genome)"),
                )
                .clicked()
            {
                actions.push(Action::ExpandProfile);
            }
        });
    });
    ui.separator();

    if state.profile.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.weak("👈 Please select a disease to start.");
            ui.add_space(20.0);
        });
    } else {
        gene_grid(ui, state, drafts, actions);
    }

    let synthetic = synthetic_gene_count(&state.profile);
    if synthetic > 0 {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(format!(
                    "🧬 Background Data Loaded: + {synthetic} Simulated Genes (Whole Genome Profile) are ready for analysis."
                ));
            });
        });
    }

    ui.add_space(10.0);
    let label = if state.status.busy {
        state.status.phase_message.clone()
    } else {
        "💊 Generate Drug Candidate".to_string()
    };
    let enabled = !state.status.busy && !state.profile.is_empty();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(enabled, egui::Button::new(RichText::new(label).size(16.0)))
            .clicked()
        {
            actions.push(Action::FindDrug);
        }
        if state.status.busy {
            ui.spinner();
        }
    });

    if !state.drug_vector.is_empty() {
        ui.add_space(12.0);
        drug_card(ui, state);
    }
}

fn gene_grid(ui: &mut Ui, state: &AppState, drafts: &mut GeneDrafts, actions: &mut Vec<Action>) {
    egui::Grid::new("gene_grid")
        .num_columns(GENE_GRID_COLUMNS)
        .spacing([16.0, 12.0])
        .show(ui, |ui| {
            let visible = state.profile.iter().filter(|(gene, _)| !is_synthetic_gene(gene));
            for (i, (gene, value)) in visible.enumerate() {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(gene.as_str()).strong());
                        ui.small(format!("- {}", short_gene_description(gene)));
                    });
                    let mut text = drafts
                        .get(gene)
                        .cloned()
                        .unwrap_or_else(|| format_gene_value(*value));
                    let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(160.0));
                    if response.changed() {
                        actions.push(Action::EditGene {
                            symbol: gene.clone(),
                            raw: text.clone(),
                        });
                        drafts.insert(gene.clone(), text);
                    }
                });
                if (i + 1) % GENE_GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}

fn drug_card(ui: &mut Ui, state: &AppState) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("✨ AI Generated Drug Candidate").size(18.0).strong());
        ui.add_space(8.0);
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(240.0);
                match state.selected_preset.and_then(data::find_preset) {
                    Some(preset) => {
                        ui.add(
                            egui::Image::new(preset.drug_image_url)
                                .max_height(180.0)
                                .max_width(220.0),
                        );
                        ui.weak(format!("Scaffold: {}", preset.drug_name));
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(Vec2::new(200.0, 180.0), Sense::hover());
                        ui.painter().rect_filled(rect, 10.0, Color32::from_gray(60));
                        ui.painter().text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            "Structure Generated",
                            egui::FontId::proportional(14.0),
                            Color32::from_gray(170),
                        );
                    }
                }
            });

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(Color32::from_rgb(0x27, 0xae, 0x60), "Prediction Score: 0.982");
                    ui.colored_label(Color32::from_rgb(0xd6, 0x30, 0x31), "Toxicity: Low");
                });
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Latent Vector: {}", drug_vector_preview(&state.drug_vector)))
                        .monospace()
                        .size(12.0),
                )
                .on_hover_text(format!("First {DRUG_PREVIEW_LEN} of {} values", state.drug_vector.len()));
                ui.add_space(6.0);
                ui.label(
                    "✅ The patient's expression pattern was reverse-mapped to design an optimal \
                     molecular structure that could normalise it.",
                );
            });
        });
    });
}

pub fn simulation_tab(ui: &mut Ui, state: &AppState, actions: &mut Vec<Action>) {
    ui.heading("Efficacy Simulation (In-Silico Validation)");
    ui.label("Predicts how the cell's gene-expression network changes once the generated drug is administered.");
    ui.separator();

    let label = if state.status.busy {
        state.status.phase_message.clone()
    } else {
        "📊 Run Simulation".to_string()
    };
    let enabled = !state.status.busy && !state.drug_vector.is_empty();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(enabled, egui::Button::new(RichText::new(label).size(16.0)))
            .clicked()
        {
            actions.push(Action::Simulate);
        }
        if state.status.busy {
            ui.spinner();
        }
    });
    if state.drug_vector.is_empty() {
        ui.weak("Generate a drug candidate first.");
    }

    let result = &state.simulation;
    let sections = ResultSections::of(result);
    if sections.is_empty() {
        return;
    }

    if sections.gene_changes {
        ui.add_space(12.0);
        ui.label(RichText::new("📈 Gene Expression Changes").size(18.0).strong());
        fold_change_chart(ui, result);
    }

    if sections.pathways {
        ui.add_space(16.0);
        ui.separator();
        ui.label(RichText::new("🧬 Signaling Pathway Analysis").size(18.0).strong());
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(360.0);
                pathway_donut(ui, result);
            });
            ui.vertical(|ui| {
                ui.label(RichText::new("💡 Key Biological Insights:").strong());
                for (pathway, insight) in pathway_insights(result) {
                    ui.add_space(6.0);
                    ui.label(format!("• {pathway} pathway was activated."));
                    ui.weak(format!("↪ {insight}"));
                }
            });
        });
    }

    if sections.gene_changes {
        ui.add_space(16.0);
        ui.separator();
        gene_change_list(ui, result);
    }
}

/// Which parts of a simulation result have anything to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResultSections {
    gene_changes: bool,
    pathways: bool,
}

impl ResultSections {
    fn of(result: &SimulationResult) -> Self {
        ResultSections {
            gene_changes: !result.top_gene_changes.is_empty(),
            pathways: !result.pathway_weights.is_empty(),
        }
    }

    fn is_empty(self) -> bool {
        !self.gene_changes && !self.pathways
    }
}

fn fold_change_chart(ui: &mut Ui, result: &SimulationResult) {
    let genes: Vec<String> = result.top_gene_changes.keys().cloned().collect();
    let n = genes.len();
    // First gene at the top.
    let bars: Vec<Bar> = result
        .top_gene_changes
        .iter()
        .enumerate()
        .map(|(i, (gene, &change))| {
            let color = if change > 0.0 { INCREASE_COLOR } else { DECREASE_COLOR };
            Bar::new((n - 1 - i) as f64, change)
                .name(gene)
                .fill(color)
                .width(0.6)
        })
        .collect();

    Plot::new("fold_change_chart")
        .height(400.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_scroll(false)
        .y_axis_formatter(move |mark, _| {
            let pos = mark.value.round();
            if (mark.value - pos).abs() > 1e-6 || pos < 0.0 || pos as usize >= n {
                return String::new();
            }
            genes[n - 1 - pos as usize].clone()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .name("Expression Fold Change")
                    .element_formatter(Box::new(|bar: &Bar, _: &BarChart| {
                        format!("{}: {:.4}", bar.name, bar.value)
                    })),
            );
        });
}

fn pathway_donut(ui: &mut Ui, result: &SimulationResult) {
    let slices: Vec<(&str, f64)> = result
        .pathway_weights
        .iter()
        .map(|(name, &weight)| (name.as_str(), weight))
        .filter(|(_, weight)| weight.is_finite() && *weight > 0.0)
        .collect();
    let total: f64 = slices.iter().map(|(_, w)| w).sum();

    let size = Vec2::splat(DONUT_OUTER_RADIUS * 2.0 + 20.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let center = response.rect.center();

    if total > 0.0 {
        let padding = if slices.len() > 1 { DONUT_PADDING_ANGLE } else { 0.0 };
        let mut start = -TAU / 4.0;
        for (i, (_, weight)) in slices.iter().enumerate() {
            let sweep = (*weight / total) as f32 * TAU;
            let color = PATHWAY_PALETTE[i % PATHWAY_PALETTE.len()];
            paint_ring_segment(&painter, center, start + padding / 2.0, sweep - padding, color);
            start += sweep;
        }
    }

    for (i, (name, weight)) in slices.iter().enumerate() {
        ui.horizontal(|ui| {
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter()
                .rect_filled(swatch, 2.0, PATHWAY_PALETTE[i % PATHWAY_PALETTE.len()]);
            ui.label(format!("{name} ({:.1}%)", weight / total * 100.0));
        });
    }
}

fn paint_ring_segment(painter: &egui::Painter, center: Pos2, start: f32, sweep: f32, color: Color32) {
    if sweep <= 0.0 {
        return;
    }
    let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as usize;
    let point = |angle: f32, radius: f32| center + Vec2::angled(angle) * radius;
    for step in 0..steps {
        let a0 = start + sweep * step as f32 / steps as f32;
        let a1 = start + sweep * (step + 1) as f32 / steps as f32;
        painter.add(Shape::convex_polygon(
            vec![
                point(a0, DONUT_OUTER_RADIUS),
                point(a1, DONUT_OUTER_RADIUS),
                point(a1, DONUT_INNER_RADIUS),
                point(a0, DONUT_INNER_RADIUS),
            ],
            color,
            Stroke::NONE,
        ));
    }
}

fn gene_change_list(ui: &mut Ui, result: &SimulationResult) {
    for (gene, &change) in &result.top_gene_changes {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(gene.as_str()).size(16.0).strong());
                    ui.weak(format!("ℹ {}", describe_gene(gene)));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.vertical(|ui| {
                        let (text, color) = if change > 0.0 {
                            ("▲ Increase", INCREASE_COLOR)
                        } else {
                            ("▼ Decrease", DECREASE_COLOR)
                        };
                        ui.label(RichText::new(text).strong().color(color));
                        ui.weak(format!("({:.4})", change.abs()));
                    });
                });
            });
        });
    }
}

pub fn notice_window(ctx: &egui::Context, notice: &Notice, actions: &mut Vec<Action>) {
    let color = match notice.kind {
        NoticeKind::Info => ACCENT_COLOR,
        NoticeKind::Error => Color32::from_rgb(0xc9, 0x2a, 0x2a),
    };
    egui::Window::new(notice.title.as_str())
        .id(egui::Id::new("notice_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.colored_label(color, notice.message.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    actions.push(Action::DismissNotice);
                }
            });
        });
}

pub fn activity_panel(ui: &mut Ui, state: &AppState) {
    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in state.activity.lines() {
                ui.monospace(line.as_str());
            }
        });
}
