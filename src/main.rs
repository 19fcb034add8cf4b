use drugscope::config::DashboardConfig;
use drugscope::controller::{self, PacingStep, PendingRequest};
use drugscope::error::DashboardError;
use drugscope::gateway::{HttpPredictor, Predictor};
use drugscope::models::AppState;
use drugscope::profile::ThreadRngSource;
use drugscope::ui::{self, Action, GeneDrafts, Tab};
use eframe::egui;
use eframe::egui::Visuals;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub struct DrugScopeApp {
    state: AppState,
    predictor: Arc<dyn Predictor>,
    pacing: Vec<PacingStep>,
    pending: Option<PendingRequest>,
    gene_drafts: GeneDrafts,
    selected_tab: Tab,
    activity_panel_height: f32,
    activity_panel_visible: bool,
}

impl DrugScopeApp {
    fn new(predictor: Arc<dyn Predictor>, pacing: Vec<PacingStep>) -> Self {
        Self {
            state: AppState::default(),
            predictor,
            pacing,
            pending: None,
            gene_drafts: GeneDrafts::new(),
            selected_tab: Tab::Genomics,
            activity_panel_height: 150.0,
            activity_panel_visible: true,
        }
    }

    fn dispatch(&mut self, action: Action) {
        let result: Result<(), DashboardError> = match action {
            Action::SelectPreset(key) => {
                self.gene_drafts.clear();
                controller::select_preset(&mut self.state, key).map_err(Into::into)
            }
            Action::Reset => {
                self.gene_drafts.clear();
                controller::reset(&mut self.state);
                Ok(())
            }
            Action::EditGene { symbol, raw } => {
                controller::edit_gene(&mut self.state, &symbol, &raw);
                Ok(())
            }
            Action::ExpandProfile => {
                self.gene_drafts.clear();
                controller::expand_to_full_profile(&mut self.state, &mut ThreadRngSource)
                    .map_err(Into::into)
            }
            Action::FindDrug => {
                controller::begin_drug_request(&mut self.state, &self.pacing).map(|job| {
                    self.pending = Some(PendingRequest::spawn_drug(job, self.predictor.clone()));
                })
                .map_err(Into::into)
            }
            Action::Simulate => {
                self.selected_tab = Tab::Simulation;
                controller::begin_simulation(&mut self.state).map(|job| {
                    self.pending =
                        Some(PendingRequest::spawn_simulation(job, self.predictor.clone()));
                })
                .map_err(Into::into)
            }
            Action::DismissNotice => {
                self.state.notice = None;
                Ok(())
            }
        };

        if let Err(err) = result {
            controller::report(&mut self.state, &err);
        }
    }

    fn poll_pending(&mut self, ctx: &egui::Context) {
        let Some(pending) = &mut self.pending else {
            return;
        };
        match pending.poll(&mut self.state) {
            Some(result) => {
                self.pending = None;
                if let Err(err) = result {
                    controller::report(&mut self.state, &err);
                }
                ctx.request_repaint();
            }
            None => ctx.request_repaint_after(Duration::from_millis(100)),
        }
    }
}

impl eframe::App for DrugScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(Visuals::dark());

        self.poll_pending(ctx);

        let mut actions = Vec::new();

        egui::SidePanel::left("preset_panel").show(ctx, |ui| {
            ui.set_width(220.0);
            ui.heading("DrugScope");
            ui.weak("AI Drug Discovery Platform");
            ui.separator();
            ui::side_panel(ui, &self.state, &mut actions);
        });

        egui::TopBottomPanel::bottom("activity_panel")
            .resizable(true)
            .min_height(50.0)
            .default_height(self.activity_panel_height)
            .show_animated(ctx, self.activity_panel_visible, |ui| {
                self.activity_panel_height = ui.available_height();

                ui.horizontal(|ui| {
                    ui.heading("Activity");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Clear").clicked() {
                            self.state.activity.clear();
                        }
                        if ui.button("Hide").clicked() {
                            self.activity_panel_visible = false;
                        }
                    });
                });
                ui.separator();
                ui::activity_panel(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::tab_bar(ui, &mut self.selected_tab);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match self.selected_tab {
                Tab::Genomics => {
                    ui::genomics_tab(ui, &self.state, &mut self.gene_drafts, &mut actions)
                }
                Tab::Simulation => ui::simulation_tab(ui, &self.state, &mut actions),
            });

            if !self.activity_panel_visible {
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    if ui.button("Show Activity Panel").clicked() {
                        self.activity_panel_visible = true;
                    }
                });
            }
        });

        if let Some(notice) = &self.state.notice {
            ui::notice_window(ctx, notice, &mut actions);
        }

        for action in actions {
            self.dispatch(action);
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = DashboardConfig::from_env();
    info!(
        base_url = %config.predictor_base_url,
        timeout = ?config.request_timeout,
        "starting DrugScope"
    );
    let predictor: Arc<dyn Predictor> = Arc::new(HttpPredictor::new(
        &config.predictor_base_url,
        config.request_timeout,
    )?);
    let pacing = controller::drug_pacing(config.pacing_step);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "DrugScope",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DrugScopeApp::new(predictor, pacing)))
        }),
    )?;

    Ok(())
}
