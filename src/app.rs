//! Main application state and egui integration.

use std::time::Duration;

use crossbeam::channel::{bounded, Receiver, TryRecvError};
use eframe::egui;

use daylog::checkins::types::{
    NewCheckin, SCALE_MAX, SCALE_MIN, SLEEP_HOURS_MAX, SLEEP_HOURS_MIN, SLEEP_HOURS_STEP,
};
use daylog::coach::client::{CoachClient, CoachError};
use daylog::report::weekly::generate_weekly_report;
use daylog::storage::database::Database;
use daylog::CheckinRecord;

/// Number of records shown in the recent list.
const RECENT_LIMIT: u32 = 10;

/// Number of records the weekly report aggregates.
const REPORT_WINDOW: u32 = 7;

/// State of the in-flight polish request.
enum PolishState {
    /// No polish requested for the current report
    Idle,
    /// Waiting for the coach task to finish
    Pending(Receiver<Result<String, CoachError>>),
    /// Polished text ready
    Done(String),
    /// Polish failed; holds the diagnostic text to display
    Failed(String),
}

/// Main application state.
pub struct DaylogApp {
    /// Check-in database
    db: Database,
    /// Coach API client
    coach: CoachClient,
    /// Runtime for the one-shot coach requests
    runtime: tokio::runtime::Runtime,
    /// Entry form state
    form: NewCheckin,
    /// Most recent check-ins for the list view
    recent: Vec<CheckinRecord>,
    /// Save confirmation or storage error line
    status: Option<String>,
    /// Raw weekly report text, once requested
    report: Option<String>,
    /// Polish request state
    polish: PolishState,
}

impl DaylogApp {
    /// Create the application state and load the recent list.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        db: Database,
        coach: CoachClient,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        let mut app = Self {
            db,
            coach,
            runtime,
            form: NewCheckin::default(),
            recent: Vec::new(),
            status: None,
            report: None,
            polish: PolishState::Idle,
        };
        app.refresh_recent();
        app
    }

    /// Reload the recent check-in list from the store.
    fn refresh_recent(&mut self) {
        match self.db.recent_checkins(RECENT_LIMIT) {
            Ok(records) => self.recent = records,
            Err(e) => {
                tracing::error!("Failed to load recent check-ins: {}", e);
                self.status = Some(format!("Storage error: {}", e));
            }
        }
    }

    /// Save the current form values as a new check-in.
    fn save_checkin(&mut self) {
        match self.db.insert_checkin(&self.form) {
            Ok(()) => {
                tracing::info!(
                    "Saved check-in: sleep {:.1} h, stress {}, mood {}",
                    self.form.sleep_hours,
                    self.form.stress,
                    self.form.mood
                );
                self.status = Some("Check-in saved.".to_string());
                self.refresh_recent();
            }
            Err(e) => {
                tracing::error!("Failed to save check-in: {}", e);
                self.status = Some(format!("Storage error: {}", e));
            }
        }
    }

    /// Build the weekly report and kick off the polish request.
    fn build_report(&mut self) {
        let records = match self.db.last_checkins(REPORT_WINDOW) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Failed to load report window: {}", e);
                self.status = Some(format!("Storage error: {}", e));
                return;
            }
        };

        let raw = generate_weekly_report(&records);
        self.report = Some(raw.clone());
        self.start_polish(raw);
    }

    /// Send the raw report to the coach task.
    fn start_polish(&mut self, raw_report: String) {
        let (tx, rx) = bounded(1);
        let coach = self.coach.clone();

        self.runtime.spawn(async move {
            let result = coach.polish_report(&raw_report).await;
            let _ = tx.send(result);
        });

        self.polish = PolishState::Pending(rx);
    }

    /// Poll the polish channel without blocking the UI thread.
    fn poll_polish(&mut self) {
        let next = match &self.polish {
            PolishState::Pending(rx) => match rx.try_recv() {
                Ok(Ok(text)) => Some(PolishState::Done(text)),
                Ok(Err(e)) => {
                    tracing::warn!("Polish failed: {}", e);
                    Some(PolishState::Failed(e.to_string()))
                }
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(PolishState::Failed(
                    "Polish task ended unexpectedly.".to_string(),
                )),
            },
            _ => None,
        };

        if let Some(state) = next {
            self.polish = state;
        }
    }

    /// Render the entry form.
    fn render_entry_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Daily check-in");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Sleep hours");
            ui.add(
                egui::DragValue::new(&mut self.form.sleep_hours)
                    .range(SLEEP_HOURS_MIN..=SLEEP_HOURS_MAX)
                    .speed(SLEEP_HOURS_STEP)
                    .fixed_decimals(1)
                    .suffix(" h"),
            );
        });
        ui.add(egui::Slider::new(&mut self.form.stress, SCALE_MIN..=SCALE_MAX).text("Stress"));
        ui.add(egui::Slider::new(&mut self.form.mood, SCALE_MIN..=SCALE_MAX).text("Mood"));

        if ui.button("Save check-in").clicked() {
            self.save_checkin();
        }

        if let Some(status) = &self.status {
            ui.label(status.clone());
        }
    }

    /// Render the recent check-in list verbatim.
    fn render_recent(&mut self, ui: &mut egui::Ui) {
        ui.heading("Recent check-ins");
        ui.add_space(4.0);

        if self.recent.is_empty() {
            ui.label("No check-ins yet.");
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(180.0)
            .show(ui, |ui| {
                for record in &self.recent {
                    ui.monospace(format!(
                        "#{:<4} {}  sleep {:>4.1} h  stress {:>2}/10  mood {:>2}/10",
                        record.id,
                        record.created_at_display(),
                        record.sleep_hours,
                        record.stress,
                        record.mood
                    ));
                }
            });
    }

    /// Render the weekly report and the polished version underneath it.
    fn render_report(&mut self, ui: &mut egui::Ui) {
        ui.heading("Weekly report");
        ui.add_space(4.0);

        if ui.button("View report").clicked() {
            self.build_report();
        }

        let Some(report) = self.report.clone() else {
            return;
        };

        ui.add_space(6.0);
        ui.label(egui::RichText::new(report).monospace());
        ui.add_space(6.0);

        match &self.polish {
            PolishState::Idle => {}
            PolishState::Pending(_) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("The coach is polishing the report...");
                });
            }
            PolishState::Done(text) => {
                ui.separator();
                ui.label(text.clone());
            }
            PolishState::Failed(diagnostic) => {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, diagnostic.clone());
            }
        }
    }
}

impl eframe::App for DaylogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_polish();

        // Keep repainting while a polish request is in flight so the
        // channel gets polled even without user input.
        if matches!(self.polish, PolishState::Pending(_)) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_entry_form(ui);
            ui.separator();
            self.render_recent(ui);
            ui.separator();
            self.render_report(ui);
        });
    }
}
