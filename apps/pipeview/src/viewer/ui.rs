use super::types::ConnectedView;
use super::types::STATUS_EMPTY_INPUT;
use super::types::STATUS_IDLE;
use super::types::ViewerApp;
use eframe::egui;
use pv_core::PipeResolver;
use pv_core::SubmitOutcome;
use pv_core::submit;

impl ViewerApp {
    pub(crate) fn new(resolver: Box<dyn PipeResolver>) -> Self {
        Self {
            resolver,
            pipe_input: String::new(),
            status_line: STATUS_IDLE.to_owned(),
            connected: None,
        }
    }

    /// Runs the current input through the resolver and updates status and
    /// viewport. Synchronous on the UI thread; one small file read at most.
    pub(crate) fn connect(&mut self) {
        let outcome = submit(self.pipe_input.as_str(), self.resolver.as_ref());
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        self.status_line = status_for_outcome(&outcome, self.resolver.as_ref());

        if let SubmitOutcome::Loading { url, used_fallback } = outcome {
            self.connected = Some(ConnectedView {
                url,
                pipe_string: self.pipe_input.trim().to_owned(),
                via_fallback: used_fallback,
            });
        }
    }

    fn render_viewport(&self, ui: &mut egui::Ui) {
        match self.connected.as_ref() {
            Some(view) => {
                ui.heading("Connected Target");
                ui.separator();
                ui.label(format!("Pipe string: {}", view.pipe_string));
                ui.label(format!("Target: {}", view.url));
                if view.via_fallback {
                    ui.colored_label(
                        egui::Color32::from_rgb(209, 153, 29),
                        "Pipe URI was invalid; the fixed fallback target is shown.",
                    );
                }
            }
            None => {
                ui.label("No pipe connected yet.");
            }
        }
    }
}

/// Maps a submit outcome to the status line text.
pub(crate) fn status_for_outcome(outcome: &SubmitOutcome, resolver: &dyn PipeResolver) -> String {
    match outcome {
        SubmitOutcome::EmptyInput => STATUS_EMPTY_INPUT.to_owned(),
        SubmitOutcome::UnknownPipe => {
            format!("Unknown pipe string. Update {}", resolver.source_hint())
        }
        SubmitOutcome::Loading {
            url,
            used_fallback: true,
        } => format!("Invalid pipe URI, showing {url}"),
        SubmitOutcome::Loading {
            url,
            used_fallback: false,
        } => format!("Loading {url}"),
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Enter pipe string:");

                let width = (ui.available_width() - 90.0).max(200.0);
                let response = ui.add_sized(
                    [width, 28.0],
                    egui::TextEdit::singleline(&mut self.pipe_input).hint_text("pipe name"),
                );

                let pressed_enter =
                    response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
                if pressed_enter || ui.button("Connect").clicked() {
                    self.connect();
                }
            });
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(&self.status_line);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_viewport(ui);
        });
    }
}
