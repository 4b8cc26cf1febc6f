use crate::SketchApp;

/// Collapsible list of what undo and redo would act on
pub fn history_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::right("history_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            let history = app.document().history();

            ui.heading("History");
            ui.label(format!("Undo stack size: {}", history.len()));
            ui.label(format!("Redo stack size: {}", history.redo_stack().len()));

            egui::CollapsingHeader::new("Commands")
                .default_open(false)
                .show(ui, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        for command in history.commands().iter().rev() {
                            ui.push_id(command.id().to_string(), |ui| {
                                ui.label(command.label());
                            });
                        }
                        for command in history.redo_stack().iter().rev() {
                            ui.push_id(command.id().to_string(), |ui| {
                                ui.weak(command.label());
                            });
                        }
                    });
                });
        });
}
