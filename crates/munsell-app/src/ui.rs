//! UI components using egui.

use egui::{Align2, Color32, Context, Margin, Vec2};
use munsell_core::{ColorPair, MunsellActivity, PendingAlert, SettingsStore};
use munsell_widgets::{
    PickerView, TextButton, dialog_button, hex_to_color32, panel_frame, picker_header, section_label,
    sizing, toolbar_frame, vertical_separator,
};

/// Side of the recolored icon preview.
const PREVIEW_SIZE: f32 = 160.0;
/// Labels above each picker.
const PICKER_LABELS: [&str; 2] = ["Stroke color", "Fill color"];

/// Actions triggered from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Ask to save the current pair.
    SaveColors,
    /// Confirm the pending save.
    ConfirmSave,
    /// Cancel the pending save.
    CancelSave,
    /// Close the restart notice.
    DismissNotice,
    /// Copy one color of the pair to the clipboard.
    CopyColor(usize),
}

/// UI state that outlives a frame.
#[derive(Debug, Default)]
pub struct UiState {
    /// Uri of the icon preview currently held by the image loaders.
    preview_uri: Option<String>,
}

impl UiState {
    /// Point the preview at `uri`, dropping the previous preview's cached
    /// bytes and textures when it changes.
    fn show_preview(&mut self, ctx: &Context, uri: &str) {
        if self.preview_uri.as_deref() == Some(uri) {
            return;
        }
        if let Some(old) = self.preview_uri.replace(uri.to_string()) {
            log::debug!("Forgetting preview {}", old);
            ctx.forget_image(&old);
        }
    }
}

/// Render all UI and return any triggered action.
///
/// Picker clicks are not reported here: they reach the activity through the
/// pickers' selection handlers.
pub fn render_ui<S: SettingsStore>(
    ctx: &Context,
    ui_state: &mut UiState,
    activity: &mut MunsellActivity<S>,
) -> Option<UiAction> {
    egui_extras::install_image_loaders(ctx);

    let toolbar_action = render_toolbar(ctx, activity.colors());
    render_pickers(ctx, ui_state, activity);
    let alert_action = activity.alert().and_then(|alert| render_alert(ctx, alert));

    // The modal takes precedence
    alert_action.or(toolbar_action)
}

fn render_toolbar(ctx: &Context, colors: &ColorPair) -> Option<UiAction> {
    let mut action = None;

    egui::TopBottomPanel::top("toolbar")
        .frame(toolbar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = Vec2::new(4.0, 0.0);

                if TextButton::new("Save colors")
                    .tooltip("Save these colors")
                    .show(ui)
                {
                    action = Some(UiAction::SaveColors);
                }

                vertical_separator(ui, 14.0);

                for (slot, color) in colors.colors().iter().enumerate() {
                    if TextButton::new(color.as_str())
                        .chip(hex_to_color32(color.as_str()))
                        .tooltip("Copy to clipboard")
                        .show(ui)
                    {
                        action = Some(UiAction::CopyColor(slot));
                    }
                }
            });
        });

    action
}

fn render_pickers<S: SettingsStore>(
    ctx: &Context,
    ui_state: &mut UiState,
    activity: &mut MunsellActivity<S>,
) {
    let preview_uri = preview_uri(activity.colors());
    ui_state.show_preview(ctx, &preview_uri);
    let preview = activity.icon_preview().as_bytes().to_vec();

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(Color32::WHITE).inner_margin(Margin::same(12)))
        .show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    section_label(ui, "Preview");
                    ui.add(
                        egui::Image::from_bytes(preview_uri, preview)
                            .fit_to_exact_size(Vec2::splat(PREVIEW_SIZE)),
                    );
                });

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    let label_height = 24.0;
                    let height = ((ui.available_height() - 2.0 * label_height) / 2.0)
                        .max(sizing::WHEEL_MIN);
                    let width = ui.available_width();

                    for (slot, label) in PICKER_LABELS.into_iter().enumerate() {
                        if let Some(color) = activity.colors().get(slot) {
                            picker_header(ui, label, color.as_str(), hex_to_color32(color.as_str()));
                        }
                        let picker = &mut activity.pickers_mut()[slot];
                        ui.allocate_ui(Vec2::new(width, height), |ui| {
                            if let Some(color) = PickerView::new(picker).show(ui) {
                                log::debug!("{} picked {}", label, color);
                            }
                        });
                    }
                });
            });
        });
}

/// The svg loader caches by uri, so every pair gets its own.
/// [`UiState::show_preview`] forgets the one it replaces.
fn preview_uri(colors: &ColorPair) -> String {
    let [stroke, fill] = colors.colors();
    format!(
        "bytes://xo-{}-{}.svg",
        stroke.as_str().trim_start_matches('#'),
        fill.as_str().trim_start_matches('#')
    )
}

fn render_alert(ctx: &Context, alert: PendingAlert) -> Option<UiAction> {
    let mut action = None;

    // Backdrop swallows clicks meant for the pickers
    #[allow(deprecated)]
    let screen_rect = ctx.input(|i| i.content_rect());
    egui::Area::new(egui::Id::new("alert_backdrop"))
        .fixed_pos(egui::Pos2::ZERO)
        .order(egui::Order::Middle)
        .interactable(true)
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
            ui.painter().rect_filled(rect, 0.0, Color32::from_black_alpha(80));
        });

    egui::Area::new(egui::Id::new("alert"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            panel_frame().inner_margin(Margin::same(20)).show(ui, |ui| {
                ui.set_width(300.0);
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(8.0, 12.0);
                    ui.label(
                        egui::RichText::new(alert.title())
                            .size(16.0)
                            .strong()
                            .color(Color32::from_gray(30)),
                    );
                    ui.label(egui::RichText::new(alert.message()).size(13.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match alert {
                            PendingAlert::ConfirmSave => {
                                if dialog_button(ui, "Ok", true) {
                                    action = Some(UiAction::ConfirmSave);
                                }
                                if dialog_button(ui, "Cancel", false) {
                                    action = Some(UiAction::CancelSave);
                                }
                            }
                            PendingAlert::RestartNotice => {
                                if dialog_button(ui, "Ok", true) {
                                    action = Some(UiAction::DismissNotice);
                                }
                            }
                        }
                    });
                });
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::load::BytesLoader;
    use munsell_core::{IconTemplate, MemorySettings};

    fn activity() -> MunsellActivity<MemorySettings> {
        let template = IconTemplate::from_source(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="55" height="55"><rect width="55" height="55" stroke="#000000" fill="#FFFFFF"/></svg>"##,
        );
        MunsellActivity::new(MemorySettings::new(), template).unwrap()
    }

    fn run_frame(
        ctx: &Context,
        ui_state: &mut UiState,
        activity: &mut MunsellActivity<MemorySettings>,
    ) -> Option<UiAction> {
        let mut action = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, ui_state, activity);
        });
        action
    }

    /// Bytes held by every image loader stage.
    fn loader_bytes(ctx: &Context) -> usize {
        let loaders = ctx.loaders();
        let bytes: usize = loaders.bytes.lock().iter().map(|l| l.byte_size()).sum();
        let images: usize = loaders.image.lock().iter().map(|l| l.byte_size()).sum();
        let textures: usize = loaders.texture.lock().iter().map(|l| l.byte_size()).sum();
        loaders.include.byte_size() + bytes + images + textures
    }

    #[test]
    fn test_idle_frame_has_no_action() {
        let ctx = Context::default();
        let mut ui_state = UiState::default();
        let mut activity = activity();
        assert_eq!(run_frame(&ctx, &mut ui_state, &mut activity), None);
        assert_eq!(activity.pump_selections().unwrap(), 0);
    }

    #[test]
    fn test_frames_render_with_alerts() {
        let ctx = Context::default();
        let mut ui_state = UiState::default();
        let mut activity = activity();

        activity.request_save();
        assert_eq!(run_frame(&ctx, &mut ui_state, &mut activity), None);

        activity.respond(munsell_core::Response::Ok).unwrap();
        assert_eq!(activity.alert(), Some(PendingAlert::RestartNotice));
        assert_eq!(run_frame(&ctx, &mut ui_state, &mut activity), None);
    }

    #[test]
    fn test_preview_uri_tracks_colors() {
        let colors = ColorPair::default();
        assert_eq!(preview_uri(&colors), "bytes://xo-A0FFA0-FF8080.svg");

        let swapped = ColorPair::parse("#FF8080,#A0FFA0").unwrap();
        assert_ne!(preview_uri(&swapped), preview_uri(&colors));
    }

    #[test]
    fn test_preview_cache_stays_flat_across_selections() {
        let ctx = Context::default();
        let mut ui_state = UiState::default();
        let mut activity = activity();

        run_frame(&ctx, &mut ui_state, &mut activity);
        run_frame(&ctx, &mut ui_state, &mut activity);
        let baseline = loader_bytes(&ctx);
        assert!(baseline > 0);

        activity.select_hue(0, 10).unwrap();
        for swatch in 15..45 {
            activity.click_swatch(0, swatch).unwrap();
            run_frame(&ctx, &mut ui_state, &mut activity);
            run_frame(&ctx, &mut ui_state, &mut activity);
            assert!(
                loader_bytes(&ctx) <= baseline,
                "{} bytes held after swatch {}, started at {}",
                loader_bytes(&ctx),
                swatch,
                baseline
            );
        }
        assert_eq!(
            ui_state.preview_uri.as_deref(),
            Some(preview_uri(activity.colors()).as_str())
        );
    }

    #[test]
    fn test_show_preview_forgets_only_on_change() {
        let ctx = Context::default();
        let mut ui_state = UiState::default();

        ui_state.show_preview(&ctx, "bytes://xo-A-B.svg");
        ui_state.show_preview(&ctx, "bytes://xo-A-B.svg");
        assert_eq!(ui_state.preview_uri.as_deref(), Some("bytes://xo-A-B.svg"));

        ui_state.show_preview(&ctx, "bytes://xo-C-D.svg");
        assert_eq!(ui_state.preview_uri.as_deref(), Some("bytes://xo-C-D.svg"));
    }
}
