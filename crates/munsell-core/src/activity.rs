//! Host activity: two pickers side by side choosing a persisted color pair.

use std::sync::mpsc::{self, Receiver};
use thiserror::Error;

use crate::color::{ColorError, ColorResult, HexColor};
use crate::icon::{IconError, IconTemplate};
use crate::picker::MunsellPicker;
use crate::settings::{COLOR_KEY, SettingsError, SettingsStore};

/// Colors used when nothing has been saved yet.
pub const DEFAULT_COLORS: [&str; 2] = ["#A0FFA0", "#FF8080"];

/// Errors surfaced by the host activity.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Icon(#[from] IconError),
}

/// Result type for activity operations.
pub type ActivityResult<T> = Result<T, ActivityError>;

/// Stroke and fill colors, persisted as `"#RRGGBB,#RRGGBB"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPair {
    colors: [HexColor; 2],
}

impl Default for ColorPair {
    fn default() -> Self {
        let [first, second] = DEFAULT_COLORS.map(HexColor::from_normalized);
        Self::new(first, second)
    }
}

impl ColorPair {
    pub fn new(first: HexColor, second: HexColor) -> Self {
        Self {
            colors: [first, second],
        }
    }

    /// Parse the persisted `"C1,C2"` form.
    ///
    /// Strict: exactly two colors and no whitespace. Each color may omit the
    /// `#` and use either case.
    pub fn parse(value: &str) -> ColorResult<Self> {
        let mut parts = value.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) => Ok(Self::new(first.parse()?, second.parse()?)),
            _ => Err(ColorError::InvalidFormat(value.to_string())),
        }
    }

    /// Persisted form: both colors upper case, comma separated, no spaces.
    pub fn to_setting_string(&self) -> String {
        format!(
            "{},{}",
            self.colors[0].as_str().to_ascii_uppercase(),
            self.colors[1].as_str().to_ascii_uppercase()
        )
    }

    pub fn colors(&self) -> &[HexColor; 2] {
        &self.colors
    }

    pub fn get(&self, slot: usize) -> Option<&HexColor> {
        self.colors.get(slot)
    }

    pub fn set(&mut self, slot: usize, color: HexColor) -> ColorResult<()> {
        let len = self.colors.len();
        let target = self.colors.get_mut(slot).ok_or(ColorError::IndexOutOfRange {
            what: "color slot",
            index: slot,
            len,
        })?;
        *target = color;
        Ok(())
    }
}

/// Modal prompt the activity is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAlert {
    /// "Do you want to save these colors?"
    ConfirmSave,
    /// "A restart is required before your new colors will appear."
    RestartNotice,
}

impl PendingAlert {
    pub fn title(&self) -> &'static str {
        "Saving colors"
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ConfirmSave => "Do you want to save these colors?",
            Self::RestartNotice => "A restart is required before your new colors will appear.",
        }
    }
}

/// Answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Ok,
    Cancel,
}

/// A completed selection tagged with the picker it came from.
#[derive(Debug, Clone)]
struct PickerSelection {
    instance: usize,
    color: HexColor,
}

/// Two pickers, the color pair they edit, and its icon preview.
pub struct MunsellActivity<S: SettingsStore> {
    store: S,
    pickers: [MunsellPicker; 2],
    colors: ColorPair,
    template: IconTemplate,
    preview: String,
    alert: Option<PendingAlert>,
    selections: Receiver<PickerSelection>,
}

impl<S: SettingsStore> MunsellActivity<S> {
    /// Start the activity from the stored pair (or the defaults when unset).
    ///
    /// A stored value that does not parse is an error, not a reason to fall
    /// back to the defaults.
    pub fn new(store: S, template: IconTemplate) -> ActivityResult<Self> {
        let colors = match store.get(COLOR_KEY)? {
            Some(value) => ColorPair::parse(&value)?,
            None => ColorPair::default(),
        };
        log::info!("Starting with colors {}", colors.to_setting_string());

        let (tx, selections) = mpsc::channel();
        let pickers = [0, 1].map(|instance| {
            let mut picker = MunsellPicker::default();
            let tx = tx.clone();
            picker.on_selected(move |color| {
                let selection = PickerSelection {
                    instance,
                    color: color.clone(),
                };
                if tx.send(selection).is_err() {
                    log::warn!("Selection from picker {} dropped", instance);
                }
            });
            picker
        });

        let preview = template.render(&colors);
        Ok(Self {
            store,
            pickers,
            colors,
            template,
            preview,
            alert: None,
            selections,
        })
    }

    pub fn colors(&self) -> &ColorPair {
        &self.colors
    }

    /// Current recolored icon source.
    pub fn icon_preview(&self) -> &str {
        &self.preview
    }

    pub fn alert(&self) -> Option<PendingAlert> {
        self.alert
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn picker(&self, instance: usize) -> Option<&MunsellPicker> {
        self.pickers.get(instance)
    }

    pub fn pickers_mut(&mut self) -> &mut [MunsellPicker; 2] {
        &mut self.pickers
    }

    fn picker_mut(&mut self, instance: usize) -> ColorResult<&mut MunsellPicker> {
        let len = self.pickers.len();
        self.pickers.get_mut(instance).ok_or(ColorError::IndexOutOfRange {
            what: "picker",
            index: instance,
            len,
        })
    }

    /// Pick a hue on one picker's wheel.
    pub fn select_hue(&mut self, instance: usize, wheel_index: usize) -> ActivityResult<()> {
        self.picker_mut(instance)?.select_hue(wheel_index)?;
        Ok(())
    }

    /// Pick a swatch on one picker's grid and apply it to the pair.
    pub fn click_swatch(&mut self, instance: usize, local_index: usize) -> ActivityResult<HexColor> {
        let color = self.picker_mut(instance)?.select_swatch(local_index)?;
        self.pump_selections()?;
        Ok(color)
    }

    /// Apply selections emitted by the pickers since the last call.
    ///
    /// Returns how many were applied. The icon preview is re-rendered once
    /// if anything changed.
    pub fn pump_selections(&mut self) -> ActivityResult<usize> {
        let mut applied = 0;
        while let Ok(selection) = self.selections.try_recv() {
            log::debug!("Color {} set to {}", selection.instance + 1, selection.color);
            self.colors.set(selection.instance, selection.color)?;
            applied += 1;
        }
        if applied > 0 {
            self.preview = self.template.render(&self.colors);
        }
        Ok(applied)
    }

    /// Ask the user to confirm saving the pair.
    pub fn request_save(&mut self) {
        self.alert = Some(PendingAlert::ConfirmSave);
    }

    /// Answer the save confirmation. Other alerts are left untouched.
    pub fn respond(&mut self, response: Response) -> ActivityResult<()> {
        if self.alert != Some(PendingAlert::ConfirmSave) {
            return Ok(());
        }
        match response {
            Response::Ok => {
                self.alert = None;
                let value = self.colors.to_setting_string();
                self.store.set(COLOR_KEY, &value)?;
                log::info!("Saved colors {}", value);
                self.alert = Some(PendingAlert::RestartNotice);
            }
            Response::Cancel => {
                self.alert = None;
            }
        }
        Ok(())
    }

    /// Close the post-save notice.
    pub fn dismiss_notice(&mut self) {
        if self.alert == Some(PendingAlert::RestartNotice) {
            self.alert = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteIndex;
    use crate::settings::MemorySettings;

    const TEMPLATE: &str = r##"<svg><path stroke="#000000" fill="#FFFFFF"/></svg>"##;

    fn activity(store: MemorySettings) -> MunsellActivity<MemorySettings> {
        MunsellActivity::new(store, IconTemplate::from_source(TEMPLATE)).unwrap()
    }

    #[test]
    fn test_pair_round_trip() {
        let pair = ColorPair::default();
        assert_eq!(pair.to_setting_string(), "#A0FFA0,#FF8080");
        assert_eq!(ColorPair::parse("#A0FFA0,#FF8080").unwrap(), pair);
    }

    #[test]
    fn test_pair_upper_cases() {
        let pair = ColorPair::parse("#a0ffa0,ff8080").unwrap();
        assert_eq!(pair.to_setting_string(), "#A0FFA0,#FF8080");
    }

    #[test]
    fn test_pair_parse_errors() {
        for bad in [
            "",
            "#A0FFA0",
            "#A0FFA0,#FF8080,#000000",
            "#A0FFA0,red",
            "#A0FFA0, #FF8080",
            " #A0FFA0,#FF8080",
            "#A0FFA0,#FF8080\n",
        ] {
            assert!(
                matches!(ColorPair::parse(bad), Err(ColorError::InvalidFormat(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_default_pair_matches_default_colors() {
        let pair = ColorPair::default();
        for (color, expected) in pair.colors().iter().zip(DEFAULT_COLORS) {
            assert_eq!(color.as_str(), expected);
            assert_eq!(color, &expected.parse::<HexColor>().unwrap());
        }
    }

    #[test]
    fn test_pair_set_out_of_range() {
        let mut pair = ColorPair::default();
        assert!(pair.set(2, "#000000".parse().unwrap()).is_err());
    }

    #[test]
    fn test_defaults_when_unset() {
        let activity = activity(MemorySettings::new());
        assert_eq!(activity.colors(), &ColorPair::default());
        assert_eq!(
            activity.icon_preview(),
            r##"<svg><path stroke="#A0FFA0" fill="#FF8080"/></svg>"##
        );
    }

    #[test]
    fn test_restores_stored_pair() {
        let activity = activity(MemorySettings::with_value(COLOR_KEY, "#112233,#445566"));
        assert_eq!(activity.colors().to_setting_string(), "#112233,#445566");
    }

    #[test]
    fn test_malformed_stored_pair_is_error() {
        let result = MunsellActivity::new(
            MemorySettings::with_value(COLOR_KEY, "garbage"),
            IconTemplate::from_source(TEMPLATE),
        );
        assert!(matches!(result, Err(ActivityError::Color(ColorError::InvalidFormat(_)))));
    }

    #[test]
    fn test_selection_updates_tagged_slot() {
        let mut activity = activity(MemorySettings::new());
        activity.select_hue(1, 12).unwrap();
        let color = activity.click_swatch(1, 50).unwrap();

        let expected = PaletteIndex::munsell().swatch(12, 50).unwrap();
        assert_eq!(color.as_str(), expected);
        assert_eq!(activity.colors().get(0).unwrap().as_str(), DEFAULT_COLORS[0]);
        assert_eq!(activity.colors().get(1).unwrap(), &color);
        assert!(activity.icon_preview().contains(expected));
    }

    #[test]
    fn test_pump_after_direct_picker_use() {
        let mut activity = activity(MemorySettings::new());
        let color = {
            let picker = &mut activity.pickers_mut()[0];
            picker.select_hue(3).unwrap();
            picker.select_swatch(7).unwrap()
        };
        assert_eq!(activity.pump_selections().unwrap(), 1);
        assert_eq!(activity.colors().get(0), Some(&color));
        assert_eq!(activity.pump_selections().unwrap(), 0);
    }

    #[test]
    fn test_invalid_picker_instance() {
        let mut activity = activity(MemorySettings::new());
        assert!(activity.select_hue(2, 0).is_err());
        assert!(activity.click_swatch(2, 0).is_err());
    }

    #[test]
    fn test_save_confirmed() {
        let mut activity = activity(MemorySettings::new());
        activity.select_hue(0, 0).unwrap();
        activity.click_swatch(0, 0).unwrap();

        activity.request_save();
        assert_eq!(activity.alert(), Some(PendingAlert::ConfirmSave));
        // Nothing is written before confirmation.
        assert_eq!(activity.store().get(COLOR_KEY).unwrap(), None);

        activity.respond(Response::Ok).unwrap();
        assert_eq!(activity.alert(), Some(PendingAlert::RestartNotice));
        assert_eq!(
            activity.store().get(COLOR_KEY).unwrap(),
            Some(activity.colors().to_setting_string())
        );

        activity.dismiss_notice();
        assert_eq!(activity.alert(), None);
    }

    #[test]
    fn test_save_cancelled() {
        let mut activity = activity(MemorySettings::new());
        activity.request_save();
        activity.respond(Response::Cancel).unwrap();
        assert_eq!(activity.alert(), None);
        assert_eq!(activity.store().get(COLOR_KEY).unwrap(), None);
    }

    #[test]
    fn test_respond_without_prompt_is_noop() {
        let mut activity = activity(MemorySettings::new());
        activity.respond(Response::Ok).unwrap();
        assert_eq!(activity.alert(), None);
        assert_eq!(activity.store().get(COLOR_KEY).unwrap(), None);
    }
}
