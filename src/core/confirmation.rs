//! Palette confirmation gate
//!
//! On the theme step the wizard's "Next" button does not advance by itself.
//! The controller signals the palette step, which opens a confirmation dialog
//! for the selected theme. Only `Confirm` produces the [`PaletteConfirmed`]
//! token the wizard needs to leave step 3.

use super::application::ApplicationForm;
use super::palette::{PaletteChoice, PaletteKey};
use super::wizard::{AdvanceOutcome, Wizard, WizardError};

/// Proof that the theme confirmation dialog was accepted
#[derive(Debug)]
pub struct PaletteConfirmed(());

/// Theme awaiting confirmation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingTheme {
    Named(PaletteKey),
    Custom,
}

impl PendingTheme {
    fn of(choice: &PaletteChoice) -> Self {
        match choice {
            PaletteChoice::Named(key) => PendingTheme::Named(*key),
            PaletteChoice::Custom(_) => PendingTheme::Custom,
        }
    }
}

/// Dialog state local to the palette step
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteGate {
    pending: Option<PendingTheme>,
    dialog_open: bool,
}

impl PaletteGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.dialog_open
    }

    pub fn pending(&self) -> Option<PendingTheme> {
        self.pending
    }

    /// Handle the controller's signal. Returns whether the dialog opened.
    ///
    /// Ignored when no palette is selected or the dialog is already showing.
    pub fn receive_signal(&mut self, form: &ApplicationForm) -> bool {
        if self.dialog_open {
            return false;
        }
        let Some(choice) = form.selected_palette.as_ref() else {
            return false;
        };

        self.pending = Some(PendingTheme::of(choice));
        self.dialog_open = true;
        true
    }

    /// The palette `confirm` would commit, for the dialog preview
    pub fn pending_choice(&self, form: &ApplicationForm) -> Option<PaletteChoice> {
        match self.pending? {
            PendingTheme::Named(key) => Some(PaletteChoice::Named(key)),
            PendingTheme::Custom => match &form.selected_palette {
                Some(PaletteChoice::Custom(colors)) => Some(PaletteChoice::Custom(colors.clone())),
                _ => None,
            },
        }
    }

    /// Commit the pending theme and move the wizard to the pricing step
    pub fn confirm(&mut self, wizard: &mut Wizard) -> Result<AdvanceOutcome, WizardError> {
        let choice = self.pending_choice(wizard.form());
        self.reset();

        let Some(choice) = choice else {
            return Ok(AdvanceOutcome::Blocked);
        };
        wizard.select_palette(Some(choice))?;
        wizard.advance_confirmed(PaletteConfirmed(()))
    }

    /// Close the dialog, leaving the wizard untouched
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.pending = None;
        self.dialog_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::application::FormField;
    use crate::core::palette::ColorSet;
    use crate::core::validation::complete_form;
    use crate::core::wizard::WizardStep;

    fn wizard_on_palette_step(choice: Option<PaletteChoice>) -> Wizard {
        let mut wizard = Wizard::with_form(complete_form());
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), WizardStep::ThemePalette);
        wizard.select_palette(choice).unwrap();
        wizard
    }

    #[test]
    fn test_signal_without_palette_is_ignored() {
        let wizard = wizard_on_palette_step(None);
        let mut gate = PaletteGate::new();

        assert!(!gate.receive_signal(wizard.form()));
        assert!(!gate.is_open());
        assert_eq!(gate.pending(), None);
    }

    #[test]
    fn test_signal_opens_dialog_once() {
        let wizard = wizard_on_palette_step(Some(PaletteChoice::Named(PaletteKey::Dark)));
        let mut gate = PaletteGate::new();

        assert!(gate.receive_signal(wizard.form()));
        assert!(gate.is_open());
        assert_eq!(gate.pending(), Some(PendingTheme::Named(PaletteKey::Dark)));

        // A second press while open is not delivered again
        assert!(!gate.receive_signal(wizard.form()));
        assert!(gate.is_open());
    }

    #[test]
    fn test_confirm_named_palette() {
        let mut wizard = wizard_on_palette_step(Some(PaletteChoice::Named(PaletteKey::Blue)));
        let mut gate = PaletteGate::new();
        gate.receive_signal(wizard.form());

        let outcome = gate.confirm(&mut wizard).unwrap();
        assert_eq!(outcome, AdvanceOutcome::Moved(WizardStep::PricingPlan));
        assert_eq!(
            wizard.form().selected_palette,
            Some(PaletteChoice::Named(PaletteKey::Blue))
        );
        assert!(!gate.is_open());
        assert_eq!(gate.pending(), None);
    }

    #[test]
    fn test_confirm_custom_palette() {
        let colors = ColorSet::new("#111111", "#222222", "#6366f1", "#ffffff").unwrap();
        let mut wizard = wizard_on_palette_step(Some(PaletteChoice::Custom(colors.clone())));
        let mut gate = PaletteGate::new();
        gate.receive_signal(wizard.form());
        assert_eq!(gate.pending(), Some(PendingTheme::Custom));

        gate.confirm(&mut wizard).unwrap();
        assert_eq!(wizard.step(), WizardStep::PricingPlan);
        assert_eq!(
            wizard.form().selected_palette,
            Some(PaletteChoice::Custom(colors))
        );
    }

    #[test]
    fn test_cancel_leaves_wizard_alone() {
        let mut wizard = wizard_on_palette_step(Some(PaletteChoice::Named(PaletteKey::Light)));
        let before = wizard.clone();
        let mut gate = PaletteGate::new();
        gate.receive_signal(wizard.form());

        gate.cancel();
        assert!(!gate.is_open());
        assert_eq!(gate.pending(), None);
        assert_eq!(wizard, before);

        // The gate can be opened again afterwards
        assert!(gate.receive_signal(wizard.form()));
        gate.confirm(&mut wizard).unwrap();
        assert_eq!(wizard.step(), WizardStep::PricingPlan);
    }

    #[test]
    fn test_confirm_without_signal_does_nothing() {
        let mut wizard = wizard_on_palette_step(Some(PaletteChoice::Named(PaletteKey::Purple)));
        let mut gate = PaletteGate::new();

        assert_eq!(gate.confirm(&mut wizard).unwrap(), AdvanceOutcome::Blocked);
        assert_eq!(wizard.step(), WizardStep::ThemePalette);
    }

    #[test]
    fn test_pending_choice_for_preview() {
        let wizard = wizard_on_palette_step(Some(PaletteChoice::Custom(ColorSet::default())));
        let mut gate = PaletteGate::new();
        assert_eq!(gate.pending_choice(wizard.form()), None);

        gate.receive_signal(wizard.form());
        assert_eq!(
            gate.pending_choice(wizard.form()),
            Some(PaletteChoice::Custom(ColorSet::default()))
        );
        assert!(wizard.error(FormField::SelectedPalette).is_none());
    }
}
