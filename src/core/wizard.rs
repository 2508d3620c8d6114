//! Wizard controller for the center application
//!
//! Owns the form record, the current step and the error map of the last
//! validation attempt. Steps only advance through their validator, and step 3
//! only advances with a [`PaletteConfirmed`] token from the palette gate.

use super::application::{ApplicationForm, FormField};
use super::confirmation::PaletteConfirmed;
use super::palette::PaletteChoice;
use super::plans::PlanId;
use super::validation::{ErrorMap, validate_step};

/// Wizard steps
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    CenterDetails,
    AdminDetails,
    ThemePalette,
    PricingPlan,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::CenterDetails,
        WizardStep::AdminDetails,
        WizardStep::ThemePalette,
        WizardStep::PricingPlan,
    ];

    /// 1-based step number for display
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::CenterDetails => 1,
            WizardStep::AdminDetails => 2,
            WizardStep::ThemePalette => 3,
            WizardStep::PricingPlan => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == n)
    }

    pub fn total() -> u8 {
        Self::ALL.len() as u8
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::CenterDetails => "Center Details",
            WizardStep::AdminDetails => "Admin Details",
            WizardStep::ThemePalette => "Theme & Palette",
            WizardStep::PricingPlan => "Pricing Plan",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WizardStep::CenterDetails => "building",
            WizardStep::AdminDetails => "user",
            WizardStep::ThemePalette => "palette",
            WizardStep::PricingPlan => "credit-card",
        }
    }

    /// Following step, saturating at the last one
    pub fn next(&self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(*self)
    }

    /// Previous step, saturating at the first one
    pub fn prev(&self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(*self)
    }

    pub fn is_first(&self) -> bool {
        *self == WizardStep::CenterDetails
    }

    pub fn is_last(&self) -> bool {
        *self == WizardStep::PricingPlan
    }
}

/// How a step appears in the progress indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

/// Result of an advance attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the given step
    Moved(WizardStep),
    /// The step validator produced errors
    Blocked,
    /// Step 3 passed validation; the palette gate decides whether to continue
    AwaitingConfirmation,
    /// Step 4 passed validation and the application is now submitted
    Submitted,
}

/// What the "Next" button should do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextAction {
    Advanced(AdvanceOutcome),
    /// Dispatch the confirmation signal to the palette step
    ConfirmPalette,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("Application has already been submitted")]
    AlreadySubmitted,

    #[error("'{0}' is not a text field")]
    NotATextField(FormField),
}

/// Wizard controller state
#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    form: ApplicationForm,
    step: WizardStep,
    errors: ErrorMap,
    submitted: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Wizard {
    /// Start a session, pre-seeding the plan from the `plan` query parameter
    pub fn new(plan_param: Option<&str>) -> Self {
        Self::with_form(ApplicationForm::with_plan_param(plan_param))
    }

    pub fn with_form(form: ApplicationForm) -> Self {
        Self {
            form,
            step: WizardStep::CenterDetails,
            errors: ErrorMap::new(),
            submitted: false,
        }
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn progress_percent(&self) -> u8 {
        self.step.number() * 100 / WizardStep::total()
    }

    pub fn step_status(&self, step: WizardStep) -> StepStatus {
        if step < self.step {
            StepStatus::Completed
        } else if step == self.step {
            StepStatus::Active
        } else {
            StepStatus::Upcoming
        }
    }

    fn edit(
        &mut self,
        field: FormField,
        apply: impl FnOnce(&mut ApplicationForm),
    ) -> Result<(), WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        apply(&mut self.form);
        self.errors.clear_field(field);
        Ok(())
    }

    /// Set a text field and clear its error. No validation runs here.
    pub fn update_text(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        if !field.is_text() {
            return Err(WizardError::NotATextField(field));
        }
        let value = value.into();
        self.edit(field, |form| {
            if let Some(slot) = form.text_mut(field) {
                *slot = value;
            }
        })
    }

    /// Set the theme palette. Custom colour sets are valid by construction.
    pub fn select_palette(&mut self, choice: Option<PaletteChoice>) -> Result<(), WizardError> {
        self.edit(FormField::SelectedPalette, |form| {
            form.selected_palette = choice;
        })
    }

    pub fn select_plan(&mut self, plan: Option<PlanId>) -> Result<(), WizardError> {
        self.edit(FormField::SelectedPlan, |form| form.selected_plan = plan)
    }

    /// Validate the current step and move on if it passes
    pub fn advance(&mut self) -> Result<AdvanceOutcome, WizardError> {
        self.advance_with(ErrorMap::new())
    }

    /// [`advance`](Self::advance) with extra errors from asynchronous checks
    pub fn advance_with(&mut self, extra: ErrorMap) -> Result<AdvanceOutcome, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.step.is_last() {
            return self.submit();
        }

        let mut errors = validate_step(self.step, &self.form);
        errors.merge(extra);
        let passed = errors.is_empty();
        self.errors = errors;

        if !passed {
            return Ok(AdvanceOutcome::Blocked);
        }
        if self.step == WizardStep::ThemePalette {
            return Ok(AdvanceOutcome::AwaitingConfirmation);
        }

        self.step = self.step.next();
        Ok(AdvanceOutcome::Moved(self.step))
    }

    /// Leave step 3 once the palette dialog has been confirmed
    pub fn advance_confirmed(
        &mut self,
        _confirmed: PaletteConfirmed,
    ) -> Result<AdvanceOutcome, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.step != WizardStep::ThemePalette {
            return Ok(AdvanceOutcome::Blocked);
        }

        self.errors = validate_step(self.step, &self.form);
        if !self.errors.is_empty() {
            return Ok(AdvanceOutcome::Blocked);
        }

        self.step = self.step.next();
        Ok(AdvanceOutcome::Moved(self.step))
    }

    /// Handle the global "Next" button
    pub fn next(&mut self) -> Result<NextAction, WizardError> {
        match self.advance()? {
            AdvanceOutcome::AwaitingConfirmation => Ok(NextAction::ConfirmPalette),
            outcome => Ok(NextAction::Advanced(outcome)),
        }
    }

    /// Go back one step. Errors and field values are kept.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        self.step = self.step.prev();
        Ok(self.step)
    }

    /// Validate the plan step and freeze the form
    pub fn submit(&mut self) -> Result<AdvanceOutcome, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        self.errors = validate_step(WizardStep::PricingPlan, &self.form);
        if !self.errors.is_empty() {
            return Ok(AdvanceOutcome::Blocked);
        }
        self.submitted = true;
        Ok(AdvanceOutcome::Submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::PaletteKey;
    use crate::core::validation::complete_form;

    fn wizard_at(step: WizardStep) -> Wizard {
        let mut wizard = Wizard::with_form(complete_form());
        wizard.step = step;
        wizard
    }

    #[test]
    fn test_initial_state() {
        let wizard = Wizard::new(None);
        assert_eq!(wizard.step(), WizardStep::CenterDetails);
        assert!(wizard.errors().is_empty());
        assert!(!wizard.is_submitted());
        assert_eq!(wizard.form().selected_plan, None);
        assert_eq!(wizard.progress_percent(), 25);
    }

    #[test]
    fn test_step_numbering() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(5), None);
        assert_eq!(WizardStep::PricingPlan.next(), WizardStep::PricingPlan);
        assert_eq!(WizardStep::CenterDetails.prev(), WizardStep::CenterDetails);
    }

    #[test]
    fn test_advance_moves_on_valid_steps() {
        let mut wizard = Wizard::with_form(complete_form());
        assert_eq!(
            wizard.advance().unwrap(),
            AdvanceOutcome::Moved(WizardStep::AdminDetails)
        );
        assert_eq!(
            wizard.advance().unwrap(),
            AdvanceOutcome::Moved(WizardStep::ThemePalette)
        );
        assert_eq!(wizard.progress_percent(), 75);
    }

    #[test]
    fn test_advance_blocked_keeps_step() {
        let mut wizard = Wizard::new(None);
        assert_eq!(wizard.advance().unwrap(), AdvanceOutcome::Blocked);
        assert_eq!(wizard.step(), WizardStep::CenterDetails);
        assert_eq!(wizard.errors().len(), 4);
        assert_eq!(
            wizard.error(FormField::CenterName),
            Some("Center name is required")
        );
    }

    #[test]
    fn test_advance_on_palette_step_waits_for_confirmation() {
        let mut wizard = wizard_at(WizardStep::ThemePalette);
        assert_eq!(
            wizard.advance().unwrap(),
            AdvanceOutcome::AwaitingConfirmation
        );
        assert_eq!(wizard.step(), WizardStep::ThemePalette);
    }

    #[test]
    fn test_advance_on_last_step_submits() {
        let mut wizard = wizard_at(WizardStep::PricingPlan);
        assert_eq!(wizard.advance().unwrap(), AdvanceOutcome::Submitted);
        assert!(wizard.is_submitted());
        assert_eq!(wizard.step(), WizardStep::PricingPlan);
    }

    #[test]
    fn test_next_on_palette_step() {
        let mut wizard = wizard_at(WizardStep::ThemePalette);
        assert_eq!(wizard.next().unwrap(), NextAction::ConfirmPalette);

        wizard.select_palette(None).unwrap();
        assert_eq!(
            wizard.next().unwrap(),
            NextAction::Advanced(AdvanceOutcome::Blocked)
        );
        assert_eq!(
            wizard.error(FormField::SelectedPalette),
            Some("Please select a theme palette")
        );
    }

    #[test]
    fn test_retreat_floors_at_first_step() {
        let mut wizard = wizard_at(WizardStep::AdminDetails);
        assert_eq!(wizard.retreat().unwrap(), WizardStep::CenterDetails);
        assert_eq!(wizard.retreat().unwrap(), WizardStep::CenterDetails);
    }

    #[test]
    fn test_retreat_keeps_errors_and_fields() {
        let mut wizard = wizard_at(WizardStep::AdminDetails);
        wizard.update_text(FormField::Email, "").unwrap();
        wizard.advance().unwrap();
        assert!(wizard.errors().contains(FormField::Email));

        wizard.retreat().unwrap();
        assert!(wizard.errors().contains(FormField::Email));
        assert_eq!(wizard.form().city, "Lisbon");
    }

    #[test]
    fn test_update_clears_only_that_field() {
        let mut wizard = Wizard::new(None);
        wizard.advance().unwrap();
        assert_eq!(wizard.errors().len(), 4);

        wizard.update_text(FormField::City, "Porto").unwrap();
        assert!(!wizard.errors().contains(FormField::City));
        assert_eq!(wizard.errors().len(), 3);
        assert!(wizard.errors().contains(FormField::CenterName));
        assert_eq!(wizard.form().city, "Porto");
    }

    #[test]
    fn test_update_text_rejects_selection_fields() {
        let mut wizard = Wizard::new(None);
        assert_eq!(
            wizard.update_text(FormField::SelectedPlan, "growth"),
            Err(WizardError::NotATextField(FormField::SelectedPlan))
        );
        assert_eq!(wizard.form().selected_plan, None);
    }

    #[test]
    fn test_select_plan_clears_plan_error() {
        let mut wizard = wizard_at(WizardStep::PricingPlan);
        wizard.select_plan(None).unwrap();
        assert_eq!(wizard.submit().unwrap(), AdvanceOutcome::Blocked);
        assert!(wizard.errors().contains(FormField::SelectedPlan));

        wizard.select_plan(Some(PlanId::Starter)).unwrap();
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.submit().unwrap(), AdvanceOutcome::Submitted);
    }

    #[test]
    fn test_submitted_wizard_is_frozen() {
        let mut wizard = wizard_at(WizardStep::PricingPlan);
        wizard.submit().unwrap();
        let before = wizard.form().clone();

        assert_eq!(
            wizard.update_text(FormField::City, "Paris"),
            Err(WizardError::AlreadySubmitted)
        );
        assert_eq!(
            wizard.select_palette(Some(PaletteChoice::Named(PaletteKey::Dark))),
            Err(WizardError::AlreadySubmitted)
        );
        assert_eq!(
            wizard.select_plan(None),
            Err(WizardError::AlreadySubmitted)
        );
        assert_eq!(wizard.retreat(), Err(WizardError::AlreadySubmitted));
        assert_eq!(wizard.advance(), Err(WizardError::AlreadySubmitted));
        assert_eq!(wizard.submit(), Err(WizardError::AlreadySubmitted));
        assert_eq!(wizard.form(), &before);
    }

    #[test]
    fn test_advance_with_extra_errors_blocks() {
        let mut wizard = wizard_at(WizardStep::AdminDetails);
        let mut extra = ErrorMap::new();
        extra.add(
            FormField::Email,
            crate::core::validation::FieldError::EmailTaken,
        );

        assert_eq!(wizard.advance_with(extra).unwrap(), AdvanceOutcome::Blocked);
        assert_eq!(wizard.step(), WizardStep::AdminDetails);
        assert_eq!(
            wizard.error(FormField::Email),
            Some("Email is already registered")
        );
    }

    #[test]
    fn test_step_status() {
        let wizard = wizard_at(WizardStep::ThemePalette);
        assert_eq!(
            wizard.step_status(WizardStep::CenterDetails),
            StepStatus::Completed
        );
        assert_eq!(
            wizard.step_status(WizardStep::ThemePalette),
            StepStatus::Active
        );
        assert_eq!(
            wizard.step_status(WizardStep::PricingPlan),
            StepStatus::Upcoming
        );
    }

    #[test]
    fn test_wizard_error_display() {
        assert_eq!(
            WizardError::AlreadySubmitted.to_string(),
            "Application has already been submitted"
        );
        assert_eq!(
            WizardError::NotATextField(FormField::SelectedPalette).to_string(),
            "'selectedPalette' is not a text field"
        );
    }
}
