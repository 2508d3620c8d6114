//! Step validators for the application wizard
//!
//! Each wizard step has one pure validator that inspects the form and returns
//! an [`ErrorMap`]. Only presence and password length are checked here; the
//! email-uniqueness check is asynchronous and lives in `submission`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::application::{ApplicationForm, FormField};
use super::wizard::WizardStep;

/// Minimum password length for the administrator account
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation error kinds
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// A required field is empty
    Required(FormField),
    /// Password is present but too short
    PasswordTooShort { min: usize },
    /// No theme palette selected
    PaletteMissing,
    /// No pricing plan selected
    PlanMissing,
    /// Email already used by another application
    EmailTaken,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.label()),
            FieldError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters long", min)
            }
            FieldError::PaletteMissing => write!(f, "Please select a theme palette"),
            FieldError::PlanMissing => write!(f, "Please select a pricing plan"),
            FieldError::EmailTaken => write!(f, "Email is already registered"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Field name to message mapping produced by a validation attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FormField, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Record an error, replacing any earlier message for the same field
    pub fn add(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error.to_string());
    }

    /// Remove a single field's error. Returns whether one was present.
    pub fn clear_field(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    /// Add every entry of `other`, `other` winning on conflicts
    pub fn merge(&mut self, other: ErrorMap) {
        self.0.extend(other.0);
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl FromIterator<(FormField, FieldError)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (FormField, FieldError)>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for (field, error) in iter {
            map.add(field, error);
        }
        map
    }
}

fn require(errors: &mut ErrorMap, form: &ApplicationForm, fields: &[FormField]) {
    for field in fields {
        if form.text(*field).is_some_and(str::is_empty) {
            errors.add(*field, FieldError::Required(*field));
        }
    }
}

/// Step 1: center identity
pub fn validate_center_details(form: &ApplicationForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    require(
        &mut errors,
        form,
        &[
            FormField::CenterName,
            FormField::Address,
            FormField::City,
            FormField::Phone,
        ],
    );
    errors
}

/// Step 2: administrator identity
pub fn validate_admin_details(form: &ApplicationForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    require(
        &mut errors,
        form,
        &[
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
            FormField::AdminPhone,
            FormField::Password,
        ],
    );

    // Replaces the required-error rather than adding a second message
    if !form.password.is_empty() && form.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add(
            FormField::Password,
            FieldError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            },
        );
    }
    errors
}

/// Step 3: theme palette
pub fn validate_palette(form: &ApplicationForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if form.selected_palette.is_none() {
        errors.add(FormField::SelectedPalette, FieldError::PaletteMissing);
    }
    errors
}

/// Step 4: pricing plan
pub fn validate_plan(form: &ApplicationForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if form.selected_plan.is_none() {
        errors.add(FormField::SelectedPlan, FieldError::PlanMissing);
    }
    errors
}

/// Run the validator belonging to `step`
pub fn validate_step(step: WizardStep, form: &ApplicationForm) -> ErrorMap {
    match step {
        WizardStep::CenterDetails => validate_center_details(form),
        WizardStep::AdminDetails => validate_admin_details(form),
        WizardStep::ThemePalette => validate_palette(form),
        WizardStep::PricingPlan => validate_plan(form),
    }
}

/// Every step at once, for checking a complete submission
pub fn validate_all(form: &ApplicationForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for step in WizardStep::ALL {
        errors.merge(validate_step(step, form));
    }
    errors
}

#[cfg(test)]
pub(crate) fn complete_form() -> ApplicationForm {
    use super::palette::{PaletteChoice, PaletteKey};
    use super::plans::PlanId;

    ApplicationForm {
        center_name: "Bright Minds Academy".to_string(),
        address: "12 Harbour Road".to_string(),
        city: "Lisbon".to_string(),
        phone: "+351 210 000 000".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@brightminds.edu".to_string(),
        admin_phone: "+351 910 000 000".to_string(),
        password: "analytical".to_string(),
        selected_palette: Some(PaletteChoice::Named(PaletteKey::Blue)),
        selected_plan: Some(PlanId::Growth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_form_passes_every_step() {
        let form = complete_form();
        for step in WizardStep::ALL {
            assert!(validate_step(step, &form).is_empty(), "step {:?}", step);
        }
        assert!(validate_all(&form).is_empty());
    }

    #[test]
    fn test_center_details_required_messages() {
        let fields = [
            (FormField::CenterName, "Center name is required"),
            (FormField::Address, "Address is required"),
            (FormField::City, "City is required"),
            (FormField::Phone, "Phone number is required"),
        ];

        for (field, message) in fields {
            let mut form = complete_form();
            form.text_mut(field).unwrap().clear();

            let errors = validate_center_details(&form);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn test_admin_details_required_messages() {
        let fields = [
            (FormField::FirstName, "First name is required"),
            (FormField::LastName, "Last name is required"),
            (FormField::Email, "Email is required"),
            (FormField::AdminPhone, "Phone number is required"),
            (FormField::Password, "Password is required"),
        ];

        for (field, message) in fields {
            let mut form = complete_form();
            form.text_mut(field).unwrap().clear();

            let errors = validate_admin_details(&form);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn test_short_password_replaces_required_error() {
        let mut form = complete_form();
        form.password = "short".to_string();

        let errors = validate_admin_details(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::Password),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_password_length_boundary() {
        let mut form = complete_form();
        form.password = "1234567".to_string();
        assert!(validate_admin_details(&form).contains(FormField::Password));

        form.password = "12345678".to_string();
        assert!(validate_admin_details(&form).is_empty());

        // Counted in characters, not bytes
        form.password = "ééééééé".to_string();
        assert!(validate_admin_details(&form).contains(FormField::Password));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut form = complete_form();
        form.city = " ".to_string();
        assert!(validate_center_details(&form).is_empty());
    }

    #[test]
    fn test_palette_and_plan_messages() {
        let mut form = complete_form();
        form.selected_palette = None;
        form.selected_plan = None;

        let errors = validate_palette(&form);
        assert_eq!(
            errors.get(FormField::SelectedPalette),
            Some("Please select a theme palette")
        );
        assert_eq!(errors.len(), 1);

        let errors = validate_plan(&form);
        assert_eq!(
            errors.get(FormField::SelectedPlan),
            Some("Please select a pricing plan")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validators_only_look_at_their_step() {
        let form = ApplicationForm::new();
        let errors = validate_palette(&form);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FormField::SelectedPalette]);

        let errors = validate_center_details(&form);
        assert_eq!(errors.len(), 4);
        assert!(!errors.contains(FormField::Email));
    }

    #[test]
    fn test_validate_all_on_empty_form() {
        let errors = validate_all(&ApplicationForm::new());
        assert_eq!(errors.len(), FormField::ALL.len());
    }

    #[test]
    fn test_error_map_clear_and_merge() {
        let mut errors: ErrorMap = [
            (FormField::City, FieldError::Required(FormField::City)),
            (FormField::Phone, FieldError::Required(FormField::Phone)),
        ]
        .into_iter()
        .collect();

        assert!(errors.clear_field(FormField::City));
        assert!(!errors.clear_field(FormField::City));
        assert_eq!(errors.len(), 1);

        let mut other = ErrorMap::new();
        other.add(FormField::Email, FieldError::EmailTaken);
        errors.merge(other);
        assert_eq!(errors.get(FormField::Email), Some("Email is already registered"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_error_map_serializes_as_object() {
        let mut errors = ErrorMap::new();
        errors.add(FormField::SelectedPlan, FieldError::PlanMissing);

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"selectedPlan":"Please select a pricing plan"}"#);

        let back: ErrorMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, errors);
    }
}
