//! Application form record shared by every step of the wizard

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::palette::PaletteChoice;
use super::plans::PlanId;

/// Every field of the application form, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CenterName,
    Address,
    City,
    Phone,
    FirstName,
    LastName,
    Email,
    AdminPhone,
    Password,
    SelectedPalette,
    SelectedPlan,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::CenterName,
        FormField::Address,
        FormField::City,
        FormField::Phone,
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::AdminPhone,
        FormField::Password,
        FormField::SelectedPalette,
        FormField::SelectedPlan,
    ];

    /// Key used on the wire and in the DOM (`id`/`name` attributes)
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::CenterName => "centerName",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::Phone => "phone",
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::AdminPhone => "adminPhone",
            FormField::Password => "password",
            FormField::SelectedPalette => "selectedPalette",
            FormField::SelectedPlan => "selectedPlan",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == s)
    }

    /// Human readable label, also the subject of "is required" messages
    pub fn label(&self) -> &'static str {
        match self {
            FormField::CenterName => "Center name",
            FormField::Address => "Address",
            FormField::City => "City",
            FormField::Phone | FormField::AdminPhone => "Phone number",
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::SelectedPalette => "Theme palette",
            FormField::SelectedPlan => "Pricing plan",
        }
    }

    /// Whether the field holds free text (as opposed to a catalogue selection)
    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::SelectedPalette | FormField::SelectedPlan)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The record filled in across the wizard
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    // Center details
    pub center_name: String,
    pub address: String,
    pub city: String,
    pub phone: String,

    // Admin details
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub admin_phone: String,
    pub password: String,

    #[serde(deserialize_with = "blank_as_none")]
    pub selected_palette: Option<PaletteChoice>,
    #[serde(deserialize_with = "blank_as_none")]
    pub selected_plan: Option<PlanId>,
}

/// Older clients send `""` for an unselected option
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a form with the plan taken from the `plan` query parameter
    pub fn with_plan_param(plan: Option<&str>) -> Self {
        Self {
            selected_plan: PlanId::from_query(plan),
            ..Self::default()
        }
    }

    /// Read a text field. Returns `None` for the two selection fields.
    pub fn text(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::CenterName => &self.center_name,
            FormField::Address => &self.address,
            FormField::City => &self.city,
            FormField::Phone => &self.phone,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::AdminPhone => &self.admin_phone,
            FormField::Password => &self.password,
            FormField::SelectedPalette | FormField::SelectedPlan => return None,
        };
        Some(value.as_str())
    }

    pub(crate) fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        let value = match field {
            FormField::CenterName => &mut self.center_name,
            FormField::Address => &mut self.address,
            FormField::City => &mut self.city,
            FormField::Phone => &mut self.phone,
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::AdminPhone => &mut self.admin_phone,
            FormField::Password => &mut self.password,
            FormField::SelectedPalette | FormField::SelectedPlan => return None,
        };
        Some(value)
    }

    /// Full administrator name as shown in summaries
    pub fn admin_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::{ColorSet, PaletteKey};

    #[test]
    fn test_field_keys_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_str(field.as_str()), Some(field));
        }
        assert_eq!(FormField::from_str("centerType"), None);
    }

    #[test]
    fn test_text_accessor_skips_selection_fields() {
        let mut form = ApplicationForm::new();
        form.city = "Lyon".to_string();

        assert_eq!(form.text(FormField::City), Some("Lyon"));
        assert_eq!(form.text(FormField::SelectedPalette), None);
        assert_eq!(form.text(FormField::SelectedPlan), None);
        assert!(form.text_mut(FormField::SelectedPlan).is_none());
    }

    #[test]
    fn test_with_plan_param() {
        let form = ApplicationForm::with_plan_param(Some("growth"));
        assert_eq!(form.selected_plan, Some(PlanId::Growth));

        let form = ApplicationForm::with_plan_param(Some("platinum"));
        assert_eq!(form.selected_plan, None);

        let form = ApplicationForm::with_plan_param(None);
        assert_eq!(form.selected_plan, None);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut form = ApplicationForm::new();
        form.center_name = "Bright Minds".to_string();
        form.admin_phone = "555-0101".to_string();
        form.selected_palette = Some(PaletteChoice::Named(PaletteKey::Blue));
        form.selected_plan = Some(PlanId::Starter);

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["centerName"], "Bright Minds");
        assert_eq!(json["adminPhone"], "555-0101");
        assert_eq!(json["selectedPalette"], "blue");
        assert_eq!(json["selectedPlan"], "starter");
    }

    #[test]
    fn test_custom_palette_serializes_as_object() {
        let mut form = ApplicationForm::new();
        form.selected_palette = Some(PaletteChoice::Custom(ColorSet::default()));

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["selectedPalette"]["primary"], "#1a1a1a");
        assert_eq!(json["selectedPalette"]["text"], "#ffffff");

        let back: ApplicationForm = serde_json::from_value(json).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_missing_keys_deserialize_to_defaults() {
        let form: ApplicationForm = serde_json::from_str(r#"{"email": "a@b.co"}"#).unwrap();
        assert_eq!(form.email, "a@b.co");
        assert!(form.center_name.is_empty());
        assert!(form.selected_palette.is_none());
    }

    #[test]
    fn test_blank_selections_deserialize_as_absent() {
        let form: ApplicationForm =
            serde_json::from_str(r#"{"selectedPalette": "", "selectedPlan": ""}"#).unwrap();
        assert_eq!(form.selected_palette, None);
        assert_eq!(form.selected_plan, None);

        let form: ApplicationForm =
            serde_json::from_str(r#"{"selectedPalette": null, "selectedPlan": "growth"}"#).unwrap();
        assert_eq!(form.selected_palette, None);
        assert_eq!(form.selected_plan, Some(PlanId::Growth));

        assert!(serde_json::from_str::<ApplicationForm>(r#"{"selectedPlan": "gold"}"#).is_err());
    }

    #[test]
    fn test_admin_name() {
        let mut form = ApplicationForm::new();
        form.first_name = "Ada".to_string();
        form.last_name = "Lovelace".to_string();
        assert_eq!(form.admin_name(), "Ada Lovelace");

        form.last_name.clear();
        assert_eq!(form.admin_name(), "Ada");
    }
}
