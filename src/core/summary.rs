//! Read-only summary of a submitted application

use std::fmt::Write as _;

use serde::Serialize;

use super::application::ApplicationForm;
use super::palette::resolve_palette;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CenterInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
}

/// Administrator details. The password is deliberately absent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdminInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeInfo {
    pub name: String,
    pub is_custom: bool,
    pub swatches: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanInfo {
    pub name: String,
    pub price: String,
}

/// Projection of the final form shown on the confirmation screen
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplicationSummary {
    pub center: CenterInfo,
    pub admin: AdminInfo,
    pub theme: Option<ThemeInfo>,
    pub plan: Option<PlanInfo>,
}

impl ApplicationSummary {
    pub fn from_form(form: &ApplicationForm) -> Self {
        let theme = form.selected_palette.as_ref().map(|choice| {
            let display = resolve_palette(choice);
            ThemeInfo {
                name: display.name.to_string(),
                is_custom: choice.is_custom(),
                swatches: display.swatches(),
            }
        });

        let plan = form.selected_plan.map(|id| {
            let plan = id.plan();
            PlanInfo {
                name: plan.name.to_string(),
                price: plan.price_label(),
            }
        });

        Self {
            center: CenterInfo {
                name: form.center_name.clone(),
                address: form.address.clone(),
                city: form.city.clone(),
                phone: form.phone.clone(),
            },
            admin: AdminInfo {
                name: form.admin_name(),
                email: form.email.clone(),
                phone: form.admin_phone.clone(),
            },
            theme,
            plan,
        }
    }

    /// "Theme: Ocean Blue"
    pub fn theme_label(&self) -> String {
        match &self.theme {
            Some(theme) => format!("Theme: {}", theme.name),
            None => "Theme: not selected".to_string(),
        }
    }

    /// "Plan: Growth - $79/month"
    pub fn plan_label(&self) -> String {
        match &self.plan {
            Some(plan) => format!("Plan: {} - {}", plan.name, plan.price),
            None => "Plan: not selected".to_string(),
        }
    }

    /// Plain-text document used for the export download
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Center Application Summary");
        let _ = writeln!(out, "==========================");
        let _ = writeln!(out);
        let _ = writeln!(out, "Center Information");
        let _ = writeln!(out, "  Name:    {}", self.center.name);
        let _ = writeln!(out, "  Address: {}", self.center.address);
        let _ = writeln!(out, "  City:    {}", self.center.city);
        let _ = writeln!(out, "  Phone:   {}", self.center.phone);
        let _ = writeln!(out);
        let _ = writeln!(out, "Administrator");
        let _ = writeln!(out, "  Name:  {}", self.admin.name);
        let _ = writeln!(out, "  Email: {}", self.admin.email);
        let _ = writeln!(out, "  Phone: {}", self.admin.phone);
        let _ = writeln!(out);
        let _ = writeln!(out, "Selected Options");
        let _ = writeln!(out, "  {}", self.theme_label());
        if let Some(theme) = self.theme.as_ref().filter(|t| t.is_custom) {
            let _ = writeln!(out, "  Colors: {}", theme.swatches.join(", "));
        }
        let _ = writeln!(out, "  {}", self.plan_label());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::{ColorSet, PaletteChoice, PaletteKey};
    use crate::core::plans::PlanId;
    use crate::core::validation::complete_form;

    #[test]
    fn test_summary_of_complete_form() {
        let summary = ApplicationSummary::from_form(&complete_form());

        assert_eq!(summary.center.name, "Bright Minds Academy");
        assert_eq!(summary.center.city, "Lisbon");
        assert_eq!(summary.admin.name, "Ada Lovelace");
        assert_eq!(summary.admin.email, "ada@brightminds.edu");
        assert_eq!(summary.theme_label(), "Theme: Ocean Blue");
        assert_eq!(summary.plan_label(), "Plan: Growth - $79/month");
    }

    #[test]
    fn test_purple_resolves_to_its_name() {
        let mut form = complete_form();
        form.selected_palette = Some(PaletteChoice::Named(PaletteKey::Purple));
        let summary = ApplicationSummary::from_form(&form);
        assert_eq!(summary.theme.unwrap().name, "Creative Purple");
    }

    #[test]
    fn test_custom_theme_lists_colors() {
        let mut form = complete_form();
        form.selected_palette = Some(PaletteChoice::Custom(
            ColorSet::new("#111111", "#222222", "#6366f1", "#ffffff").unwrap(),
        ));
        form.selected_plan = Some(PlanId::Enterprise);

        let summary = ApplicationSummary::from_form(&form);
        let theme = summary.theme.clone().unwrap();
        assert!(theme.is_custom);
        assert_eq!(theme.swatches, vec!["#111111", "#222222", "#6366f1"]);

        let text = summary.to_text();
        assert!(text.contains("Theme: Custom Theme"));
        assert!(text.contains("Colors: #111111, #222222, #6366f1"));
        assert!(text.contains("Plan: Enterprise - $199/month"));
    }

    #[test]
    fn test_password_never_appears() {
        let form = complete_form();
        let summary = ApplicationSummary::from_form(&form);

        assert!(!summary.to_text().contains(&form.password));
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains(&form.password));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_missing_selections() {
        let summary = ApplicationSummary::from_form(&ApplicationForm::new());
        assert_eq!(summary.theme_label(), "Theme: not selected");
        assert_eq!(summary.plan_label(), "Plan: not selected");
    }
}
