//! Pricing plan catalogue

use serde::{Deserialize, Serialize};

/// Pricing plan identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Starter,
    Growth,
    Enterprise,
}

/// Static description of a plan
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub icon: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

impl Plan {
    /// "$79/month"
    pub fn price_label(&self) -> String {
        format!("{}{}", self.price, self.period)
    }
}

static PLANS: [Plan; 3] = [
    Plan {
        id: PlanId::Starter,
        name: "Starter",
        description: "Perfect for small educational centers",
        price: "$29",
        period: "/month",
        icon: "star",
        popular: false,
        features: &[
            "Up to 50 students",
            "Up to 5 teachers",
            "Basic student management",
            "Attendance tracking",
            "Basic reports",
            "Email support",
        ],
    },
    Plan {
        id: PlanId::Growth,
        name: "Growth",
        description: "Ideal for growing educational institutions",
        price: "$79",
        period: "/month",
        icon: "zap",
        popular: true,
        features: &[
            "Up to 200 students",
            "Up to 20 teachers",
            "Advanced analytics & reports",
            "Course content management",
            "Parent notifications",
            "Payment tracking",
            "Priority support",
            "Custom branding",
        ],
    },
    Plan {
        id: PlanId::Enterprise,
        name: "Enterprise",
        description: "For large educational institutions",
        price: "$199",
        period: "/month",
        icon: "crown",
        popular: false,
        features: &[
            "Unlimited students & teachers",
            "Multi-branch management",
            "Advanced course builder",
            "Automated billing & subscriptions",
            "White-label solution",
            "24/7 phone support",
            "Custom integrations",
            "Dedicated account manager",
        ],
    },
];

/// All plans in display order
pub fn all_plans() -> &'static [Plan] {
    &PLANS
}

impl PlanId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Starter => "starter",
            PlanId::Growth => "growth",
            PlanId::Enterprise => "enterprise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "starter" => Some(PlanId::Starter),
            "growth" => Some(PlanId::Growth),
            "enterprise" => Some(PlanId::Enterprise),
            _ => None,
        }
    }

    /// Map the optional `plan` query parameter; unknown values select nothing
    pub fn from_query(param: Option<&str>) -> Option<Self> {
        param.and_then(Self::from_str)
    }

    pub fn plan(&self) -> &'static Plan {
        match self {
            PlanId::Starter => &PLANS[0],
            PlanId::Growth => &PLANS[1],
            PlanId::Enterprise => &PLANS[2],
        }
    }

    /// Wizard URL with this plan pre-selected
    pub fn apply_href(&self) -> String {
        format!("/apply-for-center?plan={}", self.as_str())
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_and_lookup() {
        let ids: Vec<PlanId> = all_plans().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PlanId::Starter, PlanId::Growth, PlanId::Enterprise]);

        for plan in all_plans() {
            assert_eq!(plan.id.plan().name, plan.name);
        }
    }

    #[test]
    fn test_prices() {
        assert_eq!(PlanId::Starter.plan().price_label(), "$29/month");
        assert_eq!(PlanId::Growth.plan().price_label(), "$79/month");
        assert_eq!(PlanId::Enterprise.plan().price_label(), "$199/month");
    }

    #[test]
    fn test_only_growth_is_popular() {
        let popular: Vec<PlanId> = all_plans()
            .iter()
            .filter(|p| p.popular)
            .map(|p| p.id)
            .collect();
        assert_eq!(popular, vec![PlanId::Growth]);
    }

    #[test]
    fn test_from_query() {
        assert_eq!(PlanId::from_query(Some("growth")), Some(PlanId::Growth));
        assert_eq!(PlanId::from_query(Some("enterprise")), Some(PlanId::Enterprise));
        assert_eq!(PlanId::from_query(Some("Growth")), None);
        assert_eq!(PlanId::from_query(Some("")), None);
        assert_eq!(PlanId::from_query(None), None);
    }

    #[test]
    fn test_apply_href() {
        assert_eq!(PlanId::Starter.apply_href(), "/apply-for-center?plan=starter");
    }
}
