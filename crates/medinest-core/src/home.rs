//! Static content of the home page

use crate::navigation::{Accent, Icon};
use crate::routes::AppRoute;

pub const HERO_TITLE: &str = "Welcome to MediNest";

pub const HERO_SUBTITLE: &str = "Your all-in-one healthcare companion for managing prescriptions, \
     tracking symptoms, and connecting with healthcare professionals.";

/// "Get Started" navigates here
pub const PRIMARY_CTA: (&str, AppRoute) = ("Get Started", AppRoute::Signup);

/// "Learn More" has no action yet
pub const SECONDARY_CTA: &str = "Learn More";

/// One card of the feature grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub icon: Icon,
    pub accent: Accent,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURE_HIGHLIGHTS: [FeatureHighlight; 3] = [
    FeatureHighlight {
        icon: Icon::Upload,
        accent: Accent::Green,
        title: "Upload Prescriptions",
        description: "Easily upload and manage your medical prescriptions",
    },
    FeatureHighlight {
        icon: Icon::Stethoscope,
        accent: Accent::Blue,
        title: "Book Consultations",
        description: "Connect with healthcare professionals online",
    },
    FeatureHighlight {
        icon: Icon::Bell,
        accent: Accent::Yellow,
        title: "Medication Reminders",
        description: "Never miss your medication with smart reminders",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_started_leads_to_signup() {
        let (label, route) = PRIMARY_CTA;
        assert_eq!(label, "Get Started");
        assert_eq!(route.path(), "/signup");
        assert!(!route.is_guarded());
    }

    #[test]
    fn test_feature_grid() {
        let titles: Vec<_> = FEATURE_HIGHLIGHTS.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["Upload Prescriptions", "Book Consultations", "Medication Reminders"]
        );

        let icons: Vec<_> = FEATURE_HIGHLIGHTS.iter().map(|f| f.icon).collect();
        assert_eq!(icons, vec![Icon::Upload, Icon::Stethoscope, Icon::Bell]);
        assert!(FEATURE_HIGHLIGHTS.iter().all(|f| !f.description.is_empty()));
    }
}
