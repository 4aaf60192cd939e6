//! Dashboard presenter.
//!
//! The theme and the current user are plain constructor arguments; the
//! presenter holds no ambient state and performs no storage access. It
//! turns a credential slice into display-ready data.

use std::fmt::Write;

use crate::report::{
    self, Recommendation, SecurityBand, Share, StrengthBreakdown,
};
use crate::types::{Category, Credential};

/// Color palette for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn background(&self) -> &'static str {
        match self {
            Theme::Light => "#f5f5f5",
            Theme::Dark => "#1a1a1a",
        }
    }

    pub fn card_background(&self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#2d2d2d",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Theme::Light => "#2c3e50",
            Theme::Dark => "#ffffff",
        }
    }

    pub fn border(&self) -> &'static str {
        match self {
            Theme::Light => "#e9ecef",
            Theme::Dark => "#404040",
        }
    }
}

/// Everything a renderer needs for the security overview screen.
#[derive(Debug)]
pub struct Overview {
    pub total: usize,
    pub security_score: u8,
    pub band: SecurityBand,
    pub categories: Vec<(Category, Share)>,
    pub strength: StrengthBreakdown,
    pub recommendations: Vec<Recommendation>,
}

/// Presenter for one user's vault view.
#[derive(Debug)]
pub struct Dashboard {
    theme: Theme,
    current_user: String,
}

impl Dashboard {
    /// Builds a presenter for `current_user` with an explicit theme.
    pub fn new(theme: Theme, current_user: impl Into<String>) -> Self {
        Dashboard {
            theme,
            current_user: current_user.into(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    /// Computes the full overview for the given credentials.
    pub fn overview(&self, credentials: &[Credential]) -> Overview {
        let security_score = report::security_score(credentials);
        Overview {
            total: credentials.len(),
            security_score,
            band: SecurityBand::from_score(security_score),
            categories: report::category_distribution(credentials),
            strength: report::strength_distribution(credentials),
            recommendations: report::recommendations(credentials),
        }
    }

    /// Plain-text rendering of the overview, for terminal use.
    ///
    /// Zero-count categories are omitted here; the underlying
    /// distribution still carries them.
    pub fn render(&self, credentials: &[Credential]) -> String {
        let overview = self.overview(credentials);
        let mut out = String::new();

        let _ = writeln!(out, "Vault of {}", self.current_user);
        let _ = writeln!(
            out,
            "Security score: {}/10 ({:?})",
            overview.security_score, overview.band
        );
        let _ = writeln!(out, "Entries: {}", overview.total);

        let _ = writeln!(out, "Categories:");
        for (category, share) in &overview.categories {
            if share.count > 0 {
                let _ = writeln!(out, "  {category}: {} ({}%)", share.count, share.percentage);
            }
        }

        let strength = &overview.strength;
        let _ = writeln!(
            out,
            "Strength: {} weak ({}%), {} medium ({}%), {} strong ({}%)",
            strength.weak.count,
            strength.weak.percentage,
            strength.medium.count,
            strength.medium.percentage,
            strength.strong.count,
            strength.strong.percentage,
        );

        let _ = writeln!(out, "Recommendations:");
        for recommendation in &overview.recommendations {
            let _ = writeln!(out, "  - {recommendation}");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn credential(id: i64, secret: &str, category: Category) -> Credential {
        Credential {
            id,
            owner: 1,
            site: format!("site-{id}.example"),
            username: "alice".to_string(),
            secret: SecretString::new(secret.to_string().into()),
            category,
        }
    }

    #[test]
    fn test_overview_empty_vault() {
        let dashboard = Dashboard::new(Theme::Light, "alice");
        let overview = dashboard.overview(&[]);

        assert_eq!(overview.total, 0);
        assert_eq!(overview.security_score, 0);
        assert_eq!(overview.band, SecurityBand::Weak);
        assert_eq!(overview.recommendations, vec![Recommendation::AddMoreCredentials]);
    }

    #[test]
    fn test_overview_matches_report_functions() {
        let creds = vec![
            credential(1, "Aa1!aaaaaaaaaaaa", Category::Social),
            credential(2, "bbbbbbbb", Category::Bancario),
        ];
        let dashboard = Dashboard::new(Theme::Dark, "alice");
        let overview = dashboard.overview(&creds);

        assert_eq!(overview.security_score, report::security_score(&creds));
        assert_eq!(overview.strength.weak.count, 1);
        assert_eq!(overview.strength.strong.count, 1);
    }

    #[test]
    fn test_render_omits_empty_categories() {
        let creds = vec![credential(1, "Aa1!aaaaaaaaaaaa", Category::Social)];
        let dashboard = Dashboard::new(Theme::Light, "alice");
        let text = dashboard.render(&creds);

        assert!(text.contains("Vault of alice"));
        assert!(text.contains("Social: 1 (100%)"));
        assert!(!text.contains("Trabajo"));
    }

    #[test]
    fn test_theme_palettes_differ() {
        assert_ne!(Theme::Light.background(), Theme::Dark.background());
        assert_ne!(Theme::Light.text(), Theme::Dark.text());
    }
}
