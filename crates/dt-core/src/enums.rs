//! Capability, severity and search-source enums.
//!
//! Wire names follow the backend: permissions are `SCREAMING_SNAKE_CASE`,
//! severities and search kinds are lower case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Permission
// ---------------------------------------------------------------------------

/// Named capability carried in an auth token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    BomUpload,
    ViewPortfolio,
    PortfolioManagement,
    AccessManagement,
    VulnerabilityAnalysis,
    ProjectCreationUpload,
    PolicyViolationAnalysis,
    SystemConfiguration,
}

impl Permission {
    /// Every permission the backend issues.
    pub const ALL: [Self; 8] = [
        Self::BomUpload,
        Self::ViewPortfolio,
        Self::PortfolioManagement,
        Self::AccessManagement,
        Self::VulnerabilityAnalysis,
        Self::ProjectCreationUpload,
        Self::PolicyViolationAnalysis,
        Self::SystemConfiguration,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BomUpload => "BOM_UPLOAD",
            Self::ViewPortfolio => "VIEW_PORTFOLIO",
            Self::PortfolioManagement => "PORTFOLIO_MANAGEMENT",
            Self::AccessManagement => "ACCESS_MANAGEMENT",
            Self::VulnerabilityAnalysis => "VULNERABILITY_ANALYSIS",
            Self::ProjectCreationUpload => "PROJECT_CREATION_UPLOAD",
            Self::PolicyViolationAnalysis => "POLICY_VIOLATION_ANALYSIS",
            Self::SystemConfiguration => "SYSTEM_CONFIGURATION",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("unknown permission: {s}")))
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Vulnerability severity buckets used by labels and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
    Unassigned,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
            Self::Unassigned => "unassigned",
        }
    }

    /// Display name with a leading capital (`"Critical"`).
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Info => "Info",
            Self::Unassigned => "Unassigned",
        }
    }

    /// CSS background class, e.g. `severity-high-bg`.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("severity-{}-bg", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SearchKind
// ---------------------------------------------------------------------------

/// One smart-search source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Project,
    Component,
    Vulnerability,
    License,
}

impl SearchKind {
    /// Sources in the order they are presented.
    pub const ALL: [Self; 4] = [
        Self::Project,
        Self::Component,
        Self::Vulnerability,
        Self::License,
    ];

    /// Path segment and result key used by the search endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Component => "component",
            Self::Vulnerability => "vulnerability",
            Self::License => "license",
        }
    }

    /// Section heading shown above the suggestions.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Project => "Projects",
            Self::Component => "Components",
            Self::Vulnerability => "Vulnerabilities",
            Self::License => "Licenses",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
