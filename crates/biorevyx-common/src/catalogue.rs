//! Assessment catalogue — the panels offered on the Assessment page.
//!
//! Each entry describes one calculator: its display heading, the parameter
//! list shown on the card, and the route the card links to.

use serde::Serialize;

/// Static metadata for one assessment panel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AssessmentPanel {
    /// Stable identifier used in logs
    pub slug: &'static str,
    pub heading: &'static str,
    pub blurb: &'static str,
    /// Parameter labels listed on the assessment card
    pub parameters: &'static [&'static str],
    /// Route of the calculator page
    pub href: &'static str,
}

/// The two panels shipped with the product.
pub const PANELS: [AssessmentPanel; 2] = [
    AssessmentPanel {
        slug: "clinical",
        heading: "Organ Biological Age Detection System",
        blurb: "It takes the following parameters and tells the biological age of your organs:",
        parameters: &[
            "Age",
            "Heart Rate",
            "Creatinine",
            "ALT Liver",
            "Cognitive Score",
            "Glucose",
            "Muscle Strength",
            "Testosterone/Estrogen Index",
        ],
        href: "/organ-age",
    },
    AssessmentPanel {
        slug: "lifestyle",
        heading: "Epigenetic Multi-Organ Biological Aging Simulation",
        blurb: "It takes the following parameters and tells the biological age of your organs:",
        parameters: &[
            "Age",
            "Heart Rate",
            "Glucose",
            "Stress",
            "Screen Time",
            "Muscle Strength",
            "Sleep Hours",
        ],
        href: "/lifestyle-age",
    },
];
