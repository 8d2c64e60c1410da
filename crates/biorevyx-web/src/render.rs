//! Shared HTML fragments for the form pages.

use biorevyx_bioage::metrics::{FieldBounds, FieldError};
use biorevyx_bioage::scorer::{AgeReport, AgingStatus};
use chrono::{DateTime, Utc};

/// One labelled numeric input with its bounds attributes and, if present,
/// the inline validation message for the field.
pub fn field_input(bounds: &FieldBounds, value: Option<f64>, errors: &[FieldError]) -> String {
    let value_attr = value
        .map(|v| format!(r#" value="{v}""#))
        .unwrap_or_default();
    let error_html = errors
        .iter()
        .find(|e| e.field == bounds.field)
        .map(|e| format!(r#"<p class="field-error">{}</p>"#, e.message))
        .unwrap_or_default();

    format!(
        r#"<div class="form-field">
    <label for="{field}">{label}</label>
    <input type="number" id="{field}" name="{field}" class="input-field"
        min="{min}" max="{max}" step="{step}" required{value_attr}>
    {error_html}
</div>"#,
        field = bounds.field,
        label = bounds.label,
        min = bounds.min,
        max = bounds.max,
        step = bounds.step,
        value_attr = value_attr,
        error_html = error_html,
    )
}

fn status_class(status: AgingStatus) -> &'static str {
    match status {
        AgingStatus::Younger => "status-younger",
        AgingStatus::Optimal => "status-optimal",
        AgingStatus::Mild => "status-mild",
        AgingStatus::Moderate => "status-moderate",
        AgingStatus::Severe => "status-severe",
    }
}

/// The inline results card rendered under a submitted form.
pub fn results_card(report: &AgeReport, assessed_at: DateTime<Utc>) -> String {
    let rows: String = report
        .organs
        .labelled()
        .iter()
        .map(|(name, age)| {
            format!(
                r#"<div class="result-row"><span>{name} Age</span><strong>{age:.1}</strong></div>"#
            )
        })
        .collect();

    let glyph = if report.status == AgingStatus::Severe { "⚠ " } else { "" };

    format!(
        r#"<div class="card results-card">
    <h2>Results</h2>
    {rows}
    <div class="result-overall">Full Body Aging Index: <strong>{overall:.1}</strong></div>
    <div class="result-status {status_class}">{glyph}{status}</div>
    <p class="result-meta">Assessed {assessed}</p>
</div>"#,
        rows = rows,
        overall = report.overall,
        status_class = status_class(report.status),
        glyph = glyph,
        status = report.status.label(),
        assessed = assessed_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use biorevyx_bioage::metrics::{bounds_for, LIFESTYLE_BOUNDS};

    #[test]
    fn test_field_input_carries_bounds_attributes() {
        let bounds = bounds_for(&LIFESTYLE_BOUNDS, "heart_rate").unwrap();
        let html = field_input(bounds, Some(72.0), &[]);
        assert!(html.contains(r#"min="40""#));
        assert!(html.contains(r#"max="200""#));
        assert!(html.contains(r#"value="72""#));
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn test_field_input_renders_inline_message() {
        let bounds = bounds_for(&LIFESTYLE_BOUNDS, "age").unwrap();
        let errors = vec![FieldError { field: "age", message: "Minimum age is 18." }];
        let html = field_input(bounds, Some(17.0), &errors);
        assert!(html.contains("Minimum age is 18."));
    }
}
