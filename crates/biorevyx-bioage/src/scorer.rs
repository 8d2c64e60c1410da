//! Per-organ biological age computation.
//!
//! Each organ score is a fixed linear combination of shaped deviations; the
//! score is clamped to [-1, 1] and stretched by `MAX_SHIFT` years around the
//! chronological age. The overall index is the mean of the organ ages.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::{bio_curve, deviation, round1};
use crate::metrics::{ClinicalMetrics, LifestyleMetrics};
use crate::reference::{ClinicalReference, LifestyleReference};

/// Maximum number of years an organ age can move away from the
/// chronological age in either direction.
pub const MAX_SHIFT: f64 = 25.0;

/// Qualitative bucket for the gap between overall and chronological age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingStatus {
    Younger,
    Optimal,
    Mild,
    Moderate,
    Severe,
}

impl AgingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgingStatus::Younger => "Biologically Younger",
            AgingStatus::Optimal => "Optimal Aging",
            AgingStatus::Mild => "Mild Acceleration",
            AgingStatus::Moderate => "Moderate Acceleration",
            AgingStatus::Severe => "Severe Accelerated Aging",
        }
    }
}

/// Bucket the difference between overall and chronological age.
/// Upper bounds are inclusive.
pub fn classify(diff: f64) -> AgingStatus {
    if diff <= -4.0 {
        AgingStatus::Younger
    } else if diff <= 3.0 {
        AgingStatus::Optimal
    } else if diff <= 8.0 {
        AgingStatus::Mild
    } else if diff <= 15.0 {
        AgingStatus::Moderate
    } else {
        AgingStatus::Severe
    }
}

/// One rounded age per tracked organ/system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrganAges {
    pub heart: f64,
    pub brain: f64,
    pub kidney: f64,
    pub liver: f64,
    pub pancreas: f64,
    pub muscle: f64,
    pub hormonal: f64,
}

impl OrganAges {
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.heart,
            self.brain,
            self.kidney,
            self.liver,
            self.pancreas,
            self.muscle,
            self.hormonal,
        ]
    }

    pub fn mean(&self) -> f64 {
        self.as_array().iter().sum::<f64>() / 7.0
    }

    /// (display name, age) pairs in presentation order.
    pub fn labelled(&self) -> [(&'static str, f64); 7] {
        [
            ("Heart", self.heart),
            ("Brain", self.brain),
            ("Kidney", self.kidney),
            ("Liver", self.liver),
            ("Pancreas", self.pancreas),
            ("Muscle", self.muscle),
            ("Hormonal", self.hormonal),
        ]
    }
}

/// Full result of one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeReport {
    pub organs: OrganAges,
    pub overall: f64,
    pub status: AgingStatus,
}

/// Convert an organ score into an age around the chronological age.
fn shift(age: f64, score: f64) -> f64 {
    round1(age + score.clamp(-1.0, 1.0) * MAX_SHIFT)
}

fn report(age: f64, organs: OrganAges) -> AgeReport {
    let overall = round1(organs.mean());
    let status = classify(overall - age);
    AgeReport { organs, overall, status }
}

/// Score the lifestyle variant.
pub fn score_lifestyle(metrics: &LifestyleMetrics, reference: &LifestyleReference) -> AgeReport {
    let hr = bio_curve(deviation(
        metrics.heart_rate,
        reference.heart_rate.ideal,
        reference.heart_rate.tolerance,
    ));
    let glucose = bio_curve(deviation(
        metrics.glucose,
        reference.glucose.ideal,
        reference.glucose.tolerance,
    ));
    let stress = bio_curve(deviation(
        metrics.stress,
        reference.stress.ideal,
        reference.stress.tolerance,
    ));
    let screen = bio_curve(deviation(
        metrics.screen_time,
        reference.screen_time.ideal,
        reference.screen_time.tolerance,
    ));
    // Deficit-directed: falling short of the ideal is the degradation.
    let sleep_deficit = bio_curve(deviation(
        reference.sleep.ideal - metrics.sleep_hours,
        0.0,
        reference.sleep.tolerance,
    ));
    let strength_deficit = bio_curve(deviation(
        reference.muscle_strength.ideal - metrics.muscle_strength,
        0.0,
        reference.muscle_strength.tolerance,
    ));
    let sleep = bio_curve(deviation(
        metrics.sleep_hours,
        reference.sleep.ideal,
        reference.sleep.tolerance,
    ));

    let organs = OrganAges {
        heart: shift(metrics.age, hr + stress * 0.6),
        brain: shift(metrics.age, screen + sleep_deficit),
        kidney: shift(metrics.age, glucose * 0.8 + stress * 0.3),
        liver: shift(metrics.age, glucose * 0.7 + screen * 0.2),
        pancreas: shift(metrics.age, glucose),
        muscle: shift(metrics.age, strength_deficit),
        hormonal: shift(metrics.age, sleep + stress * 0.7),
    };

    let report = report(metrics.age, organs);
    debug!(
        variant = "lifestyle",
        overall = report.overall,
        status = report.status.label(),
        "assessment scored"
    );
    report
}

/// Score the clinical panel variant.
pub fn score_clinical(metrics: &ClinicalMetrics, reference: &ClinicalReference) -> AgeReport {
    let hr = bio_curve(deviation(
        metrics.heart_rate,
        reference.heart_rate.ideal,
        reference.heart_rate.tolerance,
    ));
    let creatinine = bio_curve(deviation(
        metrics.creatinine,
        reference.creatinine.ideal,
        reference.creatinine.tolerance,
    ));
    let alt = bio_curve(deviation(
        metrics.alt_liver,
        reference.alt_liver.ideal,
        reference.alt_liver.tolerance,
    ));
    let glucose = bio_curve(deviation(
        metrics.glucose,
        reference.glucose.ideal,
        reference.glucose.tolerance,
    ));
    let hormone = bio_curve(deviation(
        metrics.hormone_index,
        reference.hormone_index.ideal,
        reference.hormone_index.tolerance,
    ));
    let cognitive_deficit = bio_curve(deviation(
        reference.cognitive.ideal - metrics.cognitive_score,
        0.0,
        reference.cognitive.tolerance,
    ));
    let strength_deficit = bio_curve(deviation(
        reference.muscle_strength.ideal - metrics.muscle_strength,
        0.0,
        reference.muscle_strength.tolerance,
    ));

    let organs = OrganAges {
        heart: shift(metrics.age, hr),
        brain: shift(metrics.age, cognitive_deficit),
        kidney: shift(metrics.age, creatinine + glucose * 0.3),
        liver: shift(metrics.age, alt + glucose * 0.2),
        pancreas: shift(metrics.age, glucose),
        muscle: shift(metrics.age, strength_deficit),
        hormonal: shift(metrics.age, hormone),
    };

    let report = report(metrics.age, organs);
    debug!(
        variant = "clinical",
        overall = report.overall,
        status = report.status.label(),
        "assessment scored"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{ideal_clinical, ideal_lifestyle};

    #[test]
    fn test_ideal_lifestyle_matches_chronological_age() {
        let report = score_lifestyle(&ideal_lifestyle(30.0), &LifestyleReference::default());
        for age in report.organs.as_array() {
            assert_eq!(age, 30.0);
        }
        assert_eq!(report.overall, 30.0);
        assert_eq!(report.status, AgingStatus::Optimal);
    }

    #[test]
    fn test_ideal_clinical_matches_chronological_age() {
        let report = score_clinical(&ideal_clinical(40.0), &ClinicalReference::default());
        for age in report.organs.as_array() {
            assert_eq!(age, 40.0);
        }
        assert_eq!(report.overall, 40.0);
        assert_eq!(report.status, AgingStatus::Optimal);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let mut metrics = ideal_lifestyle(52.0);
        metrics.glucose = 140.0;
        metrics.stress = 7.0;
        metrics.sleep_hours = 5.5;
        let reference = LifestyleReference::default();
        assert_eq!(
            score_lifestyle(&metrics, &reference),
            score_lifestyle(&metrics, &reference)
        );
    }

    #[test]
    fn test_elevated_heart_rate_exact_values() {
        // One tolerance unit over the ideal shapes to exactly 1.0, which
        // saturates the [-1, 1] clamp and shifts the heart by MAX_SHIFT.
        let mut metrics = ideal_lifestyle(30.0);
        metrics.heart_rate = 95.0;
        let report = score_lifestyle(&metrics, &LifestyleReference::default());
        assert_eq!(report.organs.heart, 55.0);
        assert_eq!(report.organs.brain, 30.0);
        assert_eq!(report.overall, 33.6); // (55 + 6 * 30) / 7
        assert_eq!(report.status, AgingStatus::Mild);
    }

    #[test]
    fn test_degradation_outpaces_equal_improvement() {
        // Glucose 1.1 tolerance units either side of ideal; the liver weight
        // (0.7) keeps both scores inside the clamp band.
        let reference = LifestyleReference::default();
        let mut worse = ideal_lifestyle(50.0);
        worse.glucose = reference.glucose.ideal + 66.0;
        let mut better = ideal_lifestyle(50.0);
        better.glucose = reference.glucose.ideal - 66.0;

        let aged = score_lifestyle(&worse, &reference).organs.liver - 50.0;
        let rejuvenated = 50.0 - score_lifestyle(&better, &reference).organs.liver;
        assert!(aged > 0.0 && rejuvenated > 0.0);
        assert!(aged > rejuvenated);
    }

    #[test]
    fn test_overall_is_mean_of_organ_ages() {
        let mut metrics = ideal_lifestyle(44.0);
        metrics.glucose = 160.0;
        metrics.screen_time = 9.0;
        metrics.stress = 6.0;
        let report = score_lifestyle(&metrics, &LifestyleReference::default());
        assert_eq!(report.overall, round1(report.organs.mean()));
    }

    #[test]
    fn test_shift_saturates_at_max_shift() {
        let metrics = LifestyleMetrics {
            age: 30.0,
            heart_rate: 200.0,
            glucose: 400.0,
            stress: 10.0,
            screen_time: 24.0,
            muscle_strength: 1.0,
            sleep_hours: 0.0,
        };
        let report = score_lifestyle(&metrics, &LifestyleReference::default());
        for age in report.organs.as_array() {
            assert!(age <= 30.0 + MAX_SHIFT);
            assert!(age >= 30.0 - MAX_SHIFT);
        }
        assert_eq!(report.status, AgingStatus::Severe);
    }

    #[test]
    fn test_status_thresholds_inclusive() {
        assert_eq!(classify(-4.0), AgingStatus::Younger);
        assert_eq!(classify(-3.9), AgingStatus::Optimal);
        assert_eq!(classify(0.0), AgingStatus::Optimal);
        assert_eq!(classify(3.0), AgingStatus::Optimal);
        assert_eq!(classify(3.01), AgingStatus::Mild);
        assert_eq!(classify(8.0), AgingStatus::Mild);
        assert_eq!(classify(8.1), AgingStatus::Moderate);
        assert_eq!(classify(15.0), AgingStatus::Moderate);
        assert_eq!(classify(15.1), AgingStatus::Severe);
    }

    #[test]
    fn test_clinical_kidney_tracks_creatinine() {
        // Creatinine one tolerance unit high saturates the kidney score.
        let mut metrics = ideal_clinical(45.0);
        metrics.creatinine = 1.7;
        let report = score_clinical(&metrics, &ClinicalReference::default());
        assert_eq!(report.organs.kidney, 70.0);
        assert_eq!(report.organs.heart, 45.0);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(AgingStatus::Younger.label(), "Biologically Younger");
        assert_eq!(AgingStatus::Severe.label(), "Severe Accelerated Aging");
    }
}
