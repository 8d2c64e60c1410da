//! Ideal reference values and tolerances per metric, per assessment variant.

use serde::{Deserialize, Serialize};

/// One metric's reference: the ideal value and the tolerance that scales a
/// raw difference into one deviation unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub ideal: f64,
    pub tolerance: f64,
}

impl ReferencePoint {
    pub const fn new(ideal: f64, tolerance: f64) -> Self {
        Self { ideal, tolerance }
    }
}

/// Reference table for the lifestyle variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleReference {
    pub heart_rate: ReferencePoint,
    pub glucose: ReferencePoint,
    pub stress: ReferencePoint,
    pub screen_time: ReferencePoint,
    pub muscle_strength: ReferencePoint,
    pub sleep: ReferencePoint,
}

impl Default for LifestyleReference {
    fn default() -> Self {
        Self {
            heart_rate:      ReferencePoint::new(65.0, 30.0),
            glucose:         ReferencePoint::new(85.0, 60.0),
            stress:          ReferencePoint::new(2.0, 8.0),
            screen_time:     ReferencePoint::new(2.0, 10.0),
            muscle_strength: ReferencePoint::new(45.0, 40.0),
            sleep:           ReferencePoint::new(8.0, 4.0),
        }
    }
}

impl LifestyleReference {
    /// Every tolerance must be strictly positive for deviations to be defined.
    pub fn validate(&self) -> bool {
        [
            self.heart_rate,
            self.glucose,
            self.stress,
            self.screen_time,
            self.muscle_strength,
            self.sleep,
        ]
        .iter()
        .all(|p| p.tolerance > 0.0)
    }
}

/// Reference table for the clinical panel variant.
///
/// Fields shared with the lifestyle variant (heart rate, glucose, muscle
/// strength) reuse its constants; the rest are conventional clinical
/// midpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalReference {
    pub heart_rate: ReferencePoint,
    pub creatinine: ReferencePoint,
    pub alt_liver: ReferencePoint,
    pub cognitive: ReferencePoint,
    pub glucose: ReferencePoint,
    pub muscle_strength: ReferencePoint,
    pub hormone_index: ReferencePoint,
}

impl Default for ClinicalReference {
    fn default() -> Self {
        Self {
            heart_rate:      ReferencePoint::new(65.0, 30.0),
            creatinine:      ReferencePoint::new(0.9, 0.8),
            alt_liver:       ReferencePoint::new(22.0, 30.0),
            cognitive:       ReferencePoint::new(85.0, 25.0),
            glucose:         ReferencePoint::new(85.0, 60.0),
            muscle_strength: ReferencePoint::new(45.0, 40.0),
            hormone_index:   ReferencePoint::new(50.0, 40.0),
        }
    }
}

impl ClinicalReference {
    pub fn validate(&self) -> bool {
        [
            self.heart_rate,
            self.creatinine,
            self.alt_liver,
            self.cognitive,
            self.glucose,
            self.muscle_strength,
            self.hormone_index,
        ]
        .iter()
        .all(|p| p.tolerance > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerances_positive() {
        assert!(LifestyleReference::default().validate());
        assert!(ClinicalReference::default().validate());
    }

    #[test]
    fn test_validate_rejects_zero_tolerance() {
        let mut reference = LifestyleReference::default();
        reference.sleep.tolerance = 0.0;
        assert!(!reference.validate());
    }

    #[test]
    fn test_shared_constants_agree_across_variants() {
        let lifestyle = LifestyleReference::default();
        let clinical = ClinicalReference::default();
        assert_eq!(lifestyle.heart_rate.ideal, clinical.heart_rate.ideal);
        assert_eq!(lifestyle.glucose.ideal, clinical.glucose.ideal);
        assert_eq!(lifestyle.muscle_strength.ideal, clinical.muscle_strength.ideal);
    }
}
