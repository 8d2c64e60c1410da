//! Health metrics records, per-field bounds, and form validation.
//!
//! A record is built transiently from a submitted form, validated against
//! the static bounds below, scored once, and discarded.

use serde::{Deserialize, Serialize};

/// Static bounds and messages for one form field.
///
/// `step` is the HTML step attribute value, so the browser and the server
/// agree on the granularity offered to the user.
#[derive(Debug, Clone, Copy)]
pub struct FieldBounds {
    pub field: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: &'static str,
    pub required_msg: &'static str,
    pub min_msg: &'static str,
    pub max_msg: &'static str,
}

/// A single failed field with its inline message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

// ── Clinical panel bounds ────────────────────────────────────────────────────

pub const CLINICAL_BOUNDS: [FieldBounds; 8] = [
    FieldBounds {
        field: "age",
        label: "Age",
        min: 18.0,
        max: 120.0,
        step: "1",
        required_msg: "Age is required.",
        min_msg: "Age must be at least 18 years.",
        max_msg: "Age cannot exceed 120 years.",
    },
    FieldBounds {
        field: "heart_rate",
        label: "Heart Rate (bpm)",
        min: 30.0,
        max: 220.0,
        step: "1",
        required_msg: "Heart rate is required.",
        min_msg: "Minimum 30 bpm.",
        max_msg: "Maximum 220 bpm.",
    },
    FieldBounds {
        field: "creatinine",
        label: "Creatinine (mg/dL)",
        min: 0.1,
        max: 15.0,
        step: "0.01",
        required_msg: "Creatinine level is required.",
        min_msg: "Minimum 0.1 mg/dL.",
        max_msg: "Maximum 15 mg/dL.",
    },
    FieldBounds {
        field: "alt_liver",
        label: "ALT Liver (U/L)",
        min: 5.0,
        max: 1000.0,
        step: "1",
        required_msg: "ALT level is required.",
        min_msg: "Minimum 5 U/L.",
        max_msg: "Maximum 1000 U/L.",
    },
    FieldBounds {
        field: "cognitive_score",
        label: "Cognitive Score (0–100)",
        min: 0.0,
        max: 100.0,
        step: "1",
        required_msg: "Cognitive score is required.",
        min_msg: "Cannot be negative.",
        max_msg: "Cannot exceed 100.",
    },
    FieldBounds {
        field: "glucose",
        label: "Glucose (mg/dL)",
        min: 20.0,
        max: 600.0,
        step: "1",
        required_msg: "Glucose level is required.",
        min_msg: "Minimum 20 mg/dL.",
        max_msg: "Maximum 600 mg/dL.",
    },
    FieldBounds {
        field: "muscle_strength",
        label: "Muscle Strength (kg)",
        min: 1.0,
        max: 500.0,
        step: "1",
        required_msg: "Muscle strength is required.",
        min_msg: "Minimum 1 kg.",
        max_msg: "Maximum 500 kg.",
    },
    FieldBounds {
        field: "hormone_index",
        label: "Testosterone / Estrogen Index",
        min: 0.0,
        max: 1000.0,
        step: "0.01",
        required_msg: "Hormone index is required.",
        min_msg: "Cannot be negative.",
        max_msg: "Value too high.",
    },
];

// ── Lifestyle panel bounds ───────────────────────────────────────────────────

pub const LIFESTYLE_BOUNDS: [FieldBounds; 7] = [
    FieldBounds {
        field: "age",
        label: "Age",
        min: 18.0,
        max: 120.0,
        step: "1",
        required_msg: "Age is required.",
        min_msg: "Minimum age is 18.",
        max_msg: "Maximum age is 120.",
    },
    FieldBounds {
        field: "heart_rate",
        label: "Heart Rate (bpm)",
        min: 40.0,
        max: 200.0,
        step: "1",
        required_msg: "Heart rate is required.",
        min_msg: "Too low. Minimum 40 bpm.",
        max_msg: "Too high. Maximum 200 bpm.",
    },
    FieldBounds {
        field: "glucose",
        label: "Glucose (mg/dL)",
        min: 50.0,
        max: 400.0,
        step: "1",
        required_msg: "Glucose level is required.",
        min_msg: "Too low. Minimum 50 mg/dL.",
        max_msg: "Too high. Maximum 400 mg/dL.",
    },
    FieldBounds {
        field: "stress",
        label: "Stress Level (0–10)",
        min: 0.0,
        max: 10.0,
        step: "1",
        required_msg: "Stress level is required.",
        min_msg: "Cannot be negative.",
        max_msg: "Maximum stress level is 10.",
    },
    FieldBounds {
        field: "screen_time",
        label: "Screen Time (hrs/day)",
        min: 0.0,
        max: 24.0,
        step: "1",
        required_msg: "Screen time is required.",
        min_msg: "Cannot be negative.",
        max_msg: "Cannot exceed 24 hours.",
    },
    FieldBounds {
        field: "muscle_strength",
        label: "Muscle Strength (kg)",
        min: 1.0,
        max: 300.0,
        step: "1",
        required_msg: "Muscle strength is required.",
        min_msg: "Must be at least 1 kg.",
        max_msg: "Maximum allowed is 300 kg.",
    },
    FieldBounds {
        field: "sleep_hours",
        label: "Sleep Hours",
        min: 0.0,
        max: 24.0,
        step: "1",
        required_msg: "Sleep hours are required.",
        min_msg: "Cannot be negative.",
        max_msg: "Cannot exceed 24 hours.",
    },
];

/// Look up the bounds entry for a field name within a panel's table.
pub fn bounds_for<'a>(table: &'a [FieldBounds], field: &str) -> Option<&'a FieldBounds> {
    table.iter().find(|b| b.field == field)
}

// ── Validated records ────────────────────────────────────────────────────────

/// Validated clinical panel record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalMetrics {
    pub age: f64,
    pub heart_rate: f64,
    pub creatinine: f64,
    pub alt_liver: f64,
    pub cognitive_score: f64,
    pub glucose: f64,
    pub muscle_strength: f64,
    pub hormone_index: f64,
}

/// Validated lifestyle panel record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifestyleMetrics {
    pub age: f64,
    pub heart_rate: f64,
    pub glucose: f64,
    pub stress: f64,
    pub screen_time: f64,
    pub muscle_strength: f64,
    pub sleep_hours: f64,
}

// ── Raw form drafts ──────────────────────────────────────────────────────────

/// Clinical panel form as posted; every field optional until validated.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ClinicalForm {
    pub age: Option<f64>,
    pub heart_rate: Option<f64>,
    pub creatinine: Option<f64>,
    pub alt_liver: Option<f64>,
    pub cognitive_score: Option<f64>,
    pub glucose: Option<f64>,
    pub muscle_strength: Option<f64>,
    pub hormone_index: Option<f64>,
}

/// Lifestyle panel form as posted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LifestyleForm {
    pub age: Option<f64>,
    pub heart_rate: Option<f64>,
    pub glucose: Option<f64>,
    pub stress: Option<f64>,
    pub screen_time: Option<f64>,
    pub muscle_strength: Option<f64>,
    pub sleep_hours: Option<f64>,
}

/// Check one field against its bounds, collecting the failure if any.
/// Returns a placeholder on failure; the caller only builds a record when
/// the error list stays empty.
fn check(value: Option<f64>, bounds: &FieldBounds, errors: &mut Vec<FieldError>) -> f64 {
    match value {
        None => {
            errors.push(FieldError { field: bounds.field, message: bounds.required_msg });
            f64::NAN
        }
        // Non-finite numbers can never satisfy the bounds
        Some(v) if !v.is_finite() => {
            errors.push(FieldError { field: bounds.field, message: bounds.required_msg });
            f64::NAN
        }
        Some(v) if v < bounds.min => {
            errors.push(FieldError { field: bounds.field, message: bounds.min_msg });
            v
        }
        Some(v) if v > bounds.max => {
            errors.push(FieldError { field: bounds.field, message: bounds.max_msg });
            v
        }
        Some(v) => v,
    }
}

impl ClinicalForm {
    /// Validate all fields against [`CLINICAL_BOUNDS`].
    pub fn validate(&self) -> Result<ClinicalMetrics, Vec<FieldError>> {
        let mut errors = Vec::new();
        let [age, heart_rate, creatinine, alt_liver, cognitive_score, glucose, muscle_strength, hormone_index] =
            CLINICAL_BOUNDS;
        let record = ClinicalMetrics {
            age: check(self.age, &age, &mut errors),
            heart_rate: check(self.heart_rate, &heart_rate, &mut errors),
            creatinine: check(self.creatinine, &creatinine, &mut errors),
            alt_liver: check(self.alt_liver, &alt_liver, &mut errors),
            cognitive_score: check(self.cognitive_score, &cognitive_score, &mut errors),
            glucose: check(self.glucose, &glucose, &mut errors),
            muscle_strength: check(self.muscle_strength, &muscle_strength, &mut errors),
            hormone_index: check(self.hormone_index, &hormone_index, &mut errors),
        };
        if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        }
    }

    /// The submitted value for a named field, for form re-rendering.
    pub fn value(&self, field: &str) -> Option<f64> {
        match field {
            "age" => self.age,
            "heart_rate" => self.heart_rate,
            "creatinine" => self.creatinine,
            "alt_liver" => self.alt_liver,
            "cognitive_score" => self.cognitive_score,
            "glucose" => self.glucose,
            "muscle_strength" => self.muscle_strength,
            "hormone_index" => self.hormone_index,
            _ => None,
        }
    }
}

impl LifestyleForm {
    /// Validate all fields against [`LIFESTYLE_BOUNDS`].
    pub fn validate(&self) -> Result<LifestyleMetrics, Vec<FieldError>> {
        let mut errors = Vec::new();
        let [age, heart_rate, glucose, stress, screen_time, muscle_strength, sleep_hours] =
            LIFESTYLE_BOUNDS;
        let record = LifestyleMetrics {
            age: check(self.age, &age, &mut errors),
            heart_rate: check(self.heart_rate, &heart_rate, &mut errors),
            glucose: check(self.glucose, &glucose, &mut errors),
            stress: check(self.stress, &stress, &mut errors),
            screen_time: check(self.screen_time, &screen_time, &mut errors),
            muscle_strength: check(self.muscle_strength, &muscle_strength, &mut errors),
            sleep_hours: check(self.sleep_hours, &sleep_hours, &mut errors),
        };
        if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        }
    }

    pub fn value(&self, field: &str) -> Option<f64> {
        match field {
            "age" => self.age,
            "heart_rate" => self.heart_rate,
            "glucose" => self.glucose,
            "stress" => self.stress,
            "screen_time" => self.screen_time,
            "muscle_strength" => self.muscle_strength,
            "sleep_hours" => self.sleep_hours,
            _ => None,
        }
    }
}
