//! biorevyx-test-utils — Sample records and form bodies for tests.

use biorevyx_bioage::metrics::{ClinicalForm, ClinicalMetrics, LifestyleForm, LifestyleMetrics};
use biorevyx_bioage::reference::{ClinicalReference, LifestyleReference};

/// A lifestyle record with every metric at its reference ideal.
pub fn ideal_lifestyle(age: f64) -> LifestyleMetrics {
    let r = LifestyleReference::default();
    LifestyleMetrics {
        age,
        heart_rate: r.heart_rate.ideal,
        glucose: r.glucose.ideal,
        stress: r.stress.ideal,
        screen_time: r.screen_time.ideal,
        muscle_strength: r.muscle_strength.ideal,
        sleep_hours: r.sleep.ideal,
    }
}

/// A clinical record with every metric at its reference ideal.
pub fn ideal_clinical(age: f64) -> ClinicalMetrics {
    let r = ClinicalReference::default();
    ClinicalMetrics {
        age,
        heart_rate: r.heart_rate.ideal,
        creatinine: r.creatinine.ideal,
        alt_liver: r.alt_liver.ideal,
        cognitive_score: r.cognitive.ideal,
        glucose: r.glucose.ideal,
        muscle_strength: r.muscle_strength.ideal,
        hormone_index: r.hormone_index.ideal,
    }
}

/// The all-ideal lifestyle record as a raw form draft.
pub fn ideal_lifestyle_form(age: f64) -> LifestyleForm {
    let m = ideal_lifestyle(age);
    LifestyleForm {
        age: Some(m.age),
        heart_rate: Some(m.heart_rate),
        glucose: Some(m.glucose),
        stress: Some(m.stress),
        screen_time: Some(m.screen_time),
        muscle_strength: Some(m.muscle_strength),
        sleep_hours: Some(m.sleep_hours),
    }
}

/// The all-ideal clinical record as a raw form draft.
pub fn ideal_clinical_form(age: f64) -> ClinicalForm {
    let m = ideal_clinical(age);
    ClinicalForm {
        age: Some(m.age),
        heart_rate: Some(m.heart_rate),
        creatinine: Some(m.creatinine),
        alt_liver: Some(m.alt_liver),
        cognitive_score: Some(m.cognitive_score),
        glucose: Some(m.glucose),
        muscle_strength: Some(m.muscle_strength),
        hormone_index: Some(m.hormone_index),
    }
}

fn push_param(body: &mut String, name: &str, value: Option<f64>) {
    if let Some(v) = value {
        if !body.is_empty() {
            body.push('&');
        }
        body.push_str(name);
        body.push('=');
        body.push_str(&v.to_string());
    }
}

/// Urlencoded POST body for a lifestyle form draft (absent fields omitted).
pub fn lifestyle_body(form: &LifestyleForm) -> String {
    let mut body = String::new();
    push_param(&mut body, "age", form.age);
    push_param(&mut body, "heart_rate", form.heart_rate);
    push_param(&mut body, "glucose", form.glucose);
    push_param(&mut body, "stress", form.stress);
    push_param(&mut body, "screen_time", form.screen_time);
    push_param(&mut body, "muscle_strength", form.muscle_strength);
    push_param(&mut body, "sleep_hours", form.sleep_hours);
    body
}

/// Urlencoded POST body for a clinical form draft.
pub fn clinical_body(form: &ClinicalForm) -> String {
    let mut body = String::new();
    push_param(&mut body, "age", form.age);
    push_param(&mut body, "heart_rate", form.heart_rate);
    push_param(&mut body, "creatinine", form.creatinine);
    push_param(&mut body, "alt_liver", form.alt_liver);
    push_param(&mut body, "cognitive_score", form.cognitive_score);
    push_param(&mut body, "glucose", form.glucose);
    push_param(&mut body, "muscle_strength", form.muscle_strength);
    push_param(&mut body, "hormone_index", form.hormone_index);
    body
}
