use proptest::prelude::*;
use slopewatch::data::input::{parse_reading, SensorForm};
use slopewatch::data::sample::SensorKind;
use slopewatch::error::INVALID_INPUT_NOTICE;
use slopewatch::panels::SensorsPanel;

#[test]
fn valid_form_builds_sample() {
    let form = SensorForm::with_values("45", "10", "2", "0");
    let s = form.read_sample().unwrap();
    assert_eq!(s.readings.as_array(), [45.0, 10.0, 2.0, 0.0]);
}

#[test]
fn decimals_and_whitespace_are_accepted() {
    let form = SensorForm::with_values(" 12.5", "-3", "1e2 ", "0.0");
    let s = form.read_sample().unwrap();
    assert_eq!(s.readings.as_array(), [12.5, -3.0, 100.0, 0.0]);
}

#[test]
fn first_bad_field_is_reported() {
    let form = SensorForm::with_values("45", "", "x", "0");
    let err = form.read_sample().unwrap_err();
    assert_eq!(err.field, SensorKind::Rainfall);
    assert_eq!(err.text, "");
    assert_eq!(err.notice(), INVALID_INPUT_NOTICE);
}

#[test]
fn non_finite_values_are_rejected() {
    for text in ["NaN", "inf", "-infinity"] {
        assert!(parse_reading(SensorKind::Tilt, text).is_err(), "{text}");
    }
}

#[test]
fn rejected_submit_notifies_and_leaves_store_empty() {
    let mut panel = SensorsPanel::new();
    *panel.form_mut() = SensorForm::with_values("abc", "10", "2", "0");

    let err = panel.submit().unwrap_err();
    assert_eq!(err.field, SensorKind::SoilMoisture);
    assert_eq!(panel.store().len(), 0);
    assert_eq!(panel.store().sink().redraw_count(), 0);
    assert_eq!(panel.notice().map(|n| n.notice()), Some(INVALID_INPUT_NOTICE));

    panel.dismiss_notice();
    assert!(panel.notice().is_none());
}

#[test]
fn accepted_submit_appends_once() {
    let mut panel = SensorsPanel::new();
    *panel.form_mut() = SensorForm::with_values("45", "10", "2", "0");
    panel.submit().unwrap();
    assert_eq!(panel.store().len(), 1);
    assert!(panel.notice().is_none());
    // The form keeps its text, so resubmitting records another sample.
    panel.submit().unwrap();
    assert_eq!(panel.store().len(), 2);
}

proptest! {
    #[test]
    fn any_alphabetic_field_blocks_append(
        bad in "[a-zA-Z]{1,8}",
        slot in 0usize..4,
    ) {
        let mut panel = SensorsPanel::new();
        for kind in SensorKind::ALL {
            panel.form_mut().set(kind, "1");
        }
        panel.form_mut().set(SensorKind::ALL[slot], bad);
        prop_assert!(panel.submit().is_err());
        prop_assert_eq!(panel.store().len(), 0);
    }

    #[test]
    fn any_finite_quadruple_is_accepted(vals in prop::array::uniform4(-1e6f64..1e6)) {
        let texts = vals.map(|v| v.to_string());
        let form = SensorForm::with_values(
            texts[0].as_str(), texts[1].as_str(), texts[2].as_str(), texts[3].as_str(),
        );
        let s = form.read_sample().unwrap();
        prop_assert_eq!(s.readings.as_array(), vals);
    }
}
