#[cfg(test)]
mod tests {
    use super::super::compute::{compute_bmi, compute_bmi_with, BmiResult};
    use super::super::error::{Field, InvalidReason, INVALID_INPUT_MESSAGE};
    use super::super::formatter::{display_result, ResultView};
    use super::super::input::{HeightInput, WeightInput};
    use super::super::validator::ValidationPolicy;

    #[test]
    fn test_metric_direct() {
        let result = compute_bmi(&HeightInput::metric("1.8"), &WeightInput::kg("80"));
        let bmi = result.expect("1.8 m / 80 kg should compute");
        assert_eq!(bmi.formatted(), "24.69");
        assert_eq!(bmi.value(), 24.69);
    }

    #[test]
    fn test_imperial_round_trip() {
        let result = compute_bmi(&HeightInput::imperial("5", "10"), &WeightInput::lbs("154"));
        assert_eq!(display_result(&result), "Your BMI is: 22.10");
    }

    #[test]
    fn test_metric_matches_formula() {
        let cases = [
            ("1.8", "80"),
            ("1.62", "55.5"),
            ("2", "100"),
            ("0.5", "3"),
            ("1.75", "68.2"),
        ];

        for (meters, kg) in cases {
            let m: f64 = meters.parse().unwrap();
            let w: f64 = kg.parse().unwrap();
            let expected = format!("{:.2}", w / (m * m));

            let bmi = compute_bmi(&HeightInput::metric(meters), &WeightInput::kg(kg)).unwrap();
            assert_eq!(bmi.formatted(), expected, "{} m, {} kg", meters, kg);
        }
    }

    #[test]
    fn test_zero_height_rejected() {
        let result = compute_bmi(&HeightInput::metric("0"), &WeightInput::kg("70"));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
        assert_eq!(err.field(), Field::Height);
        assert_eq!(err.reason(), InvalidReason::Zero);
    }

    #[test]
    fn test_zero_weight_rejected() {
        let err = compute_bmi(&HeightInput::metric("1.8"), &WeightInput::lbs("0.0")).unwrap_err();
        assert_eq!(err.field(), Field::Weight);
        assert_eq!(err.reason(), InvalidReason::Zero);
    }

    #[test]
    fn test_zero_imperial_height_rejected() {
        let err = compute_bmi(&HeightInput::imperial("0", "0"), &WeightInput::kg("70")).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::Zero);
    }

    #[test]
    fn test_unparseable_rejected() {
        let result = compute_bmi(&HeightInput::metric("abc"), &WeightInput::kg("70"));
        assert_eq!(display_result(&result), INVALID_INPUT_MESSAGE);
        assert_eq!(result.unwrap_err().reason(), InvalidReason::Unparseable);

        let result = compute_bmi(&HeightInput::imperial("5", ""), &WeightInput::kg("70"));
        assert_eq!(result.unwrap_err().reason(), InvalidReason::Unparseable);

        let result = compute_bmi(&HeightInput::metric("1.8"), &WeightInput::kg(""));
        let err = result.unwrap_err();
        assert_eq!(err.field(), Field::Weight);
        assert_eq!(err.reason(), InvalidReason::Unparseable);
    }

    #[test]
    fn test_lenient_text_is_accepted() {
        // Trailing units typed into the box are ignored, as on the original form
        let bmi = compute_bmi(&HeightInput::metric("1.8m"), &WeightInput::kg(" 80 kg")).unwrap();
        assert_eq!(bmi.formatted(), "24.69");
    }

    #[test]
    fn test_negative_values_depend_on_policy() {
        let height = HeightInput::metric("-1.8");
        let weight = WeightInput::kg("80");

        let err = compute_bmi_with(&height, &weight, ValidationPolicy::Strict).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::Negative);

        // Squared height hides the sign
        let bmi = compute_bmi_with(&height, &weight, ValidationPolicy::Legacy).unwrap();
        assert_eq!(bmi.formatted(), "24.69");

        let bmi = compute_bmi_with(
            &HeightInput::metric("1.8"),
            &WeightInput::kg("-80"),
            ValidationPolicy::Legacy,
        )
        .unwrap();
        assert_eq!(bmi.formatted(), "-24.69");
    }

    #[test]
    fn test_infinite_weight_depends_on_policy() {
        let height = HeightInput::metric("1.8");
        let weight = WeightInput::kg("Infinity");

        let err = compute_bmi_with(&height, &weight, ValidationPolicy::Strict).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::NonFinite);

        let bmi = compute_bmi_with(&height, &weight, ValidationPolicy::Legacy).unwrap();
        assert_eq!(bmi.formatted(), "Infinity");
    }

    #[test]
    fn test_nan_height_rejected_by_both_policies() {
        // Each part parses, but Infinity ft + -Infinity in is NaN
        let height = HeightInput::imperial("Infinity", "-Infinity");
        let weight = WeightInput::kg("70");

        for policy in [ValidationPolicy::Strict, ValidationPolicy::Legacy] {
            let result = compute_bmi_with(&height, &weight, policy);
            assert_eq!(display_result(&result), INVALID_INPUT_MESSAGE);
            let err = result.unwrap_err();
            assert_eq!(err.field(), Field::Height);
            assert_eq!(err.reason(), InvalidReason::NonFinite);
        }
    }

    #[test]
    fn test_overflowing_height_blames_height() {
        // 1e200 squared overflows, so the quotient collapses to zero
        let err = compute_bmi_with(
            &HeightInput::metric("1e200"),
            &WeightInput::kg("70"),
            ValidationPolicy::Strict,
        )
        .unwrap_err();
        assert_eq!(err.field(), Field::Height);
        assert_eq!(err.reason(), InvalidReason::OutOfRange);

        let failed: BmiResult = Err(err);
        let json = serde_json::to_value(ResultView::from(&failed)).unwrap();
        assert_eq!(json["field"], "height");
    }

    #[test]
    fn test_idempotent() {
        let height = HeightInput::imperial("6", "1");
        let weight = WeightInput::lbs("190");

        let first = compute_bmi(&height, &weight);
        let second = compute_bmi(&height, &weight);
        assert_eq!(first, second);
        assert_eq!(display_result(&first), display_result(&second));

        let bad = HeightInput::metric("");
        assert_eq!(compute_bmi(&bad, &weight), compute_bmi(&bad, &weight));
    }

    #[test]
    fn test_result_view_json() {
        let ok = compute_bmi(&HeightInput::metric("1.8"), &WeightInput::kg("80"));
        let json = serde_json::to_value(ResultView::from(&ok)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["formatted"], "24.69");
        assert_eq!(json["value"], 24.69);
        assert_eq!(json["display"], "Your BMI is: 24.69");

        let err = compute_bmi(&HeightInput::metric("0"), &WeightInput::kg("70"));
        let json = serde_json::to_value(ResultView::from(&err)).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["message"], INVALID_INPUT_MESSAGE);
        assert_eq!(json["field"], "height");
        assert_eq!(json["reason"], "zero");
    }
}
