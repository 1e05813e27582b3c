use celestial_cube::{build, HeaderError, HeaderValue, KeywordProvider, ObservationalParameters};

fn hi_cube() -> ObservationalParameters {
    ObservationalParameters::new(
        [83.82, -5.39],
        [120, 90],
        0.0125,
        ["RA", "DEC"],
        vec![1.4e9, 1.4001e9, 1.4002e9, 1.4003e9, 1.4004e9],
    )
}

fn galactic_cube() -> ObservationalParameters {
    ObservationalParameters::new(
        [30.0, 0.5],
        [200, 200],
        0.05,
        ["GLON", "GLAT"],
        vec![1.4205e9, 1.4204e9, 1.4203e9],
    )
}

// --- Projection dispatch ---

#[test]
fn both_projections_build() {
    for code in ["TAN", "SFL"] {
        assert!(build(&hi_cube().with_projection(code)).is_ok());
    }
}

#[test]
fn unknown_projection_is_reported_with_its_code() {
    for code in ["GLS", "CAR", "sfl", "AIT"] {
        let err = build(&hi_cube().with_projection(code)).unwrap_err();
        assert!(matches!(err, HeaderError::InvalidProjection { .. }));
        assert!(err.to_string().contains(code));
    }
}

#[test]
fn tan_increments_have_opposite_signs() {
    for scale in [1e-4, 0.0125, 1.0, 7.5] {
        let mut p = hi_cube().with_projection("TAN");
        p.pixel_scale = scale;
        let header = build(&p).unwrap();
        assert_eq!(header.get_float("CDELT1"), Some(-scale));
        assert_eq!(header.get_float("CDELT2"), Some(scale));
    }
}

#[test]
fn sfl_reference_latitude_is_always_zero() {
    for y in [-60.0, -5.39, 0.0, 12.5, 75.0] {
        let mut p = hi_cube();
        p.center[1] = y;
        let header = build(&p).unwrap();
        assert_eq!(header.get("CRVAL2"), Some(&HeaderValue::Real(0.0)));
    }
}

#[test]
fn sfl_crpix2_places_center_latitude() {
    let p = hi_cube();
    let header = build(&p).unwrap();
    let crpix2 = header.get_float("CRPIX2").unwrap();
    let cdelt2 = header.get_float("CDELT2").unwrap();
    let center_pix = p.size[1] as f64 / 2.0 + 1.0;
    assert!((cdelt2 * (center_pix - crpix2) - p.center[1]).abs() < 1e-9);
}

#[test]
fn coordinate_types_are_padded() {
    let eq = build(&hi_cube()).unwrap();
    assert_eq!(eq.get_string("CTYPE1"), Some("RA---SFL".to_string()));
    assert_eq!(eq.get_string("CTYPE2"), Some("DEC--SFL".to_string()));

    let gal = build(&galactic_cube().with_projection("TAN")).unwrap();
    assert_eq!(gal.get_string("CTYPE1"), Some("GLON-TAN".to_string()));
    assert_eq!(gal.get_string("CTYPE2"), Some("GLAT-TAN".to_string()));
}

// --- Axis sizes ---

#[test]
fn axis_lengths_follow_inputs() {
    let p = galactic_cube();
    let header = build(&p).unwrap();
    assert_eq!(header.get_int("NAXIS"), Some(4));
    assert_eq!(header.get_int("NAXIS1"), Some(200));
    assert_eq!(header.get_int("NAXIS2"), Some(200));
    assert_eq!(header.get_int("NAXIS3"), Some(3));
    assert_eq!(header.get_int("NAXIS4"), Some(1));
}

// --- Velocity frame ---

#[test]
fn velref_lsrk_radio() {
    let p = hi_cube()
        .with_spectral_system("LSRK")
        .with_velocity_definition("RADI");
    assert_eq!(build(&p).unwrap().get_int("VELREF"), Some(257));
}

#[test]
fn velref_heliocentric_optical() {
    let p = hi_cube()
        .with_spectral_system("HELIOCEN")
        .with_velocity_definition("OPTI");
    assert_eq!(build(&p).unwrap().get_int("VELREF"), Some(2));
}

#[test]
fn velref_topocentric_radio() {
    let p = hi_cube()
        .with_spectral_system("TOPOCENT")
        .with_velocity_definition("RADI");
    assert_eq!(build(&p).unwrap().get_int("VELREF"), Some(259));
}

#[test]
fn velref_unknown_frame() {
    let p = hi_cube().with_spectral_system("GALACTOC");
    assert_eq!(build(&p).unwrap().get_int("VELREF"), Some(0));
}

#[test]
fn velref_relativistic_adds_nothing() {
    let p = hi_cube()
        .with_spectral_system("LSRK")
        .with_velocity_definition("RELA");
    assert_eq!(build(&p).unwrap().get_int("VELREF"), Some(1));
}

// --- Alternate axis ---

#[test]
fn alternate_axis_locates_rest_frequency() {
    let mut p = hi_cube().with_rest_frequency(1.4004e9);
    p.frequency_axis = vec![1.4e9, 1.4001e9];
    let header = build(&p).unwrap();
    assert_eq!(header.get_float("ALTRVAL"), Some(0.0));
    assert!((header.get_float("ALTRPIX").unwrap() - 5.0).abs() < 1e-6);
}

#[test]
fn alternate_axis_fractional_channel() {
    let mut p = hi_cube().with_rest_frequency(1.40004e9);
    p.frequency_axis = vec![1.4e9, 1.4001e9];
    let header = build(&p).unwrap();
    assert!((header.get_float("ALTRPIX").unwrap() - 1.4).abs() < 1e-9);
}

#[test]
fn alternate_axis_absent_without_rest_frequency() {
    let header = build(&hi_cube().with_rest_frequency(0.0)).unwrap();
    assert!(!header.contains_key("ALTRVAL"));
    assert!(!header.contains_key("ALTRPIX"));
    assert_eq!(header.get_float("RESTFRQ"), Some(0.0));
}

#[test]
fn alternate_axis_absent_for_flat_frequency_axis() {
    let mut p = hi_cube().with_rest_frequency(1.42e9);
    p.frequency_axis = vec![1.4e9, 1.4e9, 1.4e9];
    let header = build(&p).unwrap();
    assert!(!header.contains_key("ALTRPIX"));
}

#[test]
fn alternate_axis_on_descending_axis() {
    let p = galactic_cube().with_rest_frequency(1.420405752e9);
    let header = build(&p).unwrap();
    let altrpix = header.get_float("ALTRPIX").unwrap();
    // 1.4205 GHz is channel 1, channels step down by 100 kHz
    let expected = 1.0 + (1.420405752e9 - 1.4205e9) / -1.0e5;
    assert!((altrpix - expected).abs() < 1e-6);
}

// --- Celestial frame ---

#[test]
fn radesys_only_when_non_empty() {
    let absent = build(&hi_cube().with_radesys("")).unwrap();
    assert!(!absent.contains_key("RADESYS"));

    let present = build(&hi_cube().with_radesys("FK5")).unwrap();
    assert_eq!(present.get_string("RADESYS"), Some("FK5".to_string()));
}

#[test]
fn equinox_only_when_positive() {
    assert!(!build(&hi_cube()).unwrap().contains_key("EQUINOX"));
    assert!(!build(&hi_cube().with_equinox(0.0)).unwrap().contains_key("EQUINOX"));
    assert!(!build(&hi_cube().with_equinox(-2000.0)).unwrap().contains_key("EQUINOX"));

    let header = build(&hi_cube().with_equinox(2000.0)).unwrap();
    assert_eq!(header.get_float("EQUINOX"), Some(2000.0));
}

#[test]
fn radesys_and_equinox_are_independent() {
    let header = build(&hi_cube().with_equinox(1950.0)).unwrap();
    assert!(!header.contains_key("RADESYS"));
    assert_eq!(header.get_float("EQUINOX"), Some(1950.0));
}

// --- Whole header ---

#[test]
fn build_is_deterministic() {
    let p = hi_cube()
        .with_rest_frequency(1.40004e9)
        .with_radesys("FK5")
        .with_equinox(2000.0)
        .with_spectral_system("LSRK")
        .with_velocity_definition("RADI");
    let first = build(&p).unwrap();
    let second = build(&p).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn every_keyword_appears_once() {
    let p = hi_cube()
        .with_rest_frequency(1.40004e9)
        .with_radesys("FK5")
        .with_equinox(2000.0);
    let header = build(&p).unwrap();
    let mut keys: Vec<&str> = header.keys().collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total);
    assert_eq!(total, 29);
}

#[test]
fn beam_is_not_a_keyword() {
    let without = build(&hi_cube()).unwrap();
    let with = build(&hi_cube().with_beam_fwhm(0.25)).unwrap();
    assert_eq!(without, with);
}

#[test]
fn card_rendering() {
    let header = build(&hi_cube().with_projection("TAN").with_radesys("FK5")).unwrap();
    let text = header.to_string();
    assert!(text.starts_with("NAXIS   = 4\nNAXIS1  = 120\n"));
    assert!(text.contains("CTYPE1  = 'RA---TAN'\n"));
    assert!(text.contains("CUNIT3  = 'Hz'\n"));
    assert!(text.contains("CRPIX1  = 60.0\n"));
    assert!(text.ends_with("RADESYS = 'FK5'\n"));
}

#[test]
fn degenerate_values_render_as_undefined_cards() {
    let mut p = hi_cube();
    p.frequency_axis = vec![1.4e9];
    p.pixel_scale = 0.0;
    let header = build(&p).unwrap();

    let text = header.to_string();
    assert!(text.contains("CDELT3  =\n"));
    assert!(text.contains("CRPIX2  =\n"));
    assert!(!text.contains("NAN"));
    assert!(!text.contains("INF"));

    let undefined: Vec<&str> = header.undefined_keywords().collect();
    assert_eq!(undefined, vec!["CRPIX2", "CDELT3"]);
}

#[test]
fn selected_keywords_follow_request_order() {
    let header = build(&hi_cube().with_spectral_system("LSRK")).unwrap();
    let selected = header.select(["VELREF", "CTYPE1"]).unwrap();
    assert_eq!(selected.to_string(), "VELREF  = 1\nCTYPE1  = 'RA---SFL'\n");
}

#[test]
fn selecting_an_omitted_keyword_fails() {
    let header = build(&hi_cube()).unwrap();
    let err = header.select(["NAXIS", "ALTRPIX"]).unwrap_err();
    assert_eq!(err, HeaderError::missing_keyword("ALTRPIX"));
    assert!(err.to_string().contains("ALTRPIX"));
}

#[cfg(feature = "serde")]
#[test]
fn header_serializes_as_ordered_json_object() {
    let header = build(&hi_cube().with_spectral_system("LSRK")).unwrap();
    let json = serde_json::to_string(&header).unwrap();
    assert!(json.starts_with(r#"{"NAXIS":4,"NAXIS1":120,"#));
    assert!(json.contains(r#""SPECSYS":"LSRK","VELREF":1"#));
}

#[cfg(feature = "serde")]
#[test]
fn parameters_load_from_json() {
    let json = r#"{
        "center": [83.82, -5.39],
        "size": [120, 90],
        "pixel_scale": 0.0125,
        "coord_type": ["RA", "DEC"],
        "frequency_axis": [1.4e9, 1.4001e9],
        "rest_frequency": 1.4004e9,
        "radesys": "FK5",
        "equinox": 2000.0,
        "spectral_system": "LSRK",
        "velocity_definition": "RADI",
        "projection": "TAN"
    }"#;
    let params: ObservationalParameters = serde_json::from_str(json).unwrap();
    let header = build(&params).unwrap();
    assert_eq!(header.get_int("VELREF"), Some(257));
    assert_eq!(header.get_string("CTYPE2"), Some("DEC--TAN".to_string()));
    assert!((header.get_float("ALTRPIX").unwrap() - 5.0).abs() < 1e-6);
}

#[cfg(feature = "serde")]
#[test]
fn bundled_parameter_file_builds() {
    let params: ObservationalParameters =
        serde_json::from_str(include_str!("../data/hi_cube.json")).unwrap();
    assert!(params.validate().is_ok());

    let header = build(&params).unwrap();
    assert_eq!(header.get_string("CTYPE1"), Some("RA---SFL".to_string()));
    assert_eq!(header.get_int("VELREF"), Some(257));
    assert_eq!(header.get_string("RADESYS"), Some("FK5".to_string()));
    let altrpix = header.get_float("ALTRPIX").unwrap();
    assert!((altrpix - (1.0 + 405752.0 / 1.0e5)).abs() < 1e-6);
}
