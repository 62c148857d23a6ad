use css_values_units::{Dimension, Unit, UnitFamily, ValueError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn every_known_suffix_parses_as_a_dimension() -> anyhow::Result<()> {
    init_logger();
    for unit in Unit::ALL {
        let raw = format!("1.5{}", unit.suffix());
        let dimension = Dimension::new(raw.as_str())?;
        assert_eq!(dimension.unit(), unit, "`{raw}`");
        assert!((dimension.number() - 1.5).abs() < f64::EPSILON, "`{raw}`");
    }
    Ok(())
}

#[test]
fn angle_and_duration_units() -> anyhow::Result<()> {
    init_logger();
    let turn = Dimension::new("0.25turn")?;
    assert_eq!(turn.unit().family(), UnitFamily::Angle);
    let delay = Dimension::new("150ms")?;
    assert_eq!(delay.unit(), Unit::Milliseconds);
    assert_eq!(delay.unit().family(), UnitFamily::Duration);
    let seconds: Dimension = "2s".parse()?;
    assert_eq!(seconds.unit(), Unit::Seconds);
    Ok(())
}

#[test]
fn percentages_keep_their_raw_number() -> anyhow::Result<()> {
    init_logger();
    let half = Dimension::new("50%")?;
    assert!((half.number() - 50.0).abs() < f64::EPSILON);
    assert_eq!(half.unit(), Unit::Percent);
    Ok(())
}

#[test]
fn css_wide_keywords_never_classify_a_unit() -> anyhow::Result<()> {
    init_logger();
    for keyword in ["inherit", "initial", "unset", "revert"] {
        let dimension = Dimension::new(keyword)?;
        assert!(dimension.is_css_wide_keyword());
        assert!(dimension.number().is_nan());
        assert_eq!(dimension.unit(), Unit::None);
    }
    Ok(())
}

#[test]
fn keywords_that_are_not_wide_are_unsupported_units() {
    init_logger();
    assert!(matches!(
        Dimension::new("auto"),
        Err(ValueError::UnsupportedUnit { ref unit, .. }) if unit == "auto"
    ));
}

#[test]
fn empty_dimension_is_rejected() {
    init_logger();
    assert_eq!(Dimension::new(""), Err(ValueError::EmptyValue));
}
