use css_values_units::{Dimension, Function, Unit, ValueError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn arguments_reparse_as_dimensions() -> anyhow::Result<()> {
    init_logger();
    let function = Function::new("hsla(0.5turn 40% 60% / 0.5)")?;
    assert_eq!(function.function_name(), "hsla");
    let raws: Vec<&str> = function.arguments().iter().map(|arg| arg.raw()).collect();
    assert_eq!(raws, ["0.5turn", "40%", "60%", "/", "0.5"]);

    let hue = Dimension::from_value(function.arguments()[0].clone())?;
    assert_eq!(hue.unit(), Unit::Turns);
    Ok(())
}

#[test]
fn quoted_strings_are_single_arguments() -> anyhow::Result<()> {
    init_logger();
    let function = Function::new("format(\"woff 2\", 'x')")?;
    assert_eq!(function.arguments().len(), 2);
    assert_eq!(function.argument(0).map(|arg| arg.raw()), Some("\"woff 2\""));
    Ok(())
}

#[test]
fn argument_values_flag_wide_keywords() -> anyhow::Result<()> {
    init_logger();
    let function = Function::new("var(--accent, inherit)")?;
    assert_eq!(function.function_name(), "var");
    assert!(function.argument(1).is_some_and(|arg| arg.is_css_wide_keyword()));
    Ok(())
}

#[test]
fn surrounding_whitespace_is_trimmed() -> anyhow::Result<()> {
    init_logger();
    let function: Function = "  rgb(1,2,3)  ".parse()?;
    assert_eq!(function.function_name(), "rgb");
    assert_eq!(function.value().raw(), "  rgb(1,2,3)  ");
    Ok(())
}

#[test]
fn missing_parentheses_fail() {
    init_logger();
    assert!(matches!(
        Function::new("123"),
        Err(ValueError::MalformedFunction { .. })
    ));
    assert_eq!(Function::new(""), Err(ValueError::EmptyValue));
}
