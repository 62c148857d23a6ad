//! Cross-checks conversions against `csscolorparser`, an independent CSS color parser.

use css_color::{Color, ColorFormat};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn reference_channels(raw: &str) -> anyhow::Result<(u8, u8, u8, u8)> {
    let parsed: csscolorparser::Color = raw.parse()?;
    let [red, green, blue, alpha] = parsed.to_rgba8();
    Ok((red, green, blue, alpha))
}

const KEYWORDS: [&str; 12] = [
    "black",
    "white",
    "rebeccapurple",
    "aliceblue",
    "darkgoldenrod",
    "lightslategrey",
    "mediumspringgreen",
    "papayawhip",
    "yellowgreen",
    "navy",
    "fuchsia",
    "olive",
];

#[test]
fn keywords_match_reference() -> anyhow::Result<()> {
    init_logger();
    for keyword in KEYWORDS {
        let color = Color::new(keyword)?;
        assert_eq!(color.format(), ColorFormat::BasicKeyword);
        assert_eq!(color.channels(), reference_channels(keyword)?, "{keyword}");
    }
    Ok(())
}

#[test]
fn hex_matches_reference() -> anyhow::Result<()> {
    init_logger();
    for raw in ["#000", "#fff", "#1e90ff", "#C0FFEE", "#a1b", "#7bde18"] {
        assert_eq!(Color::new(raw)?.channels(), reference_channels(raw)?, "{raw}");
    }
    Ok(())
}

#[test]
fn integer_rgb_matches_reference() -> anyhow::Result<()> {
    init_logger();
    for raw in ["rgb(123, 222, 24)", "rgb(0, 0, 0)", "rgb(255,255,255)"] {
        assert_eq!(Color::new(raw)?.channels(), reference_channels(raw)?, "{raw}");
    }
    Ok(())
}

#[test]
fn hsl_matches_reference() -> anyhow::Result<()> {
    init_logger();
    for raw in [
        "hsl(0deg, 100%, 50%)",
        "hsl(120deg, 100%, 50%)",
        "hsl(240deg, 100%, 50%)",
        "hsl(210deg, 50%, 40%)",
        "hsl(0deg, 100%, 20%)",
        "hsl(0deg, 0%, 40%)",
        "hsl(60deg, 100%, 25%)",
        "hsl(180deg, 100%, 25%)",
        "hsl(300deg, 100%, 25%)",
        "hsl(60deg, 100%, 75%)",
    ] {
        assert_eq!(Color::new(raw)?.channels(), reference_channels(raw)?, "{raw}");
    }
    Ok(())
}
