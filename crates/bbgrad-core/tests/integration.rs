//! End-to-end behavior of the public API.

use bbgrad_core::{
    compile, estimate_capacity, normalize, parse_markup, plain_text, preview, rainbow_stops,
    Color, ColorFormat, Preset, Preview, RenderOptions, Session, DEFAULT_BUDGET,
    INSUFFICIENT_STOPS,
};

fn hex(s: &str) -> Color {
    normalize(s).unwrap()
}

fn opts(include_spaces: bool, escape_brackets: bool) -> RenderOptions {
    RenderOptions::default()
        .include_spaces(include_spaces)
        .escape_brackets(escape_brackets)
        .format(ColorFormat::Hex)
}

// =============================================================================
// Compiler examples
// =============================================================================

#[test]
fn two_chars_two_stops() {
    let out = compile("Hi", &[hex("#FF0000"), hex("#0000FF")], &opts(true, false));
    assert_eq!(
        out.markup,
        "[COLOR=#FF0000]H[/COLOR][COLOR=#0000FF]i[/COLOR]"
    );
    assert_eq!(out.colored_count, 2);
}

#[test]
fn space_passes_through() {
    let out = compile("a b", &[hex("#000000"), hex("#FFFFFF")], &opts(false, true));
    assert_eq!(
        out.markup,
        "[COLOR=#000000]a[/COLOR] [COLOR=#FFFFFF]b[/COLOR]"
    );
    assert_eq!(out.colored_count, 2);
}

#[test]
fn brackets_escaped_inside_tags() {
    let out = compile("[x]", &[hex("#000"), hex("#FFF")], &opts(true, true));
    assert_eq!(
        out.markup,
        "[COLOR=#000000]&#91;[/COLOR][COLOR=#808080]x[/COLOR][COLOR=#FFFFFF]&#93;[/COLOR]"
    );
    assert_eq!(plain_text(&out.markup), "[x]");
}

#[test]
fn insufficient_stops() {
    for stops in [vec![], vec![Color::WHITE]] {
        let out = compile("text", &stops, &RenderOptions::default());
        assert_eq!(out.markup, INSUFFICIENT_STOPS);
        assert_eq!(out.colored_count, 0);
    }
}

#[test]
fn endpoints_for_every_stop_count() {
    let text = "The quick brown fox jumps over the lazy dog";
    for n in 2..=24 {
        let stops = rainbow_stops(n);
        let colors: Vec<Color> = preview(text, &stops, false)
            .glyphs()
            .iter()
            .filter_map(|g| g.color)
            .collect();
        assert_eq!(colors.first(), Some(&stops[0]), "n = {}", n);
        assert_eq!(colors.last(), Some(&stops[n - 1]), "n = {}", n);
    }
}

#[test]
fn normalize_is_a_fixed_point() {
    for input in ["#abc", "ABCDEF", " #0a0B0c ", "fff"] {
        let once = normalize(input).unwrap();
        assert_eq!(normalize(&once.to_hex()), Some(once));
    }
}

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn default_budget_capacity() {
    let stops = [hex("#85B9FF"), hex("#D064FF")];
    let options = RenderOptions::default();
    assert_eq!(estimate_capacity("", &stops, &options, DEFAULT_BUDGET), 25);
    assert_eq!(estimate_capacity("Hello", &stops, &options, DEFAULT_BUDGET), 20);
    assert_eq!(estimate_capacity("Hello world", &stops, &options, DEFAULT_BUDGET), 14);
}

#[test]
fn rgb_capacity_fits() {
    let stops = [Color::BLACK, Color::WHITE];
    let options = RenderOptions::default().format(ColorFormat::Rgb);
    let k = estimate_capacity("hi", &stops, &options, DEFAULT_BUDGET);
    let text = format!("hi{}", "a".repeat(k));
    assert!(compile(&text, &stops, &options).len() <= DEFAULT_BUDGET);
}

// =============================================================================
// Read-back and session
// =============================================================================

#[test]
fn pasted_markup_previews_like_compiled() {
    let stops = rainbow_stops(5);
    let text = "Gradient [sig] ✨";
    let options = RenderOptions::default().format(ColorFormat::Rgb);
    let out = compile(text, &stops, &options);
    assert_eq!(
        Preview::Glyphs(parse_markup(&out.markup)),
        preview(text, &stops, false)
    );
}

#[test]
fn preset_drives_a_session() {
    let preset = Preset::from_yaml("stops: ['#000', '#fff']\nformat: rgb\nbudget: 100").unwrap();
    let mut session = preset.into_session();
    session.set_text("ab");
    let report = session.render();
    assert_eq!(
        report.markup,
        "[COLOR=rgb(0, 0, 0)]a[/COLOR][COLOR=rgb(255, 255, 255)]b[/COLOR]"
    );
    assert_eq!(report.budget_label(), format!("Output: {} / 100", report.markup_len));
    assert!(!report.over_budget);
}

#[test]
fn session_rainbow_then_reverse() {
    let mut session = Session::new();
    session.set_text("abc");
    session.apply_rainbow();
    session.edit_stops(|stops| stops.reverse());
    let first = session.render().preview.glyphs()[0].color;
    assert_eq!(first.map(|c| c.to_hex()), Some("#FF1AFF".to_string()));
}
