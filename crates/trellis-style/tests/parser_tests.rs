//! Tests for the value, keyword and shorthand parsers.

use trellis_ir::factory::{em, fr, percentage, rem, vh, vw};
use trellis_ir::{
    BoxShadow, Color, Display, GridAutoFlow, GridLine, GridPlacement, GridTrackSize, LengthUnit,
    Position, RepeatCount, RepeatKeyword, SidesValue, TextOverflow, TrackSizingFunction,
};
use trellis_style::{
    ValidationError, parse_aspect_ratio, parse_box_shadow, parse_display, parse_font_weight,
    parse_grid_auto_flow, parse_grid_line, parse_grid_track_size, parse_length_unit,
    parse_position, parse_px, parse_side_length_units, parse_text_overflow,
    parse_track_sizing_function,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn px(value: f32) -> LengthUnit {
    LengthUnit::Px(value)
}

// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)

#[test]
fn test_length_pixels() {
    assert_eq!(parse_length_unit(100), px(100.0));
    assert_eq!(parse_length_unit("50px"), px(50.0));
    assert_eq!(parse_length_unit("0"), px(0.0));
    assert_eq!(parse_length_unit(" 12.5px "), px(12.5));
}

#[test]
fn test_length_relative_units() {
    assert_eq!(parse_length_unit("50%"), percentage(50.0));
    assert_eq!(parse_length_unit("0%"), percentage(0.0));
    assert_eq!(parse_length_unit("2rem"), rem(2.0));
    assert_eq!(parse_length_unit("1.5rem"), rem(1.5));
    assert_eq!(parse_length_unit("1em"), em(1.0));
    assert_eq!(parse_length_unit("0.5em"), em(0.5));
    assert_eq!(parse_length_unit("10vh"), vh(10.0));
    assert_eq!(parse_length_unit("5vw"), vw(5.0));
}

#[test]
fn test_length_rem_is_not_em() {
    // "2rem" also ends in "em"; the longer suffix has to win.
    assert_eq!(parse_length_unit("2rem"), rem(2.0));
    assert_ne!(parse_length_unit("2rem"), em(2.0));
}

#[test]
fn test_length_keywords() {
    assert_eq!(parse_length_unit("auto"), LengthUnit::AUTO);
    assert!(parse_length_unit("auto").is_auto());
    assert_eq!(
        parse_length_unit("min-content"),
        LengthUnit::Keyword(trellis_ir::LengthKeyword::MinContent)
    );
    assert_eq!(
        parse_length_unit("max-content"),
        LengthUnit::Keyword(trellis_ir::LengthKeyword::MaxContent)
    );
}

#[test]
fn test_length_invalid_is_zero() {
    init_logging();
    assert_eq!(parse_length_unit("invalid"), px(0.0));
    assert_eq!(parse_length_unit(""), px(0.0));
    assert_eq!(parse_length_unit("px"), px(0.0));
}

#[test]
fn test_px_rejects_relative_units() {
    init_logging();
    assert!((parse_px("4px") - 4.0).abs() < f32::EPSILON);
    assert!((parse_px(7) - 7.0).abs() < f32::EPSILON);
    assert!(parse_px("2em").abs() < f32::EPSILON);
    assert!(parse_px("auto").abs() < f32::EPSILON);
}

// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)

#[test]
fn test_sides_single_value_is_scalar() {
    assert_eq!(parse_side_length_units(10), SidesValue::Uniform(px(10.0)));
    assert_eq!(parse_side_length_units("10px"), SidesValue::Uniform(px(10.0)));
    assert_eq!(parse_side_length_units(""), SidesValue::Uniform(px(0.0)));
}

#[test]
fn test_sides_two_values() {
    assert_eq!(
        parse_side_length_units("10px 20px"),
        SidesValue::Pair([px(10.0), px(20.0)])
    );
    assert_eq!(
        parse_side_length_units("1em 2rem"),
        SidesValue::Pair([em(1.0), rem(2.0)])
    );
}

#[test]
fn test_sides_three_values_duplicate_right() {
    assert_eq!(
        parse_side_length_units("10px 20px 30px"),
        SidesValue::Sides([px(10.0), px(20.0), px(30.0), px(20.0)])
    );
}

#[test]
fn test_sides_four_values() {
    assert_eq!(
        parse_side_length_units("10px 20px 30px 40px"),
        SidesValue::Sides([px(10.0), px(20.0), px(30.0), px(40.0)])
    );
    assert_eq!(
        parse_side_length_units("10px 20% 30em 40vh"),
        SidesValue::Sides([px(10.0), percentage(20.0), em(30.0), vh(40.0)])
    );
}

#[test]
fn test_sides_extra_values_are_ignored() {
    init_logging();
    assert_eq!(
        parse_side_length_units("1px 2px 3px 4px 5px"),
        SidesValue::Sides([px(1.0), px(2.0), px(3.0), px(4.0)])
    );
}

// [§ 7.1 'aspect-ratio'](https://www.w3.org/TR/css-sizing-4/#aspect-ratio)

#[test]
fn test_aspect_ratio_fractions() {
    assert_eq!(parse_aspect_ratio("16/9"), Ok(16.0 / 9.0));
    assert_eq!(parse_aspect_ratio("4/3"), Ok(4.0 / 3.0));
    assert_eq!(parse_aspect_ratio("1/1"), Ok(1.0));
    assert_eq!(parse_aspect_ratio("16 / 9"), Ok(16.0 / 9.0));
}

#[test]
fn test_aspect_ratio_numbers() {
    assert_eq!(parse_aspect_ratio(1.5), Ok(1.5));
    assert_eq!(parse_aspect_ratio(2), Ok(2.0));
    assert_eq!(parse_aspect_ratio("1.5"), Ok(1.5));
    assert_eq!(parse_aspect_ratio("2"), Ok(2.0));
}

#[test]
fn test_aspect_ratio_zero_denominator_is_an_error() {
    let err = parse_aspect_ratio("16/0").unwrap_err();
    assert!(matches!(err, ValidationError::ZeroDenominator { .. }));
    assert_eq!(err.to_string(), "Denominator cannot be zero");
}

#[test]
fn test_aspect_ratio_malformed_is_nan() {
    assert!(parse_aspect_ratio("invalid").unwrap().is_nan());
    assert!(parse_aspect_ratio("16/").unwrap().is_nan());
    assert!(parse_aspect_ratio("/9").unwrap().is_nan());
}

// Keyword parsers

#[test]
fn test_display() {
    init_logging();
    assert_eq!(parse_display("block"), Display::Block);
    assert_eq!(parse_display("flex"), Display::Flex);
    assert_eq!(parse_display("grid"), Display::Grid);
    assert_eq!(parse_display("none"), Display::None);
    assert_eq!(parse_display("inline"), Display::Block);
    assert_eq!(parse_display("table"), Display::Block);
}

#[test]
fn test_position() {
    init_logging();
    assert_eq!(parse_position("relative"), Position::Relative);
    assert_eq!(parse_position("absolute"), Position::Absolute);
    assert_eq!(parse_position("static"), Position::Relative);
    assert_eq!(parse_position("fixed"), Position::Relative);
    assert_eq!(parse_position("sticky"), Position::Relative);
}

#[test]
fn test_text_overflow() {
    init_logging();
    assert_eq!(parse_text_overflow("ellipsis"), TextOverflow::Ellipsis);
    assert_eq!(parse_text_overflow("clip"), TextOverflow::Clip);
    assert_eq!(parse_text_overflow("fade"), TextOverflow::Clip);
}

#[test]
fn test_grid_auto_flow() {
    init_logging();
    assert_eq!(parse_grid_auto_flow("row"), GridAutoFlow::Row);
    assert_eq!(parse_grid_auto_flow("column"), GridAutoFlow::Column);
    assert_eq!(parse_grid_auto_flow("row dense"), GridAutoFlow::RowDense);
    assert_eq!(parse_grid_auto_flow("column   dense"), GridAutoFlow::ColumnDense);
    assert_eq!(parse_grid_auto_flow("invalid"), GridAutoFlow::Row);
}

// [§ 2.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)

#[test]
fn test_font_weight_numbers() {
    assert!((parse_font_weight(400) - 400.0).abs() < f32::EPSILON);
    assert!((parse_font_weight(700) - 700.0).abs() < f32::EPSILON);
    assert!((parse_font_weight("500") - 500.0).abs() < f32::EPSILON);
    assert!((parse_font_weight("900") - 900.0).abs() < f32::EPSILON);
}

#[test]
fn test_font_weight_keywords() {
    assert!((parse_font_weight("normal") - 400.0).abs() < f32::EPSILON);
    assert!((parse_font_weight("bold") - 700.0).abs() < f32::EPSILON);
    assert!((parse_font_weight("lighter") - 300.0).abs() < f32::EPSILON);
    assert!((parse_font_weight("bolder") - 600.0).abs() < f32::EPSILON);
}

#[test]
fn test_font_weight_clamps() {
    assert!((parse_font_weight(0) - 1.0).abs() < f32::EPSILON);
    assert!((parse_font_weight(1500) - 1000.0).abs() < f32::EPSILON);
    assert!((parse_font_weight("-20") - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_font_weight_invalid() {
    init_logging();
    assert!((parse_font_weight("invalid") - 400.0).abs() < f32::EPSILON);
    assert!((parse_font_weight(f32::NAN) - 400.0).abs() < f32::EPSILON);
}

// [§ 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)

#[test]
fn test_box_shadow_simple() {
    assert_eq!(
        parse_box_shadow("2px 3px 4px #000000"),
        Ok(BoxShadow {
            color: Color::Rgb(0x0000_0000),
            offset_x: 2.0,
            offset_y: 3.0,
            blur_radius: 4.0,
            spread_radius: 0.0,
            inset: false,
        })
    );
}

#[test]
fn test_box_shadow_with_spread() {
    assert_eq!(
        parse_box_shadow("2px 3px 4px 5px #ff0000"),
        Ok(BoxShadow {
            color: Color::Rgb(0x00ff_0000),
            offset_x: 2.0,
            offset_y: 3.0,
            blur_radius: 4.0,
            spread_radius: 5.0,
            inset: false,
        })
    );
}

#[test]
fn test_box_shadow_inset() {
    let shadow = parse_box_shadow("inset 2px 3px 4px #000000").unwrap();
    assert!(shadow.inset);
    assert!((shadow.offset_x - 2.0).abs() < f32::EPSILON);
    assert!(shadow.spread_radius.abs() < f32::EPSILON);
}

#[test]
fn test_box_shadow_functional_color() {
    let shadow = parse_box_shadow("0 1px 2px rgba(0, 0, 0, 0.5)").unwrap();
    assert_eq!(shadow.color, Color::Rgba([0, 0, 0, 128]));
    assert!((shadow.blur_radius - 2.0).abs() < f32::EPSILON);
}

#[test]
fn test_box_shadow_errors() {
    let too_short = parse_box_shadow("2px").unwrap_err();
    assert!(matches!(too_short, ValidationError::InvalidBoxShadow { .. }));
    assert_eq!(too_short.to_string(), "Invalid box-shadow");

    let too_long = parse_box_shadow("2px 3px 4px 5px 6px 7px black").unwrap_err();
    assert!(matches!(too_long, ValidationError::InvalidBoxShadowFormat { .. }));
    assert_eq!(too_long.to_string(), "Invalid box-shadow format");

    // `inset` is not counted towards the components.
    let inset_too_long = parse_box_shadow("inset 1px 2px 3px 4px 5px black").unwrap_err();
    assert!(matches!(inset_too_long, ValidationError::InvalidBoxShadowFormat { .. }));
    let inset_too_short = parse_box_shadow("inset 1px 2px black").unwrap_err();
    assert!(matches!(inset_too_short, ValidationError::InvalidBoxShadow { .. }));

    assert!(parse_box_shadow("").is_err());
}

// [§ 7.2 Explicit Track Sizing](https://www.w3.org/TR/css-grid-2/#track-sizing)

#[test]
fn test_grid_track_size_fr() {
    assert_eq!(parse_grid_track_size("1fr"), vec![fr(1.0)]);
    assert_eq!(parse_grid_track_size("2.5fr"), vec![fr(2.5)]);
}

#[test]
fn test_grid_track_size_lengths() {
    assert_eq!(parse_grid_track_size("100px"), vec![GridTrackSize::Length(px(100.0))]);
    assert_eq!(parse_grid_track_size("50%"), vec![GridTrackSize::from(percentage(50.0))]);
    assert_eq!(parse_grid_track_size("2rem"), vec![GridTrackSize::from(rem(2.0))]);
}

#[test]
fn test_grid_track_size_list() {
    assert_eq!(
        parse_grid_track_size("1fr 2fr 100px"),
        vec![fr(1.0), fr(2.0), GridTrackSize::Length(px(100.0))]
    );
}

#[test]
fn test_track_sizing_singles() {
    assert_eq!(
        parse_track_sizing_function("1fr 2fr"),
        vec![
            TrackSizingFunction::Single(fr(1.0)),
            TrackSizingFunction::Single(fr(2.0)),
        ]
    );
}

#[test]
fn test_track_sizing_repeat() {
    assert_eq!(
        parse_track_sizing_function("repeat(3, 1fr)"),
        vec![TrackSizingFunction::Repeat(RepeatCount::Count(3), vec![fr(1.0)])]
    );
    assert_eq!(
        parse_track_sizing_function("repeat(auto-fill, 100px)"),
        vec![TrackSizingFunction::Repeat(
            RepeatCount::Keyword(RepeatKeyword::AutoFill),
            vec![GridTrackSize::Length(px(100.0))],
        )]
    );
    assert_eq!(
        parse_track_sizing_function("repeat(auto-fit, 1fr)"),
        vec![TrackSizingFunction::Repeat(
            RepeatCount::Keyword(RepeatKeyword::AutoFit),
            vec![fr(1.0)],
        )]
    );
}

#[test]
fn test_track_sizing_repeat_is_one_token() {
    assert_eq!(
        parse_track_sizing_function("200px repeat(2, 1fr 2fr) 50px"),
        vec![
            TrackSizingFunction::Single(GridTrackSize::Length(px(200.0))),
            TrackSizingFunction::Repeat(RepeatCount::Count(2), vec![fr(1.0), fr(2.0)]),
            TrackSizingFunction::Single(GridTrackSize::Length(px(50.0))),
        ]
    );
}

#[test]
fn test_track_sizing_malformed_repeat_is_dropped() {
    init_logging();
    assert_eq!(
        parse_track_sizing_function("repeat(0, 1fr) 1fr"),
        vec![TrackSizingFunction::Single(fr(1.0))]
    );
    assert!(parse_track_sizing_function("repeat(1fr)").is_empty());
}

// [§ 8.3 Line-based Placement](https://www.w3.org/TR/css-grid-2/#line-placement)

#[test]
fn test_grid_line_span() {
    assert_eq!(
        parse_grid_line("span 2"),
        GridLine {
            start: Some(GridPlacement::Line(2)),
            end: None,
        }
    );
    assert_eq!(
        parse_grid_line("span 1"),
        GridLine {
            start: Some(GridPlacement::Line(1)),
            end: None,
        }
    );
}

#[test]
fn test_grid_line_ranges() {
    assert_eq!(
        parse_grid_line("1/3"),
        GridLine {
            start: Some(GridPlacement::Line(1)),
            end: Some(3),
        }
    );
    assert_eq!(
        parse_grid_line("2 / 5"),
        GridLine {
            start: Some(GridPlacement::Line(2)),
            end: Some(5),
        }
    );
    assert_eq!(
        parse_grid_line("1 / x"),
        GridLine {
            start: Some(GridPlacement::Line(1)),
            end: None,
        }
    );
}

#[test]
fn test_grid_line_auto_and_numbers() {
    assert_eq!(parse_grid_line("auto"), GridLine::default());
    assert_eq!(parse_grid_line(""), GridLine::default());
    assert_eq!(
        parse_grid_line("3"),
        GridLine {
            start: Some(GridPlacement::Line(3)),
            end: None,
        }
    );
    assert_eq!(
        parse_grid_line(-1),
        GridLine {
            start: Some(GridPlacement::Line(-1)),
            end: None,
        }
    );
}

#[test]
fn test_grid_line_named() {
    assert_eq!(
        parse_grid_line("header-start"),
        GridLine {
            start: Some(GridPlacement::Named("header-start".to_string())),
            end: None,
        }
    );
    // "spanning" is an identifier, not the span keyword
    assert_eq!(
        parse_grid_line("spanning"),
        GridLine {
            start: Some(GridPlacement::Named("spanning".to_string())),
            end: None,
        }
    );
}
