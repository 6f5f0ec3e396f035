//! Grid track lists, `repeat()` and line placement.
//!
//! [CSS Grid Layout Level 2](https://www.w3.org/TR/css-grid-2/)

use trellis_common::warning::warn_once;
use trellis_ir::factory::fr;
use trellis_ir::{
    GridLine, GridPlacement, GridTrackSize, RepeatCount, RepeatKeyword, TrackSizingFunction,
};

use crate::declaration::ValueRef;
use crate::parser::length::{parse_length_str, parse_number};
use crate::parser::tokenize::split_whitespace_top_level;

/// [§ 7.2 Explicit Track Sizing](https://www.w3.org/TR/css-grid-2/#track-sizing)
///
/// Parse a whitespace-separated list of track sizes. `Nfr` tokens become
/// flexible tracks; everything else is read as a length.
#[must_use]
pub fn parse_grid_track_size(value: &str) -> Vec<GridTrackSize> {
    value
        .split_ascii_whitespace()
        .map(parse_single_track_size)
        .collect()
}

/// [§ 7.2.3 Flexible Lengths](https://www.w3.org/TR/css-grid-2/#fr-unit)
fn parse_single_track_size(token: &str) -> GridTrackSize {
    if let Some(flex) = token.strip_suffix("fr").and_then(parse_number) {
        return fr(flex);
    }
    GridTrackSize::Length(parse_length_str(token))
}

/// [§ 7.2 Explicit Track Sizing](https://www.w3.org/TR/css-grid-2/#track-sizing)
///
/// Parse a `grid-template-columns`/`grid-template-rows` track list.
///
/// Each top-level token is one entry: `repeat(<count>, <tracks>)` becomes a
/// repeat entry, and any other token a single track. Malformed `repeat()`
/// calls are dropped with a warning.
#[must_use]
pub fn parse_track_sizing_function(value: &str) -> Vec<TrackSizingFunction> {
    split_whitespace_top_level(value)
        .into_iter()
        .filter_map(parse_track_entry)
        .collect()
}

fn parse_track_entry(token: &str) -> Option<TrackSizingFunction> {
    let Some(args) = token
        .strip_prefix("repeat(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return parse_grid_track_size(token)
            .into_iter()
            .next()
            .map(TrackSizingFunction::Single);
    };

    // [§ 7.2.3 Repeating Rows and Columns](https://www.w3.org/TR/css-grid-2/#repeat-notation)
    // "The first argument specifies the number of repetitions. The second
    // argument is a track list, which is repeated that number of times."
    let parsed = args.split_once(',').and_then(|(count, tracks)| {
        let count = parse_repeat_count(count.trim())?;
        Some(TrackSizingFunction::Repeat(count, parse_grid_track_size(tracks)))
    });

    if parsed.is_none() {
        warn_once("style", &format!("invalid repeat() '{token}', ignoring"));
    }
    parsed
}

fn parse_repeat_count(count: &str) -> Option<RepeatCount> {
    match count {
        "auto-fill" => Some(RepeatCount::Keyword(RepeatKeyword::AutoFill)),
        "auto-fit" => Some(RepeatCount::Keyword(RepeatKeyword::AutoFit)),
        n => n
            .parse::<u16>()
            .ok()
            .filter(|n| *n > 0)
            .map(RepeatCount::Count),
    }
}

/// [§ 8.3 Line-based Placement](https://www.w3.org/TR/css-grid-2/#line-placement)
///
/// Parse a `grid-row`/`grid-column` value:
///
/// - `span N` → `{start: N, end: null}`
/// - `A / B` → `{start: A, end: B}`
/// - `auto` → `{start: null, end: null}`
/// - `N` → `{start: N, end: null}`
/// - any other identifier → `{start: "ident", end: null}` (a named line)
///
/// Non-integer sides of an `A / B` range are `null`.
#[must_use]
pub fn parse_grid_line<'a>(value: impl Into<ValueRef<'a>>) -> GridLine {
    let value = match value.into() {
        ValueRef::Number(n) => return GridLine {
            start: number_to_line(n).map(GridPlacement::Line),
            end: None,
        },
        ValueRef::Str(s) => s.trim(),
    };

    if value.is_empty() || value == "auto" {
        return GridLine::default();
    }

    // "span && [ <integer [1,∞]> || <custom-ident> ]"
    if let Some(count) = value.strip_prefix("span")
        && count.starts_with(|c: char| c.is_ascii_whitespace())
    {
        let count = count.trim();
        let start = count.parse::<i16>().ok().map(GridPlacement::Line);
        if start.is_none() {
            warn_once("style", &format!("unsupported grid span '{value}'"));
        }
        return GridLine { start, end: None };
    }

    if let Some((start, end)) = value.split_once('/') {
        return GridLine {
            start: start.trim().parse::<i16>().ok().map(GridPlacement::Line),
            end: end.trim().parse::<i16>().ok(),
        };
    }

    if let Ok(line) = value.parse::<i16>() {
        return GridLine {
            start: Some(GridPlacement::Line(line)),
            end: None,
        };
    }

    GridLine {
        start: Some(GridPlacement::Named(value.to_string())),
        end: None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number_to_line(n: f32) -> Option<i16> {
    (n.fract() == 0.0 && (f32::from(i16::MIN)..=f32::from(i16::MAX)).contains(&n))
        .then_some(n as i16)
}
