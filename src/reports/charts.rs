//! PNG charts
//!
//! Drawn into an in-memory RGB buffer with plotters, then encoded as PNG with `image`.

use std::f64::consts::PI;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use crate::analysis::score::MAX_SCORE;
use crate::analysis::{
    aggregate_daily_totals, analyze_weight_trend, CalorieAnalysis, DailyTotals, HealthOverview, HealthScore,
    ScoreBand, WeightAnalysis,
};
use crate::models::{MealEntry, WeightEntry};
use crate::nutrition::MacroGrams;
use crate::stats::{day_offsets, successive_differences, Trend};

const COLOR_PRIMARY: RGBColor = RGBColor(8, 145, 178); // Teal
const COLOR_ACCENT: RGBColor = RGBColor(249, 115, 22); // Orange
const COLOR_FAT: RGBColor = RGBColor(217, 119, 6); // Amber
const COLOR_LOSS: RGBColor = RGBColor(0, 176, 80); // Green
const COLOR_GAIN: RGBColor = RGBColor(255, 0, 0); // Red
const COLOR_GRAY: RGBColor = RGBColor(128, 128, 128);
const COLOR_LIGHT_GRAY: RGBColor = RGBColor(220, 220, 220);

const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Nothing to chart: {0}")]
    NoData(&'static str),

    #[error("Drawing failed: {0}")]
    Drawing(String),

    #[error("Failed to create image from drawing buffer")]
    Buffer,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ChartResult<T> = Result<T, ChartError>;

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Drawing(e.to_string())
}

/// Draw onto a white RGB canvas and encode the result as PNG bytes
fn render_png<F>(width: u32, height: u32, draw: F) -> ChartResult<Vec<u8>>
where
    F: FnOnce(&Panel<'_>) -> ChartResult<()>,
{
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        draw(&root)?;
        root.present().map_err(draw_err)?;
    }

    let img = RgbImage::from_raw(width, height, buffer).ok_or(ChartError::Buffer)?;
    let mut png = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// Write PNG bytes, creating the parent directory if needed
pub fn save_png(path: &Path, png: &[u8]) -> ChartResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ChartError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, png).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = png.len(), "chart saved");
    Ok(())
}

/// Min/max of `values` with some headroom; never an empty range
fn padded_range(values: impl IntoIterator<Item = f64>, min_pad: f64) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.1).max(min_pad);
    (lo - pad, hi + pad)
}

fn date_label(first: NaiveDate, offset: f64) -> String {
    (first + Duration::days(offset.round() as i64))
        .format("%m/%d")
        .to_string()
}

/// Label for integer positions on an index axis, blank in between
fn index_label(dates: &[NaiveDate], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 0.01 || i < 0.0 {
        return String::new();
    }
    dates
        .get(i as usize)
        .map(|d| d.format("%m/%d").to_string())
        .unwrap_or_default()
}

fn message(area: &Panel<'_>, text: &str) -> ChartResult<()> {
    let (w, h) = area.dim_in_pixel();
    let style = ("sans-serif", 20)
        .into_font()
        .color(&COLOR_GRAY)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(text.to_string(), ((w / 2) as i32, (h / 2) as i32), style))
        .map_err(draw_err)
}

fn titled_message(area: &Panel<'_>, title: &str, text: &str) -> ChartResult<()> {
    let area = area.titled(title, CAPTION_FONT).map_err(draw_err)?;
    message(&area, text)
}

fn weight_line_panel(area: &Panel<'_>, entries: &[WeightEntry], trend: Option<&Trend>) -> ChartResult<()> {
    let first = entries
        .first()
        .map(|e| e.date)
        .ok_or(ChartError::NoData("no weight entries"))?;
    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    let points: Vec<(f64, f64)> = day_offsets(&dates)
        .into_iter()
        .zip(entries.iter().map(|e| e.weight))
        .collect();
    let span = points.last().map(|p| p.0).unwrap_or(0.0).max(1.0);
    let (y_min, y_max) = padded_range(entries.iter().map(|e| e.weight), 0.5);

    let mut chart = ChartBuilder::on(area)
        .caption("Weight over time", CAPTION_FONT)
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..span, y_min..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|x| date_label(first, *x))
        .y_desc("kg")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(points.clone(), COLOR_PRIMARY.stroke_width(2)))
        .map_err(draw_err)?
        .label("Weight")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], COLOR_PRIMARY.stroke_width(2)));

    chart
        .draw_series(points.iter().map(|(x, y)| Circle::new((*x, *y), 4, COLOR_PRIMARY.filled())))
        .map_err(draw_err)?;

    if let Some(trend) = trend {
        chart
            .draw_series(LineSeries::new(
                vec![(0.0, trend.value_at(0.0)), (span, trend.value_at(span))],
                COLOR_GAIN.mix(0.7).stroke_width(2),
            ))
            .map_err(draw_err)?
            .label("Trend")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], COLOR_GAIN.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)
}

fn weight_change_panel(area: &Panel<'_>, entries: &[WeightEntry]) -> ChartResult<()> {
    let weights: Vec<f64> = entries.iter().map(|e| e.weight).collect();
    let changes = successive_differences(&weights);
    // Each change is labelled with the date it was measured on
    let dates: Vec<NaiveDate> = entries.iter().skip(1).map(|e| e.date).collect();
    let (y_min, y_max) = padded_range(changes.iter().copied().chain([0.0]), 0.2);

    let mut chart = ChartBuilder::on(area)
        .caption("Change between measurements", CAPTION_FONT)
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(changes.len() as f64 - 0.5), y_min..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(changes.len().max(2) * 2)
        .x_label_formatter(&|x| index_label(&dates, *x))
        .y_desc("kg")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(changes.iter().enumerate().map(|(i, change)| {
            let color = if *change <= 0.0 { COLOR_LOSS } else { COLOR_GAIN };
            let x = i as f64;
            Rectangle::new([(x - 0.3, 0.0), (x + 0.3, *change)], color.mix(0.7).filled())
        }))
        .map_err(draw_err)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(-0.5, 0.0), (changes.len() as f64 - 0.5, 0.0)],
            BLACK.stroke_width(1),
        )))
        .map_err(draw_err)?;

    Ok(())
}

/// Daily calorie bars with an optional labelled reference line
fn daily_calorie_panel(
    area: &Panel<'_>,
    daily: &[DailyTotals],
    reference: Option<(String, f64)>,
) -> ChartResult<()> {
    let dates: Vec<NaiveDate> = daily.iter().map(|d| d.date).collect();
    let highest = daily
        .iter()
        .map(|d| d.calories as f64)
        .chain(reference.as_ref().map(|r| r.1))
        .fold(0.0, f64::max);
    let y_max = if highest > 0.0 { highest * 1.15 } else { 1.0 };
    let x_max = daily.len() as f64 - 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption("Daily calories", CAPTION_FONT)
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(daily.len().max(2) * 2)
        .x_label_formatter(&|x| index_label(&dates, *x))
        .y_desc("kcal")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(daily.iter().enumerate().map(|(i, d)| {
            let x = i as f64;
            Rectangle::new(
                [(x - 0.35, 0.0), (x + 0.35, d.calories as f64)],
                COLOR_PRIMARY.mix(0.7).filled(),
            )
        }))
        .map_err(draw_err)?;

    if let Some((label, value)) = reference {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(-0.5, value), (x_max, value)],
                COLOR_ACCENT.stroke_width(2),
            )))
            .map_err(draw_err)?
            .label(label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], COLOR_ACCENT.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;
    }

    Ok(())
}

/// Share of calories from each macro
fn macro_pie_panel(area: &Panel<'_>, macros: &MacroGrams) -> ChartResult<()> {
    let area = area.titled("Macro split (calories)", CAPTION_FONT).map_err(draw_err)?;
    let kcal = macros.calories();
    if kcal.total() <= 0.0 {
        return message(&area, "No macro data");
    }

    let (w, h) = area.dim_in_pixel();
    let center = ((w / 2) as i32, (h / 2) as i32);
    let radius = w.min(h) as f64 * 0.35;
    let sizes = [kcal.carbs, kcal.protein, kcal.fat];
    let colors = [COLOR_PRIMARY, COLOR_ACCENT, COLOR_FAT];
    let labels = ["Carbs", "Protein", "Fat"];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 16).into_font().color(&WHITE));
    area.draw(&pie).map_err(draw_err)
}

fn daily_macro_panel(area: &Panel<'_>, daily: &[DailyTotals]) -> ChartResult<()> {
    let dates: Vec<NaiveDate> = daily.iter().map(|d| d.date).collect();
    let highest = daily
        .iter()
        .flat_map(|d| [d.macros.carbs, d.macros.protein, d.macros.fat])
        .fold(0.0, f64::max);
    let y_max = if highest > 0.0 { highest * 1.15 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption("Daily macros", CAPTION_FONT)
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(daily.len() as f64 - 0.5), 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(daily.len().max(2) * 2)
        .x_label_formatter(&|x| index_label(&dates, *x))
        .y_desc("g")
        .draw()
        .map_err(draw_err)?;

    let series: [(&str, RGBColor, f64, fn(&MacroGrams) -> f64); 3] = [
        ("Carbs (g)", COLOR_PRIMARY, -0.25, |m| m.carbs),
        ("Protein (g)", COLOR_ACCENT, 0.0, |m| m.protein),
        ("Fat (g)", COLOR_FAT, 0.25, |m| m.fat),
    ];

    for (label, color, shift, value) in series {
        chart
            .draw_series(daily.iter().enumerate().map(|(i, d)| {
                let x = i as f64 + shift;
                Rectangle::new([(x - 0.12, 0.0), (x + 0.12, value(&d.macros))], color.mix(0.7).filled())
            }))
            .map_err(draw_err)?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)
}

fn calorie_trend_panel(area: &Panel<'_>, analysis: &CalorieAnalysis) -> ChartResult<()> {
    if analysis.daily.len() < 2 {
        return titled_message(area, "Calorie trend", "Not enough days for a trend");
    }

    let dates: Vec<NaiveDate> = analysis.daily.iter().map(|d| d.date).collect();
    let points: Vec<(f64, f64)> = analysis
        .daily
        .iter()
        .enumerate()
        .map(|(i, d)| (i as f64, d.calories as f64))
        .collect();
    let last = (points.len() - 1) as f64;
    let (y_min, y_max) = padded_range(points.iter().map(|p| p.1), 50.0);

    let mut chart = ChartBuilder::on(area)
        .caption("Calorie trend", CAPTION_FONT)
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(-0.25f64..(last + 0.25), y_min..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(points.len() * 2)
        .x_label_formatter(&|x| index_label(&dates, *x))
        .y_desc("kcal")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(points.clone(), COLOR_PRIMARY.stroke_width(2)))
        .map_err(draw_err)?
        .label("Calories")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], COLOR_PRIMARY.stroke_width(2)));

    chart
        .draw_series(points.iter().map(|(x, y)| Circle::new((*x, *y), 4, COLOR_PRIMARY.filled())))
        .map_err(draw_err)?;

    let trend = &analysis.trend;
    chart
        .draw_series(LineSeries::new(
            vec![(0.0, trend.value_at(0.0)), (last, trend.value_at(last))],
            COLOR_ACCENT.mix(0.7).stroke_width(2),
        ))
        .map_err(draw_err)?
        .label("Trend")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], COLOR_ACCENT.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)
}

fn score_color(band: ScoreBand) -> RGBColor {
    match band {
        ScoreBand::Excellent => COLOR_LOSS,
        ScoreBand::Good => COLOR_PRIMARY,
        ScoreBand::Fair => COLOR_ACCENT,
        ScoreBand::NeedsImprovement => COLOR_GAIN,
    }
}

/// Half-circle gauge filled in proportion to the score
fn score_gauge_panel(area: &Panel<'_>, score: &HealthScore) -> ChartResult<()> {
    let area = area.titled("Health score", CAPTION_FONT).map_err(draw_err)?;
    let (w, h) = area.dim_in_pixel();
    let cx = w as f64 / 2.0;
    let cy = h as f64 * 0.7;
    let radius = (w as f64 / 2.0).min(h as f64 * 0.6) * 0.8;

    let arc = |from: f64, to: f64| -> Vec<(i32, i32)> {
        const STEPS: u32 = 90;
        (0..=STEPS)
            .map(|s| {
                let angle = from + (to - from) * s as f64 / STEPS as f64;
                ((cx + radius * angle.cos()) as i32, (cy - radius * angle.sin()) as i32)
            })
            .collect()
    };

    area.draw(&PathElement::new(arc(PI, 0.0), COLOR_LIGHT_GRAY.stroke_width(14)))
        .map_err(draw_err)?;

    let fraction = score.value.min(MAX_SCORE) as f64 / MAX_SCORE as f64;
    let color = score_color(score.band);
    if fraction > 0.0 {
        area.draw(&PathElement::new(arc(PI, PI * (1.0 - fraction)), color.stroke_width(14)))
            .map_err(draw_err)?;
    }

    let centered = Pos::new(HPos::Center, VPos::Center);
    area.draw(&Text::new(
        format!("{}/{}", score.value, MAX_SCORE),
        (cx as i32, (cy - radius * 0.35) as i32),
        ("sans-serif", 40).into_font().color(&color).pos(centered),
    ))
    .map_err(draw_err)?;
    area.draw(&Text::new(
        score.band.label().to_string(),
        (cx as i32, (cy + 25.0) as i32),
        ("sans-serif", 20).into_font().color(&COLOR_GRAY).pos(centered),
    ))
    .map_err(draw_err)?;

    Ok(())
}

/// Weight over time with its trend line, above the change between measurements
pub fn weight_chart(
    entries: &[WeightEntry],
    analysis: &WeightAnalysis,
    width: u32,
    height: u32,
) -> ChartResult<Vec<u8>> {
    if entries.len() < 2 {
        return Err(ChartError::NoData("weight chart needs at least 2 entries"));
    }

    render_png(width, height, |root| {
        let panels = root.split_evenly((2, 1));
        weight_line_panel(&panels[0], entries, Some(&analysis.trend))?;
        weight_change_panel(&panels[1], entries)
    })
}

/// Daily calories, macro split, daily macros and calorie trend in a 2x2 grid
pub fn calorie_chart(analysis: &CalorieAnalysis, width: u32, height: u32) -> ChartResult<Vec<u8>> {
    if analysis.daily.is_empty() {
        return Err(ChartError::NoData("calorie chart needs at least 1 day"));
    }

    render_png(width, height, |root| {
        let panels = root.split_evenly((2, 2));
        let average = (
            format!("Average: {:.0} kcal", analysis.calories.mean),
            analysis.calories.mean,
        );
        daily_calorie_panel(&panels[0], &analysis.daily, Some(average))?;
        macro_pie_panel(&panels[1], &analysis.avg_macros)?;
        daily_macro_panel(&panels[2], &analysis.daily)?;
        calorie_trend_panel(&panels[3], analysis)
    })
}

/// Weight, calories against TDEE, macro split and score gauge in a 2x2 grid
///
/// Panels without enough data show a short message instead.
pub fn health_dashboard(
    weights: &[WeightEntry],
    meals: &[MealEntry],
    overview: &HealthOverview,
    width: u32,
    height: u32,
) -> ChartResult<Vec<u8>> {
    render_png(width, height, |root| {
        let panels = root.split_evenly((2, 2));

        match analyze_weight_trend(weights) {
            Ok(analysis) => weight_line_panel(&panels[0], weights, Some(&analysis.trend))?,
            Err(_) => titled_message(&panels[0], "Weight over time", "Not enough weight data")?,
        }

        match aggregate_daily_totals(meals) {
            Ok(daily) => {
                let tdee = overview
                    .energy
                    .map(|e| (format!("TDEE: {:.0} kcal", e.tdee), e.tdee));
                daily_calorie_panel(&panels[1], &daily, tdee)?
            }
            Err(_) => titled_message(&panels[1], "Daily calories", "No meals logged")?,
        }

        let totals: MacroGrams = meals.iter().map(MealEntry::macros).sum();
        macro_pie_panel(&panels[2], &totals)?;
        score_gauge_panel(&panels[3], &overview.score)
    })
}
