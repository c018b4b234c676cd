use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;

use lapring_engine::compose::{ArcFill, FullLapFill};
use lapring_engine::logging::{init_logging, LoggingConfig};
use lapring_engine::paint::palette;
use lapring_engine::{compose, Color, ColorConfig, ComposeOptions, LapPolicy, Paint, RenderParams};

/// Prints the render parameters a ring would be drawn with.
#[derive(Parser, Debug)]
#[command(name = "lapring-studio")]
#[command(version, about = "Preview lapring render parameters", long_about = None)]
struct Cli {
    /// Explicit progress values (comma separated). Overrides the range.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<f32>,
    /// Range start
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    from: f32,
    /// Range end (inclusive)
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    to: f32,
    /// Range step
    #[arg(long, default_value_t = 0.25)]
    step: f32,
    /// Lap-complete threshold (1.0 strict, 0.98 near)
    #[arg(long, default_value_t = 1.0)]
    threshold: f32,
    /// Color configuration
    #[arg(long, value_enum, default_value_t = PaletteArg::Surf)]
    palette: PaletteArg,
    /// Hex stops for `--palette custom`
    #[arg(long, value_delimiter = ',')]
    stops: Vec<String>,
    /// Hex color for `--palette solid`
    #[arg(long, default_value = "#00FF00")]
    color: String,
    /// Tip width in degrees
    #[arg(long, default_value_t = lapring_engine::compose::DEFAULT_TIP_WIDTH_DEGREES)]
    tip_width: f32,
    /// Brightness added to the tip color
    #[arg(long, default_value_t = lapring_engine::compose::DEFAULT_LIGHTEN_AMOUNT)]
    lighten: f32,
    #[arg(long)]
    no_glow: bool,
    #[arg(long)]
    no_lighter_tail: bool,
    /// Fill arc and completed ring with a full-turn gradient sweep
    #[arg(long)]
    sweep: bool,
    /// Emit one JSON object per line
    #[arg(long)]
    json: bool,
    /// Log filter (env_logger syntax)
    #[arg(long)]
    log: Option<String>,
}

/// Upper bound on rows generated from `--from/--to/--step`.
const MAX_SAMPLES: usize = 100_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum PaletteArg {
    Solid,
    Surf,
    Ramp,
    Custom,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let config = color_config(&cli)?;
    let options = compose_options(&cli);
    let values = progress_values(&cli)?;

    log::info!(
        "previewing {} value(s), threshold {}, palette {:?}",
        values.len(),
        options.lap_policy.threshold(),
        cli.palette
    );

    if !cli.json {
        println!(
            "{:>8}  {:>8}  {:>4}  {:>4}  {:>9}  {:>9}  {:<9}  {:<9}  {:<9}",
            "progress", "fraction", "laps", "lap", "tip_from", "tip_deg", "arc", "tip", "ring"
        );
    }

    for progress in values {
        let params = compose(progress, &config, &options);
        if cli.json {
            println!("{}", to_json(&params));
        } else {
            println!("{}", to_row(&params));
        }
    }

    Ok(())
}

fn color_config(cli: &Cli) -> Result<ColorConfig> {
    Ok(match cli.palette {
        PaletteArg::Surf => ColorConfig::surf(),
        PaletteArg::Ramp => ColorConfig::ProceduralRamp,
        PaletteArg::Solid => ColorConfig::Solid(
            Color::from_hex(&cli.color).with_context(|| format!("--color {}", cli.color))?,
        ),
        PaletteArg::Custom => {
            if cli.stops.is_empty() {
                log::warn!("--palette custom without --stops; the fallback color will be used");
            }
            let colors = cli
                .stops
                .iter()
                .map(|s| Color::from_hex(s).with_context(|| format!("--stops entry {s}")))
                .collect::<Result<Vec<_>>>()?;
            ColorConfig::gradient(colors)
        }
    })
}

fn compose_options(cli: &Cli) -> ComposeOptions {
    let (arc_fill, full_lap_fill) = if cli.sweep {
        (ArcFill::Sweep, FullLapFill::Sweep)
    } else {
        (ArcFill::Resolved, FullLapFill::EndColor)
    };

    ComposeOptions::new()
        .lap_policy(LapPolicy::new(cli.threshold))
        .tip_width_degrees(cli.tip_width)
        .lighten_amount(cli.lighten)
        .enable_glow(!cli.no_glow)
        .enable_lighter_tail(!cli.no_lighter_tail)
        .track_color(palette::TRACK_GRAY)
        .arc_fill(arc_fill)
        .full_lap_fill(full_lap_fill)
}

fn progress_values(cli: &Cli) -> Result<Vec<f32>> {
    if !cli.values.is_empty() {
        return Ok(cli.values.clone());
    }
    if !(cli.step.is_finite() && cli.step > 0.0) {
        bail!("--step must be a positive number, got {}", cli.step);
    }
    if !(cli.from.is_finite() && cli.to.is_finite()) || cli.to < cli.from {
        bail!("empty range {}..={}", cli.from, cli.to);
    }

    // Index-based so the float step does not accumulate error.
    let steps = ((cli.to - cli.from) / cli.step + 1e-4).floor();
    if !steps.is_finite() || steps >= MAX_SAMPLES as f32 {
        bail!(
            "range {}..={} with step {} exceeds {MAX_SAMPLES} samples",
            cli.from,
            cli.to,
            cli.step
        );
    }
    let count = steps as usize + 1;
    Ok((0..count).map(|i| cli.from + i as f32 * cli.step).collect())
}

fn hex(c: Color) -> String {
    let [r, g, b, a] = c.clamped().to_array().map(|v| (v * 255.0).round() as u8);
    if a == 255 { format!("#{r:02X}{g:02X}{b:02X}") } else { format!("#{r:02X}{g:02X}{b:02X}{a:02X}") }
}

fn paint_label(p: &Paint) -> String {
    match p {
        Paint::Solid(c) => hex(*c),
        Paint::Conic(g) => format!("sweep/{}", g.stops.len()),
    }
}

fn paint_json(p: &Paint) -> serde_json::Value {
    match p {
        Paint::Solid(c) => json!({ "solid": hex(*c) }),
        Paint::Conic(g) => {
            let stops: Vec<serde_json::Value> = g
                .stops
                .positioned()
                .iter()
                .map(|s| json!({ "t": s.t, "color": hex(s.color) }))
                .collect();
            json!({
                "conic": {
                    "start_degrees": g.start_degrees,
                    "end_degrees": g.end_degrees,
                    "stops": stops,
                }
            })
        }
    }
}

fn to_row(p: &RenderParams) -> String {
    format!(
        "{:>8.3}  {:>8.4}  {:>4}  {:>4}  {:>9.5}  {:>9.2}  {:<9}  {:<9}  {:<9}",
        p.lap.progress,
        p.primary_arc_fraction(),
        p.lap.completed_laps,
        if p.lap.lap_complete { "yes" } else { "no" },
        p.tip.start_fraction,
        p.tip.angle_degrees(),
        paint_label(&p.primary_arc.paint),
        hex(p.tip.color),
        p.full_lap.as_ref().map(paint_label).unwrap_or_else(|| "-".to_owned()),
    )
}

fn to_json(p: &RenderParams) -> serde_json::Value {
    json!({
        "progress": p.lap.progress,
        "fraction_in_lap": p.lap.fraction_in_lap,
        "completed_laps": p.lap.completed_laps,
        "lap_complete": p.lap.lap_complete,
        "rotation_degrees": p.rotation_degrees,
        "track": { "color": hex(p.track.color), "opacity": p.track.opacity },
        "full_lap": p.full_lap.as_ref().map(paint_json),
        "phase": format!("{:?}", p.lap.phase()),
        "primary_arc": {
            "start_fraction": p.primary_arc.start_fraction,
            "end_fraction": p.primary_arc.end_fraction,
            "start_degrees": p.primary_arc.start_degrees(),
            "sweep_degrees": p.primary_arc.sweep_degrees(),
            "paint": paint_json(&p.primary_arc.paint),
            "edge_color": hex(p.primary_arc.paint.color_at(p.primary_arc.end_fraction)),
        },
        "tip": {
            "start_fraction": p.tip.start_fraction,
            "end_fraction": p.tip.end_fraction,
            "angle_degrees": p.tip.angle_degrees(),
            "empty": p.tip.is_empty(),
            "color": hex(p.tip.color),
            "glow": p.tip.glow.map(hex),
        },
    })
}
