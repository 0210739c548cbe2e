//! Headless host for the range slider.
//!
//! Lays the control out, replays a scripted drag of both handles and prints
//! every frame the host would have drawn.

use clap::Parser;
use tessera_range_slider::{
    AxisConstraint, DrawCommand, HandleKind, PointerEvent, RangeSlider, RangeSliderStyle,
    RecordingSurface, SizeConstraints, StyleError, Vec2,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "range_slider_demo")]
#[command(version, about = "Replay a scripted gesture on a range slider", long_about = None)]
struct Cli {
    /// Display scale factor used to resolve dp dimensions
    #[arg(short, long, default_value_t = 2.0)]
    scale: f64,
    /// Slider width in physical pixels; 0 uses the style's default width
    #[arg(short, long, default_value_t = 720)]
    width: i32,
    /// Lower bound of the value range
    #[arg(long, default_value_t = 0)]
    min: i32,
    /// Upper bound of the value range
    #[arg(long, default_value_t = 100)]
    max: i32,
    /// Only print the frame after the last event
    #[arg(long)]
    last_frame_only: bool,
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Grabs `handle` at its center, walks its left edge to `to_x` in `steps`
/// moves and releases it.
fn drag(slider: &RangeSlider, handle: HandleKind, to_x: f32, steps: u16) -> Vec<PointerEvent> {
    let rect = slider.geometry().handle_rect(handle);
    let grab = rect.origin + rect.size / 2.0;
    let from_x = rect.origin.x;

    let mut events = vec![PointerEvent::down(grab.x, grab.y)];
    events.extend((1..=steps).map(|step| {
        let t = f32::from(step) / f32::from(steps);
        PointerEvent::moved(from_x + (to_x - from_x) * t, grab.y)
    }));
    events.push(PointerEvent::up(to_x, grab.y));
    events
}

fn script(slider: &RangeSlider) -> Vec<PointerEvent> {
    let geometry = slider.geometry();
    let span = geometry.span();
    let quarter = geometry.start_left_x + span.width() * 0.25;
    let three_quarters = geometry.start_left_x + span.width() * 0.75;

    let mut events = drag(slider, HandleKind::Left, quarter, 4);
    // Scripted against the initial layout; the right handle has not moved yet.
    events.extend(drag(slider, HandleKind::Right, three_quarters, 4));

    // Pushing the right handle onto the left one is rejected.
    let grab = Vec2::new(
        three_quarters + geometry.handle_width() / 2.0,
        geometry.track_center_y(),
    );
    events.push(PointerEvent::down(grab.x, grab.y));
    events.push(PointerEvent::moved(quarter, grab.y));
    events.push(PointerEvent::cancel());
    events
}

fn print_frame(label: &str, frame: &RecordingSurface) {
    println!("── {label}");
    for command in frame.commands() {
        match command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => println!(
                "  circle  ({:.1}, {:.1}) r={radius:.1} {:?}",
                center.x,
                center.y,
                color.to_array()
            ),
            DrawCommand::Rect { rect, color } => println!(
                "  rect    [{:.1}, {:.1}, {:.1}, {:.1}] {:?}",
                rect.left,
                rect.top,
                rect.right,
                rect.bottom,
                color.to_array()
            ),
            DrawCommand::Image {
                image,
                origin,
                effect,
            } => println!("  image   {image:?} at {origin:.1} {effect:?}"),
        }
    }
}

fn main() -> Result<(), StyleError> {
    init_tracing();
    let cli = Cli::parse();

    let style = RangeSliderStyle::default().resolve(cli.scale)?;
    let mut slider = RangeSlider::new(style);
    slider.set_min_value(cli.min);
    slider.set_max_value(cli.max);
    slider.set_on_change(|left, right| info!(left, right, "range changed"));

    let width = match cli.width {
        0 => AxisConstraint::Unconstrained,
        width => AxisConstraint::Exact(width.into()),
    };
    let constraints = SizeConstraints::new(width, AxisConstraint::Unconstrained);
    let size = slider.preferred_size(constraints);
    slider.resize_with_default_padding(size);
    info!(
        width = size.width.raw(),
        height = size.height.raw(),
        values = ?slider.values(),
        "slider laid out"
    );
    if slider.geometry().span().width() <= 0.0 {
        warn!("track has no draggable range at this size; handles will not move");
    }

    let mut frame = RecordingSurface::new();
    if !cli.last_frame_only {
        slider.render(&mut frame);
        print_frame("initial", &frame);
    }

    for event in script(&slider) {
        let response = slider.handle_pointer_event(event);
        if response.redraw_requested && !cli.last_frame_only {
            frame.clear();
            slider.render(&mut frame);
            let label = format!("{:?} at {:.1}", event.kind, event.position);
            print_frame(&label, &frame);
        }
    }

    frame.clear();
    slider.render(&mut frame);
    print_frame("final", &frame);
    let (left, right) = slider.values();
    println!("selected range: {left}..={right}");
    Ok(())
}
