//! Tiling estimate for an L-shaped room, driven through the command API.
//!
//! Usage:
//! ```text
//! cargo run --example estimate                      # 60 x 60 cm tiles, 3 mm joint
//! cargo run --example estimate -- 30 60 2           # tile width, height (cm), joint (mm)
//! cargo run --example estimate -- 0 60              # rejected: tile width must be positive
//! RUST_LOG=tileplan=debug cargo run --example estimate
//! ```

use tileplan::config::{DEFAULT_JOINT, DEFAULT_SCALE};
use tileplan::math::Point2;
use tileplan::{Command, GridConfig, Mode, Session};
use tracing::info;

/// L-shaped room, 400 x 300 cm with a 150 x 120 cm notch, at 3 units per cm.
const ROOM_CM: [(f64, f64); 6] = [
    (0.0, 0.0),
    (400.0, 0.0),
    (400.0, 180.0),
    (250.0, 180.0),
    (250.0, 300.0),
    (0.0, 300.0),
];

fn main() -> tileplan::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("estimate=info".parse().unwrap_or_default())
        .add_directive("tileplan=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<f64> = std::env::args()
        .skip(1)
        .map(|a| a.parse().unwrap_or(f64::NAN))
        .collect();
    let config = match args.as_slice() {
        [] => GridConfig::default(),
        [width, height, joint_mm, ..] => {
            GridConfig::try_new(*width, *height, joint_mm / 10.0, 0.0, 0.0, DEFAULT_SCALE)?
        }
        [width, height] => {
            GridConfig::try_new(*width, *height, DEFAULT_JOINT, 0.0, 0.0, DEFAULT_SCALE)?
        }
        [side] => GridConfig::try_new(*side, *side, DEFAULT_JOINT, 0.0, 0.0, DEFAULT_SCALE)?,
    };

    let mut session = Session::with_config(config);
    let scale = session.config().scale;

    for &(x, y) in ROOM_CM.iter().chain(std::iter::once(&ROOM_CM[0])) {
        let point = Point2::new(x * scale, y * scale);
        session.apply(Command::PointerMove {
            point,
            orthogonal: false,
        });
        session.apply(Command::PointerUp {
            point,
            orthogonal: false,
        });
    }
    session.apply(Command::SetMode(Mode::Edit));

    let config = session.config();
    info!(
        tile_width = config.tile_width,
        tile_height = config.tile_height,
        joint_cm = config.joint,
        closed = session.outline().is_closed(),
        "room drawn"
    );

    let layout = session.layout();
    for label in &layout.edge_labels {
        info!(length_cm = label.length_cm, "wall");
    }
    let stats = layout.stats;
    info!(
        area_m2 = format!("{:.2}", stats.area_m2),
        with_margin_m2 = format!("{:.2}", stats.area_with_margin_m2),
        full = stats.full_tiles,
        cut = stats.cut_tiles,
        total = stats.total_tiles,
        "estimate"
    );

    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!(%err, "could not serialize stats"),
    }
    Ok(())
}
