//! Runs an offset session against an in-memory document with scripted picks.
//!
//! ```text
//! cargo run --example scripted_session
//! RUST_LOG=gridoffset=debug cargo run --example scripted_session
//! ```

use std::collections::VecDeque;
use std::f64::consts::PI;

use gridoffset::error::InteractionError;
use gridoffset::geometry::{Arc, LineSegment, SourceCurve};
use gridoffset::interaction::{
    ConfirmationInput, ConfirmationSurface, GridDocument, GridId, GridStore, OffsetSession, Proposal,
    Selection, SelectionFilter,
};
use gridoffset::math::Point3;
use gridoffset::units::LengthUnit;
use gridoffset::{OffsetSettings, Result};

struct Script {
    picks: VecDeque<(GridId, Point3)>,
    point: Option<Point3>,
}

impl Selection<GridId> for Script {
    fn pick_grid(&mut self, _filter: &dyn SelectionFilter) -> Result<Option<GridId>> {
        Ok(self.picks.pop_front().map(|(id, point)| {
            self.point = Some(point);
            id
        }))
    }

    fn pick_point(&mut self) -> Result<Point3> {
        self.point.take().ok_or_else(|| InteractionError::Cancelled.into())
    }
}

/// Accepts every proposal, typing a round distance for arcs.
struct AcceptAll;

impl ConfirmationSurface for AcceptAll {
    fn confirm(&mut self, proposal: &Proposal) -> Result<Option<ConfirmationInput>> {
        println!(
            "confirm {} grid {:?} at {} {:?}",
            proposal.kind, proposal.name, proposal.distance, proposal.unit
        );
        let distance = if proposal.kind == "arc" {
            "2400".to_owned()
        } else {
            proposal.distance.clone()
        };
        Ok(Some(ConfirmationInput {
            name: proposal.name.clone(),
            distance,
        }))
    }
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("gridoffset=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = OffsetSettings::with_unit(LengthUnit::Millimeters);
    let mut doc = GridDocument::new(settings.grid_category.clone());
    let a = doc.add_grid(
        "A",
        LineSegment::new(Point3::origin(), Point3::new(0.0, 12_000.0, 0.0))?,
    );
    let r = doc.add_grid("1", Arc::from_angles(Point3::origin(), 9_000.0, 0.0, PI / 3.0)?);

    let mut selection = Script {
        picks: VecDeque::from([
            (a, Point3::new(3_600.0, 500.0, 0.0)),
            (r, Point3::new(8_000.0, 3_000.0, 0.0)),
            (r, Point3::origin()),
        ]),
        point: None,
    };
    let mut reporter = |message: &str| eprintln!("offset failed: {message}");

    let report = OffsetSession::new(settings).run(&mut doc, &mut selection, &mut AcceptAll, &mut reporter);

    for id in &report.created {
        let grid = doc.grid(*id)?;
        match &grid.curve {
            SourceCurve::Line(line) => println!("{}: line {} -> {}", grid.name, line.start(), line.end()),
            SourceCurve::Arc(arc) => println!(
                "{}: arc r={} [{:.3}, {:.3}]",
                grid.name,
                arc.radius(),
                arc.start_angle(),
                arc.end_angle()
            ),
        }
    }
    println!(
        "{} created, {} cancelled, {} failed",
        report.created.len(),
        report.cancelled,
        report.failures.len()
    );
    Ok(())
}
