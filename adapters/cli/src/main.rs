#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that replays scripted floor plan sessions.

mod session;
mod studio;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use floorplan_core::{Plot, Room, RoomId};
use floorplan_rendering::DrawCommand;
use floorplan_world::query;
use glam::Vec2;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{session::SessionConfig, studio::Studio};

#[derive(Debug, Parser)]
#[command(
    name = "floorplan",
    about = "Replays a scripted floor plan session and reports the resulting layout",
    version
)]
struct Cli {
    /// TOML session file describing the plot, initial rooms and input events.
    session: PathBuf,

    /// Output format for the final layout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Include the draw commands of the final frame in JSON output.
    #[arg(long)]
    frame: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Summary,
    Json,
}

#[derive(Debug, Serialize)]
struct LayoutReport<'a> {
    plot: Plot,
    zoom: f32,
    offset: Vec2,
    selection: Option<RoomId>,
    compliance_score: Option<f32>,
    rooms: &'a [Room],
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<Vec<DrawCommand>>,
}

/// Entry point for the floor plan command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let session = SessionConfig::load(&cli.session)?;
    let mut studio = Studio::new(session.plot()?, session.canvas()?);

    for kind in &session.rooms {
        let _ = studio.add_room(*kind);
    }
    for event in &session.events {
        studio.dispatch(event);
    }
    info!(
        rooms = query::rooms(studio.world()).len(),
        events = session.events.len(),
        "session replayed"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Json => write_json(&mut out, &studio, cli.frame)?,
        OutputFormat::Summary => write_summary(&mut out, &studio)?,
    }
    out.flush().context("failed to flush output")
}

fn write_json(out: &mut impl Write, studio: &Studio, include_frame: bool) -> Result<()> {
    let world = studio.world();
    let view = query::view(world);
    let report = LayoutReport {
        plot: query::plot(world),
        zoom: view.zoom(),
        offset: view.offset(),
        selection: studio.selection(),
        compliance_score: query::compliance_score(world),
        rooms: query::rooms(world),
        frame: include_frame.then(|| studio.frame()),
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("failed to encode layout")?;
    writeln!(out).context("failed to write output")
}

fn write_summary(out: &mut impl Write, studio: &Studio) -> Result<()> {
    let world = studio.world();
    let plot = query::plot(world);
    let stats = query::stats(world);

    writeln!(
        out,
        "plot {} × {}, zoom {}%, {} rooms, {} sq ft, {} compliant",
        plot.width(),
        plot.height(),
        query::view(world).zoom_percent(),
        stats.room_count,
        stats.total_area,
        stats.compliant_rooms,
    )?;
    if let Some(score) = query::compliance_score(world) {
        writeln!(out, "compliance score {score}")?;
    }
    for room in query::rooms(world) {
        let marker = if studio.selection() == Some(room.id) {
            '*'
        } else {
            ' '
        };
        writeln!(
            out,
            "{marker} #{} {} at ({}, {}) {}' × {}'{}",
            room.id.get(),
            room.name,
            room.rect.x(),
            room.rect.y(),
            room.rect.width(),
            room.rect.height(),
            if room.vastu_compliant { " [ok]" } else { "" },
        )?;
    }
    Ok(())
}
