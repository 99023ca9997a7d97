use bevy::app::ScheduleRunnerPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::state::app::StatesPlugin;
use clap::Parser;
use orrery::cli::{self, Args};
use orrery::plugins::simulation::SimulationPlugin;
use orrery::prelude::*;
use std::time::Duration;

/// Number of ticks after which the runner exits
#[derive(Resource, Deref, Copy, Clone, Debug)]
struct TickLimit(u64);

fn main() -> AppExit {
    let args = Args::parse();

    let config = match cli::load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    };

    if args.print_config {
        return match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                println!("{toml_string}");
                AppExit::Success
            }
            Err(e) => {
                eprintln!("Error: failed to serialize configuration: {e}");
                AppExit::error()
            }
        };
    }

    let frame = Duration::from_secs_f64(1.0 / config.simulation.ticks_per_second);
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame)),
        LogPlugin { level, ..default() },
        StatesPlugin,
        SimulationPlugin::with_config(config),
    ));

    if let Some(ticks) = args.ticks {
        if args.paused {
            warn!("Starting paused: the tick limit of {ticks} is only reached once resumed");
        }
        app.insert_resource(TickLimit(ticks));
        app.add_systems(Update, exit_after_tick_limit);
    }

    app.add_systems(Last, log_summary_on_exit);

    app.run()
}

fn exit_after_tick_limit(
    system: Res<StarSystem>,
    limit: Res<TickLimit>,
    mut exit: EventWriter<AppExit>,
) {
    if system.ticks() >= **limit {
        exit.write(AppExit::Success);
    }
}

fn log_summary_on_exit(mut exits: EventReader<AppExit>, system: Res<StarSystem>) {
    if exits.read().next().is_none() {
        return;
    }

    info!(
        "Stopped after {} ticks with {} planet(s) left",
        system.ticks(),
        system.planet_count()
    );
    for (id, body) in system.iter() {
        debug!(
            "{} {id} at ({:.1}, {:.1}): {body}",
            body.kind().label(),
            body.position.x,
            body.position.y
        );
    }
}
