use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pattern_demos_rs::cli::{Cli, Command, MazeArgs, PlanArgs};
use pattern_demos_rs::error::Result;
use pattern_demos_rs::interface::{collect_plan_request, display_maze_report, display_plan};
use pattern_demos_rs::maze::MazeBuilder;
use pattern_demos_rs::planner::{
    load_plan_request, save_plan, NutritionPlanDirector, PlanRequest, WeightLossPlanBuilder,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(&args),
        Command::Maze(args) => cmd_maze(&args),
    }
}

/// Build a nutrition plan through the director and print it.
fn cmd_plan(args: &PlanArgs) -> Result<()> {
    let mut request = match &args.file {
        Some(path) => load_plan_request(path)?,
        None => PlanRequest::demo(),
    };

    if args.interactive {
        request = collect_plan_request(&request)?;
        println!();
    }

    let mut director = NutritionPlanDirector::new();
    director.set_builder(Box::new(request.apply(WeightLossPlanBuilder::new())));
    let plan = director.create_nutrition_plan()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }

    if let Some(path) = &args.save {
        save_plan(path, &plan)?;
        info!(path = %path.display(), "Plan saved");
    }

    Ok(())
}

/// Build rooms 1..=N, add the requested doors, and report every room.
fn cmd_maze(args: &MazeArgs) -> Result<()> {
    let mut builder = MazeBuilder::new();
    for id in 1..=args.rooms {
        builder.build_room(id);
    }
    for &(first, second) in &args.doors {
        builder.build_door_wall(first, second)?;
    }

    let maze = builder.into_maze();
    info!(rooms = maze.len(), walls = maze.wall_count(), "Maze built");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&maze)?);
    } else {
        display_maze_report(&maze, 1..=args.rooms)?;
    }

    for &(room, direction) in &args.entries {
        println!("Room {} {}: {}", room, direction, maze.enter(room, direction)?);
    }

    Ok(())
}
