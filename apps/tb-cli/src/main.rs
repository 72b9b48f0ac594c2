use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tb_app::{
    AppError, AppResult, RoomOutcome, RunOptions, project_service, render_json, render_text,
    solve_form, solve_project,
};

#[derive(Parser)]
#[command(name = "tb-cli")]
#[command(about = "ThermoBalance CLI - steady-state room heat balance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project file (YAML, or JSON by extension)
        project_path: PathBuf,
    },
    /// List rooms in a project
    Rooms {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Solve the heat balance of the rooms in a project
    Solve {
        /// Path to the project file
        project_path: PathBuf,
        /// Solve only this room
        #[arg(long)]
        room: Option<String>,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Solve one room given as form fields, e.g. `surfaces=1,10,30 room_temp=20`
    Calc {
        /// key=value pairs; `surfaces` may repeat
        #[arg(required = true)]
        fields: Vec<String>,
        #[command(flatten)]
        solver: SolverArgs,
    },
}

#[derive(Args)]
struct SolverArgs {
    /// Residual tolerance in watts
    #[arg(long)]
    tolerance: Option<f64>,
    /// Iteration cap
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl SolverArgs {
    fn options(&self) -> RunOptions {
        RunOptions {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Rooms { project_path } => cmd_rooms(&project_path),
        Commands::Solve {
            project_path,
            room,
            solver,
        } => cmd_solve(&project_path, room.as_deref(), &solver),
        Commands::Calc { fields, solver } => cmd_calc(&fields, &solver),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_rooms(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let rooms = project_service::list_rooms(&project);

    if rooms.is_empty() {
        println!("No rooms found in project");
    } else {
        println!("Rooms in project '{}':", project.name);
        for room in rooms {
            println!(
                "  {} - {} ({} surfaces, {:.2} m² envelope)",
                room.id, room.name, room.surface_count, room.envelope_area_m2
            );
        }
    }
    Ok(())
}

fn cmd_solve(project_path: &Path, room: Option<&str>, args: &SolverArgs) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let outcomes = solve_project(&project, room, &args.options())?;
    print_outcomes(&outcomes, args.json)?;

    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    if failed > 0 {
        return Err(AppError::Solver(format!(
            "{} of {} room(s) failed",
            failed,
            outcomes.len()
        )));
    }
    Ok(())
}

fn cmd_calc(fields: &[String], args: &SolverArgs) -> AppResult<()> {
    let pairs = fields
        .iter()
        .map(|f| tb_project::form::split_pair(f))
        .collect::<Result<Vec<_>, _>>()?;
    let report = solve_form(pairs, &args.options())?;
    print_outcomes(&[RoomOutcome::Solved(report)], args.json)
}

fn print_outcomes(outcomes: &[RoomOutcome], json: bool) -> AppResult<()> {
    if json {
        println!("{}", render_json(outcomes)?);
    } else {
        for outcome in outcomes {
            print!("{}", render_text(outcome));
        }
    }
    Ok(())
}
