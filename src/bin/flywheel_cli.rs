use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;

use flywheel_sim::{resample_at_interval, SimulationParameters, TrajectorySolver};

#[derive(Parser)]
#[command(name = "flywheel")]
#[command(version = "0.1.0")]
#[command(about = "Flight calculator for flywheel-launched FTC game balls", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Preset {
    /// Competition shot: 628 rad/s, 45 deg, robot-mounted launcher
    Default,
    /// Gentle lob: 400 rad/s, 30 deg, from 1 m
    Lob,
    /// High arc: 800 rad/s, 60 deg, from 2 m
    HighArc,
}

impl Preset {
    fn parameters(self) -> SimulationParameters {
        match self {
            Preset::Default => SimulationParameters::default(),
            Preset::Lob => SimulationParameters {
                wheel_speed: 400.0,
                launch_angle_deg: 30.0,
                initial_height: 1.0,
                wheel_mass: None,
            },
            Preset::HighArc => SimulationParameters {
                wheel_speed: 800.0,
                launch_angle_deg: 60.0,
                initial_height: 2.0,
                wheel_mass: None,
            },
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Preview ball exit speed and spin for a wheel speed
    ExitConditions {
        /// Wheel angular velocity (rad/s)
        #[arg(short = 'w', long, default_value = "628.0")]
        wheel_speed: f64,

        /// Wheel mass override (kg)
        #[arg(long)]
        wheel_mass: Option<f64>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Compute a full trajectory
    Trajectory {
        /// Wheel angular velocity (rad/s)
        #[arg(short = 'w', long, default_value = "628.0")]
        wheel_speed: f64,

        /// Launch angle (degrees above horizontal)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Launch height above the floor (m)
        #[arg(long, default_value = "0.17272")]
        height: f64,

        /// Wheel mass override (kg)
        #[arg(long)]
        wheel_mass: Option<f64>,

        /// Integration time step (s)
        #[arg(long, default_value = "0.01")]
        time_step: f64,

        /// Flight time ceiling (s)
        #[arg(long, default_value = "5.0")]
        max_time: f64,

        /// Load a named scenario preset (overrides wheel speed, angle, height)
        #[arg(long)]
        preset: Option<Preset>,

        /// Resample output for playback at this frame interval (s)
        #[arg(long)]
        playback_interval: Option<f64>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Full output (show all trajectory points)
        #[arg(long)]
        full: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::ExitConditions { wheel_speed, wheel_mass, output } => {
            run_exit_conditions(wheel_speed, wheel_mass, output)
        }
        Commands::Trajectory {
            wheel_speed,
            angle,
            height,
            wheel_mass,
            time_step,
            max_time,
            preset,
            playback_interval,
            output,
            full,
        } => {
            let params = match preset {
                Some(p) => p.parameters(),
                None => SimulationParameters {
                    wheel_speed,
                    launch_angle_deg: angle,
                    initial_height: height,
                    wheel_mass,
                },
            };
            run_trajectory(params, time_step, max_time, playback_interval, output, full)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_exit_conditions(
    wheel_speed: f64,
    wheel_mass: Option<f64>,
    output: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let params = SimulationParameters { wheel_speed, wheel_mass, ..Default::default() };
    let report = TrajectorySolver::new(params).exit_conditions()?;

    match output {
        OutputFormat::Table => {
            println!("Exit Conditions");
            println!("  Wheel speed:  {:8.1} rad/s ({:.0} RPM)", report.wheel_speed_rads, report.wheel_speed_rpm);
            println!("  Exit speed:   {:8.2} m/s", report.exit_speed_mps);
            println!("  Exit spin:    {:8.1} rad/s ({:.0} RPM)", report.exit_spin_rads, report.exit_spin_rpm);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            println!("wheel_speed_rads,exit_speed_mps,exit_spin_rads");
            println!(
                "{:.4},{:.4},{:.4}",
                report.wheel_speed_rads, report.exit_speed_mps, report.exit_spin_rads
            );
        }
    }

    Ok(())
}

fn run_trajectory(
    params: SimulationParameters,
    time_step: f64,
    max_time: f64,
    playback_interval: Option<f64>,
    output: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    let mut solver = TrajectorySolver::new(params);
    solver.set_time_step(time_step);
    solver.set_max_time(max_time);

    let mut result = solver.solve()?;

    if let Some(interval) = playback_interval {
        if interval <= 0.0 {
            return Err("playback interval must be positive".into());
        }
        result.points = resample_at_interval(&result.points, interval);
    }

    match output {
        OutputFormat::Table => {
            let s = &result.summary;
            println!("Launch");
            println!("  Wheel speed:    {:8.1} rad/s", params.wheel_speed);
            println!("  Launch angle:   {:8.1} deg", params.launch_angle_deg);
            println!("  Launch height:  {:8.3} m", params.initial_height);
            println!("  Exit speed:     {:8.2} m/s", result.exit_speed);
            println!("  Exit spin:      {:8.1} rad/s", result.exit_spin);
            println!();
            println!("Flight");
            println!("  Range:          {:8.2} m", s.max_range);
            println!("  Max height:     {:8.2} m", s.max_height);
            println!("  Max speed:      {:8.2} m/s", s.max_speed);
            println!("  Time of flight: {:8.2} s", s.time_of_flight);
            println!("  Impact speed:   {:8.2} m/s", s.impact_speed);
            println!("  Impact energy:  {:8.3} J", s.impact_energy);

            if full {
                println!();
                println!("  Time (s) |   X (m)  |   Y (m)  | Speed (m/s) | Drag (N) | Magnus (N)");
                println!("  ---------|----------|----------|-------------|----------|-----------");
                for p in &result.points {
                    println!(
                        "  {:8.3} | {:8.3} | {:8.3} | {:11.3} | {:8.4} | {:9.4}",
                        p.t, p.x, p.y, p.speed, p.drag_force, p.magnus_force
                    );
                }
            }
        }
        OutputFormat::Json => {
            if full {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&result.summary)?);
            }
        }
        OutputFormat::Csv => {
            println!("t,x,y,vx,vy,speed,drag_force,magnus_force");
            for p in &result.points {
                println!(
                    "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.6},{:.6}",
                    p.t, p.x, p.y, p.vx, p.vy, p.speed, p.drag_force, p.magnus_force
                );
            }
        }
    }

    Ok(())
}
