use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueHint};
use tracing::{debug, info};

use u_workout::export;
use u_workout::logging;
use u_workout::models::{
    Category, Equipment, ExerciseCatalog, FitnessLevel, Goal, UserProfile, WeeklyPlan,
};
use u_workout::planner::{PlanSummary, WorkoutPlanner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Personalized weekly workout plan generator", long_about = None)]
struct Cli {
    /// Profile JSON file (replaces the individual profile flags)
    #[arg(long, value_hint = ValueHint::FilePath)]
    profile: Option<PathBuf>,

    /// Display name
    #[arg(long, default_value = "")]
    name: String,

    /// Age in years
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(10..=80))]
    age: u32,

    /// Body weight in kg (30-150)
    #[arg(long, default_value_t = 70.0)]
    weight: f64,

    /// Height in cm (120-220)
    #[arg(long, default_value_t = 170.0)]
    height: f64,

    /// Goal: weight-loss, muscle-gain, fitness-improvement, health-maintenance, stress-relief
    #[arg(long, default_value = "health-maintenance")]
    goal: Goal,

    /// Experience: novice, beginner, intermediate, advanced
    #[arg(long, default_value = "beginner")]
    level: FitnessLevel,

    /// Minutes available per day
    #[arg(long, default_value_t = 45, value_parser = clap::value_parser!(u32).range(15..=120))]
    minutes: u32,

    /// Training days per week
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=7))]
    days: u32,

    /// Owned equipment, comma separated (e.g. dumbbell,yoga-mat)
    #[arg(long, value_delimiter = ',')]
    equipment: Vec<Equipment>,

    /// Exercise catalog JSON file (defaults to the built-in catalog)
    #[arg(long, value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,

    /// Write the plan as CSV (`-` for stdout)
    #[arg(long, value_hint = ValueHint::FilePath)]
    csv: Option<PathBuf>,

    /// Print the plan as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn load_profile(&self) -> Result<UserProfile> {
        let profile = match &self.profile {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading profile {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("parsing profile {}", path.display()))?
            }
            None => self.equipment.iter().cloned().fold(
                UserProfile::new(self.goal, self.minutes, self.days)
                    .with_name(self.name.clone())
                    .with_body(self.age, self.weight, self.height)
                    .with_fitness_level(self.level),
                UserProfile::with_equipment,
            ),
        };
        check_ranges(&profile)?;
        Ok(profile)
    }

    fn check_outputs(&self) -> Result<()> {
        let csv_to_stdout = self.csv.as_ref().is_some_and(|p| p.as_os_str() == "-");
        ensure!(
            !(self.json && csv_to_stdout),
            "--json and --csv - cannot both write to stdout"
        );
        Ok(())
    }

    fn load_catalog(&self) -> Result<ExerciseCatalog> {
        match &self.catalog {
            Some(path) => ExerciseCatalog::from_path(path)
                .with_context(|| format!("loading catalog {}", path.display())),
            None => Ok(ExerciseCatalog::reference()),
        }
    }
}

/// Input ranges accepted from flags and profile files alike.
fn check_ranges(profile: &UserProfile) -> Result<()> {
    ensure!(
        (10..=80).contains(&profile.age),
        "age must be within 10-80, got {}",
        profile.age
    );
    ensure!(
        (30.0..=150.0).contains(&profile.weight_kg),
        "weight must be within 30-150 kg, got {}",
        profile.weight_kg
    );
    ensure!(
        (120.0..=220.0).contains(&profile.height_cm),
        "height must be within 120-220 cm, got {}",
        profile.height_cm
    );
    ensure!(
        (15..=120).contains(&profile.available_minutes),
        "minutes per day must be within 15-120, got {}",
        profile.available_minutes
    );
    ensure!(
        (1..=7).contains(&profile.days_per_week),
        "days per week must be within 1-7, got {}",
        profile.days_per_week
    );
    Ok(())
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");
    cli.check_outputs()?;

    let profile = cli.load_profile()?;
    let catalog = cli.load_catalog()?;
    let plan = WorkoutPlanner::new(&catalog).generate_plan(&profile)?;

    if cli.json {
        let stdout = io::stdout();
        serde_json::to_writer_pretty(stdout.lock(), &plan)?;
        println!();
    } else {
        render(&profile, &plan, &mut io::stdout().lock())?;
    }

    if let Some(path) = &cli.csv {
        if path.as_os_str() == "-" {
            export::write_csv(&plan, io::stdout().lock())?;
        } else {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            export::write_csv(&plan, file)?;
            info!(path = %path.display(), "plan exported");
        }
    }

    Ok(())
}

fn render<W: Write>(profile: &UserProfile, plan: &WeeklyPlan, out: &mut W) -> io::Result<()> {
    let summary = PlanSummary::calculate(plan);
    let who = if profile.name.is_empty() {
        "Your"
    } else {
        profile.name.as_str()
    };

    writeln!(out, "{who} workout plan")?;
    writeln!(out, "  goal: {} ({})", profile.goal, profile.fitness_level)?;
    if let (Some(bmi), Some(class)) = (profile.bmi(), profile.bmi_class()) {
        writeln!(out, "  BMI: {bmi:.1} ({class})")?;
    }
    writeln!(out, "  weekly time: {} min", summary.total_minutes)?;
    writeln!(
        out,
        "  weekly calories: {}",
        export::format_calories(summary.total_calories)
    )?;
    writeln!(out)?;

    for day in &plan.days {
        writeln!(
            out,
            "{}  ({} min, {})",
            day.label,
            day.total_minutes,
            export::format_calories(day.total_calories)
        )?;
        if day.is_empty() {
            writeln!(out, "  rest")?;
        }
        for ex in &day.exercises {
            writeln!(
                out,
                "  - {} ({}): {} min, {}",
                ex.name,
                ex.category,
                ex.duration_minutes,
                export::format_calories(ex.calories)
            )?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Time by category")?;
    for category in Category::ALL {
        writeln!(
            out,
            "  {:<12} {:>4} min  {:>5.1}%",
            category.label(),
            plan.minutes_for(category),
            summary.share_of(category) * 100.0
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Tips")?;
    for tip in profile.goal.tips() {
        writeln!(out, "  * {tip}")?;
    }
    Ok(())
}
