use anyhow::Result;
use clap::{Parser, Subcommand};

use mealwheel::render;
use mealwheel::{PlannerApp, config::Config};
use mealwheel_catalog::{Category, MealType};
use mealwheel_planner::SlotRef;

/// mealwheel - rolling no-repeat meal planning
#[derive(Parser)]
#[command(name = "mealwheel")]
#[command(about = "Plan the next ten days of meals without repeating recent ones", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current plan
    Show,
    /// Start a fresh blank plan (history and settings stay)
    New,
    /// Regenerate the plan, honoring locks, skips and disabled meal types
    Generate {
        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Toggle a lock on a slot, or on the whole meal with --meal
    Lock {
        /// Day number, 1-based
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        /// Breakfast, lunch or dinner
        meal: MealType,
        /// Target side slot N (1-based) instead of the main
        #[arg(long, value_name = "N", conflicts_with = "meal_wide", value_parser = clap::value_parser!(u32).range(1..))]
        side: Option<u32>,
        /// Toggle the meal-wide lock
        #[arg(long = "meal", conflicts_with = "side")]
        meal_wide: bool,
    },
    /// Toggle a skip on a slot, or on the whole meal with --meal
    Skip {
        /// Day number, 1-based
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        /// Breakfast, lunch or dinner
        meal: MealType,
        /// Target side slot N (1-based) instead of the main
        #[arg(long, value_name = "N", conflicts_with = "meal_wide", value_parser = clap::value_parser!(u32).range(1..))]
        side: Option<u32>,
        /// Toggle the meal-wide skip
        #[arg(long = "meal", conflicts_with = "side")]
        meal_wide: bool,
    },
    /// Put a chosen dish in a slot; an empty name clears it
    Set {
        /// Day number, 1-based
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        /// Breakfast, lunch or dinner
        meal: MealType,
        /// Catalog dish name
        name: String,
        /// Target side slot N (1-based) instead of the main
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        side: Option<u32>,
    },
    /// Add another side slot to a meal
    AddSide {
        /// Day number, 1-based
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
        /// Breakfast, lunch or dinner
        meal: MealType,
    },
    /// Empty every slot of every day (history and settings stay)
    Clear,
    /// Manage the dish catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),
    /// Show or change which meal types get planned
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List dishes, all categories or one
    List {
        /// Category, e.g. "Dinner" or "Breakfast Side"
        category: Option<Category>,
    },
    /// Add a dish to a category
    Add {
        name: String,
        /// Category, e.g. "Dinner" or "Breakfast Side"
        category: Category,
    },
    /// Remove a dish from a category
    Remove {
        name: String,
        /// Category, e.g. "Dinner" or "Breakfast Side"
        category: Category,
    },
    /// Per-category dish counts
    Stats,
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show which meal types are planned
    Show,
    /// Plan this meal type again
    Enable { meal: MealType },
    /// Stop planning this meal type
    Disable { meal: MealType },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize tracing + logging
    mealwheel::observability::init_observability(&config.observability.log_level)?;

    run(cli.command, &config)
}

fn run(command: Commands, config: &Config) -> Result<()> {
    let mut app = PlannerApp::open(config)?;

    match command {
        Commands::Show => {
            print!("{}", render::render_plan(app.state(), app.catalog()));
        }
        Commands::New => {
            app.initialize()?;
            println!("Started a fresh {}-day plan.", app.plan_config().days);
        }
        Commands::Generate { seed } => {
            app.generate(seed)?;
            print!("{}", render::render_plan(app.state(), app.catalog()));
        }
        Commands::Lock {
            day,
            meal,
            side,
            meal_wide,
        } => {
            let day = day_index(day);
            if meal_wide {
                app.toggle_meal_lock(day, meal)?;
            } else {
                app.toggle_slot_lock(day, meal, slot_ref(side))?;
            }
            print!("{}", render::render_plan(app.state(), app.catalog()));
        }
        Commands::Skip {
            day,
            meal,
            side,
            meal_wide,
        } => {
            let day = day_index(day);
            if meal_wide {
                app.toggle_meal_skip(day, meal)?;
            } else {
                app.toggle_slot_skip(day, meal, slot_ref(side))?;
            }
            print!("{}", render::render_plan(app.state(), app.catalog()));
        }
        Commands::Set {
            day,
            meal,
            name,
            side,
        } => {
            let day = day_index(day);
            match side {
                Some(n) => app.set_side(day, meal, (n - 1) as usize, &name)?,
                None => app.set_main(day, meal, &name)?,
            }
            print!("{}", render::render_plan(app.state(), app.catalog()));
        }
        Commands::AddSide { day, meal } => {
            app.add_side(day_index(day), meal)?;
            print!("{}", render::render_plan(app.state(), app.catalog()));
        }
        Commands::Clear => {
            app.initialize()?;
            println!("Plan cleared.");
        }
        Commands::Catalog(command) => match command {
            CatalogCommands::List { category } => {
                print!("{}", render::render_catalog(app.catalog(), category));
            }
            CatalogCommands::Add { name, category } => {
                app.catalog_add(&name, category)?;
                println!("Added {name} to {category}.");
            }
            CatalogCommands::Remove { name, category } => {
                app.catalog_remove(&name, category)?;
                println!("Removed {name} from {category}.");
            }
            CatalogCommands::Stats => {
                print!("{}", render::render_stats(app.catalog()));
            }
        },
        Commands::Settings(command) => match command {
            SettingsCommands::Show => {
                print!("{}", render::render_settings(&app.state().settings));
            }
            SettingsCommands::Enable { meal } => {
                app.set_meal_enabled(meal, true)?;
                println!("{meal} enabled.");
            }
            SettingsCommands::Disable { meal } => {
                app.set_meal_enabled(meal, false)?;
                println!("{meal} disabled.");
            }
        },
    }

    Ok(())
}

fn day_index(day: u32) -> usize {
    (day - 1) as usize
}

fn slot_ref(side: Option<u32>) -> SlotRef {
    match side {
        Some(n) => SlotRef::Side((n - 1) as usize),
        None => SlotRef::Main,
    }
}
