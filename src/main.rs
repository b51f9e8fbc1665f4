use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use serde::Serialize;

use brillouin::lattice::{
    suggested_max_index, FragmentBudget, LatticeTag, Lattice2D, Lattice3D, Zone2D,
};

#[derive(Parser)]
#[command(name = "brillouin")]
#[command(about = "Brillouin-zone construction for 2D and 3D Bravais lattices")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print basis vectors, reciprocal basis and high symmetry points
    Info {
        /// Lattice type: square, rectangular, hexagonal, cubic, fcc or bcc
        #[arg(short, long)]
        lattice: String,

        /// First lattice constant
        #[arg(short, long, default_value = "1.0")]
        a: f64,

        /// Second lattice constant (rectangular only)
        #[arg(short, long)]
        b: Option<f64>,

        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Construct Brillouin zones and print them as JSON
    Zones {
        /// Lattice type: square, rectangular, hexagonal, cubic, fcc or bcc
        #[arg(short, long)]
        lattice: String,

        /// First lattice constant
        #[arg(short, long, default_value = "1.0")]
        a: f64,

        /// Second lattice constant (rectangular only)
        #[arg(short, long)]
        b: Option<f64>,

        /// Highest zone order to construct (3D supports order 1 only)
        #[arg(short = 'n', long, default_value = "1")]
        max_zone: usize,

        /// Reciprocal index bound; derived from max_zone when omitted
        #[arg(short, long)]
        max_index: Option<i32>,

        /// Fragment budget for nth-zone subdivision
        #[arg(long, default_value = "500")]
        budget: usize,
    },
}

#[derive(Serialize)]
struct ZoneReport2D {
    lattice: String,
    a: f64,
    b: f64,
    max_index: i32,
    zones: Vec<Zone2D>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting brillouin v{}", brillouin::VERSION);

    match cli.command {
        Commands::Info { lattice, a, b, json } => run_info(&lattice, a, b, json),
        Commands::Zones { lattice, a, b, max_zone, max_index, budget } => {
            run_zones(&lattice, a, b, max_zone, max_index, budget)
        }
    }
}

fn run_info(tag: &str, a: f64, b: Option<f64>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match tag.parse::<LatticeTag>()? {
        LatticeTag::TwoD(lattice_type) => {
            let lattice = Lattice2D::new(lattice_type, a, b.unwrap_or(a))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&lattice)?);
                return Ok(());
            }
            println!("{} lattice", lattice.basis.name);
            println!("  a1 = ({:10.6}, {:10.6})", lattice.basis.a1.x, lattice.basis.a1.y);
            println!("  a2 = ({:10.6}, {:10.6})", lattice.basis.a2.x, lattice.basis.a2.y);
            println!("  b1 = ({:10.6}, {:10.6})", lattice.reciprocal.b1.x, lattice.reciprocal.b1.y);
            println!("  b2 = ({:10.6}, {:10.6})", lattice.reciprocal.b2.x, lattice.reciprocal.b2.y);
            println!("  cell area        = {:.6}", lattice.cell_area);
            println!("  first BZ area    = {:.6}", lattice.brillouin_zone.area());
            println!("  first BZ corners = {}", lattice.brillouin_zone.vertices.len());
            println!("  high symmetry points:");
            for label in &lattice.high_symmetry.standard_path {
                if let Some(point) = lattice.high_symmetry.get_point(label) {
                    println!(
                        "    {:2} = ({:10.6}, {:10.6})  {}",
                        point.label.as_str(),
                        point.cartesian.x,
                        point.cartesian.y,
                        point.description
                    );
                }
            }
        }
        LatticeTag::ThreeD(lattice_type) => {
            let lattice = Lattice3D::new(lattice_type, a)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&lattice)?);
                return Ok(());
            }
            println!("{} lattice", lattice.basis.name);
            for (name, v) in [
                ("a1", lattice.basis.a1),
                ("a2", lattice.basis.a2),
                ("a3", lattice.basis.a3),
                ("b1", lattice.reciprocal.b1),
                ("b2", lattice.reciprocal.b2),
                ("b3", lattice.reciprocal.b3),
            ] {
                println!("  {name} = ({:10.6}, {:10.6}, {:10.6})", v.x, v.y, v.z);
            }
            println!("  cell volume     = {:.6}", lattice.cell_volume);
            println!("  first BZ volume = {:.6}", lattice.brillouin_zone.volume());
            println!("  first BZ faces  = {}", lattice.brillouin_zone.faces.len());
            println!("  high symmetry points:");
            for label in &lattice.high_symmetry.standard_path {
                if let Some(point) = lattice.high_symmetry.get_point(label) {
                    println!(
                        "    {:2} = ({:10.6}, {:10.6}, {:10.6})  {}",
                        point.label.as_str(),
                        point.cartesian.x,
                        point.cartesian.y,
                        point.cartesian.z,
                        point.description
                    );
                }
            }
        }
    }
    Ok(())
}

fn run_zones(
    tag: &str,
    a: f64,
    b: Option<f64>,
    max_zone: usize,
    max_index: Option<i32>,
    budget: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    match tag.parse::<LatticeTag>()? {
        LatticeTag::TwoD(lattice_type) => {
            let lattice = Lattice2D::new(lattice_type, a, b.unwrap_or(a))?;
            let max_index = max_index.unwrap_or_else(|| suggested_max_index(max_zone));
            info!("constructing zones 1..={max_zone} with max_index {max_index}");
            let zones = lattice.zones(max_zone, max_index, FragmentBudget::new(budget))?;
            let report = ZoneReport2D {
                lattice: lattice.basis.name.clone(),
                a,
                b: b.unwrap_or(a),
                max_index,
                zones,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        LatticeTag::ThreeD(lattice_type) => {
            if max_zone > 1 {
                return Err(format!(
                    "only the first Brillouin zone is constructed in 3D (requested order {max_zone})"
                )
                .into());
            }
            let lattice = Lattice3D::new(lattice_type, a)?;
            println!("{}", serde_json::to_string_pretty(&lattice.brillouin_zone)?);
        }
    }
    Ok(())
}
