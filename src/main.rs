use clap::{Parser, Subcommand};
use modeheap::{
    commands::{demo, sort_values, top_k},
    options::{DemoOptions, HeapOptions},
};

/// Binary heaps with a switchable ordering
#[derive(Debug, Parser)]
#[command(name = "modeheap")]
#[command(about = "Order values with a min or max binary heap.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print values in heap extraction order
    #[command(arg_required_else_help = true)]
    Sort {
        /// Values to sort
        #[arg(num_args(1..), allow_negative_numbers = true)]
        values: Vec<i64>,

        #[command(flatten)]
        options: HeapOptions,
    },

    /// Print the k most extreme values
    #[command(arg_required_else_help = true)]
    TopK {
        /// Number of values to print
        #[arg(short, required = true)]
        k: usize,

        /// Values to select from
        #[arg(num_args(1..), allow_negative_numbers = true)]
        values: Vec<i64>,

        #[command(flatten)]
        options: HeapOptions,
    },

    /// Walk through the basic heap operations
    Demo {
        #[command(flatten)]
        demo: DemoOptions,

        #[command(flatten)]
        options: HeapOptions,
    },
}

fn main() -> std::io::Result<()> {
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Sort { values, options } => {
            sort_values(&mut out, &values, &options)?;
        }
        Commands::TopK { k, values, options } => {
            top_k(&mut out, &values, k, &options)?;
        }
        Commands::Demo { demo: d, options } => {
            demo(&mut out, &d, &options)?;
        }
    }
    Ok(())
}
