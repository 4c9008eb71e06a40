use clap::Args;

use crate::heap::Mode;

/// Options controlling how the heap is ordered
#[derive(Debug, Args)]
pub struct HeapOptions {
    /// Heap ordering: extract the smallest (min) or largest (max) value first
    #[arg(short, long, value_enum, required = false, default_value_t = Mode::Max)]
    pub mode: Mode,
}

/// Options for the walk-through demonstration
#[derive(Debug, Args)]
pub struct DemoOptions {
    /// Build the initial heap from the values 0..size
    #[arg(long, required = false, default_value = "10")]
    pub size: i64,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        heap: HeapOptions,

        #[command(flatten)]
        demo: DemoOptions,
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["modeheap"]);
        assert_eq!(cli.heap.mode, Mode::Max);
        assert_eq!(cli.demo.size, 10);
    }

    #[test]
    fn test_mode() {
        let cli = Cli::parse_from(["modeheap", "--mode", "min", "--size", "4"]);
        assert_eq!(cli.heap.mode, Mode::Min);
        assert_eq!(cli.demo.size, 4);
    }
}
