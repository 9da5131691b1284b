use clap::Parser;
use log::{debug, error, info};
use phylogrowth::error::PhyloError;
use phylogrowth::histogram::{Histogram, PlotConfig};
use phylogrowth::model::Clade;
use phylogrowth::parser::TreeParser;
use phylogrowth::writer::{RenderConfig, write_tree_file};
use std::path::PathBuf;
use std::process::ExitCode;

/// Phylogrowth - population growth histograms from phylogenetic trees with TMRCA estimates
#[derive(Parser, Debug)]
#[command(name = "phylogrowth", version, author, long_about = None)]
struct Args {
    /// Input file with the tree in indented format
    #[arg(long)]
    treein: PathBuf,

    /// Output file for the (selected part of the) tree
    #[arg(long)]
    treeout: Option<PathBuf>,

    /// Output file for the histogram as comma-separated values
    #[arg(long)]
    csvout: Option<PathBuf>,

    /// Output file for the histogram as tab-separated values
    #[arg(long)]
    txtout: Option<PathBuf>,

    /// Output file for the histogram as PNG image, needs gnuplot
    #[arg(long)]
    pngout: Option<PathBuf>,

    /// Step width of the histogram in years
    #[arg(long, default_value_t = 100)]
    step: i64,

    /// Selects a specific branch of the tree by SNP name
    #[arg(long)]
    subclade: Option<String>,

    /// gnuplot executable used for the PNG image
    #[arg(long, default_value = "gnuplot")]
    gnuplot: String,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn wants_histogram(&self) -> bool {
        self.csvout.is_some() || self.txtout.is_some() || self.pngout.is_some()
    }

    fn wants_output(&self) -> bool {
        self.treeout.is_some() || self.wants_histogram()
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let tree = match load_tree(&args) {
        Ok(tree) => tree,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if !args.wants_output() {
        print!("{tree}");
        return ExitCode::SUCCESS;
    }

    if write_outputs(&args, &tree) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reads the input tree and selects the requested subclade.
fn load_tree(args: &Args) -> Result<Clade, PhyloError> {
    debug!("loading tree from {}", args.treein.display());
    let tree = TreeParser::default().parse_file(&args.treein)?;
    info!(
        "loaded tree with {} clades and {} samples",
        tree.num_clades(),
        tree.num_samples()
    );

    match &args.subclade {
        Some(name) => tree
            .subclade(name)
            .cloned()
            .ok_or_else(|| PhyloError::NotFound(name.clone())),
        None => Ok(tree),
    }
}

/// Writes every requested output, continuing after failures.
///
/// # Returns
/// `true` if all outputs were written
fn write_outputs(args: &Args, tree: &Clade) -> bool {
    let mut success = true;
    let mut report = |what: &str, result: Result<(), PhyloError>| match result {
        Ok(()) => info!("wrote {what}"),
        Err(e) => {
            error!("writing {what}: {e}");
            success = false;
        }
    };

    if let Some(path) = &args.treeout {
        let command = std::env::args().collect::<Vec<_>>().join(" ");
        let result = write_tree_file(path, tree, &command, &RenderConfig::default());
        report("tree file", result.map_err(PhyloError::from));
    }

    if args.wants_histogram() {
        let histogram = match Histogram::new(&tree.tmrcas(), args.step) {
            Ok(histogram) => histogram,
            Err(e) => {
                report("histogram", Err(e.into()));
                return success;
            }
        };

        if let Some(path) = &args.csvout {
            report("histogram as CSV", histogram.write_csv(path).map_err(PhyloError::from));
        }
        if let Some(path) = &args.txtout {
            report("histogram as TXT", histogram.write_txt(path).map_err(PhyloError::from));
        }
        if let Some(path) = &args.pngout {
            let title = args.subclade.as_deref().unwrap_or("");
            let config = PlotConfig::default().with_executable(&args.gnuplot);
            let result = histogram.write_png(path, title, &config);
            report("histogram as PNG image", result.map_err(PhyloError::from));
        }
    }

    success
}
