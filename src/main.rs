//! Command-line driver: runs one SAW trajectory, writes the sampled
//! observables to CSV and, optionally, a multi-frame XYZ trajectory
//! (one `C x y 0.000` line per bead, frames recentered for viewing,
//! e.g. with `vmd traj.xyz`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use csv::WriterBuilder;
use indicatif::{ProgressBar, ProgressStyle};

use saw::driver::{run_with_sink, MoveWeights, RunConfig, Sink};
use saw::lattice::Chain;
use saw::observables::Sample;

#[derive(Parser)]
#[command(about = "2D self-avoiding lattice polymer Monte Carlo")]
struct Cli {
    /// Number of beads in the chain
    #[arg(long, short = 'n', default_value = "6")]
    beads: usize,

    /// Total Monte Carlo step budget
    #[arg(long, default_value = "20000")]
    steps: u64,

    /// Record observables (and frames) every this many steps
    #[arg(long, default_value = "50")]
    sample_every: u64,

    /// Re-run the global consistency checks every this many steps (0 = never)
    #[arg(long, default_value = "2000")]
    check_every: u64,

    /// PRNG seed
    #[arg(long, default_value = "123")]
    seed: u64,

    /// End-move weight
    #[arg(long, default_value = "0.4")]
    p_end: f64,

    /// Corner-flip weight
    #[arg(long, default_value = "0.4")]
    p_corner: f64,

    /// Crankshaft weight
    #[arg(long, default_value = "0.2")]
    p_crank: f64,

    /// Observable CSV output path
    #[arg(long, default_value = "saw_observables.csv")]
    output: PathBuf,

    /// Multi-frame XYZ trajectory output path
    #[arg(long)]
    traj: Option<PathBuf>,
}

/// Streams samples to CSV and frames to XYZ. Write failures are reported
/// once and then swallowed so the simulation itself never aborts on I/O.
struct FileSink {
    csv: csv::Writer<File>,
    xyz: Option<BufWriter<File>>,
    bar: ProgressBar,
    io_failed: bool,
}

impl FileSink {
    fn report(&mut self, what: &str, err: &dyn std::error::Error) {
        if !self.io_failed {
            eprintln!("warning: {what} write failed, output will be incomplete: {err}");
            self.io_failed = true;
        }
    }
}

impl Sink for FileSink {
    fn on_sample(&mut self, s: &Sample) {
        self.bar.set_position(s.step);
        let row = [
            s.step.to_string(),
            format!("{:.6}", s.end_to_end),
            format!("{:.6}", s.radius_of_gyration),
            s.contacts.to_string(),
        ];
        if let Err(e) = self.csv.write_record(&row) {
            self.report("csv", &e);
        }
    }

    fn on_frame(&mut self, step: u64, chain: &Chain) {
        let Some(xyz) = self.xyz.as_mut() else { return };
        let frame = chain.recentered();
        let mut write_frame = || -> std::io::Result<()> {
            writeln!(xyz, "{}", frame.len())?;
            writeln!(xyz, "Frame {step}")?;
            for &(x, y) in &frame {
                writeln!(xyz, "C {:.3} {:.3} 0.000", x as f64, y as f64)?;
            }
            Ok(())
        };
        if let Err(e) = write_frame() {
            self.report("xyz", &e);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = RunConfig {
        n_beads: cli.beads,
        n_steps: cli.steps,
        sample_every: cli.sample_every,
        check_every: cli.check_every,
        weights: MoveWeights {
            end: cli.p_end,
            corner: cli.p_corner,
            crankshaft: cli.p_crank,
        },
        seed: cli.seed,
    };

    // ------------------------------------------------------------------
    // Output sinks
    // ------------------------------------------------------------------
    let mut csv = match WriterBuilder::new().from_path(&cli.output) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("cannot create {}: {e}", cli.output.display());
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = csv.write_record(["step", "R", "Rg", "contacts"]) {
        eprintln!("cannot write {}: {e}", cli.output.display());
        return ExitCode::FAILURE;
    }

    let xyz = match &cli.traj {
        Some(path) => match File::create(path) {
            Ok(f) => Some(BufWriter::new(f)),
            Err(e) => {
                eprintln!("cannot create {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let bar = ProgressBar::new(cfg.n_steps);
    bar.set_style(
        ProgressStyle::with_template(" {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]")
            .unwrap(),
    );

    let mut sink = FileSink { csv, xyz, bar, io_failed: false };

    // ------------------------------------------------------------------
    // Run
    // ------------------------------------------------------------------
    let out = match run_with_sink(&cfg, &mut sink) {
        Ok(out) => out,
        Err(e) => {
            sink.bar.abandon();
            eprintln!("fatal: {e}");
            return ExitCode::FAILURE;
        }
    };
    sink.bar.finish();

    if let Err(e) = sink.csv.flush() {
        eprintln!("warning: could not flush {}: {e}", cli.output.display());
    }
    if let Some(xyz) = sink.xyz.as_mut() {
        if let Err(e) = xyz.flush() {
            eprintln!("warning: could not flush trajectory: {e}");
        }
    }

    println!("\nDONE");
    println!("final coords: {:?}", out.chain.positions());
    println!("connectivity: {}", out.chain.check_connectivity());
    println!("self-avoiding: {}", out.chain.check_self_avoiding());
    println!("acceptance ratio: {:.3}", out.acceptance());
    println!("samples written: {} -> {}", out.samples.len(), cli.output.display());
    if let Some(path) = &cli.traj {
        println!("trajectory written to: {}", path.display());
    }

    ExitCode::SUCCESS
}
