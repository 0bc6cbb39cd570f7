use batbridge::{
    Config, PolicyEngine, SchedulingPolicy, Session, TcpTransport, WorkloadGenerator,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "External scheduling bridge for Batsim-style simulators", long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Scheduling policy override (fcfs|sjf|random|easy_bf|filler)
    #[arg(long)]
    policy: Option<String>,

    /// Number of jobs to generate (override)
    #[arg(long)]
    num_jobs: Option<usize>,

    /// Minimum job walltime in seconds (override)
    #[arg(long)]
    min_walltime: Option<f64>,

    /// Maximum job walltime in seconds (override)
    #[arg(long)]
    max_walltime: Option<f64>,

    /// Channel bind address (override)
    #[arg(long)]
    bind: Option<String>,

    /// Workload seed (override)
    #[arg(long)]
    seed: Option<u64>,

    /// Minimal output
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(policy) = &self.policy {
            config.scheduler.policy = policy.clone();
        }
        if let Some(num_jobs) = self.num_jobs {
            config.workload.num_jobs = num_jobs;
        }
        if let Some(min_walltime) = self.min_walltime {
            config.workload.min_walltime = min_walltime;
        }
        if let Some(max_walltime) = self.max_walltime {
            config.workload.max_walltime = max_walltime;
        }
        if let Some(bind) = &self.bind {
            config.session.bind = bind.clone();
        }
        if let Some(seed) = self.seed {
            config.workload.seed = seed;
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut config = match Config::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    args.apply_overrides(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("Error in configuration: {}", e);
        std::process::exit(1);
    }

    // Unknown policy names are fatal here, before any socket is bound
    let policy = match SchedulingPolicy::from_str(&config.scheduler.policy) {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("Error in configuration: {}", e);
            std::process::exit(1);
        }
    };

    let workload = WorkloadGenerator::new(config.workload.clone()).generate();

    if !args.quiet {
        println!("Batsim scheduling bridge");
        println!("Configuration:");
        println!("  Policy:   {}", policy.name());
        println!("  Workload: {} ({} jobs)", workload.name, workload.jobs.len());
        println!(
            "  Walltime: [{}, {}] s",
            config.workload.min_walltime, config.workload.max_walltime
        );
        println!("  Bind:     {}", config.session.bind);
        println!();
    }

    let mut transport = match TcpTransport::bind(&config.session.bind) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("Error binding {}: {}", config.session.bind, e);
            std::process::exit(1);
        }
    };

    let engine = PolicyEngine::new(policy, config.scheduler.seed);
    let mut session = Session::new(workload, engine);

    if !args.quiet {
        println!("Waiting for simulator on {}...", config.session.bind);
    }

    match session.run(&mut transport) {
        Ok(()) => {
            if !args.quiet {
                println!("Simulation ended, session complete.");
            }
        }
        Err(e) => {
            eprintln!("Session failed: {}", e);
            std::process::exit(1);
        }
    }
}
