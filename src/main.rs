use clap::{Parser, Subcommand};
use fireplot::config::{self, ViewerConfig};
use fireplot::date::SystemClock;
use fireplot::viewer::Viewer;
use fireplot::{output, scan, server};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fireplot")]
#[command(about = "Day-by-day viewer for pre-rendered firewall plots")]
#[command(long_about = "\
Day-by-day viewer for pre-rendered firewall plots

The plot generator writes one image per day into the plot directory; this
tool renders the page that shows it, with links to today and the
neighbouring days.

Plot directory:

  plots/
  ├── fireplot.ico                 # Favicon
  ├── fireplot-64-2024-06-01.png   # Plot for 2024-06-01
  ├── imagemap-2024-06-01.map      # Optional <area> markup for that plot
  └── fireplot-64-2024-06-02.png

A date that is not YYYY-MM-DD is replaced by today's date.

Run 'fireplot gen-config' to generate a documented fireplot.toml.")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./fireplot.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Plot directory (overrides `plot_dir` from the config file)
    #[arg(long, global = true)]
    plot_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page for one day
    Render {
        /// Day to render (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Write the page to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Serve the page and the plot directory over HTTP
    Serve {
        /// Listen address (overrides `server.host`)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (overrides `server.port`)
        #[arg(long)]
        port: Option<u16>,
    },
    /// List the days present in the plot directory
    Check,
    /// Print a stock fireplot.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (config_path, plot_dir) = (cli.config.as_deref(), cli.plot_dir.as_deref());

    match cli.command {
        Command::Render { date, output } => {
            let viewer = Viewer::new(setup(config_path, plot_dir)?, SystemClock);
            let html = viewer.render(date.as_deref())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &html)?;
                    println!("Generated {}", path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&html)?;
                    stdout.flush()?;
                }
            }
        }
        Command::Serve { host, port } => {
            let config = setup(config_path, plot_dir)?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let viewer = Viewer::new(config, SystemClock);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(viewer, &host, port))?;
        }
        Command::Check => {
            let config = setup(config_path, plot_dir)?;
            let inventory = scan::scan(&config.plot_dir)?;
            output::print_check_output(&inventory, &config.plot_dir);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file, apply command-line overrides and start logging.
///
/// An explicit `--config` must exist; the implicit `./fireplot.toml` may not.
fn setup(
    config_path: Option<&Path>,
    plot_dir: Option<&Path>,
) -> Result<ViewerConfig, config::ConfigError> {
    let path = match config_path {
        Some(path) if !path.exists() => {
            return Err(config::ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(config::CONFIG_FILE_NAME),
    };
    let mut config = config::load_config(&path)?;
    if let Some(dir) = plot_dir {
        config.plot_dir = dir.to_path_buf();
    }
    init_logging(&config.log_level);
    Ok(config)
}

/// Log to stderr so `render` output on stdout stays clean.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
