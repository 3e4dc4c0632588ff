// FILE: src/cli/mod.rs

mod config;
mod handlers;

pub use config::ConfigFile;

use crate::error::{Result, SketchError};
use crate::{GeneratorOptions, Theme, ThemeKind, ThemeToken};
use clap::{Arg, ArgAction, Command, ValueEnum};
use std::time::Instant;

#[derive(Debug, Clone, ValueEnum)]
pub enum ThemeChoice {
    Variables,
    Light,
    Dark,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Markup followed by the stylesheet text
    Code,
    Html,
    Css,
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum InspectFormat {
    Json,
    Debug,
}

pub struct EnhancedCli {
    config: config::ConfigFile,
    start_time: Instant,
}

impl EnhancedCli {
    pub fn new() -> Self {
        Self {
            config: config::ConfigFile::default(),
            start_time: Instant::now(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.start_time = Instant::now();
        let matches = self.build_cli().get_matches();

        if let Some(config_path) = matches.get_one::<String>("config") {
            self.config = config::load(config_path)?;
        }

        self.setup_logging(matches.get_count("verbose"))?;

        let result = match matches.subcommand() {
            Some(("generate", sub_matches)) => handlers::handle_generate_command(self, sub_matches),
            Some(("inspect", sub_matches)) => handlers::handle_inspect_command(sub_matches),
            Some(("batch", sub_matches)) => handlers::handle_batch_command(self, sub_matches),
            Some(("init", sub_matches)) => handlers::handle_init_command(sub_matches),
            Some(("reset", sub_matches)) => handlers::handle_reset_command(sub_matches),
            Some(("benchmark", sub_matches)) => handlers::handle_benchmark_command(self, sub_matches),
            _ => {
                println!("No subcommand specified. Use --help for usage information.");
                Ok(())
            }
        };

        log::debug!("Finished in {}ms", self.start_time.elapsed().as_millis());
        result
    }

    fn build_cli(&self) -> Command {
        let theme_arg = Arg::new("theme")
            .short('t')
            .long("theme")
            .value_parser(clap::value_parser!(ThemeChoice))
            .help("Theme used to resolve style tokens (default: variables)");
        let define_arg = Arg::new("define")
            .short('D')
            .long("define")
            .value_name("TOKEN=VALUE")
            .help("Override a theme token, e.g. color-primary=#0044CC")
            .action(ArgAction::Append);

        Command::new(crate::NAME)
            .version(crate::VERSION)
            .about(crate::DESCRIPTION)
            .author("Sketch Development Team")
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Increase verbosity (can be used multiple times)")
                    .action(ArgAction::Count),
            )
            .subcommand(
                Command::new("generate")
                    .about("Generate HTML and CSS from a description")
                    .arg(Arg::new("description").help("Element description").index(1))
                    .arg(Arg::new("input").short('i').long("input").value_name("FILE").help("Read the description from a file"))
                    .arg(Arg::new("output").short('o').long("output").value_name("FILE").help("Write an HTML preview page"))
                    .arg(Arg::new("format").short('f').long("format").value_parser(clap::value_parser!(OutputFormat)).default_value("code").help("Printed output"))
                    .arg(theme_arg.clone())
                    .arg(define_arg.clone())
                    .arg(Arg::new("raw").long("raw").help("Print the code listing without HTML escaping").action(ArgAction::SetTrue))
                    .arg(Arg::new("debug").short('d').long("debug").help("Enable debug mode with extra logging").action(ArgAction::SetTrue))
                    .arg(Arg::new("stats").long("stats").help("Show generation statistics").action(ArgAction::SetTrue))
                    .arg(Arg::new("watch").short('w').long("watch").help("Watch the input file and regenerate on change").action(ArgAction::SetTrue)),
            )
            .subcommand(
                Command::new("inspect")
                    .about("Show the properties parsed from a description")
                    .arg(Arg::new("description").help("Element description").required(true).index(1))
                    .arg(Arg::new("format").short('f').long("format").value_parser(clap::value_parser!(InspectFormat)).default_value("json").help("Inspection output format")),
            )
            .subcommand(
                Command::new("batch")
                    .about("Generate every description in a file or directory (one per line)")
                    .arg(Arg::new("input").help("Description file or directory").required(true).index(1))
                    .arg(Arg::new("recursive").short('r').long("recursive").help("Process directories recursively").action(ArgAction::SetTrue))
                    .arg(Arg::new("output").short('o').long("output").value_name("DIR").help("Write preview pages to this directory"))
                    .arg(theme_arg)
                    .arg(define_arg),
            )
            .subcommand(
                Command::new("init")
                    .about("Write a starter configuration file")
                    .arg(Arg::new("path").help("Config file to create").default_value("sketch.toml").index(1)),
            )
            .subcommand(
                Command::new("reset")
                    .about("Clear a preview page back to its placeholder state")
                    .arg(Arg::new("output").help("Preview page to reset").required(true).index(1)),
            )
            .subcommand(
                Command::new("benchmark")
                    .about("Run generation benchmarks")
                    .arg(Arg::new("description").help("Element description").required(true).index(1))
                    .arg(Arg::new("iterations").short('n').long("iterations").value_name("N").help("Number of benchmark iterations").default_value("1000"))
                    .arg(Arg::new("warmup").long("warmup").value_name("N").help("Number of warmup iterations").default_value("100")),
            )
    }

    fn setup_logging(&self, verbose_count: u8) -> Result<()> {
        let log_level = match verbose_count {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .format_timestamp_secs()
            .init();
        Ok(())
    }

    pub fn config(&self) -> &config::ConfigFile {
        &self.config
    }

    /// Combines command line flags with the config file. Flags win.
    pub fn build_generator_options(&self, matches: &clap::ArgMatches) -> Result<GeneratorOptions> {
        let kind = match matches.try_get_one::<ThemeChoice>("theme").ok().flatten() {
            Some(ThemeChoice::Variables) => ThemeKind::Variables,
            Some(ThemeChoice::Light) => ThemeKind::Light,
            Some(ThemeChoice::Dark) => ThemeKind::Dark,
            None => match &self.config.theme {
                Some(name) => Theme::named(name)?.kind(),
                None => ThemeKind::Variables,
            },
        };

        let mut theme = Theme::new(kind);
        if let Some(overrides) = &self.config.theme_overrides {
            theme = theme.with_named_overrides(overrides)?;
        }
        if let Ok(Some(defines)) = matches.try_get_many::<String>("define") {
            for define in defines {
                let Some((name, value)) = define.split_once('=') else {
                    return Err(SketchError::invalid_format(format!(
                        "Invalid token override: {}. Use TOKEN=VALUE format.",
                        define
                    )));
                };
                let token = ThemeToken::from_variable_name(name).ok_or_else(|| {
                    SketchError::theme(format!("Unknown theme token '{}'", name))
                })?;
                theme = theme.with_override(token, value.trim());
            }
        }

        let debug_flag = matches
            .try_get_one::<bool>("debug")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false);

        Ok(GeneratorOptions {
            debug_mode: debug_flag || self.config.debug_mode.unwrap_or(false),
            theme,
        })
    }
}
