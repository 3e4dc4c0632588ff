// FILE: src/cli/handlers.rs
use crate::{
    cli::{InspectFormat, OutputFormat},
    generate_with_parser, DescriptionParser, GenerationStats, GeneratorOptions, PreviewPage,
    RenderedElement, Result, SketchError,
};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Instant;

const DESCRIPTION_EXTENSIONS: &[&str] = &["txt", "sketch"];

fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| SketchError::invalid_format(format!("Missing required argument <{}>", name)))
}

// --- GENERATE ---
pub fn handle_generate_command(cli: &super::EnhancedCli, matches: &clap::ArgMatches) -> Result<()> {
    let options = cli.build_generator_options(matches)?;
    let input_path = matches.get_one::<String>("input");
    let output_path = matches.get_one::<String>("output");

    if matches.get_flag("watch") {
        let Some(input_path) = input_path else {
            return Err(SketchError::invalid_format("--watch needs a description file (--input)"));
        };
        return watch_and_generate(input_path, output_path.map(String::as_str), &options);
    }

    let description = match (matches.get_one::<String>("description"), input_path) {
        (Some(description), _) => description.clone(),
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| SketchError::FileNotFound {
            path: format!("{}: {}", path, e),
        })?,
        (None, None) => {
            return Err(SketchError::invalid_format(
                "Provide a description or a description file (--input)",
            ))
        }
    };

    let escape = !matches.get_flag("raw") && cli.config().escape_output.unwrap_or(true);
    let parser = DescriptionParser::new();

    let (element, stats) = match generate_with_parser(&parser, &description, &options) {
        Ok(result) => result,
        Err(SketchError::EmptyDescription) => {
            eprintln!("{}", crate::preview::EMPTY_DESCRIPTION_MESSAGE);
            if let Some(output_path) = output_path {
                fs::write(output_path, PreviewPage::empty_description().to_html())?;
            }
            return Err(SketchError::EmptyDescription);
        }
        Err(e) => return Err(e),
    };

    let format = matches
        .get_one::<OutputFormat>("format")
        .cloned()
        .unwrap_or(OutputFormat::Code);
    print_element(&parser, &description, &element, &stats, &format, escape)?;

    if let Some(output_path) = output_path {
        let page = PreviewPage::new(description.trim(), element, options.theme.clone());
        fs::write(output_path, page.to_html())?;
        println!("✅ Preview written to {}", output_path);
    }

    if matches.get_flag("stats") {
        print_stats(&stats);
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    description: &'a str,
    properties: crate::PropertyRecord,
    markup: &'a str,
    style: &'a str,
    stats: &'a GenerationStats,
}

fn print_element(
    parser: &DescriptionParser,
    description: &str,
    element: &RenderedElement,
    stats: &GenerationStats,
    format: &OutputFormat,
    escape: bool,
) -> Result<()> {
    match format {
        OutputFormat::Code => {
            if escape {
                println!("{}", element.escaped_listing());
            } else {
                println!("{}", element.code_listing());
            }
        }
        OutputFormat::Html => println!("{}", element.markup),
        OutputFormat::Css => println!("{}", element.style),
        OutputFormat::Json => {
            let output = JsonOutput {
                description: description.trim(),
                properties: parser.parse(description.trim()),
                markup: &element.markup,
                style: &element.style,
                stats,
            };
            println!("{}", to_json(&output)?);
        }
    }
    Ok(())
}

fn watch_and_generate(
    input_path: &str,
    output_path: Option<&str>,
    options: &GeneratorOptions,
) -> Result<()> {
    println!("👀 Watching {} for changes...", input_path);

    let (tx, rx) = channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                if let Err(e) = tx.send(event) {
                    eprintln!("Watch error: {}", e);
                }
            }
        },
        notify::Config::default(),
    )
    .map_err(|e| SketchError::watch(format!("Failed to create file watcher: {}", e)))?;

    watcher
        .watch(Path::new(input_path), RecursiveMode::NonRecursive)
        .map_err(|e| SketchError::watch(format!("Failed to watch file: {}", e)))?;

    let parser = DescriptionParser::new();
    regenerate(&parser, input_path, output_path, options);

    loop {
        match rx.recv() {
            Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                println!("🔄 Description changed, regenerating...");
                regenerate(&parser, input_path, output_path, options);
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Watch error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

fn regenerate(
    parser: &DescriptionParser,
    input_path: &str,
    output_path: Option<&str>,
    options: &GeneratorOptions,
) {
    let description = match fs::read_to_string(input_path) {
        Ok(description) => description,
        Err(e) => {
            eprintln!("❌ Could not read {}: {}", input_path, e);
            return;
        }
    };

    let page = match generate_with_parser(parser, &description, options) {
        Ok((element, stats)) => {
            println!("{}", element.code_listing());
            println!("✅ Generated <{}> ({}us)", stats.element_kind, stats.generate_time_us);
            PreviewPage::new(description.trim(), element, options.theme.clone())
        }
        Err(SketchError::EmptyDescription) => {
            println!("{}", crate::preview::EMPTY_DESCRIPTION_MESSAGE);
            PreviewPage::empty_description()
        }
        Err(e) => {
            eprintln!("❌ Generation failed: {}", e);
            return;
        }
    };

    if let Some(output_path) = output_path {
        if let Err(e) = fs::write(output_path, page.to_html()) {
            eprintln!("❌ Could not write {}: {}", output_path, e);
        }
    }
}

// --- INSPECT ---
pub fn handle_inspect_command(matches: &clap::ArgMatches) -> Result<()> {
    let description = required_arg(matches, "description")?;
    let record = DescriptionParser::new().parse(description);

    match matches.get_one::<InspectFormat>("format") {
        Some(InspectFormat::Debug) => println!("{:#?}", record),
        _ => println!("{}", to_json(&record)?),
    }
    Ok(())
}

// --- BATCH ---
pub fn handle_batch_command(cli: &super::EnhancedCli, matches: &clap::ArgMatches) -> Result<()> {
    let input_path = required_arg(matches, "input")?;
    let recursive = matches.get_flag("recursive");
    let output_dir = matches
        .get_one::<String>("output")
        .cloned()
        .or_else(|| cli.config().output_directory.clone())
        .map(PathBuf::from);
    let options = cli.build_generator_options(matches)?;

    if let Some(dir) = &output_dir {
        fs::create_dir_all(dir)?;
    }

    let files = collect_description_files(input_path, recursive)?;
    let parser = DescriptionParser::new();
    let mut total = 0;
    let mut failed = 0;

    for file in &files {
        let content = fs::read_to_string(file)?;
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "description".to_string());

        for (line, description) in crate::utils::split_descriptions(&content) {
            total += 1;
            match generate_with_parser(&parser, &description, &options) {
                Ok((element, stats)) => {
                    println!(
                        "✅ {}:{} <{}> {}",
                        file.display(),
                        line,
                        stats.element_kind,
                        crate::utils::abbreviate(&description, 48)
                    );
                    if let Some(dir) = &output_dir {
                        let page = PreviewPage::new(description.as_str(), element, options.theme.clone());
                        fs::write(dir.join(format!("{}-{}.html", stem, line)), page.to_html())?;
                    }
                }
                Err(e) => {
                    failed += 1;
                    println!("❌ {}:{} - {}", file.display(), line, e);
                }
            }
        }
    }

    println!("\n📊 Batch Summary:");
    println!("   Files: {}", files.len());
    println!("   Descriptions: {}", total);
    println!("   Failed: {}", failed);
    if let Some(dir) = &output_dir {
        println!("   Previews: {}", dir.display());
    }

    if failed > 0 {
        Err(SketchError::invalid_format(format!("{} descriptions failed", failed)))
    } else {
        Ok(())
    }
}

fn collect_description_files(input_path: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let path = Path::new(input_path);
    if !path.exists() {
        return Err(SketchError::FileNotFound {
            path: input_path.to_string(),
        });
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(path).max_depth(max_depth).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            SketchError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Directory traversal error: {}", e),
            ))
        })?;
        let is_description = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| DESCRIPTION_EXTENSIONS.contains(&ext));
        if entry.file_type().is_file() && is_description {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

// --- INIT ---
pub fn handle_init_command(matches: &clap::ArgMatches) -> Result<()> {
    let path = required_arg(matches, "path")?;

    if Path::new(path).exists() {
        return Err(SketchError::invalid_format(format!("'{}' already exists", path)));
    }

    let content = if path.ends_with(".json") {
        let config: super::ConfigFile = toml::from_str(super::config::STARTER_CONFIG)
            .map_err(|e| SketchError::invalid_format(format!("Invalid starter config: {}", e)))?;
        to_json(&config)?
    } else {
        super::config::STARTER_CONFIG.to_string()
    };

    fs::write(path, content)?;
    println!("🚀 Created {}", path);
    println!("\nNext steps:");
    println!("   {} -c {} generate \"a large blue rounded button with text 'Submit'\"", crate::NAME, path);
    Ok(())
}

// --- RESET ---
pub fn handle_reset_command(matches: &clap::ArgMatches) -> Result<()> {
    let output_path = required_arg(matches, "output")?;
    write_placeholder_page(Path::new(output_path))?;
    println!("🧹 Reset {}", output_path);
    Ok(())
}

fn write_placeholder_page(path: &Path) -> Result<()> {
    log::info!("Writing placeholder page to {}", path.display());
    fs::write(path, PreviewPage::placeholder().to_html())?;
    Ok(())
}

// --- BENCHMARK ---
pub fn handle_benchmark_command(cli: &super::EnhancedCli, matches: &clap::ArgMatches) -> Result<()> {
    let description = required_arg(matches, "description")?;
    let iterations: usize = required_arg(matches, "iterations")?
        .parse()
        .map_err(|_| SketchError::invalid_format("Invalid iterations number"))?;
    let warmup: usize = required_arg(matches, "warmup")?
        .parse()
        .map_err(|_| SketchError::invalid_format("Invalid warmup number"))?;

    println!("🏁 Running generation benchmarks");
    println!("   Description: {}", crate::utils::abbreviate(description, 60));
    println!("   Warmup iterations: {}", warmup);
    println!("   Benchmark iterations: {}", iterations);

    let options = cli.build_generator_options(matches)?;
    let parser = DescriptionParser::new();

    print!("   Warming up");
    for _ in 0..warmup {
        let _ = generate_with_parser(&parser, description, &options);
    }
    println!(" done");
    let _ = std::io::stdout().flush();

    let mut times = Vec::new();
    print!("   Benchmarking");
    for _ in 0..iterations {
        let start = Instant::now();
        if generate_with_parser(&parser, description, &options).is_ok() {
            times.push(start.elapsed().as_nanos() as f64 / 1_000.0);
        }
    }
    println!(" done");

    if times.is_empty() {
        return Err(SketchError::invalid_format("All benchmark iterations failed"));
    }

    times.sort_by(|a, b| a.total_cmp(b));
    let min = times[0];
    let max = times[times.len() - 1];
    let median = times[times.len() / 2];
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let std_dev = {
        let variance = times.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / times.len() as f64;
        variance.sqrt()
    };

    println!("\n📊 Benchmark Results:");
    println!("   Successful iterations: {}/{}", times.len(), iterations);
    println!("   Min time: {:.2}us", min);
    println!("   Max time: {:.2}us", max);
    println!("   Median time: {:.2}us", median);
    println!("   Mean time: {:.2}us ± {:.2}us", mean, std_dev);
    if std_dev / mean > 0.1 {
        println!("   ⚠️  High variance detected ({:.1}%)", (std_dev / mean) * 100.0);
    }
    Ok(())
}

// --- HELPERS ---
fn print_stats(stats: &GenerationStats) {
    println!("\n📊 Generation Statistics:");
    println!("   Element: <{}>", stats.element_kind);
    println!("   Theme: {}", stats.theme);
    println!("   Description: {} bytes", stats.description_length);
    println!("   Markup: {} bytes", stats.markup_size);
    println!("   Style: {} bytes ({} declarations)", stats.style_size, stats.declaration_count);
    println!("   Time: {}us", stats.generate_time_us);
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| SketchError::invalid_format(format!("JSON serialization error: {}", e)))
}
