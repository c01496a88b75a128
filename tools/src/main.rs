//! stargen-runner: headless dataset generation runner.
//!
//! Usage:
//!   stargen-runner --scale 10 --output-dir ./data
//!   stargen-runner --scale 100 --table web_sales --chunk 3 --chunks 8
//!   stargen-runner --scale 1 --format jsonl

use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use stargen_core::{GenerationEngine, Session, SessionConfig, Table, TableRow};

enum OutputFormat {
    /// Pipe-delimited text, one file per table, empty field for null.
    Dat,
    /// One JSON array of nullable column values per line.
    JsonLines,
}

/// Written next to the data files so chunked runs from different
/// machines can be stitched together and verified.
#[derive(serde::Serialize)]
struct RunManifest {
    run_id: String,
    scale: i64,
    chunk: i64,
    chunks: i64,
    started_at: chrono::DateTime<chrono::Utc>,
    finished_at: chrono::DateTime<chrono::Utc>,
    row_counts: Vec<(String, u64)>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let scale = parse_arg(&args, "--scale", 1i64);
    let chunk = parse_arg(&args, "--chunk", 1i64);
    let chunks = parse_arg(&args, "--chunks", 1i64);
    let table = args
        .windows(2)
        .find(|w| w[0] == "--table")
        .map(|w| w[1].as_str());
    let output_dir = args
        .windows(2)
        .find(|w| w[0] == "--output-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");
    let format = match args
        .windows(2)
        .find(|w| w[0] == "--format")
        .map(|w| w[1].as_str())
        .unwrap_or("dat")
    {
        "dat" => OutputFormat::Dat,
        "jsonl" => OutputFormat::JsonLines,
        other => bail!("unknown output format '{other}' (expected dat or jsonl)"),
    };

    let run_id = uuid::Uuid::new_v4();
    let started_at = chrono::Utc::now();
    println!("stargen-runner");
    println!("  run_id:     {run_id}");
    println!("  scale:      {scale}");
    println!("  table:      {}", table.unwrap_or("(all)"));
    println!("  chunk:      {chunk} of {chunks}");
    println!("  output_dir: {output_dir}");
    println!();

    let config = SessionConfig {
        scale,
        table: table.map(str::to_string),
        chunk,
        chunk_count: chunks,
    };
    let session = Session::new(&config)?;
    let engine = GenerationEngine::new(&session);

    let targets: Vec<Table> = match table {
        Some(name) => vec![Table::from_name(name)?],
        // Child tables ride along with their parent.
        None => Table::ALL
            .into_iter()
            .filter(|t| t.has_row_generator() && t.parent().is_none())
            .collect(),
    };

    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {output_dir}"))?;
    let mut writers = TableWriters::new(Path::new(output_dir), format, chunk, chunks);
    let mut row_counts: HashMap<Table, u64> = HashMap::new();

    for target in &targets {
        engine.generate_table(*target, &mut |row| {
            writers
                .write_row(row.as_ref())
                .map_err(stargen_core::GenError::from)?;
            *row_counts.entry(row.table()).or_insert(0) += 1;
            Ok(())
        })?;
    }
    writers.flush()?;

    let finished_at = chrono::Utc::now();
    let elapsed = finished_at - started_at;
    let mut counted: Vec<_> = row_counts.into_iter().collect();
    counted.sort_by_key(|(table, _)| table.name());

    let manifest = RunManifest {
        run_id: run_id.to_string(),
        scale,
        chunk,
        chunks,
        started_at,
        finished_at,
        row_counts: counted.iter().map(|(table, count)| (table.name().to_string(), *count)).collect(),
    };
    let manifest_name = if chunks > 1 {
        format!("manifest_{chunk}_{chunks}.json")
    } else {
        "manifest.json".to_string()
    };
    let manifest_path = Path::new(output_dir).join(manifest_name);
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("writing {}", manifest_path.display()))?;

    println!("=== RUN SUMMARY ===");
    println!("  run_id:  {run_id}");
    println!("  elapsed: {}.{:03}s", elapsed.num_seconds(), elapsed.num_milliseconds() % 1000);
    for (table, count) in &counted {
        println!("  {:<24} {count} rows", table.name());
    }
    Ok(())
}

struct TableWriters {
    dir: PathBuf,
    format: OutputFormat,
    chunk: i64,
    chunks: i64,
    writers: HashMap<Table, BufWriter<fs::File>>,
}

impl TableWriters {
    fn new(dir: &Path, format: OutputFormat, chunk: i64, chunks: i64) -> Self {
        Self { dir: dir.to_path_buf(), format, chunk, chunks, writers: HashMap::new() }
    }

    fn write_row(&mut self, row: &dyn TableRow) -> Result<()> {
        let table = row.table();
        if !self.writers.contains_key(&table) {
            let extension = match self.format {
                OutputFormat::Dat => "dat",
                OutputFormat::JsonLines => "jsonl",
            };
            let file_name = if self.chunks > 1 {
                format!("{}_{}_{}.{extension}", table.name(), self.chunk, self.chunks)
            } else {
                format!("{}.{extension}", table.name())
            };
            let path = self.dir.join(file_name);
            let file = fs::File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            self.writers.insert(table, BufWriter::new(file));
        }
        let writer = self
            .writers
            .get_mut(&table)
            .context("writer not registered")?;

        let values = row.values();
        match self.format {
            OutputFormat::Dat => {
                let mut line = String::new();
                for value in &values {
                    if let Some(value) = value {
                        line.push_str(value);
                    }
                    line.push('|');
                }
                writeln!(writer, "{line}")?;
            }
            OutputFormat::JsonLines => {
                writeln!(writer, "{}", serde_json::to_string(&values)?)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        for writer in self.writers.values_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
