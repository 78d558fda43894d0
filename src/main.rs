use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tandem::prelude::*;

#[derive(Parser)]
#[command(name = "tandem")]
#[command(about = "Overlay two CSV series as a chart-ready JSON payload", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //build a chart payload from two csv files under a field mapping
    Chart {
        //path to a saved chart request json (replaces the inline flags)
        #[arg(long)]
        config: Option<PathBuf>,

        //first csv file
        #[arg(long)]
        file1: Option<PathBuf>,

        //second csv file
        #[arg(long)]
        file2: Option<PathBuf>,

        //x-axis header for dataset 1
        #[arg(long)]
        x1: Option<String>,

        //y-axis header for dataset 1
        #[arg(long)]
        y1: Option<String>,

        //x-axis header for dataset 2
        #[arg(long)]
        x2: Option<String>,

        //y-axis header for dataset 2
        #[arg(long)]
        y2: Option<String>,

        //display name for dataset 1
        #[arg(long)]
        name1: Option<String>,

        //display name for dataset 2
        #[arg(long)]
        name2: Option<String>,

        //display color for dataset 1
        #[arg(long)]
        color1: Option<String>,

        //display color for dataset 2
        #[arg(long)]
        color2: Option<String>,

        //save the resolved request json for later replay
        #[arg(long)]
        save_request: Option<PathBuf>,

        //write the payload json to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        //render a terminal table preview of the payload
        #[arg(long)]
        table: bool,
    },

    //simulate a fixed monthly contribution over two monthly-return csv files
    Sip {
        //first monthly-change csv file
        #[arg(long)]
        file1: PathBuf,

        //second monthly-change csv file
        #[arg(long)]
        file2: PathBuf,

        //contribution applied each month
        #[arg(long, default_value = "1000")]
        contribution: f64,

        //apply the contribution at the start of each month instead of the end
        #[arg(long)]
        at_start: bool,

        //header of the date column
        #[arg(long, default_value = "Date")]
        date_header: String,

        //header of the percentage-change column
        #[arg(long, default_value = "Change %")]
        change_header: String,

        //display name for dataset 1
        #[arg(long)]
        name1: Option<String>,

        //display name for dataset 2
        #[arg(long)]
        name2: Option<String>,

        //display color for dataset 1
        #[arg(long)]
        color1: Option<String>,

        //display color for dataset 2
        #[arg(long)]
        color2: Option<String>,

        //write the payload json to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        //render a terminal table preview of the payload
        #[arg(long)]
        table: bool,
    },

    //emit the built-in sample payload
    Sample {
        //write the payload json to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        //render a terminal table preview of the payload
        #[arg(long)]
        table: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            config,
            file1,
            file2,
            x1,
            y1,
            x2,
            y2,
            name1,
            name2,
            color1,
            color2,
            save_request,
            output,
            table,
        } => {
            let request = match config {
                Some(path) => ChartRequest::from_json_file(&path)
                    .context(format!("Failed to load chart request from {:?}", path))?,
                None => {
                    let file1 = file1.ok_or_else(|| anyhow::anyhow!("--file1 required"))?;
                    let file2 = file2.ok_or_else(|| anyhow::anyhow!("--file2 required"))?;
                    let mapping = FieldMapping {
                        x1: x1.ok_or_else(|| anyhow::anyhow!("--x1 required"))?,
                        y1: y1.ok_or_else(|| anyhow::anyhow!("--y1 required"))?,
                        x2: x2.ok_or_else(|| anyhow::anyhow!("--x2 required"))?,
                        y2: y2.ok_or_else(|| anyhow::anyhow!("--y2 required"))?,
                        name1,
                        name2,
                        color1,
                        color2,
                    };
                    ChartRequest::new(file1, file2, mapping)
                }
            };

            run_chart(request, save_request, output, table)?;
        }
        Commands::Sip {
            file1,
            file2,
            contribution,
            at_start,
            date_header,
            change_header,
            name1,
            name2,
            color1,
            color2,
            output,
            table,
        } => {
            let mapping = FieldMapping {
                name1,
                name2,
                color1,
                color2,
                ..FieldMapping::default()
            };

            run_sip(
                file1,
                file2,
                contribution,
                at_start,
                date_header,
                change_header,
                mapping,
                output,
                table,
            )?;
        }
        Commands::Sample { output, table } => {
            let payload = sample_payload();
            if table {
                payload.pretty_print_table();
            }
            emit_json(&payload.to_json()?, output)?;
        }
    }

    Ok(())
}

fn run_chart(
    request: ChartRequest,
    save_request: Option<PathBuf>,
    output: Option<PathBuf>,
    table: bool,
) -> Result<()> {
    println!("Tandem Series Overlay");
    println!("=====================\n");
    println!(
        "Dataset 1: {:?} (x={}, y={})",
        request.file1, request.mapping.x1, request.mapping.y1
    );
    println!(
        "Dataset 2: {:?} (x={}, y={})\n",
        request.file2, request.mapping.x2, request.mapping.y2
    );

    if let Some(path) = &save_request {
        request
            .to_json_file(path)
            .context(format!("Failed to save chart request to {:?}", path))?;
        println!("Request saved to {:?}\n", path);
    }

    let payload = match chart_from_files(&request.file1, &request.file2, &request.mapping) {
        Ok(payload) => {
            println!("Charting {} aligned rows\n", payload.labels.len());
            payload
        }
        Err(err) => {
            println!("{}; falling back to sample data\n", err);
            sample_payload()
        }
    };

    if table {
        payload.pretty_print_table();
    }

    emit_json(&payload.to_json()?, output)
}

#[allow(clippy::too_many_arguments)]
fn run_sip(
    file1: PathBuf,
    file2: PathBuf,
    contribution: f64,
    at_start: bool,
    date_header: String,
    change_header: String,
    mapping: FieldMapping,
    output: Option<PathBuf>,
    table: bool,
) -> Result<()> {
    println!("Tandem SIP Simulation");
    println!("=====================\n");
    println!("Contribution: ${:.2} per month", contribution);
    println!(
        "Applied at period {}\n",
        if at_start { "start" } else { "end" }
    );

    let payload = sip_from_files(
        &file1,
        &file2,
        contribution,
        at_start,
        &date_header,
        &change_header,
        &mapping,
    )
    .context("SIP simulation produced no usable data")?;

    println!("Simulated {} months", payload.labels.len());
    if let (Some(v1), Some(v2)) = (payload.dataset1.last(), payload.dataset2.last()) {
        println!(
            "Final values: {} ${:.2}, {} ${:.2}\n",
            payload.dataset1_name, v1, payload.dataset2_name, v2
        );
    }

    if table {
        payload.pretty_print_table();
    }

    emit_json(&payload.to_json()?, output)
}

fn emit_json(json: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .context(format!("Failed to write payload to {:?}", path))?;
            println!("Payload saved to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
