//! Command implementations for the header mapper CLI.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use hmap_ingest::{read_csv_file, read_template_headers, write_csv};
use hmap_map::{apply_reconciliation, reconcile};
use hmap_model::TemplateSchema;
use hmap_oracle::{GeminiConfig, GeminiOracle, HeaderOracle, build_mapping_prompt};
use hmap_server::{AppState, serve};

use crate::cli::{MapArgs, OracleArgs, ServeArgs, TemplateArgs};

pub fn run_serve(args: &ServeArgs) -> anyhow::Result<()> {
    let template = load_template(&args.template)?;
    let oracle = build_oracle(&args.oracle)?;
    let state = AppState {
        template: Arc::new(template),
        oracle,
    };
    let addr = SocketAddr::new(args.host, args.port);

    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    runtime
        .block_on(serve(addr, state))
        .with_context(|| format!("serve on {addr}"))
}

pub fn run_map(args: &MapArgs) -> anyhow::Result<()> {
    let template = load_template(&args.template)?;
    let oracle = build_oracle(&args.oracle)?;

    let table = read_csv_file(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    info!(headers = ?table.headers, "actual headers");

    let prompt = build_mapping_prompt(&template, &table.headers);
    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    let raw = runtime
        .block_on(oracle.propose_mapping(&prompt))
        .context("consult mapping oracle")?;

    let reconciliation =
        reconcile(&template, &table.headers, &raw).context("reconcile oracle response")?;
    let mapped = apply_reconciliation(&reconciliation, &template, &table);
    let body = write_csv(&mapped).context("serialize output")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, body).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote mapped file");
        }
        None => print!("{body}"),
    }
    Ok(())
}

pub fn run_template(args: &TemplateArgs) -> anyhow::Result<()> {
    let template = load_template(args)?;
    for header in template.iter() {
        println!("{header}");
    }
    Ok(())
}

fn load_template(args: &TemplateArgs) -> anyhow::Result<TemplateSchema> {
    match &args.template {
        Some(path) => {
            let headers = read_template_headers(path)
                .with_context(|| format!("read template {}", path.display()))?;
            TemplateSchema::new(headers)
                .with_context(|| format!("invalid template {}", path.display()))
        }
        None => Ok(TemplateSchema::default_template()),
    }
}

fn build_oracle(args: &OracleArgs) -> anyhow::Result<Arc<dyn HeaderOracle>> {
    let config = GeminiConfig::from_env()?.with_model(args.model.clone());
    let oracle = GeminiOracle::new(config).context("build oracle client")?;
    Ok(Arc::new(oracle))
}
