//! lfd - LogFrame Designer client
//!
//! ドラフトエンジンに対してLogFrameのドラフト・確認・改善を対話的に行う

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;

use lfd_client::adapter::config::{Config, API_BASE_ENV};
use lfd_client::driver::workflow::resolve_intake;
use lfd_client::driver::{Args, DraftSessionWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (flag > env > file > default)
    let config = Config::load(&args.config)?
        .with_base_address_override(args.api_base.as_deref(), std::env::var(API_BASE_ENV).ok());

    let raw_input = resolve_intake(args.text.as_deref(), args.input.as_deref())?;

    // Create workflow with injected dependencies
    let workflow = DraftSessionWorkflow::new(config, raw_input);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    workflow.execute(args.generate, stdin, &mut stdout).await
}
