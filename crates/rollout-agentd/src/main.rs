mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, error, info, warn};

use rollout_core::{RunnerContext, SeededDraw, WorkerPool};
use rollout_model::EpisodeConfig;
use rollout_observe::{LoggerTimeZone, init_local_offset, init_logger};
use rollout_prometheus::PrometheusMetrics;

use crate::config::AgentConfig;

fn main() -> anyhow::Result<()> {
    // 1) config
    let cfg = AgentConfig::load(std::env::args().nth(1))?;

    // 2) logger; the local offset must be read before the runtime spawns threads
    if cfg.logger.tz == LoggerTimeZone::Local {
        init_local_offset();
    }
    let logger = cfg.logger.clone().with_env_overrides()?;
    init_logger(&logger)?;
    info!(format = %logger.format, level = %logger.level, "logger initialized");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?
        .block_on(run(cfg))
}

async fn run(cfg: AgentConfig) -> anyhow::Result<()> {
    // 3) episode config; rejected here, never mid-episode
    let episode = EpisodeConfig::try_from(&cfg.episode).context("invalid episode config")?;
    info!(%episode, pool_size = cfg.pool_size, rounds = cfg.rounds, "starting episodes");

    // 4) metrics + context
    let metrics = PrometheusMetrics::new()?;
    let mut ctx = RunnerContext::default().with_metrics(Arc::new(metrics.clone()));
    if let Some(seed) = cfg.seed {
        ctx = ctx.with_draw(Arc::new(SeededDraw::new(seed)));
    }

    // 5) pool
    let pool = Arc::new(WorkerPool::new(cfg.pool_size, episode, ctx)?);
    let on_signal = Arc::clone(&pool);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("interrupt received; aborting in-flight episodes");
                on_signal.cancel();
            }
            Err(e) => error!("failed to listen for ctrl-c: {e}"),
        }
    });

    // 6) rounds
    for round in 1..=cfg.rounds {
        let reports = pool.run_all().await?;
        for report in &reports {
            match &report.result {
                Ok(res) => info!(round, "{} finished with {} steps", report.identity, res.steps_completed),
                Err(e) => warn!(round, "{} aborted: {e}", report.identity),
            }
        }
        if pool.is_cancelled() {
            warn!(round, "stopping early after interrupt");
            break;
        }
    }

    debug!("metrics:\n{}", metrics.encode_text()?);
    Ok(())
}
