use color_eyre::eyre::eyre;
use env_logger::Env;
use football_core::config::{GameMode, MatchConfig};
use football_core::r#match::events::MatchEvent;
use football_core::r#match::{Difficulty, FootballEngine, FrameInput, MatchResult};
use football_core::utils::TimeEstimation;
use log::{debug, info};
use rayon::prelude::*;
use std::env;
use std::time::{Duration, Instant};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config()?;

    let is_realtime = env::var("REALTIME") == Ok(String::from("1"));

    let matches = env::var("MATCHES")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);

    if is_realtime {
        info!("realtime match started at {} fps", config.window.fps);

        let now = Instant::now();
        let result = play_realtime(config).await;

        info!("match played: {} ms", now.elapsed().as_millis());

        report(&result);
        println!("{}", serde_json::to_string_pretty(&result)?);

        return Ok(());
    }

    let (results, estimated) = tokio::task::spawn_blocking(move || {
        TimeEstimation::estimate(|| play_batch(&config, matches))
    })
    .await?;

    info!("{} match(es) simulated: {} ms", results.len(), estimated);

    for result in &results {
        report(result);
    }

    if let [result] = results.as_slice() {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(())
}

fn load_config() -> color_eyre::Result<MatchConfig> {
    let mut config = match env::var("CONFIG") {
        Ok(path) => {
            info!("loading config from {}", path);
            MatchConfig::load(&path)?
        }
        Err(_) => MatchConfig::default(),
    };

    if let Ok(value) = env::var("DIFFICULTY") {
        config.ai.difficulty = value.parse::<Difficulty>().map_err(|err| eyre!(err))?;
    }

    config.mode = GameMode::AiVsAi;
    config.ai.enabled = true;

    Ok(config)
}

fn play_batch(config: &MatchConfig, matches: usize) -> Vec<MatchResult> {
    (0..matches)
        .into_par_iter()
        .map(|_| FootballEngine::play(config.clone()))
        .collect()
}

async fn play_realtime(config: MatchConfig) -> MatchResult {
    let dt = config.frame_dt();
    let idle = FrameInput::idle();

    let mut engine = FootballEngine::new(config);
    let mut interval = tokio::time::interval(Duration::from_secs_f32(dt));

    while !engine.is_finished() {
        interval.tick().await;

        for event in engine.frame(&idle, dt) {
            match event {
                MatchEvent::Goal(side) => {
                    let score = engine.context.score;
                    info!("GOAL {:?} ({}:{})", side, score.left, score.right);
                }
                other => debug!("{:?}", other),
            }
        }
    }

    engine.into_result()
}

fn report(result: &MatchResult) {
    match result.winner() {
        Some(side) => info!(
            "final score {}:{}, {:?} wins, hits {}:{}",
            result.score.left, result.score.right, side, result.hits.left, result.hits.right
        ),
        None => info!(
            "final score {}:{}, draw, hits {}:{}",
            result.score.left, result.score.right, result.hits.left, result.hits.right
        ),
    }
}
