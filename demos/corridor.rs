use birdbrain::{
    algo::QAgent,
    approx::MlpConfig,
    config::AgentConfig,
    gym::Corridor,
};
use burn::backend::{ndarray::NdArrayDevice, Autodiff, NdArray};
use log::info;
use once_cell::sync::Lazy;
use rand::thread_rng;

type QBackend = Autodiff<NdArray>;

static DEVICE: Lazy<NdArrayDevice> = Lazy::new(NdArrayDevice::default);

const NUM_EPISODES: u32 = 200;
const MAX_TICKS: u32 = 50_000;
const DT: f32 = 0.02;

fn main() -> birdbrain::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| birdbrain::Error::Configuration {
                    name: path.clone(),
                    reason: e.to_string(),
                })?;
            AgentConfig::from_json(&json)?
        }
        None => AgentConfig {
            exploration_enabled: true,
            ..AgentConfig::bird()
        },
    };

    let model = MlpConfig::new(config.state_size, config.num_actions).init::<QBackend>(&*DEVICE)?;
    let mut agent = QAgent::new(model, config, thread_rng())?;
    let mut env = Corridor::new(10.0, DT);

    'episodes: for _ in 0..NUM_EPISODES {
        for _ in 0..MAX_TICKS {
            if agent.tick(&mut env, DT)?.terminal {
                continue 'episodes;
            }
        }
        info!("bird stayed airborne for {} ticks", MAX_TICKS);
        break;
    }

    info!("\n{}", agent.report());
    Ok(())
}
