use birdbrain::{
    algo::QAgent,
    approx::{Approximator, MlpConfig},
    config::AgentConfig,
    env::Perception,
    exploration::ExplorationConfig,
    gym::Corridor,
};
use burn::backend::{Autodiff, NdArray};
use rand::{rngs::StdRng, SeedableRng};

type B = Autodiff<NdArray>;

const DT: f32 = 0.02;

fn agent(config: AgentConfig) -> QAgent<impl Approximator, StdRng> {
    let model = MlpConfig::new(config.state_size, config.num_actions)
        .init::<B>(&Default::default())
        .unwrap();
    QAgent::new(model, config, StdRng::seed_from_u64(3)).unwrap()
}

#[test]
fn bird_learns_over_several_episodes() {
    let config = AgentConfig {
        memory_capacity: 500,
        exploration_enabled: true,
        exploration: ExplorationConfig {
            initial: 50.0,
            min: 1.0,
            max: 50.0,
            decay_step: 0.01,
        },
        ..AgentConfig::bird()
    };
    let mut agent = agent(config);
    let mut env = Corridor::new(10.0, DT);

    let mut episodes = 0;
    for _ in 0..20_000 {
        let tick = agent.tick(&mut env, DT).unwrap();
        assert!(agent.memory().len() <= 500);
        if let Some(summary) = tick.training {
            assert!(summary.updates >= 1 && summary.updates <= 500);
            assert!(summary.mean_target.is_finite());
            episodes += 1;
        }
        if episodes == 5 {
            break;
        }
    }

    let report = agent.report();
    assert!(episodes >= 1, "the bird never hit a wall");
    assert_eq!(report.fail_count, episodes);
    assert!(report.best_timer > 0.0);
    assert!(report.exploration_rate < 50.0);
    assert!(!env.episode_ended(), "environment reset after every episode");
}

#[test]
fn go_runs_exactly_one_episode() {
    let mut agent = agent(AgentConfig::bird());
    // Gravity outweighs the strongest possible flap, so the episode must end
    let mut env = Corridor::new(4.0, DT).with_gravity(60.0);

    let stats = agent.go(&mut env, DT).unwrap();
    assert_eq!(stats.fail_count, 1);
    assert_eq!(stats.current_timer, 0.0);
    assert!(stats.best_timer > 0.0);
    assert!(agent.memory().is_empty());
}
