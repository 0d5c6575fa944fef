use anyhow::Result;
use numguess_core::{Configurable, DefaultEvaluator, Env as _, Evaluator as _};
use numguess_env::{
    BisectionPolicy, GuessAct, GuessNumberEnv, GuessNumberEnvConfig, GuessNumberError,
    Observation, RandomPolicy, RandomPolicyConfig, RewardShaping,
};
use tempdir::TempDir;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn env(seed: i64) -> Result<GuessNumberEnv> {
    init_logger();
    GuessNumberEnv::build(&GuessNumberEnvConfig::default(), seed)
}

/// Guesses once and returns the target of the current episode.
fn target_of(env: &mut GuessNumberEnv) -> Result<i64> {
    let (step, _) = env.step(&GuessAct::new(0))?;
    Ok(step.info.target)
}

#[test]
fn test_reset_initial_state() -> Result<()> {
    let mut env = env(42)?;
    env.step(&GuessAct::new(50))?;

    let obs = env.reset()?;
    assert_eq!(obs.hint(), Observation::None);
    assert_eq!(env.obs().hint(), Observation::None);
    assert_eq!(env.steps_remaining(), 7);
    assert_eq!(env.max_steps(), 7);
    assert_eq!(env.n_actions(), 101);
    assert!(!env.is_over());
    assert!(env.info().actions.is_empty());
    assert!((0..=100).contains(&env.info().target));
    Ok(())
}

#[test]
fn test_hints_follow_target() -> Result<()> {
    let mut env = env(0)?;
    for ix in 0..50 {
        env.reset_with_index(ix)?;
        let target = env.info().target;

        if target > 0 {
            let (step, _) = env.step(&GuessAct::new(target - 1))?;
            assert_eq!(step.obs.hint(), Observation::Higher);
        }
        if target < 100 {
            let (step, _) = env.step(&GuessAct::new(target + 1))?;
            assert_eq!(step.obs.hint(), Observation::Lower);
        }

        let (step, _) = env.step(&GuessAct::new(target))?;
        let (obs, reward, done, info) = step.into_parts();
        assert_eq!(obs.hint(), Observation::Correct);
        assert_eq!(reward, 0.0);
        assert!(done);
        assert_eq!(info.target, target);
    }
    Ok(())
}

#[test]
fn test_episode_ends_when_budget_runs_out() -> Result<()> {
    let mut env = env(3)?;
    let target = env.info().target;
    let wrong = if target == 100 { 0 } else { 100 };

    for i in 0..7 {
        let (step, _) = env.step(&GuessAct::new(wrong))?;
        assert_eq!(step.is_done(), i == 6);
        if i < 6 {
            assert_eq!(step.reward, 0.0);
        } else {
            assert!(step.is_truncated);
            assert_eq!(step.reward, -((wrong - target).abs() as f32));
        }
    }
    assert!(env.is_over());
    assert_eq!(env.steps_remaining(), 0);
    assert_eq!(env.info().actions, vec![wrong; 7]);
    Ok(())
}

#[test]
fn test_step_after_episode_over_fails() -> Result<()> {
    let mut env = env(5)?;
    let target = env.info().target;
    env.step(&GuessAct::new(target))?;

    let err = env.step(&GuessAct::new(target)).err().expect("stepping a finished episode");
    assert_eq!(
        err.downcast_ref::<GuessNumberError>(),
        Some(&GuessNumberError::EpisodeOver)
    );

    // Reset makes the environment usable again
    env.reset()?;
    assert!(env.step(&GuessAct::new(target)).is_ok());
    Ok(())
}

#[test]
fn test_seed_reproduces_targets() -> Result<()> {
    let mut env = env(0)?;

    let draw = |env: &mut GuessNumberEnv| -> Result<Vec<i64>> {
        env.seed(42);
        (0..20)
            .map(|_| {
                env.reset()?;
                target_of(&mut *env)
            })
            .collect()
    };
    let targets1 = draw(&mut env)?;
    let targets2 = draw(&mut env)?;
    assert_eq!(targets1, targets2);
    assert!(targets1.iter().any(|&t| t != targets1[0]));
    Ok(())
}

#[test]
fn test_seed_42_step_50_is_reproducible() -> Result<()> {
    let mut env1 = env(42)?;
    let mut env2 = env(42)?;
    let (step1, _) = env1.step(&GuessAct::new(50))?;
    let (step2, _) = env2.step(&GuessAct::new(50))?;

    assert_eq!(step1.info.target, step2.info.target);
    assert_eq!(step1.obs, step2.obs);
    assert_eq!(
        step1.obs.hint(),
        Observation::from_guess(50, step1.info.target)
    );
    Ok(())
}

#[test]
fn test_step_penalty() -> Result<()> {
    init_logger();
    let config = GuessNumberEnvConfig::default().reward(RewardShaping::StepPenalty(0.1));
    let mut env = GuessNumberEnv::build(&config, 11)?;
    let target = env.info().target;
    let wrong = if target == 0 { 1 } else { 0 };

    let (step, _) = env.step(&GuessAct::new(wrong))?;
    assert_eq!(step.reward, -0.1);
    let (step, _) = env.step(&GuessAct::new(target))?;
    assert_eq!(step.reward, 0.0);
    Ok(())
}

#[test]
fn test_invalid_config() {
    init_logger();
    let config = GuessNumberEnvConfig::default().max_number(0);
    let err = GuessNumberEnv::build(&config, 0).err().expect("max_number = 0 is rejected");
    assert!(matches!(
        err.downcast_ref::<GuessNumberError>(),
        Some(GuessNumberError::InvalidConfig(_))
    ));
}

#[test]
fn test_step_with_reset() -> Result<()> {
    let mut env = env(8)?;
    let target = env.info().target;

    let (step, record) = env.step_with_reset(&GuessAct::new(target))?;
    assert!(step.is_terminated);
    assert_eq!(step.init_obs.map(|o| o.hint()), Some(Observation::None));
    assert_eq!(record.get_scalar("distance")?, 0.0);
    assert!(!env.is_over());
    assert_eq!(env.steps_remaining(), 7);
    Ok(())
}

#[test]
fn test_bisection_always_wins() -> Result<()> {
    init_logger();
    let config = GuessNumberEnvConfig::default();
    let mut policy = BisectionPolicy::new(config.max_number)?;
    let mut evaluator = DefaultEvaluator::<GuessNumberEnv>::new(&config, 42, 200)?;
    let record = evaluator.evaluate(&mut policy)?;

    assert_eq!(record.get_scalar("Episode return")?, 0.0);
    assert!(record.get_scalar("Episode length")? <= 7.0);
    Ok(())
}

#[test]
fn test_random_policy_from_yaml() -> Result<()> {
    init_logger();
    let dir = TempDir::new("random_policy")?;
    let path = dir.path().join("random_policy.yaml");
    let policy_config = RandomPolicyConfig {
        max_number: 100,
        seed: Some(42),
    };
    std::fs::write(&path, serde_yaml::to_string(&policy_config)?)?;

    let mut policy = RandomPolicy::build_from_path(&path)?;
    let config = GuessNumberEnvConfig::default();
    let mut evaluator = DefaultEvaluator::<GuessNumberEnv>::new(&config, 42, 20)?;
    let record = evaluator.evaluate(&mut policy)?;

    assert!(record.get_scalar("Episode return")? <= 0.0);
    assert!(record.get_scalar("Episode length")? >= 1.0);
    Ok(())
}

#[test]
fn test_random_policy_rejects_bad_yaml() -> Result<()> {
    init_logger();
    let dir = TempDir::new("random_policy")?;
    let path = dir.path().join("random_policy.yaml");
    std::fs::write(&path, "max_number: -1\nseed: 1\n")?;

    let err = RandomPolicy::build_from_path(&path)
        .err()
        .expect("an empty guess range is rejected");
    assert!(matches!(
        err.downcast_ref::<GuessNumberError>(),
        Some(GuessNumberError::InvalidConfig(_))
    ));
    Ok(())
}

#[test]
fn test_step_record_holds_action_history() -> Result<()> {
    let mut env = env(13)?;
    let target = env.info().target;
    let wrong = if target == 0 { 1 } else { 0 };

    let (_, record) = env.step(&GuessAct::new(wrong))?;
    assert_eq!(record.get_array1("actions")?, vec![wrong as f32]);
    let (_, record) = env.step(&GuessAct::new(target))?;
    assert_eq!(record.get_array1("actions")?, vec![wrong as f32, target as f32]);
    Ok(())
}
