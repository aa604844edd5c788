// tests/env_determinism_tests.rs
//
// Determinism tests for the drone environment.
//
// - Same seed + same action sequence => byte-identical observations
// - Unseeded resets are replayable via the recorded seed
// - VecEnv lockstep matches independently stepped single environments

use dronewind::{default_registry, Action, DroneWindEnv, EnvError, StepResult, VecEnv, ENV_ID};

fn make_env() -> DroneWindEnv {
    DroneWindEnv::new(None, None).expect("default config is valid")
}

/// Cycle through the full action set.
fn action_at(i: usize) -> Action {
    Action::ALL[i % Action::ALL.len()]
}

fn rollout(env: &mut DroneWindEnv, num_steps: usize) -> Vec<StepResult> {
    (0..num_steps)
        .map(|i| env.step(action_at(i).id()).expect("valid action"))
        .collect()
}

/// Test: Same seed + same actions => identical observations, rewards, flags.
#[test]
fn test_same_seed_same_actions_identical_rollouts() {
    let seed = 12345u64;
    let num_steps = 50;

    // Run 1
    let mut env1 = make_env();
    let (obs1, _) = env1.reset(Some(seed));
    let results1 = rollout(&mut env1, num_steps);

    // Run 2 with same seed
    let mut env2 = make_env();
    let (obs2, _) = env2.reset(Some(seed));
    let results2 = rollout(&mut env2, num_steps);

    // Compare initial observations
    assert_eq!(
        obs1.to_canonical_json().unwrap(),
        obs2.to_canonical_json().unwrap(),
        "Initial observations must be byte-identical"
    );

    // Compare all step results
    for (i, (r1, r2)) in results1.iter().zip(results2.iter()).enumerate() {
        assert_eq!(
            r1.observation.to_canonical_json().unwrap(),
            r2.observation.to_canonical_json().unwrap(),
            "Observation at step {} must be byte-identical",
            i
        );
        assert!(
            (r1.reward - r2.reward).abs() < 1e-15,
            "Reward at step {} must be identical: {} vs {}",
            i,
            r1.reward,
            r2.reward
        );
        assert_eq!(
            r1.terminated, r2.terminated,
            "Terminated at step {} must be identical",
            i
        );
    }
}

/// Test: An unseeded reset records a seed that replays the episode exactly.
#[test]
fn test_unseeded_reset_is_replayable() {
    let num_steps = 25;

    let mut env1 = make_env();
    env1.reset(None);
    let recorded_seed = env1.seed();
    let results1 = rollout(&mut env1, num_steps);

    let mut env2 = make_env();
    env2.reset(Some(recorded_seed));
    let results2 = rollout(&mut env2, num_steps);

    for (i, (r1, r2)) in results1.iter().zip(results2.iter()).enumerate() {
        assert_eq!(
            r1.observation.to_canonical_json().unwrap(),
            r2.observation.to_canonical_json().unwrap(),
            "Replayed observation at step {} must be byte-identical",
            i
        );
    }
}

/// Test: Different seeds => different wind draws.
#[test]
fn test_different_seeds_different_wind() {
    let mut env1 = make_env();
    env1.reset(Some(100));

    let mut env2 = make_env();
    env2.reset(Some(200));

    // Start state is fixed, so the initial wind is where seeds show up.
    assert_ne!(
        env1.state().wind,
        env2.state().wind,
        "Different seeds should produce different initial wind"
    );
}

/// Test: VecEnv lockstep matches independently stepped single environments.
#[test]
fn test_vec_env_matches_single_envs() {
    let seeds: Vec<u64> = vec![7, 8, 9];
    let n_envs = seeds.len();
    let num_steps = 20;

    let mut vec_env = VecEnv::new(n_envs, None).unwrap();
    vec_env.reset_all(Some(&seeds));

    let mut singles: Vec<DroneWindEnv> = (0..n_envs).map(|_| make_env()).collect();
    for (env, &seed) in singles.iter_mut().zip(seeds.iter()) {
        env.reset(Some(seed));
    }

    for step in 0..num_steps {
        let action = action_at(step);
        let actions = vec![action.id(); n_envs];
        let vec_results = vec_env.step(&actions).expect("valid actions");

        for (env_idx, single) in singles.iter_mut().enumerate() {
            let single_result = single.step(action.id()).expect("valid action");
            assert_eq!(
                vec_results[env_idx].observation.to_canonical_json().unwrap(),
                single_result.observation.to_canonical_json().unwrap(),
                "Observation at step {} env {} must be identical",
                step,
                env_idx
            );
        }
    }
}

/// Test: VecEnv reset with fewer seeds than environments still works.
#[test]
fn test_vec_env_partial_seeds() {
    let mut vec_env = VecEnv::new(4, None).unwrap();
    let observations = vec_env.reset_all(Some(&[1000, 2000]));
    assert_eq!(observations.len(), 4);

    let seeds = vec_env.seeds();
    assert_eq!(seeds[0], 1000);
    assert_eq!(seeds[1], 2000);
    assert_eq!(seeds.len(), 4);
}

/// Test: Environments built through the registry behave like direct ones.
#[test]
fn test_registry_made_env_is_deterministic() {
    let registry = default_registry();

    let mut env1 = registry.make(ENV_ID, None, None).unwrap();
    let (_, _) = env1.reset(Some(55));
    let results1 = rollout(&mut env1, 15);

    let mut env2 = make_env();
    env2.reset(Some(55));
    let results2 = rollout(&mut env2, 15);

    for (i, (r1, r2)) in results1.iter().zip(results2.iter()).enumerate() {
        assert_eq!(
            r1.observation.to_canonical_json().unwrap(),
            r2.observation.to_canonical_json().unwrap(),
            "Observation at step {} must be byte-identical",
            i
        );
    }
}

/// Test: Unknown environment ids are rejected by the registry.
#[test]
fn test_registry_rejects_unknown_id() {
    let registry = default_registry();
    let err = registry.make("LunarLander-v2", None, None).unwrap_err();
    assert_eq!(
        err,
        EnvError::UnknownEnv {
            id: "LunarLander-v2".to_string()
        }
    );
}
