use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use taskorder::{TaskDescriptor, recommend_order, schedule};

/// Per-task inputs: due date as a day offset, estimate, raw dependency picks.
type TaskSeed = (Option<i64>, Option<u32>, Vec<usize>);

fn seed_strategy() -> impl Strategy<Value = TaskSeed> {
    (
        proptest::option::of(0..20i64),
        proptest::option::of(1..8u32),
        proptest::collection::vec(any::<usize>(), 0..4),
    )
}

fn title(i: usize) -> String {
    format!("t{:02}", i)
}

fn descriptor(i: usize, due_days: Option<i64>, hours: Option<u32>) -> TaskDescriptor {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    TaskDescriptor {
        title: title(i),
        estimated_hours: hours,
        due_date: due_days.map(|d| base + Duration::days(d)),
        dependencies: BTreeSet::new(),
    }
}

/// Acyclic batch: task `i` may only depend on tasks `0..i`.
fn dag_tasks(seeds: &[TaskSeed]) -> Vec<TaskDescriptor> {
    seeds
        .iter()
        .enumerate()
        .map(|(i, (due, hours, picks))| {
            let mut task = descriptor(i, *due, *hours);
            if i > 0 {
                for pick in picks {
                    task.dependencies.insert(title(pick % i));
                }
            }
            task
        })
        .collect()
}

fn due_only_sort(tasks: &[TaskDescriptor]) -> Vec<String> {
    let mut sorted: Vec<&TaskDescriptor> = tasks.iter().collect();
    sorted.sort_by_key(|t| t.due_key());
    sorted.iter().map(|t| t.title.clone()).collect()
}

proptest! {
    #[test]
    fn without_dependencies_order_is_due_then_estimate(
        seeds in proptest::collection::vec(seed_strategy(), 0..12)
    ) {
        let tasks: Vec<TaskDescriptor> = seeds
            .iter()
            .enumerate()
            .map(|(i, (due, hours, _))| descriptor(i, *due, *hours))
            .collect();

        let mut expected: Vec<&TaskDescriptor> = tasks.iter().collect();
        expected.sort_by_key(|t| (t.due_key(), t.hours_key()));
        let expected: Vec<String> = expected.iter().map(|t| t.title.clone()).collect();

        prop_assert_eq!(recommend_order(&tasks), expected);
    }

    #[test]
    fn dag_order_respects_every_dependency(
        seeds in proptest::collection::vec(seed_strategy(), 1..12)
    ) {
        let tasks = dag_tasks(&seeds);
        let result = schedule(&tasks);

        prop_assert!(!result.is_fallback());
        prop_assert_eq!(result.order.len(), tasks.len());

        let position: HashMap<&str, usize> = result
            .order
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        for task in &tasks {
            for dep in &task.dependencies {
                prop_assert!(
                    position[dep.as_str()] < position[task.title.as_str()],
                    "{} must come before {}", dep, task.title
                );
            }
        }
    }

    #[test]
    fn each_step_takes_the_earliest_ready_task(
        seeds in proptest::collection::vec(seed_strategy(), 1..12)
    ) {
        let tasks = dag_tasks(&seeds);
        let order = recommend_order(&tasks);
        let by_title: HashMap<&str, &TaskDescriptor> =
            tasks.iter().map(|t| (t.title.as_str(), t)).collect();

        // Skip the fast path: it ranks by estimate, not title.
        prop_assume!(tasks.iter().any(TaskDescriptor::has_dependencies));

        let mut done: HashSet<&str> = HashSet::new();
        for chosen in &order {
            let best = tasks
                .iter()
                .filter(|t| !done.contains(t.title.as_str()))
                .filter(|t| t.dependencies.iter().all(|d| done.contains(d.as_str())))
                .map(|t| (t.due_key(), t.title.as_str()))
                .min();

            let chosen_task = by_title[chosen.as_str()];
            prop_assert_eq!(best, Some((chosen_task.due_key(), chosen.as_str())));
            done.insert(chosen.as_str());
        }
    }

    #[test]
    fn a_cycle_gives_the_plain_due_date_sort(
        seeds in proptest::collection::vec(seed_strategy(), 2..12),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let mut tasks = dag_tasks(&seeds);
        let n = tasks.len();
        let (a, b) = (a % n, b % n);
        prop_assume!(a != b);

        tasks[a].dependencies.insert(title(b));
        tasks[b].dependencies.insert(title(a));

        let result = schedule(&tasks);

        prop_assert!(result.is_fallback());
        prop_assert_eq!(result.order.len(), n);
        prop_assert_eq!(result.order, due_only_sort(&tasks));
    }

    #[test]
    fn dangling_references_do_not_change_the_order(
        seeds in proptest::collection::vec(seed_strategy(), 1..12),
        ghosts in proptest::collection::vec(any::<usize>(), 0..6),
    ) {
        let mut tasks = dag_tasks(&seeds);
        // A dangling reference on the first task puts both runs on the graph path.
        tasks[0].dependencies.insert("ghost-root".to_string());
        let baseline = recommend_order(&tasks);

        let n = tasks.len();
        for (k, g) in ghosts.iter().enumerate() {
            tasks[g % n].dependencies.insert(format!("ghost-{k}"));
        }

        prop_assert_eq!(recommend_order(&tasks), baseline);
    }
}
