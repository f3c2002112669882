#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::{HashSet, VecDeque};
    use taskroll::db::db::Db;
    use taskroll::db::tasks::Tasks;
    use taskroll::libs::error::TaskError;
    use taskroll::libs::task::{Priority, Task, TaskFilter, TaskUpdate};
    use taskroll::libs::workflow::{select_ordinal, GambleDecision, Outcome, Prompt, Workflow};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Answers questions from a fixed script and records what was asked.
    struct ScriptedPrompt {
        answers: VecDeque<String>,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, question: &str) -> Result<String> {
            self.asked.push(question.to_string());
            self.answers.pop_front().ok_or_else(|| anyhow!("script exhausted at '{}'", question))
        }
    }

    struct WorkflowTestContext {
        _temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for WorkflowTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("workflows.db")).unwrap();
            WorkflowTestContext {
                _temp_dir: temp_dir,
                tasks: Tasks::with_db(db),
            }
        }
    }

    impl WorkflowTestContext {
        fn seed(&mut self, titles: &[&str]) -> Vec<i64> {
            for title in titles {
                self.tasks.insert(title, "").unwrap();
            }
            self.tasks.list_all().unwrap().iter().map(|t| t.id).collect()
        }
    }

    fn sample_tasks() -> Vec<Task> {
        (1..=3)
            .map(|id| Task {
                id: id * 10,
                title: format!("Task {}", id),
                description: String::new(),
                completed: false,
                priority: None,
            })
            .collect()
    }

    #[test]
    fn test_select_ordinal_bounds() {
        let tasks = sample_tasks();

        assert_eq!(select_ordinal(&tasks, "1").unwrap().id, 10);
        assert_eq!(select_ordinal(&tasks, " 2 ").unwrap().id, 20);
        assert_eq!(select_ordinal(&tasks, "3").unwrap().id, 30);

        for input in ["0", "4", "abc", "", "-1", "1.0", "99999999999999999999"] {
            assert_eq!(
                select_ordinal(&tasks, input).unwrap_err(),
                TaskError::InvalidSelection(input.trim().to_string())
            );
        }
    }

    #[test]
    fn test_gamble_decisions() {
        assert_eq!("yes".parse::<GambleDecision>().unwrap(), GambleDecision::Accept);
        assert_eq!(" Accept ".parse::<GambleDecision>().unwrap(), GambleDecision::Accept);
        assert_eq!("no".parse::<GambleDecision>().unwrap(), GambleDecision::Reject);
        assert_eq!("reject".parse::<GambleDecision>().unwrap(), GambleDecision::Reject);
        assert_eq!("CANCEL".parse::<GambleDecision>().unwrap(), GambleDecision::Cancel);
        assert!("maybe".parse::<GambleDecision>().is_err());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_choose_task(ctx: &mut WorkflowTestContext) {
        let tasks = sample_tasks();

        let mut prompt = ScriptedPrompt::new(&["3"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).choose_task(&tasks).unwrap();
        assert_eq!(outcome, Outcome::Selected(tasks[2].clone()));

        let mut prompt = ScriptedPrompt::new(&["4"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).choose_task(&tasks).unwrap();
        assert_eq!(outcome, Outcome::Rejected(TaskError::InvalidSelection("4".to_string())));

        let mut prompt = ScriptedPrompt::new(&[]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).choose_task(&[]).unwrap();
        assert_eq!(outcome, Outcome::Empty);
        assert!(prompt.asked.is_empty());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_workflows_on_empty_store(ctx: &mut WorkflowTestContext) {
        let mut prompt = ScriptedPrompt::new(&[]);
        let mut rng = StdRng::seed_from_u64(7);

        let mut workflow = Workflow::new(&mut ctx.tasks, &mut prompt);
        assert_eq!(workflow.set_priority().unwrap(), Outcome::Empty);
        assert_eq!(workflow.edit_task().unwrap(), Outcome::Empty);
        assert_eq!(workflow.gamble_task(&mut rng).unwrap(), Outcome::Empty);

        assert!(prompt.asked.is_empty());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_set_priority(ctx: &mut WorkflowTestContext) {
        let ids = ctx.seed(&["Taxes", "Laundry", "Emails"]);

        let mut prompt = ScriptedPrompt::new(&["2", " Medium "]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).set_priority().unwrap();

        let updated = outcome.selected().unwrap();
        assert_eq!(updated.id, ids[1]);
        assert_eq!(updated.priority, Some(Priority::Medium));

        let stored = ctx.tasks.get_by_id(ids[1]).unwrap().unwrap();
        assert_eq!(stored.priority, Some(Priority::Medium));
        assert_eq!(ctx.tasks.count_without_priority().unwrap(), 2);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_set_priority_rejects_unknown_level(ctx: &mut WorkflowTestContext) {
        ctx.seed(&["Taxes"]);
        let before = ctx.tasks.list_all().unwrap();

        let mut prompt = ScriptedPrompt::new(&["1", "critical"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).set_priority().unwrap();

        assert_eq!(outcome, Outcome::Rejected(TaskError::InvalidPriority("critical".to_string())));
        assert_eq!(ctx.tasks.list_all().unwrap(), before);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_set_priority_stops_on_bad_choice(ctx: &mut WorkflowTestContext) {
        ctx.seed(&["Taxes", "Laundry"]);

        let mut prompt = ScriptedPrompt::new(&["0"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).set_priority().unwrap();

        assert_eq!(outcome, Outcome::Rejected(TaskError::InvalidSelection("0".to_string())));
        // The difficulty question is never reached
        assert_eq!(prompt.asked.len(), 1);
        assert_eq!(ctx.tasks.count_without_priority().unwrap(), 2);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_edit_task(ctx: &mut WorkflowTestContext) {
        let ids = ctx.seed(&["Old title"]);

        let mut prompt = ScriptedPrompt::new(&["1", "title", "  New title  "]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).edit_task().unwrap();
        assert_eq!(outcome.selected().unwrap().title, "New title");

        let mut prompt = ScriptedPrompt::new(&["1", "DESCRIPTION", "Details here   "]);
        Workflow::new(&mut ctx.tasks, &mut prompt).edit_task().unwrap();

        let stored = ctx.tasks.get_by_id(ids[0]).unwrap().unwrap();
        assert_eq!(stored.title, "New title");
        assert_eq!(stored.description, "Details here");
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_edit_task_rejections(ctx: &mut WorkflowTestContext) {
        ctx.seed(&["Keep me"]);
        let before = ctx.tasks.list_all().unwrap();

        let mut prompt = ScriptedPrompt::new(&["1", "title", "    "]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).edit_task().unwrap();
        assert_eq!(outcome, Outcome::Rejected(TaskError::EmptyTitle));

        let mut prompt = ScriptedPrompt::new(&["1", "priority"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).edit_task().unwrap();
        assert_eq!(outcome, Outcome::Rejected(TaskError::InvalidField("priority".to_string())));
        assert_eq!(prompt.asked.len(), 2);

        let mut prompt = ScriptedPrompt::new(&["abc"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).edit_task().unwrap();
        assert_eq!(outcome, Outcome::Rejected(TaskError::InvalidSelection("abc".to_string())));

        assert_eq!(ctx.tasks.list_all().unwrap(), before);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_edit_task_clears_description(ctx: &mut WorkflowTestContext) {
        ctx.tasks.insert("Task", "Some description").unwrap();

        let mut prompt = ScriptedPrompt::new(&["1", "description", ""]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).edit_task().unwrap();

        assert_eq!(outcome.selected().unwrap().description, "");
        assert_eq!(ctx.tasks.list_all().unwrap()[0].description, "");
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_gamble_never_picks_completed(ctx: &mut WorkflowTestContext) {
        let ids = ctx.seed(&["Done already", "Open one", "Open two", "Also done"]);
        ctx.tasks.complete(ids[0]).unwrap();
        ctx.tasks.complete(ids[3]).unwrap();

        let mut seen = HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut prompt = ScriptedPrompt::new(&["yes"]);
            let picked = Workflow::new(&mut ctx.tasks, &mut prompt)
                .gamble_task(&mut rng)
                .unwrap()
                .selected()
                .unwrap();

            assert!(!picked.completed);
            assert!(picked.id == ids[1] || picked.id == ids[2]);
            seen.insert(picked.id);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_gamble_rejects_until_accepted(ctx: &mut WorkflowTestContext) {
        let ids = ctx.seed(&["Only open task", "Finished"]);
        ctx.tasks.complete(ids[1]).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let mut prompt = ScriptedPrompt::new(&["no", "no", "maybe", "", "reject", "accept"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).gamble_task(&mut rng).unwrap();

        assert_eq!(outcome.selected().unwrap().id, ids[0]);
        assert_eq!(prompt.asked.len(), 6);
        assert!(prompt.answers.is_empty());
    }

    /// Alternates uniform draws over two items: first, second, first, ...
    fn alternating_rng() -> StepRng {
        StepRng::new(0, 1 << 63)
    }

    fn alternating_indices(draws: usize) -> Vec<usize> {
        let mut rng = alternating_rng();
        (0..draws).map(|_| rng.gen_range(0..2)).collect()
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_gamble_invalid_answer_keeps_current_draw(ctx: &mut WorkflowTestContext) {
        let ids = ctx.seed(&["First open", "Second open"]);
        let order = alternating_indices(2);
        assert_ne!(order[0], order[1]);

        let mut rng = alternating_rng();
        let mut prompt = ScriptedPrompt::new(&["maybe", "", "later", "yes"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).gamble_task(&mut rng).unwrap();

        // A redraw after any of the unrecognized answers would land on the other task
        assert_eq!(outcome.selected().unwrap().id, ids[order[0]]);
        assert_eq!(prompt.asked.len(), 4);
        assert_eq!(rng.gen_range(0..2), order[1]);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_gamble_rejected_task_can_return(ctx: &mut WorkflowTestContext) {
        let ids = ctx.seed(&["First open", "Second open"]);
        let order = alternating_indices(3);
        assert_ne!(order[0], order[1]);
        assert_eq!(order[0], order[2]);

        let mut rng = alternating_rng();
        let mut prompt = ScriptedPrompt::new(&["no", "no", "yes"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).gamble_task(&mut rng).unwrap();

        // The third draw repeats the first one, which had been rejected
        assert_eq!(outcome.selected().unwrap().id, ids[order[0]]);
        assert_eq!(prompt.asked.len(), 3);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_gamble_cancel(ctx: &mut WorkflowTestContext) {
        ctx.seed(&["A", "B"]);

        let mut rng = StdRng::seed_from_u64(1);
        let mut prompt = ScriptedPrompt::new(&["no", "cancel", "yes"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).gamble_task(&mut rng).unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(prompt.answers.len(), 1);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_gamble_all_completed(ctx: &mut WorkflowTestContext) {
        let ids = ctx.seed(&["A", "B"]);
        for id in ids {
            ctx.tasks.complete(id).unwrap();
        }

        let mut rng = StdRng::seed_from_u64(3);
        let mut prompt = ScriptedPrompt::new(&[]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).gamble_task(&mut rng).unwrap();

        assert_eq!(outcome, Outcome::Empty);
        assert!(prompt.asked.is_empty());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_search_by_priority(ctx: &mut WorkflowTestContext) {
        let ids = ctx.seed(&["H1", "None", "M1", "H2", "E1", "H3"]);
        let levels = [
            (ids[0], Priority::Hard),
            (ids[2], Priority::Medium),
            (ids[3], Priority::Hard),
            (ids[4], Priority::Easy),
            (ids[5], Priority::Hard),
        ];
        for (id, priority) in levels {
            ctx.tasks.update(id, &TaskUpdate::Priority(Some(priority))).unwrap();
        }

        let hard = ctx.tasks.fetch(TaskFilter::ByPriority(Priority::Hard)).unwrap();
        assert_eq!(hard.iter().map(|t| t.id).collect::<Vec<_>>(), vec![ids[0], ids[3], ids[5]]);

        // Ordinals index the filtered list, not the full one
        let mut prompt = ScriptedPrompt::new(&["hard", "2"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).search_by_priority().unwrap();
        assert_eq!(outcome.selected().unwrap().title, "H2");

        let mut prompt = ScriptedPrompt::new(&["hard", "4"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).search_by_priority().unwrap();
        assert_eq!(outcome, Outcome::Rejected(TaskError::InvalidSelection("4".to_string())));
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_search_by_priority_no_matches(ctx: &mut WorkflowTestContext) {
        ctx.seed(&["Plain"]);

        let mut prompt = ScriptedPrompt::new(&["easy"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).search_by_priority().unwrap();
        assert_eq!(outcome, Outcome::Empty);

        let mut prompt = ScriptedPrompt::new(&["purple"]);
        let outcome = Workflow::new(&mut ctx.tasks, &mut prompt).search_by_priority().unwrap();
        assert_eq!(outcome, Outcome::Rejected(TaskError::InvalidPriority("purple".to_string())));
    }
}
