// src/engine/handlers.rs

//! Pure state transitions.
//!
//! Every function here takes the completed set by value and hands back the
//! new set together with the commands the shell should execute. Nothing in
//! this module touches storage or output.

use tracing::{debug, info};

use crate::curriculum::{Course, Curriculum};
use crate::progress::CompletedSet;
use crate::types::CourseId;
use crate::view::{CourseView, Notification, ViewModel};

/// Command produced by the pure core, to be executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCommand {
    /// Replace the rendered view.
    Render(ViewModel),
    /// Show a blocking message.
    Notify(Notification),
    /// Write this set to storage.
    Persist(CompletedSet),
}

/// Result of handling a single [`crate::engine::UiEvent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreStep {
    pub commands: Vec<CoreCommand>,
    /// Ids evicted from the completed set because they became locked.
    pub evicted: Vec<CourseId>,
}

/// Output of [`recompute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recomputed {
    pub completed: CompletedSet,
    pub view: ViewModel,
    pub evicted: Vec<CourseId>,
}

/// An unmet prerequisite, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPrerequisite {
    pub id: CourseId,
    /// Course name, or the raw id if no course carries it.
    pub name: String,
}

/// Derive locked/completed state for every course.
///
/// Locked courses are evicted from the completed set. Eviction repeats until
/// no completed course is locked, so chains settle in a single call and a
/// second call with the result is a no-op.
pub fn recompute(curriculum: &Curriculum, completed: CompletedSet) -> Recomputed {
    let mut completed = completed;
    let mut evicted: Vec<CourseId> = Vec::new();

    loop {
        let newly_locked: Vec<CourseId> = curriculum
            .courses()
            .filter(|c| completed.contains(&c.id) && curriculum.is_locked(c, &completed))
            .map(|c| c.id.clone())
            .collect();

        if newly_locked.is_empty() {
            break;
        }

        for id in newly_locked {
            completed.remove(&id);
            debug!(course = %id, "prerequisite no longer met; evicted from completed set");
            evicted.push(id);
        }
    }

    let view = ViewModel {
        courses: curriculum
            .courses()
            .map(|c| {
                let locked = curriculum.is_locked(c, &completed);
                CourseView {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    semester: c.semester,
                    locked,
                    completed: !locked && completed.contains(&c.id),
                }
            })
            .collect(),
    };

    Recomputed {
        completed,
        view,
        evicted,
    }
}

/// Flip membership of `id` in the set.
pub fn toggle(completed: CompletedSet, id: &str) -> CompletedSet {
    let mut completed = completed;
    if !completed.remove(id) {
        completed.insert(id);
    }
    completed
}

/// Unmet prerequisites of `course`, resolved to display names.
pub fn missing_prerequisites(
    curriculum: &Curriculum,
    completed: &CompletedSet,
    course: &Course,
) -> Vec<MissingPrerequisite> {
    curriculum
        .unmet_prerequisites(course, completed)
        .into_iter()
        .map(|id| MissingPrerequisite {
            id: id.to_string(),
            name: curriculum.display_name(id).to_string(),
        })
        .collect()
}

fn recompute_step(curriculum: &Curriculum, completed: CompletedSet) -> (CompletedSet, CoreStep) {
    let Recomputed {
        completed,
        view,
        evicted,
    } = recompute(curriculum, completed);

    let step = CoreStep {
        commands: vec![
            CoreCommand::Render(view),
            CoreCommand::Persist(completed.clone()),
        ],
        evicted,
    };
    (completed, step)
}

/// Handle a refresh: recompute, render, persist.
pub fn handle_refresh(curriculum: &Curriculum, completed: CompletedSet) -> (CompletedSet, CoreStep) {
    recompute_step(curriculum, completed)
}

/// Handle a click on `id`.
///
/// - Unknown id: notify, no state change.
/// - Locked course: notify with the missing prerequisites, no state change.
/// - Otherwise: toggle, then recompute.
pub fn handle_click(
    curriculum: &Curriculum,
    completed: CompletedSet,
    id: &str,
) -> (CompletedSet, CoreStep) {
    let Some(course) = curriculum.get(id) else {
        debug!(course = %id, "click on unknown course ignored");
        let step = CoreStep {
            commands: vec![CoreCommand::Notify(Notification::UnknownCourse(
                id.to_string(),
            ))],
            evicted: Vec::new(),
        };
        return (completed, step);
    };

    if curriculum.is_locked(course, &completed) {
        let missing = missing_prerequisites(curriculum, &completed, course);
        let missing_ids: Vec<&str> = missing.iter().map(|m| m.id.as_str()).collect();
        info!(course = %course.id, missing = ?missing_ids, "click on locked course");
        let step = CoreStep {
            commands: vec![CoreCommand::Notify(Notification::Blocked {
                course: course.name.clone(),
                missing: missing.into_iter().map(|m| m.name).collect(),
            })],
            evicted: Vec::new(),
        };
        return (completed, step);
    }

    let was_completed = completed.contains(&course.id);
    info!(
        course = %course.id,
        completed = !was_completed,
        "toggling course completion"
    );
    recompute_step(curriculum, toggle(completed, &course.id))
}

/// Handle a reset: clear the set, recompute, persist.
pub fn handle_reset(curriculum: &Curriculum, completed: CompletedSet) -> (CompletedSet, CoreStep) {
    info!(cleared = completed.len(), "resetting progress");
    recompute_step(curriculum, CompletedSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate;

    fn chain() -> Curriculum {
        let cfg = parse_and_validate(
            r#"
[[course]]
id = "A"
name = "Anatomía"

[[course]]
id = "C"
requires = "B"

[[course]]
id = "B"
name = "Bioquímica"
requires = "A"
"#,
        )
        .unwrap();
        Curriculum::from_config(&cfg)
    }

    fn set(ids: &[&str]) -> CompletedSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn courses_without_prerequisites_are_unlocked() {
        let r = recompute(&chain(), CompletedSet::new());
        let a = r.view.get("A").unwrap();
        assert!(!a.locked);
        assert!(!a.completed);
        assert!(r.view.get("B").unwrap().locked);
    }

    #[test]
    fn eviction_cascades_regardless_of_declaration_order() {
        // C is declared before B, so a single pass would miss it.
        let r = recompute(&chain(), set(&["B", "C"]));
        assert!(r.completed.is_empty());
        assert_eq!(r.evicted, vec!["B".to_string(), "C".to_string()]);
        assert!(r.view.courses.iter().all(|c| !c.completed));
    }

    #[test]
    fn recompute_is_idempotent() {
        let c = chain();
        let first = recompute(&c, set(&["B", "C"]));
        let second = recompute(&c, first.completed.clone());
        assert_eq!(second.completed, first.completed);
        assert_eq!(second.view, first.view);
        assert!(second.evicted.is_empty());
    }

    #[test]
    fn toggle_twice_restores_set() {
        let original = set(&["A"]);
        let twice = toggle(toggle(original.clone(), "B"), "B");
        assert_eq!(twice, original);
    }

    #[test]
    fn click_on_locked_course_reports_names_and_keeps_state() {
        let c = chain();
        let (after, step) = handle_click(&c, CompletedSet::new(), "B");
        assert!(after.is_empty());
        assert_eq!(
            step.commands,
            vec![CoreCommand::Notify(Notification::Blocked {
                course: "Bioquímica".into(),
                missing: vec!["Anatomía".into()],
            })]
        );
    }

    #[test]
    fn click_on_unknown_course_is_a_notification() {
        let (after, step) = handle_click(&chain(), set(&["A"]), "Z");
        assert_eq!(after, set(&["A"]));
        assert_eq!(
            step.commands,
            vec![CoreCommand::Notify(Notification::UnknownCourse("Z".into()))]
        );
    }

    #[test]
    fn click_on_unlocked_course_renders_then_persists() {
        let (after, step) = handle_click(&chain(), CompletedSet::new(), "A");
        assert_eq!(after, set(&["A"]));
        assert!(matches!(step.commands[0], CoreCommand::Render(_)));
        assert_eq!(step.commands[1], CoreCommand::Persist(set(&["A"])));
    }

    #[test]
    fn uncompleting_a_prerequisite_evicts_dependents() {
        let (after, step) = handle_click(&chain(), set(&["A", "B", "C"]), "A");
        assert!(after.is_empty());
        assert_eq!(step.evicted, vec!["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn reset_clears_and_persists_empty_set() {
        let (after, step) = handle_reset(&chain(), set(&["A", "B"]));
        assert!(after.is_empty());
        assert_eq!(step.commands[1], CoreCommand::Persist(CompletedSet::new()));
    }

    #[test]
    fn missing_prerequisites_fall_back_to_raw_id() {
        let cfg = parse_and_validate(
            r#"
[[course]]
id = "X"
requires = "ghost, Y"

[[course]]
id = "Y"
name = "Yoga"
"#,
        )
        .unwrap();
        let c = Curriculum::from_config(&cfg);
        let x = c.get("X").unwrap();
        let missing = missing_prerequisites(&c, &CompletedSet::new(), x);
        let names: Vec<&str> = missing.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ghost", "Yoga"]);
    }
}
