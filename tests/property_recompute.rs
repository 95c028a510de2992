// tests/property_recompute.rs
mod common;
use crate::common::builders::{CourseBuilder, CurriculumBuilder};

use std::collections::BTreeSet;

use proptest::prelude::*;
use ramos::curriculum::Curriculum;
use ramos::engine::{recompute, toggle};
use ramos::progress::CompletedSet;

// Arbitrary curricula, cycles and unknown ids included: course i may require
// any index in 0..=num_courses, where index num_courses names no course.
fn curriculum_strategy(max_courses: usize) -> impl Strategy<Value = Curriculum> {
    (1..=max_courses).prop_flat_map(|num_courses| {
        proptest::collection::vec(
            proptest::collection::vec(0..=num_courses, 0..4),
            num_courses,
        )
        .prop_map(move |raw_deps| {
            let mut builder = CurriculumBuilder::new();
            for (i, deps) in raw_deps.into_iter().enumerate() {
                let mut course = CourseBuilder::new(&format!("c{i}"));
                for dep in deps {
                    course = course.requires(&format!("c{dep}"));
                }
                builder = builder.with_course(course.build());
            }
            builder.build_curriculum()
        })
    })
}

fn completed_strategy(max_courses: usize) -> impl Strategy<Value = CompletedSet> {
    proptest::collection::btree_set(0..=max_courses, 0..=max_courses)
        .prop_map(|ids: BTreeSet<usize>| ids.into_iter().map(|i| format!("c{i}")).collect())
}

proptest! {
    #[test]
    fn recompute_is_idempotent(
        curriculum in curriculum_strategy(8),
        completed in completed_strategy(8),
    ) {
        let first = recompute(&curriculum, completed);
        let second = recompute(&curriculum, first.completed.clone());

        prop_assert_eq!(&second.completed, &first.completed);
        prop_assert_eq!(&second.view, &first.view);
        prop_assert!(second.evicted.is_empty());
    }

    #[test]
    fn locked_iff_some_prerequisite_unmet(
        curriculum in curriculum_strategy(8),
        completed in completed_strategy(8),
    ) {
        let result = recompute(&curriculum, completed);

        for course in curriculum.courses() {
            let view = result.view.get(&course.id).unwrap();
            let unmet = course
                .prerequisites
                .iter()
                .any(|p| !(curriculum.contains(p) && result.completed.contains(p)));

            prop_assert_eq!(view.locked, unmet);
            if course.prerequisites.is_empty() {
                prop_assert!(!view.locked);
            }
            prop_assert!(!(view.locked && view.completed));
            prop_assert_eq!(view.completed, result.completed.contains(&course.id) && !view.locked);
            if view.locked {
                prop_assert!(!result.completed.contains(&course.id));
            }
        }
    }

    #[test]
    fn recompute_only_removes_ids(
        curriculum in curriculum_strategy(8),
        completed in completed_strategy(8),
    ) {
        let result = recompute(&curriculum, completed.clone());
        for id in result.completed.iter() {
            prop_assert!(completed.contains(id));
        }
        prop_assert_eq!(result.completed.len() + result.evicted.len(), completed.len());
    }

    #[test]
    fn double_toggle_restores_set(
        completed in completed_strategy(8),
        id in 0..8usize,
    ) {
        let id = format!("c{id}");
        let twice = toggle(toggle(completed.clone(), &id), &id);
        prop_assert_eq!(twice, completed);
    }
}
