mod common;

use std::collections::HashSet;

use common::{MockUnit, builder, tab};
use proptest::prelude::*;
use tabnav_core::{NavControllerBuilder, NavError, UnsupportedOperation};

#[derive(Debug, Clone, Copy)]
enum Step {
    Push,
    Pop(usize),
    Clear,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Push),
        2 => (1usize..4).prop_map(Step::Pop),
        1 => Just(Step::Clear),
    ]
}

proptest! {
    #[test]
    fn stack_depth_follows_pushes_and_pops(steps in prop::collection::vec(step(), 0..40)) {
        let mut nav = builder(&["Root"]).build().unwrap();
        nav.initialize(Some(tab(0)), None).unwrap();
        let mut depth = 0usize;

        for step in steps {
            match step {
                Step::Push => {
                    nav.push_fragment(MockUnit::new("Screen"), None);
                    depth += 1;
                }
                Step::Pop(requested) => {
                    let result = nav.pop_fragments(requested, None);
                    if depth == 0 {
                        prop_assert_eq!(
                            result,
                            Err(NavError::Unsupported(UnsupportedOperation::PopRoot))
                        );
                    } else {
                        prop_assert_eq!(result, Ok(true));
                        depth -= requested.min(depth);
                    }
                }
                Step::Clear => {
                    nav.clear_stack(None, None).unwrap();
                    depth = 0;
                }
            }

            let stack = nav.current_stack().unwrap();
            prop_assert_eq!(stack.len(), depth + 1);
            prop_assert_eq!(nav.is_root_fragment(), depth == 0);
            prop_assert_eq!(nav.host().visible().len(), 1);
        }
    }

    #[test]
    fn tags_are_never_reused(first in 0usize..6, second in 0usize..6, switch_to in 0usize..3) {
        let mut nav = builder(&["A", "B", "C"]).build().unwrap();
        nav.initialize(Some(tab(0)), None).unwrap();
        for _ in 0..first {
            nav.push_fragment(MockUnit::new("X"), None);
        }
        nav.switch_tab(tab(switch_to), None).unwrap();
        let saved = nav.save_state();

        let mut restored = NavControllerBuilder::new(nav.into_host())
            .root_units(["A", "B", "C"].iter().map(|name| MockUnit::new(name)).collect())
            .build()
            .unwrap();
        restored.initialize(None, Some(&saved)).unwrap();
        for _ in 0..second {
            restored.push_fragment(MockUnit::new("X"), None);
        }
        restored.clear_stack(Some(tab(0)), None).unwrap();
        for _ in 0..second {
            restored.push_fragment(MockUnit::new("X"), None);
        }

        let mut seen = HashSet::new();
        for index in 0..3 {
            for tag in restored.stack_tags(tab(index)).unwrap() {
                prop_assert!(seen.insert(tag.as_str().to_string()), "duplicate tag {}", tag);
            }
        }
        prop_assert!(seen.len() as u64 <= restored.tag_count());
    }
}
