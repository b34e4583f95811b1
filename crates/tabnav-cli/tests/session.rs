//! Transcripts of scripted sessions.

use anyhow::Context;
use tabnav_cli::report::render_error;
use tabnav_cli::script::parse_script;
use tabnav_cli::session::{Session, SessionConfig};
use tabnav_core::{HideStrategy, NavigationStrategy, SavedState};
use tabnav_persistence::{load_state, save_state};

fn run(session: &mut Session, script: &str) {
    session.run(&parse_script(script).unwrap()).unwrap();
}

fn replay(config: &SessionConfig, script: &str) -> Session {
    let mut session = Session::open(config, None).unwrap();
    run(&mut session, script);
    session
}

fn transcript(session: &Session) -> String {
    session.transcript().join("\n")
}

#[test]
fn switches_before_a_flush_reuse_pending_units() {
    let config = SessionConfig {
        tabs: 2,
        deferred: true,
        ..SessionConfig::default()
    };
    let session = replay(&config, "switch 1\nswitch 0\nflush");

    insta::assert_snapshot!(transcript(&session), @r"
    > initialize
      Add TabA
      Commit
      = tab 0: TabA
    > switch 1
      Detach TabA
      Add TabB
      Commit
      = tab 1: TabB
    > switch 0
      Detach TabB
      Attach TabA
      Commit
      = tab 0: TabA
    > flush
      Flush 3
    ");
    assert_eq!(session.host().visible(), ["TabA"]);
}

#[test]
fn unique_history_pops_back_into_the_previous_tab() {
    let config = SessionConfig {
        strategy: NavigationStrategy::UniqueTabHistory,
        ..SessionConfig::default()
    };
    let session = replay(&config, "switch 1\npush Feed\npop 2");

    insta::assert_snapshot!(transcript(&session), @r"
    > initialize
      Add TabA
      Commit
      = tab 0: TabA
    > switch 1
      Detach TabA
      Add TabB
      Commit
      = tab 1: TabB
    > push Feed
      Detach TabB
      Add Feed
      Commit
      = push: Feed
    > pop 2
      Remove Feed
      Attach TabB
      Commit
      Detach TabB
      Attach TabA
      Commit
      = pop: TabB
      = tab 0: TabA
      = tab bar: select 0
    ");
}

#[test]
fn hide_strategy_and_commit_mode_show_in_the_log() {
    let config = SessionConfig {
        tabs: 1,
        hide_strategy: HideStrategy::Hide,
        allow_state_loss: true,
        ..SessionConfig::default()
    };
    let session = replay(&config, "push Feed\nreplace Settings");

    insta::assert_snapshot!(transcript(&session), @r"
    > initialize
      Add TabA
      Commit (allowing state loss)
      = tab 0: TabA
    > push Feed
      Hide TabA
      Add Feed
      Commit (allowing state loss)
      = push: Feed
    > replace Settings
      Replace Settings
      Commit (allowing state loss)
      = replace: Settings
    ");
    assert_eq!(session.current().as_deref(), Some("Settings"));
}

#[test]
fn dialogs_replace_each_other() {
    let session = replay(
        &SessionConfig::default(),
        "dialog Confirm\ndialog Alert\ndismiss",
    );

    insta::assert_snapshot!(transcript(&session), @r"
    > initialize
      Add TabA
      Commit
      = tab 0: TabA
    > dialog Confirm
      Dialog Confirm
    > dialog Alert
      Dismiss Confirm
      Dialog Alert
    > dismiss
      Dismiss Alert
    ");
    assert!(session.host().dialogs().is_empty());
}

#[test]
fn dialogs_after_saving_state_are_refused() {
    let session = replay(
        &SessionConfig::default(),
        "save-state\ndialog Confirm\ndismiss",
    );

    insta::assert_snapshot!(transcript(&session), @r"
    > initialize
      Add TabA
      Commit
      = tab 0: TabA
    > save-state
      State saved
    > dialog Confirm
      = recovered: could not show dialog: dialog could not be shown: host state has already been saved
    > dismiss
      Dismiss Confirm
    ");
    assert!(session.host().dialogs().is_empty());
}

#[test]
fn saved_state_file_resumes_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nav.json");

    let first = replay(&SessionConfig::default(), "switch 1\npush Feed");
    save_state(&first.save_state(), &path).unwrap();

    let saved = load_state(&path).unwrap();
    let mut second = Session::open(&SessionConfig::default(), Some(&saved)).unwrap();
    assert_eq!(second.current().as_deref(), Some("Feed"));
    run(&mut second, "pop\npush Next");

    insta::assert_snapshot!(transcript(&second), @r"
    > restore
    > pop 1
      Remove Feed
      Attach TabB
      Commit
      = pop: TabB
    > push Next
      Detach TabB
      Add Next
      Commit
      = push: Next
    ");
    assert_eq!(second.stacks()[1].tags, ["TabB2", "Next4"]);
}

#[test]
fn mismatched_state_starts_over() {
    let saved = SavedState::new(2, Some(1))
        .with_stacks(vec![vec!["TabA1".into()], vec!["TabB2".into()]]);
    let session = Session::open(&SessionConfig::default(), Some(&saved)).unwrap();

    insta::assert_snapshot!(transcript(&session), @r"
    > restore
      Remove TabA
      Remove TabB
      Commit
      Add TabA
      Commit
      = recovered: could not restore navigation state: saved navigation state was rejected: Invalid navigation state: 2 stacks saved for 3 tabs
      = tab 0: TabA
    ");
}

#[test]
fn failing_step_keeps_the_earlier_transcript() {
    let mut session = Session::open(&SessionConfig::default(), None).unwrap();
    let error = session
        .run(&parse_script("push Feed\npop 3\npop").unwrap())
        .unwrap_err();

    assert_eq!(
        format!("{error:#}"),
        "step 3 (`pop 1`) failed: unsupported navigation operation: \
         the root unit cannot be popped; replace it instead"
    );
    assert_eq!(session.transcript().last().unwrap(), "  = pop: TabA");
}

#[test]
fn unreadable_state_file_explains_itself() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nav.json");
    std::fs::write(&path, "{ not json").unwrap();

    let error = load_state(&path).context("load state nav.json").unwrap_err();
    let rendered = render_error(&error);
    assert!(rendered.starts_with("error: load state nav.json: Failed to deserialize"));
    assert!(rendered.contains("\n  An error occurred while reading the navigation state."));
    assert!(rendered.ends_with("\n  hint: Delete the state file to start from the initial tabs."));
}
