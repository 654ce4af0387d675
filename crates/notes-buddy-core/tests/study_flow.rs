//! End-to-end flows across the domain crate.

use notes_buddy_core::generate::NoDelay;
use notes_buddy_core::models::SummarizeForm;
use notes_buddy_core::models::test_gen::TestConfig;
use notes_buddy_core::{
    ContentGenerator, FileRegistry, PomodoroSession, SimulatedGenerator, TickOutcome, TimerMode,
    TimerSettings, UploadedFile,
};

#[tokio::test]
async fn upload_select_and_summarize() {
    let mut registry = FileRegistry::new();
    registry.add(UploadedFile::new("bio.pdf", 2048));
    assert_eq!(registry.files()[0].display_size(), "2.0 KB");

    let mut form = SummarizeForm::new();
    form.select_file(&registry, "bio.pdf");
    assert!(!form.input.is_empty());
    assert!(form.can_submit());

    let generator = SimulatedGenerator::new(NoDelay);
    form.pending = true;
    let summary = generator.summarize(&form.input).await.unwrap();
    form.output = summary;
    form.pending = false;

    assert!(form.has_output());
    assert!(form.output.contains("**Key Points:**"));

    registry.remove("bio.pdf");
    assert_eq!(registry.get_content("bio.pdf"), "");
}

#[tokio::test]
async fn uploaded_file_feeds_test_generator() {
    let mut registry = FileRegistry::new();
    registry.add(UploadedFile::new("chem.docx", 4096));

    let config = TestConfig {
        file_name: registry.names()[0].clone(),
        test_type: "true-false".into(),
        count: "15".into(),
        difficulty: "easy".into(),
    };
    let request = config.validate().unwrap();
    let test = SimulatedGenerator::new(NoDelay)
        .generate_test(&request)
        .await
        .unwrap();
    assert_eq!(test.questions.len(), 15);
    assert_eq!(test.summary_line(), "Created 15 questions from chem.docx");
}

fn finish(session: &mut PomodoroSession) -> TickOutcome {
    session.start();
    loop {
        match session.tick() {
            TickOutcome::Counting => {
                assert!(session.seconds_remaining() <= session.loaded_seconds());
            }
            outcome => return outcome,
        }
    }
}

#[test]
fn pomodoro_full_cycle() {
    let settings = TimerSettings {
        work_minutes: 1,
        short_break_minutes: 1,
        long_break_minutes: 2,
    };
    let mut session = PomodoroSession::new(settings);
    let mut modes = Vec::new();

    for _ in 0..8 {
        match finish(&mut session) {
            TickOutcome::Completed { next, .. } => {
                assert!(!session.is_running());
                assert_eq!(session.seconds_remaining(), settings.seconds(next));
                modes.push(next);
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    assert_eq!(
        modes,
        vec![
            TimerMode::ShortBreak,
            TimerMode::Work,
            TimerMode::ShortBreak,
            TimerMode::Work,
            TimerMode::ShortBreak,
            TimerMode::Work,
            TimerMode::LongBreak,
            TimerMode::Work,
        ]
    );
    assert_eq!(session.completed_work_cycles(), 4);
}

#[test]
fn pomodoro_progress_stays_bounded() {
    let mut session = PomodoroSession::default();
    session.start();
    for _ in 0..90 {
        session.tick();
        let progress = session.progress_percent();
        assert!((0.0..=100.0).contains(&progress));
    }
    session.pause();
    session.set_duration(TimerMode::Work, 5).unwrap();
    assert_eq!(session.loaded_seconds(), 25 * 60);
    session.reset();
    assert_eq!(session.seconds_remaining(), 5 * 60);
}
