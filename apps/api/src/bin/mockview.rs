//! Terminal stand-in for the browser UI: runs one interview against a
//! running `mockview-api` and prints the results dashboard.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mockview_api::catalog::roles::title_for;
use mockview_api::config::DEFAULT_QUESTION_TIME_LIMIT;
use mockview_api::models::result::SkillStatus;
use mockview_api::session::{
    DriverSettings, HttpBackend, InterviewBackend, SessionCommand, SessionDriver, SessionOutcome,
    SessionSnapshot,
};

/// Seconds between countdown reminders while recording.
const REMINDER_EVERY: u32 = 30;

/// practice a mock interview from the terminal
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// base URL of a running mockview-api
    #[clap(long, env = "MOCKVIEW_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// role to interview for; lists the available roles when omitted
    #[clap(short, long)]
    role: Option<String>,

    /// seconds allowed per question once recording starts (at least 1)
    #[clap(
        short = 't',
        long,
        env = "QUESTION_TIME_LIMIT",
        default_value_t = DEFAULT_QUESTION_TIME_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    time_limit: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mockview_api=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let backend = Arc::new(HttpBackend::new(cli.base_url.as_str())?);

    let roles = backend.roles().await.context("Failed to load roles")?;

    let Some(role) = cli.role else {
        println!("Available roles:");
        for role in roles {
            println!(
                "  {:<22} {} ({}, {} questions)",
                role.id, role.title, role.level, role.questions
            );
        }
        return Ok(());
    };

    let settings = DriverSettings {
        time_limit: cli.time_limit,
        ..DriverSettings::default()
    };
    let driver = SessionDriver::prepare(backend, &role, settings)
        .await
        .context("Failed to load questions")?;

    println!("{} interview", title_for(&roles, &role));
    println!("Commands: /record  /stop  /next  /quit; any other line is your answer.");

    let snapshots = driver.subscribe();
    let (tx, rx) = mpsc::channel(16);
    let session = tokio::spawn(driver.run(rx));
    let printer = tokio::spawn(print_progress(snapshots));

    // Blocking stdin on its own thread so exiting never waits for a line.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let Some(command) = parse_command(&line) else {
                continue;
            };
            let quit = command == SessionCommand::Abort;
            if tx.blocking_send(command).is_err() || quit {
                break;
            }
        }
    });

    let outcome = session.await.context("Interview session task failed")?;
    printer.abort();
    print_results(&outcome);
    Ok(())
}

fn parse_command(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    match line {
        "" => None,
        "/record" | "/r" => Some(SessionCommand::BeginAnswer),
        "/stop" | "/s" => Some(SessionCommand::StopAnswer),
        "/next" | "/n" => Some(SessionCommand::Next),
        "/quit" | "/q" => Some(SessionCommand::Abort),
        text => Some(SessionCommand::Capture(text.to_string())),
    }
}

async fn print_progress(mut snapshots: tokio::sync::watch::Receiver<SessionSnapshot>) {
    let mut last: Option<SessionSnapshot> = None;
    loop {
        let snap = snapshots.borrow_and_update().clone();
        print_changes(last.as_ref(), &snap);
        last = Some(snap);
        if snapshots.changed().await.is_err() {
            break;
        }
    }
}

fn print_changes(last: Option<&SessionSnapshot>, snap: &SessionSnapshot) {
    if last.map(|l| &l.question) != Some(&snap.question) {
        if let Some(question) = &snap.question {
            println!(
                "\nQuestion {} of {}: {question}",
                snap.answered + 1,
                snap.total_questions
            );
        }
    }

    let was_recording = last.is_some_and(|l| l.recording);
    if snap.recording && !was_recording {
        println!("Recording... {} left", snap.countdown_label);
    } else if !snap.recording && was_recording && snap.question.is_some() {
        println!("Stopped with {} left", snap.countdown_label);
    } else if snap.recording
        && last.is_some_and(|l| l.countdown != snap.countdown)
        && snap.countdown % REMINDER_EVERY == 0
    {
        println!(
            "{} left (stress {:.0}% {}, confidence {:.0}% {})",
            snap.countdown_label,
            snap.stress,
            snap.stress_level,
            snap.confidence,
            snap.confidence_level
        );
    }
}

fn status_label(status: SkillStatus) -> &'static str {
    match status {
        SkillStatus::Excellent => "Excellent",
        SkillStatus::Good => "Good",
        SkillStatus::Fair => "Fair",
        SkillStatus::NeedsImprovement => "Needs Work",
    }
}

fn print_results(outcome: &SessionOutcome) {
    let session = match outcome {
        SessionOutcome::Aborted(session) => {
            println!(
                "\nInterview ended after {} of {} questions.",
                session.answers().len(),
                session.questions().len()
            );
            return;
        }
        SessionOutcome::Completed(session) => session,
    };

    let result = session.result_or_demo();
    if session.result().is_none() {
        println!("\nCould not reach the scoring service; showing a sample result.");
    }

    println!("\nOverall score:   {}", result.overall_score);
    println!("Technical:       {}", result.technical_score);
    println!("Soft skills:     {}", result.soft_skills_score);
    println!("Duration:        {}", result.interview_duration);

    println!("\nSkills");
    for skill in &result.skill_breakdown {
        println!(
            "  {:<20} {:>3}  {}",
            skill.skill,
            skill.score,
            status_label(skill.status)
        );
    }

    println!("\nFeedback");
    for entry in &result.feedback {
        println!("  - {}: {}", entry.title, entry.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("/r"), Some(SessionCommand::BeginAnswer));
        assert_eq!(parse_command("/stop"), Some(SessionCommand::StopAnswer));
        assert_eq!(parse_command("/next\n"), Some(SessionCommand::Next));
        assert_eq!(parse_command("/quit"), Some(SessionCommand::Abort));
        assert_eq!(
            parse_command(" I led the migration. "),
            Some(SessionCommand::Capture("I led the migration.".to_string()))
        );
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["mockview", "--role", "devops-engineer"]);
        assert_eq!(cli.role.as_deref(), Some("devops-engineer"));
        assert!(cli.time_limit > 0);
    }

    #[test]
    fn test_cli_rejects_zero_time_limit() {
        assert!(Cli::try_parse_from(["mockview", "--time-limit", "0"]).is_err());
        let cli = Cli::try_parse_from(["mockview", "-t", "1"]).unwrap();
        assert_eq!(cli.time_limit, 1);
    }

    #[test]
    fn test_header_title_uses_listed_role() {
        let roles = mockview_api::catalog::roles::default_roles();
        assert_eq!(title_for(&roles, "ui-ux-designer"), "UI/UX Designer");
        assert_eq!(title_for(&roles, "data-scientist"), "Data Scientist");
    }
}
