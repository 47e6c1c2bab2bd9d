mod store;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use jobportal::gateway::{ReqwestTransport, TransportError};
use jobportal::listing::{self, DEFAULT_PAGE_SIZE, Timestamped};
use jobportal::session::Navigator;
use jobportal::types::{
    AlertDraft, ApplyRequest, Id, Interview, Job, JobDraft, JobFilters, Registration, Role, SavedJob,
};
use jobportal::{ApiError, AuthFlowError, ClientConfig, PortalClient, api};
use serde_json::Value;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::store::FileStore;

type Client = PortalClient<ReqwestTransport>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
    #[error("{}", .0.user_message())]
    Auth(#[from] AuthFlowError),
    #[error("could not create HTTP client: {0}")]
    Transport(#[from] TransportError),
    #[error("not logged in; run `jobportal-cli login` first")]
    NotLoggedIn,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "jobportal-cli", about = "Job portal command-line client")]
struct Cli {
    #[arg(long, env = "JOBPORTAL_API_URL")]
    base_url: Option<String>,

    #[arg(long, env = "JOBPORTAL_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Print raw JSON instead of a text summary.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "JOBPORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    Register(RegisterArgs),
    Jobs(JobsCommand),
    Apply {
        job_id: Id,
        #[arg(long, default_value = "")]
        cover_letter: String,
    },
    Applications {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    Saved(SavedCommand),
    Interviews {
        #[arg(long, conflicts_with = "past")]
        upcoming: bool,
        #[arg(long)]
        past: bool,
    },
    Alerts(AlertsCommand),
    Notifications {
        #[arg(long)]
        mark_read: Option<Id>,
        /// Application status updates instead of job alert matches.
        #[arg(long)]
        status: bool,
    },
    Analytics,
    Company(CompanyCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, env = "JOBPORTAL_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long, value_parser = parse_role)]
    role: Role,
    #[arg(long, default_value = "")]
    company_name: String,
    #[arg(long, default_value = "")]
    company_website: String,
    #[arg(long, default_value = "")]
    company_description: String,
}

#[derive(Args, Debug)]
struct JobsCommand {
    #[command(subcommand)]
    command: JobsSubcommand,
}

#[derive(Subcommand, Debug)]
enum JobsSubcommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        job_type: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    Show {
        job_id: Id,
    },
    Mine,
    Recommended,
    Create(JobCreateArgs),
    Delete {
        job_id: Id,
    },
}

#[derive(Args, Debug)]
struct JobCreateArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    location: String,
    #[arg(long, default_value = "full-time")]
    job_type: String,
    #[arg(long)]
    salary_min: Option<String>,
    #[arg(long)]
    salary_max: Option<String>,
    #[arg(long)]
    skills: Option<String>,
    #[arg(long)]
    external_link: Option<String>,
}

#[derive(Args, Debug)]
struct SavedCommand {
    #[command(subcommand)]
    command: SavedSubcommand,
}

#[derive(Subcommand, Debug)]
enum SavedSubcommand {
    List,
    Add { job_id: Id },
    Remove { job_id: Id },
}

#[derive(Args, Debug)]
struct AlertsCommand {
    #[command(subcommand)]
    command: AlertsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AlertsSubcommand {
    List,
    Create {
        #[arg(long, default_value = "")]
        keywords: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        job_type: String,
    },
    Delete {
        alert_id: Id,
    },
}

#[derive(Args, Debug)]
struct CompanyCommand {
    #[command(subcommand)]
    command: CompanySubcommand,
}

#[derive(Subcommand, Debug)]
enum CompanySubcommand {
    Show,
}

/// Forced logout cannot navigate a terminal; tell the user instead.
struct TerminalNotice;

impl Navigator for TerminalNotice {
    fn redirect(&self, route: &str) {
        warn!(route, "session expired");
        eprintln!("session expired; run `jobportal-cli login` again");
    }
}

fn parse_role(raw: &str) -> Result<Role, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "candidate" => Ok(Role::Candidate),
        "recruiter" => Ok(Role::Recruiter),
        other => Err(format!("unknown role `{other}`; expected candidate or recruiter")),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    let store = FileStore::new(cli.token_file.clone().unwrap_or_else(store::default_path));
    let client = PortalClient::connect(&config, Arc::new(store), Arc::new(TerminalNotice))?;
    let out = Output { json: cli.json };

    match cli.command {
        Command::Login { username, password } => {
            let signed = client.sign_in(&username, &password).await?;
            match signed.user {
                Some(user) => println!("logged in as {} ({})", user.username, user.role.as_str()),
                None => println!("logged in; profile unavailable"),
            }
            Ok(())
        }
        Command::Logout => {
            client.sign_out();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => run_whoami(&client, out).await,
        Command::Register(args) => run_register(&client, args).await,
        Command::Jobs(jobs) => run_jobs(&client, jobs, out).await,
        Command::Apply { job_id, cover_letter } => {
            let application = api::applications::apply(client.gateway(), &ApplyRequest { job_id, cover_letter }).await?;
            println!("applied: application #{} ({})", application.id, application.status.as_str());
            Ok(())
        }
        Command::Applications { page } => run_applications(&client, page, out).await,
        Command::Saved(saved) => run_saved(&client, saved, out).await,
        Command::Interviews { upcoming, past } => run_interviews(&client, upcoming, past, out).await,
        Command::Alerts(alerts) => run_alerts(&client, alerts, out).await,
        Command::Notifications { mark_read, status } => run_notifications(&client, mark_read, status, out).await,
        Command::Analytics => {
            let analytics = api::recruiter::analytics(client.gateway()).await?;
            out.value(&analytics, || {
                let mut lines = vec![
                    format!("jobs: {} ({} active)", analytics.total_jobs, analytics.active_jobs),
                    format!(
                        "applications: {} total, {} today, {} in the last 7 days",
                        analytics.total_applications, analytics.applications_today, analytics.applications_last_7_days
                    ),
                ];
                lines.extend(
                    analytics
                        .applications_by_status
                        .iter()
                        .map(|(status, count)| format!("  {status}: {count}")),
                );
                lines
            })
        }
        Command::Company(CompanyCommand {
            command: CompanySubcommand::Show,
        }) => {
            let company = api::recruiter::company(client.gateway()).await?;
            out.value(&company, || {
                vec![
                    company.name.clone(),
                    company.website.clone().unwrap_or_default(),
                    company.location.clone().unwrap_or_default(),
                ]
            })
        }
    }
}

async fn run_whoami(client: &Client, out: Output) -> Result<(), CliError> {
    if !client.session().is_authenticated() {
        return Err(CliError::NotLoggedIn);
    }
    let Some(user) = client.start().await else {
        return Err(CliError::NotLoggedIn);
    };
    out.value(&user, || {
        vec![format!(
            "{} <{}> ({})",
            user.username,
            user.email.clone().unwrap_or_default(),
            user.role.as_str()
        )]
    })
}

async fn run_register(client: &Client, args: RegisterArgs) -> Result<(), CliError> {
    let registration = Registration {
        username: args.username,
        email: args.email,
        password: args.password,
        role: Some(args.role),
        company_name: args.company_name,
        company_website: args.company_website,
        company_description: args.company_description,
    };
    let ack = client.register(&registration).await?;
    println!("{}", ack.message.unwrap_or_else(|| "registered; you can now log in".to_owned()));
    Ok(())
}

async fn run_jobs(client: &Client, jobs: JobsCommand, out: Output) -> Result<(), CliError> {
    let gateway = client.gateway();
    match jobs.command {
        JobsSubcommand::List {
            search,
            location,
            job_type,
            page,
        } => {
            let filters = JobFilters {
                search,
                location,
                job_type,
            };
            let mut found = api::jobs::list(gateway, &filters).await?;
            if client.session().is_authenticated() {
                apply_saved_marks(&mut found, api::saved::list(gateway).await);
            }
            let page = listing::paginate(&found, page, DEFAULT_PAGE_SIZE);
            out.list(page.items, job_line)?;
            if page.pager.is_visible() {
                println!("{}", page.pager.label());
            }
            Ok(())
        }
        JobsSubcommand::Show { job_id } => {
            let job = api::jobs::get(gateway, job_id).await?;
            out.value(&job, || {
                let mut lines = vec![job_line(&job), job.description.clone()];
                if let Some(skills) = &job.skills {
                    lines.push(format!("skills: {skills}"));
                }
                lines
            })
        }
        JobsSubcommand::Mine => out.list(&api::jobs::mine(gateway).await?, job_line),
        JobsSubcommand::Recommended => out.list(&api::jobs::recommended(gateway).await?, job_line),
        JobsSubcommand::Create(args) => {
            let draft = JobDraft {
                title: args.title,
                description: args.description,
                location: args.location,
                job_type: args.job_type,
                salary_min: args.salary_min,
                salary_max: args.salary_max,
                skills: args.skills,
                external_link: args.external_link,
                is_active: true,
                ..JobDraft::default()
            };
            let job = api::jobs::create(gateway, &draft).await?;
            println!("created job #{}", job.id);
            Ok(())
        }
        JobsSubcommand::Delete { job_id } => {
            api::jobs::delete(gateway, job_id).await?;
            println!("deleted job #{job_id}");
            Ok(())
        }
    }
}

async fn run_applications(client: &Client, page: usize, out: Output) -> Result<(), CliError> {
    let mut applications = api::applications::list(client.gateway()).await?;
    listing::sort_newest_first(&mut applications);
    let page = listing::paginate(&applications, page, DEFAULT_PAGE_SIZE);
    out.list(page.items, |application| {
        let title = application.job.as_ref().map_or("Job", |job| job.title.as_str());
        let test = if application.can_take_test() { " [test pending]" } else { "" };
        format!("#{} {title}: {}{test}", application.id, application.status.as_str())
    })?;
    if page.pager.is_visible() {
        println!("{}", page.pager.label());
    }
    Ok(())
}

async fn run_saved(client: &Client, saved: SavedCommand, out: Output) -> Result<(), CliError> {
    let gateway = client.gateway();
    match saved.command {
        SavedSubcommand::List => {
            let entries = api::saved::list(gateway).await?;
            out.list(&entries, |entry| entry.job.as_ref().map_or_else(|| format!("#{} (job removed)", entry.id), job_line))
        }
        SavedSubcommand::Add { job_id } => {
            let ack = api::saved::add(gateway, job_id).await?;
            println!("{}", ack.message.unwrap_or_else(|| format!("saved job #{job_id}")));
            Ok(())
        }
        SavedSubcommand::Remove { job_id } => {
            api::saved::remove(gateway, job_id).await?;
            println!("removed job #{job_id} from saved");
            Ok(())
        }
    }
}

async fn run_interviews(client: &Client, upcoming: bool, past: bool, out: Output) -> Result<(), CliError> {
    let mut interviews = api::interviews::list(client.gateway()).await?;
    listing::sort_by_timestamp(&mut interviews);
    if !upcoming && !past {
        return out.list(&interviews, interview_line);
    }
    let split = listing::partition_by_time(interviews, time::OffsetDateTime::now_utc());
    let selected = if upcoming { split.upcoming } else { split.past };
    out.list(&selected, interview_line)
}

async fn run_alerts(client: &Client, alerts: AlertsCommand, out: Output) -> Result<(), CliError> {
    let gateway = client.gateway();
    match alerts.command {
        AlertsSubcommand::List => out.list(&api::alerts::list(gateway).await?, |alert| {
            let state = if alert.is_active { "active" } else { "paused" };
            format!(
                "#{} keywords={:?} location={:?} type={:?} ({state})",
                alert.id, alert.keywords, alert.location, alert.job_type
            )
        }),
        AlertsSubcommand::Create {
            keywords,
            location,
            job_type,
        } => {
            let draft = AlertDraft {
                keywords,
                location,
                job_type,
                ..AlertDraft::default()
            };
            let alert = api::alerts::create(gateway, &draft).await?;
            println!("created alert #{}", alert.id);
            Ok(())
        }
        AlertsSubcommand::Delete { alert_id } => {
            api::alerts::delete(gateway, alert_id).await?;
            println!("deleted alert #{alert_id}");
            Ok(())
        }
    }
}

async fn run_notifications(client: &Client, mark_read: Option<Id>, status: bool, out: Output) -> Result<(), CliError> {
    let gateway = client.gateway();
    if let Some(id) = mark_read {
        if status {
            api::alerts::mark_status_read(gateway, id).await?;
        } else {
            api::alerts::mark_notification_read(gateway, id).await?;
        }
        println!("marked #{id} as read");
        return Ok(());
    }

    if status {
        let mut items = api::alerts::status_notifications(gateway).await?;
        listing::sort_newest_first(&mut items);
        println!("{} unread", listing::unread_count(&items));
        out.list(&items, |note| {
            let marker = if note.is_read { " " } else { "*" };
            format!("{marker} #{} {}: {}", note.id, note.job_title, note.status)
        })
    } else {
        let mut items = api::alerts::notifications(gateway).await?;
        listing::sort_newest_first(&mut items);
        println!("{} unread", listing::unread_count(&items));
        out.list(&items, |note| {
            let marker = if note.is_read { " " } else { "*" };
            format!("{marker} #{} {} at {}", note.id, note.job_title, note.company_name)
        })
    }
}

/// Flag saved jobs; a failed saved-list fetch only costs the marks.
fn apply_saved_marks(jobs: &mut [Job], saved: Result<Vec<SavedJob>, ApiError>) {
    match saved {
        Ok(saved) => listing::mark_saved(jobs, &saved),
        Err(e) => warn!(error = %e, "saved jobs unavailable"),
    }
}

fn job_line(job: &Job) -> String {
    let saved = if job.is_saved { " [saved]" } else { "" };
    let company = if job.company_name.is_empty() { "-" } else { job.company_name.as_str() };
    format!("#{} {} | {company} | {} | {}{saved}", job.id, job.title, job.location, job.job_type)
}

fn interview_line(interview: &Interview) -> String {
    let when = interview.timestamp().unwrap_or("unscheduled");
    let place = interview.location.as_deref().unwrap_or("-");
    let place = if interview.has_join_link() { format!("join: {place}") } else { place.to_owned() };
    format!("#{} {} | {when} | {place}", interview.id, interview.display_title())
}

/// Renders results as pretty JSON or as one text line per item.
#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn value<T: serde::Serialize>(self, value: &T, text: impl FnOnce() -> Vec<String>) -> Result<(), CliError> {
        if self.json {
            return print_json(&serde_json::to_value(value)?);
        }
        for line in text() {
            println!("{line}");
        }
        Ok(())
    }

    fn list<T: serde::Serialize>(self, items: &[T], line: impl Fn(&T) -> String) -> Result<(), CliError> {
        if self.json {
            return print_json(&serde_json::to_value(items)?);
        }
        if items.is_empty() {
            println!("(none)");
        }
        for item in items {
            println!("{}", line(item));
        }
        Ok(())
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
