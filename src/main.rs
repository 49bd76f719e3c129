use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Duration, Local, Utc};
use clap::{Args, Parser, Subcommand};
use faculty_hire::config::AppConfig;
use faculty_hire::error::AppError;
use faculty_hire::telemetry;
use faculty_hire::workflows::hiring::{
    hiring_router, score, HiringService, MemoryHiringRepository, SubScores, VacancyId,
    VacancyRecord, VacancyStatus,
};
use faculty_hire::workflows::renewal::{
    renewal_router, ContractId, ContractRecord, ContractStatus, DeanRecommendation,
    MemoryContractRepository, RenewalService,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Faculty Hire",
    about = "Run the faculty hiring and contract-renewal service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Resolve a rank and hourly rate for a set of evaluation sub-scores
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Seed a demo vacancy and contract so endpoints can be exercised
    #[arg(long)]
    seed_demo: bool,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Educational attainment subtotal
    #[arg(long)]
    educational: i32,
    /// Teaching/industry experience subtotal
    #[arg(long)]
    experience: i32,
    /// Professional development subtotal
    #[arg(long)]
    professional_development: i32,
    /// Technological proficiency subtotal
    #[arg(long)]
    technological: i32,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score(args) => {
            run_score(args);
            Ok(())
        }
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let hiring_repository = Arc::new(MemoryHiringRepository::new());
    let contract_repository = Arc::new(MemoryContractRepository::new());
    if args.seed_demo {
        seed_demo(&hiring_repository, &contract_repository);
    }

    let hiring_service = Arc::new(HiringService::new(hiring_repository));
    let renewal_service = Arc::new(RenewalService::new(contract_repository));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(hiring_router(hiring_service))
        .merge(renewal_router(renewal_service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "faculty hiring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn seed_demo(
    hiring: &Arc<MemoryHiringRepository>,
    contracts: &Arc<MemoryContractRepository>,
) {
    use faculty_hire::workflows::hiring::HiringRepository;
    use faculty_hire::workflows::renewal::ContractRepository;

    let today = Local::now().date_naive();

    let vacancy = VacancyRecord {
        id: VacancyId("vac-000001".to_string()),
        title: "Instructor, Computer Studies".to_string(),
        college: "College of Computer Studies".to_string(),
        status: VacancyStatus::Open,
        description: "Full-time teaching position for the incoming semester.".to_string(),
        requirements: vec![
            "Master's degree or ongoing graduate studies".to_string(),
            "At least one year of teaching experience".to_string(),
        ],
        posted_on: today,
    };
    if hiring.insert_vacancy(vacancy).is_err() {
        info!("demo vacancy already present, skipping seed");
    }

    let contract = ContractRecord {
        id: ContractId("con-000001".to_string()),
        faculty_name: "A. Reyes".to_string(),
        college: "College of Computer Studies".to_string(),
        job_title: "Lecturer II".to_string(),
        contract_no: "2026-014".to_string(),
        end_date: today + Duration::days(60),
        status: ContractStatus::Expiring,
        recommendation: DeanRecommendation::Pending,
        remarks: None,
        decided_by: None,
        decided_at: None,
    };
    if contracts.insert(contract).is_err() {
        info!("demo contract already present, skipping seed");
    }
}

fn run_score(args: ScoreArgs) {
    let scores = SubScores {
        educational: args.educational,
        experience: args.experience,
        professional_development: args.professional_development,
        technological: args.technological,
    };
    let summary = score(&scores);

    println!("Evaluation summary ({})", Utc::now().date_naive());
    println!(
        "- Sub-scores: educational {}, experience {}, professional development {}, technological {}",
        scores.educational,
        scores.experience,
        scores.professional_development,
        scores.technological
    );
    println!("- Total score: {}", summary.total_score);
    println!(
        "- Rank: {} (rate per hour: {})",
        summary.rank, summary.rate_per_hour
    );
    println!(
        "- Passing: {}",
        if summary.passing { "yes" } else { "no" }
    );
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
