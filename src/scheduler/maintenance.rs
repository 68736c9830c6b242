use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::log_store::LogStore,
    error::AppError,
    service::{
        host::process_memory_bytes,
        security::{SecurityService, LOG_RETENTION_DAYS},
    },
    util::format::bytes_to_mb,
};

/// Every five minutes, on the minute.
const MEMORY_REPORT_SCHEDULE: &str = "0 */5 * * * *";

/// Daily at 03:00 UTC.
const RETENTION_SWEEP_SCHEDULE: &str = "0 0 3 * * *";

/// Starts the maintenance scheduler
///
/// Runs two jobs:
/// - a memory report every 5 minutes
/// - a retention sweep of the verification logs every day at 03:00 UTC
///
/// # Arguments
/// - `store`: Log store to sweep
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler, to be shut down on exit
/// - `Err(AppError::SchedulerErr)` - A job could not be created or the scheduler failed
///   to start
pub async fn start_scheduler(store: LogStore) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let memory_job = Job::new_async(MEMORY_REPORT_SCHEDULE, |_uuid, _lock| {
        Box::pin(async move {
            report_memory_usage();
        })
    })?;

    let job_store = store.clone();
    let sweep_job = Job::new_async(RETENTION_SWEEP_SCHEDULE, move |_uuid, _lock| {
        let store = job_store.clone();

        Box::pin(async move {
            SecurityService::new(&store)
                .clean_old_logs(LOG_RETENTION_DAYS)
                .await;
        })
    })?;

    scheduler.add(memory_job).await?;
    scheduler.add(sweep_job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(scheduler)
}

fn report_memory_usage() {
    match process_memory_bytes() {
        Some(bytes) => tracing::info!("Memory usage: {} MB resident", bytes_to_mb(bytes)),
        None => tracing::warn!("Could not read process memory usage"),
    }
}
