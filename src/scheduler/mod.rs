//! Cron jobs that run alongside the gateway connection.

pub mod maintenance;
